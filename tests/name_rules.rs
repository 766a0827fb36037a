use anyhow::Result;
use std::fs;
use std::path::Path;
use subforge::core::error::SubforgeError;
use subforge::core::layout::{Layout, PLACEHOLDER};
use subforge::core::scaffold::{ScaffoldOptions, create_project};
use subforge::core::validate::NameKind;
use tempfile::tempdir;

fn seed_repo(root: &Path) -> Result<()> {
    let template = root
        .join(".setup-docs")
        .join("src-template")
        .join(PLACEHOLDER);
    fs::create_dir_all(&template)?;
    fs::write(template.join("config.toml"), "name = \"{{PROJECT_NAME}}\"")?;
    fs::write(template.join("paths.toml"), "[paths]\ndata_dir = \"data\"\n")?;
    fs::write(template.join("main.py"), "print('{{PROJECT_NAME}}')\n")?;
    Ok(())
}

fn src_entry_count(layout: &Layout) -> usize {
    match fs::read_dir(layout.src_dir()) {
        Ok(entries) => entries.count(),
        Err(_) => 0,
    }
}

#[test]
fn dashed_names_are_rejected_without_side_effects() -> Result<()> {
    let tmp = tempdir()?;
    seed_repo(tmp.path())?;
    let layout = Layout::new(tmp.path());

    let err = create_project(&layout, "my-widgets", &ScaffoldOptions::default()).unwrap_err();
    assert!(matches!(err, SubforgeError::InvalidName { .. }));
    assert_eq!(src_entry_count(&layout), 0);
    assert!(!layout.scripts_dir().exists());
    Ok(())
}

#[test]
fn run_prefixed_names_are_rejected_without_side_effects() -> Result<()> {
    let tmp = tempdir()?;
    seed_repo(tmp.path())?;
    let layout = Layout::new(tmp.path());

    let err = create_project(&layout, "run_widgets", &ScaffoldOptions::default()).unwrap_err();
    assert!(matches!(err, SubforgeError::ReservedPrefix(ref n) if n == "run_widgets"));
    assert_eq!(src_entry_count(&layout), 0);
    Ok(())
}

#[test]
fn empty_and_separator_names_are_rejected() -> Result<()> {
    let tmp = tempdir()?;
    seed_repo(tmp.path())?;
    let layout = Layout::new(tmp.path());

    for bad in ["", "a/b", "..", "."] {
        let err = create_project(&layout, bad, &ScaffoldOptions::default()).unwrap_err();
        assert!(matches!(err, SubforgeError::InvalidName { .. }), "{bad:?}");
    }
    assert_eq!(src_entry_count(&layout), 0);
    Ok(())
}

#[test]
fn reserved_shared_copy_is_exactly_the_two_descriptors() -> Result<()> {
    let tmp = tempdir()?;
    seed_repo(tmp.path())?;
    let layout = Layout::new(tmp.path());

    let outcome = create_project(&layout, "core", &ScaffoldOptions::default()).expect("core");
    assert_eq!(outcome.kind, NameKind::ReservedShared);

    let mut names: Vec<String> = fs::read_dir(&outcome.dest)?
        .map(|e| e.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<std::io::Result<_>>()?;
    names.sort();
    assert_eq!(names, ["config.toml", "paths.toml"]);

    // Copied verbatim: no substitution on the reserved path.
    let copied = fs::read_to_string(outcome.dest.join("config.toml"))?;
    assert_eq!(copied, "name = \"{{PROJECT_NAME}}\"");
    Ok(())
}

#[test]
fn core_and_common_are_mutually_exclusive() -> Result<()> {
    let tmp = tempdir()?;
    seed_repo(tmp.path())?;
    let layout = Layout::new(tmp.path());

    create_project(&layout, "common", &ScaffoldOptions::default()).expect("common");
    let err = create_project(&layout, "core", &ScaffoldOptions::default()).unwrap_err();
    assert!(matches!(err, SubforgeError::Conflict));
    Ok(())
}

#[test]
fn common_is_rejected_when_core_exists() -> Result<()> {
    let tmp = tempdir()?;
    seed_repo(tmp.path())?;
    let layout = Layout::new(tmp.path());

    create_project(&layout, "core", &ScaffoldOptions::default()).expect("core");
    let err = create_project(&layout, "common", &ScaffoldOptions::default()).unwrap_err();
    assert!(matches!(err, SubforgeError::Conflict));
    Ok(())
}

#[test]
fn regular_projects_do_not_block_the_reserved_pair() -> Result<()> {
    let tmp = tempdir()?;
    seed_repo(tmp.path())?;
    let layout = Layout::new(tmp.path());

    create_project(&layout, "widgets", &ScaffoldOptions::default()).expect("widgets");
    create_project(&layout, "core", &ScaffoldOptions::default()).expect("core");
    Ok(())
}
