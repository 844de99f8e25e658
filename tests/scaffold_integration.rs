//! End-to-end tests for the scaffold: the full table written into a
//! temporary root, exercised the way the CLI drives the library.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use asv_scaffold::{mark_executable, repo_structure, write_all, EXECUTABLES, SERVICE_NAMES};
use tempfile::TempDir;

fn resolve(root: &Path, relative: &str) -> PathBuf {
    relative.split('/').fold(root.to_path_buf(), |p, seg| p.join(seg))
}

#[test]
fn test_full_run_is_complete_byte_for_byte() -> Result<()> {
    let temp = TempDir::new()?;
    let table = repo_structure();

    let summary = write_all(temp.path(), &table, false)?;
    assert_eq!(summary.written, table.len());
    assert_eq!(summary.skipped, 0);

    for (relative, content) in table.iter() {
        let target = resolve(temp.path(), relative);
        assert!(target.is_file(), "missing {}", relative);
        let on_disk = fs::read(&target)?;
        assert_eq!(on_disk, content.as_bytes(), "content mismatch for {}", relative);
    }
    Ok(())
}

#[test]
fn test_second_run_changes_nothing() -> Result<()> {
    let temp = TempDir::new()?;
    let table = repo_structure();

    write_all(temp.path(), &table, false)?;
    let second = write_all(temp.path(), &table, false)?;

    assert_eq!(second.written, 0);
    assert_eq!(second.skipped, table.len());
    for (relative, content) in table.iter() {
        let on_disk = fs::read(resolve(temp.path(), relative))?;
        assert_eq!(on_disk, content.as_bytes(), "content drifted for {}", relative);
    }
    Ok(())
}

#[test]
fn test_existing_file_survives_default_run() -> Result<()> {
    let temp = TempDir::new()?;
    let table = repo_structure();

    fs::write(temp.path().join("README.md"), "# My fork\n")?;
    let summary = write_all(temp.path(), &table, false)?;

    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.written, table.len() - 1);
    assert_eq!(
        fs::read_to_string(temp.path().join("README.md"))?,
        "# My fork\n"
    );
    // Everything else still materialized.
    assert!(temp.path().join("docs/architecture/overview.md").is_file());
    Ok(())
}

#[test]
fn test_overwrite_restores_table_content() -> Result<()> {
    let temp = TempDir::new()?;
    let table = repo_structure();

    fs::write(temp.path().join("README.md"), "# My fork\n")?;
    write_all(temp.path(), &table, true)?;

    assert_eq!(
        fs::read_to_string(temp.path().join("README.md"))?,
        "# ASV\n\nMonorepo scaffold.\n"
    );
    Ok(())
}

#[test]
fn test_service_placeholders_reference_service_name() -> Result<()> {
    let temp = TempDir::new()?;
    write_all(temp.path(), &repo_structure(), false)?;

    for svc in SERVICE_NAMES {
        let src = resolve(
            temp.path(),
            &format!("backend/services/{}/src/README.md", svc),
        );
        let tests = resolve(
            temp.path(),
            &format!("backend/services/{}/tests/README.md", svc),
        );
        assert_eq!(fs::read_to_string(&src)?, format!("# {}\n", svc));
        assert_eq!(fs::read_to_string(&tests)?, format!("# tests for {}\n", svc));
    }
    Ok(())
}

#[test]
fn test_ancestor_directories_are_created() -> Result<()> {
    let temp = TempDir::new()?;
    write_all(temp.path(), &repo_structure(), false)?;

    for dir in [
        "apps/operator_flutter/lib/features/live_map",
        "ml/inference/runtimes/onnxruntime",
        ".github/workflows",
    ] {
        assert!(resolve(temp.path(), dir).is_dir(), "missing dir {}", dir);
    }
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_hooks_and_scripts_are_executable() -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new()?;
    write_all(temp.path(), &repo_structure(), false)?;
    mark_executable(temp.path(), EXECUTABLES);

    for relative in EXECUTABLES {
        let target = resolve(temp.path(), relative);
        let mode = fs::metadata(&target)?.permissions().mode();
        assert_eq!(mode & 0o777, 0o755, "wrong mode on {}", relative);
    }
    Ok(())
}

#[test]
fn test_permission_pass_never_fails_the_run() -> Result<()> {
    let temp = TempDir::new()?;
    // No scaffold written: every executable path is missing, and the
    // pass must still return without error or side effects.
    mark_executable(temp.path(), EXECUTABLES);
    assert!(fs::read_dir(temp.path())?.next().is_none());
    Ok(())
}
