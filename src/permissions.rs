//! Best-effort executable-bit marking for scaffolded scripts and hooks.

use std::fs;
use std::io;
use std::path::Path;

/// Set mode `rwxr-xr-x` on each listed path that exists under `root`.
///
/// Best-effort contract: executable bits are a convenience, not a
/// correctness requirement, so each per-path result is discarded and the
/// run is never failed here. Missing files are skipped.
pub fn mark_executable(root: &Path, paths: &[&str]) {
    for relative in paths {
        let target = relative
            .split('/')
            .fold(root.to_path_buf(), |p, seg| p.join(seg));
        if target.exists() {
            // Deliberately ignored: filesystems without POSIX permission
            // bits make this fail, and that must not abort the scaffold.
            let _ = set_executable(&target);
        }
    }
}

#[cfg(unix)]
fn set_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_paths_are_skipped() {
        let temp = TempDir::new().unwrap();
        // Nothing exists; must not panic or create anything.
        mark_executable(temp.path(), &["tools/dev/setup-hooks.sh"]);
        assert!(!temp.path().join("tools").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_sets_executable_bits() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("scripts")).unwrap();
        let script = temp.path().join("scripts/run.sh");
        fs::write(&script, "#!/usr/bin/env bash\n").unwrap();

        mark_executable(temp.path(), &["scripts/run.sh"]);

        let mode = fs::metadata(&script).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}
