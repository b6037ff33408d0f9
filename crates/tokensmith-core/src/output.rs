use crate::catalog::DesignSystem;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tokensmith_common::Result;
use tracing::{error, info};

/// Pretty-printed JSON for a descriptor
pub fn to_json(system: &DesignSystem) -> Result<String> {
    Ok(serde_json::to_string_pretty(system)?)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write through a sibling temp file, then rename it over `path`. The temp
/// file is removed if any step fails.
fn write_atomically<F>(path: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let tmp = temp_path(path);
    let result = File::create(&tmp)
        .and_then(|mut file| {
            write(&mut file)?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&tmp, path));

    if let Err(e) = &result {
        error!("Failed to write {:?}: {}", tmp, e);
        let _ = fs::remove_file(&tmp);
    }
    result
}

/// Write a descriptor to `path`.
///
/// The JSON is fully encoded before anything touches the disk and is moved into
/// place with a rename, so a failure never leaves a partial file at `path`.
pub fn write_descriptor(path: &Path, system: &DesignSystem) -> Result<()> {
    let json = to_json(system).map_err(|e| {
        error!("Failed to encode design system: {}", e);
        e
    })?;

    write_atomically(path, |file| file.write_all(json.as_bytes()))?;

    info!(
        "Wrote design system to {:?} ({} components, {} tokens)",
        path,
        system.component_count(),
        system.token_count()
    );
    Ok(())
}

pub fn read_descriptor(path: &Path) -> Result<DesignSystem> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TokenCatalog;
    use tokensmith_common::TokensmithError;

    fn system() -> DesignSystem {
        let mut tokens = TokenCatalog::default();
        tokens.spacing.insert("small".to_string(), "8px".to_string());
        DesignSystem {
            name: "Test".to_string(),
            description: "Fixture".to_string(),
            tokens,
            components: Vec::new(),
        }
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("design-system.json");

        write_descriptor(&path, &system()).unwrap();

        assert_eq!(read_descriptor(&path).unwrap(), system());
        assert!(!dir.path().join("design-system.json.tmp").exists());
    }

    #[test]
    fn test_write_into_missing_directory_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("design-system.json");

        let err = write_descriptor(&path, &system()).unwrap_err();
        assert!(matches!(err, TokensmithError::Io(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_failed_write_removes_partial_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("design-system.json");
        fs::write(&path, "previous").unwrap();

        let err = write_atomically(&path, |file| {
            file.write_all(b"{\"name\": ")?;
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        })
        .unwrap_err();

        assert_eq!(err.to_string(), "disk full");
        assert!(!dir.path().join("design-system.json.tmp").exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "previous");
    }

    #[test]
    fn test_read_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read_descriptor(&path).unwrap_err();
        assert!(matches!(err, TokensmithError::Serialization(_)));
    }

    #[test]
    fn test_json_uses_output_key_names() {
        let json = to_json(&system()).unwrap();
        assert!(json.contains("\"borderRadius\""));
        assert!(json.contains("\"strokeWidth\""));
        assert!(json.contains("\"components\": []"));
    }
}
