//! Filesystem-backed selection of a prescription image.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;

use rxlens_core::PrescriptionFile;

/// Extensions the analysis service accepts, with their MIME types.
const SUPPORTED: [(&str, &str); 5] = [
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("webp", "image/webp"),
    ("gif", "image/gif"),
];

fn mime_for_extension(extension: &str) -> Option<&'static str> {
    let extension = extension.to_ascii_lowercase();
    SUPPORTED
        .iter()
        .find(|(candidate, _)| *candidate == extension)
        .map(|(_, mime)| *mime)
}

/// Reads `path` into a [`PrescriptionFile`].
///
/// The extension gate runs before any filesystem access, so an unsupported
/// type is rejected without touching the disk.
pub fn load_prescription(path: &Path) -> Result<PrescriptionFile> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
    let Some(mime_type) = mime_for_extension(extension) else {
        bail!(
            "{} is not a supported image (expected jpg, jpeg, png, webp or gif)",
            path.display()
        );
    };

    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("prescription")
        .to_owned();
    debug!(file = %file_name, bytes = bytes.len(), "Loaded prescription image");

    Ok(PrescriptionFile::new(file_name, mime_type, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_lookup_covers_the_supported_set() {
        assert_eq!(mime_for_extension("jpg"), Some("image/jpeg"));
        assert_eq!(mime_for_extension("JPEG"), Some("image/jpeg"));
        assert_eq!(mime_for_extension("png"), Some("image/png"));
        assert_eq!(mime_for_extension("webp"), Some("image/webp"));
        assert_eq!(mime_for_extension("gif"), Some("image/gif"));
        assert_eq!(mime_for_extension("svg"), None);
        assert_eq!(mime_for_extension(""), None);
    }

    #[test]
    fn loads_bytes_and_name_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.PNG");
        std::fs::write(&path, b"not really a png").unwrap();

        let file = load_prescription(&path).unwrap();
        assert_eq!(file.file_name, "scan.PNG");
        assert_eq!(file.mime_type, "image/png");
        assert_eq!(file.bytes, b"not really a png");
    }

    #[test]
    fn unsupported_extension_is_rejected_before_any_read() {
        let dir = tempfile::tempdir().unwrap();
        // Never created on disk; the gate must fire first.
        let path = dir.path().join("notes.txt");

        let err = load_prescription(&path).unwrap_err();
        assert!(err.to_string().contains("jpg, jpeg, png, webp or gif"));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.jpg");

        let err = load_prescription(&path).unwrap_err();
        assert!(format!("{err:#}").contains("gone.jpg"));
    }
}
