//! Holds the currently selected prescription file and its preview.

use std::sync::Arc;

use crate::domain::PrescriptionFile;

/// Longest edge of the decoded preview raster, in pixels.
const PREVIEW_MAX_EDGE: u32 = 48;

/// A decoded, display-only thumbnail of the selected file.
///
/// Dropping the handle releases the pixel buffer; the session drops the old
/// handle before installing a new one so two previews never coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewHandle {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl PreviewHandle {
    fn decode(bytes: &[u8]) -> Option<Self> {
        let decoded = match image::load_from_memory(bytes) {
            Ok(decoded) => decoded,
            Err(err) => {
                tracing::debug!(error = %err, "Preview decode failed; keeping file without preview");
                return None;
            }
        };
        let thumbnail = decoded
            .thumbnail(PREVIEW_MAX_EDGE, PREVIEW_MAX_EDGE)
            .to_rgba8();
        let (width, height) = thumbnail.dimensions();
        Some(Self {
            width,
            height,
            rgba: thumbnail.into_raw(),
        })
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Row-major RGBA8 buffer of `width() * height()` pixels.
    pub fn pixels(&self) -> &[u8] {
        &self.rgba
    }
}

/// The user's current file selection plus its derived preview.
#[derive(Debug, Default)]
pub struct UploadSession {
    file: Option<Arc<PrescriptionFile>>,
    preview: Option<PreviewHandle>,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a newly selected file; `None` (a cancelled picker) leaves the
    /// session unchanged.
    ///
    /// The previous preview buffer is released before the replacement is
    /// decoded. A file whose bytes do not decode as an image stays selected
    /// with no preview.
    pub fn select_file(&mut self, selection: Option<PrescriptionFile>) {
        let Some(file) = selection else {
            return;
        };
        self.preview = None;
        self.preview = PreviewHandle::decode(&file.bytes);
        tracing::debug!(
            file = %file.file_name,
            preview = self.preview.is_some(),
            "Prescription file selected"
        );
        self.file = Some(Arc::new(file));
    }

    pub fn current_file(&self) -> Option<Arc<PrescriptionFile>> {
        self.file.clone()
    }

    pub const fn preview(&self) -> Option<&PreviewHandle> {
        self.preview.as_ref()
    }
}
