use std::path::Path;

use crate::codec::decode::decode_upload;
use crate::codec::encode::Download;
use crate::foundation::buffer::{ColorImage, GrayImage};
use crate::foundation::error::{SketchError, SketchResult};
use crate::host::compare::side_by_side;
use crate::host::config::HostConfig;
use crate::host::page::ERROR_NOTICE;
use crate::sketch::sketch;

/// One upload event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Upload {
    /// Name of the uploaded file as reported by the client, if any.
    pub file_name: Option<String>,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl Upload {
    /// Upload without a client-side file name.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            file_name: None,
            bytes,
        }
    }

    /// Upload carrying the client's file name.
    pub fn named(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: Some(file_name.into()),
            bytes,
        }
    }

    fn extension(&self) -> Option<&str> {
        let name = self.file_name.as_deref()?;
        Path::new(name).extension().and_then(|e| e.to_str())
    }
}

/// Everything the page shows after a successful upload.
#[derive(Clone, Debug)]
pub struct SketchView {
    /// The decoded upload, shown under the "Original Image" heading.
    pub original: ColorImage,
    /// The transform output, shown under the "Pencil Sketch" heading.
    pub sketch: GrayImage,
    /// PNG of `sketch` behind the download button.
    pub download: Download,
}

/// Failure banner shown instead of the images.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorNotice {
    /// Generic, user-facing message.
    pub message: &'static str,
    /// Error text for the expandable details.
    pub detail: String,
}

impl ErrorNotice {
    fn from_error(err: &SketchError) -> Self {
        Self {
            message: ERROR_NOTICE,
            detail: err.to_string(),
        }
    }
}

/// Result of handling one upload.
#[derive(Clone, Debug)]
pub enum Response {
    /// Original, sketch and download are ready.
    Sketched(SketchView),
    /// The request failed; nothing else was affected.
    Failed(ErrorNotice),
}

impl Response {
    /// `true` for [`Response::Sketched`].
    pub fn is_sketched(&self) -> bool {
        matches!(self, Self::Sketched(_))
    }

    /// Split into the success view or the failure notice.
    pub fn into_result(self) -> Result<SketchView, ErrorNotice> {
        match self {
            Self::Sketched(view) => Ok(view),
            Self::Failed(notice) => Err(notice),
        }
    }
}

/// Request handler: invoked once per upload, holds only immutable configuration.
#[derive(Clone, Debug, Default)]
pub struct SketchHandler {
    config: HostConfig,
}

impl SketchHandler {
    /// Build a handler after validating `config`.
    pub fn new(config: HostConfig) -> SketchResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Decode, sketch and encode one upload; any failure becomes an [`ErrorNotice`].
    #[tracing::instrument(skip_all, fields(bytes = upload.bytes.len(), file_name = ?upload.file_name))]
    pub fn handle(&self, upload: &Upload) -> Response {
        match self.process(upload) {
            Ok(view) => {
                tracing::info!(
                    width = view.sketch.width(),
                    height = view.sketch.height(),
                    png_bytes = view.download.bytes.len(),
                    "sketch ready"
                );
                Response::Sketched(view)
            }
            Err(err) => {
                tracing::warn!(error = %err, "sketch request failed");
                Response::Failed(ErrorNotice::from_error(&err))
            }
        }
    }

    /// Same pipeline as [`SketchHandler::handle`], reporting the typed error.
    pub fn process(&self, upload: &Upload) -> SketchResult<SketchView> {
        self.check_upload(upload)?;
        let original = decode_upload(&upload.bytes)?;
        let sketch = sketch(&original)?;
        let download = Download::sketch(&sketch)?;
        Ok(SketchView {
            original,
            sketch,
            download,
        })
    }

    /// Comparison image of a successful view, laid out per the config.
    pub fn comparison(&self, view: &SketchView) -> SketchResult<image::RgbImage> {
        side_by_side(
            &view.original,
            &view.sketch,
            self.config.compare_gutter_px,
            self.config.compare_background,
        )
    }

    fn check_upload(&self, upload: &Upload) -> SketchResult<()> {
        if upload.bytes.is_empty() {
            return Err(SketchError::validation("upload is empty"));
        }
        let len = upload.bytes.len() as u64;
        if len > self.config.max_upload_bytes {
            return Err(SketchError::validation(format!(
                "upload is {len} bytes, limit is {}",
                self.config.max_upload_bytes
            )));
        }
        if let Some(ext) = upload.extension()
            && !self.config.accepts_extension(ext)
        {
            return Err(SketchError::decode(format!(
                "unsupported file type '.{ext}'"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/handler.rs"]
mod tests;
