use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::codec::decode::UploadFormat;
use crate::foundation::error::{SketchError, SketchResult};

/// Host-side settings. The transform itself has no knobs.
///
/// Every field is optional in JSON; omitted fields take their defaults.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    /// Largest accepted upload in bytes.
    pub max_upload_bytes: u64,
    /// File extensions accepted by the upload widget, without the dot.
    pub accepted_extensions: Vec<String>,
    /// Gap between the original and the sketch in the comparison view.
    pub compare_gutter_px: u32,
    /// RGB fill behind the comparison view.
    pub compare_background: [u8; 3],
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: 200 * 1024 * 1024,
            accepted_extensions: vec!["jpeg".to_string(), "jpg".to_string(), "png".to_string()],
            compare_gutter_px: 16,
            compare_background: [255, 255, 255],
        }
    }
}

impl HostConfig {
    /// Parse a config from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> SketchResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| SketchError::validation(format!("parse host config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON file on disk and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> SketchResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SketchError::validation(format!("open host config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check limits and that every accepted extension is decodable.
    pub fn validate(&self) -> SketchResult<()> {
        if self.max_upload_bytes == 0 {
            return Err(SketchError::validation("max_upload_bytes must be > 0"));
        }
        if self.accepted_extensions.is_empty() {
            return Err(SketchError::validation(
                "accepted_extensions must not be empty",
            ));
        }
        for ext in &self.accepted_extensions {
            if UploadFormat::from_extension(ext).is_none() {
                return Err(SketchError::validation(format!(
                    "accepted extension '{ext}' is not a decodable format"
                )));
            }
        }
        Ok(())
    }

    /// Whether `ext` (without the dot, any case) is accepted.
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.accepted_extensions
            .iter()
            .any(|a| a.eq_ignore_ascii_case(ext))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/config.rs"]
mod tests;
