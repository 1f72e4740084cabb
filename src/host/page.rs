//! User-facing copy of the sketch page.

/// Page and window title.
pub const TITLE: &str = "Artistic Pencil Sketch Creator";

/// Icon shown next to the title.
pub const ICON: &str = "\u{270f}\u{fe0f}";

/// Line under the title.
pub const TAGLINE: &str = "Transform your photos into beautiful pencil sketches";

/// Label of the upload widget.
pub const UPLOAD_PROMPT: &str = "Choose an image...";

/// Hover help of the upload widget.
pub const UPLOAD_HELP: &str = "Upload a JPEG or PNG image to convert";

/// Heading above the original image.
pub const ORIGINAL_HEADING: &str = "Original Image";

/// Heading above the sketch.
pub const SKETCH_HEADING: &str = "Pencil Sketch";

/// Status text while the sketch is produced.
pub const PROGRESS_TEXT: &str = "Creating your sketch...";

/// Label of the download button.
pub const DOWNLOAD_LABEL: &str = "Download Sketch";

/// Generic notice shown for any failed request.
pub const ERROR_NOTICE: &str =
    "Oops! Something went wrong while processing your image. Please try again.";

/// Heading of the instruction panel.
pub const HOW_TO_HEADING: &str = "How to use";

/// Steps listed in the instruction panel.
pub const HOW_TO_STEPS: [&str; 4] = [
    "Click the 'Choose an image...' button above",
    "Select a JPEG or PNG image from your device",
    "Wait a moment for the sketch to be generated",
    "Click 'Download Sketch' to save your artwork",
];

/// Closing tip of the instruction panel.
pub const HOW_TO_TIP: &str =
    "For best results, use clear images with good contrast and lighting.";

/// Instruction panel as numbered plain text.
pub fn instructions() -> String {
    let mut out = format!("{HOW_TO_HEADING}\n\n");
    for (i, step) in HOW_TO_STEPS.iter().enumerate() {
        out.push_str(&format!("{}. {step}\n", i + 1));
    }
    out.push('\n');
    out.push_str(HOW_TO_TIP);
    out.push('\n');
    out
}

#[cfg(test)]
#[path = "../../tests/unit/host/page.rs"]
mod tests;
