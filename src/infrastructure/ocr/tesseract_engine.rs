use std::io::ErrorKind;
use std::process::{Command, Stdio};

use image::{DynamicImage, ImageFormat};

use crate::application::ports::{OcrEngine, OcrError};

pub const DEFAULT_TESSERACT_COMMAND: &str = "tesseract";

/// Shells out to the `tesseract` CLI, one process per image.
pub struct TesseractOcrEngine {
    command: String,
    language: Option<String>,
}

impl TesseractOcrEngine {
    pub fn new(command: impl Into<String>, language: Option<String>) -> Self {
        Self {
            command: command.into(),
            language,
        }
    }
}

impl Default for TesseractOcrEngine {
    fn default() -> Self {
        Self::new(DEFAULT_TESSERACT_COMMAND, None)
    }
}

impl OcrEngine for TesseractOcrEngine {
    fn is_available(&self) -> bool {
        Command::new(&self.command)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError> {
        let input = tempfile::Builder::new()
            .prefix("ocr-")
            .suffix(".png")
            .tempfile()
            .map_err(|e| OcrError::InputFailed(format!("temp file: {e}")))?;

        image
            .to_rgb8()
            .save_with_format(input.path(), ImageFormat::Png)
            .map_err(|e| OcrError::InputFailed(format!("png encode: {e}")))?;

        let mut command = Command::new(&self.command);
        command.arg(input.path()).arg("stdout");
        if let Some(language) = &self.language {
            command.arg("-l").arg(language);
        }

        let output = command.output().map_err(|e| match e.kind() {
            ErrorKind::NotFound => OcrError::NotFound(self.command.clone()),
            _ => OcrError::ProcessFailed(e.to_string()),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::ProcessFailed(format!(
                "{} exited with {}: {}",
                self.command,
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
