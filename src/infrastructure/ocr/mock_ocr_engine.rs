use std::sync::atomic::{AtomicUsize, Ordering};

use image::DynamicImage;

use crate::application::ports::{OcrEngine, OcrError};

pub struct MockOcrEngine {
    available: bool,
    text: String,
    recognize_calls: AtomicUsize,
}

impl MockOcrEngine {
    pub fn returning(text: impl Into<String>) -> Self {
        Self {
            available: true,
            text: text.into(),
            recognize_calls: AtomicUsize::new(0),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            text: String::new(),
            recognize_calls: AtomicUsize::new(0),
        }
    }

    pub fn recognize_calls(&self) -> usize {
        self.recognize_calls.load(Ordering::SeqCst)
    }
}

impl OcrEngine for MockOcrEngine {
    fn is_available(&self) -> bool {
        self.available
    }

    fn recognize(&self, _image: &DynamicImage) -> Result<String, OcrError> {
        self.recognize_calls.fetch_add(1, Ordering::SeqCst);
        if !self.available {
            return Err(OcrError::NotFound("mock".to_string()));
        }
        Ok(self.text.clone())
    }
}
