use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat, Extraction};

/// Dispatches on the document format. A format with no registered adapter
/// yields `NoText`; deciding which formats are allowed is the caller's job.
pub struct CompositeFileLoader {
    adapters: HashMap<DocumentFormat, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(DocumentFormat, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    pub fn supports(&self, format: DocumentFormat) -> bool {
        self.adapters.contains_key(&format)
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<Extraction, FileLoaderError> {
        match self.adapters.get(&document.format) {
            Some(adapter) => adapter.extract_text(data, document).await,
            None => {
                tracing::debug!(format = %document.format, "No adapter registered for format");
                Ok(Extraction::NoText)
            }
        }
    }
}
