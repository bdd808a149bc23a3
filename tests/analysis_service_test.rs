use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use sentilyze::application::ports::{ErrorKind, FileLoader, FileLoaderError};
use sentilyze::application::services::{
    AnalysisError, AnalysisService, DEFAULT_PREVIEW_CHARS, INTERNAL_ERROR_MESSAGE,
    TRUNCATION_MARKER, text_preview,
};
use sentilyze::domain::{Document, DocumentFormat, Extraction, SentimentLabel};
use sentilyze::infrastructure::sentiment::{LexiconSentimentScorer, MockSentimentScorer};
use sentilyze::infrastructure::text_processing::{EchoFileLoader, MockFileLoader};

const TIMEOUT: Duration = Duration::from_secs(5);

fn echo_service() -> AnalysisService<EchoFileLoader, LexiconSentimentScorer> {
    AnalysisService::new(
        Arc::new(EchoFileLoader),
        Arc::new(LexiconSentimentScorer::new()),
        TIMEOUT,
        DEFAULT_PREVIEW_CHARS,
    )
}

fn mock_service(
    loader: Arc<MockFileLoader>,
) -> AnalysisService<MockFileLoader, MockSentimentScorer> {
    AnalysisService::new(
        loader,
        Arc::new(MockSentimentScorer::new(0.5, 0.5)),
        TIMEOUT,
        DEFAULT_PREVIEW_CHARS,
    )
}

struct SlowFileLoader;

#[async_trait]
impl FileLoader for SlowFileLoader {
    async fn extract_text(
        &self,
        _data: &[u8],
        _document: &Document,
    ) -> Result<Extraction, FileLoaderError> {
        tokio::time::sleep(Duration::from_secs(10)).await;
        Ok(Extraction::Text("too late".to_string()))
    }
}

#[test]
fn given_text_when_analyzing_then_returns_sentiment() {
    let result = echo_service()
        .analyze_text("I love this product, it's amazing!")
        .unwrap();

    assert_eq!(result.label, SentimentLabel::Positive);
}

#[test]
fn given_blank_text_when_analyzing_then_returns_empty_text_error() {
    let error = echo_service().analyze_text("   ").unwrap_err();

    assert!(matches!(error, AnalysisError::EmptyText));
    assert_eq!(error.public_message(), "No text provided");
    assert_eq!(error.kind(), ErrorKind::UserCorrectable);
}

#[tokio::test]
async fn given_text_file_when_analyzing_then_returns_sentiment_preview_and_filename() {
    let data = b"The service was terrible.";

    let analysis = echo_service()
        .analyze_file("My Review.txt", data)
        .await
        .unwrap();

    assert_eq!(analysis.sentiment.label, SentimentLabel::Negative);
    assert_eq!(analysis.extracted_text, "The service was terrible.");
    assert_eq!(analysis.filename.as_str(), "My_Review.txt");
}

#[tokio::test]
async fn given_traversal_filename_when_analyzing_then_reports_sanitized_name() {
    let analysis = echo_service()
        .analyze_file("../../uploads/good news.TXT", b"good news")
        .await
        .unwrap();

    assert_eq!(analysis.filename.as_str(), "uploads_good_news.TXT");
}

#[tokio::test]
async fn given_long_text_when_analyzing_file_then_truncates_preview() {
    let data = "good ".repeat(200);

    let analysis = echo_service()
        .analyze_file("long.txt", data.as_bytes())
        .await
        .unwrap();

    assert_eq!(
        analysis.extracted_text.chars().count(),
        DEFAULT_PREVIEW_CHARS + TRUNCATION_MARKER.len()
    );
    assert!(analysis.extracted_text.ends_with(TRUNCATION_MARKER));
}

#[tokio::test]
async fn given_empty_filename_when_analyzing_file_then_returns_missing_filename() {
    let loader = Arc::new(MockFileLoader::new(|| Ok(Extraction::NoText)));

    let error = mock_service(loader.clone())
        .analyze_file("", b"data")
        .await
        .unwrap_err();

    assert!(matches!(error, AnalysisError::MissingFilename));
    assert_eq!(error.public_message(), "No file selected");
    assert!(loader.calls().is_empty());
}

#[tokio::test]
async fn given_unsupported_extension_when_analyzing_file_then_lists_allowed_types() {
    let loader = Arc::new(MockFileLoader::new(|| Ok(Extraction::NoText)));

    let error = mock_service(loader.clone())
        .analyze_file("setup.exe", b"MZ")
        .await
        .unwrap_err();

    assert!(matches!(error, AnalysisError::UnsupportedExtension { .. }));
    let message = error.public_message();
    assert!(message.contains("setup.exe"));
    assert!(message.contains("Allowed types"));
    assert!(message.contains("docx"));
    assert!(loader.calls().is_empty());
}

#[tokio::test]
async fn given_uppercase_extension_when_analyzing_file_then_dispatches_by_format() {
    let loader = Arc::new(MockFileLoader::new(|| {
        Ok(Extraction::Text("fine".to_string()))
    }));

    mock_service(loader.clone())
        .analyze_file("SLIDES.PPTX", b"zip")
        .await
        .unwrap();

    assert_eq!(loader.calls(), vec![DocumentFormat::Pptx]);
}

#[tokio::test]
async fn given_non_ascii_filename_when_analyzing_file_then_dispatches_by_extension() {
    let loader = Arc::new(MockFileLoader::new(|| {
        Ok(Extraction::Text("fine".to_string()))
    }));

    let analysis = mock_service(loader.clone())
        .analyze_file("отзыв.txt", b"fine")
        .await
        .unwrap();

    assert_eq!(loader.calls(), vec![DocumentFormat::PlainText]);
    assert_eq!(analysis.filename.as_str(), "txt");
}

#[tokio::test]
async fn given_whitespace_filename_when_analyzing_file_then_returns_missing_filename() {
    let loader = Arc::new(MockFileLoader::new(|| Ok(Extraction::NoText)));

    let error = mock_service(loader.clone())
        .analyze_file("   ", b"data")
        .await
        .unwrap_err();

    assert!(matches!(error, AnalysisError::MissingFilename));
    assert!(loader.calls().is_empty());
}

#[tokio::test]
async fn given_no_text_extracted_when_analyzing_file_then_returns_no_text_error() {
    let loader = Arc::new(MockFileLoader::new(|| Ok(Extraction::NoText)));

    let error = mock_service(loader)
        .analyze_file("scan.pdf", b"%PDF")
        .await
        .unwrap_err();

    assert!(matches!(error, AnalysisError::NoTextExtracted));
    assert_eq!(
        error.public_message(),
        "No text could be extracted from the file"
    );
}

#[tokio::test]
async fn given_malformed_document_when_analyzing_file_then_surfaces_user_message() {
    let loader = Arc::new(MockFileLoader::new(|| {
        Err(FileLoaderError::malformed(
            DocumentFormat::Docx,
            "unexpected end of archive",
        ))
    }));

    let error = mock_service(loader)
        .analyze_file("report.docx", b"PK")
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::UserCorrectable);
    assert_eq!(
        error.public_message(),
        "Unable to process DOCX file; ensure it is not corrupted"
    );
    assert!(!error.public_message().contains("unexpected end"));
}

#[tokio::test]
async fn given_internal_failure_when_analyzing_file_then_hides_details() {
    let loader = Arc::new(MockFileLoader::new(|| {
        Err(FileLoaderError::Internal("disk full at /tmp/xyz".to_string()))
    }));

    let error = mock_service(loader)
        .analyze_file("notes.txt", b"hi")
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Internal);
    assert_eq!(error.public_message(), INTERNAL_ERROR_MESSAGE);
}

#[tokio::test]
async fn given_slow_extraction_when_analyzing_file_then_times_out() {
    let service = AnalysisService::new(
        Arc::new(SlowFileLoader),
        Arc::new(MockSentimentScorer::new(0.0, 0.0)),
        Duration::from_millis(20),
        DEFAULT_PREVIEW_CHARS,
    );

    let error = service.analyze_file("slow.txt", b"x").await.unwrap_err();

    assert!(matches!(error, AnalysisError::Timeout(_)));
    assert_eq!(error.kind(), ErrorKind::Internal);
    assert_eq!(error.public_message(), "The file took too long to process");
}

#[test]
fn given_short_text_when_previewing_then_returns_it_unchanged() {
    assert_eq!(text_preview("short", 500), "short");
    assert_eq!(text_preview(&"a".repeat(500), 500), "a".repeat(500));
}

#[test]
fn given_multibyte_text_when_previewing_then_cuts_on_char_boundary() {
    let text = "é".repeat(10);

    assert_eq!(text_preview(&text, 3), "ééé...");
}
