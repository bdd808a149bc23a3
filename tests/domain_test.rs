use sentilyze::domain::{
    DocumentFormat, Extraction, SafeFilename, SentimentLabel, SentimentResult, SentimentScore,
    round3,
};

#[test]
fn given_known_extensions_when_resolving_format_then_matches_case_insensitively() {
    assert_eq!(DocumentFormat::from_extension("txt"), Some(DocumentFormat::PlainText));
    assert_eq!(DocumentFormat::from_extension("PDF"), Some(DocumentFormat::Pdf));
    assert_eq!(DocumentFormat::from_extension("Docx"), Some(DocumentFormat::Docx));
    assert_eq!(DocumentFormat::from_extension("pptx"), Some(DocumentFormat::Pptx));
    assert_eq!(DocumentFormat::from_extension("JPEG"), Some(DocumentFormat::Image));
    assert_eq!(DocumentFormat::from_extension("tif"), Some(DocumentFormat::Image));
    assert_eq!(DocumentFormat::from_extension("webp"), Some(DocumentFormat::Image));
}

#[test]
fn given_unknown_or_legacy_extension_when_resolving_format_then_returns_none() {
    assert_eq!(DocumentFormat::from_extension("doc"), None);
    assert_eq!(DocumentFormat::from_extension("exe"), None);
    assert_eq!(DocumentFormat::from_extension(""), None);
}

#[test]
fn given_filename_when_resolving_format_then_uses_last_extension() {
    assert_eq!(
        DocumentFormat::from_filename("report.final.PDF"),
        Some(DocumentFormat::Pdf)
    );
    assert_eq!(DocumentFormat::from_filename("archive.txt.zip"), None);
    assert_eq!(DocumentFormat::from_filename("README"), None);
}

#[test]
fn given_allowed_extensions_when_listed_then_contains_every_family() {
    let allowed = DocumentFormat::allowed_extensions();

    for ext in ["txt", "pdf", "docx", "pptx", "png", "jpg", "webp"] {
        assert!(allowed.contains(ext), "missing {ext} in {allowed}");
    }
}

#[test]
fn given_name_with_spaces_when_sanitizing_then_joins_with_underscores() {
    assert_eq!(SafeFilename::new("My cool movie.mov").as_str(), "My_cool_movie.mov");
}

#[test]
fn given_path_traversal_when_sanitizing_then_strips_directories() {
    assert_eq!(SafeFilename::new("../../../etc/passwd").as_str(), "etc_passwd");
    assert_eq!(SafeFilename::new("C:\\Users\\me\\notes.txt").as_str(), "C_Users_me_notes.txt");
}

#[test]
fn given_accented_name_when_sanitizing_then_folds_to_ascii() {
    assert_eq!(SafeFilename::new("résumé.pdf").as_str(), "resume.pdf");
}

#[test]
fn given_name_with_only_unsafe_characters_when_sanitizing_then_is_empty() {
    assert!(SafeFilename::new("").is_empty());
    assert!(SafeFilename::new("..").is_empty());
    assert!(SafeFilename::new("日本語").is_empty());
}

#[test]
fn given_windows_device_name_when_sanitizing_then_prefixes_underscore() {
    assert_eq!(SafeFilename::new("con.txt").as_str(), "_con.txt");
}

#[test]
fn given_raw_text_when_building_extraction_then_trims_and_detects_empty() {
    assert_eq!(
        Extraction::from_raw("  hello \n"),
        Extraction::Text("hello".to_string())
    );
    assert_eq!(Extraction::from_raw(" \n\t "), Extraction::NoText);
    assert!(Extraction::NoText.is_empty());
    assert_eq!(Extraction::Text("x".into()).text(), Some("x"));
}

#[test]
fn given_polarity_at_thresholds_when_labelling_then_thresholds_are_exclusive() {
    assert_eq!(SentimentLabel::from_polarity(0.1), SentimentLabel::Neutral);
    assert_eq!(SentimentLabel::from_polarity(-0.1), SentimentLabel::Neutral);
    assert_eq!(SentimentLabel::from_polarity(0.1001), SentimentLabel::Positive);
    assert_eq!(SentimentLabel::from_polarity(-0.1001), SentimentLabel::Negative);
    assert_eq!(SentimentLabel::from_polarity(0.0), SentimentLabel::Neutral);
}

#[test]
fn given_label_when_asking_mood_then_returns_matching_emoji() {
    assert_eq!(SentimentLabel::Positive.mood(), "😊");
    assert_eq!(SentimentLabel::Negative.mood(), "😞");
    assert_eq!(SentimentLabel::Neutral.mood(), "😐");
}

#[test]
fn given_score_when_building_result_then_rounds_to_three_decimals() {
    let result = SentimentResult::from_score(SentimentScore::new(0.123456, 0.98765));

    assert_eq!(result.polarity, 0.123);
    assert_eq!(result.subjectivity, 0.988);
    assert_eq!(result.label, SentimentLabel::Positive);
}

#[test]
fn given_polarity_just_above_threshold_when_building_result_then_labels_before_rounding() {
    let result = SentimentResult::from_score(SentimentScore::new(0.1004, 0.5));

    assert_eq!(result.polarity, 0.1);
    assert_eq!(result.label, SentimentLabel::Positive);
}

#[test]
fn given_out_of_range_score_when_building_result_then_clamps() {
    let result = SentimentResult::from_score(SentimentScore::new(-3.0, 2.0));

    assert_eq!(result.polarity, -1.0);
    assert_eq!(result.subjectivity, 1.0);
    assert_eq!(result.label, SentimentLabel::Negative);
}

#[test]
fn given_tiny_negative_value_when_rounding_then_returns_positive_zero() {
    let rounded = round3(-0.0001);

    assert_eq!(rounded, 0.0);
    assert!(rounded.is_sign_positive());
}

#[test]
fn given_exact_tie_when_rounding_then_rounds_half_away_from_zero() {
    assert_eq!(round3(0.0625), 0.063);
    assert_eq!(round3(-0.0625), -0.063);
    assert_eq!(round3(0.1234), 0.123);
}
