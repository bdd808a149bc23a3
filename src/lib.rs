//! Document text extraction and sentiment classification.
//!
//! `infrastructure::text_processing` turns an uploaded payload into plain
//! text, `application::services` classifies that text, and `presentation`
//! exposes both over HTTP.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
