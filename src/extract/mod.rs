//! OCR text extraction: raw-text fallback parsing, structured-response
//! mapping, and the vocabulary both are driven by.

mod response;
mod text;
mod vocabulary;

pub use response::ocr_data_from_response;
pub use text::parse_slip_text;
pub use vocabulary::{Vocabulary, VocabularyConfig};
