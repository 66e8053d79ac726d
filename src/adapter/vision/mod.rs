//! Vision-model adapters and the slip extractor built on them.

mod anthropic;
mod extractor;
mod openai;

pub use anthropic::Anthropic;
pub use extractor::SlipExtractor;
pub use openai::OpenAi;
