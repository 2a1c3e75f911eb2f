pub mod config;
pub mod core;
pub mod detection;

pub use crate::config::DetectorConfig;
pub use crate::core::script::{scan_script, Script};
pub use crate::core::tokenizer::tokenize;
pub use crate::detection::fuzzy::levenshtein;
pub use crate::detection::{Detection, Evidence, Language, LanguageDetector};
