//! sodu-classify: rule-based spending category prediction.
//!
//! The classifier is deliberately non-LLM: a fixed keyword table plus a small
//! set of amount/time heuristics covers everyday Vietnamese transaction
//! descriptions deterministically, with a confidence score the UI can use to
//! decide whether to pre-fill or merely suggest.

pub mod analyzer;
pub mod classifier;
pub mod features;
pub mod keywords;
pub mod rules;
pub mod statement;
pub mod summary;

pub use analyzer::TextFeatureAnalyzer;
pub use classifier::{CategoryClassifier, Prediction, WeekendSource};
pub use features::FeatureExtractor;
pub use keywords::KeywordTable;
pub use rules::{RULES, Rule, Signals};
pub use statement::{parse_statement, read_statement};
pub use summary::{CategorySummary, summarize};
