//! Health lookup: bilingual search with English fallback, the gateway
//! operations, section classification, and disease view assembly.

pub(crate) mod bilingual;
pub(crate) mod classify;
pub(crate) mod engine;
mod gateway;
mod lang;

pub use classify::{KeywordClassifier, SectionCategory, SectionClassifier};
pub use gateway::Gateway;
pub use lang::Lang;
