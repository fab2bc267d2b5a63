//! Marginalia - Book Insight Extraction and Caching
//!
//! Recovers structured key and practice points from loosely formatted book
//! content, falls back to canned category content when no structure is
//! recoverable, and memoizes results in a process-lifetime TTL cache with a
//! paced batch orchestrator over the content service.

pub mod cache;
pub mod commands;
pub mod extract;
pub mod fallback;
pub mod fetch;
pub mod insight;
pub mod parser;
