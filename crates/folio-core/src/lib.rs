//! # folio-core - Content and Shared Infrastructure
//!
//! Foundation crate for Folio. Provides the static portfolio content, the
//! keyed lookup tables that back detail views, error handling and logging.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, toml, chrono, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Content (`content`)
//! - [`Catalog`] - Summaries, detail tables and profile content, parsed once
//! - [`ContentKind`] - Service, Project or Article; one id namespace each
//! - [`ContentTable`] - Read-only `id -> record` map with source order
//! - [`resolve()`] - Exact-match lookup returning a [`LookupMiss`] on failure
//! - [`ContentRecord`] - Tagged union over resolved detail records
//! - [`partition_featured()`] - Stable split into featured and other entries
//! - [`format_long_date()`] - `2024-01-15` -> `January 15, 2024`
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum, one variant group per layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//! - [`LookupMiss`] - A detail id with no record
//!
//! ### Logging (`logging`)
//! - [`logging::init()`] - File-based tracing subscriber controlled by `FOLIO_LOG`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use folio_core::prelude::*;
//! ```

pub mod content;
pub mod error;
pub mod logging;
pub mod prelude;

// Re-export commonly used types at crate root for convenience
pub use content::{
    format_long_date, humanize_key, partition_featured, resolve, ArticleRecord, ArticleSummary,
    Catalog, ContentBlock, ContentKind, ContentRecord, ContentTable, Featured, Profile,
    ProjectRecord, ProjectSummary, ServiceRecord, ServiceSummary, INVALID_DATE,
};
pub use error::{Error, LookupMiss, Result, ResultExt};
