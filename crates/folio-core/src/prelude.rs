//! Prelude for common imports used throughout all Folio crates

pub use crate::content::{Catalog, ContentKind, ContentRecord};
pub use crate::error::{Error, LookupMiss, Result, ResultExt};
pub use tracing::{debug, error, info, instrument, trace, warn};
