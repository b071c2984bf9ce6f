//! Data contract shared with the diagnostic API.

pub mod diagnostic;
pub mod payload;
pub mod presence;

pub use diagnostic::DiagnosticResult;
pub use payload::{parse_results, read_results, SearchResponse};
pub use presence::truthy;
