//! Tool surface for orchestration layers.
//!
//! The citation pipeline itself is pure library code; this module wraps it
//! in the JSON-in/JSON-out [`Tool`](registry::Tool) interface so agent
//! frameworks can register and invoke it dynamically.
//!
//! ```ignore
//! let registry = ToolRegistry::with_default_tools();
//! let report = registry
//!     .execute("citation_validator", json!({"citations": text, "style": "APA"}))
//!     .await?;
//! ```

/// Citation validator tool wrapping the pipeline.
pub mod citation;
/// Tool registration and discovery.
pub mod registry;

pub use registry::{Tool, ToolRegistry};
