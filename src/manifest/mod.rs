//! Push manifest subsystem.
//!
//! # Data Flow
//! ```text
//! manifest document (serde_json::Value)
//!     → schema.rs (deserialize into ordered raw maps)
//!     → compiler.rs (resolve base path, validate paths, anchor patterns)
//!     → PushManifest (compiled, immutable)
//!     → shared via Arc to request handlers
//! ```
//!
//! # Design Decisions
//! - Patterns compiled at construction, immutable at runtime
//! - Declaration order preserved end to end (indexmap + preserve_order)
//! - Whole-string anchoring: a pattern matches the entire request path
//! - All-or-nothing validation; partial manifests are never produced

pub mod compiler;
pub mod destination;
pub mod push;
pub mod schema;

pub use compiler::{CompiledPattern, ResourceDescriptor};
pub use destination::RequestDestination;
pub use push::PushManifest;
pub use schema::{ManifestData, ResourceEntry};
