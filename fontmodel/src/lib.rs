//! A read-only model of the font source that drives build planning.
//!
//! The planner never parses font binaries itself. An external loader reads
//! the representative source (glyphs, designspace, ufo, ...) and hands us a
//! snapshot: ordered axes, ordered named instances, and the default family
//! name. The snapshot is immutable for the duration of one planning pass.

pub mod axis;
pub mod error;
pub mod instance;
pub mod model;
pub mod source;

pub use axis::Axis;
pub use error::Error;
pub use instance::{Instance, Location};
pub use model::FontModel;
pub use source::{Source, SourceKind};
