//! A build planner for font families.
//!
//! Given a declarative family configuration and a snapshot of the
//! representative font source, `fontplan` compiles a recipe: a map from
//! output path to the ordered pipeline of operations that produces it.
//! An external orchestrator executes the operations; nothing here touches
//! a font binary.
//!
//! The outputs enumerated per pass, each guarded by a config flag:
//! the apex variable font (optionally doubled with a guideline-overlay
//! build), a color apex whose guidelines live in a paint table, one
//! variable font per configured brand variant, and static instance cuts
//! of all of the above.

#[cfg(feature = "cli")]
mod args;
pub mod compile;
pub mod config;
mod error;
pub mod naming;
pub mod recipe;
pub mod steps;
pub mod template;
pub mod variants;

#[cfg(feature = "cli")]
pub use args::Args;
pub use compile::compile;
pub use config::{Config, ResolvedConfig};
pub use error::Error;
pub use recipe::{Operation, Recipe, Step};
