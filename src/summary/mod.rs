//! Summary projection and formatting
//!
//! `projector` turns inputs and factors into a `Summary`; `formatters` render
//! it as JSON or a markdown methodology snapshot.

pub mod projector;
pub mod formatters;

pub use projector::{project, project_with_breakdown, Summary};
pub use formatters::{JsonFormatter, MarkdownFormatter};
