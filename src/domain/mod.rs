//! Domain layer - Notebook model, publication policy and rewrite rules

pub mod mode;
pub mod notebook;
pub mod pipeline;
pub mod policy;
pub mod rewrite;
pub mod styles;

pub use mode::{Audience, Target};
pub use notebook::{Cell, CellType, Notebook};
pub use pipeline::{CellPipeline, PipelineReport};
pub use policy::{TagPolicy, Verdict};
pub use styles::{HeadingStyle, StyleTable};
