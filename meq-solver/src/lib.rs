/**
 * The analysis pipeline: parse, shift, solve, and sample.
 */
mod pipeline;
pub use pipeline::{MarketCurves, analyze};

/**
 * These are the core data types the pipeline operates on.
 */
mod types;
pub use types::*;

mod series;
