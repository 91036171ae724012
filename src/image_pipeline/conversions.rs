//! Pipeline conversions module
//!
//! This module contains orchestration logic that ties decoding, filtering and
//! encoding together.

mod filter_pipeline;

#[cfg(test)]
mod tests;

pub use filter_pipeline::FilterPipeline;
