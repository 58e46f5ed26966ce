//! Reconstructs the distribution of raw SAT scores from published percentile
//! ranks, and estimates how likely one test taker's ability is to exceed
//! another's given their scaled scores.

pub mod bayes;
pub mod compare;
pub mod dist;
pub mod driver;
pub mod error;
pub mod interp;
pub mod plot;
pub mod reader;
pub mod stats;
pub mod transform;

pub use error::{Error, Result};
