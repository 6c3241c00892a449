pub mod cross_correlation;
pub mod stats;
