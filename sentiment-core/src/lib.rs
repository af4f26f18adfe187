pub mod aggregator;
pub mod classifier;
pub mod config;
pub mod error;
pub mod headers;
pub mod lexicon;
pub mod loader;
pub mod normalizer;
pub mod pipeline;
pub mod report;
pub mod scorer;
