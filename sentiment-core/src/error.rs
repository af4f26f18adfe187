use {
    std::{io, path::PathBuf},
    thiserror::Error,
};

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("input file {path} not found or not readable: {source}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("required column \"{column}\" is missing from the input (after header normalization)")]
    MissingColumn {
        column: String,
    },

    #[error("dataset is empty: no comments to analyze")]
    EmptyDataset,

    #[error("failed to parse input: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to load sentiment lexicon: {0}")]
    Lexicon(#[from] LexiconError),
}

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("failed to read lexicon file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: expected \"<word>\\t<polarity>\", got \"{content}\"")]
    Malformed {
        line: usize,
        content: String,
    },

    #[error("line {line}: polarity {value} for \"{word}\" is outside of [-1, 1]")]
    OutOfRange {
        line: usize,
        word: String,
        value: f64,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScorerError {
    #[error("scorer rejected input: {0}")]
    Rejected(String),

    #[error("scorer returned polarity {0} outside of [-1, 1]")]
    OutOfRange(f64),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
