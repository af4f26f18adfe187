use {
    std::path::Path,
    tracing::info,
    crate::{
        aggregator::{aggregate, Aggregates},
        classifier::{classify_comments, AnalyzedComment},
        config::ScorerConfig,
        error::{AnalysisError, Result},
        lexicon::Lexicon,
        loader::{load_comments, Dataset, LoadOptions},
        scorer::{LexiconScorer, PolarityScorer},
    },
};

#[derive(Debug)]
pub struct Analysis {
    pub comments: Vec<AnalyzedComment>,
    pub aggregates: Aggregates,
}

pub fn build_scorer(config: &ScorerConfig) -> Result<LexiconScorer> {
    let lexicon = match config.lexicon_path() {
        Some(path) => Lexicon::load(path)?,
        None => Lexicon::default(),
    };
    Ok(LexiconScorer::new(lexicon))
}

pub fn analyze<S, F>(dataset: Dataset, scorer: &S, on_classified: F) -> Result<Analysis>
where
    S: PolarityScorer,
    F: FnMut(&AnalyzedComment),
{
    if dataset.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }

    let comments = classify_comments(scorer, dataset.into_records(), on_classified);
    let aggregates = aggregate(&comments)?;
    info!("classified {} comments across {} platforms", comments.len(), aggregates.cross_tab.len());

    Ok(Analysis {
        comments,
        aggregates,
    })
}

pub fn analyze_file<S, F>(path: &Path, options: &LoadOptions, scorer: &S, on_classified: F) -> Result<Analysis>
where
    S: PolarityScorer,
    F: FnMut(&AnalyzedComment),
{
    let dataset = load_comments(path, options)?;
    analyze(dataset, scorer, on_classified)
}
