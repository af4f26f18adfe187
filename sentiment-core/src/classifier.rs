use {
    std::fmt,
    tracing::warn,
    crate::{
        error::ScorerError,
        loader::CommentRecord,
        normalizer::normalize,
        scorer::PolarityScorer,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub polarity: f64,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedComment {
    record: CommentRecord,
    clean_comment: String,
    classification: Classification,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    // Exact comparison with zero: only a polarity of exactly 0.0 is neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Sentiment::Positive
        } else if polarity < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Classification {
    pub fn neutral() -> Self {
        Self {
            polarity: 0.0,
            sentiment: Sentiment::Neutral,
        }
    }

    pub fn from_polarity(polarity: f64) -> Self {
        Self {
            polarity,
            sentiment: Sentiment::from_polarity(polarity),
        }
    }
}

impl AnalyzedComment {
    pub fn new(record: CommentRecord, clean_comment: String, classification: Classification) -> Self {
        Self {
            record,
            clean_comment,
            classification,
        }
    }

    pub fn record(&self) -> &CommentRecord {
        &self.record
    }

    pub fn platform(&self) -> &str {
        self.record.platform()
    }

    pub fn clean_comment(&self) -> &str {
        &self.clean_comment
    }

    pub fn polarity(&self) -> f64 {
        self.classification.polarity
    }

    pub fn sentiment(&self) -> Sentiment {
        self.classification.sentiment
    }
}

pub fn score_polarity<S: PolarityScorer>(scorer: &S, text: &str) -> Result<f64, ScorerError> {
    let polarity = scorer.score(text)?;
    if polarity.is_nan() || !(-1.0..=1.0).contains(&polarity) {
        return Err(ScorerError::OutOfRange(polarity));
    }
    Ok(polarity)
}

pub fn classify<S: PolarityScorer>(scorer: &S, text: &str) -> Result<Classification, ScorerError> {
    score_polarity(scorer, text).map(Classification::from_polarity)
}

pub fn analyze_comment<S: PolarityScorer>(scorer: &S, index: usize, record: CommentRecord) -> AnalyzedComment {
    let clean_comment = normalize(record.comment());

    let classification = classify(scorer, &clean_comment).unwrap_or_else(|err| {
        warn!("failed to score comment #{} ({:?}), classifying as neutral: {}", index, clean_comment, err);
        Classification::neutral()
    });

    AnalyzedComment::new(record, clean_comment, classification)
}

pub fn classify_comments<S, F>(scorer: &S, records: Vec<CommentRecord>, mut on_classified: F) -> Vec<AnalyzedComment>
where
    S: PolarityScorer,
    F: FnMut(&AnalyzedComment),
{
    records.into_iter()
        .enumerate()
        .map(|(index, record)| {
            let analyzed = analyze_comment(scorer, index, record);
            on_classified(&analyzed);
            analyzed
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        proptest::prelude::*,
    };

    struct FixedScorer(f64);

    impl PolarityScorer for FixedScorer {
        fn score(&self, _text: &str) -> Result<f64, ScorerError> {
            Ok(self.0)
        }
    }

    struct FailingScorer;

    impl PolarityScorer for FailingScorer {
        fn score(&self, text: &str) -> Result<f64, ScorerError> {
            Err(ScorerError::Rejected(format!("cannot score {:?}", text)))
        }
    }

    #[test]
    fn threshold_is_exact() {
        assert_eq!(Sentiment::from_polarity(0.8), Sentiment::Positive);
        assert_eq!(Sentiment::from_polarity(f64::MIN_POSITIVE), Sentiment::Positive);
        assert_eq!(Sentiment::from_polarity(-0.6), Sentiment::Negative);
        assert_eq!(Sentiment::from_polarity(-f64::MIN_POSITIVE), Sentiment::Negative);
        assert_eq!(Sentiment::from_polarity(0.0), Sentiment::Neutral);
        assert_eq!(Sentiment::from_polarity(-0.0), Sentiment::Neutral);
    }

    #[test]
    fn scorer_failure_falls_back_to_neutral() {
        let analyzed = analyze_comment(&FailingScorer, 0, CommentRecord::new("I love this!", "Twitter"));

        assert_eq!(analyzed.sentiment(), Sentiment::Neutral);
        assert_eq!(analyzed.polarity(), 0.0);
        assert_eq!(analyzed.clean_comment(), "i love this");
    }

    #[test]
    fn out_of_range_scores_are_rejected() {
        assert_eq!(classify(&FixedScorer(1.5), "x"), Err(ScorerError::OutOfRange(1.5)));
        assert!(classify(&FixedScorer(f64::NAN), "x").is_err());

        let analyzed = analyze_comment(&FixedScorer(-3.0), 0, CommentRecord::new("x", "Reddit"));
        assert_eq!(analyzed.sentiment(), Sentiment::Neutral);
    }

    #[test]
    fn fully_stripped_comment_is_neutral() {
        let scorer = crate::scorer::LexiconScorer::default();
        let analyzed = analyze_comment(&scorer, 0, CommentRecord::new("1234!!!", "Twitter"));

        assert_eq!(analyzed.clean_comment(), "");
        assert_eq!(analyzed.polarity(), 0.0);
        assert_eq!(analyzed.sentiment(), Sentiment::Neutral);
    }

    #[test]
    fn classify_comments_keeps_every_record_in_order() {
        let records = vec![
            CommentRecord::new("a", "Twitter"),
            CommentRecord::new("b", "Reddit"),
        ];
        let mut seen = 0;

        let analyzed = classify_comments(&FixedScorer(0.3), records, |_| seen += 1);

        assert_eq!(seen, 2);
        assert_eq!(analyzed.iter().map(|v| v.platform()).collect::<Vec<_>>(), vec!["Twitter", "Reddit"]);
        assert!(analyzed.iter().all(|v| v.sentiment() == Sentiment::Positive));
    }

    #[test]
    fn labels_display_padded() {
        assert_eq!(format!("{:<9}|", Sentiment::Neutral), "Neutral  |");
    }

    proptest! {
        #[test]
        fn threshold_is_exhaustive_and_exclusive(polarity in -1.0f64..=1.0) {
            let sentiment = Sentiment::from_polarity(polarity);
            prop_assert_eq!(sentiment == Sentiment::Positive, polarity > 0.0);
            prop_assert_eq!(sentiment == Sentiment::Negative, polarity < 0.0);
            prop_assert_eq!(sentiment == Sentiment::Neutral, polarity == 0.0);
        }
    }
}
