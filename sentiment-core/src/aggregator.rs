use {
    std::collections::BTreeMap,
    tracing::warn,
    crate::{
        classifier::{AnalyzedComment, Sentiment},
        error::{AnalysisError, Result},
    },
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SentimentCounts {
    positive: usize,
    negative: usize,
    neutral: usize,
    // labels in order of first appearance, used to break ties in ranked()
    first_seen: Vec<Sentiment>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percentages {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LabelCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlatformCrossTab {
    rows: BTreeMap<String, LabelCounts>,
    unlabeled: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Aggregates {
    pub counts: SentimentCounts,
    pub percentages: Percentages,
    pub cross_tab: PlatformCrossTab,
}

impl SentimentCounts {
    pub fn from_labels(labels: impl IntoIterator<Item = Sentiment>) -> Self {
        let mut counts = Self::default();
        for label in labels {
            counts.add(label);
        }
        counts
    }

    pub fn add(&mut self, label: Sentiment) {
        match label {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }

        if !self.first_seen.contains(&label) {
            self.first_seen.push(label);
        }
    }

    pub fn get(&self, label: Sentiment) -> usize {
        match label {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    // Labels present in the data, most frequent first. Ties keep order of first appearance.
    pub fn ranked(&self) -> Vec<(Sentiment, usize)> {
        let mut ranked: Vec<(Sentiment, usize)> = self.first_seen.iter()
            .map(|label| (*label, self.get(*label)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    pub fn percentages(&self) -> Result<Percentages> {
        let total = self.total();
        if total == 0 {
            return Err(AnalysisError::EmptyDataset);
        }

        let percentage = |count: usize| count as f64 / total as f64 * 100.0;

        Ok(Percentages {
            positive: percentage(self.positive),
            negative: percentage(self.negative),
            neutral: percentage(self.neutral),
        })
    }
}

impl Percentages {
    pub fn get(&self, label: Sentiment) -> f64 {
        match label {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }
}

impl LabelCounts {
    pub fn get(&self, label: Sentiment) -> usize {
        match label {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    fn add(&mut self, label: Sentiment) {
        match label {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }
}

impl PlatformCrossTab {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, Sentiment)>) -> Self {
        let mut cross_tab = Self::default();

        for (platform, label) in pairs {
            if platform.trim().is_empty() {
                cross_tab.unlabeled += 1;
                continue;
            }

            cross_tab.rows.entry(platform.to_owned()).or_default().add(label);
        }

        cross_tab
    }

    // Platforms in ascending order, all three labels per platform.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &LabelCounts)> {
        self.rows.iter().map(|(platform, counts)| (platform.as_str(), counts))
    }

    pub fn get(&self, platform: &str) -> Option<&LabelCounts> {
        self.rows.get(platform)
    }

    pub fn platforms(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(|v| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    // Records left out because their platform was blank.
    pub fn unlabeled(&self) -> usize {
        self.unlabeled
    }

    pub fn max_platform_total(&self) -> usize {
        self.rows.values().map(|v| v.total()).max().unwrap_or(0)
    }
}

pub fn aggregate(comments: &[AnalyzedComment]) -> Result<Aggregates> {
    if comments.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }

    let counts = SentimentCounts::from_labels(comments.iter().map(|v| v.sentiment()));
    let percentages = counts.percentages()?;
    let cross_tab = PlatformCrossTab::from_pairs(comments.iter().map(|v| (v.platform(), v.sentiment())));

    if cross_tab.unlabeled() > 0 {
        warn!("{} comments have no platform and are left out of the platform table", cross_tab.unlabeled());
    }

    Ok(Aggregates {
        counts,
        percentages,
        cross_tab,
    })
}
