use {
    std::{collections::HashMap, fs::read_to_string, path::Path},
    tracing::info,
    crate::error::LexiconError,
};

const DEFAULT_LEXICON: &str = include_str!("../assets/lexicon.tsv");

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.3),
    ("too", 1.2),
    ("extremely", 1.5),
    ("absolutely", 1.5),
    ("totally", 1.4),
    ("incredibly", 1.5),
    ("quite", 1.1),
    ("pretty", 1.1),
    ("somewhat", 0.7),
    ("slightly", 0.5),
    ("barely", 0.4),
];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "nothing", "nobody", "none", "neither", "nor", "without",
    "dont", "doesnt", "didnt", "isnt", "arent", "wasnt", "werent",
    "cant", "cannot", "couldnt", "wont", "wouldnt", "shouldnt", "aint",
];

// Negated sentiment words flip and lose half their weight ("not good" is mildly negative).
pub const NEGATION_FACTOR: f64 = -0.5;

#[derive(Debug, Clone)]
pub struct Lexicon {
    words: HashMap<String, f64>,
    intensifiers: HashMap<&'static str, f64>,
}

impl Default for Lexicon {
    fn default() -> Self {
        // the embedded asset is covered by tests, so parsing it cannot fail at runtime
        Self::from_tsv(DEFAULT_LEXICON).unwrap_or_else(|_| Self::from_words(HashMap::new()))
    }
}

impl Lexicon {
    pub fn from_words(words: HashMap<String, f64>) -> Self {
        Self {
            words,
            intensifiers: INTENSIFIERS.iter().cloned().collect(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let content = read_to_string(path).map_err(|source| LexiconError::Read {
            path: path.to_owned(),
            source,
        })?;

        let lexicon = Self::from_tsv(&content)?;
        info!("loaded sentiment lexicon with {} words from: {}", lexicon.len(), path.display());

        Ok(lexicon)
    }

    pub fn from_tsv(content: &str) -> Result<Self, LexiconError> {
        let mut words = HashMap::new();

        for (index, line) in content.lines().enumerate() {
            let line_number = index + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (word, polarity) = line.split_once('\t')
                .map(|(word, polarity)| (word.trim(), polarity.trim()))
                .filter(|(word, _)| !word.is_empty())
                .ok_or_else(|| LexiconError::Malformed {
                    line: line_number,
                    content: line.to_owned(),
                })?;

            let polarity: f64 = polarity.parse().map_err(|_| LexiconError::Malformed {
                line: line_number,
                content: line.to_owned(),
            })?;

            if !(-1.0..=1.0).contains(&polarity) {
                return Err(LexiconError::OutOfRange {
                    line: line_number,
                    word: word.to_owned(),
                    value: polarity,
                });
            }

            words.insert(word.to_lowercase(), polarity);
        }

        Ok(Self::from_words(words))
    }

    pub fn polarity(&self, word: &str) -> Option<f64> {
        self.words.get(word).copied()
    }

    pub fn intensity(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }

    pub fn is_negator(&self, word: &str) -> bool {
        NEGATORS.contains(&word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_lexicon_parses() {
        let lexicon = Lexicon::from_tsv(DEFAULT_LEXICON).unwrap();

        assert!(lexicon.len() > 100);
        assert!(lexicon.polarity("love").unwrap() > 0.0);
        assert!(lexicon.polarity("terrible").unwrap() < 0.0);
        assert_eq!(lexicon.polarity("table"), None);
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let lexicon = Lexicon::from_tsv("# header\n\ngood\t0.7\n  \nBAD\t-0.7\n").unwrap();

        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.polarity("bad"), Some(-0.7));
    }

    #[test]
    fn malformed_line_reports_line_number() {
        let err = Lexicon::from_tsv("good\t0.7\ngreat 0.8\n").unwrap_err();

        assert!(matches!(err, LexiconError::Malformed { line: 2, .. }));
    }

    #[test]
    fn non_numeric_polarity_is_malformed() {
        let err = Lexicon::from_tsv("good\tvery\n").unwrap_err();

        assert!(matches!(err, LexiconError::Malformed { line: 1, .. }));
    }

    #[test]
    fn out_of_range_polarity_is_rejected() {
        let err = Lexicon::from_tsv("good\t1.5\n").unwrap_err();

        assert!(matches!(err, LexiconError::OutOfRange { line: 1, .. }));
    }

    #[test]
    fn modifiers_are_recognized() {
        let lexicon = Lexicon::default();

        assert_eq!(lexicon.intensity("very"), Some(1.3));
        assert_eq!(lexicon.intensity("good"), None);
        assert!(lexicon.is_negator("not"));
        assert!(lexicon.is_negator("dont"));
        assert!(!lexicon.is_negator("good"));
    }
}
