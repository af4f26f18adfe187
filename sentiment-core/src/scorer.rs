use crate::{
    error::ScorerError,
    lexicon::{Lexicon, NEGATION_FACTOR},
};

pub trait PolarityScorer {
    // Polarity in [-1, 1]: negative values are negative sentiment, magnitude is intensity.
    fn score(&self, text: &str) -> Result<f64, ScorerError>;
}

impl<T: PolarityScorer + ?Sized> PolarityScorer for &T {
    fn score(&self, text: &str) -> Result<f64, ScorerError> {
        (**self).score(text)
    }
}

impl<T: PolarityScorer + ?Sized> PolarityScorer for Box<T> {
    fn score(&self, text: &str) -> Result<f64, ScorerError> {
        (**self).score(text)
    }
}

// Averages lexicon polarities of the sentiment words in the text. An intensifier scales the
// next sentiment word, a negator flips it. Text without sentiment words scores exactly 0.0.
#[derive(Debug, Clone, Default)]
pub struct LexiconScorer {
    lexicon: Lexicon,
}

impl LexiconScorer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

impl PolarityScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<f64, ScorerError> {
        let mut polarities = Vec::new();
        let mut multiplier = 1.0;
        let mut negated = false;

        for word in text.split_whitespace() {
            if let Some(polarity) = self.lexicon.polarity(word) {
                let mut value = polarity * multiplier;
                if negated {
                    value *= NEGATION_FACTOR;
                }
                polarities.push(value);

                multiplier = 1.0;
                negated = false;
            } else if let Some(intensity) = self.lexicon.intensity(word) {
                multiplier *= intensity;
            } else if self.lexicon.is_negator(word) {
                negated = !negated;
            }
        }

        if polarities.is_empty() {
            return Ok(0.0);
        }

        let mean = polarities.iter().sum::<f64>() / polarities.len() as f64;
        Ok(mean.clamp(-1.0, 1.0))
    }
}
