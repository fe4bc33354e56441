//! Keyword-frequency sentiment scoring.
//!
//! Always available and total: every input produces a verdict, which is why the pipeline uses
//! it as its terminal stage.

use crate::SentimentClassifier;
use async_trait::async_trait;
use pulse_core::{CoreError, HeuristicDetails, Sentiment, SentimentVerdict, VerdictDetails};
use regex::Regex;
use tracing::debug;

pub const POSITIVE_WORDS: &[&str] = &[
    "love", "like", "amazing", "awesome", "great", "excellent", "fantastic", "wonderful",
    "good", "best", "perfect", "brilliant", "outstanding", "incredible", "superb", "happy",
    "excited", "thrilled", "delighted", "pleased", "satisfied", "impressed", "recommend",
    "favorite", "beautiful", "nice", "cool", "fun", "enjoy",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "hate", "dislike", "terrible", "awful", "horrible", "bad", "worst", "disgusting",
    "annoying", "frustrated", "angry", "disappointed", "upset", "sad", "boring", "stupid",
    "useless", "broken", "fail", "sucks", "pathetic", "ridiculous", "wrong", "problem",
    "issue", "concern", "worry", "fear", "doubt", "regret",
];

const METHOD: &str = "fallback";
const EMPTY_TEXT_CONFIDENCE: f64 = 0.6;
const NEUTRAL_CONFIDENCE: f64 = 0.65;
const BASE_CONFIDENCE: f64 = 0.7;
const PER_MATCH_BONUS: f64 = 0.05;
const MAX_CONFIDENCE: f64 = 0.95;

#[derive(Debug, Clone)]
pub struct HeuristicClassifier {
    positive: Regex,
    negative: Regex,
}

impl HeuristicClassifier {
    pub fn new() -> Self {
        Self {
            positive: lexicon_pattern(POSITIVE_WORDS),
            negative: lexicon_pattern(NEGATIVE_WORDS),
        }
    }

    /// Score `text` against both lexicons.
    pub fn score(&self, text: &str) -> SentimentVerdict {
        if text.trim().is_empty() {
            debug!("Empty or invalid text, returning neutral");
            return SentimentVerdict {
                sentiment: Sentiment::Neutral,
                confidence: EMPTY_TEXT_CONFIDENCE,
                details: VerdictDetails::Heuristic(HeuristicDetails {
                    method: METHOD.to_string(),
                    reason: Some("empty_text".to_string()),
                    positive_score: None,
                    negative_score: None,
                }),
            };
        }

        let lower = text.to_lowercase();
        let positive_score = self.positive.find_iter(&lower).count();
        let negative_score = self.negative.find_iter(&lower).count();

        let (sentiment, confidence) = if positive_score > negative_score && positive_score > 0 {
            (Sentiment::Positive, scaled_confidence(positive_score))
        } else if negative_score > positive_score && negative_score > 0 {
            (Sentiment::Negative, scaled_confidence(negative_score))
        } else {
            (Sentiment::Neutral, NEUTRAL_CONFIDENCE)
        };

        debug!(
            "Keyword analysis -> {} ({:.1}% confidence, +{} -{})",
            sentiment,
            confidence * 100.0,
            positive_score,
            negative_score
        );

        SentimentVerdict {
            sentiment,
            confidence,
            details: VerdictDetails::Heuristic(HeuristicDetails {
                method: METHOD.to_string(),
                reason: None,
                positive_score: Some(positive_score),
                negative_score: Some(negative_score),
            }),
        }
    }
}

impl Default for HeuristicClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SentimentClassifier for HeuristicClassifier {
    fn name(&self) -> &str {
        "keyword-heuristic"
    }

    async fn classify(&self, text: &str) -> Result<SentimentVerdict, CoreError> {
        Ok(self.score(text))
    }
}

fn scaled_confidence(matches: usize) -> f64 {
    (BASE_CONFIDENCE + matches as f64 * PER_MATCH_BONUS).min(MAX_CONFIDENCE)
}

fn lexicon_pattern(words: &[&str]) -> Regex {
    let pattern = format!(r"\b(?:{})\b", words.join("|"));
    // Built from the fixed word lists above.
    Regex::new(&pattern).expect("lexicon pattern is a valid regex")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_empty_text() {
        let verdict = HeuristicClassifier::new().score("   ");
        assert_eq!(verdict.sentiment, Sentiment::Neutral);
        assert_close(verdict.confidence, 0.6);
        match verdict.details {
            VerdictDetails::Heuristic(details) => {
                assert_eq!(details.reason.as_deref(), Some("empty_text"));
            }
            other => panic!("unexpected details: {other:?}"),
        }
    }

    #[test]
    fn test_positive_text() {
        let verdict = HeuristicClassifier::new()
            .score("I absolutely love this it s amazing and wonderful");
        assert_eq!(verdict.sentiment, Sentiment::Positive);
        assert_close(verdict.confidence, 0.85);
    }

    #[test]
    fn test_negative_text() {
        let verdict = HeuristicClassifier::new().score("This update is terrible and broken");
        assert_eq!(verdict.sentiment, Sentiment::Negative);
        assert_close(verdict.confidence, 0.8);
    }

    #[test]
    fn test_tie_is_neutral() {
        let verdict = HeuristicClassifier::new().score("good ideas but a bad rollout");
        assert_eq!(verdict.sentiment, Sentiment::Neutral);
        assert_close(verdict.confidence, 0.65);
    }

    #[test]
    fn test_no_matches_is_neutral() {
        let verdict = HeuristicClassifier::new().score("the meeting is on tuesday");
        assert_eq!(verdict.sentiment, Sentiment::Neutral);
        assert_close(verdict.confidence, 0.65);
    }

    #[test]
    fn test_matches_whole_words_only() {
        // "likely" and "goodbye" contain lexicon words but are not matches
        let verdict = HeuristicClassifier::new().score("likely goodbye unlike");
        assert_eq!(verdict.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_case_insensitive_and_repeated() {
        let verdict = HeuristicClassifier::new().score("LOVE love Love");
        assert_eq!(verdict.sentiment, Sentiment::Positive);
        assert_close(verdict.confidence, 0.85);
    }

    #[test]
    fn test_confidence_increases_until_cap() {
        let classifier = HeuristicClassifier::new();
        let mut previous = 0.0;
        for count in 1..=5 {
            let text = vec!["great"; count].join(" ");
            let confidence = classifier.score(&text).confidence;
            assert!(confidence > previous, "count {count}");
            previous = confidence;
        }
        assert_close(previous, 0.95);

        let saturated = classifier.score(&vec!["great"; 12].join(" "));
        assert_close(saturated.confidence, 0.95);
    }

    #[test]
    fn test_confidence_bounds() {
        let classifier = HeuristicClassifier::new();
        let samples = [
            "",
            "plain words only",
            "bad bad bad bad bad bad bad bad bad",
            "love hate",
            "awesome",
        ];
        for sample in samples {
            let confidence = classifier.score(sample).confidence;
            assert!((0.6..=0.95).contains(&confidence), "{sample}: {confidence}");
        }
    }

    #[test]
    fn test_classify_never_fails() {
        let classifier = HeuristicClassifier::new();
        let verdict = tokio_test::block_on(classifier.classify("so happy today"));
        assert!(verdict.is_ok());
    }
}
