use pulse_core::{AnalyzedPost, Sentiment, SentimentDistribution};

/// Count verdicts per label. Each percentage is rounded on its own, so the three need not
/// sum to exactly 100.
pub fn tally(posts: &[AnalyzedPost]) -> SentimentDistribution {
    let mut distribution = SentimentDistribution::default();
    for post in posts {
        match post.sentiment {
            Sentiment::Positive => distribution.positive += 1,
            Sentiment::Negative => distribution.negative += 1,
            Sentiment::Neutral => distribution.neutral += 1,
        }
    }

    let total = distribution.total();
    distribution.positive_percentage = percentage(distribution.positive, total);
    distribution.negative_percentage = percentage(distribution.negative, total);
    distribution.neutral_percentage = percentage(distribution.neutral, total);
    distribution
}

/// `count / total` as a whole percentage, half rounded up. Zero when `total` is zero.
pub fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round() as u32
}
