//! One-line summary of how Reddit feels about a keyword.

use pulse_core::SentimentDistribution;

/// Describe the dominant sentiment. A label dominates only when its count is strictly greater
/// than both others; anything else reads as mixed.
pub fn generate_insight(keyword: &str, distribution: &SentimentDistribution) -> String {
    let SentimentDistribution {
        positive,
        negative,
        neutral,
        positive_percentage,
        negative_percentage,
        neutral_percentage,
    } = *distribution;

    if positive > negative && positive > neutral {
        let mut insight = format!(
            "Most Reddit users are positive about {} today, with {}% positive posts! ",
            keyword, positive_percentage
        );
        if positive_percentage > 70 {
            insight.push_str("The community shows overwhelmingly positive sentiment.");
        } else if positive_percentage > 50 {
            insight.push_str("The overall mood is optimistic.");
        }
        insight
    } else if negative > positive && negative > neutral {
        let mut insight = format!(
            "Reddit sentiment towards {} is mostly negative today, with {}% negative posts. ",
            keyword, negative_percentage
        );
        if negative_percentage > 60 {
            insight.push_str("There seems to be significant criticism or concerns.");
        }
        insight
    } else {
        format!(
            "Reddit users have mixed feelings about {}, with {}% neutral sentiment. \
             The discussion appears balanced with varied opinions.",
            keyword, neutral_percentage
        )
    }
}
