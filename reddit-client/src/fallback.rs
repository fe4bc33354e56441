//! Placeholder posts used when Reddit cannot be reached or returns nothing usable.

use chrono::Utc;
use pulse_core::{Post, SYNTHETIC_ID_PREFIX};
use tracing::info;

const SUBREDDITS: [&str; 8] = [
    "technology",
    "worldnews",
    "AskReddit",
    "science",
    "politics",
    "gaming",
    "movies",
    "books",
];

const TITLE_TEMPLATES: [&str; 20] = [
    "{} is revolutionizing the industry",
    "Latest developments in {} technology",
    "Why {} matters more than ever",
    "{} - the good, the bad, and the ugly",
    "My experience with {}",
    "{} update: what you need to know",
    "Is {} worth the hype?",
    "{} vs traditional methods",
    "The future of {}",
    "{} pros and cons discussion",
    "{} breakthrough announced",
    "{} impact on society",
    "{} - beginner's guide",
    "{} market trends 2024",
    "{} implementation challenges",
    "{} success stories",
    "{} concerns and solutions",
    "{} research findings",
    "{} community discussion",
    "{} latest news update",
];

const BODY_TEMPLATES: [&str; 10] = [
    "This is amazing! {} has completely changed how I approach this problem. The results are incredible.",
    "I'm not convinced about {}. There are still many issues that need to be addressed before widespread adoption.",
    "{} is interesting but I think we need more research to understand its full implications.",
    "Been using {} for a while now. It has its ups and downs but overall it's been helpful.",
    "The potential of {} is huge, but we need to be careful about how we implement it.",
    "Mixed feelings about {}. Some aspects are great, others not so much.",
    "{} is the future! Can't imagine going back to the old way of doing things.",
    "Disappointed with {}. It didn't live up to the expectations for my use case.",
    "{} works well for basic tasks but struggles with more complex scenarios.",
    "Excited about the possibilities that {} opens up. This could be a game changer.",
];

const WEEK_SECS: i64 = 7 * 86_400;

/// Generate `count` placeholder posts about `keyword`.
///
/// Titles, bodies, and subreddits rotate through fixed lists, so the text of post `i` is
/// deterministic. Score, age, and comment count are random.
pub fn synthesize_posts(keyword: &str, count: usize) -> Vec<Post> {
    info!("Generating {} fallback posts for keyword: \"{}\"", count, keyword);
    let now = Utc::now().timestamp();

    (0..count)
        .map(|i| {
            let title = TITLE_TEMPLATES[i % TITLE_TEMPLATES.len()].replace("{}", keyword);
            let text = BODY_TEMPLATES[i % BODY_TEMPLATES.len()].replace("{}", keyword);
            let subreddit = SUBREDDITS[i % SUBREDDITS.len()];
            let id = format!("{}{}", SYNTHETIC_ID_PREFIX, i);

            Post {
                content: Post::combine_content(&title, &text),
                url: format!("https://reddit.com/r/{}/comments/{}", subreddit, id),
                id,
                title,
                text,
                score: fastrand::i64(50..1050),
                author: format!("user{}", i + 1),
                subreddit: subreddit.to_string(),
                created: now - fastrand::i64(0..WEEK_SECS),
                num_comments: fastrand::u64(10..210),
            }
        })
        .collect()
}
