use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The nine legal half-star values, keyed the way the wire format expects them.
pub const HALF_STAR_KEYS: [&str; 9] = [
    "1.0", "1.5", "2.0", "2.5", "3.0", "3.5", "4.0", "4.5", "5.0",
];

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;
pub const MAX_COMMENT_LENGTH: usize = 1000;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i32,
    pub game_id: i32,
    pub rating: f64,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated review ready to be persisted. Timestamps and the id are
/// assigned by the store on insert.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub game_id: i32,
    pub rating: f64,
    pub comment: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    pub game_id: i32,
    pub total_reviews: usize,
    pub average_rating: f64,
    pub distribution: BTreeMap<String, u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameAverage {
    pub game_id: i32,
    pub average_rating: f64,
    pub total_reviews: usize,
}

/// Rounds to one fractional digit, the precision every stored rating and
/// every reported average carries.
pub fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Mean of all ratings rounded to one decimal digit; 0 for an empty slice so
/// downstream display never has to deal with null or NaN.
pub fn average_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let sum: f64 = reviews.iter().map(|r| r.rating).sum();
    round_to_one_decimal(sum / reviews.len() as f64)
}

/// Histogram over the nine half-star buckets. A rating that does not land
/// exactly on a half-star boundary (e.g. 3.3) is left out of every bucket
/// while still counting towards the total elsewhere.
pub fn rating_distribution(reviews: &[Review]) -> BTreeMap<String, u32> {
    let mut distribution: BTreeMap<String, u32> = HALF_STAR_KEYS
        .iter()
        .map(|key| (key.to_string(), 0))
        .collect();

    for review in reviews {
        let key = format!("{:.1}", round_to_one_decimal(review.rating));
        if let Some(count) = distribution.get_mut(&key) {
            *count += 1;
        }
    }

    distribution
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: f64) -> Review {
        let now = Utc::now();
        Review {
            id: 1,
            game_id: 42,
            rating,
            comment: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_round_to_one_decimal() {
        assert_eq!(round_to_one_decimal(4.25), 4.3);
        assert_eq!(round_to_one_decimal(4.333333), 4.3);
        assert_eq!(round_to_one_decimal(5.0), 5.0);
    }

    #[test]
    fn test_average_of_empty_is_zero() {
        assert_eq!(average_rating(&[]), 0.0);
    }

    #[test]
    fn test_average_rounds_to_one_decimal() {
        let reviews = vec![review(4.0), review(4.5), review(4.5)];
        // (4.0 + 4.5 + 4.5) / 3 = 4.333... -> 4.3
        assert_eq!(average_rating(&reviews), 4.3);
    }

    #[test]
    fn test_distribution_has_all_nine_buckets_when_empty() {
        let distribution = rating_distribution(&[]);
        assert_eq!(distribution.len(), 9);
        assert!(distribution.values().all(|&count| count == 0));
    }

    #[test]
    fn test_distribution_counts_exact_half_star_matches() {
        let reviews = vec![review(4.5), review(4.5), review(3.0)];
        let distribution = rating_distribution(&reviews);
        assert_eq!(distribution["4.5"], 2);
        assert_eq!(distribution["3.0"], 1);
        assert_eq!(distribution["1.0"], 0);
    }

    #[test]
    fn test_off_grid_rating_excluded_from_every_bucket() {
        let reviews = vec![review(3.3), review(4.0)];
        let distribution = rating_distribution(&reviews);
        let total: u32 = distribution.values().sum();
        assert_eq!(total, 1);
        assert_eq!(distribution["4.0"], 1);
    }
}
