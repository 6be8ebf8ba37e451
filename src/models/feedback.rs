use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a swipe on a previously shown outfit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Liked,
    Disliked,
    Neutral,
}

impl SwipeDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwipeDirection::Liked => "liked",
            SwipeDirection::Disliked => "disliked",
            SwipeDirection::Neutral => "neutral",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "liked" => Some(SwipeDirection::Liked),
            "disliked" => Some(SwipeDirection::Disliked),
            "neutral" => Some(SwipeDirection::Neutral),
            _ => None,
        }
    }
}

/// Feature snapshot of an outfit at the moment feedback was given
///
/// Persisted alongside the event so preference derivation never depends on
/// the generated outfit still being resolvable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutfitFeatures {
    pub colors: Vec<String>,
    pub styles: Vec<String>,
    pub total_price: f64,
    /// 1-10 dressiness estimate
    pub formality_score: u8,
}

/// One recorded swipe
///
/// Immutable and append-only; owned by the external feedback store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackEvent {
    pub session_id: String,
    pub user_id: Option<String>,
    pub outfit_id: Uuid,
    pub direction: SwipeDirection,
    pub features: OutfitFeatures,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&SwipeDirection::Liked).unwrap(),
            "\"liked\""
        );
        let direction: SwipeDirection = serde_json::from_str("\"disliked\"").unwrap();
        assert_eq!(direction, SwipeDirection::Disliked);
    }

    #[test]
    fn test_direction_parse_round_trip() {
        for direction in [
            SwipeDirection::Liked,
            SwipeDirection::Disliked,
            SwipeDirection::Neutral,
        ] {
            assert_eq!(SwipeDirection::parse(direction.as_str()), Some(direction));
        }
        assert_eq!(SwipeDirection::parse("maybe"), None);
    }
}
