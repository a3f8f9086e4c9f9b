use crate::model::{Difficulty, Location, Reward};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Catalogue ids are free-form strings; generated ones are UUIDs.
pub type HuntId = String;

/// A treasure hunt as listed in the catalogue.
///
/// Field names follow the camelCase JSON shape of the web client, so
/// `max_participants` travels as `maxParticipants`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreasureHunt {
    pub id: HuntId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub rating: f32,
    pub location: Location,
    /// Minutes.
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub participants: u32,
    #[serde(default)]
    pub max_participants: u32,
    #[serde(default)]
    pub rewards: Vec<Reward>,
}

impl TreasureHunt {
    pub fn new(title: impl Into<String>, difficulty: Difficulty, location: Location) -> Self {
        TreasureHunt {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: String::new(),
            image: None,
            category: String::new(),
            difficulty,
            rating: 0.0,
            location,
            duration: 0,
            participants: 0,
            max_participants: 0,
            rewards: Vec::new(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.participants >= self.max_participants
    }

    pub fn spots_left(&self) -> u32 {
        self.max_participants.saturating_sub(self.participants)
    }

    pub fn reward_total(&self) -> f64 {
        self.rewards.iter().map(|reward| reward.value).sum()
    }

    /// The rating badge is reserved for hunts rated strictly above 4.
    pub fn shows_rating(&self) -> bool {
        self.rating > 4.0
    }
}
