mod difficulty_badge;
mod map_preview;
mod treasure_hunt_card;

pub use difficulty_badge::{DifficultyBadgeComp, DifficultyBadgeProps, RatingBadgeComp, RatingBadgeProps};
pub use map_preview::{format_coordinates, MapPreviewComp, MapPreviewProps};
pub use treasure_hunt_card::{
    activate_join, join_label, TreasureHuntCardComp, TreasureHuntCardProps, FULL_LABEL, JOIN_LABEL,
};
