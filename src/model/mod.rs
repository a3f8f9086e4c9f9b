mod catalog;
mod difficulty;
mod error;
mod hunt;
mod location;
mod reward;

pub use catalog::HuntCatalog;
pub use difficulty::Difficulty;
pub use error::HuntError;
pub use hunt::{HuntId, TreasureHunt};
pub use location::Location;
pub use reward::Reward;
