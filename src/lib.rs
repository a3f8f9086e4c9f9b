#[cfg(feature = "yew")]
pub mod components;
pub mod model;

pub mod prelude {
    #[cfg(feature = "yew")]
    pub use crate::components::*;
    pub use crate::model::Difficulty;
    pub use crate::model::HuntCatalog;
    pub use crate::model::HuntError;
    pub use crate::model::HuntId;
    pub use crate::model::Location;
    pub use crate::model::Reward;
    pub use crate::model::TreasureHunt;
}
