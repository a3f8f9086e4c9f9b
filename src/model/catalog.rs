use crate::model::{HuntError, HuntId, TreasureHunt};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HuntCatalog {
    pub hunts: Vec<TreasureHunt>,
}

impl HuntCatalog {
    pub fn new() -> Self {
        HuntCatalog { hunts: Vec::new() }
    }

    /// Parses a JSON array of hunts. Later duplicates of an id are dropped.
    pub fn from_json(json: &str) -> Result<Self, HuntError> {
        let hunts: Vec<TreasureHunt> = serde_json::from_str(json)?;
        let mut catalog = HuntCatalog::new();
        for hunt in hunts {
            catalog.add_hunt(hunt);
        }
        Ok(catalog)
    }

    pub fn get_hunts(&self) -> &Vec<TreasureHunt> {
        &self.hunts
    }

    pub fn add_hunt(&mut self, hunt: TreasureHunt) {
        if self.hunts.iter().any(|h| h.id == hunt.id) {
            log::warn!("Ignoring duplicate hunt {}", hunt.id);
            return;
        }
        self.hunts.push(hunt);
    }

    pub fn get_hunt(&self, id: &HuntId) -> Option<&TreasureHunt> {
        self.hunts.iter().find(|hunt| hunt.id.eq(id))
    }

    /// Takes one spot in the hunt.
    pub fn join(&mut self, id: &HuntId) -> Result<&TreasureHunt, HuntError> {
        let hunt = self
            .hunts
            .iter_mut()
            .find(|hunt| hunt.id.eq(id))
            .ok_or_else(|| HuntError::NotFound(id.to_string()))?;

        if hunt.is_full() {
            return Err(HuntError::HuntFull(hunt.title.clone()));
        }

        hunt.participants += 1;
        log::info!(
            "Joined {} ({} {} hunt, {} spots left)",
            hunt.title,
            hunt.difficulty.as_str(),
            hunt.category,
            hunt.spots_left()
        );
        Ok(&*hunt)
    }
}
