use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub value: f64,
}

impl Reward {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        let name = name.into();
        Reward {
            id: name.to_lowercase().replace(' ', "-"),
            name,
            value,
        }
    }
}
