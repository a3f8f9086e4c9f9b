use serde::{Deserialize, Serialize};

/// Challenge level of a hunt.
///
/// Values outside `easy`, `medium` and `hard` are kept verbatim so they can
/// still be displayed. A missing level is an empty `Other`, which renders
/// with the neutral gradient.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Other(String),
}

impl Difficulty {
    /// Gradient utility classes used as the badge background.
    pub fn gradient(&self) -> &'static str {
        match self {
            Difficulty::Easy => "from-green-500 to-emerald-500",
            Difficulty::Medium => "from-yellow-500 to-orange-500",
            Difficulty::Hard => "from-red-500 to-pink-500",
            Difficulty::Other(_) => "from-gray-500 to-gray-600",
        }
    }

    /// Localized label shown on the badge.
    pub fn label(&self) -> &str {
        match self {
            Difficulty::Easy => "Facile",
            Difficulty::Medium => "Moyen",
            Difficulty::Hard => "Difficile",
            Difficulty::Other(raw) => raw,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Other(raw) => raw,
        }
    }
}

impl From<&str> for Difficulty {
    fn from(raw: &str) -> Self {
        match raw {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            other => Difficulty::Other(other.to_string()),
        }
    }
}

impl From<String> for Difficulty {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "easy" | "medium" | "hard" => Difficulty::from(raw.as_str()),
            _ => Difficulty::Other(raw),
        }
    }
}

impl From<Difficulty> for String {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Other(String::new())
    }
}
