use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Top-level grouping of emission entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Transportation,
    Energy,
    Food,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Transportation, Category::Energy, Category::Food];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Transportation => "Transportation",
            Category::Energy => "Energy",
            Category::Food => "Food",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::UnknownCategory {
                kind: "category",
                value: s.to_string(),
            })
    }
}

/// Unit of the raw quantity recorded on an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "km")]
    Km,
    #[serde(rename = "kWh")]
    KWh,
    #[serde(rename = "kg")]
    Kg,
    #[serde(rename = "meals")]
    Meals,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Km => "km",
            Unit::KWh => "kWh",
            Unit::Kg => "kg",
            Unit::Meals => "meals",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
