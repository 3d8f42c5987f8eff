//! The five elements and their display lookup table.

use celestial_oracle::domain::report::FiveElements;
use serde::{Deserialize, Serialize};

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    /// 木
    Wood,
    /// 火
    Fire,
    /// 土
    Earth,
    /// 金
    Metal,
    /// 水
    Water,
}

/// Static display attributes of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementDetail {
    /// Single-character label.
    pub label: &'static str,
    /// Qualities the element stands for.
    pub description: &'static str,
    /// Emoji icon.
    pub icon: &'static str,
    /// Bar colour as a hex string.
    pub color: &'static str,
}

impl Element {
    /// All elements in bar order.
    pub const ALL: [Self; 5] = [Self::Wood, Self::Fire, Self::Earth, Self::Metal, Self::Water];

    /// Looks up the display attributes.
    #[must_use]
    pub fn detail(self) -> ElementDetail {
        match self {
            Self::Wood => ElementDetail {
                label: "木",
                description: "生命力、创造、生长",
                icon: "🌱",
                color: "#10b981",
            },
            Self::Fire => ElementDetail {
                label: "火",
                description: "热情、感化、表达",
                icon: "🔥",
                color: "#f43f5e",
            },
            Self::Earth => ElementDetail {
                label: "土",
                description: "稳重、包容、根基",
                icon: "⛰️",
                color: "#d97706",
            },
            Self::Metal => ElementDetail {
                label: "金",
                description: "决断、锐利、收敛",
                icon: "⚔️",
                color: "#94a3b8",
            },
            Self::Water => ElementDetail {
                label: "水",
                description: "智慧、灵动、深邃",
                icon: "💧",
                color: "#3b82f6",
            },
        }
    }

    /// This element's weight in `balance`.
    #[must_use]
    pub fn weight(self, balance: &FiveElements) -> f64 {
        match self {
            Self::Wood => balance.wood,
            Self::Fire => balance.fire,
            Self::Earth => balance.earth,
            Self::Metal => balance.metal,
            Self::Water => balance.water,
        }
    }
}

impl std::str::FromStr for Element {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wood" | "木" => Ok(Self::Wood),
            "fire" | "火" => Ok(Self::Fire),
            "earth" | "土" => Ok(Self::Earth),
            "metal" | "金" => Ok(Self::Metal),
            "water" | "水" => Ok(Self::Water),
            other => Err(format!("unknown element: {other}")),
        }
    }
}
