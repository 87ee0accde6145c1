use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::error::CatalogError;

/// Classification bucket of an emoji.
///
/// The serialized form is the lowercase wire string (`face`, `gesture`,
/// `animal`, `blessing`, `other`), which is also the asset directory name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmojiCategory {
    Face,
    Gesture,
    Animal,
    Blessing,
    Other,
}

impl EmojiCategory {
    /// Every category, in display order
    pub const ALL: [EmojiCategory; 5] = [
        EmojiCategory::Face,
        EmojiCategory::Gesture,
        EmojiCategory::Animal,
        EmojiCategory::Blessing,
        EmojiCategory::Other,
    ];

    /// Wire-stable string value
    pub fn as_str(self) -> &'static str {
        match self {
            EmojiCategory::Face => "face",
            EmojiCategory::Gesture => "gesture",
            EmojiCategory::Animal => "animal",
            EmojiCategory::Blessing => "blessing",
            EmojiCategory::Other => "other",
        }
    }

    /// Human-readable category name shown in pickers
    pub fn label(self) -> &'static str {
        match self {
            EmojiCategory::Face => "人脸",
            EmojiCategory::Gesture => "手势",
            EmojiCategory::Animal => "动物",
            EmojiCategory::Blessing => "祝福",
            EmojiCategory::Other => "其他",
        }
    }

    /// Unicode icon used next to the label
    pub fn icon(self) -> &'static str {
        match self {
            EmojiCategory::Face => "😊",
            EmojiCategory::Gesture => "👋",
            EmojiCategory::Animal => "🐷",
            EmojiCategory::Blessing => "🎉",
            EmojiCategory::Other => "🌟",
        }
    }
}

impl fmt::Display for EmojiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the wire string. Matching is exact: `Face` or ` face` are rejected.
impl FromStr for EmojiCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EmojiCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}
