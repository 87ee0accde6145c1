use serde::{Deserialize, Serialize};

use super::category::EmojiCategory;

/// Directory all emoji images live under
pub const ASSET_ROOT: &str = "assets";

/// One emoji: its unique name, category and relative image path.
///
/// The path is not checked against the filesystem. Whoever renders the image
/// is responsible for reporting a missing file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiRecord {
    name: String,
    category: EmojiCategory,
    path: String,
}

impl EmojiRecord {
    /// Creates a record whose path follows the `assets/<category>/<name>.png` layout
    pub fn new<T: Into<String>>(name: T, category: EmojiCategory) -> Self {
        let name = name.into();
        let path = asset_path(&name, category);
        Self {
            name,
            category,
            path,
        }
    }

    /// Creates a record with an explicit image path
    pub fn with_path<N: Into<String>, P: Into<String>>(
        name: N,
        category: EmojiCategory,
        path: P,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            path: path.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> EmojiCategory {
        self.category
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Text shown in place of the image when it can't be displayed, e.g. `[微笑]`
    pub fn fallback_text(&self) -> String {
        format!("[{}]", self.name)
    }
}

/// Relative image path for an emoji name in the given category
pub fn asset_path(name: &str, category: EmojiCategory) -> String {
    format!("{}/{}/{}.png", ASSET_ROOT, category.as_str(), name)
}
