//! wechat_emoji - Lookup table of WeChat emoji names, categories and image paths
//!
//! The built-in catalog is reachable through the free functions at the crate
//! root; `Catalog` can also be built from custom records or YAML.

// Private API modules
pub(crate) mod api;

// Public category module with re-exports
pub mod category {
    pub use crate::api::category::EmojiCategory;
    pub use crate::api::index::CategoryIndex;
}

// Public catalog module with re-exports
pub mod catalog {
    pub use crate::api::catalog::{Catalog, CatalogData, EmojiEntry};
    pub use crate::api::data::BUILTIN_EMOJIS;
    pub use crate::api::error::CatalogError;
    pub use crate::api::record::{ASSET_ROOT, EmojiRecord, asset_path};
}

pub use crate::catalog::{Catalog, CatalogError, EmojiRecord};
pub use crate::category::EmojiCategory;

// Accessors over the built-in catalog
pub use crate::api::global::{
    catalog, categories, category_counts, exists, get_info, get_path, list_all, list_by_category,
    list_names, pick_random, pick_random_with, search,
};
