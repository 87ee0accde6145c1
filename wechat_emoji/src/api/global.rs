use std::sync::LazyLock;

use rand::Rng;

use super::{
    catalog::Catalog, category::EmojiCategory, error::CatalogError, index::CategoryIndex,
    record::EmojiRecord,
};

static BUILTIN: LazyLock<Catalog> = LazyLock::new(Catalog::builtin);

/// The process-wide built-in catalog, built on first use
pub fn catalog() -> &'static Catalog {
    &BUILTIN
}

/// Image path of a built-in emoji
///
/// ```
/// assert_eq!(wechat_emoji::get_path("微笑"), Some("assets/face/微笑.png"));
/// assert_eq!(wechat_emoji::get_path("不存在的表情"), None);
/// ```
pub fn get_path(name: &str) -> Option<&'static str> {
    BUILTIN.get_path(name)
}

pub fn get_info(name: &str) -> Option<&'static EmojiRecord> {
    BUILTIN.get_info(name)
}

pub fn exists(name: &str) -> bool {
    BUILTIN.exists(name)
}

pub fn list_by_category(category: EmojiCategory) -> &'static [EmojiRecord] {
    BUILTIN.list_by_category(category)
}

pub fn list_all() -> &'static [EmojiRecord] {
    BUILTIN.list_all()
}

/// Built-in emojis whose name contains `substring`
///
/// ```
/// let names: Vec<&str> = wechat_emoji::search("心").into_iter().map(|e| e.name()).collect();
/// assert_eq!(names, vec!["爱心", "心碎"]);
/// ```
pub fn search(substring: &str) -> Vec<&'static EmojiRecord> {
    BUILTIN.search(substring)
}

pub fn list_names(category: Option<EmojiCategory>) -> Vec<&'static str> {
    BUILTIN.list_names(category)
}

pub fn categories() -> &'static CategoryIndex {
    BUILTIN.categories()
}

pub fn category_counts() -> Vec<(EmojiCategory, usize)> {
    BUILTIN.category_counts()
}

pub fn pick_random(category: Option<EmojiCategory>) -> Result<&'static EmojiRecord, CatalogError> {
    BUILTIN.pick_random(category)
}

pub fn pick_random_with<R: Rng + ?Sized>(
    rng: &mut R,
    category: Option<EmojiCategory>,
) -> Result<&'static EmojiRecord, CatalogError> {
    BUILTIN.pick_random_with(rng, category)
}
