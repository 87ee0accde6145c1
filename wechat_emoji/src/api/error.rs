use super::category::EmojiCategory;

/// Errors produced by catalog construction and random selection.
///
/// Lookups by unknown name are not errors; they return `None`.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Random pick was asked to choose from zero records
    #[error("no emoji to pick from{}", pool_suffix(.category))]
    EmptyPool { category: Option<EmojiCategory> },

    /// String is not one of the category wire values
    #[error("unknown emoji category `{0}`")]
    UnknownCategory(String),

    /// The same name appeared twice while building a catalog
    #[error("duplicate emoji name `{0}`")]
    DuplicateName(String),

    #[error("invalid catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

fn pool_suffix(category: &Option<EmojiCategory>) -> String {
    match category {
        Some(category) => format!(" in category `{category}`"),
        None => String::new(),
    }
}
