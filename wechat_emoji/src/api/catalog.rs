use std::collections::{HashMap, HashSet};

use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};

use super::{
    category::EmojiCategory,
    data::BUILTIN_EMOJIS,
    error::CatalogError,
    index::CategoryIndex,
    record::{EmojiRecord, asset_path},
};

/// One emoji as written in a YAML catalog.
/// `path` may be omitted, in which case the standard asset path is used.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EmojiEntry {
    pub name: String,
    pub category: EmojiCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl From<EmojiEntry> for EmojiRecord {
    fn from(entry: EmojiEntry) -> Self {
        let path = entry
            .path
            .unwrap_or_else(|| asset_path(&entry.name, entry.category));
        EmojiRecord::with_path(entry.name, entry.category, path)
    }
}

impl From<&EmojiRecord> for EmojiEntry {
    fn from(record: &EmojiRecord) -> Self {
        Self {
            name: record.name().to_string(),
            category: record.category(),
            path: Some(record.path().to_string()),
        }
    }
}

/// Serializable structure for catalog data that can be saved/loaded as YAML
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CatalogData {
    pub emojis: Vec<EmojiEntry>,
}

impl CatalogData {
    pub fn new() -> Self {
        Self { emojis: Vec::new() }
    }

    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            emojis: catalog.records.iter().map(EmojiEntry::from).collect(),
        }
    }

    pub fn into_records(self) -> Vec<EmojiRecord> {
        self.emojis.into_iter().map(EmojiRecord::from).collect()
    }
}

/// Read-only emoji table keyed by name, with a per-category index.
///
/// A catalog never changes after it is built, so it can be shared freely
/// between threads.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<EmojiRecord>,
    by_name: HashMap<String, usize>,
    index: CategoryIndex,
}

impl Catalog {
    /// Catalog of the built-in dataset.
    pub fn builtin() -> Self {
        let records = BUILTIN_EMOJIS
            .iter()
            .map(|&(name, category)| EmojiRecord::new(name, category))
            .collect();
        // Built-in names are unique, checked by the data module tests.
        Self::build(records)
    }

    /// Builds a catalog from arbitrary records.
    ///
    /// Fails with `CatalogError::DuplicateName` if two records share a name.
    pub fn from_records<I>(records: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = EmojiRecord>,
    {
        let records: Vec<EmojiRecord> = records.into_iter().collect();
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.name()) {
                return Err(CatalogError::DuplicateName(record.name().to_string()));
            }
        }
        Ok(Self::build(records))
    }

    /// Parses a catalog from YAML in the `CatalogData` layout:
    ///
    /// ```yaml
    /// emojis:
    ///   - name: 微笑
    ///     category: face
    ///   - name: OK
    ///     category: gesture
    ///     path: img/ok.gif
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_yaml::from_str(yaml)?;
        Self::from_records(data.into_records())
    }

    /// Serializes the catalog to YAML, every entry with its explicit path
    pub fn to_yaml(&self) -> Result<String, CatalogError> {
        Ok(serde_yaml::to_string(&CatalogData::from_catalog(self))?)
    }

    fn build(records: Vec<EmojiRecord>) -> Self {
        let by_name = records
            .iter()
            .enumerate()
            .map(|(pos, record)| (record.name().to_string(), pos))
            .collect();
        let index = CategoryIndex::build(&records);

        log::debug!(
            "Built emoji catalog with {} records: {:?}",
            records.len(),
            index.counts()
        );

        Self {
            records,
            by_name,
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Image path for an exact name, `None` if the name is unknown
    pub fn get_path(&self, name: &str) -> Option<&str> {
        self.get_info(name).map(EmojiRecord::path)
    }

    /// Full record for an exact name, `None` if the name is unknown
    pub fn get_info(&self, name: &str) -> Option<&EmojiRecord> {
        let record = self.by_name.get(name).map(|&pos| &self.records[pos]);
        if record.is_none() {
            log::trace!("Emoji {:?} not found", name);
        }
        record
    }

    pub fn exists(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Precomputed records of a category, empty if it has no members
    pub fn list_by_category(&self, category: EmojiCategory) -> &[EmojiRecord] {
        self.index.get(category)
    }

    /// Every record, in the order the catalog was built from
    pub fn list_all(&self) -> &[EmojiRecord] {
        &self.records
    }

    /// Records whose name contains `substring` literally (case-sensitive).
    /// An empty substring matches every record.
    pub fn search(&self, substring: &str) -> Vec<&EmojiRecord> {
        self.records
            .iter()
            .filter(|record| record.name().contains(substring))
            .collect()
    }

    /// All names, or only the names of one category
    pub fn list_names(&self, category: Option<EmojiCategory>) -> Vec<&str> {
        let records = match category {
            Some(category) => self.list_by_category(category),
            None => self.list_all(),
        };
        records.iter().map(EmojiRecord::name).collect()
    }

    pub fn categories(&self) -> &CategoryIndex {
        &self.index
    }

    pub fn category_counts(&self) -> Vec<(EmojiCategory, usize)> {
        self.index.counts()
    }

    /// Uniformly random record from the whole catalog or from one category
    pub fn pick_random(
        &self,
        category: Option<EmojiCategory>,
    ) -> Result<&EmojiRecord, CatalogError> {
        self.pick_random_with(&mut rand::thread_rng(), category)
    }

    /// Same as `pick_random`, drawing from the given generator.
    ///
    /// Returns `CatalogError::EmptyPool` when there is nothing to choose from.
    pub fn pick_random_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        category: Option<EmojiCategory>,
    ) -> Result<&EmojiRecord, CatalogError> {
        let pool = match category {
            Some(category) => self.list_by_category(category),
            None => self.list_all(),
        };
        pool.choose(rng).ok_or_else(|| {
            log::warn!("Random emoji requested from an empty pool ({:?})", category);
            CatalogError::EmptyPool { category }
        })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn small_catalog() -> Catalog {
        Catalog::from_records(vec![
            EmojiRecord::new("微笑", EmojiCategory::Face),
            EmojiRecord::new("偷笑", EmojiCategory::Face),
            EmojiRecord::new("握手", EmojiCategory::Gesture),
            EmojiRecord::new("爱心", EmojiCategory::Other),
        ])
        .unwrap()
    }

    #[test]
    fn test_get_path_and_info() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.get_path("微笑"), Some("assets/face/微笑.png"));
        assert_eq!(catalog.get_path("不存在的表情"), None);

        let info = catalog.get_info("爱心").unwrap();
        assert_eq!(info.name(), "爱心");
        assert_eq!(info.category(), EmojiCategory::Other);
        assert_eq!(info.path(), "assets/other/爱心.png");
        assert!(catalog.get_info("不存在").is_none());
    }

    #[test]
    fn test_exists() {
        let catalog = Catalog::builtin();
        assert!(catalog.exists("微笑"));
        assert!(catalog.exists("OK"));
        assert!(!catalog.exists("ok"));
        assert!(!catalog.exists(""));
        assert!(!catalog.exists("不存在"));
    }

    #[test]
    fn test_lookup_is_exact() {
        let catalog = Catalog::builtin();
        assert!(catalog.get_info(" 微笑").is_none());
        assert!(catalog.get_info("微").is_none());
        assert!(catalog.get_info("emm").is_none());
        assert!(catalog.get_info("Emm").is_some());
    }

    #[test]
    fn test_list_by_category_gesture() {
        let catalog = Catalog::builtin();
        let gestures = catalog.list_by_category(EmojiCategory::Gesture);

        assert_eq!(gestures.len(), 10);
        let names: Vec<&str> = gestures.iter().map(|r| r.name()).collect();
        assert!(names.contains(&"握手"));
        assert!(names.contains(&"OK"));
        assert!(gestures.iter().all(|r| r.category() == EmojiCategory::Gesture));
    }

    #[test]
    fn test_list_by_category_empty_is_not_absent() {
        let catalog = small_catalog();
        assert!(catalog.list_by_category(EmojiCategory::Animal).is_empty());
        assert!(catalog.list_names(Some(EmojiCategory::Blessing)).is_empty());
    }

    #[test]
    fn test_list_all_keeps_dataset_order() {
        let catalog = Catalog::builtin();
        let all = catalog.list_all();

        assert_eq!(all.len(), 109);
        assert_eq!(all.first().map(|r| r.name()), Some("微笑"));
        assert_eq!(all.last().map(|r| r.name()), Some("玫瑰"));
    }

    #[test]
    fn test_search() {
        let catalog = Catalog::builtin();

        let names: Vec<&str> = catalog.search("笑").into_iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            vec!["微笑", "偷笑", "憨笑", "坏笑", "笑脸", "破涕为笑", "奸笑"]
        );

        let hearts: Vec<&str> = catalog.search("心").into_iter().map(|r| r.name()).collect();
        assert_eq!(hearts, vec!["爱心", "心碎"]);

        assert_eq!(catalog.search("").len(), catalog.len());
        assert!(catalog.search("不存在").is_empty());
    }

    #[test]
    fn test_search_is_literal_and_case_sensitive() {
        let catalog = Catalog::builtin();
        assert!(catalog.search("ok").is_empty());
        assert_eq!(catalog.search("OK").len(), 1);
        assert!(catalog.search(".*").is_empty());
        assert_eq!(catalog.search("66").len(), 1);
    }

    #[test]
    fn test_list_names() {
        let catalog = small_catalog();
        assert_eq!(catalog.list_names(None), vec!["微笑", "偷笑", "握手", "爱心"]);
        assert_eq!(
            catalog.list_names(Some(EmojiCategory::Face)),
            vec!["微笑", "偷笑"]
        );
    }

    #[test]
    fn test_category_counts() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.category_counts(),
            vec![
                (EmojiCategory::Face, 75),
                (EmojiCategory::Gesture, 10),
                (EmojiCategory::Animal, 4),
                (EmojiCategory::Blessing, 7),
                (EmojiCategory::Other, 13),
            ]
        );
    }

    #[test]
    fn test_pick_random_stays_in_pool() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(7);

        let animals: HashSet<&str> = catalog
            .list_names(Some(EmojiCategory::Animal))
            .into_iter()
            .collect();
        for _ in 0..50 {
            let record = catalog
                .pick_random_with(&mut rng, Some(EmojiCategory::Animal))
                .unwrap();
            assert!(animals.contains(record.name()));
        }

        for _ in 0..50 {
            let record = catalog.pick_random(None).unwrap();
            assert!(catalog.exists(record.name()));
        }
    }

    #[test]
    fn test_pick_random_covers_small_pool() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(42);

        let seen: HashSet<&str> = (0..200)
            .map(|_| {
                catalog
                    .pick_random_with(&mut rng, Some(EmojiCategory::Animal))
                    .unwrap()
                    .name()
            })
            .collect();
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_pick_random_empty_category() {
        let catalog = small_catalog();
        let err = catalog
            .pick_random(Some(EmojiCategory::Animal))
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::EmptyPool {
                category: Some(EmojiCategory::Animal)
            }
        ));
    }

    #[test]
    fn test_pick_random_empty_catalog() {
        let catalog = Catalog::from_records(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(matches!(
            catalog.pick_random(None),
            Err(CatalogError::EmptyPool { category: None })
        ));
    }

    #[test]
    fn test_from_records_rejects_duplicates() {
        let result = Catalog::from_records(vec![
            EmojiRecord::new("福", EmojiCategory::Blessing),
            EmojiRecord::new("福", EmojiCategory::Other),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateName(ref name)) if name == "福"));
    }

    #[test]
    fn test_builtin_passes_duplicate_check() {
        let records = Catalog::builtin().list_all().to_vec();
        let catalog = Catalog::from_records(records).unwrap();
        assert_eq!(catalog.len(), 109);
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
emojis:
  - name: 微笑
    category: face
  - name: OK
    category: gesture
    path: img/ok.gif
"#;
        let catalog = Catalog::from_yaml(yaml).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get_path("微笑"), Some("assets/face/微笑.png"));
        assert_eq!(catalog.get_path("OK"), Some("img/ok.gif"));
    }

    #[test]
    fn test_from_yaml_errors() {
        let unknown_category = "emojis:\n  - name: 微笑\n    category: smiley\n";
        assert!(matches!(
            Catalog::from_yaml(unknown_category),
            Err(CatalogError::Yaml(_))
        ));

        let duplicate = "emojis:\n  - name: 福\n    category: blessing\n  - name: 福\n    category: other\n";
        assert!(matches!(
            Catalog::from_yaml(duplicate),
            Err(CatalogError::DuplicateName(_))
        ));
    }

    #[test]
    fn test_yaml_export_reloads() {
        let catalog = small_catalog();
        let yaml = catalog.to_yaml().unwrap();
        assert!(yaml.contains("category: gesture"));

        let reloaded = Catalog::from_yaml(&yaml).unwrap();
        assert_eq!(reloaded.list_all(), catalog.list_all());
    }
}
