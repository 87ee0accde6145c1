use super::{category::EmojiCategory, record::EmojiRecord};

/// Records partitioned by category, computed once when a catalog is built.
///
/// Within a partition records keep the order they had in the catalog.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    face: Vec<EmojiRecord>,
    gesture: Vec<EmojiRecord>,
    animal: Vec<EmojiRecord>,
    blessing: Vec<EmojiRecord>,
    other: Vec<EmojiRecord>,
}

impl CategoryIndex {
    pub(crate) fn build<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a EmojiRecord>,
    {
        let mut index = Self::default();
        for record in records {
            index.partition_mut(record.category()).push(record.clone());
        }
        index
    }

    fn partition_mut(&mut self, category: EmojiCategory) -> &mut Vec<EmojiRecord> {
        match category {
            EmojiCategory::Face => &mut self.face,
            EmojiCategory::Gesture => &mut self.gesture,
            EmojiCategory::Animal => &mut self.animal,
            EmojiCategory::Blessing => &mut self.blessing,
            EmojiCategory::Other => &mut self.other,
        }
    }

    /// Records of one category; empty slice if the category has none
    pub fn get(&self, category: EmojiCategory) -> &[EmojiRecord] {
        match category {
            EmojiCategory::Face => &self.face,
            EmojiCategory::Gesture => &self.gesture,
            EmojiCategory::Animal => &self.animal,
            EmojiCategory::Blessing => &self.blessing,
            EmojiCategory::Other => &self.other,
        }
    }

    /// Iterates partitions in `EmojiCategory::ALL` order, empty ones included
    pub fn iter(&self) -> impl Iterator<Item = (EmojiCategory, &[EmojiRecord])> + '_ {
        EmojiCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// Number of records per category in `EmojiCategory::ALL` order
    pub fn counts(&self) -> Vec<(EmojiCategory, usize)> {
        self.iter()
            .map(|(category, records)| (category, records.len()))
            .collect()
    }
}
