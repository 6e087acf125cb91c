use serde::Serialize;

/// Hint displayed when no images are listed.
pub const ALL_IMAGES_HINT: &str = "enabled for all images";

/// Identity of an image entry, assigned at append time and never reused within a list.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ImageEntryId(u64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageEntry {
    pub id: ImageEntryId,
    pub value: String,
}

/// Variable-length list of the allowed image names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageList {
    entries: Vec<ImageEntry>,
    next_id: u64,
}

impl ImageList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values<I: IntoIterator<Item = String>>(values: I) -> Self {
        let mut list = Self::new();
        for value in values {
            list.append(value);
        }
        list
    }

    /// Adds an entry at the end of the list and returns its identity.
    pub fn append<V: Into<String>>(&mut self, value: V) -> ImageEntryId {
        let id = ImageEntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(ImageEntry {
            id,
            value: value.into(),
        });
        id
    }

    /// Removes the entry with the specified identity, if it's still in the list.
    pub fn remove(&mut self, id: ImageEntryId) -> Option<ImageEntry> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Replaces the value of the entry with the specified identity. Returns `false` if there is
    /// no such entry.
    pub fn update<V: Into<String>>(&mut self, id: ImageEntryId, value: V) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Removes all entries. Identities of the removed entries are not reused.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, id: ImageEntryId) -> Option<&ImageEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn entries(&self) -> &[ImageEntry] {
        &self.entries
    }

    /// Values in display order.
    pub fn values(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.value.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a hint to display instead of the list when it's empty.
    pub fn empty_hint(&self) -> Option<&'static str> {
        self.is_empty().then_some(ALL_IMAGES_HINT)
    }
}
