//! The category store
//!
//! [`DataStore`] owns every category and, through them, every entry. It is
//! constructed explicitly around a [`BlobStore`] and handed to whatever code
//! presents it. Mutations only change memory; callers persist with
//! [`DataStore::save`] after each change and call [`DataStore::flush`] from
//! their suspend/exit hook.
//!
//! The whole list is persisted as a single JSON array under [`STORAGE_KEY`].

use std::collections::HashMap;

use crate::error::{CategoriesError, CategoriesResult};
use crate::models::{Category, CategoryId, Entry, EntryDraft, EntryId};
use crate::reorder;
use crate::storage::BlobStore;

/// Key the category list is stored under
pub const STORAGE_KEY: &str = "categories";

/// What a successful [`DataStore::load`] found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing has been saved yet; the store was left as it was
    Empty,
    /// The saved list replaced the in-memory one
    Loaded { categories: usize },
}

pub struct DataStore<B: BlobStore> {
    backend: B,
    order: Vec<CategoryId>,
    categories: HashMap<CategoryId, Category>,
    revision: u64,
    dirty: bool,
}

impl<B: BlobStore> DataStore<B> {
    /// Create an empty store without reading the backend
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            order: Vec::new(),
            categories: HashMap::new(),
            revision: 0,
            dirty: false,
        }
    }

    /// Create a store and load whatever the backend holds
    ///
    /// A failed load is logged and the store comes up empty.
    pub fn open(backend: B) -> Self {
        let mut store = Self::new(backend);
        if let Err(e) = store.load() {
            tracing::warn!(error = %e, "Starting with an empty category list");
        }
        store
    }

    /// The blob store this store saves to
    pub fn backend(&self) -> &B {
        &self.backend
    }

    // === Persistence ===

    /// Replace the in-memory list with the saved one
    ///
    /// A missing blob is not an error. A blob that fails to decode leaves
    /// memory untouched and returns [`CategoriesError::Decode`].
    pub fn load(&mut self) -> CategoriesResult<LoadStatus> {
        let bytes = match self.backend.get(STORAGE_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                tracing::info!("No saved categories found");
                return Ok(LoadStatus::Empty);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read saved categories");
                return Err(e);
            }
        };

        let (order, categories) = decode(&bytes).map_err(|e| {
            tracing::warn!(error = %e, "Saved categories are unreadable; keeping current state");
            e
        })?;

        let count = order.len();
        self.order = order;
        self.categories = categories;
        self.dirty = false;
        self.revision += 1;

        tracing::info!(categories = count, "Loaded categories");
        Ok(LoadStatus::Loaded { categories: count })
    }

    /// Write the full list to the backend, overwriting the previous blob
    ///
    /// On failure the in-memory list is unchanged and still marked dirty.
    pub fn save(&mut self) -> CategoriesResult<()> {
        let result = self
            .encode()
            .and_then(|bytes| self.backend.set(STORAGE_KEY, &bytes));

        match result {
            Ok(()) => {
                self.dirty = false;
                tracing::info!(categories = self.order.len(), "Saved categories");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to save categories");
                Err(e)
            }
        }
    }

    /// Best-effort save for suspend and exit hooks; failures are only logged
    pub fn flush(&mut self) {
        // save() has already logged the failure
        let _ = self.save();
    }

    /// The blob `save` would write
    pub fn encode(&self) -> CategoriesResult<Vec<u8>> {
        let ordered: Vec<&Category> = self.categories().collect();
        serde_json::to_vec_pretty(&ordered).map_err(|e| CategoriesError::Encode(e.to_string()))
    }

    // === Reads ===

    /// Categories in user order
    pub fn categories(&self) -> impl Iterator<Item = &Category> + '_ {
        self.order.iter().filter_map(|id| self.categories.get(id))
    }

    /// Owned copy of the list in user order
    pub fn snapshot(&self) -> Vec<Category> {
        self.categories().cloned().collect()
    }

    /// Category ids in user order
    pub fn category_ids(&self) -> &[CategoryId] {
        &self.order
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if there are no categories
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Get a category by id
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(&id)
    }

    /// Get the category at a list position
    pub fn category_at(&self, position: usize) -> Option<&Category> {
        self.order.get(position).and_then(|id| self.categories.get(id))
    }

    /// List position of a category, if it exists
    pub fn position_of(&self, id: CategoryId) -> Option<usize> {
        self.order.iter().position(|c| *c == id)
    }

    /// Find a category by name (case-insensitive, first match) or by id
    pub fn find_category(&self, identifier: &str) -> Option<&Category> {
        let name_lower = identifier.trim().to_lowercase();
        self.categories()
            .find(|c| c.name.to_lowercase() == name_lower)
            .or_else(|| self.categories().find(|c| c.id.matches(identifier)))
    }

    /// Bumped on every change to the in-memory list
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// True if memory has changes that have not been saved
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    // === Category mutations ===

    /// Append a new, empty category. Names are not checked for uniqueness.
    pub fn add_category(&mut self, name: impl Into<String>) -> CategoryId {
        let category = Category::new(name);
        let id = category.id;
        tracing::debug!(category = %id, name = %category.name, "Adding category");

        self.order.push(id);
        self.categories.insert(id, category);
        self.touch();
        id
    }

    /// Remove the categories at `positions`, returning them in list order
    pub fn remove_categories(&mut self, positions: &[usize]) -> CategoriesResult<Vec<Category>> {
        let removed_ids = reorder::remove_positions(&mut self.order, positions)?;
        let removed: Vec<Category> = removed_ids
            .iter()
            .filter_map(|id| self.categories.remove(id))
            .collect();

        tracing::debug!(count = removed.len(), "Removed categories");
        self.touch();
        Ok(removed)
    }

    /// Move the categories at `from` as a block starting at index `to` of the
    /// remaining list (see [`reorder::move_positions`])
    pub fn move_categories(&mut self, from: &[usize], to: usize) -> CategoriesResult<()> {
        reorder::move_positions(&mut self.order, from, to)?;
        tracing::debug!(?from, to, "Moved categories");
        self.touch();
        Ok(())
    }

    /// Run `f` against one category
    pub fn update_category<R>(
        &mut self,
        id: CategoryId,
        f: impl FnOnce(&mut Category) -> R,
    ) -> CategoriesResult<R> {
        let category = self
            .categories
            .get_mut(&id)
            .ok_or_else(|| CategoriesError::category_not_found(id.to_string()))?;

        let result = f(category);
        // the map key and the stored id must agree
        category.id = id;

        self.touch();
        Ok(result)
    }

    // === Entry mutations ===

    /// Append a built entry to a category
    pub fn add_entry(&mut self, category_id: CategoryId, entry: Entry) -> CategoriesResult<EntryId> {
        let entry_id = entry.id;
        self.update_category(category_id, |c| c.add_entry(entry))?;
        tracing::debug!(category = %category_id, entry = %entry_id, "Added entry");
        Ok(entry_id)
    }

    /// Parse form input and append the entry
    ///
    /// Unparseable amounts return [`CategoriesError::InvalidAmount`] and leave
    /// the store untouched.
    pub fn submit_entry(
        &mut self,
        category_id: CategoryId,
        draft: &EntryDraft,
    ) -> CategoriesResult<EntryId> {
        if !self.categories.contains_key(&category_id) {
            return Err(CategoriesError::category_not_found(category_id.to_string()));
        }

        let entry = draft.parse().map_err(|e| {
            tracing::debug!(error = %e, "Declined entry");
            e
        })?;
        self.add_entry(category_id, entry)
    }

    /// Remove entries by stored position
    pub fn remove_entries(
        &mut self,
        category_id: CategoryId,
        positions: &[usize],
    ) -> CategoriesResult<Vec<Entry>> {
        let removed = self.try_update_category(category_id, |c| c.remove_entries(positions))?;
        tracing::debug!(category = %category_id, count = removed.len(), "Removed entries");
        Ok(removed)
    }

    /// Remove entries by id, e.g. when deleting from a sorted view
    pub fn remove_entries_by_id(
        &mut self,
        category_id: CategoryId,
        ids: &[EntryId],
    ) -> CategoriesResult<Vec<Entry>> {
        let removed = self.try_update_category(category_id, |c| c.remove_entries_by_id(ids))?;
        tracing::debug!(category = %category_id, count = removed.len(), "Removed entries");
        Ok(removed)
    }

    // Like update_category, but only counts as a change when `f` succeeds
    fn try_update_category<R>(
        &mut self,
        id: CategoryId,
        f: impl FnOnce(&mut Category) -> CategoriesResult<R>,
    ) -> CategoriesResult<R> {
        let category = self
            .categories
            .get_mut(&id)
            .ok_or_else(|| CategoriesError::category_not_found(id.to_string()))?;

        let result = f(category)?;
        self.touch();
        Ok(result)
    }

    fn touch(&mut self) {
        self.revision += 1;
        self.dirty = true;
    }
}

type DecodedCategories = (Vec<CategoryId>, HashMap<CategoryId, Category>);

fn decode(bytes: &[u8]) -> CategoriesResult<DecodedCategories> {
    let list: Vec<Category> =
        serde_json::from_slice(bytes).map_err(|e| CategoriesError::Decode(e.to_string()))?;

    let mut order = Vec::with_capacity(list.len());
    let mut categories = HashMap::with_capacity(list.len());
    for category in list {
        let id = category.id;
        if categories.insert(id, category).is_some() {
            return Err(CategoriesError::Decode(format!(
                "duplicate category id {}",
                id.as_uuid()
            )));
        }
        order.push(id);
    }

    Ok((order, categories))
}
