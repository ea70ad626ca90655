use std::collections::HashSet;

use chrono::Utc;

use entrygrid_core::{DomainError, DomainResult, Entity, EntryId};
use entrygrid_products::{EntryPatch, ProductEntry, ValidEntry, Validator};

use crate::store::EntryStore;

/// In-memory entry store scoped to one session.
///
/// Dropping the store discards every entry.
#[derive(Debug, Default)]
pub struct InMemoryEntryStore {
    validator: Validator,
    entries: Vec<ProductEntry>,
}

impl InMemoryEntryStore {
    pub fn new(validator: Validator) -> Self {
        Self {
            validator,
            entries: Vec::new(),
        }
    }

    fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| *e.id() == id)
    }
}

impl EntryStore for InMemoryEntryStore {
    fn validator(&self) -> &Validator {
        &self.validator
    }

    fn add(&mut self, entry: ValidEntry) -> DomainResult<EntryId> {
        let id = entry.id();
        if self.position(id).is_some() {
            return Err(DomainError::DuplicateId(id));
        }

        self.entries.push(ProductEntry::accept(entry, Utc::now()));
        tracing::debug!(entry_id = %id, total = self.entries.len(), "entry added");
        Ok(id)
    }

    fn add_batch(&mut self, entries: Vec<ValidEntry>) -> DomainResult<Vec<EntryId>> {
        // Check every id up front so a rejected batch leaves nothing behind.
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            let id = entry.id();
            if !seen.insert(id) || self.position(id).is_some() {
                return Err(DomainError::DuplicateId(id));
            }
        }

        let now = Utc::now();
        let ids: Vec<EntryId> = entries.iter().map(ValidEntry::id).collect();
        self.entries
            .extend(entries.into_iter().map(|e| ProductEntry::accept(e, now)));

        tracing::debug!(count = ids.len(), total = self.entries.len(), "batch added");
        Ok(ids)
    }

    fn update(&mut self, id: EntryId, patch: EntryPatch) -> DomainResult<&ProductEntry> {
        let index = self.position(id).ok_or(DomainError::NotFound(id))?;

        let mut form = self.entries[index].to_candidate();
        patch.apply_to(&mut form);
        let valid = self.validator.validate_with_id(&form, id)?;

        self.entries[index].replace_with(valid);
        tracing::debug!(entry_id = %id, "entry updated");
        Ok(&self.entries[index])
    }

    fn delete(&mut self, id: EntryId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.entries.remove(index);
                tracing::debug!(entry_id = %id, total = self.entries.len(), "entry deleted");
                true
            }
            None => false,
        }
    }

    fn get(&self, id: EntryId) -> Option<&ProductEntry> {
        self.position(id).map(|index| &self.entries[index])
    }

    fn list(&self) -> &[ProductEntry] {
        &self.entries
    }
}
