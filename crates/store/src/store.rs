use entrygrid_core::{DomainResult, EntryId};
use entrygrid_products::{EntryCandidate, EntryPatch, ProductEntry, ValidEntry, Validator};

/// Ordered collection of accepted product entries.
///
/// ## Invariants
///
/// - Only `ValidEntry` values get in, so every stored entry passed the
///   validator when it was committed.
/// - Insertion order is preserved and ids are unique.
/// - `update` re-validates the merged entry before committing; a failed
///   update leaves the stored entry untouched.
///
/// All methods run to completion on the caller's thread. Mutation takes
/// `&mut self`; there is no interior locking.
pub trait EntryStore {
    /// Rules used to re-validate entries on update.
    fn validator(&self) -> &Validator;

    /// Append one accepted entry.
    fn add(&mut self, entry: ValidEntry) -> DomainResult<EntryId>;

    /// Append several entries in one step: either all are stored or none is.
    fn add_batch(&mut self, entries: Vec<ValidEntry>) -> DomainResult<Vec<EntryId>>;

    /// Merge `patch` into the entry with `id`, re-validate and commit.
    fn update(&mut self, id: EntryId, patch: EntryPatch) -> DomainResult<&ProductEntry>;

    /// Remove the entry with `id`. Returns `false` if it was not present.
    fn delete(&mut self, id: EntryId) -> bool;

    fn get(&self, id: EntryId) -> Option<&ProductEntry>;

    /// Entries in insertion order.
    fn list(&self) -> &[ProductEntry];

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    /// Validate a single form and store it.
    fn submit(&mut self, candidate: &EntryCandidate) -> DomainResult<EntryId> {
        let entry = self.validator().validate(candidate)?;
        self.add(entry)
    }

    /// Validate a grid of rows and store all of them, or none.
    fn submit_batch(&mut self, rows: &[EntryCandidate]) -> DomainResult<Vec<EntryId>> {
        let entries = self.validator().validate_batch(rows)?;
        self.add_batch(entries)
    }
}
