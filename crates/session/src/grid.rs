//! Bulk entry grid.

use entrygrid_core::{DomainError, EntryId, ValidationError};
use entrygrid_products::{EntryCandidate, EntryField, ImageRef, Validator};
use entrygrid_store::EntryStore;

/// Rows being typed into the entry grid, plus the last submission error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridForm {
    rows: Vec<EntryCandidate>,
    error: Option<ValidationError>,
    max_rows: usize,
}

impl GridForm {
    pub fn new(max_rows: usize) -> Self {
        Self {
            rows: Vec::new(),
            error: None,
            max_rows,
        }
    }

    pub fn rows(&self) -> &[EntryCandidate] {
        &self.rows
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub fn max_rows(&self) -> usize {
        self.max_rows
    }

    /// A new row may be started once the previous one is complete and valid.
    pub fn can_add_row(&self, validator: &Validator) -> bool {
        if self.rows.len() >= self.max_rows {
            return false;
        }
        self.rows.last().is_none_or(|last| validator.is_valid(last))
    }

    pub fn add_row(&mut self, validator: &Validator) -> bool {
        if !self.can_add_row(validator) {
            return false;
        }
        self.rows.push(EntryCandidate::default());
        self.error = None;
        true
    }

    /// Update one cell. Any edit clears the previous error.
    pub fn set_field(&mut self, row: usize, field: EntryField, value: impl Into<String>) -> bool {
        let Some(candidate) = self.rows.get_mut(row) else {
            return false;
        };
        candidate.set(field, value);
        self.error = None;
        true
    }

    pub fn attach_image(&mut self, row: usize, image: ImageRef) -> bool {
        let Some(candidate) = self.rows.get_mut(row) else {
            return false;
        };
        candidate.image = Some(image);
        self.error = None;
        true
    }

    /// Commit every row to `store` in one step.
    ///
    /// On success the grid is emptied. On failure the rows stay as typed and
    /// the validation error is kept for display.
    pub fn submit_all<S: EntryStore>(&mut self, store: &mut S) -> Result<Vec<EntryId>, DomainError> {
        match store.submit_batch(&self.rows) {
            Ok(ids) => {
                tracing::info!(count = ids.len(), "grid submitted");
                self.rows.clear();
                self.error = None;
                Ok(ids)
            }
            Err(err) => {
                match err.as_validation() {
                    Some(validation) => self.error = Some(validation.clone()),
                    None => tracing::warn!(error = %err, "grid submission failed"),
                }
                Err(err)
            }
        }
    }
}

impl Default for GridForm {
    fn default() -> Self {
        Self::new(entrygrid_products::BATCH_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entrygrid_core::ValidationReason;
    use entrygrid_store::InMemoryEntryStore;

    fn fill(grid: &mut GridForm, row: usize, values: [&str; 5]) {
        for (field, value) in EntryField::ALL.into_iter().zip(values) {
            assert!(grid.set_field(row, field, value));
        }
    }

    const BOOKS: [&str; 5] = ["Books", "Female", "30", "19.99", "10"];

    #[test]
    fn first_row_can_always_be_added() {
        let mut grid = GridForm::default();
        assert!(grid.add_row(&Validator::default()));
        assert_eq!(grid.rows().len(), 1);
    }

    #[test]
    fn next_row_waits_for_valid_previous_row() {
        let v = Validator::default();
        let mut grid = GridForm::default();
        grid.add_row(&v);
        assert!(!grid.add_row(&v));

        fill(&mut grid, 0, BOOKS);
        assert!(grid.add_row(&v));
        assert_eq!(grid.rows().len(), 2);
    }

    #[test]
    fn row_limit_is_enforced() {
        let v = Validator::default();
        let mut grid = GridForm::new(2);
        grid.add_row(&v);
        fill(&mut grid, 0, BOOKS);
        grid.add_row(&v);
        fill(&mut grid, 1, BOOKS);
        assert!(!grid.can_add_row(&v));
    }

    #[test]
    fn set_field_out_of_range_is_ignored() {
        let mut grid = GridForm::default();
        assert!(!grid.set_field(3, EntryField::Age, "1"));
    }

    #[test]
    fn failed_submit_keeps_rows_and_error_until_next_edit() {
        let v = Validator::default();
        let mut store = InMemoryEntryStore::default();
        let mut grid = GridForm::default();
        grid.add_row(&v);
        fill(&mut grid, 0, ["Books", "alien", "30", "19.99", "10"]);

        let err = grid.submit_all(&mut store).unwrap_err();
        assert!(err.as_validation().is_some());
        assert_eq!(grid.rows().len(), 1);
        assert_eq!(
            grid.error().map(|e| e.reason),
            Some(ValidationReason::InvalidGender)
        );
        assert!(store.is_empty());

        grid.set_field(0, EntryField::Gender, "other");
        assert!(grid.error().is_none());
    }

    #[test]
    fn successful_submit_clears_grid() {
        let v = Validator::default();
        let mut store = InMemoryEntryStore::default();
        let mut grid = GridForm::default();
        for row in 0..3 {
            grid.add_row(&v);
            fill(&mut grid, row, BOOKS);
        }

        let ids = grid.submit_all(&mut store).unwrap();
        assert_eq!(ids.len(), 3);
        assert!(grid.rows().is_empty());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn submitting_empty_grid_is_rejected() {
        let mut store = InMemoryEntryStore::default();
        let mut grid = GridForm::default();
        grid.submit_all(&mut store).unwrap_err();
        assert_eq!(grid.error().map(|e| e.reason), Some(ValidationReason::EmptyBatch));
    }
}
