//! Submitted-products list and its view/edit/delete dialogs.

use entrygrid_core::{DomainError, Entity, EntryId, ValidationError};
use entrygrid_products::{EntryCandidate, EntryField, EntryPatch, ProductEntry};
use entrygrid_store::EntryStore;

const NOT_AVAILABLE: &str = "N/A";

/// One table row, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    /// 1-based position in the list.
    pub serial: usize,
    pub id: EntryId,
    pub category: String,
    pub gender: String,
    pub age: String,
    pub price: String,
    pub discount: String,
}

impl ListRow {
    fn new(serial: usize, entry: &ProductEntry) -> Self {
        Self {
            serial,
            id: *entry.id(),
            category: entry.category().label().to_string(),
            gender: entry.gender().to_string(),
            age: entry
                .age()
                .map_or_else(|| NOT_AVAILABLE.to_string(), |a| a.to_string()),
            price: entry.price().to_string(),
            discount: entry.discount().to_string(),
        }
    }
}

/// The edit dialog's form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDialog {
    pub id: EntryId,
    pub form: EntryCandidate,
    pub error: Option<ValidationError>,
}

/// At most one dialog is open at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    View(EntryId),
    Edit(EditDialog),
    ConfirmDelete(EntryId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListView {
    modal: Modal,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn rows<S: EntryStore>(&self, store: &S) -> Vec<ListRow> {
        store
            .list()
            .iter()
            .enumerate()
            .map(|(index, entry)| ListRow::new(index + 1, entry))
            .collect()
    }

    pub fn open_view<S: EntryStore>(&mut self, store: &S, id: EntryId) -> bool {
        self.open_if_present(store, id, Modal::View(id))
    }

    /// The entry shown by an open view dialog.
    pub fn viewed<'a, S: EntryStore>(&self, store: &'a S) -> Option<&'a ProductEntry> {
        match self.modal {
            Modal::View(id) => store.get(id),
            _ => None,
        }
    }

    /// Open the edit dialog prefilled with the entry's current values.
    pub fn open_edit<S: EntryStore>(&mut self, store: &S, id: EntryId) -> bool {
        let Some(entry) = store.get(id) else {
            return false;
        };
        self.modal = Modal::Edit(EditDialog {
            id,
            form: entry.to_candidate(),
            error: None,
        });
        true
    }

    pub fn edit_field(&mut self, field: EntryField, value: impl Into<String>) -> bool {
        let Modal::Edit(dialog) = &mut self.modal else {
            return false;
        };
        dialog.form.set(field, value);
        dialog.error = None;
        true
    }

    /// Commit the edit form. The dialog closes on success and stays open
    /// with the error otherwise.
    pub fn submit_edit<S: EntryStore>(&mut self, store: &mut S) -> Result<(), DomainError> {
        let Modal::Edit(dialog) = &mut self.modal else {
            return Ok(());
        };

        let patch = EntryPatch::from(dialog.form.clone());
        match store.update(dialog.id, patch) {
            Ok(_) => {
                self.modal = Modal::Closed;
                Ok(())
            }
            Err(DomainError::Validation(err)) => {
                dialog.error = Some(err.clone());
                Err(DomainError::Validation(err))
            }
            Err(err) => {
                // The entry is gone; there is nothing left to edit.
                self.modal = Modal::Closed;
                Err(err)
            }
        }
    }

    pub fn open_delete<S: EntryStore>(&mut self, store: &S, id: EntryId) -> bool {
        self.open_if_present(store, id, Modal::ConfirmDelete(id))
    }

    /// Delete the entry awaiting confirmation and close the dialog.
    pub fn confirm_delete<S: EntryStore>(&mut self, store: &mut S) -> bool {
        let Modal::ConfirmDelete(id) = self.modal else {
            return false;
        };
        self.modal = Modal::Closed;
        store.delete(id)
    }

    pub fn close(&mut self) {
        self.modal = Modal::Closed;
    }

    fn open_if_present<S: EntryStore>(&mut self, store: &S, id: EntryId, modal: Modal) -> bool {
        if store.get(id).is_none() {
            return false;
        }
        self.modal = modal;
        true
    }
}
