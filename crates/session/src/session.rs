use std::path::Path;

use entrygrid_core::{DomainError, EntryId};
use entrygrid_products::{EntryField, ImageRef};
use entrygrid_store::{EntryStore, InMemoryEntryStore};

use crate::config::SessionConfig;
use crate::grid::GridForm;
use crate::list::{ListRow, ListView, Modal};
use crate::preview::{PreviewError, read_image_preview};
use crate::route::Route;

/// One page session: the store plus the state of both views.
///
/// Everything is owned here and dropped together; nothing outlives the
/// session.
#[derive(Debug)]
pub struct EntrySession<S = InMemoryEntryStore> {
    route: Route,
    store: S,
    grid: GridForm,
    list: ListView,
}

impl EntrySession<InMemoryEntryStore> {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_store(InMemoryEntryStore::new(config.validator()), config.grid_rows)
    }
}

impl Default for EntrySession<InMemoryEntryStore> {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl<S: EntryStore> EntrySession<S> {
    pub fn with_store(store: S, grid_rows: usize) -> Self {
        Self {
            route: Route::Create,
            store,
            grid: GridForm::new(grid_rows),
            list: ListView::new(),
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn navigate(&mut self, path: &str) -> Route {
        self.route = Route::resolve(path);
        self.list.close();
        self.route
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn grid(&self) -> &GridForm {
        &self.grid
    }

    pub fn add_row(&mut self) -> bool {
        self.grid.add_row(self.store.validator())
    }

    pub fn can_add_row(&self) -> bool {
        self.grid.can_add_row(self.store.validator())
    }

    pub fn set_field(&mut self, row: usize, field: EntryField, value: impl Into<String>) -> bool {
        self.grid.set_field(row, field, value)
    }

    pub fn attach_image(&mut self, row: usize, image: ImageRef) -> bool {
        self.grid.attach_image(row, image)
    }

    /// Read an image from disk, attach it to `row` and return its data URL.
    pub async fn upload_image(
        &mut self,
        row: usize,
        path: impl AsRef<Path>,
    ) -> Result<Option<String>, PreviewError> {
        let preview = read_image_preview(path).await?;
        if self.grid.attach_image(row, preview.image) {
            Ok(Some(preview.data_url))
        } else {
            Ok(None)
        }
    }

    /// Submit the grid; on success the session moves to the list view.
    pub fn submit_grid(&mut self) -> Result<Vec<EntryId>, DomainError> {
        let ids = self.grid.submit_all(&mut self.store)?;
        self.navigate(Route::List.path());
        Ok(ids)
    }

    pub fn list_rows(&self) -> Vec<ListRow> {
        self.list.rows(&self.store)
    }

    pub fn modal(&self) -> &Modal {
        self.list.modal()
    }

    pub fn view(&mut self, id: EntryId) -> bool {
        self.list.open_view(&self.store, id)
    }

    pub fn edit(&mut self, id: EntryId) -> bool {
        self.list.open_edit(&self.store, id)
    }

    pub fn edit_field(&mut self, field: EntryField, value: impl Into<String>) -> bool {
        self.list.edit_field(field, value)
    }

    pub fn submit_edit(&mut self) -> Result<(), DomainError> {
        self.list.submit_edit(&mut self.store)
    }

    pub fn request_delete(&mut self, id: EntryId) -> bool {
        self.list.open_delete(&self.store, id)
    }

    pub fn confirm_delete(&mut self) -> bool {
        self.list.confirm_delete(&mut self.store)
    }

    pub fn close_modal(&mut self) {
        self.list.close();
    }
}
