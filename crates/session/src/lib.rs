//! Headless presentation layer for product entry.
//!
//! Models the create view (bulk entry grid) and the list view (view/edit/delete
//! dialogs) as plain state objects driven by one `EntrySession`. Rendering is
//! left to the host.

pub mod config;
pub mod grid;
pub mod list;
pub mod preview;
pub mod route;
pub mod session;

pub use config::SessionConfig;
pub use grid::GridForm;
pub use list::{EditDialog, ListRow, ListView, Modal};
pub use preview::{ImagePreview, PreviewError, data_url, media_type_for, read_image_preview};
pub use route::Route;
pub use session::EntrySession;
