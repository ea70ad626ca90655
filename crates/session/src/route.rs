use serde::{Deserialize, Serialize};

/// The two views of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Entry grid for creating products.
    #[default]
    Create,
    /// Submitted products with view/edit/delete actions.
    List,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Create => "/",
            Route::List => "/details",
        }
    }

    /// Map a path to a view. Unknown paths redirect to `Create`.
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Create,
            "/details" => Route::List,
            other => {
                tracing::debug!(path = other, "unknown route; redirecting to create view");
                Route::Create
            }
        }
    }
}
