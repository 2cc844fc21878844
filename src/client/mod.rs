//! The browser client's behavior: persisted session keys, page navigation,
//! plan-gated feature controls and the feature detail pane.

pub mod access;
pub mod api;
pub mod app;
pub mod dispatcher;
pub mod layout;
pub mod pages;
pub mod session;
pub mod storage;

pub use access::{apply_feature_lock, apply_plan_lock};
pub use api::{AuthClient, OAuthProvider, DEFAULT_SERVER_URL};
pub use app::{ClientApp, DashboardView, FeaturePane, Notice};
pub use dispatcher::{Dispatch, FeatureDispatcher};
pub use layout::{Affordance, AffordanceGroup, AffordanceLayout};
pub use pages::{Page, PageController, PageEntry};
pub use session::{SessionState, PLAN_KEY, USER_EMAIL_KEY};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message:?}")]
    Api {
        status: u16,
        message: Option<String>,
    },

    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage contents are invalid: {0}")]
    Json(#[from] serde_json::Error),
}
