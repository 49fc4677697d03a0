pub mod errors;
pub mod traits;
pub mod types;

pub use errors::RequestError;
pub use traits::FolderBackend;
pub use types::{CreatedDashboard, DashboardRef, FolderHit, SearchKind, SearchQuery};
