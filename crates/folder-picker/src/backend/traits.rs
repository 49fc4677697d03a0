//! Backend trait definition.

use std::future::Future;
use std::sync::Arc;

use super::errors::RequestError;
use super::types::{CreatedDashboard, FolderHit, SearchQuery};

/// Remote service the picker searches and creates folders through.
///
/// Implementations own transport concerns (HTTP, auth, timeouts). The
/// picker issues at most one call per user action and never retries.
pub trait FolderBackend: Send + Sync {
    /// Run a search and return hits in backend order.
    fn search(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<Vec<FolderHit>, RequestError>> + Send;

    /// Create a new top-level folder with the given title.
    fn create_dashboard_folder(
        &self,
        title: &str,
    ) -> impl Future<Output = Result<CreatedDashboard, RequestError>> + Send;
}

impl<T: FolderBackend> FolderBackend for Arc<T> {
    fn search(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<Vec<FolderHit>, RequestError>> + Send {
        (**self).search(query)
    }

    fn create_dashboard_folder(
        &self,
        title: &str,
    ) -> impl Future<Output = Result<CreatedDashboard, RequestError>> + Send {
        (**self).create_dashboard_folder(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticBackend;

    impl FolderBackend for StaticBackend {
        async fn search(&self, query: &SearchQuery) -> Result<Vec<FolderHit>, RequestError> {
            Ok(vec![FolderHit::new(query.query.clone(), 1)])
        }

        async fn create_dashboard_folder(
            &self,
            _title: &str,
        ) -> Result<CreatedDashboard, RequestError> {
            Err(RequestError::Transport {
                message: "offline".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_backend_async_methods() {
        let backend = StaticBackend;
        let hits = backend.search(&SearchQuery::folders("x")).await.unwrap();
        assert_eq!(hits, vec![FolderHit::new("x", 1)]);

        let err = backend.create_dashboard_folder("x").await.unwrap_err();
        assert!(matches!(err, RequestError::Transport { .. }));
    }
}
