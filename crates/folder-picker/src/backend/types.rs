use serde::{Deserialize, Serialize};

/// Kind filter understood by the search backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchKind {
    #[serde(rename = "dash-folder")]
    DashFolder,
}

/// Parameters of a backend search call.
///
/// Serializes to `{"query": "...", "type": "dash-folder"}`. The `type`
/// key is omitted for untyped searches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub query: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<SearchKind>,
}

impl SearchQuery {
    /// Search restricted to folders.
    pub fn folders(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            kind: Some(SearchKind::DashFolder),
        }
    }

    /// Search across every kind of hit (folders and dashboards).
    pub fn any(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            kind: None,
        }
    }
}

/// A single search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderHit {
    pub title: String,
    pub id: i64,
}

impl FolderHit {
    pub fn new(title: impl Into<String>, id: i64) -> Self {
        Self {
            title: title.into(),
            id,
        }
    }
}

/// Response of the create-folder call: `{"dashboard": {"id": 42}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedDashboard {
    pub dashboard: DashboardRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardRef {
    pub id: i64,
}

impl CreatedDashboard {
    pub fn with_id(id: i64) -> Self {
        Self {
            dashboard: DashboardRef { id },
        }
    }

    pub fn id(&self) -> i64 {
        self.dashboard.id
    }
}
