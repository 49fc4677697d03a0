//! End-to-end flows through the public folder picker API.
//!
//! These tests drive a `FolderSelector` configured from TOML against an
//! in-memory backend, the way a host UI would.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use folder_picker::{
    BufferedAlertSink, CreatedDashboard, FolderBackend, FolderHit, FolderListener, FolderOption,
    FolderRef, FolderSelector, InputDebouncer, OptionKind, PickerConfig, RequestError,
    SearchQuery, config,
};

/// Backend holding folders in memory. Searches match titles by
/// case-insensitive substring; creation appends a folder.
struct MemoryBackend {
    folders: Mutex<Vec<FolderHit>>,
    dashboards: Vec<FolderHit>,
    next_id: Mutex<i64>,
}

impl MemoryBackend {
    fn new(folders: Vec<FolderHit>, dashboards: Vec<FolderHit>) -> Self {
        Self {
            folders: Mutex::new(folders),
            dashboards,
            next_id: Mutex::new(100),
        }
    }
}

impl FolderBackend for MemoryBackend {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<FolderHit>, RequestError> {
        let needle = query.query.to_lowercase();
        let folders = self.folders.lock().unwrap().clone();
        let pool: Vec<FolderHit> = match query.kind {
            Some(_) => folders,
            None => folders.into_iter().chain(self.dashboards.clone()).collect(),
        };
        Ok(pool
            .into_iter()
            .filter(|hit| hit.title.to_lowercase().contains(&needle))
            .collect())
    }

    async fn create_dashboard_folder(&self, title: &str) -> Result<CreatedDashboard, RequestError> {
        let mut folders = self.folders.lock().unwrap();
        if folders
            .iter()
            .any(|f| f.title.eq_ignore_ascii_case(title))
        {
            return Err(RequestError::Backend {
                status: 409,
                message: "a folder with the same name already exists".to_string(),
            });
        }
        let mut next_id = self.next_id.lock().unwrap();
        let id = *next_id;
        *next_id += 1;
        folders.push(FolderHit::new(title, id));
        Ok(CreatedDashboard::with_id(id))
    }
}

#[derive(Default)]
struct Host {
    loads: Mutex<Vec<FolderRef>>,
    changes: Mutex<Vec<FolderRef>>,
}

impl FolderListener for Host {
    fn on_load(&self, folder: &FolderRef) {
        self.loads.lock().unwrap().push(folder.clone());
    }

    fn on_change(&self, folder: &FolderRef) {
        self.changes.lock().unwrap().push(folder.clone());
    }
}

fn backend() -> Arc<MemoryBackend> {
    Arc::new(MemoryBackend::new(
        vec![
            FolderHit::new("Operations", 5),
            FolderHit::new("Reporting", 7),
        ],
        vec![FolderHit::new("Weekly Report", 11)],
    ))
}

#[tokio::test]
async fn test_preselected_folder_then_pick_another() {
    let config = config::from_toml_str(
        r#"
        initial_folder_id = 5
        enable_create_new = "true"
        "#,
    )
    .unwrap();
    let host = Arc::new(Host::default());
    let mut selector = FolderSelector::new(config, backend()).with_listener(host.clone());

    selector.init().await.unwrap();
    assert_eq!(
        selector.current_folder(),
        Some(&FolderOption::folder("Operations", 5))
    );

    let options = selector.list_options("rep").await.unwrap();
    assert_eq!(options, vec![FolderOption::folder("Reporting", 7)]);

    selector.on_selection_change(options[0].clone());

    assert_eq!(
        host.loads.lock().unwrap().as_slice(),
        &[FolderRef {
            id: Some(5),
            title: "Operations".to_string()
        }]
    );
    assert_eq!(
        host.changes.lock().unwrap().as_slice(),
        &[FolderRef {
            id: Some(7),
            title: "Reporting".to_string()
        }]
    );
}

#[tokio::test]
async fn test_root_query_lists_root_before_matches() {
    let mut selector = FolderSelector::new(PickerConfig::default(), backend());
    selector.init().await.unwrap();

    let options = selector.list_options("Ro").await.unwrap();

    assert_eq!(options.len(), 1);
    assert_eq!(options[0].kind, OptionKind::Root);
    assert_eq!(options[0].text, "Root");
}

#[tokio::test]
async fn test_create_folder_flow() {
    let config = PickerConfig::default().with_create_new(true);
    let host = Arc::new(Host::default());
    let alerts = Arc::new(BufferedAlertSink::new());
    let mut selector = FolderSelector::new(config, backend())
        .with_listener(host.clone())
        .with_alerts(alerts.clone());
    selector.init().await.unwrap();

    let options = selector.list_options("").await.unwrap();
    assert_eq!(options[0].kind, OptionKind::CreateNew);
    assert_eq!(options[1].kind, OptionKind::Root);

    selector.on_selection_change(options[0].clone());
    assert!(!selector.is_valid_selection());

    // A dashboard title counts as a collision too.
    selector
        .on_new_folder_name_input("weekly report")
        .await
        .unwrap();
    assert_eq!(
        selector.validation_error(),
        "A Folder or Dashboard with the same name already exists"
    );

    selector.on_new_folder_name_input("Billing ").await.unwrap();
    assert!(selector.is_new_folder_name_valid());

    let created = selector.create_folder().await.unwrap();
    assert_eq!(created, Some(FolderOption::folder("Billing", 100)));
    assert!(selector.is_valid_selection());
    assert_eq!(alerts.drain().len(), 1);
    assert_eq!(
        host.changes.lock().unwrap().last(),
        Some(&FolderRef {
            id: Some(100),
            title: "Billing".to_string()
        })
    );

    let listed = selector.list_options("bill").await.unwrap();
    assert_eq!(listed, vec![FolderOption::folder("Billing", 100)]);
}

#[tokio::test]
async fn test_backend_rejection_keeps_creation_open() {
    let config = PickerConfig::default().with_create_new(true);
    let mut selector = FolderSelector::new(config, backend());
    selector.init().await.unwrap();

    selector.on_selection_change(FolderOption::create_new());
    // Skip the collision search so the backend is the one to reject.
    selector.begin_name_check("operations");

    let err = selector.create_folder().await.unwrap_err();
    assert!(matches!(err, RequestError::Backend { status: 409, .. }));
    assert!(selector.is_creating_new());
}

#[tokio::test(start_paused = true)]
async fn test_debounced_typing_checks_only_final_name() {
    let config = PickerConfig::default().with_create_new(true);
    let backend = backend();
    let mut selector = FolderSelector::new(config, backend.clone());
    selector.on_selection_change(FolderOption::create_new());

    let debouncer = InputDebouncer::default();
    let mut pending = Vec::new();
    for (delay, text) in [(0, "R"), (120, "Rep"), (120, "Reporting")] {
        tokio::time::sleep(Duration::from_millis(delay)).await;
        let debouncer = debouncer.clone();
        pending.push(tokio::spawn(async move { debouncer.settle(text).await }));
        tokio::task::yield_now().await;
    }

    let mut settled = Vec::new();
    for handle in pending {
        settled.push(handle.await.unwrap());
    }
    assert_eq!(settled, vec![None, None, Some("Reporting")]);

    for name in settled.into_iter().flatten() {
        selector.on_new_folder_name_input(name).await.unwrap();
    }

    assert_eq!(selector.new_folder_name(), "Reporting");
    assert!(!selector.is_new_folder_name_valid());
}
