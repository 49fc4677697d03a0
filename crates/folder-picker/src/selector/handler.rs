use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::backend::{FolderBackend, FolderHit, RequestError, SearchQuery};
use crate::config::PickerConfig;
use crate::events;
use crate::notify::{AlertSink, FOLDER_CREATED_DETAIL, FOLDER_CREATED_TITLE, LogAlertSink};
use crate::options::{self, FolderOption};

use super::errors::FolderNameError;
use super::traits::{FolderListener, NoopListener};
use super::types::{NameCheck, NewFolderDraft, SelectionMode};

/// State and orchestration of one folder picker.
///
/// The picker lets the user pick an existing folder (or the root) from a
/// searchable dropdown, or switch to an inline field and create a new
/// folder. All persistence goes through the [`FolderBackend`].
///
/// Handlers take `&mut self`; the host runs them on its UI loop one at a
/// time. Name-collision searches can also be driven in two steps with
/// [`begin_name_check`](Self::begin_name_check) and
/// [`apply_name_check`](Self::apply_name_check) when the host lets
/// searches overlap.
pub struct FolderSelector<B: FolderBackend> {
    config: PickerConfig,
    backend: B,
    alerts: Arc<dyn AlertSink>,
    listener: Box<dyn FolderListener>,
    current_folder: Option<FolderOption>,
    mode: SelectionMode,
    /// Draft kept across a cancelled creation so re-entering shows it again.
    parked_draft: Option<NewFolderDraft>,
    /// Sequence number of the latest name-collision search.
    name_check_seq: u64,
}

impl<B: FolderBackend> FolderSelector<B> {
    /// Create a picker in browsing mode with no folder resolved yet.
    ///
    /// Call [`init`](Self::init) to resolve the initial folder.
    pub fn new(config: PickerConfig, backend: B) -> Self {
        Self {
            config,
            backend,
            alerts: Arc::new(LogAlertSink),
            listener: Box::new(NoopListener),
            current_folder: None,
            mode: SelectionMode::Browsing,
            parked_draft: None,
            name_check_seq: 0,
        }
    }

    pub fn with_alerts(mut self, alerts: Arc<dyn AlertSink>) -> Self {
        self.alerts = alerts;
        self
    }

    pub fn with_listener(mut self, listener: impl FolderListener + 'static) -> Self {
        self.listener = Box::new(listener);
        self
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The selected folder. `None` before `init` or when the preselected id
    /// did not resolve.
    pub fn current_folder(&self) -> Option<&FolderOption> {
        self.current_folder.as_ref()
    }

    pub fn mode(&self) -> &SelectionMode {
        &self.mode
    }

    pub fn is_creating_new(&self) -> bool {
        self.mode.is_creating()
    }

    /// Mirrors creation mode to the host: false while a folder is being created.
    pub fn is_valid_selection(&self) -> bool {
        !self.mode.is_creating()
    }

    /// Name typed in the new-folder field, including a parked draft.
    pub fn new_folder_name(&self) -> &str {
        self.draft().map(|d| d.name.as_str()).unwrap_or("")
    }

    fn draft(&self) -> Option<&NewFolderDraft> {
        self.mode.draft().or(self.parked_draft.as_ref())
    }

    /// Resolve the initial folder and notify the listener.
    ///
    /// With a known folder id the option list is loaded and searched for
    /// it; otherwise the initial title (as a placeholder) or the root is
    /// used. If the id does not resolve, `current_folder` stays `None` and
    /// `on_load` is not fired.
    pub async fn init(&mut self) -> Result<(), RequestError> {
        events::log_selector_ready(&self.config);

        self.current_folder = self.resolve_initial_folder().await.inspect_err(|e| {
            events::log_request_error("init", e);
        })?;

        match &self.current_folder {
            Some(folder) => {
                info!(
                    event = "picker.selector.load_completed",
                    folder_id = ?folder.value(),
                    title = folder.text,
                );
                self.listener.on_load(&folder.to_ref());
            }
            None => {
                warn!(
                    event = "picker.selector.initial_folder_resolve_failed",
                    folder_id = ?self.config.initial_folder_id,
                    "Preselected folder id not found in search results"
                );
            }
        }

        Ok(())
    }

    async fn resolve_initial_folder(&self) -> Result<Option<FolderOption>, RequestError> {
        if let Some(id) = self.config.known_folder_id() {
            let options = self.list_options("").await?;
            return Ok(options.into_iter().find(|o| o.matches_id(id)));
        }

        let folder = match self.config.initial_title() {
            Some(title) => FolderOption::placeholder(title),
            None => FolderOption::root(self.config.root_name.as_str()),
        };
        Ok(Some(folder))
    }

    /// Load dropdown options for `query`.
    pub async fn list_options(&self, query: &str) -> Result<Vec<FolderOption>, RequestError> {
        options::list_options(
            &self.backend,
            query,
            &self.config.root_name,
            self.config.enable_create_new,
        )
        .await
    }

    /// Handle a pick from the dropdown.
    ///
    /// The create-new option switches to creation mode without notifying
    /// the host. Any other option becomes the current folder and fires
    /// `on_change`.
    pub fn on_selection_change(&mut self, option: FolderOption) {
        if option.is_create_new() {
            self.enter_creating_mode();
            return;
        }

        let folder = option.to_ref();
        debug!(
            event = "picker.selector.selection_changed",
            folder_id = ?folder.id,
            title = folder.title,
        );
        self.current_folder = Some(option);
        self.listener.on_change(&folder);
    }

    fn enter_creating_mode(&mut self) {
        if self.mode.is_creating() {
            return;
        }

        let draft = self.parked_draft.take().unwrap_or_default();
        self.mode = SelectionMode::Creating(draft);
        info!(event = "picker.folder.create_mode_started");
        self.listener.on_validity_changed(false);
    }

    fn leave_creating_mode(&mut self) -> Option<NewFolderDraft> {
        let previous = std::mem::take(&mut self.mode);
        // In-flight name checks belong to the draft being left.
        self.name_check_seq += 1;

        match previous {
            SelectionMode::Creating(draft) => {
                self.listener.on_validity_changed(true);
                Some(draft)
            }
            SelectionMode::Browsing => None,
        }
    }

    /// Record new text in the new-folder field and issue a ticket for the
    /// collision search. Returns `None` outside creation mode.
    pub fn begin_name_check(&mut self, name: &str) -> Option<NameCheck> {
        let Some(draft) = self.mode.draft_mut() else {
            debug!(
                event = "picker.folder.name_input_ignored",
                reason = "not in creation mode"
            );
            return None;
        };

        draft.name = name.to_string();
        draft.touched = true;
        self.name_check_seq += 1;

        Some(NameCheck {
            seq: self.name_check_seq,
            name: name.to_string(),
        })
    }

    /// Apply the hits of a collision search.
    ///
    /// Results for anything but the latest ticket are discarded. Returns
    /// true if the result was applied.
    pub fn apply_name_check(&mut self, check: &NameCheck, hits: &[FolderHit]) -> bool {
        if check.seq != self.name_check_seq {
            debug!(
                event = "picker.folder.name_check_discarded",
                seq = check.seq,
                latest = self.name_check_seq,
                name = check.name,
            );
            return false;
        }

        let Some(draft) = self.mode.draft_mut() else {
            return false;
        };

        let wanted = check.name.to_lowercase();
        draft.exists = hits.iter().any(|hit| hit.title.to_lowercase() == wanted);

        debug!(
            event = "picker.folder.name_check_completed",
            name = check.name,
            exists = draft.exists,
        );
        true
    }

    /// Handle a (debounced) edit of the new-folder field.
    ///
    /// Searches across folders and dashboards and flags the name as taken
    /// if any hit's title equals it case-insensitively. A failed search
    /// leaves the previous flag in place.
    pub async fn on_new_folder_name_input(&mut self, name: &str) -> Result<(), RequestError> {
        let Some(check) = self.begin_name_check(name) else {
            return Ok(());
        };

        let hits = self
            .backend
            .search(&SearchQuery::any(check.name()))
            .await
            .inspect_err(|e| events::log_request_error("name_check", e))?;

        self.apply_name_check(&check, &hits);
        Ok(())
    }

    /// Check the typed name: non-empty and not already taken.
    pub fn validate_new_folder_name(&self) -> Result<(), FolderNameError> {
        let Some(draft) = self.draft() else {
            return Err(FolderNameError::Empty);
        };

        if draft.name.is_empty() {
            return Err(FolderNameError::Empty);
        }
        if draft.exists {
            return Err(FolderNameError::AlreadyExists);
        }
        Ok(())
    }

    pub fn is_new_folder_name_valid(&self) -> bool {
        self.validate_new_folder_name().is_ok()
    }

    /// Validation message for the new-folder field, empty when valid.
    pub fn validation_error(&self) -> String {
        match self.validate_new_folder_name() {
            Ok(()) => String::new(),
            Err(e) => e.to_string(),
        }
    }

    /// Whether the host should render the validation message: only after
    /// the user has edited the field.
    pub fn should_show_validation(&self) -> bool {
        self.mode.draft().is_some_and(|d| d.touched) && !self.is_new_folder_name_valid()
    }

    /// Create a folder named after the trimmed draft.
    ///
    /// A blank name (or no creation in progress) is a no-op returning
    /// `Ok(None)`. On success an alert is emitted, creation mode ends and
    /// the new folder is selected as if the user had picked it. On failure
    /// nothing changes and the error is returned.
    pub async fn create_folder(&mut self) -> Result<Option<FolderOption>, RequestError> {
        let Some(title) = self
            .mode
            .draft()
            .and_then(NewFolderDraft::trimmed_name)
            .map(str::to_string)
        else {
            debug!(
                event = "picker.folder.create_skipped",
                reason = "no folder name"
            );
            return Ok(None);
        };

        info!(event = "picker.folder.create_started", title = title);

        let created = self
            .backend
            .create_dashboard_folder(&title)
            .await
            .inspect_err(|e| events::log_request_error("create_folder", e))?;

        info!(
            event = "picker.folder.create_completed",
            title = title,
            folder_id = created.id(),
        );

        self.alerts
            .notify_success(FOLDER_CREATED_TITLE, FOLDER_CREATED_DETAIL);

        self.leave_creating_mode();
        self.parked_draft = None;

        let folder = FolderOption::folder(title, created.id());
        self.on_selection_change(folder.clone());
        Ok(Some(folder))
    }

    /// Abandon creation and restore the initial folder.
    ///
    /// The typed name is kept and shown again on the next entry into
    /// creation mode. The folder is re-resolved the same way as in
    /// [`init`](Self::init) but no listener callback fires; if that fails
    /// the current folder is left as it was.
    pub async fn cancel_create_folder(&mut self) -> Result<(), RequestError> {
        if let Some(draft) = self.leave_creating_mode() {
            info!(
                event = "picker.folder.create_cancelled",
                draft = draft.name,
            );
            self.parked_draft = Some(draft);
        }

        let folder = self
            .resolve_initial_folder()
            .await
            .inspect_err(|e| events::log_request_error("cancel_create_folder", e))?;
        self.current_folder = folder;
        Ok(())
    }
}
