use tracing::{debug, error, info};

use crate::backend::{FolderBackend, FolderHit, RequestError, SearchQuery};

use super::types::FolderOption;

/// Query prefixes of "root" that keep the root option in the list.
const ROOT_TOKENS: [&str; 4] = ["r", "ro", "roo", "root"];

/// Returns true if `query` should list the root option.
///
/// Matches the empty query and any case-insensitive prefix of "root".
pub fn is_root_query(query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let lowered = query.to_lowercase();
    ROOT_TOKENS.contains(&lowered.as_str())
}

/// Build dropdown options from backend hits, preserving backend order.
///
/// When both synthetic entries apply the order is
/// `[create-new, root, ...hits]`.
pub fn build_options(
    query: &str,
    hits: Vec<FolderHit>,
    root_name: &str,
    enable_create_new: bool,
) -> Vec<FolderOption> {
    let mut options = Vec::with_capacity(hits.len() + 2);

    if enable_create_new && query.is_empty() {
        options.push(FolderOption::create_new());
    }

    if is_root_query(query) {
        options.push(FolderOption::root(root_name));
    }

    options.extend(hits.into_iter().map(FolderOption::from));
    options
}

/// Search the backend for folders matching `query` and build the option list.
///
/// A failed search yields no options; the error is returned to the caller.
pub async fn list_options<B: FolderBackend>(
    backend: &B,
    query: &str,
    root_name: &str,
    enable_create_new: bool,
) -> Result<Vec<FolderOption>, RequestError> {
    debug!(event = "picker.options.load_started", query = query);

    let hits = backend
        .search(&SearchQuery::folders(query))
        .await
        .map_err(|e| {
            error!(
                event = "picker.options.load_failed",
                query = query,
                error = %e,
            );
            e
        })?;

    let options = build_options(query, hits, root_name, enable_create_new);

    info!(
        event = "picker.options.load_completed",
        query = query,
        count = options.len()
    );

    Ok(options)
}
