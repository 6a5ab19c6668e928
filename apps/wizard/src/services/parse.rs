use tracing::{info, warn};

use crate::backend_client::ResumeBackend;
use crate::errors::AppError;
use crate::models::resume::ParsedData;
use crate::store::SharedStore;

/// Sends the selected CSVs (and photo, if any) to `parse-linkedin`.
///
/// Only the progress banner is touched here; the caller decides what to keep.
/// A reset that lands while the request is in flight makes the result stale.
pub async fn parse_linkedin_data(
    store: &SharedStore,
    backend: &dyn ResumeBackend,
) -> Result<ParsedData, AppError> {
    let (files, photo, generation) = {
        let mut store = store.lock();
        store.show_info("Analyzing your LinkedIn data...", false);
        (
            store.files().to_vec(),
            store.photo().cloned(),
            store.generation(),
        )
    };

    let _loading = store.loading();
    info!("Parsing {} LinkedIn file(s)", files.len());
    let result = backend.parse_linkedin(&files, photo.as_ref()).await;

    let mut store = store.lock();
    if store.generation() != generation {
        warn!("Discarding parse result: session was reset while parsing");
        return Err(AppError::Conflict(
            "The session was reset while parsing".to_string(),
        ));
    }
    match result {
        Ok(parsed) => {
            store.hide_notification();
            Ok(parsed)
        }
        Err(e) => {
            store.show_error(format!("Error while parsing the data: {e}"));
            Err(e.into())
        }
    }
}
