use bytes::Bytes;
use tracing::{info, warn};

use crate::backend_client::ResumeBackend;
use crate::errors::AppError;
use crate::store::SharedStore;
use crate::workflow::data_mapper::prepare_data_for_pdf;

pub const PDF_FILE_NAME: &str = "cv.pdf";

/// Renders the résumé through `generate-pdf` and keeps the bytes as the
/// current preview. Also serves as "refresh".
pub async fn generate_preview(
    store: &SharedStore,
    backend: &dyn ResumeBackend,
) -> Result<Bytes, AppError> {
    let (payload, generation) = {
        let mut store = store.lock();
        let Some(parsed) = store.parsed_data() else {
            let err = AppError::no_parsed_data();
            store.show_error(err.to_string());
            return Err(err);
        };
        let payload = prepare_data_for_pdf(parsed, store.config(), store.contact(), store.photo());
        (payload, store.generation())
    };

    let _loading = store.loading();
    let result = backend.generate_pdf(&payload).await;

    let mut store = store.lock();
    if store.generation() != generation {
        warn!("Discarding generated PDF: session was reset meanwhile");
        return Err(AppError::Conflict(
            "The session was reset while generating the PDF".to_string(),
        ));
    }
    match result {
        Ok(pdf) => {
            info!("Preview ready ({} bytes)", pdf.len());
            store.set_pdf(Some(pdf.clone()));
            Ok(pdf)
        }
        Err(e) => {
            store.show_error(format!("Error while generating the preview: {e}"));
            Err(e.into())
        }
    }
}

/// The current PDF, for download.
pub fn download_pdf(store: &SharedStore) -> Result<Bytes, AppError> {
    let mut store = store.lock();
    match store.pdf().cloned() {
        Some(pdf) => Ok(pdf),
        None => {
            let message = "No PDF to download";
            store.show_error(message);
            Err(AppError::NotFound(message.to_string()))
        }
    }
}
