use tracing::info;

use crate::models::files::UploadedFile;
use crate::store::SharedStore;
use crate::workflow::validation::{filter_csv_files, ValidationError};

/// Replaces the selected files with the CSVs of a new upload. Parsed data is
/// dropped since it no longer matches the files.
pub fn handle_files(store: &SharedStore, files: Vec<UploadedFile>) -> Result<usize, ValidationError> {
    let mut store = store.lock();
    if files.is_empty() {
        let err = ValidationError::NoFiles;
        store.show_error(err.to_string());
        return Err(err);
    }

    let csv_files = filter_csv_files(files);
    if csv_files.is_empty() {
        let err = ValidationError::NoCsvFiles;
        store.show_error(err.to_string());
        return Err(err);
    }

    let count = csv_files.len();
    info!("{count} CSV file(s) selected");
    store.set_files(csv_files);
    store.set_parsed_data(None);
    store.hide_notification();
    Ok(count)
}

pub fn remove_file(store: &SharedStore, index: usize) -> Result<UploadedFile, crate::store::StoreError> {
    let mut store = store.lock();
    let removed = store.remove_file(index)?;
    store.set_parsed_data(None);
    Ok(removed)
}
