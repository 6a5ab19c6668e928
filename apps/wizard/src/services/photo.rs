use crate::models::files::UploadedFile;
use crate::store::SharedStore;
use crate::workflow::validation::{validate_photo, ValidationError};

/// Accepts a JPEG/PNG photo up to 5 MB; anything else is refused with a banner.
pub fn handle_photo_upload(store: &SharedStore, photo: UploadedFile) -> Result<(), ValidationError> {
    let mut store = store.lock();
    if let Err(err) = validate_photo(&photo) {
        store.show_error(err.to_string());
        return Err(err);
    }
    store.set_photo(photo);
    store.hide_notification();
    Ok(())
}

pub fn remove_photo(store: &SharedStore) {
    store.lock().remove_photo();
}
