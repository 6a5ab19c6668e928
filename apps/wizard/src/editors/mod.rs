// HTTP handlers for the configure step, one module per editor. Each handler
// runs a `cv` transform against the store and answers with the re-rendered
// list, so the page never has to rebuild state on its own.

pub mod certifications;
pub mod education;
pub mod experience;
pub mod languages;
pub mod profile;
pub mod section_order;
pub mod settings;
pub mod skills;

use serde::Deserialize;

use crate::cv::EditError;
use crate::errors::AppError;
use crate::models::config::ResumeConfig;
use crate::models::resume::ParsedData;
use crate::store::{SharedStore, StateField};

/// Runs `edit` on copies of the parsed data and config. The store only sees
/// the copies when the edit succeeds, and then as a single change.
pub(crate) fn edit_resume<R>(
    store: &SharedStore,
    edit: impl FnOnce(&mut ParsedData, &mut ResumeConfig) -> Result<R, EditError>,
) -> Result<R, AppError> {
    let mut store = store.lock();
    let Some(parsed) = store.parsed_data() else {
        return Err(AppError::no_parsed_data());
    };
    let mut data = parsed.clone();
    let mut config = store.config().clone();

    let out = edit(&mut data, &mut config)?;

    store.update(&[StateField::ParsedData, StateField::CurrentConfig], |s| {
        s.parsed_data = Some(data);
        s.current_config = config;
    });
    Ok(out)
}

/// Read access to the parsed data, or the "upload first" conflict.
pub(crate) fn with_resume<R>(
    store: &SharedStore,
    read: impl FnOnce(&ParsedData, &ResumeConfig) -> R,
) -> Result<R, AppError> {
    let store = store.lock();
    let parsed = store.parsed_data().ok_or_else(AppError::no_parsed_data)?;
    Ok(read(parsed, store.config()))
}

/// `None` means every entry is shown.
pub(crate) fn is_visible(visible: Option<&[usize]>, index: usize) -> bool {
    visible.map_or(true, |v| v.contains(&index))
}

#[derive(Debug, Deserialize)]
pub struct FieldUpdate<F> {
    pub field: F,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct VisibilityToggle {
    pub checked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_parsed_data;

    #[test]
    fn test_failed_edit_leaves_store_untouched() {
        let store = SharedStore::new();
        store.lock().set_parsed_data(Some(sample_parsed_data()));
        let revision = store.lock().revision();

        let result = edit_resume(&store, |data, _| {
            data.skills.clear();
            Err::<(), _>(EditError::EmptySkill)
        });

        assert!(result.is_err());
        let store = store.lock();
        assert_eq!(store.parsed_data().unwrap().skills.len(), 2);
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_edit_without_data_is_conflict() {
        let store = SharedStore::new();
        let result = edit_resume(&store, |_, _| Ok(()));
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[test]
    fn test_visibility_defaults_to_shown() {
        assert!(is_visible(None, 7));
        assert!(is_visible(Some(&[0, 2]), 2));
        assert!(!is_visible(Some(&[0, 2]), 1));
    }
}
