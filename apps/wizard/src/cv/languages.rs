use super::items;
use super::EditError;
use crate::models::resume::{Language, LanguageField};

const KIND: &str = "language";

pub fn create_language() -> Language {
    Language::default()
}

pub fn add_language(languages: &mut Vec<Language>) -> usize {
    items::add_item(languages, create_language(), None)
}

pub fn delete_language(languages: &mut Vec<Language>, index: usize) -> Result<(), EditError> {
    items::delete_item(KIND, languages, index, None).map(|_| ())
}

pub fn update_language(
    languages: &mut [Language],
    index: usize,
    field: LanguageField,
    value: String,
) -> Result<(), EditError> {
    items::update_item(KIND, languages, index, |language| match field {
        LanguageField::Name => language.name = value,
        LanguageField::Proficiency => language.proficiency = value,
    })
}
