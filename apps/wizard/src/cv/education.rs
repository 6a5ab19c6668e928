use super::items;
use super::EditError;
use crate::models::resume::{Education, EducationField};

const KIND: &str = "education";

pub fn create_education() -> Education {
    Education::default()
}

pub fn add_education(education: &mut Vec<Education>, visible: Option<&mut Vec<usize>>) -> usize {
    items::add_item(education, create_education(), visible)
}

pub fn delete_education(
    education: &mut Vec<Education>,
    index: usize,
    visible: Option<&[usize]>,
) -> Result<Option<Vec<usize>>, EditError> {
    items::delete_item(KIND, education, index, visible)
}

pub fn toggle_education_visibility(
    education: &[Education],
    index: usize,
    checked: bool,
    visible: Option<&[usize]>,
) -> Result<Vec<usize>, EditError> {
    items::toggle_visibility(KIND, education.len(), index, checked, visible)
}

pub fn update_education(
    education: &mut [Education],
    index: usize,
    field: EducationField,
    value: String,
) -> Result<(), EditError> {
    items::update_item(KIND, education, index, |entry| {
        let slot = match field {
            EducationField::School => &mut entry.school,
            EducationField::Degree => &mut entry.degree,
            EducationField::FieldOfStudy => &mut entry.field_of_study,
            EducationField::StartDate => &mut entry.start_date,
            EducationField::EndDate => &mut entry.end_date,
            EducationField::Activities => &mut entry.activities,
        };
        *slot = value;
    })
}

/// Header line shown for an entry, with placeholders for blank fields.
pub fn education_label(entry: &Education) -> String {
    let degree = if entry.degree.is_empty() {
        "Diplôme"
    } else {
        entry.degree.as_str()
    };
    let school = if entry.school.is_empty() {
        "École"
    } else {
        entry.school.as_str()
    };
    format!("{degree} - {school}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_education_label_placeholders() {
        assert_eq!(education_label(&Education::default()), "Diplôme - École");
    }

    #[test]
    fn test_toggle_education_twice() {
        let list = vec![Education::default(); 3];
        let off = toggle_education_visibility(&list, 0, false, Some(&[0, 1, 2])).unwrap();
        let on = toggle_education_visibility(&list, 0, true, Some(&off)).unwrap();
        assert_eq!(off, vec![1, 2]);
        assert_eq!(on, vec![0, 1, 2]);
    }

    #[test]
    fn test_update_education_unknown_index() {
        let mut list = vec![Education::default()];
        let err = update_education(&mut list, 4, EducationField::School, "MIT".into());
        assert!(err.is_err());
        assert_eq!(list[0].school, "");
    }

    #[test]
    fn test_add_then_delete_education() {
        let mut list = Vec::new();
        let mut visible = Vec::new();
        add_education(&mut list, Some(&mut visible));
        add_education(&mut list, Some(&mut visible));
        let visible = delete_education(&mut list, 0, Some(&visible)).unwrap();
        assert_eq!(visible, Some(vec![0]));
        assert_eq!(list.len(), 1);
    }
}
