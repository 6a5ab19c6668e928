use super::items;
use super::EditError;
use crate::models::resume::{Position, PositionField};

const KIND: &str = "experience";

pub fn create_experience() -> Position {
    Position::default()
}

pub fn add_experience(positions: &mut Vec<Position>, visible: Option<&mut Vec<usize>>) -> usize {
    items::add_item(positions, create_experience(), visible)
}

/// Deletes `positions[index]` and returns the remapped visible-index list.
pub fn delete_experience(
    positions: &mut Vec<Position>,
    index: usize,
    visible: Option<&[usize]>,
) -> Result<Option<Vec<usize>>, EditError> {
    items::delete_item(KIND, positions, index, visible)
}

pub fn toggle_experience_visibility(
    positions: &[Position],
    index: usize,
    checked: bool,
    visible: Option<&[usize]>,
) -> Result<Vec<usize>, EditError> {
    items::toggle_visibility(KIND, positions.len(), index, checked, visible)
}

pub fn update_experience(
    positions: &mut [Position],
    index: usize,
    field: PositionField,
    value: String,
) -> Result<(), EditError> {
    items::update_item(KIND, positions, index, |position| {
        let slot = match field {
            PositionField::Title => &mut position.title,
            PositionField::Company => &mut position.company,
            PositionField::Description => &mut position.description,
            PositionField::Location => &mut position.location,
            PositionField::StartedOn => &mut position.started_on,
            PositionField::FinishedOn => &mut position.finished_on,
        };
        *slot = value;
    })
}

/// Header line shown for an entry, with placeholders for blank fields.
pub fn experience_label(position: &Position) -> String {
    let title = if position.title.is_empty() {
        "Sans titre"
    } else {
        position.title.as_str()
    };
    let company = if position.company.is_empty() {
        "Entreprise"
    } else {
        position.company.as_str()
    };
    format!("{title} - {company}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(n: usize) -> Vec<Position> {
        (0..n)
            .map(|i| Position {
                title: format!("Role {i}"),
                ..Position::default()
            })
            .collect()
    }

    #[test]
    fn test_delete_experience_remaps_visibility() {
        let mut list = positions(4);
        let visible = delete_experience(&mut list, 1, Some(&[0, 1, 3])).unwrap();
        assert_eq!(visible, Some(vec![0, 2]));
        assert_eq!(list.len(), 3);
        assert_eq!(list[1].title, "Role 2");
    }

    #[test]
    fn test_update_experience_field() {
        let mut list = positions(1);
        update_experience(&mut list, 0, PositionField::Company, "Acme".into()).unwrap();
        assert_eq!(list[0].company, "Acme");
        assert_eq!(experience_label(&list[0]), "Role 0 - Acme");
    }

    #[test]
    fn test_label_placeholders() {
        assert_eq!(experience_label(&Position::default()), "Sans titre - Entreprise");
    }

    #[test]
    fn test_add_experience_without_visibility_list() {
        let mut list = positions(2);
        assert_eq!(add_experience(&mut list, None), 2);
        assert_eq!(list[2], Position::default());
    }
}
