use super::EditError;

/// Adds a trimmed skill name. Duplicates and blank names are rejected without
/// touching either list. An existing selection also receives the new skill.
pub fn add_skill(
    skills: &mut Vec<String>,
    name: &str,
    selected: Option<&mut Vec<String>>,
) -> Result<String, EditError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(EditError::EmptySkill);
    }
    if skills.iter().any(|s| s == trimmed) {
        return Err(EditError::DuplicateSkill(trimmed.to_string()));
    }

    skills.push(trimmed.to_string());
    if let Some(selected) = selected {
        selected.push(trimmed.to_string());
    }
    Ok(trimmed.to_string())
}

/// Removes `name` from the skill list and returns the selection without it.
pub fn delete_skill(
    skills: &mut Vec<String>,
    name: &str,
    selected: Option<&[String]>,
) -> Option<Vec<String>> {
    if let Some(pos) = skills.iter().position(|s| s == name) {
        skills.remove(pos);
    }
    selected.map(|sel| sel.iter().filter(|s| *s != name).cloned().collect())
}

/// Selects or deselects one skill. A missing selection starts from every skill.
pub fn toggle_skill_selection(
    skills: &[String],
    name: &str,
    checked: bool,
    selected: Option<&[String]>,
) -> Result<Vec<String>, EditError> {
    if !skills.iter().any(|s| s == name) {
        return Err(EditError::UnknownSkill(name.to_string()));
    }
    let mut selected = selected.map_or_else(|| skills.to_vec(), <[String]>::to_vec);
    if checked {
        if !selected.iter().any(|s| s == name) {
            selected.push(name.to_string());
        }
    } else {
        selected.retain(|s| s != name);
    }
    Ok(selected)
}
