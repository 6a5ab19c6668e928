//! List bookkeeping shared by the experience and education editors: appending,
//! removing and toggling entries while keeping the visible-index list valid.

use super::EditError;

/// Appends `item`. When a visibility list exists the new index is made visible.
pub fn add_item<T>(list: &mut Vec<T>, item: T, visible: Option<&mut Vec<usize>>) -> usize {
    list.push(item);
    let index = list.len() - 1;
    if let Some(visible) = visible {
        if !visible.contains(&index) {
            visible.push(index);
        }
    }
    index
}

/// Removes `list[index]` and returns the visibility list remapped to the new
/// positions: `index` is dropped and every greater index shifts down by one.
/// A `None` list ("all visible") stays `None`.
pub fn delete_item<T>(
    kind: &'static str,
    list: &mut Vec<T>,
    index: usize,
    visible: Option<&[usize]>,
) -> Result<Option<Vec<usize>>, EditError> {
    if index >= list.len() {
        return Err(EditError::IndexOutOfRange {
            kind,
            index,
            len: list.len(),
        });
    }
    list.remove(index);
    Ok(visible.map(|v| remap_after_delete(v, index)))
}

pub fn remap_after_delete(visible: &[usize], index: usize) -> Vec<usize> {
    visible
        .iter()
        .filter(|&&i| i != index)
        .map(|&i| if i > index { i - 1 } else { i })
        .collect()
}

/// Shows (`checked`) or hides one index. The result stays sorted ascending
/// and free of duplicates. A missing list is first expanded to every index.
pub fn toggle_visibility(
    kind: &'static str,
    len: usize,
    index: usize,
    checked: bool,
    visible: Option<&[usize]>,
) -> Result<Vec<usize>, EditError> {
    if index >= len {
        return Err(EditError::IndexOutOfRange { kind, index, len });
    }
    let mut visible = match visible {
        Some(v) => v.to_vec(),
        None => (0..len).collect(),
    };
    toggle_index(&mut visible, index, checked);
    Ok(visible)
}

pub fn toggle_index(visible: &mut Vec<usize>, index: usize, checked: bool) {
    if checked {
        if let Err(pos) = visible.binary_search(&index) {
            visible.insert(pos, index);
        }
    } else {
        visible.retain(|&i| i != index);
    }
}

/// Applies `apply` to `list[index]`, leaving the list untouched when the index is unknown.
pub fn update_item<T>(
    kind: &'static str,
    list: &mut [T],
    index: usize,
    apply: impl FnOnce(&mut T),
) -> Result<(), EditError> {
    let len = list.len();
    let item = list
        .get_mut(index)
        .ok_or(EditError::IndexOutOfRange { kind, index, len })?;
    apply(item);
    Ok(())
}
