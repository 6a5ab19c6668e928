use serde::Serialize;

use crate::models::config::{ResumeConfig, Section};
use crate::models::resume::ParsedData;

pub fn move_section_up(order: &mut [Section], index: usize) {
    if index > 0 && index < order.len() {
        order.swap(index, index - 1);
    }
}

pub fn move_section_down(order: &mut [Section], index: usize) {
    if index + 1 < order.len() {
        order.swap(index, index + 1);
    }
}

/// Moves the section at `from` so it ends up at `to`, shifting the others.
/// Out-of-range positions leave the order untouched, so the result is always
/// a permutation of the input.
pub fn reorder_section(order: &mut Vec<Section>, from: usize, to: usize) {
    if from >= order.len() || to >= order.len() || from == to {
        return;
    }
    let moved = order.remove(from);
    order.insert(to, moved);
}

pub fn section_has_data(section: Section, parsed: &ParsedData) -> bool {
    match section {
        Section::Summary => !parsed.profile.summary.is_empty(),
        Section::Experience => !parsed.positions.is_empty(),
        Section::Education => !parsed.education.is_empty(),
        Section::Skills => !parsed.skills.is_empty(),
        Section::Languages => !parsed.languages.is_empty(),
        Section::Certifications => !parsed.certifications.is_empty(),
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SectionEntry {
    pub position: usize,
    pub section: Section,
    pub display_name: &'static str,
    pub enabled: bool,
    pub has_data: bool,
}

/// Sections in render order, with their toggle and data availability.
pub fn section_overview(config: &ResumeConfig, parsed: Option<&ParsedData>) -> Vec<SectionEntry> {
    config
        .section_order
        .iter()
        .enumerate()
        .map(|(position, &section)| SectionEntry {
            position,
            section,
            display_name: section.display_name(),
            enabled: config.is_section_enabled(section),
            has_data: parsed.is_some_and(|p| section_has_data(section, p)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn default_order() -> Vec<Section> {
        Section::ALL.to_vec()
    }

    fn as_set(order: &[Section]) -> BTreeSet<Section> {
        order.iter().copied().collect()
    }

    #[test]
    fn test_reorder_is_permutation() {
        let mut order = default_order();
        reorder_section(&mut order, 0, 5);
        assert_eq!(order[5], Section::Summary);
        assert_eq!(order[0], Section::Experience);
        assert_eq!(order.len(), 6);
        assert_eq!(as_set(&order), as_set(&default_order()));
    }

    #[test]
    fn test_reorder_backwards() {
        let mut order = default_order();
        reorder_section(&mut order, 4, 1);
        assert_eq!(
            order,
            vec![
                Section::Summary,
                Section::Languages,
                Section::Experience,
                Section::Education,
                Section::Skills,
                Section::Certifications,
            ]
        );
    }

    #[test]
    fn test_reorder_out_of_range_is_noop() {
        let mut order = default_order();
        reorder_section(&mut order, 2, 9);
        reorder_section(&mut order, 9, 0);
        assert_eq!(order, default_order());
    }

    #[test]
    fn test_move_up_at_top_is_noop() {
        let mut order = default_order();
        move_section_up(&mut order, 0);
        assert_eq!(order, default_order());
        move_section_up(&mut order, 1);
        assert_eq!(order[0], Section::Experience);
    }

    #[test]
    fn test_move_down_at_bottom_is_noop() {
        let mut order = default_order();
        move_section_down(&mut order, 5);
        assert_eq!(order, default_order());
        move_section_down(&mut order, 4);
        assert_eq!(order[5], Section::Languages);
    }

    #[test]
    fn test_section_has_data() {
        let mut parsed = ParsedData::default();
        assert!(!section_has_data(Section::Summary, &parsed));
        parsed.profile.summary = "Builder".into();
        parsed.skills.push("Rust".into());
        assert!(section_has_data(Section::Summary, &parsed));
        assert!(section_has_data(Section::Skills, &parsed));
        assert!(!section_has_data(Section::Languages, &parsed));
    }

    #[test]
    fn test_overview_follows_order() {
        let mut config = ResumeConfig::default();
        reorder_section(&mut config.section_order, 3, 0);
        config.sections.insert(Section::Skills, false);

        let overview = section_overview(&config, None);

        assert_eq!(overview[0].section, Section::Skills);
        assert!(!overview[0].enabled);
        assert!(!overview[0].has_data);
        assert_eq!(overview[0].display_name, "Compétences");
    }
}
