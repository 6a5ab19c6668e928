use crate::cv::sections::section_has_data;
use crate::models::config::{ResumeConfig, Section};
use crate::models::resume::ParsedData;

/// Seeds the config from freshly parsed data: every experience and education
/// entry starts visible, and a section is enabled only when it has data.
pub fn initialize_config_from_data(parsed: &ParsedData, config: &mut ResumeConfig) {
    if !parsed.positions.is_empty() {
        config.experience_visible = Some((0..parsed.positions.len()).collect());
    }
    if !parsed.education.is_empty() {
        config.education_visible = Some((0..parsed.education.len()).collect());
    }
    for section in Section::ALL {
        config
            .sections
            .insert(section, section_has_data(section, parsed));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Education, Position};

    #[test]
    fn test_initialize_marks_everything_visible() {
        let parsed = ParsedData {
            positions: vec![Position::default(); 3],
            education: vec![Education::default()],
            skills: vec!["Rust".into()],
            ..ParsedData::default()
        };
        let mut config = ResumeConfig::default();

        initialize_config_from_data(&parsed, &mut config);

        assert_eq!(config.experience_visible, Some(vec![0, 1, 2]));
        assert_eq!(config.education_visible, Some(vec![0]));
        assert!(config.is_section_enabled(Section::Skills));
        assert!(!config.is_section_enabled(Section::Summary));
        assert!(!config.is_section_enabled(Section::Languages));
    }

    #[test]
    fn test_initialize_leaves_empty_lists_unrestricted() {
        let mut config = ResumeConfig::default();
        initialize_config_from_data(&ParsedData::default(), &mut config);
        assert_eq!(config.experience_visible, None);
        assert_eq!(config.education_visible, None);
        assert!(Section::ALL.iter().all(|s| !config.is_section_enabled(*s)));
    }
}
