use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One named résumé block. Declaration order is the default section order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Summary,
    Experience,
    Education,
    Skills,
    Languages,
    Certifications,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Summary,
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Languages,
        Section::Certifications,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Summary => "summary",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Languages => "languages",
            Section::Certifications => "certifications",
        }
    }

    /// Heading printed on the generated résumé.
    pub fn display_name(&self) -> &'static str {
        match self {
            Section::Summary => "À Propos",
            Section::Experience => "Expérience Professionnelle",
            Section::Education => "Formation",
            Section::Skills => "Compétences",
            Section::Languages => "Langues",
            Section::Certifications => "Certifications",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    #[default]
    Modern,
    Classic,
    Creative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub primary: String,
    pub text: String,
    pub secondary_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorKey {
    Primary,
    Text,
    SecondaryText,
}

/// Rendering options sent to `generate-pdf` next to the résumé data.
///
/// `None` visibility lists mean "everything visible"; `None` skill selection
/// means "no restriction".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeConfig {
    pub sections: BTreeMap<Section, bool>,
    pub section_order: Vec<Section>,
    pub experience_visible: Option<Vec<usize>>,
    pub education_visible: Option<Vec<usize>>,
    pub skills_selected: Option<Vec<String>>,
    pub template: Template,
    pub colors: ColorScheme,
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self {
            sections: Section::ALL.iter().map(|s| (*s, true)).collect(),
            section_order: Section::ALL.to_vec(),
            experience_visible: None,
            education_visible: None,
            skills_selected: None,
            template: Template::Modern,
            colors: crate::template::presets::template_preset(Template::Modern),
        }
    }
}

impl ResumeConfig {
    pub fn is_section_enabled(&self, section: Section) -> bool {
        self.sections.get(&section).copied().unwrap_or(false)
    }
}

/// Partial update merged over the current config (shallow, per top-level key).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigPatch {
    pub sections: Option<BTreeMap<Section, bool>>,
    pub section_order: Option<Vec<Section>>,
    #[serde(default, deserialize_with = "double_option")]
    pub experience_visible: Option<Option<Vec<usize>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub education_visible: Option<Option<Vec<usize>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub skills_selected: Option<Option<Vec<String>>>,
    pub template: Option<Template>,
    pub colors: Option<ColorScheme>,
}

/// Distinguishes an absent key (`None`) from an explicit `null` (`Some(None)`).
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
