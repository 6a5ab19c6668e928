use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// The backend fills short CSV rows with `null`; read those as empty.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Résumé data as returned by the backend's `parse-linkedin` endpoint.
///
/// Only the fields the wizard edits are typed. Anything else the backend
/// sends is kept in `extra` and sent back untouched on `generate-pdf`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub profile: Profile,
    #[serde(default, deserialize_with = "null_as_default")]
    pub positions: Vec<Position>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<Language>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub certifications: Vec<Certification>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub maiden_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub headline: String,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub geo_location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub birth_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub websites: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub started_on: String,
    #[serde(deserialize_with = "null_as_default")]
    pub finished_on: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    #[serde(deserialize_with = "null_as_default")]
    pub school: String,
    #[serde(deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(deserialize_with = "null_as_default")]
    pub field_of_study: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub activities: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub proficiency: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub authority: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ────────────────────────────────────────────────────────────────────────────
// Editable field names
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    FirstName,
    LastName,
    MaidenName,
    Headline,
    Summary,
    Address,
    GeoLocation,
    Email,
    Phone,
    BirthDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionField {
    Title,
    Company,
    Description,
    Location,
    StartedOn,
    FinishedOn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    School,
    Degree,
    FieldOfStudy,
    StartDate,
    EndDate,
    Activities,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageField {
    Name,
    Proficiency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificationField {
    Name,
    Authority,
    StartDate,
    EndDate,
    Url,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_backend_extras_survive_round_trip() {
        let raw = json!({
            "profile": {"first_name": "Ada", "summary": "Engineer"},
            "positions": [{"title": "CTO", "company": "Acme", "duration": "2 ans"}],
            "skills": ["Rust"],
            "generated_at": "2024-01-01"
        });
        let parsed: ParsedData = serde_json::from_value(raw).unwrap();

        assert_eq!(parsed.profile.first_name, "Ada");
        assert_eq!(parsed.positions[0].extra["duration"], json!("2 ans"));
        assert!(parsed.education.is_empty());

        let back = serde_json::to_value(&parsed).unwrap();
        assert_eq!(back["generated_at"], json!("2024-01-01"));
        assert_eq!(back["positions"][0]["duration"], json!("2 ans"));
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let raw = json!({
            "profile": {"first_name": "Ada", "phone": null, "websites": null},
            "positions": [{"title": "CTO", "company": null, "finished_on": null}],
            "education": [{"school": "EPITA", "degree": null}],
            "languages": null,
            "skills": ["Rust"]
        });
        let parsed: ParsedData = serde_json::from_value(raw).unwrap();

        assert_eq!(parsed.profile.phone, "");
        assert!(parsed.profile.websites.is_empty());
        assert_eq!(parsed.positions[0].company, "");
        assert_eq!(parsed.positions[0].finished_on, "");
        assert_eq!(parsed.education[0].degree, "");
        assert!(parsed.languages.is_empty());
    }

    #[test]
    fn test_field_names_are_snake_case() {
        let field: PositionField = serde_json::from_value(json!("started_on")).unwrap();
        assert_eq!(field, PositionField::StartedOn);
        let field: EducationField = serde_json::from_value(json!("field_of_study")).unwrap();
        assert_eq!(field, EducationField::FieldOfStudy);
    }
}
