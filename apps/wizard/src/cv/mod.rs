// Résumé editing rules shared by every editor route.
// Everything here is synchronous and works on borrowed data; callers own the
// store lock and persist the result.

pub mod certifications;
pub mod education;
pub mod experience;
pub mod items;
pub mod languages;
pub mod profile;
pub mod sections;
pub mod skills;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("No {kind} at index {index} (list has {len} items)")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },

    #[error("This skill already exists: {0}")]
    DuplicateSkill(String),

    #[error("Skill name cannot be empty")]
    EmptySkill,

    #[error("Unknown skill: {0}")]
    UnknownSkill(String),

    #[error("Invalid color '{0}', expected #RRGGBB")]
    InvalidColor(String),
}
