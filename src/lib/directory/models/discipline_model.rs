//! Disciplines and the professor-discipline-teaching type join, as the backend represents them
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{professor_model::ProfessorSummary, Named};

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq)]
pub struct Discipline {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub professordiscipline_set: Vec<ProfessorDiscipline>,
}

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct TeachingType {
    pub id: u32,
    pub name: String,
}

/// One professor teaching one discipline in one format.
/// Ids are write-only on the backend, reads only carry the `*_detail` objects.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq)]
pub struct ProfessorDiscipline {
    pub id: u32,
    #[serde(default)]
    pub discipline_detail: Option<Named>,
    #[serde(default)]
    pub teaching_type_detail: Option<TeachingType>,
    #[serde(default)]
    pub professor_detail: Option<ProfessorSummary>,
}

impl ProfessorDiscipline {
    pub fn is_kind(&self, kind: TeachingKind) -> bool {
        self.teaching_type_detail
            .as_ref()
            .is_some_and(|tt| tt.name == kind.name())
    }
}

/// Body for `POST professor-disciplines/`
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewProfessorDiscipline {
    pub professor: u32,
    pub discipline: u32,
    pub teaching_type: u32,
}

/// The fixed checklist of teaching formats. The backend knows them only by display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, clap::ValueEnum)]
pub enum TeachingKind {
    Lectures,
    Practices,
    Labs,
}

impl TeachingKind {
    pub const ALL: [TeachingKind; 3] = [
        TeachingKind::Lectures,
        TeachingKind::Practices,
        TeachingKind::Labs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TeachingKind::Lectures => "Лекции",
            TeachingKind::Practices => "Практики",
            TeachingKind::Labs => "Лабораторные",
        }
    }
}

impl fmt::Display for TeachingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
