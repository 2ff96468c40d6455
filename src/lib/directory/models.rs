use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use self::{discipline_model::TeachingKind, reference_model::ReferenceKind};

pub mod discipline_model;
pub mod professor_model;
pub mod reference_model;

/// A model for describing ARGS of the tool.
/// Consists of:
/// 1. Path to config.json, that holds the backend address. Missing file falls back to defaults.
/// 2. Whether every confirmation prompt should be answered with "yes".
/// 3. The screen or action to perform.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, value_name = "FILE", default_value = "config.json")]
    pub config_json_path: PathBuf,
    #[arg(long, short = 'y')]
    pub yes: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Render the page behind an address-bar path, e.g. `/professors/3`
    Open { path: String },
    /// List professors, optionally filtered by a name substring
    Professors {
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Create a professor and show the refreshed list
    AddProfessor(ProfessorFields),
    /// Delete a professor
    RemoveProfessor { id: u32 },
    /// Attach a discipline to a professor, one record per teaching type
    AttachDiscipline {
        professor: u32,
        discipline: u32,
        #[arg(long = "type", value_enum)]
        kinds: Vec<TeachingKind>,
    },
    /// Detach one professor-discipline record from a professor
    DetachDiscipline { professor: u32, record: u32 },
    /// List disciplines, optionally filtered by a name substring
    Disciplines {
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Create a discipline and open it
    AddDiscipline { name: String },
    /// Delete a discipline
    RemoveDiscipline { id: u32 },
    /// Attach a professor to a discipline, one record per teaching type
    AttachProfessor {
        discipline: u32,
        professor: u32,
        #[arg(long = "type", value_enum)]
        kinds: Vec<TeachingKind>,
    },
    /// Detach one professor-discipline record from a discipline
    DetachProfessor { discipline: u32, record: u32 },
    /// Show the reference tables
    References {
        #[arg(long, value_enum)]
        collapse: Vec<ReferenceKind>,
    },
    /// Add a value to a reference table
    AddReference {
        #[arg(value_enum)]
        kind: ReferenceKind,
        value: String,
    },
    /// Replace the value of a reference table row
    EditReference {
        #[arg(value_enum)]
        kind: ReferenceKind,
        id: u32,
        value: String,
    },
    /// Delete a reference table row
    RemoveReference {
        #[arg(value_enum)]
        kind: ReferenceKind,
        id: u32,
    },
}

/// Raw text of the professor creation form. Selects hold ids, blank means "not chosen".
#[derive(clap::Args, Debug, Clone, Default, PartialEq)]
pub struct ProfessorFields {
    #[arg(long, default_value = "")]
    pub first_name: String,
    #[arg(long, default_value = "")]
    pub last_name: String,
    #[arg(long, default_value = "")]
    pub third_name: String,
    /// YYYY-MM-DD
    #[arg(long, default_value = "")]
    pub birth_date: String,
    #[arg(long, default_value = "")]
    pub email: String,
    /// 11 digits
    #[arg(long, default_value = "")]
    pub phone_number: String,
    #[arg(long, default_value = "")]
    pub office: String,
    #[arg(long, default_value = "")]
    pub degree: String,
    #[arg(long, default_value = "")]
    pub position: String,
    #[arg(long, default_value = "")]
    pub work_time: String,
}

/// A model for describing configuration of the tool.
/// Consists of:
/// 1. Base URL of the REST backend, every resource path is appended to it
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: "http://localhost:8000/api".to_owned(),
        }
    }
}

/// Body of any creation response we care about: only the new id is used.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Created {
    pub id: u32,
}

/// Any lookup row the backend represents as `{id, name}` with a textual name.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Named {
    pub id: u32,
    pub name: String,
}
