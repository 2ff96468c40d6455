//! Professor model compatible with the directory backend's REST API
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{discipline_model::ProfessorDiscipline, Named};
use crate::directory::helpers::format_full_name;

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Office {
    pub id: u32,
    pub number: String,
}

/// Work time is a rate such as `1` or `0.5`, stored by the backend as a float.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq)]
pub struct WorkTime {
    pub id: u32,
    pub name: f64,
}

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq)]
pub struct ProfessorActivity {
    pub id: u32,
    pub activity: Named,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq)]
pub struct Professor {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub third_name: Option<String>,
    pub birth_date: NaiveDate,
    pub email: String,
    pub phone_number: String,
    #[serde(default)]
    pub office: Option<Office>,
    #[serde(default)]
    pub degree: Option<Named>,
    #[serde(default)]
    pub position: Option<Named>,
    #[serde(default)]
    pub work_time: Option<WorkTime>,
    #[serde(default)]
    pub disciplines: Vec<ProfessorDiscipline>,
    #[serde(default)]
    pub activities: Vec<ProfessorActivity>,
}

impl Professor {
    pub fn full_name(&self) -> String {
        format_full_name(&self.last_name, &self.first_name, self.third_name.as_deref())
    }
}

/// Short professor shape nested into join records.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ProfessorSummary {
    pub id: u32,
    pub last_name: String,
    pub first_name: String,
    #[serde(default)]
    pub third_name: Option<String>,
}

impl ProfessorSummary {
    pub fn full_name(&self) -> String {
        format_full_name(&self.last_name, &self.first_name, self.third_name.as_deref())
    }
}

/// Body for `POST professors/`. Optional references go out as `null`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewProfessor {
    pub first_name: String,
    pub last_name: String,
    pub third_name: Option<String>,
    pub birth_date: NaiveDate,
    pub email: String,
    pub phone_number: String,
    pub office: Option<u32>,
    pub degree: Option<u32>,
    pub position: u32,
    pub work_time: u32,
}
