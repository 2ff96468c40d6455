//! Attaching a professor to a discipline under one or more teaching types.
//! Shared by both detail pages, they differ only in which side is fixed.
use std::collections::BTreeSet;

use futures::future;
use log::{debug, error, info, warn};

use crate::directory::{
    api::{Api, ApiError, Resource},
    backend::Backend,
    models::{
        discipline_model::{NewProfessorDiscipline, TeachingKind, TeachingType},
        Created,
    },
    prompt::Prompt,
};

/// State of the three-checkbox teaching type list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TeachingSelection {
    checked: BTreeSet<TeachingKind>,
}

impl TeachingSelection {
    pub fn of(kinds: &[TeachingKind]) -> Self {
        TeachingSelection {
            checked: kinds.iter().copied().collect(),
        }
    }

    pub fn toggle(&mut self, kind: TeachingKind) {
        if !self.checked.remove(&kind) {
            self.checked.insert(kind);
        }
    }

    pub fn is_checked(&self, kind: TeachingKind) -> bool {
        self.checked.contains(&kind)
    }

    pub fn any(&self) -> bool {
        !self.checked.is_empty()
    }

    /// Checked kinds in checklist order.
    pub fn checked(&self) -> Vec<TeachingKind> {
        TeachingKind::ALL
            .into_iter()
            .filter(|kind| self.is_checked(*kind))
            .collect()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AssignForm {
    /// The professor or discipline picked in the select.
    pub counterpart: Option<u32>,
    pub kinds: TeachingSelection,
}

/// Which side of the pairing the current page is fixed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pairing {
    Professor(u32),
    Discipline(u32),
}

impl Pairing {
    fn record(self, counterpart: u32, teaching_type: u32) -> NewProfessorDiscipline {
        match self {
            Pairing::Professor(professor) => NewProfessorDiscipline {
                professor,
                discipline: counterpart,
                teaching_type,
            },
            Pairing::Discipline(discipline) => NewProfessorDiscipline {
                professor: counterpart,
                discipline,
                teaching_type,
            },
        }
    }

    pub fn incomplete_message(self) -> &'static str {
        match self {
            Pairing::Professor(_) => "Выберите дисциплину и хотя бы один тип преподавания",
            Pairing::Discipline(_) => "Выберите преподавателя и хотя бы один тип преподавания",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Pairing::Professor(_) => "Не удалось добавить дисциплину",
            Pairing::Discipline(_) => "Не удалось добавить преподавателя",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assigned {
    /// Nothing was sent: the form was incomplete.
    Incomplete,
    /// Nothing was sent: teaching types could not be fetched or one was not found.
    Unresolved,
    /// Every record was created.
    Created(usize),
    /// Some records may exist now, the rest failed. Nothing is rolled back.
    Failed { created: usize, failed: usize },
}

impl AssignForm {
    /// Lines of the open attach form: the counterpart select and the checklist.
    pub fn render(&self, title: &str, placeholder: &str, options: &[(u32, String)]) -> Vec<String> {
        let mut out = vec![title.to_owned()];
        let chosen = self
            .counterpart
            .and_then(|id| options.iter().find(|(option, _)| *option == id));
        match chosen {
            Some((id, name)) => out.push(format!("    {}: {}={}", placeholder, id, name)),
            None => out.push(format!("    {}", placeholder)),
        }
        for (id, name) in options {
            let marker = if Some(*id) == self.counterpart { "*" } else { " " };
            out.push(format!("     {} {}={}", marker, id, name));
        }
        for kind in TeachingKind::ALL {
            let mark = if self.kinds.is_checked(kind) { "x" } else { " " };
            out.push(format!("    [{}] {}", mark, kind));
        }
        out
    }
}

/// Maps each checked kind to its backend id by display name.
pub fn resolve_teaching_types(
    kinds: &[TeachingKind],
    known: &[TeachingType],
) -> Result<Vec<(TeachingKind, u32)>, TeachingKind> {
    kinds
        .iter()
        .map(|&kind| {
            known
                .iter()
                .find(|tt| tt.name == kind.name())
                .map(|tt| (kind, tt.id))
                .ok_or(kind)
        })
        .collect()
}

/// Creates one join record per checked teaching type, all requests in flight at once.
pub async fn submit_assignments<B: Backend, P: Prompt>(
    api: &Api<B>,
    prompt: &P,
    pairing: Pairing,
    form: &AssignForm,
) -> Assigned {
    let Some(counterpart) = form.counterpart.filter(|_| form.kinds.any()) else {
        prompt.alert(pairing.incomplete_message());
        return Assigned::Incomplete;
    };

    let known = match api.list::<TeachingType>(Resource::TeachingTypes).await {
        Ok(known) => known,
        Err(e) => {
            error!("Unable to load teaching types: {}", e);
            prompt.alert(pairing.failure_message());
            return Assigned::Unresolved;
        }
    };
    debug!("Teaching types: {:?}", known);

    let resolved = match resolve_teaching_types(&form.kinds.checked(), &known) {
        Ok(resolved) => resolved,
        Err(kind) => {
            error!("Teaching type \"{}\" not found", kind);
            prompt.alert(pairing.failure_message());
            return Assigned::Unresolved;
        }
    };

    let records = resolved
        .into_iter()
        .map(|(_, teaching_type)| pairing.record(counterpart, teaching_type))
        .collect::<Vec<_>>();
    let results: Vec<Result<Created, ApiError>> = future::join_all(
        records
            .iter()
            .map(|record| api.create::<Created, _>(Resource::ProfessorDisciplines, record)),
    )
    .await;

    let created = results.iter().filter(|result| result.is_ok()).count();
    let failed = results.len() - created;
    if failed == 0 {
        info!("Created {} professor-discipline records", created);
        Assigned::Created(created)
    } else {
        warn!(
            "{} of {} professor-discipline records failed, {} kept",
            failed,
            results.len(),
            created
        );
        prompt.alert(pairing.failure_message());
        Assigned::Failed { created, failed }
    }
}
