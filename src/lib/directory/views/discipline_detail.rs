use futures::future;
use log::{error, info, warn};

use super::{
    assign::{submit_assignments, AssignForm, Assigned, Pairing},
    Loaded, Outcome,
};
use crate::directory::{
    api::{Api, Resource},
    backend::Backend,
    models::{
        discipline_model::{Discipline, ProfessorDiscipline, TeachingKind},
        professor_model::Professor,
    },
    nav::{render_nav, Route},
    prompt::Prompt,
};

pub const LOAD_ERROR: &str = "Не удалось загрузить данные дисциплины";

#[derive(Debug)]
pub struct DisciplineDetail {
    pub id: u32,
    pub discipline: Option<Discipline>,
    /// Every professor, for the attach select.
    pub professors: Vec<Professor>,
    pub form: Option<AssignForm>,
    pub error: Option<String>,
}

fn empty_group(kind: TeachingKind) -> &'static str {
    match kind {
        TeachingKind::Lectures => "Нет лекторов",
        TeachingKind::Practices => "Нет практиков",
        TeachingKind::Labs => "Нет лаборантов",
    }
}

impl DisciplineDetail {
    pub async fn load<B: Backend>(api: &Api<B>, id: Option<u32>) -> Loaded<DisciplineDetail> {
        let Some(id) = id else {
            warn!("No discipline id, going back to the list");
            return Loaded::Redirect(Route::Disciplines);
        };

        let (discipline, professors) = future::join(
            api.get::<Discipline>(Resource::Disciplines, id),
            api.list::<Professor>(Resource::Professors),
        )
        .await;

        let professors = professors.unwrap_or_else(|e| {
            error!("Unable to load professors: {}", e);
            Vec::new()
        });
        let (discipline, error) = match discipline {
            Ok(discipline) => (Some(discipline), None),
            Err(e) => {
                error!("Unable to load discipline {}: {}", id, e);
                (None, Some(LOAD_ERROR.to_owned()))
            }
        };
        Loaded::View(DisciplineDetail {
            id,
            discipline,
            professors,
            form: None,
            error,
        })
    }

    pub async fn refresh<B: Backend>(&mut self, api: &Api<B>) {
        match api.get::<Discipline>(Resource::Disciplines, self.id).await {
            Ok(discipline) => {
                self.discipline = Some(discipline);
                self.error = None;
            }
            Err(e) => {
                error!("Unable to reload discipline {}: {}", self.id, e);
                self.error = Some(LOAD_ERROR.to_owned());
            }
        }
    }

    pub fn group(&self, kind: TeachingKind) -> Vec<&ProfessorDiscipline> {
        self.discipline
            .iter()
            .flat_map(|discipline| &discipline.professordiscipline_set)
            .filter(|record| record.is_kind(kind))
            .collect()
    }

    pub async fn remove_discipline<B: Backend, P: Prompt>(&self, api: &Api<B>, prompt: &P) -> Outcome {
        if !prompt.confirm("Вы уверены, что хотите удалить дисциплину? Это действие необратимо!") {
            return Outcome::Stay;
        }
        match api.remove(Resource::Disciplines, self.id).await {
            Ok(()) => {
                info!("Removed discipline {}", self.id);
                prompt.alert("Дисциплина успешно удалена");
                Outcome::Navigate(Route::Disciplines)
            }
            Err(e) => {
                error!("Unable to remove discipline {}: {}", self.id, e);
                prompt.alert("Не удалось удалить дисциплину");
                Outcome::Stay
            }
        }
    }

    pub async fn remove_professor<B: Backend, P: Prompt>(
        &mut self,
        api: &Api<B>,
        prompt: &P,
        record: u32,
    ) -> bool {
        if !prompt.confirm("Вы уверены, что хотите открепить преподавателя от дисциплины?") {
            return false;
        }
        if let Err(e) = api.remove(Resource::ProfessorDisciplines, record).await {
            error!("Unable to remove professor-discipline {}: {}", record, e);
            prompt.alert("Не удалось открепить преподавателя");
            return false;
        }
        self.refresh(api).await;
        true
    }

    pub fn open_form(&mut self) -> &mut AssignForm {
        self.form.get_or_insert_with(AssignForm::default)
    }

    pub fn cancel_form(&mut self) {
        self.form = None;
    }

    pub async fn add_professor<B: Backend, P: Prompt>(&mut self, api: &Api<B>, prompt: &P) -> Assigned {
        let form = self.form.clone().unwrap_or_default();
        let assigned = submit_assignments(api, prompt, Pairing::Discipline(self.id), &form).await;
        match assigned {
            Assigned::Created(_) => {
                self.form = None;
                self.refresh(api).await;
                prompt.alert("Преподаватель успешно добавлен");
            }
            Assigned::Failed { .. } => self.refresh(api).await,
            Assigned::Incomplete | Assigned::Unresolved => {}
        }
        assigned
    }

    pub fn open_professor<P: Prompt>(&self, prompt: &P, record: &ProfessorDiscipline) -> Outcome {
        match &record.professor_detail {
            Some(professor) => Outcome::Navigate(Route::Professor(professor.id)),
            None => {
                prompt.alert("Ошибка: ID преподавателя не найден");
                Outcome::Stay
            }
        }
    }

    pub fn render(&self) -> String {
        let mut out = vec![render_nav(Route::Discipline(self.id))];
        let Some(discipline) = &self.discipline else {
            out.push(self.error.clone().unwrap_or_else(|| "Загрузка...".to_owned()));
            return out.join("\n");
        };
        out.push(discipline.name.clone());
        out.push("Преподаватели".to_owned());
        for kind in TeachingKind::ALL {
            out.push(format!("  {}", kind));
            let group = self.group(kind);
            if group.is_empty() {
                out.push(format!("    {}", empty_group(kind)));
            }
            for record in group {
                let name = record
                    .professor_detail
                    .as_ref()
                    .map_or("Неизвестный преподаватель".to_owned(), |p| p.full_name());
                out.push(format!("    [{}] {}", record.id, name));
            }
        }

        if let Some(form) = &self.form {
            let options = self
                .professors
                .iter()
                .map(|professor| (professor.id, professor.full_name()))
                .collect::<Vec<_>>();
            out.extend(form.render("Добавить преподавателя", "Выберите преподавателя", &options));
        }
        out.join("\n")
    }
}
