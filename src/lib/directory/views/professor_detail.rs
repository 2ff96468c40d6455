use futures::future;
use log::{error, info, warn};

use super::{
    assign::{submit_assignments, AssignForm, Assigned, Pairing},
    Loaded, Outcome,
};
use crate::directory::{
    api::{Api, ApiError, Resource},
    backend::Backend,
    helpers::{format_date, format_rate},
    models::{
        discipline_model::{Discipline, ProfessorDiscipline, TeachingKind},
        professor_model::Professor,
    },
    nav::{render_nav, Route},
    prompt::Prompt,
};

pub const LOAD_ERROR: &str = "Не удалось загрузить данные преподавателя";

#[derive(Debug)]
pub struct ProfessorDetail {
    pub id: u32,
    pub professor: Option<Professor>,
    /// Every discipline, for the attach select.
    pub disciplines: Vec<Discipline>,
    pub form: Option<AssignForm>,
    pub error: Option<String>,
}

fn empty_group(kind: TeachingKind) -> &'static str {
    match kind {
        TeachingKind::Lectures => "Нет лекций",
        TeachingKind::Practices => "Нет практик",
        TeachingKind::Labs => "Нет лабораторных",
    }
}

impl ProfessorDetail {
    /// Without an id, or when the backend does not know it, the user goes back to the list.
    pub async fn load<B: Backend, P: Prompt>(
        api: &Api<B>,
        prompt: &P,
        id: Option<u32>,
    ) -> Loaded<ProfessorDetail> {
        let Some(id) = id else {
            warn!("No professor id, going back to the list");
            return Loaded::Redirect(Route::Professors);
        };

        let (professor, disciplines) = future::join(
            api.get::<Professor>(Resource::Professors, id),
            api.list::<Discipline>(Resource::Disciplines),
        )
        .await;

        let disciplines = disciplines.unwrap_or_else(|e| {
            error!("Unable to load disciplines: {}", e);
            Vec::new()
        });
        let mut view = ProfessorDetail {
            id,
            professor: None,
            disciplines,
            form: None,
            error: None,
        };
        match professor {
            Ok(professor) => view.professor = Some(professor),
            Err(ApiError::NotFound { .. }) => {
                prompt.alert("Преподаватель не найден");
                return Loaded::Redirect(Route::Professors);
            }
            Err(e) => {
                error!("Unable to load professor {}: {}", id, e);
                view.error = Some(LOAD_ERROR.to_owned());
            }
        }
        Loaded::View(view)
    }

    pub async fn refresh<B: Backend>(&mut self, api: &Api<B>) {
        match api.get::<Professor>(Resource::Professors, self.id).await {
            Ok(professor) => {
                self.professor = Some(professor);
                self.error = None;
            }
            Err(e) => {
                error!("Unable to reload professor {}: {}", self.id, e);
                self.error = Some(LOAD_ERROR.to_owned());
            }
        }
    }

    pub fn group(&self, kind: TeachingKind) -> Vec<&ProfessorDiscipline> {
        self.professor
            .iter()
            .flat_map(|professor| &professor.disciplines)
            .filter(|record| record.is_kind(kind))
            .collect()
    }

    pub async fn remove_professor<B: Backend, P: Prompt>(&self, api: &Api<B>, prompt: &P) -> Outcome {
        if !prompt.confirm("Вы уверены, что хотите удалить преподавателя? Это действие необратимо!") {
            return Outcome::Stay;
        }
        match api.remove(Resource::Professors, self.id).await {
            Ok(()) => {
                info!("Removed professor {}", self.id);
                prompt.alert("Преподаватель успешно удален");
                Outcome::Navigate(Route::Professors)
            }
            Err(e) => {
                error!("Unable to remove professor {}: {}", self.id, e);
                prompt.alert("Не удалось удалить преподавателя");
                Outcome::Stay
            }
        }
    }

    /// Detaches one professor-discipline record and re-fetches the professor.
    pub async fn remove_discipline<B: Backend, P: Prompt>(
        &mut self,
        api: &Api<B>,
        prompt: &P,
        record: u32,
    ) -> bool {
        if !prompt.confirm("Вы уверены, что хотите открепить дисциплину от преподавателя?") {
            return false;
        }
        if let Err(e) = api.remove(Resource::ProfessorDisciplines, record).await {
            error!("Unable to remove professor-discipline {}: {}", record, e);
            prompt.alert("Не удалось открепить дисциплину");
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

    /// Submits the open form. The professor is re-fetched whatever happened to
    /// the individual records, the form stays open unless all of them succeeded.
    pub async fn add_discipline<B: Backend, P: Prompt>(&mut self, api: &Api<B>, prompt: &P) -> Assigned {
        let form = self.form.clone().unwrap_or_default();
        let assigned = submit_assignments(api, prompt, Pairing::Professor(self.id), &form).await;
        match assigned {
            Assigned::Created(_) => {
                self.form = None;
                self.refresh(api).await;
                prompt.alert("Дисциплина успешно добавлена");
            }
            Assigned::Failed { .. } => self.refresh(api).await,
            Assigned::Incomplete | Assigned::Unresolved => {}
        }
        assigned
    }

    pub fn open_discipline(&self, record: &ProfessorDiscipline) -> Option<Route> {
        record
            .discipline_detail
            .as_ref()
            .map(|discipline| Route::Discipline(discipline.id))
    }

    pub fn render(&self) -> String {
        let mut out = vec![render_nav(Route::Professor(self.id))];
        let Some(professor) = &self.professor else {
            out.push(self.error.clone().unwrap_or_else(|| "Загрузка...".to_owned()));
            return out.join("\n");
        };
        out.push(professor.full_name());
        out.push(format!(
            "Ученая степень: {}",
            professor.degree.as_ref().map_or("Не указана", |d| d.name.as_str())
        ));
        out.push(format!(
            "Должность: {}",
            professor.position.as_ref().map_or("Не указана", |p| p.name.as_str())
        ));
        out.push(format!(
            "Кабинет: {}",
            professor.office.as_ref().map_or("Не указан", |o| o.number.as_str())
        ));
        out.push(format!(
            "Ставка: {}",
            professor
                .work_time
                .as_ref()
                .map_or("Не указана".to_owned(), |w| format_rate(w.name))
        ));
        out.push(format!("Дата рождения: {}", format_date(&professor.birth_date)));
        out.push(format!("Номер телефона: {}", professor.phone_number));
        out.push(format!("Электронная почта: {}", professor.email));

        out.push("Дисциплины".to_owned());
        for kind in TeachingKind::ALL {
            out.push(format!("  {}", kind));
            let group = self.group(kind);
            if group.is_empty() {
                out.push(format!("    {}", empty_group(kind)));
            }
            for record in group {
                let name = record
                    .discipline_detail
                    .as_ref()
                    .map_or("Неизвестная дисциплина", |d| d.name.as_str());
                out.push(format!("    [{}] {}", record.id, name));
            }
        }

        out.push("Дополнительные активности".to_owned());
        if professor.activities.is_empty() {
            out.push("    Нет активностей".to_owned());
        }
        for activity in &professor.activities {
            let description = activity
                .description
                .as_deref()
                .filter(|description| !description.is_empty())
                .unwrap_or("Нет описания");
            out.push(format!("    {}: {}", activity.activity.name, description));
        }

        if let Some(form) = &self.form {
            let options = self
                .disciplines
                .iter()
                .map(|discipline| (discipline.id, discipline.name.clone()))
                .collect::<Vec<_>>();
            out.extend(form.render("Добавить дисциплину", "Выберите дисциплину", &options));
        }
        out.join("\n")
    }
}
