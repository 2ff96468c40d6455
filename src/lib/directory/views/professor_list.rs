use log::{error, info};

use crate::directory::{
    api::{Api, Resource},
    backend::Backend,
    helpers::{filter_professors, format_rate},
    models::professor_model::Professor,
    nav::{render_nav, Route},
};

pub const LOAD_ERROR: &str = "Не удалось загрузить список преподавателей. Проверь сервер.";

#[derive(Debug, Default)]
pub struct ProfessorList {
    pub professors: Vec<Professor>,
    pub search: String,
    pub error: Option<String>,
    pub add_form_open: bool,
}

impl ProfessorList {
    pub async fn load<B: Backend>(&mut self, api: &Api<B>) {
        match api.list::<Professor>(Resource::Professors).await {
            Ok(professors) => {
                info!("Loaded {} professors", professors.len());
                self.professors = professors;
                self.error = None;
            }
            Err(e) => {
                error!("Unable to load professors: {}", e);
                self.error = Some(LOAD_ERROR.to_owned());
            }
        }
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_owned();
    }

    pub fn filtered(&self) -> Vec<&Professor> {
        filter_professors(&self.professors, &self.search)
    }

    pub fn open(&self, id: u32) -> Route {
        Route::Professor(id)
    }

    pub fn open_add_form(&mut self) {
        self.add_form_open = true;
    }

    pub fn close_add_form(&mut self) {
        self.add_form_open = false;
    }

    /// Called once the add form reports success.
    pub async fn on_created<B: Backend>(&mut self, api: &Api<B>) {
        self.load(api).await;
        self.close_add_form();
    }

    pub fn render(&self) -> String {
        let mut out = vec![render_nav(Route::Professors)];
        if let Some(error) = &self.error {
            out.push(error.clone());
            return out.join("\n");
        }
        let found = self.filtered();
        out.push(format!("Результаты поиска: {}", found.len()));
        for professor in found {
            out.push(format!("#{} {}", professor.id, professor.full_name()));
            out.push(format!(
                "    Должность: {}",
                professor
                    .position
                    .as_ref()
                    .map_or("Не указана", |p| p.name.as_str())
            ));
            out.push(format!(
                "    Кабинет: {}",
                professor
                    .office
                    .as_ref()
                    .map_or("Не указан", |o| o.number.as_str())
            ));
            out.push(format!(
                "    Ставка: {}",
                professor
                    .work_time
                    .as_ref()
                    .map_or("Не указана".to_owned(), |w| format_rate(w.name))
            ));
        }
        out.join("\n")
    }
}
