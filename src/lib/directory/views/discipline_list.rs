use log::{error, info};

use crate::directory::{
    api::{Api, Resource},
    backend::Backend,
    helpers::filter_disciplines,
    models::discipline_model::Discipline,
    nav::{render_nav, Route},
};

pub const LOAD_ERROR: &str = "Не удалось загрузить список дисциплин. Проверь сервер.";

#[derive(Debug, Default)]
pub struct DisciplineList {
    pub disciplines: Vec<Discipline>,
    pub search: String,
    pub error: Option<String>,
    pub add_form_open: bool,
}

impl DisciplineList {
    pub async fn load<B: Backend>(&mut self, api: &Api<B>) {
        match api.list::<Discipline>(Resource::Disciplines).await {
            Ok(disciplines) => {
                info!("Loaded {} disciplines", disciplines.len());
                self.disciplines = disciplines;
                self.error = None;
            }
            Err(e) => {
                error!("Unable to load disciplines: {}", e);
                self.error = Some(LOAD_ERROR.to_owned());
            }
        }
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_owned();
    }

    pub fn filtered(&self) -> Vec<&Discipline> {
        filter_disciplines(&self.disciplines, &self.search)
    }

    pub fn open(&self, id: u32) -> Route {
        Route::Discipline(id)
    }

    pub fn open_add_form(&mut self) {
        self.add_form_open = true;
    }

    pub fn close_add_form(&mut self) {
        self.add_form_open = false;
    }

    /// The discipline form navigates away on its own, the list only refreshes.
    pub async fn on_created<B: Backend>(&mut self, api: &Api<B>) {
        self.load(api).await;
    }

    pub fn render(&self) -> String {
        let mut out = vec![render_nav(Route::Disciplines)];
        if let Some(error) = &self.error {
            out.push(error.clone());
            return out.join("\n");
        }
        let found = self.filtered();
        out.push(format!("Результаты поиска: {}", found.len()));
        out.extend(
            found
                .into_iter()
                .map(|discipline| format!("#{} {}", discipline.id, discipline.name)),
        );
        out.join("\n")
    }
}
