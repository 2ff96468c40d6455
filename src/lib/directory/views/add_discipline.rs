use log::{error, info};
use serde::Serialize;

use super::Outcome;
use crate::directory::{
    api::{Api, Resource},
    backend::Backend,
    models::Created,
    nav::Route,
};

pub const FAILURE: &str = "Не удалось добавить дисциплину";

#[derive(Serialize)]
struct NewDiscipline<'a> {
    name: &'a str,
}

#[derive(Debug, Default)]
pub struct AddDiscipline {
    pub name: String,
    pub error: Option<String>,
}

impl AddDiscipline {
    pub fn new(name: &str) -> Self {
        AddDiscipline {
            name: name.to_owned(),
            error: None,
        }
    }

    /// On success the user is taken to the new discipline.
    pub async fn submit<B: Backend>(&mut self, api: &Api<B>) -> Outcome {
        let name = self.name.trim();
        if name.is_empty() {
            self.error = Some("Заполните обязательное поле: Название".to_owned());
            return Outcome::Stay;
        }
        match api
            .create::<Created, _>(Resource::Disciplines, &NewDiscipline { name })
            .await
        {
            Ok(created) => {
                info!("Created discipline {}", created.id);
                self.error = None;
                Outcome::Navigate(Route::Discipline(created.id))
            }
            Err(e) => {
                error!("Unable to create discipline: {}", e);
                self.error = Some(FAILURE.to_owned());
                Outcome::Stay
            }
        }
    }
}
