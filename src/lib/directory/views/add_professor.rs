use chrono::NaiveDate;
use futures::future;
use log::{debug, error, info};

use crate::directory::{
    api::{Api, ApiError, Resource},
    backend::Backend,
    helpers::{format_rate, parse_choice},
    models::{
        professor_model::{NewProfessor, Office, WorkTime},
        Created, Named, ProfessorFields,
    },
};

pub const SUCCESS: &str = "Преподаватель успешно добавлен!";

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("Заполните обязательное поле: {0}")]
    MissingField(&'static str),
    #[error("Некорректная дата рождения: {0}")]
    InvalidDate(String),
    #[error("Некорректный email: {0}")]
    InvalidEmail(String),
    #[error("Некорректное значение поля {0}: {1}")]
    InvalidChoice(&'static str, String),
    #[error("Пожалуйста, выберите должность и ставку.")]
    MissingPositionOrWorkTime,
}

/// Values for the foreign-key selects of the form.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProfessorOptions {
    pub offices: Vec<Office>,
    pub degrees: Vec<Named>,
    pub positions: Vec<Named>,
    pub work_times: Vec<WorkTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    Created(u32),
    Rejected,
}

/* like a `required` text input: only an empty value is missing, the text is sent as typed */
fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    if value.is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(value.to_owned())
    }
}

fn choice(value: &str, field: &'static str) -> Result<Option<u32>, FormError> {
    parse_choice(value).map_err(|_| FormError::InvalidChoice(field, value.to_owned()))
}

/// Builds the creation payload. Fields marked required must be filled before
/// the position/work time check, same order the form enforces them in.
pub fn build_payload(fields: &ProfessorFields) -> Result<NewProfessor, FormError> {
    let first_name = required(&fields.first_name, "Имя")?;
    let last_name = required(&fields.last_name, "Фамилия")?;
    let birth_date = required(&fields.birth_date, "Дата рождения")?;
    let birth_date = NaiveDate::parse_from_str(&birth_date, "%Y-%m-%d")
        .map_err(|_| FormError::InvalidDate(birth_date.clone()))?;
    let email = required(&fields.email, "Email")?;
    if !email.contains('@') {
        return Err(FormError::InvalidEmail(email));
    }
    // digit count is only hinted at, never checked
    let phone_number = required(&fields.phone_number, "Телефон")?;

    let office = choice(&fields.office, "Кабинет")?;
    let degree = choice(&fields.degree, "Степень")?;
    let position = choice(&fields.position, "Должность")?;
    let work_time = choice(&fields.work_time, "Ставка")?;
    let (Some(position), Some(work_time)) = (position, work_time) else {
        return Err(FormError::MissingPositionOrWorkTime);
    };

    let third_name = Some(fields.third_name.clone()).filter(|name| !name.is_empty());

    Ok(NewProfessor {
        first_name,
        last_name,
        third_name,
        birth_date,
        email,
        phone_number,
        office,
        degree,
        position,
        work_time,
    })
}

#[derive(Debug, Default)]
pub struct AddProfessor {
    pub fields: ProfessorFields,
    pub options: ProfessorOptions,
    pub message: String,
}

impl AddProfessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches all four option lists at once; one failure fails the whole load.
    pub async fn load_options<B: Backend>(&mut self, api: &Api<B>) {
        let loaded: Result<_, ApiError> = future::try_join4(
            api.list::<Office>(Resource::Offices),
            api.list::<Named>(Resource::Degrees),
            api.list::<Named>(Resource::Positions),
            api.list::<WorkTime>(Resource::WorkTimes),
        )
        .await;
        match loaded {
            Ok((offices, degrees, positions, work_times)) => {
                self.options = ProfessorOptions {
                    offices,
                    degrees,
                    positions,
                    work_times,
                };
            }
            Err(e) => {
                error!("Unable to load professor form options: {}", e);
                self.message = format!("Ошибка загрузки данных: {}", e);
            }
        }
    }

    pub async fn submit<B: Backend>(&mut self, api: &Api<B>) -> Submitted {
        let payload = match build_payload(&self.fields) {
            Ok(payload) => payload,
            Err(e) => {
                info!("Professor form rejected: {}", e);
                self.message = e.to_string();
                return Submitted::Rejected;
            }
        };
        debug!("Sending professor {:?}", payload);

        match api.create::<Created, _>(Resource::Professors, &payload).await {
            Ok(created) => {
                info!("Created professor {}", created.id);
                self.message = SUCCESS.to_owned();
                self.fields = ProfessorFields::default();
                Submitted::Created(created.id)
            }
            Err(e) => {
                error!("Unable to create professor: {}", e);
                self.message = format!("Ошибка при добавлении: {}", e.user_detail());
                Submitted::Rejected
            }
        }
    }

    pub fn render(&self) -> String {
        let mut out = vec!["Добавить преподавателя".to_owned()];
        let selects = [
            (
                "Кабинеты",
                self.options
                    .offices
                    .iter()
                    .map(|o| format!("{}={}", o.id, o.number))
                    .collect::<Vec<_>>(),
            ),
            (
                "Степени",
                self.options
                    .degrees
                    .iter()
                    .map(|d| format!("{}={}", d.id, d.name))
                    .collect(),
            ),
            (
                "Должности",
                self.options
                    .positions
                    .iter()
                    .map(|p| format!("{}={}", p.id, p.name))
                    .collect(),
            ),
            (
                "Ставки",
                self.options
                    .work_times
                    .iter()
                    .map(|w| format!("{}={}", w.id, format_rate(w.name)))
                    .collect(),
            ),
        ];
        for (title, values) in selects {
            out.push(format!("    {}: {}", title, values.join(", ")));
        }
        out.push("    Телефон (11 цифр)".to_owned());
        if !self.message.is_empty() {
            out.push(self.message.clone());
        }
        out.join("\n")
    }
}
