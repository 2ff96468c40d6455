use std::error::Error;

use chrono::NaiveDate;
use figment::{
    providers::{Env, Format, Json, Serialized},
    Figment,
};
use log::{debug, info};
use serde_json::Value;

use super::models::{
    discipline_model::Discipline, professor_model::Professor, Args, Config,
};

pub fn get_config(args: &Args) -> Result<Config, Box<dyn Error>> {
    info!(
        "Reading config.json from {}",
        std::path::absolute(&args.config_json_path)?.display()
    );
    let config: Config = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Json::file(&args.config_json_path))
        .merge(Env::prefixed("STAFF_"))
        .extract()?;
    debug!("Using backend at {}", config.api_base_url);
    Ok(config)
}

/* "Last First Third", a missing third name leaves no trailing space */
pub fn format_full_name(last_name: &str, first_name: &str, third_name: Option<&str>) -> String {
    format!("{} {} {}", last_name, first_name, third_name.unwrap_or_default())
        .trim_end()
        .to_owned()
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/* work-time rates come as floats, 1.0 should read as "1" */
pub fn format_rate(rate: f64) -> String {
    rate.to_string()
}

/// Pulls the `detail` field out of an error body, DRF sends it either as a string or a list of strings.
pub fn extract_detail(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    match json.get("detail")? {
        Value::String(detail) => Some(detail.clone()),
        Value::Array(details) => details.iter().find_map(|d| d.as_str().map(str::to_owned)),
        _ => None,
    }
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/* searched text is "First Last Third", unlike the display order */
pub fn professor_matches(professor: &Professor, search: &str) -> bool {
    let text = format!(
        "{} {} {}",
        professor.first_name,
        professor.last_name,
        professor.third_name.as_deref().unwrap_or_default()
    );
    contains_ignore_case(&text, search)
}

pub fn discipline_matches(discipline: &Discipline, search: &str) -> bool {
    contains_ignore_case(&discipline.name, search)
}

pub fn filter_professors<'a>(professors: &'a [Professor], search: &str) -> Vec<&'a Professor> {
    professors
        .iter()
        .filter(|professor| professor_matches(professor, search))
        .collect()
}

pub fn filter_disciplines<'a>(disciplines: &'a [Discipline], search: &str) -> Vec<&'a Discipline> {
    disciplines
        .iter()
        .filter(|discipline| discipline_matches(discipline, search))
        .collect()
}

/* blank select means "not chosen" */
pub fn parse_choice(value: &str) -> Result<Option<u32>, std::num::ParseIntError> {
    let value = value.trim();
    if value.is_empty() {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
