//! The references page: one generic section per lookup table.
use futures::future;
use log::{error, info};
use serde_json::Value;

use crate::directory::{
    api::{Api, ApiError},
    backend::Backend,
    models::reference_model::{RawReference, ReferenceItem, ReferenceKind},
    nav::{render_nav, Route},
    prompt::Prompt,
};

pub const LOAD_ERROR: &str = "Не удалось загрузить справочники";
const EMPTY_VALUE: &str = "Введите значение";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEdit {
    pub id: u32,
    pub value: String,
}

/// One expandable lookup table with inline add, edit and delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceSection {
    pub kind: ReferenceKind,
    pub open: bool,
    pub items: Vec<ReferenceItem>,
    pub editing: Option<ReferenceEdit>,
    pub adding: Option<String>,
}

async fn fetch_items<B: Backend>(
    api: &Api<B>,
    kind: ReferenceKind,
) -> Result<Vec<ReferenceItem>, ApiError> {
    let raw = api.list::<RawReference>(kind.resource()).await?;
    Ok(raw.into_iter().map(|row| row.into_item(kind)).collect())
}

impl ReferenceSection {
    pub fn new(kind: ReferenceKind) -> Self {
        ReferenceSection {
            kind,
            open: true,
            items: Vec::new(),
            editing: None,
            adding: None,
        }
    }

    pub async fn refresh<B: Backend>(&mut self, api: &Api<B>) -> Result<(), ApiError> {
        self.items = fetch_items(api, self.kind).await?;
        Ok(())
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn begin_add(&mut self) {
        self.adding = Some(String::new());
    }

    pub fn set_new_value(&mut self, value: &str) {
        self.adding = Some(value.to_owned());
    }

    pub fn cancel_add(&mut self) {
        self.adding = None;
    }

    pub async fn save_new<B: Backend, P: Prompt>(&mut self, api: &Api<B>, prompt: &P) -> bool {
        let value = self.adding.clone().unwrap_or_default();
        if value.is_empty() {
            prompt.alert(EMPTY_VALUE);
            return false;
        }
        let created = api
            .create::<Value, _>(self.kind.resource(), &self.kind.body(&value))
            .await;
        let refreshed = match created {
            Ok(_) => self.refresh(api).await,
            Err(e) => Err(e),
        };
        match refreshed {
            Ok(()) => {
                info!("Added \"{}\" to {}", value, self.kind.resource());
                self.adding = None;
                self.open = true;
                prompt.alert("Значение успешно добавлено");
                true
            }
            Err(e) => {
                error!("Unable to add to {}: {}", self.kind.resource(), e);
                prompt.alert("Не удалось добавить значение");
                false
            }
        }
    }

    /// Puts a row into edit mode, prefilled with its current value.
    pub fn begin_edit(&mut self, id: u32) {
        let value = self
            .items
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.value.clone())
            .unwrap_or_default();
        self.editing = Some(ReferenceEdit { id, value });
    }

    pub fn set_edit_value(&mut self, value: &str) {
        if let Some(editing) = &mut self.editing {
            editing.value = value.to_owned();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Saves the row being edited with a full-resource PUT and re-fetches the section.
    pub async fn save_edit<B: Backend, P: Prompt>(&mut self, api: &Api<B>, prompt: &P) -> bool {
        let Some(ReferenceEdit { id, value }) = self.editing.clone() else {
            return false;
        };
        if value.is_empty() {
            prompt.alert(EMPTY_VALUE);
            return false;
        }
        let updated = api
            .update::<Value, _>(self.kind.resource(), id, &self.kind.body(&value))
            .await;
        let refreshed = match updated {
            Ok(_) => self.refresh(api).await,
            Err(e) => Err(e),
        };
        match refreshed {
            Ok(()) => {
                info!("Updated {} {} to \"{}\"", self.kind.resource(), id, value);
                self.editing = None;
                prompt.alert("Значение успешно обновлено");
                true
            }
            Err(e) => {
                error!("Unable to update {} {}: {}", self.kind.resource(), id, e);
                prompt.alert("Не удалось обновить значение");
                false
            }
        }
    }

    pub async fn remove<B: Backend, P: Prompt>(&mut self, api: &Api<B>, prompt: &P, id: u32) -> bool {
        if !prompt.confirm("Вы уверены, что хотите удалить это значение?") {
            return false;
        }
        let removed = match api.remove(self.kind.resource(), id).await {
            Ok(()) => self.refresh(api).await,
            Err(e) => Err(e),
        };
        match removed {
            Ok(()) => {
                info!("Removed {} {}", self.kind.resource(), id);
                prompt.alert("Значение успешно удалено");
                true
            }
            Err(e) => {
                error!("Unable to remove {} {}: {}", self.kind.resource(), id, e);
                prompt.alert("Не удалось удалить значение");
                false
            }
        }
    }

    pub fn value_of(&self, id: u32) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.value.as_str())
    }

    pub fn render(&self) -> String {
        let marker = if self.open { "▾" } else { "▸" };
        let mut out = vec![format!("{} {}", marker, self.kind.title())];
        if !self.open {
            return out.join("\n");
        }
        if self.items.is_empty() {
            out.push("    Нет данных".to_owned());
        }
        for item in &self.items {
            match &self.editing {
                Some(editing) if editing.id == item.id => {
                    out.push(format!("    [{}] <{}>", item.id, editing.value))
                }
                _ => out.push(format!("    [{}] {}", item.id, item.value)),
            }
        }
        if let Some(adding) = &self.adding {
            out.push(format!("    + <{}>", adding));
        }
        out.join("\n")
    }
}

#[derive(Debug)]
pub struct ReferencesPage {
    pub sections: Vec<ReferenceSection>,
    pub error: Option<String>,
}

impl Default for ReferencesPage {
    fn default() -> Self {
        ReferencesPage {
            sections: ReferenceKind::ALL
                .into_iter()
                .map(ReferenceSection::new)
                .collect(),
            error: None,
        }
    }
}

impl ReferencesPage {
    /// All five tables are fetched at once; if one fails the page shows an error instead.
    pub async fn load<B: Backend>(&mut self, api: &Api<B>) {
        let loaded = future::try_join_all(
            self.sections
                .iter()
                .map(|section| fetch_items(api, section.kind)),
        )
        .await;
        match loaded {
            Ok(tables) => {
                for (section, items) in self.sections.iter_mut().zip(tables) {
                    section.items = items;
                }
                self.error = None;
            }
            Err(e) => {
                error!("Unable to load references: {}", e);
                self.error = Some(LOAD_ERROR.to_owned());
            }
        }
    }

    pub fn section(&self, kind: ReferenceKind) -> &ReferenceSection {
        self.sections
            .iter()
            .find(|section| section.kind == kind)
            .unwrap_or_else(|| unreachable!("every kind has a section"))
    }

    pub fn section_mut(&mut self, kind: ReferenceKind) -> &mut ReferenceSection {
        self.sections
            .iter_mut()
            .find(|section| section.kind == kind)
            .unwrap_or_else(|| unreachable!("every kind has a section"))
    }

    pub fn render(&self) -> String {
        let mut out = vec![render_nav(Route::References)];
        match &self.error {
            Some(error) => out.push(error.clone()),
            None => out.extend(self.sections.iter().map(ReferenceSection::render)),
        }
        out.join("\n")
    }
}
