use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::directory::api::Resource;

/// The five lookup tables that make up the references page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, clap::ValueEnum)]
pub enum ReferenceKind {
    Degrees,
    Positions,
    Offices,
    WorkTimes,
    Activities,
}

impl ReferenceKind {
    /// Page order.
    pub const ALL: [ReferenceKind; 5] = [
        ReferenceKind::Degrees,
        ReferenceKind::Positions,
        ReferenceKind::Offices,
        ReferenceKind::WorkTimes,
        ReferenceKind::Activities,
    ];

    pub fn resource(self) -> Resource {
        match self {
            ReferenceKind::Degrees => Resource::Degrees,
            ReferenceKind::Positions => Resource::Positions,
            ReferenceKind::Offices => Resource::Offices,
            ReferenceKind::WorkTimes => Resource::WorkTimes,
            ReferenceKind::Activities => Resource::Activities,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ReferenceKind::Degrees => "Ученые степени",
            ReferenceKind::Positions => "Должности",
            ReferenceKind::Offices => "Кабинеты",
            ReferenceKind::WorkTimes => "Ставки",
            ReferenceKind::Activities => "Дополнительные активности",
        }
    }

    /// Offices are keyed by room number, every other table by name.
    pub fn value_field(self) -> &'static str {
        match self {
            ReferenceKind::Offices => "number",
            _ => "name",
        }
    }

    /// Full-resource body for create and update.
    pub fn body(self, value: &str) -> Value {
        let mut body = Map::new();
        body.insert(self.value_field().to_owned(), Value::String(value.to_owned()));
        Value::Object(body)
    }
}

/// A lookup row as it arrives, before we know which field carries its value.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RawReference {
    pub id: u32,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl RawReference {
    pub fn into_item(self, kind: ReferenceKind) -> ReferenceItem {
        let value = match self.fields.get(kind.value_field()) {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Number(number)) => match number.as_f64() {
                Some(float) => float.to_string(),
                None => number.to_string(),
            },
            _ => String::new(),
        };
        ReferenceItem { id: self.id, value }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReferenceItem {
    pub id: u32,
    pub value: String,
}
