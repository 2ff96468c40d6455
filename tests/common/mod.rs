#![allow(dead_code)]

use std::{collections::BTreeMap, sync::Mutex};

use lib::directory::{
    api::{Api, ApiError},
    backend::{Backend, Reply},
    prompt::Prompt,
};
use reqwest::Method;
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

struct Failure {
    method: Method,
    path: String,
    // every key here must be equal in the request body
    matching: Option<Value>,
    status: u16,
    body: String,
}

impl Failure {
    fn applies(&self, method: &Method, path: &str, body: Option<&Value>) -> bool {
        if &self.method != method || self.path != path {
            return false;
        }
        match (&self.matching, body) {
            (None, _) => true,
            (Some(Value::Object(expected)), Some(Value::Object(actual))) => expected
                .iter()
                .all(|(key, value)| actual.get(key) == Some(value)),
            _ => false,
        }
    }
}

struct Store {
    tables: BTreeMap<String, Vec<Value>>,
    next_id: u32,
    requests: Vec<Recorded>,
    failures: Vec<Failure>,
}

const TABLES: [&str; 9] = [
    "professors",
    "disciplines",
    "professor-disciplines",
    "teaching-types",
    "degrees",
    "positions",
    "offices",
    "work-times",
    "activities",
];

impl Store {
    fn find(&self, table: &str, id: &Value) -> Option<&Value> {
        self.tables
            .get(table)?
            .iter()
            .find(|row| row.get("id") == Some(id))
    }

    /* what the backend's serializers answer for a stored row */
    fn represent(&self, table: &str, row: &Value) -> Value {
        let mut out = row.clone();
        let id = row.get("id").cloned().unwrap_or(Value::Null);
        match table {
            "professors" => {
                for (field, source) in [
                    ("office", "offices"),
                    ("degree", "degrees"),
                    ("position", "positions"),
                    ("work_time", "work-times"),
                ] {
                    let expanded = match row.get(field) {
                        Some(fk @ Value::Number(_)) => {
                            self.find(source, fk).cloned().unwrap_or(Value::Null)
                        }
                        _ => Value::Null,
                    };
                    out[field] = expanded;
                }
                out["disciplines"] = Value::Array(self.joins_where("professor", &id));
                if out.get("activities").is_none() {
                    out["activities"] = json!([]);
                }
            }
            "disciplines" => {
                out["professordiscipline_set"] = Value::Array(self.joins_where("discipline", &id));
            }
            "professor-disciplines" => out = self.represent_join(row),
            _ => {}
        }
        out
    }

    fn joins_where(&self, field: &str, id: &Value) -> Vec<Value> {
        self.tables["professor-disciplines"]
            .iter()
            .filter(|row| row.get(field) == Some(id))
            .map(|row| self.represent_join(row))
            .collect()
    }

    fn represent_join(&self, row: &Value) -> Value {
        let professor = row
            .get("professor")
            .and_then(|id| self.find("professors", id))
            .map(|p| {
                json!({
                    "id": p["id"],
                    "last_name": p["last_name"],
                    "first_name": p["first_name"],
                    "third_name": p.get("third_name").cloned().unwrap_or(Value::Null),
                })
            })
            .unwrap_or(Value::Null);
        let discipline = row
            .get("discipline")
            .and_then(|id| self.find("disciplines", id))
            .map(|d| json!({"id": d["id"], "name": d["name"]}))
            .unwrap_or(Value::Null);
        let teaching_type = row
            .get("teaching_type")
            .and_then(|id| self.find("teaching-types", id))
            .cloned()
            .unwrap_or(Value::Null);
        json!({
            "id": row["id"],
            "discipline_detail": discipline,
            "teaching_type_detail": teaching_type,
            "professor_detail": professor,
        })
    }
}

fn reply(status: u16, body: Value) -> Reply {
    Reply {
        status,
        body: body.to_string(),
    }
}

fn not_found() -> Reply {
    reply(404, json!({"detail": "Not found."}))
}

/// In-memory stand-in for the REST backend that records every request.
pub struct TestBackend {
    store: Mutex<Store>,
}

impl TestBackend {
    pub fn empty() -> Self {
        TestBackend {
            store: Mutex::new(Store {
                tables: TABLES
                    .iter()
                    .map(|name| (name.to_string(), Vec::new()))
                    .collect(),
                next_id: 100,
                requests: Vec::new(),
                failures: Vec::new(),
            }),
        }
    }

    pub fn seeded() -> Self {
        TestBackend::empty()
            .with_table(
                "offices",
                json!([{"id": 1, "number": "101"}, {"id": 2, "number": "202"}]),
            )
            .with_table(
                "degrees",
                json!([{"id": 1, "name": "Кандидат наук"}, {"id": 2, "name": "Доктор наук"}]),
            )
            .with_table(
                "positions",
                json!([{"id": 1, "name": "Доцент"}, {"id": 2, "name": "Профессор"}]),
            )
            .with_table(
                "work-times",
                json!([{"id": 1, "name": 1.0}, {"id": 2, "name": 0.5}]),
            )
            .with_table("activities", json!([{"id": 1, "name": "Кураторство"}]))
            .with_table(
                "teaching-types",
                json!([
                    {"id": 1, "name": "Лекции"},
                    {"id": 2, "name": "Практики"},
                    {"id": 3, "name": "Лабораторные"}
                ]),
            )
            .with_table(
                "professors",
                json!([
                    {
                        "id": 1,
                        "first_name": "Казимир",
                        "last_name": "Малевич",
                        "third_name": "Северинович",
                        "birth_date": "1879-02-23",
                        "email": "malevich@example.org",
                        "phone_number": "79990000001",
                        "office": 1,
                        "degree": 2,
                        "position": 2,
                        "work_time": 1,
                        "activities": [
                            {"id": 1, "activity": {"id": 1, "name": "Кураторство"}, "description": "1 курс"}
                        ]
                    },
                    {
                        "id": 2,
                        "first_name": "Энди",
                        "last_name": "Уорхол",
                        "third_name": null,
                        "birth_date": "1928-08-06",
                        "email": "warhol@example.org",
                        "phone_number": "79990000002",
                        "office": null,
                        "degree": null,
                        "position": 1,
                        "work_time": 2
                    }
                ]),
            )
            .with_table(
                "disciplines",
                json!([{"id": 1, "name": "Супрематизм"}, {"id": 2, "name": "Поп-арт"}]),
            )
            .with_table(
                "professor-disciplines",
                json!([
                    {"id": 1, "professor": 1, "discipline": 1, "teaching_type": 1},
                    {"id": 2, "professor": 1, "discipline": 1, "teaching_type": 2},
                    {"id": 3, "professor": 2, "discipline": 2, "teaching_type": 1}
                ]),
            )
    }

    pub fn with_table(self, name: &str, rows: Value) -> Self {
        let rows = match rows {
            Value::Array(rows) => rows,
            other => panic!("table {} must be an array, got {}", name, other),
        };
        self.store
            .lock()
            .unwrap()
            .tables
            .insert(name.to_owned(), rows);
        self
    }

    pub fn fail(&self, method: Method, path: &str, status: u16, body: Value) {
        self.store.lock().unwrap().failures.push(Failure {
            method,
            path: path.to_owned(),
            matching: None,
            status,
            body: body.to_string(),
        });
    }

    pub fn fail_matching(&self, method: Method, path: &str, matching: Value, status: u16) {
        self.store.lock().unwrap().failures.push(Failure {
            method,
            path: path.to_owned(),
            matching: Some(matching),
            status,
            body: json!({"detail": "rejected"}).to_string(),
        });
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.store.lock().unwrap().requests.clone()
    }

    pub fn requests_to(&self, method: Method, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    pub fn mutations(&self) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method != Method::GET)
            .collect()
    }

    pub fn table(&self, name: &str) -> Vec<Value> {
        self.store.lock().unwrap().tables[name].clone()
    }
}

impl Backend for TestBackend {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Reply, ApiError> {
        let mut guard = self.store.lock().unwrap();
        let store = &mut *guard;
        store.requests.push(Recorded {
            method: method.clone(),
            path: path.to_owned(),
            body: body.cloned(),
        });
        if let Some(failure) = store
            .failures
            .iter()
            .find(|failure| failure.applies(&method, path, body))
        {
            return Ok(Reply {
                status: failure.status,
                body: failure.body.clone(),
            });
        }

        let segments = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>();
        let (table, id) = match segments.as_slice() {
            [table] => (table.to_string(), None),
            [table, id] => match id.parse::<u32>() {
                Ok(id) => (table.to_string(), Some(json!(id))),
                Err(_) => return Ok(not_found()),
            },
            _ => return Ok(not_found()),
        };
        if !store.tables.contains_key(&table) {
            return Ok(not_found());
        }

        let answer = match (method.as_str(), id) {
            ("GET", None) => {
                let rows = store.tables[&table]
                    .iter()
                    .map(|row| store.represent(&table, row))
                    .collect::<Vec<_>>();
                reply(200, Value::Array(rows))
            }
            ("GET", Some(id)) => match store.find(&table, &id) {
                Some(row) => reply(200, store.represent(&table, row)),
                None => not_found(),
            },
            ("POST", None) => {
                let mut row = body.cloned().unwrap_or_else(|| json!({}));
                let id = store.next_id;
                store.next_id += 1;
                row["id"] = json!(id);
                store.tables.get_mut(&table).unwrap().push(row.clone());
                reply(201, store.represent(&table, &row))
            }
            ("PUT", Some(id)) => {
                let rows = store.tables.get_mut(&table).unwrap();
                match rows.iter_mut().find(|row| row.get("id") == Some(&id)) {
                    Some(row) => {
                        let mut updated = body.cloned().unwrap_or_else(|| json!({}));
                        updated["id"] = id;
                        *row = updated.clone();
                        reply(200, store.represent(&table, &updated))
                    }
                    None => not_found(),
                }
            }
            ("DELETE", Some(id)) => {
                let rows = store.tables.get_mut(&table).unwrap();
                let before = rows.len();
                rows.retain(|row| row.get("id") != Some(&id));
                if rows.len() == before {
                    not_found()
                } else {
                    Reply {
                        status: 204,
                        body: String::new(),
                    }
                }
            }
            _ => reply(405, json!({"detail": "Method not allowed."})),
        };
        Ok(answer)
    }
}

/// Answers every confirmation the same way and remembers what was shown.
pub struct TestPrompt {
    answer: bool,
    pub confirms: Mutex<Vec<String>>,
    pub alerts: Mutex<Vec<String>>,
}

impl TestPrompt {
    pub fn yes() -> Self {
        TestPrompt {
            answer: true,
            confirms: Mutex::new(Vec::new()),
            alerts: Mutex::new(Vec::new()),
        }
    }

    pub fn no() -> Self {
        TestPrompt {
            answer: false,
            ..TestPrompt::yes()
        }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.lock().unwrap().clone()
    }
}

impl Prompt for TestPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.confirms.lock().unwrap().push(message.to_owned());
        self.answer
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_owned());
    }
}

pub fn seeded_api() -> Api<TestBackend> {
    Api::new(TestBackend::seeded())
}
