//! Typed access to the directory's REST resources on top of any [`Backend`]
use std::fmt;

use log::{debug, error, warn};
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use super::{backend::Backend, helpers::extract_detail};

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("not found: {path}")]
    NotFound { path: String, detail: Option<String> },
    #[error("request failed with status code {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("unable to process JSON for {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// What a user should see: the backend's `detail` when it sent one, the error itself otherwise.
    pub fn user_detail(&self) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            }
            | ApiError::NotFound {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => self.to_string(),
        }
    }
}

/// Collection endpoints of the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Professors,
    Disciplines,
    ProfessorDisciplines,
    TeachingTypes,
    Degrees,
    Positions,
    Offices,
    WorkTimes,
    Activities,
}

impl Resource {
    pub fn name(self) -> &'static str {
        match self {
            Resource::Professors => "professors",
            Resource::Disciplines => "disciplines",
            Resource::ProfessorDisciplines => "professor-disciplines",
            Resource::TeachingTypes => "teaching-types",
            Resource::Degrees => "degrees",
            Resource::Positions => "positions",
            Resource::Offices => "offices",
            Resource::WorkTimes => "work-times",
            Resource::Activities => "activities",
        }
    }

    pub fn collection_path(self) -> String {
        format!("{}/", self.name())
    }

    pub fn item_path(self, id: u32) -> String {
        format!("{}/{}/", self.name(), id)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub struct Api<B: Backend> {
    backend: B,
}

impl<B: Backend> Api<B> {
    pub fn new(backend: B) -> Self {
        Api { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    async fn call(&self, method: Method, path: &str, body: Option<Value>) -> Result<String, ApiError> {
        let reply = self.backend.send(method.clone(), path, body.as_ref()).await?;
        match reply.status {
            200..=299 => Ok(reply.body),
            404 => {
                warn!("{} {} answered 404", method, path);
                Err(ApiError::NotFound {
                    path: path.to_owned(),
                    detail: extract_detail(&reply.body),
                })
            }
            status => {
                error!("{} {} answered {}: {}", method, path, status, reply.body);
                Err(ApiError::Status {
                    status,
                    detail: extract_detail(&reply.body),
                })
            }
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: String,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let text = self.call(method, &path, body).await?;
        serde_json::from_str(&text).map_err(|source| ApiError::Json { path, source })
    }

    fn encode<S: Serialize>(path: &str, body: &S) -> Result<Value, ApiError> {
        serde_json::to_value(body).map_err(|source| ApiError::Json {
            path: path.to_owned(),
            source,
        })
    }

    pub async fn list<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>, ApiError> {
        self.fetch(Method::GET, resource.collection_path(), None)
            .await
    }

    pub async fn get<T: DeserializeOwned>(&self, resource: Resource, id: u32) -> Result<T, ApiError> {
        self.fetch(Method::GET, resource.item_path(id), None).await
    }

    pub async fn create<T: DeserializeOwned, S: Serialize>(
        &self,
        resource: Resource,
        body: &S,
    ) -> Result<T, ApiError> {
        let path = resource.collection_path();
        let body = Self::encode(&path, body)?;
        debug!("Creating {}: {}", resource, body);
        self.fetch(Method::POST, path, Some(body)).await
    }

    pub async fn update<T: DeserializeOwned, S: Serialize>(
        &self,
        resource: Resource,
        id: u32,
        body: &S,
    ) -> Result<T, ApiError> {
        let path = resource.item_path(id);
        let body = Self::encode(&path, body)?;
        debug!("Updating {} {}: {}", resource, id, body);
        self.fetch(Method::PUT, path, Some(body)).await
    }

    pub async fn remove(&self, resource: Resource, id: u32) -> Result<(), ApiError> {
        debug!("Removing {} {}", resource, id);
        self.call(Method::DELETE, &resource.item_path(id), None)
            .await
            .map(|_| ())
    }
}
