//! Typed records and the `RoutineClient` trait for the workout routine API.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

pub mod config;
pub mod http_client;
pub mod utils;

#[derive(Debug, Error)]
pub enum RoutineApiError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("authentication rejected: {0}")]
    Auth(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("api error (status {status}): {body}")]
    Api { status: u16, body: String },
}

impl RoutineApiError {
    /// Map a non-success HTTP status and a body snippet to an error variant.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => Self::Auth(body),
            404 => Self::NotFound(body),
            400 | 422 => Self::InvalidInput(body),
            _ => Self::Api { status, body },
        }
    }
}

/// A logged exercise entry as stored by the API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Routine {
    #[serde(rename = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub name: String,
    #[serde(
        rename = "category",
        default,
        deserialize_with = "deserialize_opt_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub category_id: Option<String>,
    #[serde(rename = "tags", default, deserialize_with = "deserialize_ids")]
    pub tag_ids: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub sets: i64,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub reps: i64,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub weights: f64,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub notes: String,
    #[serde(rename = "dateTime", default, deserialize_with = "deserialize_nullable")]
    pub date_time: String,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub dates: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    #[serde(rename = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    #[serde(rename = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub name: String,
}

/// Identifiers are usually strings but some backends emit integers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Str(String),
    Num(serde_json::Number),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Str(s) => s,
            RawId::Num(n) => n.to_string(),
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer)
        .map(String::from)
        .map_err(|_| serde::de::Error::custom("expected string or number identifier"))
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawId> = Option::deserialize(deserializer)
        .map_err(|_| serde::de::Error::custom("expected string, number or null identifier"))?;
    Ok(raw.map(String::from))
}

fn deserialize_ids<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<RawId>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(String::from)
        .collect())
}

/// Treat an explicit `null` the same as a missing field.
fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Bulk access to the current user's routines, categories and tags.
///
/// Implementations carry their own credential; callers never supply one per call.
#[async_trait]
pub trait RoutineClient: Send + Sync + 'static {
    async fn list_routines(&self) -> Result<Vec<Routine>, RoutineApiError>;
    async fn list_categories(&self) -> Result<Vec<Category>, RoutineApiError>;
    async fn list_tags(&self) -> Result<Vec<Tag>, RoutineApiError>;
    /// Delete a single routine by identifier.
    async fn delete_routine(&self, routine_id: &str) -> Result<(), RoutineApiError>;
}
