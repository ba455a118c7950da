use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::todo;

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Body fields are optional on purpose: a request omitting one creates an
/// entity with an empty value instead of failing validation.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "todo::deserialize_deadline")]
    pub deadline: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "todo::deserialize_deadline")]
    pub deadline: Option<DateTime<Utc>>,
}
