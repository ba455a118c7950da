use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::todo::Todo;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: Option<String>,
    /// Unique across all users; doubles as the trusted `username` header
    /// identity. Uniqueness is enforced at creation only.
    pub username: Option<String>,
    pub pro: bool,
    pub todos: Vec<Todo>,
}
