use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Todo, User};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Username already exists")]
    UsernameTaken,

    #[error("Pro plan is already activated.")]
    ProAlreadyActive,

    #[error("User not found")]
    UserNotFound,

    #[error("Todo not found")]
    TodoNotFound,
}

/// In-memory user table. Clones share the underlying collection; every
/// mutation runs inside a single write-lock critical section so writers
/// never interleave. Lookups are linear scans.
#[derive(Clone, Default)]
pub struct Store {
    users: Arc<RwLock<Vec<User>>>,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user. The duplicate-username check and the insert happen
    /// under one lock acquisition. Two absent usernames count as equal.
    pub async fn create_user(
        &self,
        name: Option<String>,
        username: Option<String>,
    ) -> Result<User, StoreError> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.username == username) {
            return Err(StoreError::UsernameTaken);
        }

        let user = User {
            id: Uuid::new_v4(),
            name,
            username,
            pro: false,
            todos: Vec::new(),
        };
        users.push(user.clone());
        Ok(user)
    }

    pub async fn find_user_by_username(&self, username: &str) -> Option<User> {
        let users = self.users.read().await;
        users
            .iter()
            .find(|u| u.username.as_deref() == Some(username))
            .cloned()
    }

    pub async fn find_user_by_id(&self, id: Uuid) -> Option<User> {
        let users = self.users.read().await;
        users.iter().find(|u| u.id == id).cloned()
    }

    /// Turn the pro flag on. The flag is monotonic; a second activation is
    /// rejected.
    pub async fn activate_pro(&self, id: Uuid) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(StoreError::UserNotFound)?;

        if user.pro {
            return Err(StoreError::ProAlreadyActive);
        }
        user.pro = true;
        Ok(user.clone())
    }

    pub async fn todos_for(&self, user_id: Uuid) -> Result<Vec<Todo>, StoreError> {
        let users = self.users.read().await;
        users
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| u.todos.clone())
            .ok_or(StoreError::UserNotFound)
    }

    pub async fn add_todo(
        &self,
        user_id: Uuid,
        title: Option<String>,
        deadline: Option<DateTime<Utc>>,
    ) -> Result<Todo, StoreError> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(StoreError::UserNotFound)?;

        let todo = Todo {
            id: Uuid::new_v4(),
            title,
            deadline,
            done: false,
            created_at: Utc::now(),
        };
        user.todos.push(todo.clone());
        Ok(todo)
    }

    /// Overwrite both mutable fields. An absent field clears the stored
    /// value rather than keeping the old one.
    pub async fn update_todo(
        &self,
        user_id: Uuid,
        todo_id: Uuid,
        title: Option<String>,
        deadline: Option<DateTime<Utc>>,
    ) -> Result<Todo, StoreError> {
        let mut users = self.users.write().await;
        let todo = Self::todo_mut(users.as_mut_slice(), user_id, todo_id)?;
        todo.title = title;
        todo.deadline = deadline;
        Ok(todo.clone())
    }

    /// Mark a todo done. Completion is monotonic and idempotent.
    pub async fn complete_todo(&self, user_id: Uuid, todo_id: Uuid) -> Result<Todo, StoreError> {
        let mut users = self.users.write().await;
        let todo = Self::todo_mut(users.as_mut_slice(), user_id, todo_id)?;
        todo.done = true;
        Ok(todo.clone())
    }

    /// Remove a todo by id, keeping the order of the rest.
    pub async fn remove_todo(&self, user_id: Uuid, todo_id: Uuid) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(StoreError::UserNotFound)?;

        let index = user
            .todos
            .iter()
            .position(|t| t.id == todo_id)
            .ok_or(StoreError::TodoNotFound)?;
        user.todos.remove(index);
        Ok(())
    }

    fn todo_mut(
        users: &mut [User],
        user_id: Uuid,
        todo_id: Uuid,
    ) -> Result<&mut Todo, StoreError> {
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(StoreError::UserNotFound)?;
        user.todos
            .iter_mut()
            .find(|t| t.id == todo_id)
            .ok_or(StoreError::TodoNotFound)
    }
}
