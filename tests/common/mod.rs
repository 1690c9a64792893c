#![allow(dead_code)]

//! Shared test doubles: an in-memory repository for end-to-end CRUD tests and
//! a call-counting repository for proving the gate short-circuits.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

use todovault::config::AuthConfig;
use todovault::error::AppError;
use todovault::models::{Todo, TodoInput};
use todovault::repository::{parse_id, TodoRepository};

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "integration-test-secret".to_string(),
        admin_username: "admin".to_string(),
        admin_password: "password".to_string(),
    }
}

/// A todo collection held in a HashMap, with ids assigned on insert the way
/// the store would assign them.
#[derive(Default)]
pub struct MemoryTodoRepository {
    todos: Mutex<HashMap<Uuid, Todo>>,
}

#[async_trait]
impl TodoRepository for MemoryTodoRepository {
    async fn list(&self) -> Result<Vec<Todo>, AppError> {
        Ok(self.todos.lock().unwrap().values().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Todo, AppError> {
        let id = parse_id(id)?;
        self.todos
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Todo not found".into()))
    }

    async fn create(&self, input: TodoInput) -> Result<Todo, AppError> {
        let todo = Todo {
            id: Uuid::new_v4(),
            task: input.task,
            completed: input.completed,
        };
        self.todos.lock().unwrap().insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: &str, input: TodoInput) -> Result<Todo, AppError> {
        let id = parse_id(id)?;
        let mut todos = self.todos.lock().unwrap();
        match todos.get_mut(&id) {
            Some(todo) => {
                todo.task = input.task;
                todo.completed = input.completed;
                Ok(todo.clone())
            }
            None => Err(AppError::NotFound("Todo not found".into())),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let id = parse_id(id)?;
        if self.todos.lock().unwrap().remove(&id).is_some() {
            Ok(())
        } else {
            Err(AppError::NotFound("Todo not found".into()))
        }
    }
}

/// Counts every repository call. Used to prove that rejected requests never
/// reach a handler and therefore never touch the store.
#[derive(Default)]
pub struct CountingTodoRepository {
    calls: AtomicUsize,
}

impl CountingTodoRepository {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn bump(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl TodoRepository for CountingTodoRepository {
    async fn list(&self) -> Result<Vec<Todo>, AppError> {
        self.bump();
        Ok(Vec::new())
    }

    async fn get(&self, id: &str) -> Result<Todo, AppError> {
        self.bump();
        let _ = parse_id(id)?;
        Err(AppError::NotFound("Todo not found".into()))
    }

    async fn create(&self, input: TodoInput) -> Result<Todo, AppError> {
        self.bump();
        Ok(Todo {
            id: Uuid::new_v4(),
            task: input.task,
            completed: input.completed,
        })
    }

    async fn update(&self, id: &str, input: TodoInput) -> Result<Todo, AppError> {
        self.bump();
        let id = parse_id(id)?;
        Ok(Todo {
            id,
            task: input.task,
            completed: input.completed,
        })
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.bump();
        let _ = parse_id(id)?;
        Ok(())
    }
}
