//!
//! # Todo Repository
//!
//! Translates the five todo operations onto the backing store. Handlers hand
//! the raw `{id}` path segment to the repository as an opaque string; parsing
//! it into an identifier happens here, so a malformed segment surfaces as
//! `InvalidIdentifier` (400) while a well-formed but absent one surfaces as
//! `NotFound` (404).
//!
//! The trait exists so tests can substitute doubles for the Postgres
//! implementation. No operation retries internally; a store failure fails
//! that one request.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Todo, TodoInput};

/// The five document operations on the todo collection.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Every stored record, in store-native order. May be empty.
    async fn list(&self) -> Result<Vec<Todo>, AppError>;

    /// The record matching `id`, or `NotFound`.
    async fn get(&self, id: &str) -> Result<Todo, AppError>;

    /// Inserts a new record; the store assigns the identifier.
    async fn create(&self, input: TodoInput) -> Result<Todo, AppError>;

    /// Full replace of `task` and `completed` for the record matching `id`.
    /// Returns `NotFound` when nothing matched; the submitted content is
    /// never echoed back for a record that does not exist.
    async fn update(&self, id: &str, input: TodoInput) -> Result<Todo, AppError>;

    /// Removes the matching record. Deleting an absent id reports `NotFound`
    /// rather than pretending a deletion happened.
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

/// Parses an opaque path segment into a store identifier.
pub fn parse_id(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id)
        .map_err(|_| AppError::InvalidIdentifier(format!("'{}' is not a valid todo id", id)))
}

/// Postgres-backed implementation. Holds a pool handle; the pool's own
/// concurrency contract covers shared use across in-flight requests.
#[derive(Clone)]
pub struct PgTodoRepository {
    pool: PgPool,
}

impl PgTodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PgTodoRepository {
    async fn list(&self) -> Result<Vec<Todo>, AppError> {
        let todos = sqlx::query_as::<_, Todo>("SELECT id, task, completed FROM todos")
            .fetch_all(&self.pool)
            .await?;

        Ok(todos)
    }

    async fn get(&self, id: &str) -> Result<Todo, AppError> {
        let todo_id = parse_id(id)?;

        let todo = sqlx::query_as::<_, Todo>("SELECT id, task, completed FROM todos WHERE id = $1")
            .bind(todo_id)
            .fetch_optional(&self.pool)
            .await?;

        todo.ok_or_else(|| AppError::NotFound("Todo not found".into()))
    }

    async fn create(&self, input: TodoInput) -> Result<Todo, AppError> {
        // The id column defaults to gen_random_uuid(); RETURNING reads the
        // store-assigned identifier back.
        let todo = sqlx::query_as::<_, Todo>(
            "INSERT INTO todos (task, completed) VALUES ($1, $2) RETURNING id, task, completed",
        )
        .bind(input.task)
        .bind(input.completed)
        .fetch_one(&self.pool)
        .await?;

        Ok(todo)
    }

    async fn update(&self, id: &str, input: TodoInput) -> Result<Todo, AppError> {
        let todo_id = parse_id(id)?;

        let todo = sqlx::query_as::<_, Todo>(
            "UPDATE todos SET task = $1, completed = $2 WHERE id = $3 \
             RETURNING id, task, completed",
        )
        .bind(input.task)
        .bind(input.completed)
        .bind(todo_id)
        .fetch_optional(&self.pool)
        .await?;

        todo.ok_or_else(|| AppError::NotFound("Todo not found".into()))
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let todo_id = parse_id(id)?;

        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(todo_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Todo not found".into()));
        }

        Ok(())
    }
}
