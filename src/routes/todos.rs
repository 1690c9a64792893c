use crate::{
    auth::AuthenticatedUser,
    error::AppError,
    models::TodoInput,
    repository::TodoRepository,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};

/// Lists every stored todo.
///
/// ## Responses:
/// - `200 OK`: JSON array of todos, possibly empty, in store-native order.
/// - `401 Unauthorized`: missing or invalid bearer token.
/// - `500 Internal Server Error`: store failure.
#[get("")]
pub async fn list_todos(
    repo: web::Data<dyn TodoRepository>,
    _user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let todos = repo.list().await?;

    Ok(HttpResponse::Ok().json(todos))
}

/// Creates a new todo. The body carries `task` and/or `completed`; any
/// client-supplied id is ignored and the store assigns one.
///
/// ## Responses:
/// - `201 Created`: the stored todo, identifier populated.
/// - `401 Unauthorized`: missing or invalid bearer token.
/// - `500 Internal Server Error`: store failure.
#[post("")]
pub async fn create_todo(
    repo: web::Data<dyn TodoRepository>,
    todo_data: web::Json<TodoInput>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let todo = repo.create(todo_data.into_inner()).await?;

    log::info!("{} created todo {}", user.0.username, todo.id);

    Ok(HttpResponse::Created().json(todo))
}

/// Fetches a single todo by id. The path segment is handed to the repository
/// as-is; it decides between a malformed id (400) and an absent one (404).
///
/// ## Responses:
/// - `200 OK`: the matching todo.
/// - `400 Bad Request`: malformed identifier.
/// - `401 Unauthorized`: missing or invalid bearer token.
/// - `404 Not Found`: no record with that id.
#[get("/{id}")]
pub async fn get_todo(
    repo: web::Data<dyn TodoRepository>,
    todo_id: web::Path<String>,
    _user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let todo = repo.get(&todo_id).await?;

    Ok(HttpResponse::Ok().json(todo))
}

/// Replaces `task` and `completed` of an existing todo.
///
/// ## Responses:
/// - `200 OK`: the updated todo.
/// - `400 Bad Request`: malformed identifier.
/// - `401 Unauthorized`: missing or invalid bearer token.
/// - `404 Not Found`: no record with that id; nothing is written.
#[put("/{id}")]
pub async fn update_todo(
    repo: web::Data<dyn TodoRepository>,
    todo_id: web::Path<String>,
    todo_data: web::Json<TodoInput>,
    _user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let todo = repo.update(&todo_id, todo_data.into_inner()).await?;

    Ok(HttpResponse::Ok().json(todo))
}

/// Deletes a todo by id.
///
/// ## Responses:
/// - `204 No Content`: record removed.
/// - `400 Bad Request`: malformed identifier.
/// - `401 Unauthorized`: missing or invalid bearer token.
/// - `404 Not Found`: no record with that id, including a repeat delete.
#[delete("/{id}")]
pub async fn delete_todo(
    repo: web::Data<dyn TodoRepository>,
    todo_id: web::Path<String>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let id = todo_id.into_inner();
    repo.delete(&id).await?;

    log::info!("{} deleted todo {}", user.0.username, id);

    Ok(HttpResponse::NoContent().finish())
}
