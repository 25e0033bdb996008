use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use catalog_app::{
    command_handlers::{
        CreateUserCommandHandler, DeleteUserCommandHandler, UpdateUserCommandHandler,
    },
    cqrs::{
        commands::{CreateUser, DeleteUser, UpdateUser},
        queries::GetAllUsers,
    },
    queries_handlers::GetAllUsersHandler,
};

use crate::{error::WebError, http::AppState};

/// Body for user creation and update.
#[derive(serde::Deserialize)]
pub struct UserForm {
    pub name: String,
    pub lastname: String,
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(form): Json<UserForm>,
) -> Result<impl IntoResponse, WebError> {
    let command = CreateUser {
        name: form.name,
        lastname: form.lastname,
    };
    state
        .app_bus
        .execute(command, CreateUserCommandHandler::new())
        .await?;

    Ok(StatusCode::CREATED)
}

/// GET /users
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse, WebError> {
    let users = state
        .app_bus
        .query(GetAllUsers {}, GetAllUsersHandler::new())
        .await?;

    Ok(Json(users))
}

/// PUT /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(form): Json<UserForm>,
) -> Result<impl IntoResponse, WebError> {
    let command = UpdateUser {
        id,
        name: form.name,
        lastname: form.lastname,
    };
    state
        .app_bus
        .execute(command, UpdateUserCommandHandler::new())
        .await?;

    Ok(StatusCode::OK)
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, WebError> {
    state
        .app_bus
        .execute(DeleteUser { id }, DeleteUserCommandHandler::new())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
