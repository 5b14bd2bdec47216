use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::response::{UserListResponse, UserMessageResponse};
use crate::models::user::{CreateUserRequest, User};
use crate::utils::parse::parse_leading_int;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// List every user in insertion order
///
/// GET /usuarios
pub async fn list_users_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<UserListResponse>, ApiError> {
    let users = state.read_users()?;

    Ok(Json(UserListResponse {
        total: users.len(),
        users: users.list().to_vec(),
    }))
}

/// Fetch one user
///
/// GET /usuarios/{id}
pub async fn get_user_handler(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_leading_int(&raw_id);
    let users = state.read_users()?;

    match id.and_then(|id| users.find_by_id(id)) {
        Some(user) => Ok(Json(user.clone())),
        None => {
            debug!(raw_id = %raw_id, id = ?id, "User not found");
            Err(ApiError::UserNotFound { id })
        }
    }
}

/// Create a user
///
/// POST /usuarios  `{ "name": .., "email": .., "age": .. }`
///
/// A missing or unreadable body, or one that is not a JSON object, is
/// handled as `{}`.
pub async fn create_user_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<UserMessageResponse>), ApiError> {
    let request = match payload {
        Ok(Json(body)) => CreateUserRequest::from_body(body),
        Err(rejection) => {
            debug!(error = %rejection, "Unreadable create body, treating as empty");
            CreateUserRequest::default()
        }
    };

    let (Some(name), Some(email)) = (request.name(), request.email()) else {
        warn!("Create rejected: name or email missing");
        return Err(ApiError::MissingFields);
    };

    let mut users = state.write_users()?;

    if users.find_by_email(email).is_some() {
        warn!(email = %email, "Create rejected: email already in use");
        return Err(ApiError::EmailInUse);
    }

    let user = User::new(users.next_id(), name, email, request.age_or_default(), true);
    users.append(user.clone());

    info!(user_id = user.id, email = %user.email, total = users.len(), "User created");

    Ok((
        StatusCode::CREATED,
        Json(UserMessageResponse {
            message: "Usuário criado com sucesso!".to_string(),
            user,
        }),
    ))
}

/// Remove a user
///
/// DELETE /usuarios/{id}
pub async fn delete_user_handler(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<UserMessageResponse>, ApiError> {
    let id = parse_leading_int(&raw_id);
    let mut users = state.write_users()?;

    let Some(user) = id.and_then(|id| users.remove_by_id(id)) else {
        debug!(raw_id = %raw_id, "Delete target not found");
        return Err(ApiError::RemoveTargetMissing);
    };

    info!(user_id = user.id, total = users.len(), "User removed");

    Ok(Json(UserMessageResponse {
        message: "Usuário removido com sucesso!".to_string(),
        user,
    }))
}
