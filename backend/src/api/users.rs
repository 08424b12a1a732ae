//! User registry API handlers

use crate::api::ApiState;
use crate::error::AppError;
use crate::messaging::User;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;

/// Register user request
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// Caller-chosen identifier
    pub id: String,
    /// Display name
    pub name: String,
}

/// POST /api/users - Register a user (replaces an existing user with the same ID)
pub async fn create_user(
    State(state): State<ApiState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = User::new(request.id, request.name);
    state.service.write().await.add_user(user.clone());

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/users/:id - Get a registered user
pub async fn get_user(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<User>, AppError> {
    let service = state.service.read().await;
    let user = service
        .get_user(&id)
        .cloned()
        .ok_or(AppError::UserNotFound(id))?;

    Ok(Json(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::messaging::MessagingService;

    fn create_test_state() -> ApiState {
        ApiState::new(MessagingService::new(), Config::default())
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let state = create_test_state();
        let request = CreateUserRequest {
            id: "u1".to_string(),
            name: "Alice".to_string(),
        };

        let (status, Json(user)) = create_user(State(state.clone()), Json(request))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(user.name, "Alice");

        let Json(fetched) = get_user(State(state), Path("u1".to_string()))
            .await
            .unwrap();
        assert_eq!(fetched, user);
    }

    #[tokio::test]
    async fn test_create_user_accepts_opaque_ids() {
        let state = create_test_state();
        for id in ["", " ", "last-messages", "ünïcødé/π"] {
            let request = CreateUserRequest {
                id: id.to_string(),
                name: "Anyone".to_string(),
            };
            let (status, _) = create_user(State(state.clone()), Json(request))
                .await
                .unwrap();
            assert_eq!(status, StatusCode::CREATED);
        }
        assert_eq!(state.service.read().await.user_count(), 4);
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let state = create_test_state();
        let result = get_user(State(state), Path("ghost".to_string())).await;
        match result {
            Err(AppError::UserNotFound(id)) => assert_eq!(id, "ghost"),
            other => panic!("Expected UserNotFound error, got: {:?}", other.map(|j| j.0)),
        }
    }
}
