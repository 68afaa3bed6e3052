use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

use social_config::ServerConfig;
use social_core::User;
use social_storage::Storage;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::error::ApiError;

// Request body structs. Missing fields decode to their zero values.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CreateUserRequest {
    email: String,
    password: String,
    name: String,
    age: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UpdateUserRequest {
    password: String,
    name: String,
    age: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct CreatePostRequest {
    user_email: String,
    text: String,
}

#[derive(Clone)]
struct AppState {
    storage: Arc<Storage>,
}

pub struct Server;

impl Server {
    pub async fn serve(storage: Arc<Storage>, config: &ServerConfig) -> anyhow::Result<()> {
        let app = router(storage, config.request_timeout());

        let addr = config.addr();
        let listener = TcpListener::bind(&addr).await?;

        info!("Server listening on {}", addr);

        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Build the route table over a shared storage client.
pub fn router(storage: Arc<Storage>, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(handle_sample))
        .route("/err", get(handle_err))
        .route(
            "/users",
            post(api_create_user)
                .get(api_missing_email)
                .fallback(method_not_supported),
        )
        .route(
            "/users/:email",
            get(api_get_user)
                .put(api_update_user)
                .delete(api_delete_user)
                .fallback(method_not_supported),
        )
        .route(
            "/posts",
            post(api_create_post).fallback(method_not_supported),
        )
        .route(
            "/posts/:key",
            get(api_get_posts)
                .delete(api_delete_post)
                .fallback(method_not_supported),
        )
        .fallback(route_not_found)
        .layer(timeout_layer(request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { storage })
}

/// Timed-out requests are answered 404 like every other failure.
pub(crate) fn timeout_layer(request_timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::NOT_FOUND, request_timeout)
}

/// GET / - Sample user payload
async fn handle_sample() -> Json<User> {
    Json(User {
        email: "test@example.com".to_string(),
        ..User::default()
    })
}

/// GET /err - Sample error payload
async fn handle_err() -> ApiError {
    ApiError::NotFound("404 not found".to_string())
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("404 page not found".to_string())
}

async fn method_not_supported() -> ApiError {
    ApiError::Validation("method not supported".to_string())
}

/// GET /users - No email in the path
async fn api_missing_email() -> ApiError {
    ApiError::Validation("empty email ID".to_string())
}

/// POST /users - Create a user
async fn api_create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;
    debug!(email = %req.email, "Decoded create user request");

    let user = state
        .storage
        .create_user(&req.email, &req.password, &req.name, req.age)
        .await?;

    Ok((StatusCode::CREATED, Json(user)).into_response())
}

/// GET /users/:email - Fetch a user
async fn api_get_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user = state.storage.get_user(&email).await?;
    if user.is_zero() {
        return Err(ApiError::NotFound("user not found".to_string()));
    }
    Ok(Json(user))
}

/// PUT /users/:email - Replace a user
async fn api_update_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;

    let user = state
        .storage
        .update_user(&email, &req.password, &req.name, req.age)
        .await?;

    Ok(Json(user))
}

/// DELETE /users/:email - Delete a user
async fn api_delete_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.storage.delete_user(&email).await?;
    info!(email = %email, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /posts - Create a post
async fn api_create_post(
    State(state): State<AppState>,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;

    let post = state
        .storage
        .create_post(&req.user_email, &req.text)
        .await?;

    Ok((StatusCode::CREATED, Json(post)).into_response())
}

/// GET /posts/:email - List a user's posts
async fn api_get_posts(
    State(state): State<AppState>,
    Path(user_email): Path<String>,
) -> Result<Response, ApiError> {
    let posts = state.storage.get_posts(&user_email).await?;
    Ok(Json(posts).into_response())
}

/// DELETE /posts/:id - Delete a post
async fn api_delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.storage.delete_post(&id).await?;
    info!(id = %id, "Post deleted");
    Ok(StatusCode::NO_CONTENT)
}
