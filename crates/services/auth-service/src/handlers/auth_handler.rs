//! Signin, signout and signup handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Deserializer};
use serde_json::{json, Value};
use tracing::info;
use utoipa::ToSchema;
use validator::Validate;

use common::AppResult;
use domain::{User, UserResponse};

use super::current_user_handler::current_user;
use super::not_found;
use crate::extractors::ValidatedJson;
use crate::session::{removal_cookie, Session};
use crate::state::AppState;

/// Signin request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SigninRequest {
    #[serde(default)]
    #[validate(email(message = "Email must be valid"))]
    #[schema(example = "test@test.com")]
    pub email: String,
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "You must supply a password"))]
    #[schema(example = "password")]
    pub password: String,
}

/// Signup request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    #[serde(default)]
    #[validate(email(message = "Email must be valid"))]
    #[schema(example = "test@test.com")]
    pub email: String,
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(
        min = 4,
        max = 20,
        message = "Password must be between 4 and 20 characters"
    ))]
    #[schema(example = "password")]
    pub password: String,
}

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(|s| s.trim().to_string())
}

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signin", post(signin).fallback(not_found))
        .route("/signout", post(signout).fallback(not_found))
        .route("/signup", post(signup).fallback(not_found))
        .route("/currentuser", get(current_user).fallback(not_found))
}

/// Sign in with email and password
#[utoipa::path(
    post,
    path = "/api/users/signin",
    tag = "Authentication",
    request_body = SigninRequest,
    responses(
        (status = 200, description = "Signed in, session cookie set", body = UserResponse),
        (status = 400, description = "Validation error or invalid credentials")
    )
)]
pub async fn signin(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(payload): ValidatedJson<SigninRequest>,
) -> AppResult<(CookieJar, Json<UserResponse>)> {
    let user = state
        .auth_service
        .signin(payload.email, payload.password)
        .await?;

    let jar = start_session(&state, jar, &user)?;
    info!(user_id = %user.id, "User signed in");

    Ok((jar, Json(UserResponse::from(user))))
}

/// Sign out by clearing the session cookie
#[utoipa::path(
    post,
    path = "/api/users/signout",
    tag = "Authentication",
    responses(
        (status = 200, description = "Session cleared, empty object returned")
    )
)]
pub async fn signout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Json<Value>) {
    (jar.add(removal_cookie(state.session_secure)), Json(json!({})))
}

/// Register a new user and sign them in
#[utoipa::path(
    post,
    path = "/api/users/signup",
    tag = "Authentication",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User created, session cookie set", body = UserResponse),
        (status = 400, description = "Validation error or email in use")
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(payload): ValidatedJson<SignupRequest>,
) -> AppResult<(StatusCode, CookieJar, Json<UserResponse>)> {
    let user = state
        .auth_service
        .signup(payload.email, payload.password)
        .await?;

    let jar = start_session(&state, jar, &user)?;
    info!(user_id = %user.id, "User signed up");

    Ok((StatusCode::CREATED, jar, Json(UserResponse::from(user))))
}

fn start_session(state: &AppState, jar: CookieJar, user: &User) -> AppResult<CookieJar> {
    let token = state.auth_service.issue_token(user)?;
    let cookie = Session::new(token).into_cookie(state.session_secure)?;
    Ok(jar.add(cookie))
}
