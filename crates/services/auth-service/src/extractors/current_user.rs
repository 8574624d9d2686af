//! Current user extractor.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;
use std::convert::Infallible;
use tracing::debug;

use crate::service::Claims;
use crate::session::Session;
use crate::state::AppState;

/// Claims of the signed-in user, if the session carries a valid token.
///
/// Never rejects: a missing, malformed or expired session yields `None`.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Option<Claims>);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let claims = Session::from_jar(&jar).and_then(|session| {
            state
                .auth_service
                .verify_token(&session.jwt)
                .map_err(|e| debug!("Ignoring session: {}", e))
                .ok()
        });

        Ok(CurrentUser(claims))
    }
}
