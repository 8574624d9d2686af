//! OpenAPI documentation.

use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};

use crate::handlers::auth_handler::{SigninRequest, SignupRequest};
use crate::handlers::current_user_handler::CurrentUserResponse;
use crate::service::Claims;
use domain::UserResponse;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::auth_handler::signin,
        crate::handlers::auth_handler::signout,
        crate::handlers::auth_handler::signup,
        crate::handlers::current_user_handler::current_user,
    ),
    components(
        schemas(
            SigninRequest,
            SignupRequest,
            UserResponse,
            Claims,
            CurrentUserResponse,
        )
    ),
    modifiers(&SessionCookieAddon),
    tags(
        (name = "Authentication", description = "Session authentication endpoints"),
    )
)]
pub struct ApiDoc;

/// Documents the session cookie as an API key.
struct SessionCookieAddon;

impl Modify for SessionCookieAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(
                    domain::SESSION_COOKIE_NAME,
                ))),
            );
        }
    }
}
