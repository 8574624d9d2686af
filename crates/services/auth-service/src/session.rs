//! Cookie session carrying the signed JWT.
//!
//! The cookie value is the JSON object `{"jwt": "<token>"}` encoded as
//! URL-safe base64 without padding.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};

use common::{AppError, AppResult};
use domain::SESSION_COOKIE_NAME;

/// Session payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub jwt: String,
}

impl Session {
    pub fn new(jwt: impl Into<String>) -> Self {
        Self { jwt: jwt.into() }
    }

    /// Encode into a cookie value.
    pub fn encode(&self) -> AppResult<String> {
        let json = serde_json::to_vec(self)
            .map_err(|e| AppError::internal(format!("Session encode failed: {}", e)))?;
        Ok(URL_SAFE_NO_PAD.encode(json))
    }

    /// Decode a cookie value. Anything malformed is treated as no session.
    pub fn decode(value: &str) -> Option<Self> {
        let bytes = URL_SAFE_NO_PAD.decode(value).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    /// Read the session from the request cookies.
    pub fn from_jar(jar: &CookieJar) -> Option<Self> {
        jar.get(SESSION_COOKIE_NAME)
            .and_then(|cookie| Self::decode(cookie.value()))
    }

    /// Build the cookie that stores this session.
    pub fn into_cookie(self, secure: bool) -> AppResult<Cookie<'static>> {
        Ok(base_cookie(self.encode()?, secure))
    }
}

/// Cookie that clears the session on the client.
pub fn removal_cookie(secure: bool) -> Cookie<'static> {
    let mut cookie = base_cookie(String::new(), secure);
    cookie.make_removal();
    cookie
}

fn base_cookie(value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_value_is_base64_json() {
        let value = Session::new("abc.def.ghi").encode().unwrap();
        let raw = URL_SAFE_NO_PAD.decode(&value).unwrap();
        assert_eq!(raw, br#"{"jwt":"abc.def.ghi"}"#);
        assert_eq!(Session::decode(&value), Some(Session::new("abc.def.ghi")));
    }

    #[test]
    fn test_garbage_decodes_to_none() {
        assert_eq!(Session::decode("!!not base64!!"), None);
        assert_eq!(Session::decode(&URL_SAFE_NO_PAD.encode(b"[1,2]")), None);
    }

    #[test]
    fn test_cookie_flags() {
        let cookie = Session::new("t").into_cookie(true).unwrap();
        assert_eq!(cookie.name(), "session");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
    }

    #[test]
    fn test_removal_cookie_expires_immediately() {
        let cookie = removal_cookie(false);
        assert_eq!(cookie.name(), "session");
        assert_eq!(cookie.value(), "");
        assert!(cookie.max_age().is_some_and(|age| age.is_zero()));
    }
}
