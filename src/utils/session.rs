use axum::{
    extract::Request,
    http::Method,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::error::AppError;

pub const SESSION_COOKIE: &str = "qa_session";
const SESSION_HOURS: i64 = 10;

// Reachable without a session. The lead form on the public site posts to the
// telegram endpoint, so only POST is open there.
fn is_public(method: &Method, path: &str) -> bool {
    match path {
        "/login" | "/health" | "/api/auth/login" | "/api/auth/logout" => true,
        "/api/site/telegram" => method == Method::POST,
        _ => false,
    }
}

pub fn session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, "active"))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::hours(SESSION_HOURS))
        .build()
}

pub fn expired_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::ZERO)
        .build()
}

pub fn has_session(jar: &CookieJar) -> bool {
    jar.get(SESSION_COOKIE)
        .is_some_and(|cookie| !cookie.value().is_empty())
}

/// Gate in front of every route: API calls without a session get a 401 JSON
/// body, page requests are sent to the login screen.
pub async fn session_middleware(jar: CookieJar, request: Request, next: Next) -> Response {
    let path = request.uri().path();
    if is_public(request.method(), path) || has_session(&jar) {
        return next.run(request).await;
    }

    if path.starts_with("/api/") {
        AppError::Unauthorized.into_response()
    } else {
        Redirect::to("/login").into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_lead_submission_is_public_on_telegram() {
        assert!(is_public(&Method::POST, "/api/site/telegram"));
        assert!(!is_public(&Method::GET, "/api/site/telegram"));
        assert!(!is_public(&Method::PUT, "/api/site/telegram"));
        assert!(is_public(&Method::POST, "/api/auth/login"));
        assert!(!is_public(&Method::GET, "/api/site/tours"));
    }

    #[test]
    fn empty_cookie_is_not_a_session() {
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, ""));
        assert!(!has_session(&jar));
        let jar = CookieJar::new().add(session_cookie());
        assert!(has_session(&jar));
    }

    #[test]
    fn session_cookie_attributes() {
        let cookie = session_cookie();
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.max_age(), Some(time::Duration::hours(10)));
        assert_eq!(expired_session_cookie().max_age(), Some(time::Duration::ZERO));
    }
}
