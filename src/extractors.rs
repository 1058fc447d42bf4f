use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use axum_extra::extract::CookieJar;

use crate::names;

/// Extracts whether the request is an HTMX request by checking the `HX-Request` header.
pub struct IsHtmx(pub bool);

impl<S: Send + Sync> FromRequestParts<S> for IsHtmx {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let is_htmx = parts
            .headers
            .get("HX-Request")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "true");
        Ok(IsHtmx(is_htmx))
    }
}

/// Extracts the locale from the `lang` cookie, falling back to the browser's
/// `Accept-Language` header, then to `"en"`.
pub struct Locale(pub String);

impl<S: Send + Sync> FromRequestParts<S> for Locale {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let locale = jar
            .get(names::LOCALE_COOKIE_NAME)
            .and_then(|c| match_supported_locale(c.value()))
            .or_else(|| {
                parts
                    .headers
                    .get(header::ACCEPT_LANGUAGE)
                    .and_then(|v| v.to_str().ok())
                    .and_then(locale_from_accept_language)
            })
            .unwrap_or(names::DEFAULT_LOCALE);
        Ok(Locale(locale.to_string()))
    }
}

/// Match a language tag against supported locales, returning the locale string.
pub fn match_supported_locale(lang: &str) -> Option<&'static str> {
    let primary = lang.split('-').next().unwrap_or(lang).trim();
    names::SUPPORTED_LOCALES
        .iter()
        .find(|l| l.eq_ignore_ascii_case(primary))
        .copied()
}

/// Parse an `Accept-Language` header and return the best matching supported locale.
fn locale_from_accept_language(header: &str) -> Option<&'static str> {
    let mut entries: Vec<(&str, f32)> = header
        .split(',')
        .map(|entry| {
            let entry = entry.trim();
            if let Some((lang, params)) = entry.split_once(';') {
                let q = params
                    .split(';')
                    .find_map(|p| p.trim().strip_prefix("q="))
                    .and_then(|v| v.trim().parse::<f32>().ok())
                    .unwrap_or(1.0);
                (lang.trim(), q)
            } else {
                (entry, 1.0)
            }
        })
        .collect();
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    entries
        .iter()
        .find_map(|(lang, _)| match_supported_locale(lang))
}

/// The player's quiz session token, if the cookie is present.
pub struct QuizToken(pub Option<String>);

impl<S: Send + Sync> FromRequestParts<S> for QuizToken {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(names::QUIZ_SESSION_COOKIE_NAME)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty());
        Ok(QuizToken(token))
    }
}
