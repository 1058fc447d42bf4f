use std::fmt::Display;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{html, Markup};

use crate::{names, views};

#[derive(Debug)]
pub enum AppError {
    Internal(&'static str),
    Input(&'static str),
    NotFound,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Input(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            AppError::Internal(_) => "INTERNAL_SERVER_ERROR",
            AppError::Input(_) => "INPUT_ERROR",
            AppError::NotFound => "NOT_FOUND",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Internal(context) => tracing::error!("internal error: {context}"),
            AppError::Input(context) => tracing::warn!("rejected input: {context}"),
            AppError::NotFound => {}
        }
        (self.status(), error_page(self.message())).into_response()
    }
}

/// Maps library errors onto [`AppError`], logging the underlying cause.
pub trait ResultExt<T> {
    fn reject(self, context: &'static str) -> Result<T, AppError>;
    fn reject_input(self, context: &'static str) -> Result<T, AppError>;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn reject(self, context: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{context}: {e}");
            AppError::Internal(context)
        })
    }

    fn reject_input(self, context: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::warn!("{context}: {e}");
            AppError::Input(context)
        })
    }
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}

fn error_page(message: &str) -> Markup {
    views::page(
        "Error",
        html! {
            h1 { (message) }
            p { a href=(names::SETTINGS_URL) { "\u{2190} Home" } }
        },
        names::DEFAULT_LOCALE,
    )
}
