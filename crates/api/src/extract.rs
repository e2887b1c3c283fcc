//! Extractors whose rejections go through [`AppError`].
//!
//! The stock axum extractors answer a bad path, query string or body with a
//! plain-text explanation. These wrappers turn every rejection into
//! `AppError::BadRequest`, so the client gets a bare 400 like every other
//! error.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `axum::Json` with an [`AppError`] rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Path` with an [`AppError`] rejection.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// `axum::extract::Query` with an [`AppError`] rejection.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
