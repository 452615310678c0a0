//! API handlers for Bookshelf REST endpoints

pub mod health;
pub mod library;
pub mod openapi;
pub mod shelf;

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `Path` extractor whose rejection is rendered as an `ErrorResponse`
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// `Query` extractor whose rejection is rendered as an `ErrorResponse`
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// `Json` body extractor whose rejection is rendered as an `ErrorResponse`
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
