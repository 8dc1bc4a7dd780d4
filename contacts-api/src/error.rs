use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use shared_types::ErrorResponse;

use crate::store::StoreError;
use crate::views;

/// Failure of a loader or action. Rendered by the error page, never recovered
/// inside a route.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("Not Found")]
    NotFound,
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Internal Server Error")]
    Store(#[source] StoreError),
}

impl From<StoreError> for RouteError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => RouteError::NotFound,
            other => RouteError::Store(other),
        }
    }
}

impl RouteError {
    pub fn json_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

impl ResponseError for RouteError {
    fn status_code(&self) -> StatusCode {
        match self {
            RouteError::NotFound => StatusCode::NOT_FOUND,
            RouteError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RouteError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let RouteError::Store(err) = self {
            tracing::error!("Contact store failure: {:#}", err);
        }
        let status = self.status_code();
        HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(views::error::render(status.as_u16(), &self.to_string()))
    }
}
