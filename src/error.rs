use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use folio_notification::RelayError;
use folio_shared::SendEmailResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Delivery(#[from] RelayError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Delivery(e) => {
                tracing::error!("Delivery error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(SendEmailResponse::failed(e.to_string())),
                )
                    .into_response()
            }
        }
    }
}
