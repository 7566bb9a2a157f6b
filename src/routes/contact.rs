use axum::{Json, extract::State};
use folio_shared::{SendEmailRequest, SendEmailResponse};

use crate::{error::AppError, routes::AppState};

/// POST /api/send-email
///
/// Relays the body as-is. Fields are not re-validated here; missing ones are
/// sent as empty strings.
#[tracing::instrument(skip_all, fields(name = %input.name, email = %input.email))]
pub async fn action(
    State(app_state): State<AppState>,
    Json(input): Json<SendEmailRequest>,
) -> Result<Json<SendEmailResponse>, AppError> {
    app_state.relay.relay(&input).await?;

    tracing::info!("Contact message delivered");

    Ok(Json(SendEmailResponse::ok()))
}
