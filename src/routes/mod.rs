use axum::{
    Router,
    routing::{get, post},
};
use folio_notification::ContactRelay;
use folio_shared::SEND_EMAIL_PATH;

mod contact;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub relay: ContactRelay,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(SEND_EMAIL_PATH, post(contact::action))
        .with_state(app_state)
}
