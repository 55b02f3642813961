use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::activities::adapters::inbound::http_response::{
    error_response, message_response,
};
use crate::modules::activities::use_cases::unregister_participant::command::UnregisterParticipant;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UnregisterParams {
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<UnregisterParams>,
) -> impl IntoResponse {
    let command = UnregisterParticipant {
        activity_name,
        email: params.email,
    };

    match state.unregister_handler.handle(command).await {
        Ok(message) => message_response(message),
        Err(error) => error_response(&error),
    }
}
