use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::activities::adapters::inbound::http_response::{
    error_response, message_response,
};
use crate::modules::activities::use_cases::sign_up::command::SignUpForActivity;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SignUpParams {
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<SignUpParams>,
) -> impl IntoResponse {
    let command = SignUpForActivity {
        activity_name,
        email: params.email,
    };

    match state.sign_up_handler.handle(command).await {
        Ok(message) => message_response(message),
        Err(error) => error_response(&error),
    }
}
