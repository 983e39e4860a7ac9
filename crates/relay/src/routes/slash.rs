//! Slash command webhook handler.
//!
//! The chat platform shows the response body to the invoking user, so every
//! outcome (including failures) is a `200 OK` with a plain-text body.

use axum::{
    Extension, Form, Router,
    extract::{State, rejection::FormRejection},
    routing::post,
};
use socialrules_core::SlashCommand;
use tracing::{debug, instrument};

use crate::middleware::RequestId;
use crate::state::AppState;

/// Create slash command routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/slack_hook", post(handle_slash_command))
}

/// Handle an inbound slash command.
///
/// A body that is not a readable form is treated as an empty command, which
/// answers with usage. The caller's identity is never logged; rules are sent
/// anonymously.
#[instrument(skip_all)]
async fn handle_slash_command(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    form: Result<Form<SlashCommand>, FormRejection>,
) -> String {
    let command = form.map_or_else(
        |rejection| {
            debug!(%request_id, error = %rejection, "Unreadable slash command form");
            SlashCommand::default()
        },
        |Form(command)| command,
    );

    let parsed = command.parse();
    state
        .social_rules()
        .handle(&parsed, &request_id)
        .await
        .to_string()
}
