use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;

use crate::handlers::contact_dtos::ContactRequest;
use crate::AppState;

/// POST /api/contact
///
/// Relays a contact form submission to the office inbox. One attempt per
/// request, no queueing; a failed send is reported back and the visitor
/// resubmits. The presence check here is deliberately coarser than the
/// client-side validator: it answers with a single generic error and it
/// requires `bedsNeeded`, which the form validator never looks at.
pub async fn send_contact_email(
    State(state): State<Arc<AppState>>,
    Json(data): Json<ContactRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    if !data.has_required_fields() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Missing required fields"})),
        ));
    }

    match state.mailer.send_contact_notification(&data).await {
        Ok(()) => Ok(Json(
            json!({"success": true, "message": "Email sent successfully"}),
        )),
        Err(e) => {
            tracing::error!("Error sending contact email: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to send email"})),
            ))
        }
    }
}
