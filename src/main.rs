use axum::{
    routing::{get, post},
    Router,
};
use dotenvy::dotenv;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

mod handlers {
    pub mod contact_dtos;
    pub mod contact_handlers;
}
mod mail {
    pub mod mailer;
    pub mod template;
}
mod form {
    pub mod state;
    pub mod validation;
}
mod config {
    pub mod theme;
}

use handlers::contact_handlers;
use mail::mailer::{ContactMailer, SmtpMailer};

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    mailer: Arc<dyn ContactMailer>,
}

pub fn validate_env() {
    let _ = std::env::var("GMAIL_USER").expect("GMAIL_USER must be set");
    let _ = std::env::var("GMAIL_APP_PASSWORD").expect("GMAIL_APP_PASSWORD must be set");
    let _ = std::env::var("EMAIL_TO").expect("EMAIL_TO must be set");
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    validate_env();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let mailer = SmtpMailer::from_env().expect("Failed to configure SMTP mailer");

    let state = Arc::new(AppState {
        mailer: Arc::new(mailer),
    });

    // Create router with CORS
    let app = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(contact_handlers::send_contact_email))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any) // Be cautious with `Any` in production; restrict to your frontend origin
                .allow_headers([axum::http::header::CONTENT_TYPE]),
        )
        .with_state(state);

    use tokio::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:3000").await.unwrap();
    axum::serve(listener, app.into_make_service()).await.unwrap();
}
