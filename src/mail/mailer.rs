use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

use crate::handlers::contact_dtos::ContactRequest;
use crate::mail::template;

const SMTP_HOST: &str = "smtp.gmail.com";
const SMTP_PORT: u16 = 587;
const SENDER_NAME: &str = "Northwood Estates MHC";

#[derive(Debug, Error)]
pub enum MailError {
    #[error("missing required config: {0}")]
    MissingConfig(&'static str),

    #[error("invalid mailbox address: {0}")]
    InvalidAddress(String),

    #[error("failed to build message: {0}")]
    Build(String),

    #[error("SMTP error: {0}")]
    Smtp(String),
}

/// Seam between the contact handler and the mail transport, so the handler
/// can be exercised without a live SMTP connection.
#[async_trait]
pub trait ContactMailer: Send + Sync {
    async fn send_contact_notification(&self, data: &ContactRequest) -> Result<(), MailError>;
}

/// Relays contact notifications through the Gmail STARTTLS endpoint with an
/// app password, matching the office's existing inbox setup.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    recipient: Mailbox,
}

impl SmtpMailer {
    /// Reads `GMAIL_USER`, `GMAIL_APP_PASSWORD` and `EMAIL_TO`. `validate_env`
    /// checks presence at startup; this re-checks so the constructor is safe
    /// to call on its own.
    pub fn from_env() -> Result<Self, MailError> {
        let user =
            std::env::var("GMAIL_USER").map_err(|_| MailError::MissingConfig("GMAIL_USER"))?;
        let password = std::env::var("GMAIL_APP_PASSWORD")
            .map_err(|_| MailError::MissingConfig("GMAIL_APP_PASSWORD"))?;
        let to = std::env::var("EMAIL_TO").map_err(|_| MailError::MissingConfig("EMAIL_TO"))?;

        let sender = Mailbox::new(
            Some(SENDER_NAME.to_string()),
            user.parse()
                .map_err(|e| MailError::InvalidAddress(format!("{}: {}", user, e)))?,
        );
        let recipient = to
            .parse::<Mailbox>()
            .map_err(|e| MailError::InvalidAddress(format!("{}: {}", to, e)))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(SMTP_HOST)
            .map_err(|e| MailError::Smtp(e.to_string()))?
            .port(SMTP_PORT)
            .credentials(Credentials::new(user, password))
            .build();

        Ok(Self {
            transport,
            sender,
            recipient,
        })
    }
}

#[async_trait]
impl ContactMailer for SmtpMailer {
    async fn send_contact_notification(&self, data: &ContactRequest) -> Result<(), MailError> {
        let email = Message::builder()
            .from(self.sender.clone())
            .to(self.recipient.clone())
            .subject(template::notification_subject(&data.full_name))
            .header(ContentType::TEXT_HTML)
            .body(template::notification_body(data))
            .map_err(|e| MailError::Build(e.to_string()))?;

        self.transport
            .send(email)
            .await
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        Ok(())
    }
}
