use anyhow::{Context, Result};
use lettre::message::{header, Mailbox, Message};
use lettre::transport::smtp::{authentication::Credentials, AsyncSmtpTransport};
use lettre::{AsyncTransport, Tokio1Executor};

use super::Notifier;
use crate::config::MailConfig;

/// Sends the briefing over SMTPS (implicit TLS), logging in as the sender.
pub struct EmailSender {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl EmailSender {
    pub fn new(cfg: &MailConfig) -> Result<Self> {
        let creds = Credentials::new(cfg.sender.clone(), cfg.password.clone());
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&cfg.smtp_host)
            .with_context(|| format!("invalid SMTP host {}", cfg.smtp_host))?
            .port(cfg.smtp_port)
            .credentials(creds)
            .build();

        let from = cfg.sender.parse().context("invalid sender address")?;
        let to = cfg.recipient.parse().context("invalid recipient address")?;

        Ok(Self { mailer, from, to })
    }

    pub fn build_message(&self, subject: &str, body: &str) -> Result<Message> {
        Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(subject)
            .header(header::ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .context("build email")
    }
}

#[async_trait::async_trait]
impl Notifier for EmailSender {
    async fn send(&self, subject: &str, body: &str) -> Result<()> {
        let msg = self.build_message(subject, body)?;
        self.mailer.send(msg).await.context("send email")?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "email"
    }
}
