use async_trait::async_trait;
use tokio::process::Command;
use tracing::info;

use crate::error::{Error, Result};
use crate::notification::types::{Notification, NotificationSound};
use crate::traits::Notifier;

/// [`Notifier`] that writes notifications to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn deliver(&self, notification: &Notification) -> Result<()> {
        info!(
            id = %notification.identifier,
            title = %notification.title,
            "{}",
            notification.body
        );
        Ok(())
    }
}

/// [`Notifier`] posting a macOS user notification through `osascript`
#[derive(Debug, Clone)]
pub struct AppleScriptNotifier {
    program: String,
}

impl AppleScriptNotifier {
    pub fn new() -> Self {
        Self { program: "/usr/bin/osascript".to_string() }
    }

    /// Builds the `display notification` statement for a request
    pub fn script(notification: &Notification) -> String {
        let mut script = format!(
            "display notification \"{}\" with title \"{}\"",
            escape(&notification.body),
            escape(&notification.title)
        );
        if notification.sound == NotificationSound::Default {
            script.push_str(" sound name \"default\"");
        }
        script
    }
}

impl Default for AppleScriptNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for AppleScriptNotifier {
    async fn deliver(&self, notification: &Notification) -> Result<()> {
        let output = Command::new(&self.program)
            .arg("-e")
            .arg(Self::script(notification))
            .output()
            .await
            .map_err(|err| Error::delivery(format!("failed to launch {}: {}", self.program, err)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::delivery(format!("{} exited with {}: {}", self.program, output.status, stderr.trim())));
        }
        Ok(())
    }
}

/// Escapes a string for use inside an AppleScript string literal
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
