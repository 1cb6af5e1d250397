//! Notifier port - outbound email abstraction

use async_trait::async_trait;

use crate::domain::result::Result;

/// Outbound notification abstraction
///
/// Implementations deliver the actual mail (SMTP, provider API, ...). The
/// service does not distinguish transient from permanent failures; any error
/// aborts the operation in progress.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send the welcome notice to a newly registered address
    async fn send_welcome(&self, to: &str) -> Result<()>;

    /// Send the change notice to the new address, referencing the old one
    async fn send_change_notice(&self, to: &str, old_email: &str) -> Result<()>;
}
