use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::MessagingError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// What the gateway told us about an accepted message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    /// Gateway-assigned message id, when the gateway returns one.
    pub message_id: Option<String>,
}

/// Sends WhatsApp text messages.
///
/// `to` is a normalized number (see [`crate::phone::normalize`]). A returned
/// error means the message was not accepted; there is no retry at this
/// layer.
pub trait MessagingGateway: Send + Sync {
    fn send_text<'a>(
        &'a self,
        to: &'a str,
        body: &'a str,
    ) -> BoxFuture<'a, Result<DeliveryReceipt, MessagingError>>;
}
