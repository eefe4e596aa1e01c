use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Conversation level the bot is moved to once a certificate is delivered.
pub const PAYMENT_LEVEL: u32 = 2;

/// State of the conversational WhatsApp bot for one phone number (`WHP`).
///
/// `user_id` is the normalized phone number (with the `57` prefix).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BotState {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub observaciones: String,
    #[serde(default)]
    pub nivel: u32,
    #[serde(default)]
    pub stop_bot: bool,
    #[serde(default = "default_bot_active")]
    pub bot_activo: bool,
}

fn default_bot_active() -> bool {
    true
}

impl BotState {
    /// Hand the conversation over to a human after certificate delivery.
    ///
    /// A stopped bot is never left active: `stop_bot` and `bot_activo` are
    /// always written together.
    pub fn pause_for_payment(&mut self) {
        self.observaciones.clear();
        self.nivel = PAYMENT_LEVEL;
        self.stop_bot = true;
        self.bot_activo = false;
    }
}
