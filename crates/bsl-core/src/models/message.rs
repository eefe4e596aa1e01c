use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Origin tag written on every journal entry produced by this backend.
pub const BACKEND_ORIGIN: &str = "wix";

/// Why a WhatsApp message was sent. Serialized values are the journal's
/// existing `tipo` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum MessageKind {
    #[serde(rename = "pendiente_pruebas_en_link")]
    PendingTests,
    #[serde(rename = "link_consulta_virtual")]
    VirtualVisitLink,
    #[serde(rename = "certificado_enviado")]
    CertificateSent,
    #[serde(rename = "mensaje_pago")]
    PaymentReview,
    #[serde(rename = "mensaje_pago_bot")]
    PaymentInstructions,
    #[serde(rename = "recordatorio_formulario")]
    FormReminder,
    #[serde(rename = "confirmacion_atendido_nubia")]
    AttendanceThanks,
    #[serde(rename = "alerta_preguntas_criticas")]
    CriticalAnswerAlert,
}

/// One outbound message as recorded in the message journal.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MessageLogEntry {
    pub user_id: String,
    pub nombre: String,
    pub mensaje: String,
    pub from: String,
    pub tipo: MessageKind,
}

impl MessageLogEntry {
    pub fn outbound(user_id: &str, nombre: &str, mensaje: &str, tipo: MessageKind) -> Self {
        Self {
            user_id: user_id.to_string(),
            nombre: nombre.to_string(),
            mensaje: mensaje.to_string(),
            from: BACKEND_ORIGIN.to_string(),
            tipo,
        }
    }
}
