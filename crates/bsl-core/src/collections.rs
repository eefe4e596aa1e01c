//! Collection and field naming conventions.
//!
//! Pure string constants. These define the canonical layout of records in
//! the clinic's document store; the field names are the store's own
//! (camelCase, Spanish) and must not be translated.

pub const APPOINTMENTS: &str = "CHATBOT";

pub const CLINICAL_HISTORY: &str = "HistoriaClinica";

pub const INTAKE_FORMS: &str = "FORMULARIO";

pub const PSYCHOMETRIC_TESTS: &str = "ADCTEST";

pub const AUDIOMETRY: &str = "AUDIOMETRIA";

pub const VISUAL: &str = "VISUAL";

pub const BOT_STATE: &str = "WHP";

pub const MESSAGE_JOURNAL: &str = "WHATSAPP_MESSAGES";

/// Field names used in store queries.
pub mod field {
    pub const ID: &str = "_id";
    pub const APPOINTMENT_AT: &str = "fechaAtencion";
    pub const ATTENDANCE: &str = "atendido";
    pub const COMPANY_CODE: &str = "codEmpresa";
    pub const DOCTOR: &str = "medico";
    pub const GENERAL_ID: &str = "idGeneral";
    pub const IDENTITY_DOCUMENT: &str = "documentoIdentidad";
    pub const TEST_DOCUMENT: &str = "documento";
    pub const CEDULA: &str = "cedula";
    pub const USER_ID: &str = "userId";
    pub const REMINDER_SENT: &str = "recordatorioLinkEnviado";
    pub const TESTS_FINISHED: &str = "pruebasFinalizadas";
}
