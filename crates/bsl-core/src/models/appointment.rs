use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Value of the `atendido` field once a visit has happened.
pub const ATTENDED: &str = "ATENDIDO";

/// One scheduled clinic visit, as booked through the WhatsApp bot.
///
/// Created at booking time by the scheduling flow. The reminder sweep sets
/// `recordatorio_link_enviado` and `atendido`; it never deletes records.
/// Whether the intake form is complete is not stored here: it is the
/// existence of an intake form whose `idGeneral` is this record's id.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Appointment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub primer_nombre: String,
    #[serde(default)]
    pub celular: Option<String>,
    #[serde(default)]
    pub cod_empresa: Option<String>,
    pub fecha_atencion: jiff::Timestamp,
    #[serde(default)]
    pub recordatorio_link_enviado: bool,
    #[serde(default)]
    pub pruebas_finalizadas: bool,
    #[serde(default)]
    pub atendido: Option<String>,
    #[serde(default)]
    pub medico: Option<String>,
}

impl Appointment {
    pub fn is_attended(&self) -> bool {
        self.atendido.as_deref() == Some(ATTENDED)
    }

    /// Phone number as stored, or `None` when empty.
    pub fn phone(&self) -> Option<&str> {
        self.celular.as_deref().filter(|c| !c.trim().is_empty())
    }
}
