use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Result of the visual screening mini-app (`VISUAL`), upserted by `cedula`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VisualRecord {
    pub numero_id: String,
    pub id_general: String,
    pub cedula: String,
    #[serde(default)]
    pub cod_empresa: Option<String>,
    #[serde(default)]
    pub astigmatismo: Option<String>,
    #[serde(default)]
    pub miopia: Option<String>,
    /// Letter-chart plates read correctly.
    pub snelle: u32,
    /// "Mark the point" directions identified correctly.
    pub agudeza_visual: u32,
    /// Colour plates identified correctly.
    pub colores: u32,
    pub concepto: String,
}
