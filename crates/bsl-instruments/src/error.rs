use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("unknown field '{field}' for screening '{screening}'")]
    UnknownField { screening: String, field: String },

    #[error("{screening}: {test} score {value} is outside range [0, {max}]")]
    OutOfRange {
        screening: String,
        test: String,
        value: u32,
        max: u32,
    },
}
