pub mod appointment;
pub mod bot_state;
pub mod history;
pub mod intake;
pub mod message;
pub mod questionnaire;
pub mod screening;
