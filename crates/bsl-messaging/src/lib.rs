//! bsl-messaging
//!
//! Outbound WhatsApp delivery: the gateway seam and its Whapi client,
//! phone number normalization, critical-answer alerts and the message
//! journal.

pub mod alerts;
pub mod error;
pub mod gateway;
pub mod journal;
pub mod phone;
pub mod whapi;
