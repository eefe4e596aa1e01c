pub mod attendance;
pub mod health;
pub mod instruments;
pub mod intake;
pub mod scores;
pub mod screening;
pub mod sweeps;
