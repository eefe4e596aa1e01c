pub mod anxiety;
pub mod congruence;
pub mod depression;
