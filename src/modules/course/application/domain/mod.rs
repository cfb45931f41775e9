pub mod entities;
pub mod policies;
pub mod roster;
