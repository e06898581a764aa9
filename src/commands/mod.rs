pub mod dashboard;
pub mod roster;
pub mod settings;
pub mod tickets;
