pub mod analytics;
pub mod desk;
pub mod roster;
pub mod seed;
pub mod ticket;
