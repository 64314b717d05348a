//! Domain layer

pub mod catalog;
pub mod communication;
pub mod delivery;
pub mod offline;
pub mod submissions;
