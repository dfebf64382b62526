pub mod manage;
pub mod schedule;
pub mod tax;
