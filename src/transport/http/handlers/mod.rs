pub mod health;
pub mod incidents;
pub mod vendors;
