pub mod incident;
pub mod vendor;
