pub mod health;
pub mod inventory;
pub mod persistence;
pub mod seed;
pub mod status_check;
