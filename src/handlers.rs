pub mod assets;
pub mod auth;
pub mod expenses;
pub mod health;
pub mod income;
pub mod insurance;
pub mod investments;
pub mod tax_deductions;
