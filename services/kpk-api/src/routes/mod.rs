// HTTP routes
pub mod kpk;
