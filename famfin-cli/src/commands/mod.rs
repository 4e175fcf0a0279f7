pub mod completion;
pub mod config;
pub mod context;
pub mod members;
pub mod reports;
pub mod session;
