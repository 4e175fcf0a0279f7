pub mod auth_state;
pub mod remote;
pub mod toast;
