pub(crate) mod auth_guard;
pub(crate) mod loading;
pub(crate) mod toaster;
pub(crate) mod user_menu;

pub use auth_guard::AuthGuard;
pub use loading::Loading;
pub use toaster::Toaster;
pub use user_menu::UserMenu;
