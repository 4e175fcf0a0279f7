mod callback;
mod dashboard;
mod home;
pub mod login;
mod members;
mod not_found;
mod reports;

pub use callback::CallbackPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use members::MembersPage;
pub use not_found::NotFoundPage;
pub use reports::ReportsPage;
