//! Wire types exchanged with the FamFin REST API.
//!
//! JSON field names follow the API's camelCase convention.

pub mod envelope;
pub mod errors;
pub mod member;
pub mod report;
pub mod user;

pub use envelope::ApiEnvelope;
pub use errors::ErrorResponse;
pub use member::{InviteMemberRequest, Member};
pub use report::{CategoryAmount, DailyAmount, DashboardSummary, MonthlyReport, ReportPeriod};
pub use user::{Role, User};
