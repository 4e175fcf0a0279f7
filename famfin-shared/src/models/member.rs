use serde::{Deserialize, Serialize};

use super::Role;

/// A person sharing the family budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Membership identifier, used by `DELETE /members/{id}`.
    #[serde(alias = "_id")]
    pub id: String,
    /// Account backing this membership.
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Free-form relation to the owner, e.g. "Spouse" or "Child".
    pub relation: String,
    /// Spending allowance per month.
    pub monthly_limit: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Body of `POST /members/invite`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InviteMemberRequest {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub relation: String,
    pub monthly_limit: f64,
}

impl InviteMemberRequest {
    /// Check the request before it leaves the client.
    ///
    /// # Errors
    /// Returns a human-readable reason for the first invalid field.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty");
        }
        if !self.email.contains('@') {
            return Err("email must be a valid address");
        }
        if self.relation.trim().is_empty() {
            return Err("relation must not be empty");
        }
        if !self.monthly_limit.is_finite() || self.monthly_limit < 0.0 {
            return Err("monthly limit must be a non-negative amount");
        }
        Ok(())
    }
}
