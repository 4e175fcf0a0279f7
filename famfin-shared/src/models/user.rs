use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Role of an account within a family budget.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Member,
    Admin,
}

impl Role {
    /// Return the canonical string representation used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Member => "MEMBER",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "MEMBER" => Ok(Self::Member),
            "ADMIN" => Ok(Self::Admin),
            _ => Err("unknown role"),
        }
    }
}

/// Identity of the signed-in account as returned by `GET /users/profile`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier for the user.
    pub id: String,

    /// The user's email address.
    pub email: String,

    /// Display name.
    pub name: String,

    /// Avatar image reference, if the identity provider supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// Account role.
    #[serde(default)]
    pub role: Role,
}

impl User {
    /// Name to show in the UI, falling back to the email address.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// Whether the account may manage family members.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "u-1".to_string(),
            email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
            avatar: Some("https://cdn.example.com/ada.png".to_string()),
            role: Role::Admin,
        }
    }

    #[test]
    fn test_user_deserializes_profile_payload() {
        let json = r#"{
            "id": "u-1",
            "email": "ada@example.com",
            "name": "Ada",
            "avatar": "https://cdn.example.com/ada.png",
            "role": "ADMIN"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user, sample_user());
        assert!(user.is_admin());
    }

    #[test]
    fn test_user_optional_fields_default() {
        let json = r#"{"id":"u-2","email":"bo@example.com","name":"Bo"}"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.avatar, None);
        assert_eq!(user.role, Role::Member);
        assert!(!user.is_admin());
    }

    #[test]
    fn test_user_serialization_skips_missing_avatar() {
        let user = User {
            avatar: None,
            ..sample_user()
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("avatar"));
        assert!(json.contains("\"role\":\"ADMIN\""));
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = User {
            name: "  ".to_string(),
            ..sample_user()
        };
        assert_eq!(user.display_name(), "ada@example.com");
        assert_eq!(sample_user().display_name(), "Ada");
    }

    #[test]
    fn role_roundtrip() {
        for (text, role) in [("MEMBER", Role::Member), ("ADMIN", Role::Admin)] {
            assert_eq!(role.as_str(), text);
            assert_eq!(role.to_string(), text);
            assert_eq!(Role::from_str(text).unwrap(), role);
        }
        assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    }

    #[test]
    fn role_invalid() {
        assert!(Role::from_str("guest").is_err());
    }
}
