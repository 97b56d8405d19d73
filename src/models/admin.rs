use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Mother,
    #[default]
    Sub,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mother => "mother",
            Self::Sub => "sub",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq<&str> for Role {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mother" => Ok(Self::Mother),
            "sub" => Ok(Self::Sub),
            _ => Err(format!("invalid admin role: {}", s)),
        }
    }
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Admin {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub email: String,
    pub role: Role,
    pub permissions: Vec<String>,
}

impl Admin {
    pub fn is_mother(&self) -> bool {
        self.role == Role::Mother
    }

    pub fn has_email(&self) -> bool {
        !self.email.trim().is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginResponse {
    pub success: bool,
    pub token: Option<String>,
    pub admin: Option<Admin>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCreate {
    pub email: String,
    pub password: String,
    pub role: Role,
    pub permissions: Vec<String>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AdminUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

impl AdminUpdate {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.password.is_none()
            && self.role.is_none()
            && self.permissions.is_none()
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.new_password.is_none()
    }
}

/// Envelope used by `/api/admin/profile` and `/api/admin/admins`.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AdminEnvelope {
    pub success: bool,
    pub admin: Option<Admin>,
    pub admins: Vec<Admin>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_deserializes_backend_shape() {
        let admin: Admin = serde_json::from_str(
            r#"{"_id":"66a1","email":"sub@brand.io","role":"sub","permissions":["notice","footer"]}"#,
        )
        .unwrap();

        assert_eq!(admin.id.as_deref(), Some("66a1"));
        assert_eq!(admin.role, Role::Sub);
        assert!(!admin.is_mother());
        assert_eq!(admin.permissions.len(), 2);
    }

    #[test]
    fn missing_role_defaults_to_sub() {
        let admin: Admin = serde_json::from_str(r#"{"email":"x@y.z"}"#).unwrap();
        assert_eq!(admin.role, Role::Sub);
        assert!(admin.has_email());
    }

    #[test]
    fn admin_update_skips_unset_fields() {
        let update = AdminUpdate {
            permissions: Some(vec!["promotions".into()]),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"permissions": ["promotions"]}));
        assert!(!update.is_empty());
        assert!(AdminUpdate::default().is_empty());
    }

    #[test]
    fn role_parses_and_compares_with_str() {
        assert_eq!("Mother".parse::<Role>(), Ok(Role::Mother));
        assert!(Role::Sub == "sub");
        assert!("owner".parse::<Role>().is_err());
    }
}
