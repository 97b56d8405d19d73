use reqwest::Method;
use serde_json::Value;

use crate::api::{envelope, item_path, ApiClient};
use crate::common::ApiError;
use crate::models::{Admin, AdminCreate, AdminUpdate, LoginRequest, LoginResponse, ProfileUpdate};

pub const LOGIN_PATH: &str = "/api/admin/login";
pub const PROFILE_PATH: &str = "/api/admin/profile";
pub const ADMINS_PATH: &str = "/api/admin/admins";
pub const CREATE_ADMIN_PATH: &str = "/api/admin/create-admin";

fn admin_from(body: Value) -> Result<Admin, ApiError> {
    let doc = match body {
        Value::Object(mut map) if map.contains_key("admin") => map.remove("admin").unwrap_or(Value::Null),
        other => envelope::extract_document(other).unwrap_or(Value::Null),
    };
    Ok(serde_json::from_value::<Option<Admin>>(doc)?.unwrap_or_default())
}

impl ApiClient {
    /// `POST /api/admin/login`. Does not store the token; the session does.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.send_json(Method::POST, LOGIN_PATH, &request).await?;

        let has_token = response.token.as_deref().is_some_and(|t| !t.is_empty());
        if !response.success || !has_token {
            return Err(ApiError::LoginRejected(
                response.message.unwrap_or_else(|| "Invalid email or password".into()),
            ));
        }
        Ok(response)
    }

    pub async fn profile(&self) -> Result<Admin, ApiError> {
        admin_from(self.get_value(PROFILE_PATH).await?)
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Admin, ApiError> {
        admin_from(self.send_json(Method::PUT, PROFILE_PATH, update).await?)
    }

    pub async fn list_admins(&self) -> Result<Vec<Admin>, ApiError> {
        let body = self.get_value(ADMINS_PATH).await?;
        envelope::extract_list(body)
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(ApiError::from))
            .collect()
    }

    pub async fn create_admin(&self, create: &AdminCreate) -> Result<Admin, ApiError> {
        admin_from(self.send_json(Method::POST, CREATE_ADMIN_PATH, create).await?)
    }

    pub async fn update_admin(&self, id: &str, update: &AdminUpdate) -> Result<Admin, ApiError> {
        admin_from(self.send_json(Method::PUT, &item_path(ADMINS_PATH, id), update).await?)
    }

    pub async fn delete_admin(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&item_path(ADMINS_PATH, id)).await
    }
}
