#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::MockServer;

use affpress::api::ApiClient;
use affpress::models::*;
use affpress::services::{Notifier, ToastKind};

pub const NOTICE_ID: &str = "66f1c0ffee0000000000aa01";
pub const ADMIN_ID: &str = "66f1c0ffee0000000000ad01";
pub const TOKEN: &str = "header.payload.signature";

/// Mock backend plus a client pointed at it.
pub async fn backend() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::with_base(&server.uri()).unwrap();
    (server, client)
}

pub fn get_seed_notice() -> AffNotice {
    AffNotice {
        id: None,
        text_bn: "স্বাগতম".to_string(),
        text_en: "Welcome".to_string(),
        speed_sec: 20,
    }
}

pub fn saved_notice_json() -> Value {
    json!({
        "_id": NOTICE_ID,
        "textBn": "স্বাগতম",
        "textEn": "Welcome",
        "speedSec": 20,
    })
}

pub fn get_seed_mother() -> Admin {
    Admin {
        id: Some(ADMIN_ID.to_string()),
        email: "owner@test.com".to_string(),
        role: Role::Mother,
        permissions: Vec::new(),
    }
}

pub fn get_seed_sub(permissions: &[&str]) -> Admin {
    Admin {
        id: Some("66f1c0ffee0000000000ad02".to_string()),
        email: "editor@test.com".to_string(),
        role: Role::Sub,
        permissions: permissions.iter().map(|p| p.to_string()).collect(),
    }
}

pub fn login_ok_json(admin: &Admin) -> Value {
    json!({
        "success": true,
        "token": TOKEN,
        "admin": admin,
    })
}

/// Messages of every queued toast of `kind`, oldest first.
pub fn toasts(notifier: &Notifier, kind: ToastKind) -> Vec<String> {
    notifier
        .snapshot()
        .into_iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.message)
        .collect()
}
