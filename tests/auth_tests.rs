mod common;

#[cfg(test)]
pub mod auth_tests {
    use std::sync::Arc;

    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, ResponseTemplate};

    use super::common::*;

    use affpress::common::ApiError;
    use affpress::models::*;
    use affpress::services::permissions::{guard, keys, route_rule, visible_menu, GuardDecision};
    use affpress::services::*;

    #[tokio::test]
    async fn test_login_persists_session_and_token_success() {
        let (server, client) = backend().await;
        Mock::given(method("POST"))
            .and(path("/api/admin/login"))
            .and(body_json(json!({ "email": "owner@test.com", "password": "secret123" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(login_ok_json(&get_seed_mother())))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("session.json");
        let mut session = Session::new(Arc::new(FileStore::new(&file))).with_client(client.clone());
        session.rehydrate();
        assert_eq!(session.status(), AuthStatus::Unauthenticated);

        let admin = session.login(&client, " owner@test.com ", "secret123").await.unwrap();
        assert!(admin.is_mother());
        assert!(session.is_authenticated());
        assert_eq!(client.token().as_deref(), Some(TOKEN));

        // A fresh process reads the same credentials back.
        let mut restored = Session::new(Arc::new(FileStore::new(&file)));
        restored.rehydrate();
        assert!(restored.is_authenticated());
        assert_eq!(restored.admin().map(|a| a.email.as_str()), Some("owner@test.com"));
    }

    #[tokio::test]
    async fn test_login_fails_on_rejected_credentials() {
        let (server, client) = backend().await;
        Mock::given(method("POST"))
            .and(path("/api/admin/login"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "success": false, "message": "Invalid credentials" })),
            )
            .mount(&server)
            .await;

        let store = Arc::new(MemoryStore::new());
        let mut session = Session::new(store.clone()).with_client(client.clone());
        session.rehydrate();

        let err = session.login(&client, "owner@test.com", "wrong-pass").await.unwrap_err();
        assert!(matches!(err, ApiError::LoginRejected(_)));
        assert_eq!(err.user_message("Login failed"), "Invalid credentials");
        assert!(!session.is_authenticated());
        assert_eq!(store.load().unwrap(), None);
        assert_eq!(client.token(), None);
    }

    #[tokio::test]
    async fn test_login_fails_on_http_error_message() {
        let (server, client) = backend().await;
        Mock::given(method("POST"))
            .and(path("/api/admin/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "Account disabled" })))
            .mount(&server)
            .await;

        let err = client.login("owner@test.com", "secret123").await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.user_message("Login failed"), "Account disabled");
    }

    #[tokio::test]
    async fn test_logout_removes_session_file_success() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("nested").join("session.json");
        let mut session = Session::new(Arc::new(FileStore::new(&file)));
        session.set_credentials(TOKEN.to_string(), get_seed_mother());
        assert!(file.exists());

        session.logout();
        assert!(!file.exists());
        assert_eq!(session.status(), AuthStatus::Unauthenticated);
    }

    #[test]
    fn test_rehydrate_fails_on_corrupt_file_as_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("session.json");
        std::fs::write(&file, "{not json").unwrap();

        let mut session = Session::new(Arc::new(FileStore::new(&file)));
        session.rehydrate();
        assert_eq!(session.status(), AuthStatus::Unauthenticated);
    }

    #[test]
    fn test_token_without_email_is_not_authenticated() {
        let mut session = Session::new(Arc::new(MemoryStore::new()));
        session.set_credentials(TOKEN.to_string(), Admin::default());
        assert!(!session.is_authenticated());

        session.set_credentials(String::new(), get_seed_mother());
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_profile_update_refreshes_cached_admin_success() {
        let (server, client) = backend().await;
        Mock::given(method("PUT"))
            .and(path("/api/admin/profile"))
            .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
            .and(body_json(json!({ "email": "new@test.com" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
            .expect(1)
            .mount(&server)
            .await;

        let store = Arc::new(MemoryStore::new());
        let mut session = Session::new(store.clone()).with_client(client.clone());
        session.set_credentials(TOKEN.to_string(), get_seed_mother());

        let notifier = Notifier::new();
        let update = ProfileUpdate {
            email: Some("new@test.com".into()),
            ..Default::default()
        };
        let admin = save_profile(&mut session, &client, &notifier, &update).await.unwrap();

        assert_eq!(admin.email, "new@test.com");
        assert_eq!(admin.role, Role::Mother);
        let persisted = store.load().unwrap().and_then(|p| p.admin);
        assert_eq!(persisted.map(|a| a.email), Some("new@test.com".to_string()));
        assert_eq!(toasts(&notifier, ToastKind::Success), vec!["Profile updated successfully"]);
    }

    #[tokio::test]
    async fn test_profile_update_fails_on_short_password_without_request() {
        let (server, client) = backend().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut session = Session::new(Arc::new(MemoryStore::new()));
        session.set_credentials(TOKEN.to_string(), get_seed_mother());
        let update = ProfileUpdate {
            current_password: Some("secret123".into()),
            new_password: Some("abc".into()),
            ..Default::default()
        };

        let err = save_profile(&mut session, &client, &Notifier::new(), &update).await.unwrap_err();
        let FormError::Invalid(errors) = err else {
            panic!("expected validation errors");
        };
        assert!(errors.get("newPassword").is_some());
    }

    #[tokio::test]
    async fn test_admin_directory_create_and_remove_success() {
        let (server, client) = backend().await;
        let created = get_seed_sub(&[keys::AFF_NOTICE]);
        Mock::given(method("POST"))
            .and(path("/api/admin/create-admin"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "success": true, "admin": created })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path(format!("/api/admin/admins/{}", created.id.clone().unwrap())))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
            .expect(1)
            .mount(&server)
            .await;

        let mut directory = AdminDirectory::new(client, Notifier::new());
        let admin = directory
            .create(&AdminCreate {
                email: "editor@test.com".into(),
                password: "secret123".into(),
                role: Role::Sub,
                permissions: vec![keys::AFF_NOTICE.to_string()],
            })
            .await
            .unwrap();
        assert_eq!(admin, created);
        assert_eq!(directory.admins().len(), 1);

        directory.remove(admin.id.as_deref().unwrap()).await.unwrap();
        assert!(directory.admins().is_empty());
    }

    #[tokio::test]
    async fn test_admin_directory_create_fails_on_invalid_form_without_request() {
        let (server, client) = backend().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let mut directory = AdminDirectory::new(client, Notifier::new());
        let err = directory
            .create(&AdminCreate {
                email: "not-an-email".into(),
                password: "short".into(),
                role: Role::Sub,
                permissions: vec!["launch-rockets".into()],
            })
            .await
            .unwrap_err();

        let FormError::Invalid(errors) = err else {
            panic!("expected validation errors");
        };
        assert!(errors.get("email").is_some());
        assert!(errors.get("password").is_some());
        assert!(errors.get("permissions").is_some());
    }

    #[tokio::test]
    async fn test_admin_directory_update_fails_on_short_password_without_request() {
        let (server, client) = backend().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut directory = AdminDirectory::new(client, Notifier::new());
        let err = directory
            .update(
                ADMIN_ID,
                &AdminUpdate {
                    email: Some("still@test.com".into()),
                    password: Some("abc".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        let FormError::Invalid(errors) = err else {
            panic!("expected validation errors");
        };
        assert!(errors.get("password").is_some());
        assert!(errors.get("email").is_none());
    }

    #[tokio::test]
    async fn test_admin_directory_update_sends_valid_permissions_success() {
        let (server, client) = backend().await;
        Mock::given(method("PUT"))
            .and(path(format!("/api/admin/admins/{ADMIN_ID}")))
            .and(body_json(json!({ "permissions": [keys::PROMOTIONS] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
            .expect(1)
            .mount(&server)
            .await;

        let mut directory = AdminDirectory::new(client, Notifier::new());
        let update = AdminUpdate {
            permissions: Some(vec![keys::PROMOTIONS.to_string()]),
            ..Default::default()
        };
        assert!(directory.update(ADMIN_ID, &update).await.is_ok());
    }

    #[test]
    fn test_guard_follows_session_and_permissions_success() {
        let rule = route_rule("/aff-notice").unwrap();
        let mut state = AuthState::default();
        assert_eq!(guard(&state, rule), GuardDecision::Pending);

        state.loading = false;
        assert_eq!(guard(&state, rule), GuardDecision::RedirectToLogin);

        state.token = Some(TOKEN.into());
        state.admin = Some(get_seed_sub(&[keys::PROMOTIONS]));
        assert_eq!(guard(&state, rule), GuardDecision::Forbidden);

        state.admin = Some(get_seed_sub(&[keys::AFF_NOTICE]));
        assert_eq!(guard(&state, rule), GuardDecision::Allow);

        state.admin = Some(get_seed_mother());
        assert_eq!(guard(&state, route_rule("/admins").unwrap()), GuardDecision::Allow);
    }

    #[test]
    fn test_sub_admin_menu_lists_only_granted_sections_success() {
        let sub = get_seed_sub(&[keys::AFF_NOTICE, keys::PROMOTIONS]);
        let paths: Vec<&str> = visible_menu(Some(&sub)).iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["/", "/profile", "/promotions", "/aff-notice"]);

        let mother = get_seed_mother();
        assert!(visible_menu(Some(&mother)).iter().any(|r| r.path == "/admins"));
    }
}
