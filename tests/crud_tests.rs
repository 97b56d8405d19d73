mod common;

#[cfg(test)]
pub mod crud_tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, body_string_contains, header, method, path};
    use wiremock::{Mock, ResponseTemplate};

    use super::common::*;

    use affpress::api::FilePart;
    use affpress::models::*;
    use affpress::services::*;

    #[tokio::test]
    async fn test_singleton_first_save_creates_then_updates_same_id_success() {
        let (server, client) = backend().await;
        Mock::given(method("GET"))
            .and(path("/api/aff-notice"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/aff-notice"))
            .and(body_json(json!({ "textBn": "স্বাগতম", "textEn": "Welcome", "speedSec": 20 })))
            .respond_with(ResponseTemplate::new(201).set_body_json(saved_notice_json()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path(format!("/api/aff-notice/{NOTICE_ID}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(saved_notice_json()))
            .expect(2)
            .mount(&server)
            .await;

        let notifier = Notifier::new();
        let mut binder = CrudBinder::<AffNotice>::new(client, notifier.clone());
        let loaded = binder.load().await.unwrap();
        assert_eq!(loaded, AffNotice::default());
        assert_eq!(binder.doc_id(), None);

        let doc = get_seed_notice();
        let first = binder.save(&doc, vec![]).await.unwrap();
        assert_eq!(first, SaveOutcome::Created { id: NOTICE_ID.into() });
        assert_eq!(binder.doc_id(), Some(NOTICE_ID));

        let second = binder.save(&doc, vec![]).await.unwrap();
        let third = binder.save(&doc, vec![]).await.unwrap();
        assert_eq!(second, SaveOutcome::Updated { id: NOTICE_ID.into() });
        assert_eq!(third.id(), NOTICE_ID);

        assert_eq!(
            toasts(&notifier, ToastKind::Success),
            vec![
                "Notice created successfully",
                "Notice updated successfully",
                "Notice updated successfully",
            ]
        );
    }

    #[tokio::test]
    async fn test_singleton_load_existing_then_save_updates_success() {
        let (server, client) = backend().await;
        Mock::given(method("GET"))
            .and(path("/api/aff-notice"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": saved_notice_json() })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/aff-notice"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path(format!("/api/aff-notice/{NOTICE_ID}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let mut binder = CrudBinder::<AffNotice>::new(client, Notifier::new());
        let mut doc = binder.load().await.unwrap();
        assert_eq!(doc.text_en, "Welcome");
        assert_eq!(binder.doc_id(), Some(NOTICE_ID));

        doc.speed_sec = 45;
        let outcome = binder.save(&doc, vec![]).await.unwrap();
        assert!(!outcome.is_created());
    }

    #[tokio::test]
    async fn test_singleton_save_fails_on_server_rejection_with_message() {
        let (server, client) = backend().await;
        Mock::given(method("POST"))
            .and(path("/api/aff-notice"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "message": "Text is required" })))
            .mount(&server)
            .await;

        let notifier = Notifier::new();
        let mut binder = CrudBinder::<AffNotice>::new(client, notifier.clone());
        let err = binder.save(&AffNotice::default(), vec![]).await.unwrap_err();

        assert_eq!(err.status(), Some(400));
        assert_eq!(binder.doc_id(), None);
        assert!(!binder.is_loading());
        assert_eq!(toasts(&notifier, ToastKind::Error), vec!["Text is required"]);
    }

    #[tokio::test]
    async fn test_singleton_save_fails_on_silent_error_with_generic_message() {
        let (server, client) = backend().await;
        Mock::given(method("POST"))
            .and(path("/api/aff-notice"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let notifier = Notifier::new();
        let mut binder = CrudBinder::<AffNotice>::new(client, notifier.clone());
        assert!(binder.save(&get_seed_notice(), vec![]).await.is_err());
        assert_eq!(
            toasts(&notifier, ToastKind::Error),
            vec!["Something went wrong. Please try again."]
        );
    }

    #[tokio::test]
    async fn test_singleton_delete_returns_to_create_success() {
        let (server, client) = backend().await;
        Mock::given(method("GET"))
            .and(path("/api/aff-notice"))
            .respond_with(ResponseTemplate::new(200).set_body_json(saved_notice_json()))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path(format!("/api/aff-notice/{NOTICE_ID}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/aff-notice"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "_id": "fresh" })))
            .expect(1)
            .mount(&server)
            .await;

        let notifier = Notifier::new();
        let mut binder = CrudBinder::<AffNotice>::new(client, notifier.clone());
        binder.load().await.unwrap();
        binder.delete().await.unwrap();
        assert_eq!(binder.doc_id(), None);
        assert!(toasts(&notifier, ToastKind::Success).contains(&"Notice deleted".to_string()));

        let outcome = binder.save(&get_seed_notice(), vec![]).await.unwrap();
        assert_eq!(outcome, SaveOutcome::Created { id: "fresh".into() });
    }

    #[tokio::test]
    async fn test_singleton_delete_before_save_sends_nothing_success() {
        let (server, client) = backend().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let notifier = Notifier::new();
        let mut binder = CrudBinder::<AffNotice>::new(client, notifier.clone());
        binder.delete().await.unwrap();
        assert_eq!(
            toasts(&notifier, ToastKind::Info),
            vec!["Notice has not been saved yet"]
        );
    }

    #[tokio::test]
    async fn test_save_with_file_is_sent_as_multipart_success() {
        let (server, client) = backend().await;
        Mock::given(method("POST"))
            .and(path("/api/aff-agent"))
            .and(body_string_contains("name=\"image\""))
            .and(body_string_contains("name=\"titleEn\""))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "_id": "agent1" })))
            .expect(1)
            .mount(&server)
            .await;

        let mut binder = CrudBinder::<AffAgent>::new(client, Notifier::new());
        let doc = AffAgent {
            title_en: "Become an agent".into(),
            ..Default::default()
        };
        let file = FilePart::new("image", "agent.png", b"fake-png".to_vec()).with_mime("image/png");
        let outcome = binder.save(&doc, vec![file]).await.unwrap();
        assert!(outcome.is_created());
    }

    #[tokio::test]
    async fn test_upload_returns_stored_url_success() {
        let (server, client) = backend().await;
        Mock::given(method("POST"))
            .and(path("/api/aff-whyus/upload"))
            .and(body_string_contains("name=\"icon_0\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "url": "/uploads/icon_0.png" })))
            .mount(&server)
            .await;

        let binder = CrudBinder::<AffWhyUs>::new(client, Notifier::new());
        let url = binder
            .upload(vec![FilePart::new(AffWhyUs::icon_field(0), "icon.png", b"fake-png".to_vec())])
            .await
            .unwrap();
        assert_eq!(url, "/uploads/icon_0.png");
    }

    #[tokio::test]
    async fn test_authorized_requests_carry_bearer_token_success() {
        let (server, client) = backend().await;
        Mock::given(method("GET"))
            .and(path("/api/aff-notice"))
            .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(saved_notice_json()))
            .expect(1)
            .mount(&server)
            .await;

        client.set_token(Some(TOKEN.to_string()));
        let mut binder = CrudBinder::<AffNotice>::new(client, Notifier::new());
        binder.load().await.unwrap();
    }

    #[tokio::test]
    async fn test_collection_create_update_delete_success() {
        let (server, client) = backend().await;
        Mock::given(method("GET"))
            .and(path("/api/promotions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    { "_id": "p1", "category": "sports", "title": { "bn": "খেলা", "en": "Sports" } },
                ]
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/promotions"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "_id": "p2", "category": "casino", "title": { "bn": "ক্যাসিনো", "en": "Casino" }
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/promotions/p1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/promotions/p2"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let notifier = Notifier::new();
        let mut list = CollectionBinder::<Promotion>::new(client, notifier.clone());
        assert_eq!(list.load().await.unwrap().len(), 1);

        let created = list
            .save_item(
                &Promotion {
                    category: "casino".into(),
                    ..Default::default()
                },
                vec![],
            )
            .await
            .unwrap();
        assert_eq!(created, SaveOutcome::Created { id: "p2".into() });
        assert_eq!(list.items().len(), 2);

        let mut first = list.items()[0].clone();
        first.category = "cricket".into();
        let updated = list.save_item(&first, vec![]).await.unwrap();
        assert!(!updated.is_created());
        assert_eq!(list.items()[0].category, "cricket");

        list.delete_item("p2").await.unwrap();
        assert_eq!(list.items().len(), 1);
        assert_eq!(
            toasts(&notifier, ToastKind::Success),
            vec![
                "Promotion created successfully",
                "Promotion updated successfully",
                "Promotion deleted",
            ]
        );
    }

    #[tokio::test]
    async fn test_collection_load_fails_on_unauthorized_and_keeps_items() {
        let (server, client) = backend().await;
        Mock::given(method("GET"))
            .and(path("/api/sliders"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Token expired" })))
            .mount(&server)
            .await;

        let notifier = Notifier::new();
        let mut list = CollectionBinder::<SliderItem>::new(client, notifier.clone());
        let err = list.load().await.unwrap_err();
        assert!(err.is_unauthorized());
        assert!(list.items().is_empty());
        assert_eq!(toasts(&notifier, ToastKind::Error), vec!["Token expired"]);
    }
}
