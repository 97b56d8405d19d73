mod common;

#[cfg(test)]
pub mod page_tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, ResponseTemplate};

    use super::common::*;

    use affpress::models::*;
    use affpress::services::*;
    use affpress::views::*;

    #[tokio::test]
    async fn test_page_mixes_stored_content_with_fallbacks_success() {
        let (server, client) = backend().await;
        Mock::given(method("GET"))
            .and(path("/api/aff-notice"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "_id": NOTICE_ID, "textBn": "নতুন অফার", "textEn": "  ", "speedSec": 12
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/aff-floating-social"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "_id": "s2", "imageUrl": "/uploads/wa.png", "linkUrl": "https://wa.me/1", "isActive": true, "order": 2 },
                { "_id": "s1", "imageUrl": "/uploads/tg.png", "linkUrl": "https://t.me/x", "isActive": true, "order": 1 },
                { "_id": "s3", "imageUrl": "/uploads/fb.png", "linkUrl": "https://fb.com/x", "isActive": false, "order": 0 },
            ])))
            .mount(&server)
            .await;

        let cache = QueryCache::default();
        let bn = AffiliatePage::load(&client, &cache, Lang::Bn, None).await;
        let en = AffiliatePage::load(&client, &cache, Lang::En, None).await;

        assert_eq!(bn.notice.text, "নতুন অফার");
        assert_eq!(bn.notice.speed_sec, 12);
        assert_eq!(en.notice.text, NOTICE_TEXT.en);
        assert_eq!(en.footer.about, ABOUT.en);

        let icons: Vec<&str> = en.social.iter().map(|i| i.link_url.as_str()).collect();
        assert_eq!(icons, vec!["https://t.me/x", "https://wa.me/1"]);
        assert_eq!(en.social[0].image_url, format!("{}/uploads/tg.png", server.uri()));
    }

    #[tokio::test]
    async fn test_public_reads_are_cached_within_ttl_success() {
        let (server, client) = backend().await;
        Mock::given(method("GET"))
            .and(path("/api/aff-notice"))
            .respond_with(ResponseTemplate::new(200).set_body_json(saved_notice_json()))
            .expect(1)
            .mount(&server)
            .await;

        let cache = QueryCache::new(Duration::from_secs(60));
        for _ in 0..3 {
            let data = AffiliateData::fetch(&client, &cache).await;
            assert_eq!(data.notice.map(|n| n.text_en), Some("Welcome".to_string()));
        }
    }

    #[tokio::test]
    async fn test_unreachable_backend_renders_full_fallback_page_success() {
        let (server, client) = backend().await;
        drop(server);

        let page = AffiliatePage::load(&client, &QueryCache::default(), Lang::En, Some("sports")).await;
        assert_eq!(page, AffiliatePage::fallback(Lang::En));
        assert_eq!(page.promotions.selected, "all");
        assert!(page.slider.is_empty());
    }

    #[tokio::test]
    async fn test_promotion_category_filter_success() {
        let (server, client) = backend().await;
        Mock::given(method("GET"))
            .and(path("/api/promotions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [
                { "_id": "p1", "category": "Sports", "title": { "bn": "খেলা", "en": "Sports bonus" } },
                { "_id": "p2", "category": "casino", "title": { "bn": "", "en": "" } },
            ]})))
            .mount(&server)
            .await;

        let cache = QueryCache::default();
        let data = AffiliateData::fetch(&client, &cache).await;

        let all = AffiliatePage::build(&data, Lang::En, None);
        assert_eq!(all.promotions.cards.len(), 2);
        assert_eq!(all.promotions.cards[1].title, UNTITLED.en);

        let sports = AffiliatePage::build(&data, Lang::Bn, Some("sports"));
        assert_eq!(sports.promotions.cards.len(), 1);
        assert_eq!(sports.promotions.cards[0].title, "খেলা");
        assert_eq!(sports.promotions.all_label, ALL_CATEGORIES.bn);
    }

    /// Records every create and revoke.
    #[derive(Clone, Default)]
    struct CountingUrls {
        created: Rc<RefCell<Vec<String>>>,
        revoked: Rc<RefCell<Vec<String>>>,
    }

    impl ObjectUrls for CountingUrls {
        type Source = str;

        fn create(&self, source: &str) -> Option<String> {
            let url = format!("blob:{source}");
            self.created.borrow_mut().push(url.clone());
            Some(url)
        }

        fn revoke(&self, url: &str) {
            self.revoked.borrow_mut().push(url.to_string());
        }
    }

    #[test]
    fn test_preview_urls_are_revoked_exactly_once_success() {
        let urls = CountingUrls::default();
        {
            let mut slot = PreviewSlot::new(urls.clone());
            assert_eq!(slot.replace("a.png"), Some("blob:a.png"));
            assert_eq!(slot.replace("b.png"), Some("blob:b.png"));
            assert_eq!(*urls.revoked.borrow(), vec!["blob:a.png"]);

            slot.clear();
            slot.clear();
            assert!(!slot.is_active());
            slot.replace("c.png");
        }

        assert_eq!(*urls.created.borrow(), vec!["blob:a.png", "blob:b.png", "blob:c.png"]);
        assert_eq!(*urls.revoked.borrow(), vec!["blob:a.png", "blob:b.png", "blob:c.png"]);
    }
}
