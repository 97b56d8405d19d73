use crate::models::{AffSlider, FloatingSocialItem, DEFAULT_AUTOPLAY_MS};
use crate::services::{active_sorted, sorted_by_order};
use crate::views::present;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SlideView {
    pub image_url: String,
    pub link_url: Option<String>,
}

/// Hero carousel. Empty when nothing was uploaded or the slider is switched off.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SliderView {
    pub slides: Vec<SlideView>,
    pub autoplay_ms: u32,
}

impl SliderView {
    pub fn build(doc: Option<&AffSlider>) -> Self {
        let Some(doc) = present(doc).filter(|d| d.is_active) else {
            return Self::empty();
        };
        let slides = sorted_by_order(&doc.slides)
            .into_iter()
            .filter(|s| !s.image_url.trim().is_empty())
            .map(|s| SlideView {
                image_url: s.image_url,
                link_url: Some(s.link_url).filter(|l| !l.trim().is_empty()),
            })
            .collect();
        Self {
            slides,
            autoplay_ms: if doc.autoplay_ms == 0 { DEFAULT_AUTOPLAY_MS } else { doc.autoplay_ms },
        }
    }

    pub fn empty() -> Self {
        Self {
            slides: Vec::new(),
            autoplay_ms: DEFAULT_AUTOPLAY_MS,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SocialIcon {
    pub image_url: String,
    pub link_url: String,
}

/// Floating icon column: active items by ascending `order`.
pub fn floating_icons(items: &[FloatingSocialItem]) -> Vec<SocialIcon> {
    active_sorted(items)
        .into_iter()
        .filter(|i| !i.image_url.trim().is_empty())
        .map(|i| SocialIcon {
            image_url: i.image_url,
            link_url: i.link_url,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AffSlide;

    fn item(id: &str, order: i64, active: bool) -> FloatingSocialItem {
        FloatingSocialItem {
            id: Some(id.into()),
            image_url: format!("/uploads/{id}.png"),
            link_url: format!("https://t.me/{id}"),
            is_active: active,
            order,
        }
    }

    #[test]
    fn icons_are_active_only_and_stably_ordered() {
        let items = vec![item("b", 2, true), item("a", 1, true), item("off", 0, false), item("c", 1, true)];
        let links: Vec<_> = floating_icons(&items).into_iter().map(|i| i.link_url).collect();
        assert_eq!(links, vec!["https://t.me/a", "https://t.me/c", "https://t.me/b"]);
    }

    #[test]
    fn inactive_or_unsaved_slider_is_empty() {
        let mut doc = AffSlider {
            id: Some("s1".into()),
            slides: vec![
                AffSlide {
                    image_url: "/uploads/2.png".into(),
                    link_url: "".into(),
                    order: 2,
                },
                AffSlide {
                    image_url: "/uploads/1.png".into(),
                    link_url: "/join".into(),
                    order: 1,
                },
            ],
            autoplay_ms: 0,
            is_active: true,
        };
        let view = SliderView::build(Some(&doc));
        assert_eq!(view.slides[0].link_url.as_deref(), Some("/join"));
        assert_eq!(view.slides[1].link_url, None);
        assert_eq!(view.autoplay_ms, DEFAULT_AUTOPLAY_MS);

        doc.is_active = false;
        assert!(SliderView::build(Some(&doc)).is_empty());
        assert!(SliderView::build(None).is_empty());
    }
}
