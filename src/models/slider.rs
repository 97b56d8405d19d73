use serde::{Deserialize, Serialize};

use crate::impl_resource;
use crate::models::{Activatable, Bilingual, Ordered};
use crate::services::{move_item, sort_by_order};

/// One slide of the main-site hero slider (`/api/sliders`, a collection).
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderItem {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub image_url: String,
    pub link_url: String,
    pub title: Bilingual<String>,
    pub order: i64,
    pub is_active: bool,
}

impl_resource!(SliderItem, "/api/sliders", "Slide");

impl Ordered for SliderItem {
    fn order(&self) -> i64 {
        self.order
    }
}

impl Activatable for SliderItem {
    fn is_active(&self) -> bool {
        self.is_active
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AffSlide {
    pub image_url: String,
    pub link_url: String,
    pub order: i64,
}

impl Ordered for AffSlide {
    fn order(&self) -> i64 {
        self.order
    }
}

pub const DEFAULT_AUTOPLAY_MS: u32 = 4000;

/// Affiliate slider: one document holding every slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AffSlider {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub slides: Vec<AffSlide>,
    pub autoplay_ms: u32,
    pub is_active: bool,
}

impl Default for AffSlider {
    fn default() -> Self {
        Self {
            id: None,
            slides: Vec::new(),
            autoplay_ms: DEFAULT_AUTOPLAY_MS,
            is_active: true,
        }
    }
}

impl_resource!(AffSlider, "/api/aff-slider", "Slider");

impl AffSlider {
    pub fn add_slide(&mut self) -> usize {
        let order = self.slides.iter().map(|s| s.order).max().map_or(0, |o| o + 1);
        self.slides.push(AffSlide {
            order,
            ..Default::default()
        });
        self.slides.len() - 1
    }

    /// Put the slides in display order. Ties keep their stored position.
    pub fn sort_slides(&mut self) {
        sort_by_order(&mut self.slides);
    }

    /// Move the slide shown at `idx` one step and renumber every slide
    /// from its new position.
    pub fn shift_slide(&mut self, idx: usize, up: bool) -> bool {
        move_item(&mut self.slides, idx, up, |s, o| s.order = o)
    }

    pub fn remove_slide(&mut self, idx: usize) -> bool {
        if idx < self.slides.len() {
            self.slides.remove(idx);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider(slides: &[(&str, i64)]) -> AffSlider {
        AffSlider {
            slides: slides
                .iter()
                .map(|(link, order)| AffSlide {
                    link_url: link.to_string(),
                    order: *order,
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    fn links(s: &AffSlider) -> Vec<&str> {
        s.slides.iter().map(|s| s.link_url.as_str()).collect()
    }

    #[test]
    fn shift_moves_the_clicked_slide() {
        let mut s = slider(&[("a", 2), ("b", 0), ("c", 1)]);
        s.sort_slides();
        assert_eq!(links(&s), vec!["b", "c", "a"]);

        assert!(s.shift_slide(2, true));
        assert_eq!(links(&s), vec!["b", "a", "c"]);
        assert_eq!(s.slides.iter().map(|s| s.order).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn shift_on_unsorted_slides_uses_shown_position() {
        let mut s = slider(&[("a", 2), ("b", 0), ("c", 1)]);
        assert!(s.shift_slide(2, true));
        assert_eq!(links(&s), vec!["a", "c", "b"]);
        assert!(!s.shift_slide(0, true));
        assert!(!s.shift_slide(2, false));
    }
}
