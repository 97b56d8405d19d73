use serde::{Deserialize, Serialize};

use crate::impl_resource;
use crate::models::Bilingual;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Promotion {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub category: String,
    pub title: Bilingual<String>,
    pub short_desc: Bilingual<String>,
    pub details: Bilingual<String>,
    /// Uploaded image URL.
    pub image: String,
}

impl_resource!(Promotion, "/api/promotions", "Promotion");

impl Promotion {
    pub fn in_category(&self, category: &str) -> bool {
        category.eq_ignore_ascii_case("all") || self.category.eq_ignore_ascii_case(category)
    }
}

/// Distinct categories in first-seen order.
pub fn promotion_categories(promotions: &[Promotion]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for p in promotions {
        let c = p.category.trim();
        if !c.is_empty() && !out.iter().any(|seen| seen.eq_ignore_ascii_case(c)) {
            out.push(c.to_string());
        }
    }
    out
}
