use serde::{Deserialize, Serialize};

use crate::impl_resource;
use crate::models::{Activatable, Ordered};

/// Affiliate-site list; same shape as the main one.
pub const AFF_FLOATING_SOCIAL_PATH: &str = "/api/aff-floating-social";

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FloatingSocialItem {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub image_url: String,
    pub link_url: String,
    pub is_active: bool,
    pub order: i64,
}

impl_resource!(FloatingSocialItem, "/api/floating-social", "Floating social icon");

impl Ordered for FloatingSocialItem {
    fn order(&self) -> i64 {
        self.order
    }
}

impl Activatable for FloatingSocialItem {
    fn is_active(&self) -> bool {
        self.is_active
    }
}

impl FloatingSocialItem {
    /// Blank item placed after every existing one.
    pub fn next_after(items: &[FloatingSocialItem]) -> Self {
        Self {
            is_active: true,
            order: items.iter().map(|i| i.order).max().map_or(0, |o| o + 1),
            ..Default::default()
        }
    }
}
