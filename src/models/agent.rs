use serde::{Deserialize, Serialize};

use crate::impl_resource;
use crate::models::Bilingual;

/// "Become an agent" call-to-action section.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AffAgent {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title_bn: String,
    pub title_en: String,
    pub desc_bn: String,
    pub desc_en: String,
    pub button_bn: String,
    pub button_en: String,
    pub link_url: String,
    pub image_url: String,
    pub is_active: bool,
}

impl_resource!(AffAgent, "/api/aff-agent", "Agent section");

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WhyUsItem {
    /// Uploaded under `icon_<index>`.
    pub icon_url: String,
    pub title: Bilingual<String>,
    pub desc: Bilingual<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AffWhyUs {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title_bn: String,
    pub title_en: String,
    pub items: Vec<WhyUsItem>,
}

impl_resource!(AffWhyUs, "/api/aff-whyus", "Why us section");

impl AffWhyUs {
    pub fn add_item(&mut self) -> usize {
        self.items.push(WhyUsItem::default());
        self.items.len() - 1
    }

    pub fn remove_item(&mut self, idx: usize) -> bool {
        if idx < self.items.len() {
            self.items.remove(idx);
            true
        } else {
            false
        }
    }

    /// Multipart field name for the icon of item `idx`.
    pub fn icon_field(idx: usize) -> String {
        format!("icon_{idx}")
    }
}
