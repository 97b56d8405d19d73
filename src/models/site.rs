use serde::{Deserialize, Serialize};

use crate::impl_resource;

pub const DEFAULT_PRIMARY_COLOR: &str = "#f59e0b";
pub const DEFAULT_SECONDARY_COLOR: &str = "#0f172a";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteBranding {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub site_name_bn: String,
    pub site_name_en: String,
    pub logo_url: String,
    pub favicon_url: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub is_active: bool,
}

impl Default for SiteBranding {
    fn default() -> Self {
        Self {
            id: None,
            site_name_bn: String::new(),
            site_name_en: String::new(),
            logo_url: String::new(),
            favicon_url: String::new(),
            primary_color: DEFAULT_PRIMARY_COLOR.into(),
            secondary_color: DEFAULT_SECONDARY_COLOR.into(),
            is_active: true,
        }
    }
}

impl_resource!(SiteBranding, "/api/site-branding", "Site branding");

/// `<head>` metadata of the affiliate site.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AffSiteMeta {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title_bn: String,
    pub title_en: String,
    pub description_bn: String,
    pub description_en: String,
    pub keywords: String,
    pub og_image_url: String,
    pub favicon_url: String,
}

impl_resource!(AffSiteMeta, "/api/aff-site-meta", "Site meta");
