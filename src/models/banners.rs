use serde::{Deserialize, Serialize};

use crate::impl_resource;
use crate::models::{Activatable, Ordered};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SingleBanner {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub image_url: String,
    pub link_url: String,
    pub title_bn: String,
    pub title_en: String,
    pub is_active: bool,
}

impl_resource!(SingleBanner, "/api/single-banner", "Banner");

/// Two side-by-side banners; uploads go under `leftBanner` and `rightImage`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TwoBanner {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub left_banner_url: String,
    pub left_link_url: String,
    pub right_image_url: String,
    pub right_link_url: String,
    pub is_active: bool,
}

impl_resource!(TwoBanner, "/api/two-banner", "Banners");

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DownloadHeader {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title_bn: String,
    pub title_en: String,
    pub subtitle_bn: String,
    pub subtitle_en: String,
    pub button_bn: String,
    pub button_en: String,
    /// Uploaded under `apkFile`.
    pub apk_url: String,
    pub is_active: bool,
}

impl_resource!(DownloadHeader, "/api/download-header", "Download header");

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DownloadBanner {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub image_url: String,
    pub apk_url: String,
    pub text_bn: String,
    pub text_en: String,
    pub is_active: bool,
}

impl_resource!(DownloadBanner, "/api/download-banner", "Download banner");

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BannerVideo {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title_bn: String,
    pub title_en: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub order: i64,
    pub is_active: bool,
}

impl_resource!(BannerVideo, "/api/banner-videos", "Banner video");

impl Ordered for BannerVideo {
    fn order(&self) -> i64 {
        self.order
    }
}

impl Activatable for BannerVideo {
    fn is_active(&self) -> bool {
        self.is_active
    }
}
