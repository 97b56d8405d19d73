//! Admin pages that are plain schema forms.

use leptos::prelude::*;

use crate::models::{
    AffAgent, AffCommissionColor, AffNotice, AffSiteMeta, BannerVideo, DownloadBanner, DownloadHeader,
    FloatingSocialItem, Notice, Promotion, Resource, SingleBanner, SiteBranding, SliderItem, TwoBanner,
    AFF_FLOATING_SOCIAL_PATH,
};
use crate::services::forms::schema;
use crate::services::{sort_by_order, Validate};

use super::editor::{collection_editor, document_editor, CollectionOptions};

#[component]
pub fn AffNoticePage() -> impl IntoView {
    document_editor::<AffNotice>("Affiliate notice", AffNotice::PATH, schema::AFF_NOTICE, Some(AffNotice::validate))
}

#[component]
pub fn NoticePage() -> impl IntoView {
    document_editor::<Notice>("Notice", Notice::PATH, schema::NOTICE, None)
}

#[component]
pub fn SingleBannerPage() -> impl IntoView {
    document_editor::<SingleBanner>("Single banner", SingleBanner::PATH, schema::SINGLE_BANNER, None)
}

#[component]
pub fn TwoBannerPage() -> impl IntoView {
    document_editor::<TwoBanner>("Two banners", TwoBanner::PATH, schema::TWO_BANNER, None)
}

#[component]
pub fn DownloadHeaderPage() -> impl IntoView {
    document_editor::<DownloadHeader>("Download header", DownloadHeader::PATH, schema::DOWNLOAD_HEADER, None)
}

#[component]
pub fn DownloadBannerPage() -> impl IntoView {
    document_editor::<DownloadBanner>("Download banner", DownloadBanner::PATH, schema::DOWNLOAD_BANNER, None)
}

#[component]
pub fn SiteBrandingPage() -> impl IntoView {
    document_editor::<SiteBranding>("Site branding", SiteBranding::PATH, schema::SITE_BRANDING, None)
}

#[component]
pub fn AffSiteMetaPage() -> impl IntoView {
    document_editor::<AffSiteMeta>("Affiliate site meta", AffSiteMeta::PATH, schema::AFF_SITE_META, None)
}

#[component]
pub fn AffAgentPage() -> impl IntoView {
    document_editor::<AffAgent>("Affiliate agent", AffAgent::PATH, schema::AFF_AGENT, None)
}

#[component]
pub fn AffCommissionColorPage() -> impl IntoView {
    document_editor::<AffCommissionColor>(
        "Commission colors",
        AffCommissionColor::PATH,
        schema::AFF_COMMISSION_COLOR,
        None,
    )
}

#[component]
pub fn PromotionsPage() -> impl IntoView {
    collection_editor::<Promotion>(
        "Promotions",
        Promotion::PATH,
        schema::PROMOTION,
        CollectionOptions {
            new_item: Promotion::default,
            summary: |p: &Promotion| format!("[{}] {}", p.category, p.title.en),
            order: None,
            sort: None,
            check: Some(Promotion::validate),
        },
    )
}

#[component]
pub fn SlidersPage() -> impl IntoView {
    collection_editor::<SliderItem>(
        "Sliders",
        SliderItem::PATH,
        schema::SLIDER_ITEM,
        CollectionOptions {
            new_item: || SliderItem {
                is_active: true,
                ..Default::default()
            },
            summary: |s: &SliderItem| format!("#{} {}", s.order, s.title.en),
            order: Some((|s: &SliderItem| s.order, |s: &mut SliderItem, o| s.order = o)),
            sort: Some(sort_by_order),
            check: None,
        },
    )
}

#[component]
pub fn BannerVideosPage() -> impl IntoView {
    collection_editor::<BannerVideo>(
        "Banner videos",
        BannerVideo::PATH,
        schema::BANNER_VIDEO,
        CollectionOptions {
            new_item: || BannerVideo {
                is_active: true,
                ..Default::default()
            },
            summary: |v: &BannerVideo| format!("#{} {}", v.order, v.title_en),
            order: Some((|v: &BannerVideo| v.order, |v: &mut BannerVideo, o| v.order = o)),
            sort: Some(sort_by_order),
            check: None,
        },
    )
}

fn floating_social(title: &'static str, path: &'static str) -> impl IntoView {
    collection_editor::<FloatingSocialItem>(
        title,
        path,
        schema::FLOATING_SOCIAL,
        CollectionOptions {
            new_item: || FloatingSocialItem::next_after(&[]),
            summary: |i: &FloatingSocialItem| format!("#{} {}", i.order, i.link_url),
            order: Some((|i: &FloatingSocialItem| i.order, |i: &mut FloatingSocialItem, o| i.order = o)),
            sort: Some(sort_by_order),
            check: Some(FloatingSocialItem::validate),
        },
    )
}

#[component]
pub fn FloatingSocialPage() -> impl IntoView {
    floating_social("Floating social", FloatingSocialItem::PATH)
}

#[component]
pub fn AffFloatingSocialPage() -> impl IntoView {
    floating_social("Affiliate floating social", AFF_FLOATING_SOCIAL_PATH)
}
