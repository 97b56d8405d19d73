use crate::api::ApiClient;
use crate::common::ApiError;
use crate::models::{
    AffAgent, AffCommissionColor, AffCommissionConfig, AffNotice, AffSiteMeta, AffSlider, AffWhyUs,
    FloatingSocialItem, Footer, Lang, Promotion, Resource, SiteBranding, AFF_FLOATING_SOCIAL_PATH,
    AFF_FOOTER_PATH,
};
use crate::services::QueryCache;
use crate::views::{
    branding_theme, floating_icons, AgentView, CommissionView, FooterView, NoticeView, PromotionsView,
    SiteMetaView, SliderView, SocialIcon, ThemeVars, WhyUsView,
};

/// Everything the affiliate landing page renders, resolved for one language.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AffiliatePage {
    pub lang: Lang,
    pub meta: SiteMetaView,
    pub brand_theme: ThemeVars,
    pub notice: NoticeView,
    pub slider: SliderView,
    pub agent: AgentView,
    pub why_us: WhyUsView,
    pub commission: CommissionView,
    pub promotions: PromotionsView,
    pub footer: FooterView,
    pub social: Vec<SocialIcon>,
}

/// Raw documents behind the page. `None` means absent or failed.
#[derive(Debug, Clone, Default)]
pub struct AffiliateData {
    pub meta: Option<AffSiteMeta>,
    pub branding: Option<SiteBranding>,
    pub notice: Option<AffNotice>,
    pub slider: Option<AffSlider>,
    pub agent: Option<AffAgent>,
    pub why_us: Option<AffWhyUs>,
    pub commissions: Vec<AffCommissionConfig>,
    pub commission_color: Option<AffCommissionColor>,
    pub promotions: Vec<Promotion>,
    pub footer: Option<Footer>,
    pub social: Vec<FloatingSocialItem>,
}

/// A failed section read logs and renders its fallback.
fn or_fallback<T: Default>(path: &str, result: Result<T, ApiError>) -> T {
    result.unwrap_or_else(|e| {
        log::warn!("Affiliate section {} unavailable: {}", path, e);
        T::default()
    })
}

async fn document<R: Resource>(cache: &QueryCache, client: &ApiClient, path: &str) -> Option<R> {
    or_fallback(path, cache.document::<R>(client, path).await)
}

async fn list<R: Resource>(cache: &QueryCache, client: &ApiClient, path: &str) -> Vec<R> {
    or_fallback(path, cache.list::<R>(client, path).await)
}

impl AffiliateData {
    /// Fetch every section through the cache. Never fails.
    pub async fn fetch(client: &ApiClient, cache: &QueryCache) -> Self {
        Self {
            meta: document(cache, client, AffSiteMeta::PATH).await,
            branding: document(cache, client, SiteBranding::PATH).await,
            notice: document(cache, client, AffNotice::PATH).await,
            slider: document(cache, client, AffSlider::PATH).await,
            agent: document(cache, client, AffAgent::PATH).await,
            why_us: document(cache, client, AffWhyUs::PATH).await,
            commissions: list(cache, client, AffCommissionConfig::PATH).await,
            commission_color: document(cache, client, AffCommissionColor::PATH).await,
            promotions: list(cache, client, Promotion::PATH).await,
            footer: document(cache, client, AFF_FOOTER_PATH).await,
            social: list(cache, client, AFF_FLOATING_SOCIAL_PATH).await,
        }
    }

    /// Point every uploaded-file URL at the API origin.
    pub fn absolutize(&mut self, client: &ApiClient) {
        let fix = |s: &mut String| *s = client.asset_url(s.as_str());
        if let Some(m) = &mut self.meta {
            fix(&mut m.og_image_url);
            fix(&mut m.favicon_url);
        }
        if let Some(b) = &mut self.branding {
            fix(&mut b.logo_url);
            fix(&mut b.favicon_url);
        }
        if let Some(s) = &mut self.slider {
            s.slides.iter_mut().for_each(|slide| fix(&mut slide.image_url));
        }
        if let Some(a) = &mut self.agent {
            fix(&mut a.image_url);
        }
        if let Some(w) = &mut self.why_us {
            w.items.iter_mut().for_each(|i| fix(&mut i.icon_url));
        }
        self.promotions.iter_mut().for_each(|p| fix(&mut p.image));
        if let Some(f) = &mut self.footer {
            fix(&mut f.logo);
            for section in crate::models::FooterSection::ALL {
                f.items_mut(section).iter_mut().for_each(|i| fix(&mut i.img));
            }
        }
        self.social.iter_mut().for_each(|i| fix(&mut i.image_url));
    }
}

impl AffiliatePage {
    pub fn build(data: &AffiliateData, lang: Lang, category: Option<&str>) -> Self {
        Self {
            lang,
            meta: SiteMetaView::build(data.meta.as_ref(), lang),
            brand_theme: branding_theme(data.branding.as_ref()),
            notice: NoticeView::build(data.notice.as_ref(), lang),
            slider: SliderView::build(data.slider.as_ref()),
            agent: AgentView::build(data.agent.as_ref(), lang),
            why_us: WhyUsView::build(data.why_us.as_ref(), lang),
            commission: CommissionView::build(&data.commissions, data.commission_color.as_ref(), lang),
            promotions: PromotionsView::build(&data.promotions, category, lang),
            footer: FooterView::build(data.footer.as_ref(), lang),
            social: floating_icons(&data.social),
        }
    }

    /// Built-in content only, as shown while loading.
    pub fn fallback(lang: Lang) -> Self {
        Self::build(&AffiliateData::default(), lang, None)
    }

    pub async fn load(client: &ApiClient, cache: &QueryCache, lang: Lang, category: Option<&str>) -> Self {
        let mut data = AffiliateData::fetch(client, cache).await;
        data.absolutize(client);
        Self::build(&data, lang, category)
    }
}
