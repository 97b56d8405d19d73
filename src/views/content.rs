use crate::models::{AffAgent, AffSiteMeta, AffWhyUs, Lang, Resource};
use crate::views::{present, resolve, resolve_pair, resolve_text, Fallback};

pub const AGENT_TITLE: Fallback = Fallback::new("এজেন্ট হোন", "Become an agent");
pub const AGENT_DESC: Fallback = Fallback::new(
    "আমাদের এজেন্ট নেটওয়ার্কে যোগ দিয়ে নিজের এলাকায় ব্যবসা গড়ে তুলুন।",
    "Join our agent network and grow a business in your area.",
);
pub const AGENT_BUTTON: Fallback = Fallback::new("এখনই যোগাযোগ করুন", "Contact us now");

pub const WHY_US_TITLE: Fallback = Fallback::new("কেন আমাদের বেছে নেবেন", "Why choose us");
pub const WHY_US_ITEMS: [(Fallback, Fallback); 3] = [
    (
        Fallback::new("সর্বোচ্চ কমিশন", "Top commission"),
        Fallback::new("বাজারের সেরা কমিশন হার।", "The best commission rates on the market."),
    ),
    (
        Fallback::new("দ্রুত পেমেন্ট", "Fast payouts"),
        Fallback::new("প্রতি সপ্তাহে সময়মতো পেমেন্ট।", "On-time payouts every week."),
    ),
    (
        Fallback::new("২৪/৭ সাপোর্ট", "24/7 support"),
        Fallback::new("যেকোনো সময় আমাদের টিম পাশে আছে।", "Our team is here around the clock."),
    ),
];

pub const SITE_TITLE: Fallback = Fallback::new("অ্যাফিলিয়েট প্রোগ্রাম", "Affiliate Program");
pub const SITE_DESCRIPTION: Fallback = Fallback::new(
    "আমাদের অ্যাফিলিয়েট প্রোগ্রামে যোগ দিয়ে আয় শুরু করুন।",
    "Start earning with our affiliate program.",
);

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AgentView {
    pub title: String,
    pub desc: String,
    pub button: String,
    pub link_url: String,
    pub image_url: String,
}

impl AgentView {
    pub fn build(doc: Option<&AffAgent>, lang: Lang) -> Self {
        let doc = present(doc).cloned().unwrap_or_default();
        Self {
            title: resolve_pair(lang, &doc.title_bn, &doc.title_en, AGENT_TITLE),
            desc: resolve_pair(lang, &doc.desc_bn, &doc.desc_en, AGENT_DESC),
            button: resolve_pair(lang, &doc.button_bn, &doc.button_en, AGENT_BUTTON),
            link_url: resolve(&doc.link_url, "#"),
            image_url: doc.image_url,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct WhyUsItemView {
    pub icon_url: String,
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct WhyUsView {
    pub title: String,
    pub items: Vec<WhyUsItemView>,
}

impl WhyUsView {
    pub fn build(doc: Option<&AffWhyUs>, lang: Lang) -> Self {
        let doc = present(doc);
        let title = match doc {
            Some(d) => resolve_pair(lang, &d.title_bn, &d.title_en, WHY_US_TITLE),
            None => WHY_US_TITLE.get(lang).to_string(),
        };

        let stored = doc.map(|d| d.items.as_slice()).unwrap_or_default();
        let items = if stored.is_empty() {
            WHY_US_ITEMS
                .iter()
                .map(|(title, desc)| WhyUsItemView {
                    icon_url: String::new(),
                    title: title.get(lang).to_string(),
                    desc: desc.get(lang).to_string(),
                })
                .collect()
        } else {
            let blank = (Fallback::new("", ""), Fallback::new("", ""));
            stored
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let (title, desc) = WHY_US_ITEMS.get(i).copied().unwrap_or(blank);
                    WhyUsItemView {
                        icon_url: item.icon_url.clone(),
                        title: resolve_text(lang, &item.title, title),
                        desc: resolve_text(lang, &item.desc, desc),
                    }
                })
                .collect()
        };

        Self { title, items }
    }
}

/// `<head>` metadata for the affiliate site.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SiteMetaView {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub og_image_url: String,
    pub favicon_url: String,
}

impl SiteMetaView {
    pub fn build(doc: Option<&AffSiteMeta>, lang: Lang) -> Self {
        let doc = present(doc).cloned().unwrap_or_default();
        Self {
            title: resolve_pair(lang, &doc.title_bn, &doc.title_en, SITE_TITLE),
            description: resolve_pair(lang, &doc.description_bn, &doc.description_en, SITE_DESCRIPTION),
            keywords: doc.keywords,
            og_image_url: doc.og_image_url,
            favicon_url: resolve(&doc.favicon_url, "/static/favicon.ico"),
        }
    }

    /// True when the page should fall back to the built-in title.
    pub fn is_default(doc: Option<&AffSiteMeta>) -> bool {
        !doc.is_some_and(|d| d.exists())
    }
}
