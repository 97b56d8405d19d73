use serde::{Deserialize, Serialize};

use crate::impl_resource;
use crate::models::Bilingual;

pub const AFF_FOOTER_PATH: &str = "/api/aff-footer";

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterTexts {
    pub about: String,
    pub copyright: String,
    pub ambassadors_title: String,
    pub sponsors_title: String,
    pub payments_title: String,
    pub responsible_title: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterSocial {
    pub facebook: String,
    pub youtube: String,
    pub instagram: String,
    pub twitter: String,
    pub telegram: String,
}

impl FooterSocial {
    /// `(network, url)` pairs with a non-empty URL.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("facebook", self.facebook.as_str()),
            ("youtube", self.youtube.as_str()),
            ("instagram", self.instagram.as_str()),
            ("twitter", self.twitter.as_str()),
            ("telegram", self.telegram.as_str()),
        ]
        .into_iter()
        .filter(|(_, url)| !url.trim().is_empty())
        .collect()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterItem {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    pub img: String,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum FooterSection {
    Ambassadors,
    Sponsors,
    Payments,
    Responsible,
}

impl FooterSection {
    pub const ALL: [FooterSection; 4] = [
        Self::Ambassadors,
        Self::Sponsors,
        Self::Payments,
        Self::Responsible,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ambassadors => "ambassadors",
            Self::Sponsors => "sponsors",
            Self::Payments => "payments",
            Self::Responsible => "responsible",
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Footer {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub texts: Bilingual<FooterTexts>,
    pub social: FooterSocial,
    pub logo: String,
    pub ambassadors: Vec<FooterItem>,
    pub sponsors: Vec<FooterItem>,
    pub payments: Vec<FooterItem>,
    pub responsible: Vec<FooterItem>,
}

impl_resource!(Footer, "/api/footer", "Footer");

impl Footer {
    pub fn items(&self, section: FooterSection) -> &[FooterItem] {
        match section {
            FooterSection::Ambassadors => &self.ambassadors,
            FooterSection::Sponsors => &self.sponsors,
            FooterSection::Payments => &self.payments,
            FooterSection::Responsible => &self.responsible,
        }
    }

    pub fn items_mut(&mut self, section: FooterSection) -> &mut Vec<FooterItem> {
        match section {
            FooterSection::Ambassadors => &mut self.ambassadors,
            FooterSection::Sponsors => &mut self.sponsors,
            FooterSection::Payments => &mut self.payments,
            FooterSection::Responsible => &mut self.responsible,
        }
    }

    pub fn add_item(&mut self, section: FooterSection) -> usize {
        let items = self.items_mut(section);
        items.push(FooterItem {
            season: matches!(section, FooterSection::Ambassadors).then(String::new),
            ..Default::default()
        });
        items.len() - 1
    }

    pub fn remove_item(&mut self, section: FooterSection, idx: usize) -> bool {
        let items = self.items_mut(section);
        if idx < items.len() {
            items.remove(idx);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_round_trips_wire_shape() {
        let footer: Footer = serde_json::from_value(serde_json::json!({
            "_id": "f1",
            "texts": {"en": {"about": "About us"}, "bn": {"about": "আমাদের সম্পর্কে"}},
            "social": {"facebook": "https://fb.com/brand"},
            "ambassadors": [{"_id": "a1", "name": "Star", "season": "2024", "img": "/u/a.png"}],
            "payments": [{"name": "bKash", "img": "/u/b.png"}]
        }))
        .unwrap();

        assert_eq!(footer.texts.en.about, "About us");
        assert_eq!(footer.ambassadors[0].season.as_deref(), Some("2024"));
        assert_eq!(footer.payments[0].season, None);
        assert_eq!(footer.social.links(), vec![("facebook", "https://fb.com/brand")]);
    }

    #[test]
    fn only_ambassadors_get_a_season_field() {
        let mut footer = Footer::default();
        footer.add_item(FooterSection::Ambassadors);
        footer.add_item(FooterSection::Sponsors);
        assert_eq!(footer.ambassadors[0].season.as_deref(), Some(""));
        assert_eq!(footer.sponsors[0].season, None);

        assert!(footer.remove_item(FooterSection::Sponsors, 0));
        assert!(!footer.remove_item(FooterSection::Sponsors, 0));
    }
}
