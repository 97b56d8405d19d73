use crate::models::{Footer, FooterItem, FooterSection, Lang};
use crate::views::{present, resolve, Fallback};

pub const ABOUT: Fallback = Fallback::new(
    "বাংলাদেশের বিশ্বস্ত অনলাইন গেমিং প্ল্যাটফর্ম।",
    "A trusted online gaming platform for Bangladesh.",
);
pub const AMBASSADORS_TITLE: Fallback = Fallback::new("ব্র্যান্ড অ্যাম্বাসেডর", "Brand ambassadors");
pub const SPONSORS_TITLE: Fallback = Fallback::new("স্পনসরশিপ", "Sponsorships");
pub const PAYMENTS_TITLE: Fallback = Fallback::new("পেমেন্ট পদ্ধতি", "Payment methods");
pub const RESPONSIBLE_TITLE: Fallback = Fallback::new("দায়িত্বশীল গেমিং", "Responsible gaming");
pub const COPYRIGHT: Fallback = Fallback::new("© সর্বস্বত্ব সংরক্ষিত।", "© All rights reserved.");

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FooterGroup {
    pub section: FooterSection,
    pub title: String,
    pub items: Vec<FooterItem>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FooterView {
    pub logo: String,
    pub about: String,
    pub copyright: String,
    pub groups: Vec<FooterGroup>,
    /// `(network, url)` pairs.
    pub social: Vec<(&'static str, String)>,
}

fn section_fallback(section: FooterSection) -> Fallback {
    match section {
        FooterSection::Ambassadors => AMBASSADORS_TITLE,
        FooterSection::Sponsors => SPONSORS_TITLE,
        FooterSection::Payments => PAYMENTS_TITLE,
        FooterSection::Responsible => RESPONSIBLE_TITLE,
    }
}

impl FooterView {
    pub fn build(doc: Option<&Footer>, lang: Lang) -> Self {
        let doc = present(doc).cloned().unwrap_or_default();
        let texts = doc.texts.get(lang);

        let groups = FooterSection::ALL
            .into_iter()
            .map(|section| {
                let stored = match section {
                    FooterSection::Ambassadors => &texts.ambassadors_title,
                    FooterSection::Sponsors => &texts.sponsors_title,
                    FooterSection::Payments => &texts.payments_title,
                    FooterSection::Responsible => &texts.responsible_title,
                };
                FooterGroup {
                    section,
                    title: resolve(stored, section_fallback(section).get(lang)),
                    items: doc
                        .items(section)
                        .iter()
                        .filter(|i| !i.img.trim().is_empty())
                        .cloned()
                        .collect(),
                }
            })
            .collect();

        Self {
            about: resolve(&texts.about, ABOUT.get(lang)),
            copyright: resolve(&texts.copyright, COPYRIGHT.get(lang)),
            social: doc
                .social
                .links()
                .into_iter()
                .map(|(network, url)| (network, url.to_string()))
                .collect(),
            logo: doc.logo,
            groups,
        }
    }

    /// Groups that have something to show.
    pub fn visible_groups(&self) -> impl Iterator<Item = &FooterGroup> {
        self.groups.iter().filter(|g| !g.items.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Bilingual, FooterTexts};

    #[test]
    fn empty_footer_keeps_titles_and_hides_groups() {
        let view = FooterView::build(None, Lang::En);
        assert_eq!(view.about, ABOUT.en);
        assert_eq!(view.groups.len(), 4);
        assert_eq!(view.groups[2].title, PAYMENTS_TITLE.en);
        assert_eq!(view.visible_groups().count(), 0);
    }

    #[test]
    fn stored_texts_win_per_language() {
        let mut doc = Footer {
            id: Some("f1".into()),
            texts: Bilingual::new(
                FooterTexts {
                    about: "আমাদের সম্পর্কে".into(),
                    ..Default::default()
                },
                FooterTexts::default(),
            ),
            ..Default::default()
        };
        let idx = doc.add_item(FooterSection::Sponsors);
        doc.sponsors[idx].img = "/uploads/club.png".into();
        doc.add_item(FooterSection::Payments);
        doc.social.telegram = "https://t.me/brand".into();

        let bn = FooterView::build(Some(&doc), Lang::Bn);
        assert_eq!(bn.about, "আমাদের সম্পর্কে");
        assert_eq!(FooterView::build(Some(&doc), Lang::En).about, ABOUT.en);

        let visible: Vec<_> = bn.visible_groups().map(|g| g.section).collect();
        assert_eq!(visible, vec![FooterSection::Sponsors]);
        assert_eq!(bn.social, vec![("telegram", "https://t.me/brand".to_string())]);
    }
}
