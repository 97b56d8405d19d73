use crate::models::{AffNotice, Lang, DEFAULT_NOTICE_SPEED_SEC};
use crate::views::{present, resolve_pair, Fallback};

pub const NOTICE_TEXT: Fallback = Fallback::new(
    "আমাদের অ্যাফিলিয়েট প্রোগ্রামে যোগ দিন এবং প্রতি সপ্তাহে কমিশন উপার্জন করুন।",
    "Join our affiliate program and earn commission every week.",
);

/// Scrolling notice bar.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NoticeView {
    pub text: String,
    /// Seconds for one full scroll.
    pub speed_sec: u32,
}

impl NoticeView {
    pub fn build(doc: Option<&AffNotice>, lang: Lang) -> Self {
        match present(doc) {
            Some(n) => Self {
                text: resolve_pair(lang, &n.text_bn, &n.text_en, NOTICE_TEXT),
                speed_sec: if n.speed_sec == 0 { DEFAULT_NOTICE_SPEED_SEC } else { n.speed_sec },
            },
            None => Self::fallback(lang),
        }
    }

    pub fn fallback(lang: Lang) -> Self {
        Self {
            text: NOTICE_TEXT.get(lang).to_string(),
            speed_sec: DEFAULT_NOTICE_SPEED_SEC,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsaved_notice_renders_fallback() {
        // `{}` from the backend deserializes to a document without `_id`.
        let doc: AffNotice = serde_json::from_str("{}").unwrap();
        assert_eq!(NoticeView::build(Some(&doc), Lang::En), NoticeView::fallback(Lang::En));
        assert_eq!(NoticeView::build(None, Lang::Bn).text, NOTICE_TEXT.bn);
    }

    #[test]
    fn saved_notice_falls_back_only_for_blank_language() {
        let doc = AffNotice {
            id: Some("n1".into()),
            text_bn: "".into(),
            text_en: "Bonus week".into(),
            speed_sec: 12,
        };
        let en = NoticeView::build(Some(&doc), Lang::En);
        assert_eq!(en.text, "Bonus week");
        assert_eq!(en.speed_sec, 12);
        assert_eq!(NoticeView::build(Some(&doc), Lang::Bn).text, NOTICE_TEXT.bn);
    }
}
