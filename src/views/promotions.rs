use crate::models::{promotion_categories, Lang, Promotion};
use crate::views::{resolve_text, Fallback};

pub const ALL_CATEGORIES: Fallback = Fallback::new("সব", "All");
pub const UNTITLED: Fallback = Fallback::new("প্রমোশন", "Promotion");

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PromotionCard {
    pub id: String,
    pub category: String,
    pub title: String,
    pub short_desc: String,
    pub details: String,
    pub image: String,
}

/// Promotion grid with its category tabs. `selected` is `"all"` or a category.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PromotionsView {
    pub all_label: String,
    pub categories: Vec<String>,
    pub selected: String,
    pub cards: Vec<PromotionCard>,
}

impl PromotionsView {
    pub fn build(promotions: &[Promotion], selected: Option<&str>, lang: Lang) -> Self {
        let categories = promotion_categories(promotions);
        let selected = selected
            .map(str::trim)
            .filter(|s| categories.iter().any(|c| c.eq_ignore_ascii_case(s)))
            .unwrap_or("all")
            .to_string();

        let cards = promotions
            .iter()
            .filter(|p| p.in_category(&selected))
            .map(|p| PromotionCard {
                id: p.id.clone().unwrap_or_default(),
                category: p.category.clone(),
                title: resolve_text(lang, &p.title, UNTITLED),
                short_desc: p.short_desc.get(lang).clone(),
                details: p.details.get(lang).clone(),
                image: p.image.clone(),
            })
            .collect();

        Self {
            all_label: ALL_CATEGORIES.get(lang).to_string(),
            categories,
            selected,
            cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Bilingual;

    fn promo(id: &str, category: &str, en: &str) -> Promotion {
        Promotion {
            id: Some(id.into()),
            category: category.into(),
            title: Bilingual::text("", en),
            ..Default::default()
        }
    }

    #[test]
    fn unknown_category_shows_everything() {
        let promos = vec![promo("1", "Sports", "Cashback"), promo("2", "Casino", "Spins")];
        let view = PromotionsView::build(&promos, Some("poker"), Lang::En);
        assert_eq!(view.selected, "all");
        assert_eq!(view.cards.len(), 2);
        assert_eq!(view.categories, vec!["Sports", "Casino"]);
    }

    #[test]
    fn category_filter_and_title_fallback() {
        let promos = vec![promo("1", "Sports", "Cashback"), promo("2", "Casino", "Spins")];
        let view = PromotionsView::build(&promos, Some("casino"), Lang::Bn);
        assert_eq!(view.cards.len(), 1);
        assert_eq!(view.cards[0].id, "2");
        assert_eq!(view.cards[0].title, UNTITLED.bn);
        assert_eq!(view.all_label, ALL_CATEGORIES.bn);
    }
}
