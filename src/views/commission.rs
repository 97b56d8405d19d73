use crate::models::{active_commission, AffCommissionColor, AffCommissionConfig, Lang};
use crate::views::{commission_theme, resolve, resolve_list, resolve_text, Fallback, ThemeVars};

pub const SECTION_TITLE: Fallback = Fallback::new("অ্যাফিলিয়েট কমিশন", "Affiliate Commission");
pub const MODAL_TITLE: Fallback = Fallback::new("কমিশন কীভাবে কাজ করে", "How commission works");
pub const FORMULA_TITLE: Fallback = Fallback::new("কমিশন সূত্র", "Commission formula");
pub const EXAMPLE_TITLE: Fallback = Fallback::new("উদাহরণ", "Example");
pub const EXAMPLE_TOTAL_LABEL: Fallback = Fallback::new("মোট কমিশন", "Total commission");
pub const CLOSE: Fallback = Fallback::new("বন্ধ করুন", "Close");

pub const TABLE_HEADERS: [Fallback; 6] = [
    Fallback::new("লেভেল", "Level"),
    Fallback::new("নতুন রেজিস্ট্রেশন", "New registrations"),
    Fallback::new("বেস", "Base"),
    Fallback::new("অতিরিক্ত", "Extra"),
    Fallback::new("শর্ত", "Requirement"),
    Fallback::new("মোট", "Total"),
];

pub const BULLETS: [Fallback; 3] = [
    Fallback::new(
        "কমিশন প্রতি সপ্তাহে নেট লাভের উপর গণনা করা হয়।",
        "Commission is calculated weekly on net profit.",
    ),
    Fallback::new(
        "সক্রিয় খেলোয়াড়ের সংখ্যা আপনার লেভেল নির্ধারণ করে।",
        "Your number of active players sets your level.",
    ),
    Fallback::new(
        "পেমেন্ট প্রতি সোমবার আপনার ওয়ালেটে জমা হয়।",
        "Payouts reach your wallet every Monday.",
    ),
];

pub const FORMULA_LABELS: [Fallback; 3] = [
    Fallback::new("নেট লাভ", "Net profit"),
    Fallback::new("কমিশন হার", "Commission rate"),
    Fallback::new("আপনার কমিশন", "Your commission"),
];

pub const EXAMPLE_HEADERS: [Fallback; 4] = [
    Fallback::new("বিবরণ", "Item"),
    Fallback::new("পরিমাণ", "Amount"),
    Fallback::new("হার", "Rate"),
    Fallback::new("ফলাফল", "Result"),
];

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CommissionRowView {
    pub level: String,
    pub new_reg: String,
    pub base: String,
    pub extra: String,
    pub need: String,
    pub total: String,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ExampleRowView {
    pub label: String,
    pub amount: String,
    pub rate: String,
    pub result: String,
}

/// Commission table plus its explanation modal, resolved for one language.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CommissionView {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<CommissionRowView>,
    pub modal_title: String,
    pub bullets: Vec<String>,
    pub formula_title: String,
    pub formula_labels: Vec<String>,
    pub example_title: String,
    pub example_headers: Vec<String>,
    pub example_rows: Vec<ExampleRowView>,
    pub example_total_label: String,
    pub example_total: String,
    pub close: String,
    pub theme: ThemeVars,
}

fn default_rows(lang: Lang) -> Vec<CommissionRowView> {
    let (players, bn) = match lang {
        Lang::Bn => ("জন সক্রিয় খেলোয়াড়", true),
        Lang::En => ("active players", false),
    };
    [("1", "5", "25%", "0%"), ("2", "10", "30%", "5%"), ("3", "20", "35%", "10%")]
        .into_iter()
        .map(|(level, need, base, extra)| CommissionRowView {
            level: level.to_string(),
            new_reg: if bn { format!("{need}+") } else { format!("{need}+ signups") },
            base: base.to_string(),
            extra: extra.to_string(),
            need: format!("{need} {players}"),
            total: format!(
                "{}%",
                base.trim_end_matches('%').parse::<u32>().unwrap_or(0)
                    + extra.trim_end_matches('%').parse::<u32>().unwrap_or(0)
            ),
        })
        .collect()
}

fn default_example(lang: Lang) -> (Vec<ExampleRowView>, &'static str) {
    let label = match lang {
        Lang::Bn => "সাপ্তাহিক নেট লাভ",
        Lang::En => "Weekly net profit",
    };
    (
        vec![ExampleRowView {
            label: label.to_string(),
            amount: "10,000".into(),
            rate: "30%".into(),
            result: "3,000".into(),
        }],
        "3,000",
    )
}

fn texts(list: &[Fallback], lang: Lang) -> Vec<String> {
    list.iter().map(|f| f.get(lang).to_string()).collect()
}

impl CommissionView {
    /// Render the first active config, or built-in content when none is.
    pub fn build(configs: &[AffCommissionConfig], color: Option<&AffCommissionColor>, lang: Lang) -> Self {
        let Some(cfg) = active_commission(configs) else {
            return Self::fallback(color, lang);
        };

        let rows = if cfg.rows.is_empty() {
            default_rows(lang)
        } else {
            cfg.rows
                .iter()
                .map(|r| CommissionRowView {
                    level: r.level.clone(),
                    new_reg: r.new_reg.get(lang).clone(),
                    base: r.base.clone(),
                    extra: r.extra.clone(),
                    need: r.need.get(lang).clone(),
                    total: r.total.clone(),
                })
                .collect()
        };

        let (fallback_examples, fallback_total) = default_example(lang);
        let example_rows = if cfg.ex_rows.is_empty() {
            fallback_examples
        } else {
            cfg.ex_rows
                .iter()
                .map(|r| ExampleRowView {
                    label: r.label.get(lang).clone(),
                    amount: r.amount.clone(),
                    rate: r.rate.clone(),
                    result: r.result.clone(),
                })
                .collect()
        };

        Self {
            title: resolve_text(lang, &cfg.section_title, SECTION_TITLE),
            headers: resolve_list(lang, &cfg.th, &TABLE_HEADERS),
            rows,
            modal_title: resolve_text(lang, &cfg.modal_title, MODAL_TITLE),
            bullets: resolve_list(lang, &cfg.bullets, &BULLETS),
            formula_title: resolve_text(lang, &cfg.formula_title, FORMULA_TITLE),
            formula_labels: resolve_list(lang, &cfg.formula_labels, &FORMULA_LABELS),
            example_title: resolve_text(lang, &cfg.example_title, EXAMPLE_TITLE),
            example_headers: resolve_list(lang, &cfg.ex_th, &EXAMPLE_HEADERS),
            example_rows,
            example_total_label: resolve_text(lang, &cfg.ex_total_label, EXAMPLE_TOTAL_LABEL),
            example_total: resolve(&cfg.ex_total, fallback_total),
            close: resolve_text(lang, &cfg.close, CLOSE),
            theme: commission_theme(color),
        }
    }

    pub fn fallback(color: Option<&AffCommissionColor>, lang: Lang) -> Self {
        let (example_rows, example_total) = default_example(lang);
        Self {
            title: SECTION_TITLE.get(lang).into(),
            headers: texts(&TABLE_HEADERS, lang),
            rows: default_rows(lang),
            modal_title: MODAL_TITLE.get(lang).into(),
            bullets: texts(&BULLETS, lang),
            formula_title: FORMULA_TITLE.get(lang).into(),
            formula_labels: texts(&FORMULA_LABELS, lang),
            example_title: EXAMPLE_TITLE.get(lang).into(),
            example_headers: texts(&EXAMPLE_HEADERS, lang),
            example_rows,
            example_total_label: EXAMPLE_TOTAL_LABEL.get(lang).into(),
            example_total: example_total.into(),
            close: CLOSE.get(lang).into(),
            theme: commission_theme(color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Bilingual;

    #[test]
    fn inactive_configs_render_fallback() {
        let cfg = AffCommissionConfig {
            id: Some("c1".into()),
            name: "draft".into(),
            section_title: Bilingual::text("খসড়া", "Draft"),
            ..Default::default()
        };
        let view = CommissionView::build(&[cfg], None, Lang::En);
        assert_eq!(view, CommissionView::fallback(None, Lang::En));
        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.rows[1].total, "35%");
    }

    #[test]
    fn active_config_wins_and_blank_slots_fall_back() {
        let mut active = AffCommissionConfig {
            id: Some("c2".into()),
            is_active: true,
            section_title: Bilingual::text("", "Earn with us"),
            ..Default::default()
        };
        active.add_row();
        active.rows[0].base = "40%".into();

        let view = CommissionView::build(&[AffCommissionConfig::default(), active], None, Lang::Bn);
        assert_eq!(view.title, SECTION_TITLE.bn);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].base, "40%");
        assert_eq!(view.headers.len(), TABLE_HEADERS.len());
        assert_eq!(view.close, CLOSE.bn);
    }
}
