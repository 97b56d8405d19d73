use crate::models::{
    AffCommissionColor, SiteBranding, DEFAULT_BORDER_COLOR, DEFAULT_FONT_SIZE_PX, DEFAULT_PRIMARY_COLOR,
    DEFAULT_RADIUS_PX, DEFAULT_ROW_ALT_BG, DEFAULT_ROW_BG, DEFAULT_SECONDARY_COLOR, DEFAULT_SECTION_BG,
    DEFAULT_TEXT_COLOR, DEFAULT_TH_BG, DEFAULT_TH_COLOR, DEFAULT_TITLE_COLOR, DEFAULT_TITLE_SIZE_PX,
};

/// CSS custom properties scoped to one section root.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ThemeVars {
    vars: Vec<(&'static str, String)>,
}

/// Only characters that can appear in a color or length; anything else
/// could break out of the `style` attribute.
fn css_safe(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '#' | '(' | ')' | ',' | '.' | '%' | ' ' | '-'))
}

impl ThemeVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, name: &'static str, value: &str, fallback: &str) -> Self {
        let value = value.trim();
        let value = if css_safe(value) { value } else { fallback };
        self.vars.push((name, value.to_string()));
        self
    }

    /// Pixel length; `0` means unset.
    pub fn px(mut self, name: &'static str, value: u32, fallback: u32) -> Self {
        let value = if value == 0 { fallback } else { value };
        self.vars.push((name, format!("{value}px")));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.iter().find(|(n, _)| *n == name).map(|(_, v)| v.as_str())
    }

    /// `--name: value;` pairs for a `style` attribute.
    pub fn style(&self) -> String {
        self.vars
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub fn commission_theme(color: Option<&AffCommissionColor>) -> ThemeVars {
    let c = color.cloned().unwrap_or_default();
    ThemeVars::new()
        .color("--aff-section-bg", &c.section_bg, DEFAULT_SECTION_BG)
        .color("--aff-title-color", &c.title_color, DEFAULT_TITLE_COLOR)
        .color("--aff-th-bg", &c.th_bg, DEFAULT_TH_BG)
        .color("--aff-th-color", &c.th_color, DEFAULT_TH_COLOR)
        .color("--aff-row-bg", &c.row_bg, DEFAULT_ROW_BG)
        .color("--aff-row-alt-bg", &c.row_alt_bg, DEFAULT_ROW_ALT_BG)
        .color("--aff-text-color", &c.text_color, DEFAULT_TEXT_COLOR)
        .color("--aff-border-color", &c.border_color, DEFAULT_BORDER_COLOR)
        .px("--aff-radius", c.radius_px, DEFAULT_RADIUS_PX)
        .px("--aff-title-size", c.title_size_px, DEFAULT_TITLE_SIZE_PX)
        .px("--aff-font-size", c.font_size_px, DEFAULT_FONT_SIZE_PX)
}

pub fn branding_theme(branding: Option<&SiteBranding>) -> ThemeVars {
    let b = branding.cloned().unwrap_or_default();
    ThemeVars::new()
        .color("--brand-primary", &b.primary_color, DEFAULT_PRIMARY_COLOR)
        .color("--brand-secondary", &b.secondary_color, DEFAULT_SECONDARY_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_theme_uses_form_defaults() {
        let vars = commission_theme(None);
        assert_eq!(vars.get("--aff-section-bg"), Some(DEFAULT_SECTION_BG));
        assert_eq!(vars.get("--aff-radius"), Some("12px"));
    }

    #[test]
    fn zero_sizes_and_unsafe_colors_fall_back() {
        let color = AffCommissionColor {
            title_color: "red; background: url(x)".into(),
            th_bg: "rgb(1, 2, 3)".into(),
            radius_px: 0,
            font_size_px: 16,
            ..Default::default()
        };
        let vars = commission_theme(Some(&color));
        assert_eq!(vars.get("--aff-title-color"), Some(DEFAULT_TITLE_COLOR));
        assert_eq!(vars.get("--aff-th-bg"), Some("rgb(1, 2, 3)"));
        assert_eq!(vars.get("--aff-radius"), Some("12px"));
        assert_eq!(vars.get("--aff-font-size"), Some("16px"));
        assert!(vars.style().starts_with("--aff-section-bg: "));
    }
}
