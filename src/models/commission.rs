use serde::{Deserialize, Serialize};

use crate::impl_resource;
use crate::models::{Activatable, Bilingual};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommissionRow {
    pub level: String,
    pub new_reg: Bilingual<String>,
    pub base: String,
    pub extra: String,
    pub need: Bilingual<String>,
    pub total: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExampleRow {
    pub label: Bilingual<String>,
    pub amount: String,
    pub rate: String,
    pub result: String,
}

/// Commission table, its explanation modal and the worked example.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AffCommissionConfig {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub is_active: bool,
    pub section_title: Bilingual<String>,
    pub th: Bilingual<Vec<String>>,
    pub rows: Vec<CommissionRow>,
    pub modal_title: Bilingual<String>,
    pub bullets: Bilingual<Vec<String>>,
    pub formula_title: Bilingual<String>,
    pub formula_labels: Bilingual<Vec<String>>,
    pub example_title: Bilingual<String>,
    pub ex_th: Bilingual<Vec<String>>,
    pub ex_rows: Vec<ExampleRow>,
    pub ex_total_label: Bilingual<String>,
    pub ex_total: String,
    pub close: Bilingual<String>,
}

impl_resource!(AffCommissionConfig, "/api/aff-commission", "Commission config");

impl Activatable for AffCommissionConfig {
    fn is_active(&self) -> bool {
        self.is_active
    }
}

impl AffCommissionConfig {
    /// Append a blank row whose level follows the last one.
    pub fn add_row(&mut self) -> usize {
        let next_level = self
            .rows
            .iter()
            .filter_map(|r| r.level.trim().parse::<u32>().ok())
            .max()
            .map_or(1, |n| n + 1);
        self.rows.push(CommissionRow {
            level: next_level.to_string(),
            ..Default::default()
        });
        self.rows.len() - 1
    }

    pub fn remove_row(&mut self, idx: usize) -> bool {
        if idx < self.rows.len() {
            self.rows.remove(idx);
            true
        } else {
            false
        }
    }

    pub fn add_example_row(&mut self) -> usize {
        self.ex_rows.push(ExampleRow::default());
        self.ex_rows.len() - 1
    }

    pub fn remove_example_row(&mut self, idx: usize) -> bool {
        if idx < self.ex_rows.len() {
            self.ex_rows.remove(idx);
            true
        } else {
            false
        }
    }

    pub fn add_bullet(&mut self) {
        self.bullets.push_pair(String::new(), String::new());
    }

    pub fn remove_bullet(&mut self, idx: usize) -> bool {
        self.bullets.remove_pair(idx)
    }
}

/// First config flagged active; the public site shows only this one.
pub fn active_commission(configs: &[AffCommissionConfig]) -> Option<&AffCommissionConfig> {
    configs.iter().find(|c| c.is_active)
}

pub const DEFAULT_SECTION_BG: &str = "#0f172a";
pub const DEFAULT_TITLE_COLOR: &str = "#facc15";
pub const DEFAULT_TH_BG: &str = "#1e293b";
pub const DEFAULT_TH_COLOR: &str = "#f8fafc";
pub const DEFAULT_ROW_BG: &str = "#111827";
pub const DEFAULT_ROW_ALT_BG: &str = "#1f2937";
pub const DEFAULT_TEXT_COLOR: &str = "#e2e8f0";
pub const DEFAULT_BORDER_COLOR: &str = "#334155";
pub const DEFAULT_RADIUS_PX: u32 = 12;
pub const DEFAULT_TITLE_SIZE_PX: u32 = 28;
pub const DEFAULT_FONT_SIZE_PX: u32 = 14;

/// Theme of the commission section. Defaults equal the admin form defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AffCommissionColor {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub section_bg: String,
    pub title_color: String,
    pub th_bg: String,
    pub th_color: String,
    pub row_bg: String,
    pub row_alt_bg: String,
    pub text_color: String,
    pub border_color: String,
    pub radius_px: u32,
    pub title_size_px: u32,
    pub font_size_px: u32,
}

impl Default for AffCommissionColor {
    fn default() -> Self {
        Self {
            id: None,
            section_bg: DEFAULT_SECTION_BG.into(),
            title_color: DEFAULT_TITLE_COLOR.into(),
            th_bg: DEFAULT_TH_BG.into(),
            th_color: DEFAULT_TH_COLOR.into(),
            row_bg: DEFAULT_ROW_BG.into(),
            row_alt_bg: DEFAULT_ROW_ALT_BG.into(),
            text_color: DEFAULT_TEXT_COLOR.into(),
            border_color: DEFAULT_BORDER_COLOR.into(),
            radius_px: DEFAULT_RADIUS_PX,
            title_size_px: DEFAULT_TITLE_SIZE_PX,
            font_size_px: DEFAULT_FONT_SIZE_PX,
        }
    }
}

impl_resource!(AffCommissionColor, "/api/aff-commission-color", "Commission colors");
