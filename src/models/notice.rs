use serde::{Deserialize, Serialize};

use crate::impl_resource;

pub const DEFAULT_NOTICE_SPEED_SEC: u32 = 30;

/// Scrolling notice bar of the affiliate site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AffNotice {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub text_bn: String,
    pub text_en: String,
    /// Seconds for one full marquee pass.
    pub speed_sec: u32,
}

impl Default for AffNotice {
    fn default() -> Self {
        Self {
            id: None,
            text_bn: String::new(),
            text_en: String::new(),
            speed_sec: DEFAULT_NOTICE_SPEED_SEC,
        }
    }
}

impl_resource!(AffNotice, "/api/aff-notice", "Notice");

/// Notice bar of the main site.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Notice {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub text_bn: String,
    pub text_en: String,
    pub is_active: bool,
}

impl_resource!(Notice, "/api/notice", "Notice");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Resource;

    #[test]
    fn empty_object_is_not_yet_created() {
        let notice: AffNotice = serde_json::from_str("{}").unwrap();
        assert!(!notice.exists());
        assert_eq!(notice.speed_sec, DEFAULT_NOTICE_SPEED_SEC);
    }

    #[test]
    fn new_notice_serializes_without_id() {
        let notice = AffNotice {
            text_bn: "স্বাগতম".into(),
            text_en: "Welcome".into(),
            speed_sec: 20,
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&notice).unwrap(),
            serde_json::json!({"textBn": "স্বাগতম", "textEn": "Welcome", "speedSec": 20})
        );
    }
}
