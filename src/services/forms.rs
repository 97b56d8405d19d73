//! Schema-driven form state for flat documents.
//!
//! The admin editors keep the document as a `serde_json::Value` and address
//! fields by dotted wire path (`title.bn`, `speedSec`). A [`FieldSpec`] list
//! describes which paths a form shows and how each input is parsed back.

use serde_json::{Map, Number, Value};

use crate::models::Resource;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FieldKind {
    Text,
    TextArea,
    Number,
    Toggle,
    Color,
    Link,
    /// File input uploaded to `<base>/upload` under `field`; the answered
    /// URL lands in the field's path.
    Upload {
        field: &'static str,
        accept: &'static str,
    },
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FieldSpec {
    pub path: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(path: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { path, label, kind }
    }

    pub const fn text(path: &'static str, label: &'static str) -> Self {
        Self::new(path, label, FieldKind::Text)
    }

    pub const fn textarea(path: &'static str, label: &'static str) -> Self {
        Self::new(path, label, FieldKind::TextArea)
    }

    pub const fn number(path: &'static str, label: &'static str) -> Self {
        Self::new(path, label, FieldKind::Number)
    }

    pub const fn toggle(path: &'static str, label: &'static str) -> Self {
        Self::new(path, label, FieldKind::Toggle)
    }

    pub const fn color(path: &'static str, label: &'static str) -> Self {
        Self::new(path, label, FieldKind::Color)
    }

    pub const fn link(path: &'static str, label: &'static str) -> Self {
        Self::new(path, label, FieldKind::Link)
    }

    pub const fn image(path: &'static str, label: &'static str, field: &'static str) -> Self {
        Self::new(path, label, FieldKind::Upload { field, accept: "image/*" })
    }

    pub const fn apk(path: &'static str, label: &'static str, field: &'static str) -> Self {
        Self::new(
            path,
            label,
            FieldKind::Upload {
                field,
                accept: ".apk,application/vnd.android.package-archive",
            },
        )
    }
}

pub fn get_path<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(doc, |node, key| node.get(key))
}

/// Set `path`, creating intermediate objects; a non-object on the way is replaced.
pub fn set_path(doc: &mut Value, path: &str, value: Value) {
    let mut node = doc;
    let mut keys = path.split('.').peekable();
    while let Some(key) = keys.next() {
        if !node.is_object() {
            *node = Value::Object(Map::new());
        }
        let Value::Object(map) = node else {
            return;
        };
        if keys.peek().is_none() {
            map.insert(key.to_string(), value);
            return;
        }
        node = map.entry(key.to_string()).or_insert(Value::Null);
    }
}

/// Text shown in an input for `path`.
pub fn display_value(doc: &Value, path: &str) -> String {
    match get_path(doc, path) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

pub fn is_checked(doc: &Value, path: &str) -> bool {
    matches!(get_path(doc, path), Some(Value::Bool(true)))
}

/// Parse raw input for `kind`. Blank numbers read as `0`.
pub fn parse_input(kind: FieldKind, raw: &str) -> Result<Value, String> {
    match kind {
        FieldKind::Number => {
            let raw = raw.trim();
            if raw.is_empty() {
                return Ok(Value::from(0));
            }
            if let Ok(n) = raw.parse::<i64>() {
                return Ok(Value::from(n));
            }
            raw.parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| "Enter a number".to_string())
        }
        FieldKind::Toggle => Ok(Value::Bool(matches!(raw.trim(), "true" | "on" | "1"))),
        _ => Ok(Value::String(raw.to_string())),
    }
}

pub fn to_form<R: Resource>(doc: &R) -> Value {
    serde_json::to_value(doc).unwrap_or_else(|e| {
        log::error!("{} does not serialize: {}", R::LABEL, e);
        Value::Object(Map::new())
    })
}

pub fn from_form<R: Resource>(form: &Value) -> Result<R, serde_json::Error> {
    serde_json::from_value(form.clone())
}

/// Form layouts of the flat admin editors.
pub mod schema {
    use super::FieldSpec;

    pub const AFF_NOTICE: &[FieldSpec] = &[
        FieldSpec::textarea("textBn", "Notice text (Bangla)"),
        FieldSpec::textarea("textEn", "Notice text (English)"),
        FieldSpec::number("speedSec", "Scroll duration (seconds)"),
    ];

    pub const NOTICE: &[FieldSpec] = &[
        FieldSpec::textarea("textBn", "Notice text (Bangla)"),
        FieldSpec::textarea("textEn", "Notice text (English)"),
        FieldSpec::toggle("isActive", "Active"),
    ];

    pub const SINGLE_BANNER: &[FieldSpec] = &[
        FieldSpec::image("imageUrl", "Banner image", "image"),
        FieldSpec::link("linkUrl", "Link"),
        FieldSpec::text("titleBn", "Title (Bangla)"),
        FieldSpec::text("titleEn", "Title (English)"),
        FieldSpec::toggle("isActive", "Active"),
    ];

    pub const TWO_BANNER: &[FieldSpec] = &[
        FieldSpec::image("leftBannerUrl", "Left banner", "leftBanner"),
        FieldSpec::link("leftLinkUrl", "Left link"),
        FieldSpec::image("rightImageUrl", "Right image", "rightImage"),
        FieldSpec::link("rightLinkUrl", "Right link"),
        FieldSpec::toggle("isActive", "Active"),
    ];

    pub const DOWNLOAD_HEADER: &[FieldSpec] = &[
        FieldSpec::text("titleBn", "Title (Bangla)"),
        FieldSpec::text("titleEn", "Title (English)"),
        FieldSpec::text("subtitleBn", "Subtitle (Bangla)"),
        FieldSpec::text("subtitleEn", "Subtitle (English)"),
        FieldSpec::text("buttonBn", "Button (Bangla)"),
        FieldSpec::text("buttonEn", "Button (English)"),
        FieldSpec::apk("apkUrl", "APK file", "apkFile"),
        FieldSpec::toggle("isActive", "Active"),
    ];

    pub const DOWNLOAD_BANNER: &[FieldSpec] = &[
        FieldSpec::image("imageUrl", "Banner image", "image"),
        FieldSpec::apk("apkUrl", "APK file", "apkFile"),
        FieldSpec::text("textBn", "Text (Bangla)"),
        FieldSpec::text("textEn", "Text (English)"),
        FieldSpec::toggle("isActive", "Active"),
    ];

    pub const SITE_BRANDING: &[FieldSpec] = &[
        FieldSpec::text("siteNameBn", "Site name (Bangla)"),
        FieldSpec::text("siteNameEn", "Site name (English)"),
        FieldSpec::image("logoUrl", "Logo", "logo"),
        FieldSpec::image("faviconUrl", "Favicon", "favicon"),
        FieldSpec::color("primaryColor", "Primary color"),
        FieldSpec::color("secondaryColor", "Secondary color"),
        FieldSpec::toggle("isActive", "Active"),
    ];

    pub const AFF_SITE_META: &[FieldSpec] = &[
        FieldSpec::text("titleBn", "Page title (Bangla)"),
        FieldSpec::text("titleEn", "Page title (English)"),
        FieldSpec::textarea("descriptionBn", "Description (Bangla)"),
        FieldSpec::textarea("descriptionEn", "Description (English)"),
        FieldSpec::text("keywords", "Keywords"),
        FieldSpec::image("ogImageUrl", "Share image", "ogImage"),
        FieldSpec::image("faviconUrl", "Favicon", "favicon"),
    ];

    pub const AFF_AGENT: &[FieldSpec] = &[
        FieldSpec::text("titleBn", "Title (Bangla)"),
        FieldSpec::text("titleEn", "Title (English)"),
        FieldSpec::textarea("descBn", "Description (Bangla)"),
        FieldSpec::textarea("descEn", "Description (English)"),
        FieldSpec::text("buttonBn", "Button (Bangla)"),
        FieldSpec::text("buttonEn", "Button (English)"),
        FieldSpec::link("linkUrl", "Button link"),
        FieldSpec::image("imageUrl", "Image", "image"),
        FieldSpec::toggle("isActive", "Active"),
    ];

    pub const AFF_COMMISSION_COLOR: &[FieldSpec] = &[
        FieldSpec::color("sectionBg", "Section background"),
        FieldSpec::color("titleColor", "Title color"),
        FieldSpec::color("thBg", "Header background"),
        FieldSpec::color("thColor", "Header text"),
        FieldSpec::color("rowBg", "Row background"),
        FieldSpec::color("rowAltBg", "Alternate row background"),
        FieldSpec::color("textColor", "Text color"),
        FieldSpec::color("borderColor", "Border color"),
        FieldSpec::number("radiusPx", "Corner radius (px)"),
        FieldSpec::number("titleSizePx", "Title size (px)"),
        FieldSpec::number("fontSizePx", "Font size (px)"),
    ];

    pub const PROMOTION: &[FieldSpec] = &[
        FieldSpec::text("category", "Category"),
        FieldSpec::text("title.bn", "Title (Bangla)"),
        FieldSpec::text("title.en", "Title (English)"),
        FieldSpec::textarea("shortDesc.bn", "Short description (Bangla)"),
        FieldSpec::textarea("shortDesc.en", "Short description (English)"),
        FieldSpec::textarea("details.bn", "Details (Bangla)"),
        FieldSpec::textarea("details.en", "Details (English)"),
        FieldSpec::image("image", "Image", "image"),
    ];

    pub const SLIDER_ITEM: &[FieldSpec] = &[
        FieldSpec::image("imageUrl", "Slide image", "image"),
        FieldSpec::link("linkUrl", "Link"),
        FieldSpec::text("title.bn", "Title (Bangla)"),
        FieldSpec::text("title.en", "Title (English)"),
        FieldSpec::number("order", "Order"),
        FieldSpec::toggle("isActive", "Active"),
    ];

    pub const FLOATING_SOCIAL: &[FieldSpec] = &[
        FieldSpec::image("imageUrl", "Icon", "image"),
        FieldSpec::link("linkUrl", "Link"),
        FieldSpec::number("order", "Order"),
        FieldSpec::toggle("isActive", "Active"),
    ];

    pub const BANNER_VIDEO: &[FieldSpec] = &[
        FieldSpec::text("titleBn", "Title (Bangla)"),
        FieldSpec::text("titleEn", "Title (English)"),
        FieldSpec::link("videoUrl", "Video link"),
        FieldSpec::image("thumbnailUrl", "Thumbnail", "thumbnail"),
        FieldSpec::number("order", "Order"),
        FieldSpec::toggle("isActive", "Active"),
    ];
}
