use askama::Template;

use affpress::models::Lang;
use affpress::views::AffiliatePage;

/// Server-rendered affiliate landing page.
#[derive(Template)]
#[template(path = "affiliate.html")]
pub struct AffiliateTemplate {
    pub page: AffiliatePage,
    /// Language the toggle switches to.
    pub other_lang: Lang,
    /// Query string prefix that keeps the current language on category links.
    pub lang_query: String,
}

impl AffiliateTemplate {
    pub fn new(page: AffiliatePage) -> Self {
        let other_lang = page.lang.toggled();
        let lang_query = format!("lang={}", page.lang.as_str());
        Self {
            page,
            other_lang,
            lang_query,
        }
    }
}

/// HTML shell that boots one of the wasm apps.
#[derive(Template)]
#[template(path = "shell.html")]
pub struct AppShellTemplate {
    pub title: &'static str,
    /// Exported wasm function that mounts the app.
    pub entry: &'static str,
    pub lang: Lang,
}
