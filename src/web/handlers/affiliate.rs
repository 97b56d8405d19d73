use actix_web::{get, web, Responder};
use serde::Deserialize;

use affpress::views::AffiliatePage;

use crate::web::helpers::{query_category, query_lang, render};
use crate::web::state::AppState;
use crate::web::templates::AffiliateTemplate;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    lang: Option<String>,
    category: Option<String>,
}

/// Landing page rendered from the cached backend documents. Sections the
/// backend cannot serve render their built-in content.
#[get("/")]
pub async fn landing(state: web::Data<AppState>, query: web::Query<PageQuery>) -> impl Responder {
    let lang = query_lang(query.lang.as_deref(), state.config.default_lang);
    let category = query_category(query.category.as_deref());
    log::debug!("Rendering affiliate page lang={} category={:?}", lang, category);

    let page = AffiliatePage::load(&state.api, &state.cache, lang, category).await;
    render(AffiliateTemplate::new(page))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(landing);
}
