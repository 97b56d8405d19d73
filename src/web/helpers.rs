use actix_web::HttpResponse;
use askama::Template;

use affpress::models::Lang;

pub fn render<T: Template>(t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Template error: {}", e);
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(format!("Template error: {e}"))
        }
    }
}

/// `?lang=` value, or `default` when missing or unknown.
pub fn query_lang(raw: Option<&str>, default: Lang) -> Lang {
    raw.and_then(|s| s.parse().ok()).unwrap_or(default)
}

/// Category filter from the query string. Blank means none.
pub fn query_category(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}
