use actix_web::{get, web, Responder};

use crate::web::helpers::render;
use crate::web::state::AppState;
use crate::web::templates::AppShellTemplate;

fn admin_shell(state: &AppState) -> AppShellTemplate {
    AppShellTemplate {
        title: "Admin",
        entry: "start_admin",
        lang: state.config.default_lang,
    }
}

#[get("/admin")]
pub async fn admin_root(state: web::Data<AppState>) -> impl Responder {
    render(admin_shell(&state))
}

/// Client-side routes of the back office all boot the same shell.
#[get("/admin/{tail:.*}")]
pub async fn admin_any(state: web::Data<AppState>) -> impl Responder {
    render(admin_shell(&state))
}

/// The affiliate page as a client-rendered app.
#[get("/app")]
pub async fn affiliate_app(state: web::Data<AppState>) -> impl Responder {
    render(AppShellTemplate {
        title: "Affiliate",
        entry: "start_affiliate",
        lang: state.config.default_lang,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(admin_root).service(affiliate_app).service(admin_any);
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};
    use affpress::common::AppConfig;

    use super::*;

    #[actix_web::test]
    async fn admin_deep_links_boot_the_admin_app() {
        let state = AppState::new(AppConfig::from_lookup(|_| None).unwrap()).unwrap();
        let app = test::init_service(App::new().app_data(web::Data::new(state)).configure(configure)).await;

        for uri in ["/admin", "/admin/aff-notice", "/admin/promotions"] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert!(resp.status().is_success(), "{uri}");
            let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
            assert!(body.contains("start_admin"), "{uri}");
        }
    }
}
