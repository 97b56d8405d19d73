use actix_web::{get, web, HttpResponse, Responder};
use serde_json::json;

use crate::web::state::AppState;

#[get("/healthz")]
pub async fn healthz(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "api": state.api.base_url().as_str(),
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(healthz);
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};
    use affpress::common::AppConfig;

    use super::*;

    #[actix_web::test]
    async fn reports_ok_and_backend() {
        let state = AppState::new(AppConfig::from_lookup(|_| None).unwrap()).unwrap();
        let app = test::init_service(App::new().app_data(web::Data::new(state)).configure(configure)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/healthz").to_request()).await;
        assert!(resp.status().is_success());
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["api"], "http://localhost:5000/");
    }
}
