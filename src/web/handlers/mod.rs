pub mod affiliate;
pub mod health;
pub mod shells;

use actix_web::web;

/// Register every handler. The admin catch-all goes last.
pub fn configure(cfg: &mut web::ServiceConfig) {
    health::configure(cfg);
    affiliate::configure(cfg);
    shells::configure(cfg);
}
