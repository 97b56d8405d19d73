pub mod admin;
pub mod affiliate;
pub mod components;
mod context;

pub use context::*;

use leptos::prelude::*;

/// Build the shared context, or describe why it could not be built.
fn boot() -> Result<AppContext, String> {
    let config = browser_config().map_err(|e| e.to_string())?;
    AppContext::new(&config).map_err(|e| e.to_string())
}

fn init_browser() {
    console_error_panic_hook::set_once();
    // A second mount in the same page keeps the first logger.
    console_log::init_with_level(log::Level::Info).ok();
}

fn mount<V: IntoView + 'static>(app: fn() -> V) {
    init_browser();
    match boot() {
        Ok(ctx) => leptos::mount::mount_to_body(move || {
            provide_context(ctx);
            app()
        }),
        Err(message) => {
            log::error!("Failed to start: {}", message);
            leptos::mount::mount_to_body(move || {
                view! {
                    <div class="min-h-screen flex items-center justify-center bg-slate-950 text-red-300">
                        <p>{format!("Configuration error: {message}")}</p>
                    </div>
                }
            })
        }
    }
}

/// Mount the admin back office.
pub fn start_admin() {
    mount(|| view! { <admin::AdminApp /> });
}

/// Mount the public affiliate site.
pub fn start_affiliate() {
    mount(|| view! { <affiliate::AffiliateApp /> });
}
