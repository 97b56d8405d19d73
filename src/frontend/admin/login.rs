use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;

use crate::common::ValidationErrors;
use crate::frontend::components::{Button, EmailInput, ErrorAlert, PasswordInput};
use crate::frontend::use_app;
use crate::models::LoginRequest;
use crate::services::{AuthStatus, Validate};

use super::state::field_error;

#[component]
pub fn LoginPage() -> impl IntoView {
    let app = use_app();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(ValidationErrors::new());
    let failure = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);
    let navigate = use_navigate();
    let auth = app.auth;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = LoginRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if let Err(found) = request.validate() {
            errors.set(found);
            return;
        }
        errors.set(ValidationErrors::new());
        failure.set(None);

        let app = app.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            submitting.set(true);
            match app.login(request.email, request.password).await {
                Ok(admin) => {
                    log::info!("Admin {} signed in", admin.email);
                    navigate("/", Default::default());
                }
                Err(e) => failure.set(Some(e.user_message("Login failed"))),
            }
            submitting.set(false);
        });
    };

    view! {
        <Show when=move || auth.with(|s| s.status() == AuthStatus::Authenticated)>
            <Redirect path="/" />
        </Show>
        <div class="min-h-screen flex items-center justify-center bg-slate-950 px-4">
            <div class="w-full max-w-md p-8 rounded-2xl bg-slate-900/80 border border-slate-800">
                <h1 class="text-2xl font-bold text-white mb-1">"Sign in"</h1>
                <p class="text-sm text-slate-400 mb-6">"Back office access for administrators"</p>
                {move || failure.get().map(|message| view! { <ErrorAlert message=message /> })}
                <form on:submit=on_submit class="space-y-5">
                    <EmailInput label="Email" value=email error=field_error(errors, "email") />
                    <PasswordInput label="Password" value=password error=field_error(errors, "password") />
                    <Button loading=submitting loading_text="Signing in...">"Sign in"</Button>
                </form>
            </div>
        </div>
    }
}
