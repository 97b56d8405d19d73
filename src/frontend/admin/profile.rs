use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::common::ValidationErrors;
use crate::frontend::components::{Button, EmailInput, PasswordInput};
use crate::frontend::use_app;
use crate::models::ProfileUpdate;
use crate::services::FormError;

use super::editor::EditorCard;
use super::state::field_error;

fn non_empty(value: String) -> Option<String> {
    let value = value.trim().to_string();
    (!value.is_empty()).then_some(value)
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let app = use_app();
    let current_email = app.auth.with_untracked(|s| s.admin.as_ref().map(|a| a.email.clone()).unwrap_or_default());

    let email = RwSignal::new(current_email);
    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let errors = RwSignal::new(ValidationErrors::new());
    let saving = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let known = app.auth.with_untracked(|s| s.admin.as_ref().map(|a| a.email.clone()).unwrap_or_default());
        let update = ProfileUpdate {
            email: non_empty(email.get_untracked()).filter(|e| *e != known),
            current_password: non_empty(current_password.get_untracked()),
            new_password: non_empty(new_password.get_untracked()),
        };

        let app = app.clone();
        spawn_local(async move {
            saving.set(true);
            match app.save_profile(update).await {
                Ok(_) => {
                    errors.set(ValidationErrors::new());
                    current_password.set(String::new());
                    new_password.set(String::new());
                }
                Err(FormError::Invalid(found)) => errors.set(found),
                Err(FormError::Api(_)) => {}
            }
            saving.set(false);
        });
    };

    view! {
        <EditorCard title="Profile">
            <form on:submit=on_submit class="space-y-5">
                <EmailInput label="Email" value=email error=field_error(errors, "email") />
                <PasswordInput
                    label="Current password"
                    name="currentPassword"
                    value=current_password
                    error=field_error(errors, "currentPassword")
                />
                <PasswordInput
                    label="New password"
                    name="newPassword"
                    hint="Leave empty to keep the current password"
                    value=new_password
                    error=field_error(errors, "newPassword")
                />
                <Button loading=saving>"Save profile"</Button>
            </form>
        </EditorCard>
    }
}
