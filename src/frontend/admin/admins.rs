use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::common::ValidationErrors;
use crate::frontend::components::{ActionButton, Button, ButtonVariant, Checkbox, EmailInput, PasswordInput};
use crate::frontend::use_app;
use crate::models::{Admin, AdminCreate, AdminUpdate, Role};
use crate::services::permissions::keys;
use crate::services::{AdminDirectory, FormError};

use super::editor::{confirm, EditorCard, Loading};
use super::state::field_error;

/// Checkbox list over every permission key.
fn permission_picker(selected: RwSignal<Vec<String>>) -> impl IntoView {
    keys::ALL
        .iter()
        .map(|key| {
            let key = *key;
            let checked = move || selected.with(|s| s.iter().any(|p| p == key));
            let toggle = move |ev: leptos::ev::Event| {
                let on = event_target_checked(&ev);
                selected.update(|s| {
                    s.retain(|p| p != key);
                    if on {
                        s.push(key.to_string());
                    }
                });
            };
            view! {
                <label class="flex items-center gap-2 text-sm text-slate-300">
                    <input type="checkbox" prop:checked=checked on:change=toggle />
                    {key}
                </label>
            }
        })
        .collect_view()
}

#[component]
pub fn AdminsPage() -> impl IntoView {
    let app = use_app();
    let directory = StoredValue::new(AdminDirectory::new(app.client.clone(), app.notifier.clone()));
    let admins = RwSignal::new(Vec::<Admin>::new());
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let mother = RwSignal::new(false);
    let permissions = RwSignal::new(Vec::<String>::new());
    let errors = RwSignal::new(ValidationErrors::new());

    // Id of the admin whose permissions are being edited.
    let editing = RwSignal::new(None::<String>);
    let edit_permissions = RwSignal::new(Vec::<String>::new());

    let reload = {
        let app = app.clone();
        move || {
            let app = app.clone();
            spawn_local(async move {
                loading.set(true);
                let mut dir = directory.get_value();
                let _ = dir.load().await;
                admins.set(dir.admins().to_vec());
                directory.set_value(dir);
                loading.set(false);
                app.sync_toasts();
            });
        }
    };
    reload();

    let on_create = {
        let app = app.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let create = AdminCreate {
                email: email.get_untracked().trim().to_string(),
                password: password.get_untracked(),
                role: if mother.get_untracked() { Role::Mother } else { Role::Sub },
                permissions: permissions.get_untracked(),
            };
            let app = app.clone();
            spawn_local(async move {
                saving.set(true);
                let mut dir = directory.get_value();
                match dir.create(&create).await {
                    Ok(_) => {
                        errors.set(ValidationErrors::new());
                        email.set(String::new());
                        password.set(String::new());
                        permissions.set(Vec::new());
                        mother.set(false);
                    }
                    Err(FormError::Invalid(found)) => errors.set(found),
                    Err(FormError::Api(_)) => {}
                }
                admins.set(dir.admins().to_vec());
                directory.set_value(dir);
                saving.set(false);
                app.sync_toasts();
            });
        }
    };

    let save_permissions = {
        let app = app.clone();
        move || {
            let Some(id) = editing.get_untracked() else { return };
            let update = AdminUpdate {
                permissions: Some(edit_permissions.get_untracked()),
                ..Default::default()
            };
            let app = app.clone();
            spawn_local(async move {
                saving.set(true);
                let mut dir = directory.get_value();
                if dir.update(&id, &update).await.is_ok() {
                    editing.set(None);
                }
                admins.set(dir.admins().to_vec());
                directory.set_value(dir);
                saving.set(false);
                app.sync_toasts();
            });
        }
    };

    let remove = {
        let app = app.clone();
        move |id: String| {
            if !confirm("Delete this admin account?") {
                return;
            }
            let app = app.clone();
            spawn_local(async move {
                let mut dir = directory.get_value();
                let _ = dir.remove(&id).await;
                admins.set(dir.admins().to_vec());
                directory.set_value(dir);
                app.sync_toasts();
            });
        }
    };

    let self_id = app.auth.with_untracked(|s| s.admin.as_ref().and_then(|a| a.id.clone()));

    let rows = move || {
        admins
            .get()
            .into_iter()
            .map(|admin| {
                let id = admin.id.clone().unwrap_or_default();
                let is_self = self_id.as_deref() == Some(id.as_str());
                let perms = admin.permissions.clone();
                let edit_id = id.clone();
                let start_edit = move || {
                    edit_permissions.set(perms.clone());
                    editing.set(Some(edit_id.clone()));
                };
                let remove = remove.clone();
                let summary = if admin.is_mother() {
                    "all permissions".to_string()
                } else {
                    admin.permissions.join(", ")
                };
                view! {
                    <li class="flex items-center justify-between gap-4 py-3">
                        <div>
                            <p class="text-slate-200">{admin.email.clone()}" "<span class="text-xs text-amber-400">{admin.role.as_str()}</span></p>
                            <p class="text-xs text-slate-500">{summary}</p>
                        </div>
                        <Show when=move || !is_self>
                            <div class="flex gap-2">
                                <ActionButton on_click=start_edit.clone() variant=ButtonVariant::Ghost>"Permissions"</ActionButton>
                                <ActionButton on_click={
                                    let remove = remove.clone();
                                    let id = id.clone();
                                    move || remove(id.clone())
                                } variant=ButtonVariant::Danger>"Delete"</ActionButton>
                            </div>
                        </Show>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <EditorCard title="Admins">
            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <ul class="divide-y divide-slate-800">{rows.clone()}</ul>
            </Show>

            <Show when=move || editing.get().is_some()>
                <div class="pt-6 border-t border-slate-800 space-y-4">
                    <h2 class="text-lg font-semibold text-white">"Edit permissions"</h2>
                    <div class="grid grid-cols-3 gap-2">{permission_picker(edit_permissions)}</div>
                    <div class="flex gap-3">
                        <ActionButton on_click=save_permissions.clone() disabled=saving>"Save permissions"</ActionButton>
                        <ActionButton on_click=move || editing.set(None) variant=ButtonVariant::Ghost>"Cancel"</ActionButton>
                    </div>
                </div>
            </Show>

            <form on:submit=on_create class="pt-6 border-t border-slate-800 space-y-4">
                <h2 class="text-lg font-semibold text-white">"New admin"</h2>
                <EmailInput label="Email" value=email error=field_error(errors, "email") />
                <PasswordInput label="Password" value=password error=field_error(errors, "password") />
                <Checkbox label="Mother admin (full access)" value=mother />
                <Show when=move || !mother.get()>
                    <div class="grid grid-cols-3 gap-2">{permission_picker(permissions)}</div>
                </Show>
                {move || errors.with(|e| e.get("permissions").map(str::to_string)).map(|e| view! { <p class="text-xs text-red-400">{e}</p> })}
                <Button loading=saving>"Create admin"</Button>
            </form>
        </EditorCard>
    }
}
