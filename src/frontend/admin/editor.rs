//! Generic editors for flat documents and flat list resources, driven by a
//! field schema.

use leptos::prelude::*;
use serde_json::Value;

use crate::common::ValidationErrors;
use crate::frontend::components::{ActionButton, Button, ButtonVariant, LiveInput, SchemaField};
use crate::frontend::use_app;
use crate::models::Resource;
use crate::services::forms::{from_form, to_form, FieldSpec};
use crate::services::move_item;

use super::state::{field_error, Check, DocState, ListState};

pub fn confirm(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or(false)
}

#[component]
pub fn EditorCard(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section class="max-w-3xl">
            <h1 class="text-2xl font-bold text-white mb-6">{title}</h1>
            <div class="p-6 rounded-2xl bg-slate-900/60 border border-slate-800 space-y-5">
                {children()}
            </div>
        </section>
    }
}

#[component]
pub fn Loading() -> impl IntoView {
    view! { <p class="text-slate-500 text-sm">"Loading..."</p> }
}

fn schema_fields(
    fields: &'static [FieldSpec],
    form: RwSignal<Value>,
    base: &str,
    errors: RwSignal<ValidationErrors>,
) -> impl IntoView {
    fields
        .iter()
        .map(|field| {
            view! { <SchemaField field=*field form=form base=base.to_string() error=field_error(errors, field.path) /> }
        })
        .collect_view()
}

/// Editor for a singleton config document at `path`.
pub fn document_editor<R: Resource>(
    title: &'static str,
    path: &'static str,
    fields: &'static [FieldSpec],
    check: Option<Check<R>>,
) -> impl IntoView {
    let app = use_app();
    let state = DocState::<R>::mount(path);
    let form = RwSignal::new(to_form(&R::default()));

    let doc = state.doc;
    Effect::new(move |_| form.set(to_form(&doc.get())));

    let errors = state.errors;

    let on_submit = {
        let state = state.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            match from_form::<R>(&form.get_untracked()) {
                Ok(mut parsed) => {
                    parsed.set_id(state.doc.with_untracked(|d| d.id().map(str::to_string)));
                    state.doc.set(parsed);
                    state.save(check);
                }
                Err(e) => {
                    log::error!("Form of {} does not match its document: {}", path, e);
                    app.notifier.error("Invalid form data");
                    app.sync_toasts();
                }
            }
        }
    };

    let delete = {
        let state = state.clone();
        Callback::new(move |()| {
            if confirm(&format!("Delete this {}?", R::LABEL.to_lowercase())) {
                state.delete();
            }
        })
    };

    let loading = state.loading;
    let saving = state.saving;
    let saved = state.saved;

    view! {
        <EditorCard title=title>
            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <form on:submit=on_submit.clone() class="space-y-5">
                    {schema_fields(fields, form, path, errors)}
                    <div class="flex gap-3 pt-2">
                        <Button loading=saving>
                            {move || if saved.get() { "Update" } else { "Create" }}
                        </Button>
                        <Show when=move || saved.get()>
                            <ActionButton on_click=move || delete.run(()) variant=ButtonVariant::Danger disabled=saving>
                                "Delete"
                            </ActionButton>
                        </Show>
                    </div>
                </form>
            </Show>
        </EditorCard>
    }
}

/// Per-resource settings of a [`collection_editor`].
pub struct CollectionOptions<R> {
    pub new_item: fn() -> R,
    pub summary: fn(&R) -> String,
    /// Read and write the numeric display order; enables the arrows.
    pub order: Option<(fn(&R) -> i64, fn(&mut R, i64))>,
    pub sort: Option<fn(&mut [R])>,
    pub check: Option<Check<R>>,
}

/// Editor for a list resource at `path`: item list plus one item form.
pub fn collection_editor<R: Resource>(
    title: &'static str,
    path: &'static str,
    fields: &'static [FieldSpec],
    options: CollectionOptions<R>,
) -> impl IntoView {
    let app = use_app();
    let state = ListState::<R>::mount(path, options.sort);
    let CollectionOptions {
        new_item,
        summary,
        order,
        check,
        ..
    } = options;

    let editing = RwSignal::new(false);
    let form = RwSignal::new(Value::Null);

    let errors = state.errors;
    let items = state.items;
    let add = move || {
        let mut item = new_item();
        if let Some((get, set)) = order {
            let next = items.with(|list| list.iter().map(get).max().map_or(0, |o| o + 1));
            set(&mut item, next);
        }
        form.set(to_form(&item));
        editing.set(true);
    };

    let on_submit = {
        let state = state.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            match from_form::<R>(&form.get_untracked()) {
                Ok(item) => state.save_item(item, check, move || editing.set(false)),
                Err(e) => {
                    log::error!("Item form of {} does not match its document: {}", path, e);
                    app.notifier.error("Invalid form data");
                    app.sync_toasts();
                }
            }
        }
    };

    let move_to = {
        let state = state.clone();
        move |idx: usize, up: bool| {
            let Some((_, set)) = order else { return };
            let mut list = items.get_untracked();
            if move_item(&mut list, idx, up, set) {
                items.set(list.clone());
                state.save_all(list);
            }
        }
    };

    let remove = {
        let state = state.clone();
        move |id: String| {
            if confirm(&format!("Delete this {}?", R::LABEL.to_lowercase())) {
                state.delete_item(id);
            }
        }
    };

    let loading = state.loading;
    let saving = state.saving;

    let rows = move || {
        let count = items.with(Vec::len);
        items
            .get()
            .into_iter()
            .enumerate()
            .map(|(idx, item)| {
                let label = summary(&item);
                let id = item.id().unwrap_or_default().to_string();
                let edit = move || {
                    form.set(to_form(&item));
                    editing.set(true);
                };
                let move_to = move_to.clone();
                let move_down = move_to.clone();
                let remove = remove.clone();
                view! {
                    <li class="flex items-center justify-between gap-4 py-3">
                        <span class="text-slate-200 truncate">{label}</span>
                        <div class="flex gap-2">
                            {order.map(|_| view! {
                                <ActionButton on_click=move || move_to(idx, true) variant=ButtonVariant::Ghost disabled=Signal::derive(move || idx == 0)>"↑"</ActionButton>
                                <ActionButton on_click=move || move_down(idx, false) variant=ButtonVariant::Ghost disabled=Signal::derive(move || idx + 1 >= count)>"↓"</ActionButton>
                            })}
                            <ActionButton on_click=edit variant=ButtonVariant::Ghost>"Edit"</ActionButton>
                            <ActionButton on_click=move || remove(id.clone()) variant=ButtonVariant::Danger disabled=saving>"Delete"</ActionButton>
                        </div>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <EditorCard title=title>
            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <div class="flex justify-between items-center">
                    <p class="text-sm text-slate-400">{move || format!("{} item(s)", items.with(Vec::len))}</p>
                    <ActionButton on_click=add>"Add new"</ActionButton>
                </div>
                <ul class="divide-y divide-slate-800">{rows.clone()}</ul>
            </Show>
            <Show when=move || editing.get()>
                <form on:submit=on_submit.clone() class="space-y-5 pt-6 border-t border-slate-800">
                    {schema_fields(fields, form, path, errors)}
                    <div class="flex gap-3">
                        <Button loading=saving>"Save"</Button>
                        <ActionButton on_click=move || editing.set(false) variant=ButtonVariant::Ghost>"Cancel"</ActionButton>
                    </div>
                </form>
            </Show>
        </EditorCard>
    }
}

/// Text input bound to one field of a typed document.
pub fn bound_text<T, G, S>(doc: RwSignal<T>, label: impl Into<String>, get: G, set: S) -> impl IntoView
where
    T: Send + Sync + 'static,
    G: Fn(&T) -> String + Send + Sync + 'static,
    S: Fn(&mut T, String) + Send + Sync + 'static,
{
    view! {
        <LiveInput
            label=label.into()
            value=Signal::derive(move || doc.with(|d| get(d)))
            on_input=Callback::new(move |v: String| doc.update(|d| set(d, v)))
        />
    }
}

/// Textarea editing a list of strings, one per line.
pub fn bound_lines<T, G, S>(doc: RwSignal<T>, label: impl Into<String>, get: G, set: S) -> impl IntoView
where
    T: Send + Sync + 'static,
    G: Fn(&T) -> &Vec<String> + Send + Sync + 'static,
    S: Fn(&mut T) -> &mut Vec<String> + Send + Sync + 'static,
{
    view! {
        <LiveInput
            label=label.into()
            multiline=true
            value=Signal::derive(move || doc.with(|d| get(d).join("\n")))
            on_input=Callback::new(move |v: String| {
                doc.update(|d| *set(d) = v.split('\n').map(str::to_string).collect())
            })
        />
    }
}

pub fn bound_toggle<T, G, S>(doc: RwSignal<T>, label: &'static str, get: G, set: S) -> impl IntoView
where
    T: Send + Sync + 'static,
    G: Fn(&T) -> bool + Send + Sync + 'static,
    S: Fn(&mut T, bool) + Send + Sync + 'static,
{
    view! {
        <label class="flex items-center gap-2 text-sm text-slate-300">
            <input
                type="checkbox"
                prop:checked=move || doc.with(|d| get(d))
                on:change=move |ev| doc.update(|d| set(d, event_target_checked(&ev)))
            />
            {label}
        </label>
    }
}
