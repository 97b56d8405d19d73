use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::{File, HtmlInputElement};

use crate::api::FilePart;
use crate::frontend::use_app;
use crate::services::forms::{display_value, is_checked, parse_input, set_path, FieldKind, FieldSpec};
use crate::services::{upload_to, BrowserObjectUrls, PreviewSlot};

use super::input::INPUT_CLASSES;

pub const IMAGE_ACCEPT: &str = "image/*";

pub async fn read_file(file: &File) -> Result<Vec<u8>, JsValue> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// One input bound to `path` of a JSON form.
#[component]
pub fn SchemaField(
    field: FieldSpec,
    form: RwSignal<Value>,
    /// Resource base path; uploads go to `<base>/upload`.
    #[prop(into)]
    base: String,
    #[prop(optional, into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let path = field.path;
    let parse_error = RwSignal::new(None::<String>);
    let text = move || form.with(|f| display_value(f, path));
    let on_text = move |raw: String| match parse_input(field.kind, &raw) {
        Ok(v) => {
            parse_error.set(None);
            form.update(|f| set_path(f, path, v));
        }
        Err(msg) => parse_error.set(Some(msg)),
    };

    let input = match field.kind {
        FieldKind::Text | FieldKind::Link | FieldKind::Number => {
            let input_type = match field.kind {
                FieldKind::Number => "number",
                FieldKind::Link => "url",
                _ => "text",
            };
            view! {
                <input
                    type=input_type
                    id=path
                    prop:value=text
                    on:input=move |ev| on_text(event_target_value(&ev))
                    class=INPUT_CLASSES
                />
            }
            .into_any()
        }
        FieldKind::TextArea => view! {
            <textarea id=path rows="3" prop:value=text on:input=move |ev| on_text(event_target_value(&ev)) class=INPUT_CLASSES></textarea>
        }
        .into_any(),
        FieldKind::Color => view! {
            <div class="flex items-center gap-3">
                <input type="color" prop:value=text on:input=move |ev| on_text(event_target_value(&ev)) />
                <input type="text" id=path prop:value=text on:input=move |ev| on_text(event_target_value(&ev)) class=INPUT_CLASSES />
            </div>
        }
        .into_any(),
        FieldKind::Toggle => view! {
            <input
                type="checkbox"
                id=path
                prop:checked=move || form.with(|f| is_checked(f, path))
                on:change=move |ev| form.update(|f| set_path(f, path, Value::Bool(event_target_checked(&ev))))
            />
        }
        .into_any(),
        FieldKind::Upload { field: upload_field, accept } => view! {
            <FilePicker
                base=base
                field=upload_field
                accept=accept
                current=Signal::derive(move || form.with(|f| display_value(f, path)))
                on_uploaded=Callback::new(move |url: String| form.update(|f| set_path(f, path, Value::String(url))))
            />
        }
        .into_any(),
    };

    view! {
        <div>
            <label for=path class="block text-sm font-medium text-slate-300 mb-2">{field.label}</label>
            {input}
            {move || {
                parse_error
                    .get()
                    .or_else(|| error.get())
                    .map(|e| view! { <p class="mt-1 text-xs text-red-400">{e}</p> })
            }}
        </div>
    }
}

/// Text input over a typed value, for nested editors.
#[component]
pub fn LiveInput(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let input = if multiline {
        view! {
            <textarea rows="2" prop:value=move || value.get() on:input=move |ev| on_input.run(event_target_value(&ev)) class=INPUT_CLASSES></textarea>
        }
        .into_any()
    } else {
        view! {
            <input type="text" prop:value=move || value.get() on:input=move |ev| on_input.run(event_target_value(&ev)) class=INPUT_CLASSES />
        }
        .into_any()
    };

    view! {
        <label class="block">
            <span class="block text-xs font-medium text-slate-400 mb-1">{label}</span>
            {input}
        </label>
    }
}

/// File input with a local preview. The chosen file is uploaded to
/// `<base>/upload` under `field` right away and the answered URL handed
/// to `on_uploaded`. Preview URLs are revoked when replaced and on unmount.
#[component]
pub fn FilePicker(
    #[prop(into)] base: String,
    #[prop(into)] field: String,
    #[prop(optional)] accept: Option<&'static str>,
    /// Stored URL shown until a new file is picked.
    #[prop(into)]
    current: Signal<String>,
    on_uploaded: Callback<String>,
) -> impl IntoView {
    let app = use_app();
    let preview = StoredValue::new_local(PreviewSlot::new(BrowserObjectUrls));
    let preview_url = RwSignal::new(None::<String>);
    let uploading = RwSignal::new(false);
    let target = StoredValue::new((base, field));

    on_cleanup(move || {
        preview.try_update_value(|slot| slot.clear());
    });

    let shown = {
        let client = app.client.clone();
        move || {
            preview_url
                .get()
                .unwrap_or_else(|| client.asset_url(&current.get()))
        }
    };

    let on_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|list| list.get(0)) else {
            return;
        };
        let url = preview
            .try_update_value(|slot| slot.replace(&file).map(str::to_string))
            .flatten();
        preview_url.set(url);

        let app = app.clone();
        spawn_local(async move {
            uploading.set(true);
            let (base, field) = target.get_value();
            match read_file(&file).await {
                Ok(bytes) => {
                    let mime = file.type_();
                    let mut part = FilePart::new(field, file.name(), bytes);
                    if !mime.is_empty() {
                        part = part.with_mime(mime);
                    }
                    if let Ok(url) = upload_to(&app.client, &app.notifier, &base, vec![part]).await {
                        on_uploaded.run(url);
                    }
                }
                Err(e) => {
                    log::error!("Reading {} failed: {:?}", file.name(), e);
                    app.notifier.error("Could not read the selected file");
                }
            }
            uploading.set(false);
            app.sync_toasts();
        });
    };

    view! {
        <div class="flex items-center gap-4">
            {move || {
                let src = shown();
                (!src.is_empty()).then(|| view! { <img src=src class="h-16 w-16 object-cover rounded border border-slate-700" /> })
            }}
            <input type="file" accept=accept.unwrap_or(IMAGE_ACCEPT) on:change=on_change class="text-sm text-slate-400" />
            <Show when=move || uploading.get()>
                <span class="text-xs text-amber-400">"Uploading..."</span>
            </Show>
        </div>
    }
}
