use leptos::prelude::*;

pub(crate) const INPUT_CLASSES: &str = "w-full px-4 py-2.5 rounded-lg bg-slate-800 border border-slate-700
                       text-white placeholder-slate-500
                       focus:outline-none focus:ring-2 focus:ring-amber-500 focus:border-transparent
                       transition-all";

#[component]
fn FieldError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error
            .get()
            .map(|e| view! { <p class="mt-1 text-xs text-red-400">{e}</p> })
    }
}

#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: String,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] hint: String,
    #[prop(optional, into)] error: Signal<Option<String>>,
    value: RwSignal<String>,
) -> impl IntoView {
    let has_hint = !hint.is_empty();
    let input_type = if input_type.is_empty() {
        "text".to_string()
    } else {
        input_type
    };

    view! {
        <div>
            <label for=name.clone() class="block text-sm font-medium text-slate-300 mb-2">
                {label}
            </label>
            <input
                type=input_type
                id=name.clone()
                name=name
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class=INPUT_CLASSES
            />
            {has_hint.then(|| view! { <p class="mt-1 text-xs text-slate-500">{hint.clone()}</p> })}
            <FieldError error=error />
        </div>
    }
}

#[component]
pub fn EmailInput(
    #[prop(into)] label: String,
    #[prop(optional, into)] error: Signal<Option<String>>,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <TextInput
            label=label
            name="email"
            placeholder="admin@example.com"
            input_type="email"
            required=true
            error=error
            value=value
        />
    }
}

#[component]
pub fn PasswordInput(
    #[prop(into)] label: String,
    #[prop(optional, into)] name: String,
    #[prop(optional, into)] hint: String,
    #[prop(optional, into)] error: Signal<Option<String>>,
    value: RwSignal<String>,
) -> impl IntoView {
    let name = if name.is_empty() { "password".to_string() } else { name };
    view! {
        <TextInput
            label=label
            name=name
            placeholder="••••••••"
            input_type="password"
            hint=hint
            error=error
            value=value
        />
    }
}

#[component]
pub fn Checkbox(#[prop(into)] label: String, value: RwSignal<bool>) -> impl IntoView {
    view! {
        <label class="flex items-center gap-2 text-sm text-slate-300">
            <input
                type="checkbox"
                prop:checked=move || value.get()
                on:change=move |ev| value.set(event_target_checked(&ev))
            />
            {label}
        </label>
    }
}
