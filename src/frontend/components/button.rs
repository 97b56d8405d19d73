use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
    Danger,
}

fn classes(variant: ButtonVariant) -> String {
    let base_classes = "inline-flex items-center justify-center px-5 py-2.5 text-sm font-semibold rounded-lg transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-slate-950";

    let variant_classes = match variant {
        ButtonVariant::Primary => "bg-gradient-to-r from-amber-500 to-yellow-500 text-slate-950 hover:from-amber-600 hover:to-yellow-600 focus:ring-amber-500",
        ButtonVariant::Ghost => "border border-slate-700 text-slate-300 hover:border-slate-500 hover:text-white hover:bg-slate-800/50 focus:ring-slate-500",
        ButtonVariant::Danger => "border border-red-500/40 text-red-400 hover:bg-red-500/10 focus:ring-red-500",
    };

    format!(
        "{} {} disabled:opacity-50 disabled:cursor-not-allowed",
        base_classes, variant_classes
    )
}

/// Submit button with a spinner while `loading` is true.
#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] loading: Signal<bool>,
    #[prop(optional, into)] loading_text: String,
    #[prop(optional, into)] button_type: String,
) -> impl IntoView {
    let loading_text = if loading_text.is_empty() {
        "Saving...".to_string()
    } else {
        loading_text
    };

    let button_type = if button_type.is_empty() {
        "submit".to_string()
    } else {
        button_type
    };

    view! {
        <button type=button_type class=classes(variant) disabled=move || loading.get()>
            <span class="flex items-center justify-center gap-2" class:hidden=move || !loading.get()>
                <span class="w-4 h-4 border-2 border-white/30 border-t-white rounded-full animate-spin"></span>
                {loading_text}
            </span>
            <span class="flex items-center gap-2" class:hidden=move || loading.get()>
                {children()}
            </span>
        </button>
    }
}

/// Plain click button.
#[component]
pub fn ActionButton<F>(
    children: Children,
    on_click: F,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <button
            type="button"
            class=classes(variant)
            disabled=move || disabled.get()
            on:click=move |_| on_click()
        >
            {children()}
        </button>
    }
}
