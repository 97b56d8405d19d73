use leptos::prelude::*;

use crate::frontend::components::{ActionButton, Button, ButtonVariant};
use crate::models::{AffCommissionConfig, Bilingual, Lang, Resource};
use crate::services::Validate;

use super::editor::{bound_lines, bound_text, bound_toggle, confirm, EditorCard, Loading};
use super::state::ListState;

type Doc = AffCommissionConfig;

fn bilingual(
    doc: RwSignal<Doc>,
    label: &'static str,
    field: fn(&Doc) -> &Bilingual<String>,
    field_mut: fn(&mut Doc) -> &mut Bilingual<String>,
) -> impl IntoView {
    let pair = |lang: Lang| {
        bound_text(
            doc,
            format!("{label} ({})", lang.as_str().to_uppercase()),
            move |d: &Doc| field(d).get(lang).clone(),
            move |d: &mut Doc, v| *field_mut(d).get_mut(lang) = v,
        )
    };
    view! { <div class="grid grid-cols-2 gap-3">{pair(Lang::Bn)}{pair(Lang::En)}</div> }
}

fn lines(
    doc: RwSignal<Doc>,
    label: &'static str,
    field: fn(&Doc) -> &Bilingual<Vec<String>>,
    field_mut: fn(&mut Doc) -> &mut Bilingual<Vec<String>>,
) -> impl IntoView {
    let pair = |lang: Lang| {
        bound_lines(
            doc,
            format!("{label} ({}, one per line)", lang.as_str().to_uppercase()),
            move |d: &Doc| field(d).get(lang),
            move |d: &mut Doc| field_mut(d).get_mut(lang),
        )
    };
    view! { <div class="grid grid-cols-2 gap-3">{pair(Lang::Bn)}{pair(Lang::En)}</div> }
}

fn rows_editor(doc: RwSignal<Doc>) -> impl IntoView {
    let count = Memo::new(move |_| doc.with(|d| d.rows.len()));
    move || {
        (0..count.get())
            .map(|i| {
                view! {
                    <div class="grid grid-cols-4 gap-2 p-3 rounded-lg bg-slate-800/40">
                        {item_text!(doc, Doc, "Level", rows[i].level)}
                        {item_text!(doc, Doc, "New reg (BN)", rows[i].new_reg.bn)}
                        {item_text!(doc, Doc, "New reg (EN)", rows[i].new_reg.en)}
                        {item_text!(doc, Doc, "Base", rows[i].base)}
                        {item_text!(doc, Doc, "Extra", rows[i].extra)}
                        {item_text!(doc, Doc, "Need (BN)", rows[i].need.bn)}
                        {item_text!(doc, Doc, "Need (EN)", rows[i].need.en)}
                        {item_text!(doc, Doc, "Total", rows[i].total)}
                        <ActionButton on_click=move || { doc.update(|d| { d.remove_row(i); }); } variant=ButtonVariant::Danger>
                            "Remove row"
                        </ActionButton>
                    </div>
                }
            })
            .collect_view()
    }
}

fn example_editor(doc: RwSignal<Doc>) -> impl IntoView {
    let count = Memo::new(move |_| doc.with(|d| d.ex_rows.len()));
    move || {
        (0..count.get())
            .map(|i| {
                view! {
                    <div class="grid grid-cols-5 gap-2 p-3 rounded-lg bg-slate-800/40">
                        {item_text!(doc, Doc, "Label (BN)", ex_rows[i].label.bn)}
                        {item_text!(doc, Doc, "Label (EN)", ex_rows[i].label.en)}
                        {item_text!(doc, Doc, "Amount", ex_rows[i].amount)}
                        {item_text!(doc, Doc, "Rate", ex_rows[i].rate)}
                        {item_text!(doc, Doc, "Result", ex_rows[i].result)}
                        <ActionButton on_click=move || { doc.update(|d| { d.remove_example_row(i); }); } variant=ButtonVariant::Danger>
                            "Remove"
                        </ActionButton>
                    </div>
                }
            })
            .collect_view()
    }
}

fn bullets_editor(doc: RwSignal<Doc>) -> impl IntoView {
    let count = Memo::new(move |_| doc.with(|d| d.bullets.bn.len().min(d.bullets.en.len())));
    move || {
        (0..count.get())
            .map(|i| {
                view! {
                    <div class="grid grid-cols-[1fr_1fr_auto] gap-2 items-end">
                        {bound_text(doc, "Bullet (BN)", move |d: &Doc| d.bullets.bn.get(i).cloned().unwrap_or_default(), move |d: &mut Doc, v| {
                            if let Some(b) = d.bullets.bn.get_mut(i) { *b = v; }
                        })}
                        {bound_text(doc, "Bullet (EN)", move |d: &Doc| d.bullets.en.get(i).cloned().unwrap_or_default(), move |d: &mut Doc, v| {
                            if let Some(b) = d.bullets.en.get_mut(i) { *b = v; }
                        })}
                        <ActionButton on_click=move || { doc.update(|d| { d.remove_bullet(i); }); } variant=ButtonVariant::Danger>
                            "×"
                        </ActionButton>
                    </div>
                }
            })
            .collect_view()
    }
}

fn config_form(doc: RwSignal<Doc>) -> impl IntoView {
    view! {
        {bound_text(doc, "Config name", |d: &Doc| d.name.clone(), |d: &mut Doc, v| d.name = v)}
        {bound_toggle(doc, "Active on the public site", |d: &Doc| d.is_active, |d: &mut Doc, v| d.is_active = v)}

        <h2 class="text-lg font-semibold text-white pt-4">"Table"</h2>
        {bilingual(doc, "Section title", |d| &d.section_title, |d| &mut d.section_title)}
        {lines(doc, "Headers", |d| &d.th, |d| &mut d.th)}
        {rows_editor(doc)}
        <ActionButton on_click=move || { doc.update(|d| { d.add_row(); }); } variant=ButtonVariant::Ghost>"Add row"</ActionButton>

        <h2 class="text-lg font-semibold text-white pt-4">"Explanation"</h2>
        {bilingual(doc, "Modal title", |d| &d.modal_title, |d| &mut d.modal_title)}
        {bullets_editor(doc)}
        <ActionButton on_click=move || doc.update(|d| d.add_bullet()) variant=ButtonVariant::Ghost>"Add bullet"</ActionButton>
        {bilingual(doc, "Formula title", |d| &d.formula_title, |d| &mut d.formula_title)}
        {lines(doc, "Formula labels", |d| &d.formula_labels, |d| &mut d.formula_labels)}

        <h2 class="text-lg font-semibold text-white pt-4">"Example"</h2>
        {bilingual(doc, "Example title", |d| &d.example_title, |d| &mut d.example_title)}
        {lines(doc, "Example headers", |d| &d.ex_th, |d| &mut d.ex_th)}
        {example_editor(doc)}
        <ActionButton on_click=move || { doc.update(|d| { d.add_example_row(); }); } variant=ButtonVariant::Ghost>"Add example row"</ActionButton>
        {bilingual(doc, "Total label", |d| &d.ex_total_label, |d| &mut d.ex_total_label)}
        {bound_text(doc, "Total", |d: &Doc| d.ex_total.clone(), |d: &mut Doc, v| d.ex_total = v)}
        {bilingual(doc, "Close button", |d| &d.close, |d| &mut d.close)}
    }
}

/// Commission configs: several may exist, the active one is public.
#[component]
pub fn CommissionPage() -> impl IntoView {
    let state = ListState::<Doc>::mount(Doc::PATH, None);
    let editing = RwSignal::new(false);
    let doc = RwSignal::new(Doc::default());

    let items = state.items;
    let loading = state.loading;
    let saving = state.saving;

    let on_submit = {
        let state = state.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            state.save_item(doc.get_untracked(), Some(Doc::validate), move || editing.set(false));
        }
    };

    let list = {
        let state = state.clone();
        move || {
            items
                .get()
                .into_iter()
                .map(|config| {
                    let id = config.id().unwrap_or_default().to_string();
                    let name = if config.name.is_empty() { "Untitled".to_string() } else { config.name.clone() };
                    let active = config.is_active;
                    let state = state.clone();
                    let edit = move || {
                        doc.set(config.clone());
                        editing.set(true);
                    };
                    view! {
                        <li class="flex items-center justify-between py-3">
                            <span class="text-slate-200">
                                {name}
                                {active.then(|| view! { <span class="ml-2 text-xs text-emerald-400">"active"</span> })}
                            </span>
                            <div class="flex gap-2">
                                <ActionButton on_click=edit variant=ButtonVariant::Ghost>"Edit"</ActionButton>
                                <ActionButton
                                    on_click=move || {
                                        if confirm("Delete this commission config?") {
                                            state.delete_item(id.clone());
                                        }
                                    }
                                    variant=ButtonVariant::Danger
                                >
                                    "Delete"
                                </ActionButton>
                            </div>
                        </li>
                    }
                })
                .collect_view()
        }
    };

    let add = move || {
        doc.set(Doc::default());
        editing.set(true);
    };

    view! {
        <EditorCard title="Affiliate commission">
            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <div class="flex justify-end">
                    <ActionButton on_click=add>"New config"</ActionButton>
                </div>
                <ul class="divide-y divide-slate-800">{list.clone()}</ul>
            </Show>
            <Show when=move || editing.get()>
                <form on:submit=on_submit.clone() class="space-y-4 pt-6 border-t border-slate-800">
                    {config_form(doc)}
                    <div class="flex gap-3">
                        <Button loading=saving>"Save config"</Button>
                        <ActionButton on_click=move || editing.set(false) variant=ButtonVariant::Ghost>"Cancel"</ActionButton>
                    </div>
                </form>
            </Show>
        </EditorCard>
    }
}
