use leptos::prelude::*;

use crate::frontend::components::{ActionButton, Button, ButtonVariant, FilePicker};
use crate::models::{AffWhyUs, Resource};

use super::editor::{bound_text, EditorCard, Loading};
use super::state::DocState;

fn items_editor(doc: RwSignal<AffWhyUs>) -> impl IntoView {
    let count = Memo::new(move |_| doc.with(|d| d.items.len()));
    move || {
        (0..count.get())
            .map(|i| {
                view! {
                    <div class="p-4 rounded-lg bg-slate-800/40 space-y-3">
                        <div class="flex items-center justify-between">
                            <span class="text-sm text-slate-400">{format!("Item {}", i + 1)}</span>
                            <ActionButton on_click=move || { doc.update(|d| { d.remove_item(i); }); } variant=ButtonVariant::Danger>
                                "Remove"
                            </ActionButton>
                        </div>
                        <FilePicker
                            base=AffWhyUs::PATH
                            field=AffWhyUs::icon_field(i)
                            current=Signal::derive(move || doc.with(|d| d.items.get(i).map(|it| it.icon_url.clone()).unwrap_or_default()))
                            on_uploaded=Callback::new(move |url: String| doc.update(|d| {
                                if let Some(it) = d.items.get_mut(i) {
                                    it.icon_url = url;
                                }
                            }))
                        />
                        <div class="grid grid-cols-2 gap-3">
                            {item_text!(doc, AffWhyUs, "Title (BN)", items[i].title.bn)}
                            {item_text!(doc, AffWhyUs, "Title (EN)", items[i].title.en)}
                            {item_text!(doc, AffWhyUs, "Description (BN)", items[i].desc.bn)}
                            {item_text!(doc, AffWhyUs, "Description (EN)", items[i].desc.en)}
                        </div>
                    </div>
                }
            })
            .collect_view()
    }
}

#[component]
pub fn WhyUsPage() -> impl IntoView {
    let state = DocState::<AffWhyUs>::mount(AffWhyUs::PATH);
    let doc = state.doc;
    let loading = state.loading;
    let saving = state.saving;

    let on_submit = {
        let state = state.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            state.save(None);
        }
    };

    view! {
        <EditorCard title="Affiliate why us">
            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <form on:submit=on_submit.clone() class="space-y-5">
                    <div class="grid grid-cols-2 gap-3">
                        {bound_text(doc, "Section title (BN)", |d: &AffWhyUs| d.title_bn.clone(), |d: &mut AffWhyUs, v| d.title_bn = v)}
                        {bound_text(doc, "Section title (EN)", |d: &AffWhyUs| d.title_en.clone(), |d: &mut AffWhyUs, v| d.title_en = v)}
                    </div>
                    {items_editor(doc)}
                    <ActionButton on_click=move || { doc.update(|d| { d.add_item(); }); } variant=ButtonVariant::Ghost>
                        "Add item"
                    </ActionButton>
                    <div>
                        <Button loading=saving>"Save"</Button>
                    </div>
                </form>
            </Show>
        </EditorCard>
    }
}
