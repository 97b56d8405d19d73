use leptos::prelude::*;

use crate::frontend::components::{ActionButton, Button, ButtonVariant, FilePicker};
use crate::models::{Footer, FooterSection, FooterTexts, Lang, Resource, AFF_FOOTER_PATH};

use super::editor::{bound_text, confirm, EditorCard, Loading};
use super::state::DocState;

fn texts_editor(doc: RwSignal<Footer>, lang: Lang) -> impl IntoView {
    let suffix = lang.as_str().to_uppercase();
    let field = move |label: &str, get: fn(&FooterTexts) -> &String, set: fn(&mut FooterTexts) -> &mut String| {
        bound_text(
            doc,
            format!("{label} ({suffix})"),
            move |d: &Footer| get(d.texts.get(lang)).clone(),
            move |d: &mut Footer, v| *set(d.texts.get_mut(lang)) = v,
        )
    };

    view! {
        <div class="space-y-3">
            {field("About", |t| &t.about, |t| &mut t.about)}
            {field("Copyright", |t| &t.copyright, |t| &mut t.copyright)}
            {field("Ambassadors title", |t| &t.ambassadors_title, |t| &mut t.ambassadors_title)}
            {field("Sponsors title", |t| &t.sponsors_title, |t| &mut t.sponsors_title)}
            {field("Payments title", |t| &t.payments_title, |t| &mut t.payments_title)}
            {field("Responsible gaming title", |t| &t.responsible_title, |t| &mut t.responsible_title)}
        </div>
    }
}

fn section_editor(doc: RwSignal<Footer>, base: String, section: FooterSection) -> impl IntoView {
    let count = Memo::new(move |_| doc.with(|d| d.items(section).len()));
    let items = move || {
        (0..count.get())
            .map(|i| {
                let has_season = doc.with_untracked(|d| d.items(section).get(i).is_some_and(|it| it.season.is_some()));
                let name = bound_text(
                    doc,
                    "Name",
                    move |d: &Footer| d.items(section).get(i).map(|it| it.name.clone()).unwrap_or_default(),
                    move |d: &mut Footer, v| {
                        if let Some(it) = d.items_mut(section).get_mut(i) {
                            it.name = v;
                        }
                    },
                );
                let season = has_season.then(|| {
                    bound_text(
                        doc,
                        "Season",
                        move |d: &Footer| {
                            d.items(section).get(i).and_then(|it| it.season.clone()).unwrap_or_default()
                        },
                        move |d: &mut Footer, v| {
                            if let Some(it) = d.items_mut(section).get_mut(i) {
                                it.season = Some(v);
                            }
                        },
                    )
                });
                view! {
                    <div class="grid grid-cols-[1fr_1fr_auto_auto] gap-3 items-end p-3 rounded-lg bg-slate-800/40">
                        {name}
                        {season}
                        <FilePicker
                            base=base.clone()
                            field="img"
                            current=Signal::derive(move || doc.with(|d| d.items(section).get(i).map(|it| it.img.clone()).unwrap_or_default()))
                            on_uploaded=Callback::new(move |url: String| doc.update(|d| {
                                if let Some(it) = d.items_mut(section).get_mut(i) {
                                    it.img = url;
                                }
                            }))
                        />
                        <ActionButton on_click=move || { doc.update(|d| { d.remove_item(section, i); }); } variant=ButtonVariant::Danger>
                            "Remove"
                        </ActionButton>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="space-y-3">
            <h3 class="text-md font-semibold text-white capitalize">{section.as_str()}</h3>
            {items}
            <ActionButton on_click=move || { doc.update(|d| { d.add_item(section); }); } variant=ButtonVariant::Ghost>
                "Add item"
            </ActionButton>
        </div>
    }
}

fn footer_editor(title: &'static str, path: &'static str) -> impl IntoView {
    let state = DocState::<Footer>::mount(path);
    let doc = state.doc;
    let loading = state.loading;
    let saving = state.saving;
    let saved = state.saved;

    let on_submit = {
        let state = state.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            state.save(None);
        }
    };
    let delete = {
        let state = state.clone();
        Callback::new(move |()| {
            if confirm("Delete the footer? The site falls back to built-in content.") {
                state.delete();
            }
        })
    };

    let social = |label: &'static str, get: fn(&Footer) -> &String, set: fn(&mut Footer) -> &mut String| {
        bound_text(doc, label, move |d: &Footer| get(d).clone(), move |d: &mut Footer, v| *set(d) = v)
    };

    view! {
        <EditorCard title=title>
            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <form on:submit=on_submit.clone() class="space-y-6">
                    <div>
                        <span class="block text-sm font-medium text-slate-300 mb-2">"Logo"</span>
                        <FilePicker
                            base=path
                            field="logo"
                            current=Signal::derive(move || doc.with(|d| d.logo.clone()))
                            on_uploaded=Callback::new(move |url: String| doc.update(|d| d.logo = url))
                        />
                    </div>
                    <div class="grid grid-cols-2 gap-6">
                        {texts_editor(doc, Lang::Bn)}
                        {texts_editor(doc, Lang::En)}
                    </div>
                    <div class="grid grid-cols-2 gap-3">
                        {social("Facebook", |d| &d.social.facebook, |d| &mut d.social.facebook)}
                        {social("YouTube", |d| &d.social.youtube, |d| &mut d.social.youtube)}
                        {social("Instagram", |d| &d.social.instagram, |d| &mut d.social.instagram)}
                        {social("Twitter", |d| &d.social.twitter, |d| &mut d.social.twitter)}
                        {social("Telegram", |d| &d.social.telegram, |d| &mut d.social.telegram)}
                    </div>
                    {FooterSection::ALL.into_iter().map(|section| section_editor(doc, path.to_string(), section)).collect_view()}
                    <div class="flex gap-3">
                        <Button loading=saving>{move || if saved.get() { "Update footer" } else { "Create footer" }}</Button>
                        <Show when=move || saved.get()>
                            <ActionButton on_click=move || delete.run(()) variant=ButtonVariant::Danger>"Delete"</ActionButton>
                        </Show>
                    </div>
                </form>
            </Show>
        </EditorCard>
    }
}

#[component]
pub fn FooterPage() -> impl IntoView {
    footer_editor("Footer", Footer::PATH)
}

#[component]
pub fn AffFooterPage() -> impl IntoView {
    footer_editor("Affiliate footer", AFF_FOOTER_PATH)
}
