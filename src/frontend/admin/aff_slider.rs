use leptos::prelude::*;

use crate::frontend::components::{ActionButton, Button, ButtonVariant, FilePicker};
use crate::models::{AffSlider, Resource};

use super::editor::{bound_text, bound_toggle, EditorCard, Loading};
use super::state::DocState;

fn slides_editor(doc: RwSignal<AffSlider>) -> impl IntoView {
    let count = Memo::new(move |_| doc.with(|d| d.slides.len()));
    let shift = move |i: usize, up: bool| {
        doc.update(|d| {
            d.shift_slide(i, up);
        })
    };

    move || {
        let total = count.get();
        (0..total)
            .map(|i| {
                view! {
                    <div class="grid grid-cols-[auto_1fr_auto] gap-4 items-center p-3 rounded-lg bg-slate-800/40">
                        <FilePicker
                            base=AffSlider::PATH
                            field="image"
                            current=Signal::derive(move || doc.with(|d| d.slides.get(i).map(|s| s.image_url.clone()).unwrap_or_default()))
                            on_uploaded=Callback::new(move |url: String| doc.update(|d| {
                                if let Some(s) = d.slides.get_mut(i) {
                                    s.image_url = url;
                                }
                            }))
                        />
                        {item_text!(doc, AffSlider, "Link", slides[i].link_url)}
                        <div class="flex gap-2">
                            <ActionButton on_click=move || shift(i, true) variant=ButtonVariant::Ghost disabled=Signal::derive(move || i == 0)>"↑"</ActionButton>
                            <ActionButton on_click=move || shift(i, false) variant=ButtonVariant::Ghost disabled=Signal::derive(move || i + 1 >= total)>"↓"</ActionButton>
                            <ActionButton on_click=move || { doc.update(|d| { d.remove_slide(i); }); } variant=ButtonVariant::Danger>"Remove"</ActionButton>
                        </div>
                    </div>
                }
            })
            .collect_view()
    }
}

#[component]
pub fn AffSliderPage() -> impl IntoView {
    let state = DocState::<AffSlider>::mount(AffSlider::PATH);
    let doc = state.doc;
    let loading = state.loading;
    let saving = state.saving;

    // Rows render in vector order, so sort once every load settles.
    Effect::new(move |_| {
        if !loading.get() {
            doc.update(|d| d.sort_slides());
        }
    });

    let on_submit = {
        let state = state.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            state.save(None);
        }
    };

    view! {
        <EditorCard title="Affiliate slider">
            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <form on:submit=on_submit.clone() class="space-y-5">
                    {bound_toggle(doc, "Show the slider", |d: &AffSlider| d.is_active, |d: &mut AffSlider, v| d.is_active = v)}
                    {bound_text(
                        doc,
                        "Autoplay interval (ms)",
                        |d: &AffSlider| d.autoplay_ms.to_string(),
                        |d: &mut AffSlider, v: String| {
                            if let Ok(ms) = v.trim().parse() {
                                d.autoplay_ms = ms;
                            }
                        },
                    )}
                    {slides_editor(doc)}
                    <ActionButton on_click=move || { doc.update(|d| { d.add_slide(); }); } variant=ButtonVariant::Ghost>
                        "Add slide"
                    </ActionButton>
                    <div>
                        <Button loading=saving>"Save slider"</Button>
                    </div>
                </form>
            </Show>
        </EditorCard>
    }
}
