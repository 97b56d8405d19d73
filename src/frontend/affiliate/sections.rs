use std::time::Duration;

use leptos::prelude::*;

use crate::views::{
    AgentView, CommissionView, FooterView, NoticeView, PromotionsView, SliderView, SocialIcon, WhyUsView,
};

#[component]
pub fn NoticeBar(#[prop(into)] notice: Signal<NoticeView>) -> impl IntoView {
    view! {
        <div class="overflow-hidden whitespace-nowrap bg-amber-500 text-slate-950 text-sm py-2">
            <div
                class="inline-block aff-marquee"
                style=move || format!("animation-duration: {}s", notice.with(|n| n.speed_sec))
            >
                {move || notice.with(|n| n.text.clone())}
            </div>
        </div>
    }
}

#[component]
pub fn Slider(#[prop(into)] slider: Signal<SliderView>) -> impl IntoView {
    let current = RwSignal::new(0usize);
    let count = Memo::new(move |_| slider.with(|s| s.slides.len()));
    let autoplay = Memo::new(move |_| slider.with(|s| s.autoplay_ms));

    Effect::new(move |_| {
        let every = Duration::from_millis(u64::from(autoplay.get().max(500)));
        if let Ok(handle) = set_interval_with_handle(
            move || {
                let n = count.get_untracked();
                if n > 0 {
                    current.update(|c| *c = (*c + 1) % n);
                }
            },
            every,
        ) {
            on_cleanup(move || handle.clear());
        }
    });

    view! {
        <Show when=move || count.get() != 0>
            <div class="relative overflow-hidden rounded-2xl">
                {move || {
                    slider.with(|s| {
                        let idx = current.get() % s.slides.len().max(1);
                        s.slides.get(idx).map(|slide| {
                            let img = view! { <img src=slide.image_url.clone() class="w-full h-64 md:h-96 object-cover" /> };
                            match slide.link_url.clone() {
                                Some(href) => view! { <a href=href>{img}</a> }.into_any(),
                                None => img.into_any(),
                            }
                        })
                    })
                }}
                <div class="absolute bottom-3 inset-x-0 flex justify-center gap-2">
                    {move || (0..count.get()).map(|i| view! {
                        <button
                            type="button"
                            class="w-2.5 h-2.5 rounded-full"
                            class=("bg-white", move || current.get() == i)
                            class=("bg-white/40", move || current.get() != i)
                            on:click=move |_| current.set(i)
                        ></button>
                    }).collect_view()}
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn AgentSection(#[prop(into)] agent: Signal<AgentView>) -> impl IntoView {
    move || {
        let a = agent.get();
        view! {
            <section class="grid md:grid-cols-2 gap-8 items-center py-12">
                <div>
                    <h2 class="text-3xl font-bold text-[var(--brand-primary)]">{a.title}</h2>
                    <p class="mt-4 text-slate-300">{a.desc}</p>
                    <a href=a.link_url class="inline-block mt-6 px-6 py-3 rounded-lg bg-[var(--brand-primary)] text-slate-950 font-semibold">
                        {a.button}
                    </a>
                </div>
                {(!a.image_url.is_empty()).then(|| view! { <img src=a.image_url class="rounded-2xl" /> })}
            </section>
        }
    }
}

#[component]
pub fn WhyUsSection(#[prop(into)] why_us: Signal<WhyUsView>) -> impl IntoView {
    move || {
        let w = why_us.get();
        view! {
            <section class="py-12">
                <h2 class="text-3xl font-bold text-center text-white">{w.title}</h2>
                <div class="mt-8 grid md:grid-cols-3 gap-6">
                    {w.items.into_iter().map(|item| view! {
                        <div class="p-6 rounded-2xl bg-slate-900 border border-slate-800 text-center">
                            {(!item.icon_url.is_empty()).then(|| view! { <img src=item.icon_url class="mx-auto h-14 w-14" /> })}
                            <h3 class="mt-4 text-lg font-semibold text-white">{item.title}</h3>
                            <p class="mt-2 text-sm text-slate-400">{item.desc}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>
        }
    }
}

fn table(headers: Vec<String>, rows: Vec<Vec<String>>) -> impl IntoView {
    view! {
        <table class="w-full aff-table">
            <thead>
                <tr>{headers.into_iter().map(|h| view! { <th>{h}</th> }).collect_view()}</tr>
            </thead>
            <tbody>
                {rows.into_iter().map(|row| view! {
                    <tr>{row.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}</tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}

#[component]
pub fn CommissionSection(#[prop(into)] commission: Signal<CommissionView>) -> impl IntoView {
    let open = RwSignal::new(false);

    move || {
        let c = commission.get();
        let rows: Vec<Vec<String>> = c
            .rows
            .iter()
            .map(|r| vec![r.level.clone(), r.new_reg.clone(), r.base.clone(), r.extra.clone(), r.need.clone(), r.total.clone()])
            .collect();
        let example: Vec<Vec<String>> = c
            .example_rows
            .iter()
            .map(|r| vec![r.label.clone(), r.amount.clone(), r.rate.clone(), r.result.clone()])
            .collect();
        let modal_title = c.modal_title.clone();

        view! {
            <section class="aff-commission py-12" style=c.theme.style()>
                <h2 class="aff-commission-title text-center font-bold">{c.title.clone()}</h2>
                <div class="mt-6 overflow-x-auto">{table(c.headers.clone(), rows)}</div>
                <div class="mt-6 text-center">
                    <button type="button" class="underline text-[var(--aff-title-color)]" on:click=move |_| open.set(true)>
                        {modal_title.clone()}
                    </button>
                </div>
                <Show when=move || open.get()>
                    <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/70 p-4">
                        <div class="max-w-2xl w-full max-h-[90vh] overflow-y-auto p-6 rounded-2xl bg-[var(--aff-section-bg)]">
                            <h3 class="text-xl font-bold text-[var(--aff-title-color)]">{c.modal_title.clone()}</h3>
                            <ul class="mt-4 list-disc pl-5 space-y-1">
                                {c.bullets.iter().map(|b| view! { <li>{b.clone()}</li> }).collect_view()}
                            </ul>
                            <h4 class="mt-6 font-semibold">{c.formula_title.clone()}</h4>
                            <p class="mt-2">{c.formula_labels.join(" + ")}</p>
                            <h4 class="mt-6 font-semibold">{c.example_title.clone()}</h4>
                            <div class="mt-2 overflow-x-auto">{table(c.example_headers.clone(), example.clone())}</div>
                            <p class="mt-4 font-semibold">{format!("{}: {}", c.example_total_label, c.example_total)}</p>
                            <button type="button" class="mt-6 px-5 py-2 rounded-lg bg-[var(--aff-th-bg)]" on:click=move |_| open.set(false)>
                                {c.close.clone()}
                            </button>
                        </div>
                    </div>
                </Show>
            </section>
        }
    }
}

#[component]
pub fn PromotionsSection(
    #[prop(into)] promotions: Signal<PromotionsView>,
    category: RwSignal<Option<String>>,
) -> impl IntoView {
    move || {
        let p = promotions.get();
        let tab = move |value: String, label: String, active: bool| {
            view! {
                <button
                    type="button"
                    class="px-4 py-2 rounded-full text-sm"
                    class=("bg-[var(--brand-primary)]", active)
                    class=("text-slate-950", active)
                    class=("bg-slate-800", !active)
                    on:click=move |_| category.set(Some(value.clone()))
                >
                    {label}
                </button>
            }
        };
        let all_active = p.selected == "all";
        let tabs = p
            .categories
            .iter()
            .map(|c| tab(c.clone(), c.clone(), p.selected.eq_ignore_ascii_case(c)))
            .collect_view();

        view! {
            <section class="py-12">
                <div class="flex flex-wrap gap-2 justify-center">
                    {tab("all".to_string(), p.all_label.clone(), all_active)}
                    {tabs}
                </div>
                <div class="mt-8 grid md:grid-cols-3 gap-6">
                    {p.cards.into_iter().map(|card| view! {
                        <article class="rounded-2xl overflow-hidden bg-slate-900 border border-slate-800">
                            {(!card.image.is_empty()).then(|| view! { <img src=card.image class="w-full h-44 object-cover" /> })}
                            <div class="p-5">
                                <span class="text-xs uppercase text-amber-400">{card.category}</span>
                                <h3 class="mt-1 text-lg font-semibold text-white">{card.title}</h3>
                                <p class="mt-2 text-sm text-slate-400">{card.short_desc}</p>
                                <details class="mt-3 text-sm text-slate-300">
                                    <summary class="cursor-pointer">"…"</summary>
                                    <p class="mt-2">{card.details}</p>
                                </details>
                            </div>
                        </article>
                    }).collect_view()}
                </div>
            </section>
        }
    }
}

#[component]
pub fn FooterSection(#[prop(into)] footer: Signal<FooterView>) -> impl IntoView {
    move || {
        let f = footer.get();
        let groups = f
            .visible_groups()
            .map(|g| {
                view! {
                    <div>
                        <h4 class="font-semibold text-white">{g.title.clone()}</h4>
                        <div class="mt-3 flex flex-wrap gap-4">
                            {g.items.iter().map(|item| view! {
                                <figure class="text-center">
                                    <img src=item.img.clone() alt=item.name.clone() class="h-12 mx-auto" />
                                    <figcaption class="mt-1 text-xs text-slate-400">
                                        {item.name.clone()}
                                        {item.season.clone().filter(|s| !s.is_empty()).map(|s| format!(" · {s}"))}
                                    </figcaption>
                                </figure>
                            }).collect_view()}
                        </div>
                    </div>
                }
            })
            .collect_view();

        view! {
            <footer class="mt-16 py-12 border-t border-slate-800">
                {(!f.logo.is_empty()).then(|| view! { <img src=f.logo.clone() class="h-10" /> })}
                <p class="mt-4 max-w-2xl text-sm text-slate-400">{f.about.clone()}</p>
                <div class="mt-8 grid md:grid-cols-4 gap-8">{groups}</div>
                <div class="mt-8 flex gap-4">
                    {f.social.iter().map(|(network, url)| view! {
                        <a href=url.clone() class="text-sm capitalize text-slate-300 hover:text-white">{*network}</a>
                    }).collect_view()}
                </div>
                <p class="mt-8 text-xs text-slate-500">{f.copyright.clone()}</p>
            </footer>
        }
    }
}

#[component]
pub fn FloatingSocial(#[prop(into)] icons: Signal<Vec<SocialIcon>>) -> impl IntoView {
    view! {
        <div class="fixed right-4 bottom-24 z-40 flex flex-col gap-3">
            {move || icons.get().into_iter().map(|icon| view! {
                <a href=icon.link_url target="_blank" rel="noopener noreferrer">
                    <img src=icon.image_url class="h-12 w-12 rounded-full shadow-lg" />
                </a>
            }).collect_view()}
        </div>
    }
}
