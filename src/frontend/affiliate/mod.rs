//! Public affiliate landing page.
//!
//! Renders built-in content immediately and swaps in managed content once
//! every section has been fetched. Language and promotion category changes
//! rebuild the page from the fetched documents without refetching.

mod sections;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{provide_meta_context, Link, Meta, Title};

use crate::frontend::use_app;
use crate::models::Lang;
use crate::views::{AffiliateData, AffiliatePage};

use sections::*;

#[component]
fn LangToggle(lang: RwSignal<Lang>) -> impl IntoView {
    let label = move || match lang.get() {
        Lang::Bn => "English",
        Lang::En => "বাংলা",
    };
    view! {
        <button
            type="button"
            class="px-3 py-1 rounded-full border border-slate-600 text-sm text-slate-200 hover:bg-slate-800"
            on:click=move |_| lang.update(|l| *l = l.toggled())
        >
            {label}
        </button>
    }
}

#[component]
pub fn AffiliateApp() -> impl IntoView {
    provide_meta_context();
    let app = use_app();
    let lang = app.lang;
    let category = RwSignal::new(None::<String>);
    let data = RwSignal::new(AffiliateData::default());

    {
        let app = app.clone();
        spawn_local(async move {
            let mut fetched = AffiliateData::fetch(&app.client, &app.cache).await;
            fetched.absolutize(&app.client);
            data.set(fetched);
        });
    }

    let page = Memo::new(move |_| {
        let category = category.get();
        data.with(|d| AffiliatePage::build(d, lang.get(), category.as_deref()))
    });

    view! {
        <Title text=move || page.with(|p| p.meta.title.clone()) />
        <Meta name="description" content=move || page.with(|p| p.meta.description.clone()) />
        <Meta name="keywords" content=move || page.with(|p| p.meta.keywords.clone()) />
        <Meta property="og:image" content=move || page.with(|p| p.meta.og_image_url.clone()) />
        {move || {
            let favicon = page.with(|p| p.meta.favicon_url.clone());
            view! { <Link rel="icon" href=favicon /> }
        }}

        <div
            class="min-h-screen bg-slate-950 text-slate-100"
            lang=move || lang.get().as_str()
            style=move || page.with(|p| p.brand_theme.style())
        >
            <NoticeBar notice=Signal::derive(move || page.with(|p| p.notice.clone())) />
            <header class="max-w-6xl mx-auto flex justify-end px-4 py-4">
                <LangToggle lang=lang />
            </header>
            <main class="max-w-6xl mx-auto px-4">
                <Slider slider=Signal::derive(move || page.with(|p| p.slider.clone())) />
                <AgentSection agent=Signal::derive(move || page.with(|p| p.agent.clone())) />
                <WhyUsSection why_us=Signal::derive(move || page.with(|p| p.why_us.clone())) />
                <CommissionSection commission=Signal::derive(move || page.with(|p| p.commission.clone())) />
                <PromotionsSection promotions=Signal::derive(move || page.with(|p| p.promotions.clone())) category=category />
                <FooterSection footer=Signal::derive(move || page.with(|p| p.footer.clone())) />
            </main>
            <FloatingSocial icons=Signal::derive(move || page.with(|p| p.social.clone())) />
        </div>
    }
}
