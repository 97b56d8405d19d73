//! Admin back office: login, guarded routes and one editor per resource.

/// Text input bound to `doc.<list>[idx].<field>` of a typed document.
macro_rules! item_text {
    ($doc:expr, $ty:ty, $label:expr, $list:ident[$idx:expr] . $($field:ident).+) => {
        $crate::frontend::admin::editor::bound_text(
            $doc,
            $label,
            move |d: &$ty| d.$list.get($idx).map(|item| item.$($field).+.clone()).unwrap_or_default(),
            move |d: &mut $ty, v: String| {
                if let Some(item) = d.$list.get_mut($idx) {
                    item.$($field).+ = v;
                }
            },
        )
    };
}

mod admins;
mod aff_slider;
mod commission;
mod dashboard;
mod editor;
mod footer;
mod login;
mod pages;
mod profile;
mod state;
mod whyus;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Redirect, Route, Router, Routes, A};
use leptos_router::path;

use crate::frontend::components::Toaster;
use crate::frontend::use_app;
use crate::services::permissions::{guard, route_rule, visible_menu, GuardDecision};

use admins::AdminsPage;
use aff_slider::AffSliderPage;
use commission::CommissionPage;
use dashboard::DashboardPage;
use footer::{AffFooterPage, FooterPage};
use login::LoginPage;
use pages::*;
use profile::ProfilePage;
use whyus::WhyUsPage;

/// Render `page` inside the admin shell when the session allows `path`.
fn guarded<V: IntoView + 'static>(path: &'static str, page: fn() -> V) -> impl IntoView {
    let auth = use_app().auth;
    let decision = Memo::new(move |_| match route_rule(path) {
        Some(rule) => auth.with(|state| guard(state, rule)),
        None => GuardDecision::Forbidden,
    });

    move || match decision.get() {
        GuardDecision::Pending => view! { <div class="min-h-screen bg-slate-950"></div> }.into_any(),
        GuardDecision::RedirectToLogin => view! { <Redirect path="/login" /> }.into_any(),
        GuardDecision::Forbidden => view! {
            <AdminShell>
                <div class="max-w-lg p-6 rounded-xl border border-red-500/30 bg-red-500/10 text-red-300">
                    <h1 class="text-lg font-semibold mb-2">"Access denied"</h1>
                    <p class="text-sm">"Your account does not have permission to open this page."</p>
                </div>
            </AdminShell>
        }
        .into_any(),
        GuardDecision::Allow => view! { <AdminShell>{page()}</AdminShell> }.into_any(),
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    let app = use_app();
    let auth = app.auth;

    let entries = move || {
        auth.with(|state| visible_menu(state.admin.as_ref()))
            .into_iter()
            .map(|rule| {
                view! {
                    <li>
                        <A href=rule.path attr:class="block px-3 py-2 rounded-lg text-sm text-slate-300 hover:bg-slate-800 hover:text-white">
                            {rule.label}
                        </A>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <aside class="w-64 shrink-0 min-h-screen border-r border-slate-800 bg-slate-900/60 p-4">
            <div class="px-3 py-4 mb-4 text-lg font-bold text-amber-400">"Back office"</div>
            <ul class="space-y-1">{entries}</ul>
        </aside>
    }
}

#[component]
fn AdminShell(children: Children) -> impl IntoView {
    let app = use_app();
    let auth = app.auth;
    let email = move || auth.with(|s| s.admin.as_ref().map(|a| format!("{} ({})", a.email, a.role)).unwrap_or_default());
    let logout = move |_| app.logout();

    view! {
        <div class="flex min-h-screen bg-slate-950 text-slate-200">
            <Sidebar />
            <div class="flex-1">
                <header class="flex items-center justify-end gap-4 px-8 py-4 border-b border-slate-800">
                    <span class="text-sm text-slate-400">{email}</span>
                    <button type="button" on:click=logout class="text-sm text-red-400 hover:text-red-300">"Logout"</button>
                </header>
                <main class="p-8">{children()}</main>
            </div>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-slate-950 text-slate-300">
            <h1 class="text-6xl font-bold text-amber-400">"404"</h1>
            <p class="mt-4">"Page not found"</p>
            <a href="/" class="mt-6 text-amber-400 hover:underline">"Back to dashboard"</a>
        </div>
    }
}

/// Root of the admin app. Expects an `AppContext` in context.
#[component]
pub fn AdminApp() -> impl IntoView {
    provide_meta_context();
    use_app().rehydrate();

    view! {
        <Title text="Admin" />
        <Router base="/admin">
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/") view=|| guarded("/", DashboardPage) />
                <Route path=path!("/profile") view=|| guarded("/profile", ProfilePage) />
                <Route path=path!("/admins") view=|| guarded("/admins", AdminsPage) />
                <Route path=path!("/promotions") view=|| guarded("/promotions", PromotionsPage) />
                <Route path=path!("/sliders") view=|| guarded("/sliders", SlidersPage) />
                <Route path=path!("/notice") view=|| guarded("/notice", NoticePage) />
                <Route path=path!("/single-banner") view=|| guarded("/single-banner", SingleBannerPage) />
                <Route path=path!("/two-banner") view=|| guarded("/two-banner", TwoBannerPage) />
                <Route path=path!("/banner-videos") view=|| guarded("/banner-videos", BannerVideosPage) />
                <Route path=path!("/download-header") view=|| guarded("/download-header", DownloadHeaderPage) />
                <Route path=path!("/download-banner") view=|| guarded("/download-banner", DownloadBannerPage) />
                <Route path=path!("/footer") view=|| guarded("/footer", FooterPage) />
                <Route path=path!("/floating-social") view=|| guarded("/floating-social", FloatingSocialPage) />
                <Route path=path!("/site-branding") view=|| guarded("/site-branding", SiteBrandingPage) />
                <Route path=path!("/aff-commission") view=|| guarded("/aff-commission", CommissionPage) />
                <Route path=path!("/aff-commission-color") view=|| guarded("/aff-commission-color", AffCommissionColorPage) />
                <Route path=path!("/aff-agent") view=|| guarded("/aff-agent", AffAgentPage) />
                <Route path=path!("/aff-whyus") view=|| guarded("/aff-whyus", WhyUsPage) />
                <Route path=path!("/aff-notice") view=|| guarded("/aff-notice", AffNoticePage) />
                <Route path=path!("/aff-slider") view=|| guarded("/aff-slider", AffSliderPage) />
                <Route path=path!("/aff-footer") view=|| guarded("/aff-footer", AffFooterPage) />
                <Route path=path!("/aff-site-meta") view=|| guarded("/aff-site-meta", AffSiteMetaPage) />
                <Route path=path!("/aff-floating-social") view=|| guarded("/aff-floating-social", AffFloatingSocialPage) />
            </Routes>
        </Router>
        <Toaster />
    }
}
