use leptos::prelude::*;
use leptos_router::components::A;

use crate::frontend::use_app;
use crate::services::visible_menu;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_app().auth;

    let greeting = move || {
        auth.with(|s| match &s.admin {
            Some(admin) if admin.is_mother() => format!("Welcome back, {}. You have full access.", admin.email),
            Some(admin) => format!("Welcome back, {}. You can edit {} section(s).", admin.email, admin.permissions.len()),
            None => String::new(),
        })
    };

    let cards = move || {
        auth.with(|s| visible_menu(s.admin.as_ref()))
            .into_iter()
            .filter(|rule| rule.path != "/")
            .map(|rule| {
                view! {
                    <A href=rule.path attr:class="block p-5 rounded-xl bg-slate-900/60 border border-slate-800 hover:border-amber-500/50 transition-colors">
                        <span class="text-white font-medium">{rule.label}</span>
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <section>
            <h1 class="text-2xl font-bold text-white">"Dashboard"</h1>
            <p class="mt-2 text-slate-400">{greeting}</p>
            <div class="mt-8 grid grid-cols-2 lg:grid-cols-4 gap-4">{cards}</div>
        </section>
    }
}
