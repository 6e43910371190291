//! Shared layout wrapper: the emerald sidebar plus the main content column.
//! Routes keep their own headers and error text; the shell only frames them.

use crate::components::layout::sidebar::Sidebar;
use leptos::prelude::*;

/// Wraps routes with the side navigation and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-50 flex">
            <Sidebar />
            <main class="flex-1 px-8 py-6 space-y-6">{children()}</main>
        </div>
    }
}
