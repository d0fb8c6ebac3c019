use leptos::prelude::*;

use crate::display::{copyright, current_year};

#[component]
pub fn Footer(#[prop(into)] name: String) -> impl IntoView {
    view! {
        <footer class="mt-16 border-t py-6 text-center text-sm text-slate-500 dark:border-slate-800">
            {copyright(current_year(), &name)}
        </footer>
    }
}
