use leptos::prelude::*;

use crate::anchor::SectionId;

/// Sticky header with one in-page link per section.
#[component]
pub fn Nav(#[prop(into)] name: String, sections: Vec<SectionId>) -> impl IntoView {
    view! {
        <header class="sticky top-0 z-50 border-b bg-white/80 dark:bg-slate-950/80 backdrop-blur">
            <div class="mx-auto max-w-6xl flex justify-between px-6 py-3 items-center">
                <span class="font-bold text-xl text-indigo-600 dark:text-indigo-400 tracking-wide">
                    {name}
                </span>
                <nav class="flex gap-6 text-sm font-medium">
                    {sections
                        .into_iter()
                        .map(|id| {
                            view! {
                                <a href=id.href() class="relative group px-2 py-1 transition">
                                    <span class="text-slate-700 dark:text-slate-200 group-hover:text-indigo-600">
                                        {id.label()}
                                    </span>
                                    <span class="absolute left-0 -bottom-1 h-[2px] w-0 bg-indigo-600 transition-all duration-300 group-hover:w-full"></span>
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
