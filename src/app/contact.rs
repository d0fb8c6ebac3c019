use leptos::prelude::*;

use crate::content::ContactDetails;

use super::layout::LinkButton;

#[component]
pub fn Contact(details: ContactDetails) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-4">
            <p class="text-slate-600 dark:text-slate-300 mb-4">{details.blurb}</p>
            <div class="flex gap-4 flex-wrap justify-center">
                {details
                    .links
                    .into_iter()
                    .map(|link| view! { <LinkButton link /> })
                    .collect_view()}
            </div>
        </div>
    }
}
