use leptos::prelude::*;

use crate::content::ExperienceEntry;
use crate::motion::{Motion, Pose};

use super::layout::{Card, CardGrid};

const CARD_MOTION: Motion = Motion::new(Pose::below(20.0), 0.5);
const STAGGER: f32 = 0.2;

#[component]
pub fn Experience(entries: Vec<ExperienceEntry>) -> impl IntoView {
    view! {
        <CardGrid class="gap-6 sm:grid-cols-2">
            {entries
                .into_iter()
                .enumerate()
                .map(|(i, entry)| {
                    let ExperienceEntry { logo, title, company, period, bullets } = entry;
                    view! {
                        <Card
                            kind="experience"
                            motion=CARD_MOTION.staggered(i, STAGGER)
                            class="p-8 min-h-[320px] hover:shadow-md"
                        >
                            <div class="flex items-center gap-4 mb-4">
                                <div class="w-12 h-12 flex-shrink-0 flex items-center justify-center">
                                    <img
                                        src=logo
                                        alt=company.clone()
                                        width="48"
                                        height="48"
                                        class="object-contain"
                                    />
                                </div>
                                <div class="flex flex-col justify-center">
                                    <h3 class="font-semibold text-lg">{title}</h3>
                                    <p class="text-sm text-slate-500">
                                        {format!("{company} — {period}")}
                                    </p>
                                </div>
                            </div>
                            <ul class="list-disc pl-5 space-y-2 text-sm text-slate-600 dark:text-slate-300">
                                {bullets
                                    .into_iter()
                                    .map(|b| view! { <li>{b}</li> })
                                    .collect_view()}
                            </ul>
                        </Card>
                    }
                })
                .collect_view()}
        </CardGrid>
    }
}
