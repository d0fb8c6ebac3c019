use leptos::prelude::*;

use crate::content::EducationEntry;
use crate::motion::{Motion, Pose};

use super::layout::{Card, CardGrid};

const CARD_MOTION: Motion = Motion::new(Pose::below(20.0), 0.5);
const STAGGER: f32 = 0.2;

#[component]
pub fn Education(entries: Vec<EducationEntry>) -> impl IntoView {
    view! {
        <CardGrid class="gap-6 sm:grid-cols-2">
            {entries
                .into_iter()
                .enumerate()
                .map(|(i, entry)| {
                    let EducationEntry { institution, degree, dates, description, logo } = entry;
                    view! {
                        <Card
                            kind="education"
                            motion=CARD_MOTION.staggered(i, STAGGER)
                            class="p-8 flex items-center gap-4 hover:shadow-md"
                        >
                            <img
                                src=logo
                                alt=institution.clone()
                                width="56"
                                height="56"
                                class="object-contain"
                            />
                            <div>
                                <h3 class="font-semibold text-lg">{degree}</h3>
                                <p class="text-slate-500 text-sm">
                                    {format!("{institution} ({dates})")}
                                </p>
                                <p class="mt-2 text-sm text-slate-600 dark:text-slate-300">
                                    {description}
                                </p>
                            </div>
                        </Card>
                    }
                })
                .collect_view()}
        </CardGrid>
    }
}
