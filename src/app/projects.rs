use leptos::prelude::*;

use crate::content::ProjectEntry;
use crate::motion::{Motion, Pose};

use super::layout::{Card, CardGrid};

const CARD_MOTION: Motion = Motion::new(Pose::below(20.0), 0.5);
const STAGGER: f32 = 0.2;

/// Project cards link out to the project in a new tab.
#[component]
pub fn Projects(entries: Vec<ProjectEntry>) -> impl IntoView {
    view! {
        <CardGrid class="gap-6 sm:grid-cols-2 lg:grid-cols-3">
            {entries
                .into_iter()
                .enumerate()
                .map(|(i, project)| {
                    let ProjectEntry { title, description, link } = project;
                    view! {
                        <Card
                            kind="project"
                            motion=CARD_MOTION.staggered(i, STAGGER)
                            href=link
                            class="p-8 flex flex-col min-h-[320px] hover:shadow-lg"
                        >
                            <h3 class="font-semibold text-lg mb-2">{title}</h3>
                            <p class="text-sm text-slate-600 dark:text-slate-300 flex-grow leading-relaxed">
                                {description}
                            </p>
                            <span class="text-indigo-600 text-sm mt-4">"View Project →"</span>
                        </Card>
                    }
                })
                .collect_view()}
        </CardGrid>
    }
}
