use leptos::prelude::*;

use crate::content::SkillCategory;
use crate::display::TagStyle;
use crate::motion::{Motion, Pose};

use super::layout::{Card, CardGrid, Pill};

const CARD_MOTION: Motion = Motion::new(Pose::below(20.0), 0.4);
const STAGGER: f32 = 0.1;

#[component]
pub fn Skills(categories: Vec<SkillCategory>) -> impl IntoView {
    view! {
        <CardGrid class="gap-8 sm:grid-cols-2">
            {categories
                .into_iter()
                .enumerate()
                .map(|(i, category)| {
                    let tag = TagStyle::for_category(&category.label);
                    view! {
                        <Card
                            kind="skill"
                            motion=CARD_MOTION.staggered(i, STAGGER)
                            class="p-6 hover:shadow-md"
                        >
                            <h3 class="font-semibold mb-4 text-lg text-indigo-600 dark:text-indigo-400">
                                {category.label}
                            </h3>
                            <div class="flex flex-wrap gap-2">
                                {category
                                    .skills
                                    .into_iter()
                                    .map(|skill| view! { <Pill tag label=skill /> })
                                    .collect_view()}
                            </div>
                        </Card>
                    }
                })
                .collect_view()}
        </CardGrid>
    }
}
