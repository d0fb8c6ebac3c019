use leptos::{either::Either, prelude::*};

use crate::content::TextRun;
use crate::motion::{Motion, Pose};

use super::reveal::Reveal;

const ABOUT_MOTION: Motion = Motion::new(Pose::below(20.0), 0.6);

#[component]
pub fn About(runs: Vec<TextRun>) -> impl IntoView {
    view! {
        <Reveal motion=ABOUT_MOTION>
            <p class="leading-relaxed text-lg text-slate-700 dark:text-slate-300">
                {runs
                    .into_iter()
                    .map(|run| {
                        if run.bold {
                            Either::Left(view! { <b>{run.text}</b> })
                        } else {
                            Either::Right(run.text)
                        }
                    })
                    .collect_view()}
            </p>
        </Reveal>
    }
}
