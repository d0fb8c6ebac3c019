use leptos::prelude::*;

use crate::anchor::SectionId;
use crate::content::Profile;
use crate::motion::{Motion, Pose, Trigger};

use super::reveal::Reveal;

const NAME_MOTION: Motion = Motion::new(Pose::above(20.0), 0.8);
const PHOTO_MOTION: Motion = Motion::new(Pose::scaled(0.9), 0.8);
const SUBTITLE_MOTION: Motion = Motion::new(Pose::below(20.0), 0.8);
const SUMMARY_MOTION: Motion = Motion::new(Pose::below(20.0), 0.5).delayed(0.3);

/// Landing banner. Animates once on mount rather than on scroll.
#[component]
pub fn Hero(profile: Profile) -> impl IntoView {
    let Profile {
        name,
        photo,
        subtitle,
        summary,
        ..
    } = profile;
    let alt = name.clone();
    view! {
        <section class="h-[85vh] flex flex-col justify-center items-center text-center px-6">
            <Reveal motion=NAME_MOTION trigger=Trigger::Mount class="mb-4">
                <h1 class="text-5xl sm:text-6xl font-extrabold text-slate-900 dark:text-slate-100">
                    {name}
                </h1>
            </Reveal>
            <Reveal motion=PHOTO_MOTION trigger=Trigger::Mount class="mb-6">
                <img
                    src=photo
                    alt=alt
                    width="180"
                    height="180"
                    class="rounded-full border-4 border-indigo-500 shadow-lg object-cover"
                />
            </Reveal>
            <Reveal motion=SUBTITLE_MOTION trigger=Trigger::Mount>
                <h2 class="text-2xl sm:text-3xl font-semibold bg-gradient-to-r from-indigo-600 to-emerald-500 text-transparent bg-clip-text">
                    {subtitle}
                </h2>
            </Reveal>
            <Reveal motion=SUMMARY_MOTION trigger=Trigger::Mount class="mt-6 max-w-2xl">
                <p class="text-lg text-slate-600 dark:text-slate-300 leading-relaxed">{summary}</p>
            </Reveal>
            <div class="mt-8 flex gap-4">
                <a href=SectionId::Projects.href() class="btn-primary">
                    "View Projects"
                </a>
                <a href=SectionId::Contact.href() class="btn-secondary">
                    "Contact Me"
                </a>
            </div>
        </section>
    }
}
