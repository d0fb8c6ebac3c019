mod about;
mod contact;
mod education;
mod experience;
mod footer;
mod hero;
mod layout;
mod nav;
mod projects;
mod reveal;
mod skills;
pub mod theme;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::anchor::SectionId;
use crate::content::{portfolio, Portfolio};

use about::About;
use contact::Contact;
use education::Education;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use layout::Section;
use nav::Nav;
use projects::Projects;
use skills::Skills;
use theme::{provide_color_scheme, use_color_scheme};

/// Served from `public/`.
const FAVICON: &str = "/favicon.svg";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let build_time = env!("BUILD_TIME");
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <meta name="build-time" content=build_time />
                <link rel="icon" type="image/svg+xml" href=FAVICON />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_color_scheme();

    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    match portfolio() {
        Ok(portfolio) => Either::Left(view! {
            <Title text=portfolio.profile.title.clone() />
            <Meta name="description" content=portfolio.profile.description.clone() />
            <Page portfolio=portfolio.clone() />
        }),
        Err(e) => {
            log::error!("{e}");
            Either::Right(view! { <p class="p-8 text-center">"Portfolio content is unavailable."</p> })
        }
    }
}

/// The whole single-page site for `portfolio`.
#[component]
pub fn Page(portfolio: Portfolio) -> impl IntoView {
    let scheme = use_color_scheme();
    let Portfolio {
        profile,
        about,
        education,
        experience,
        projects,
        skills,
        contact,
    } = portfolio;
    let name = profile.name.clone();

    view! {
        <div class=move || {
            format!(
                "{} bg-white text-slate-900 dark:bg-slate-950 dark:text-slate-100",
                scheme.get().class(),
            )
        }>
            <main class="bg-slate-100 dark:bg-slate-900 min-h-screen">
                <Nav name=name.clone() sections=SectionId::ALL.to_vec() />
                <Hero profile />
                <Section id=SectionId::About>
                    <About runs=about />
                </Section>
                <Section id=SectionId::Education>
                    <Education entries=education />
                </Section>
                <Section id=SectionId::Experience>
                    <Experience entries=experience />
                </Section>
                <Section id=SectionId::Projects>
                    <Projects entries=projects />
                </Section>
                <Section id=SectionId::Skills>
                    <Skills categories=skills />
                </Section>
                <Section id=SectionId::Contact>
                    <Contact details=contact />
                </Section>
                <Footer name />
            </main>
        </div>
    }
}
