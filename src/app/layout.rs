use leptos::{either::Either, prelude::*};

use crate::anchor::SectionId;
use crate::content::ContactLink;
use crate::display::{button_class, icon_class, TagStyle};
use crate::motion::{Motion, Pose};

use super::reveal::Reveal;

const HEADING_MOTION: Motion = Motion::new(Pose::below(10.0), 0.5);
const CARD_BASE: &str = "h-full rounded-xl border bg-white dark:bg-slate-900 shadow-sm hover:border-indigo-400 transition";

/// Anchored page section with a heading that reveals on scroll. The heading
/// defaults to the section's title.
#[component]
pub fn Section(
    id: SectionId,
    #[prop(into, optional)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    let title = title.unwrap_or_else(|| id.title().to_string());
    view! {
        <section id=id.anchor() class="mx-auto max-w-6xl px-6 py-16 scroll-mt-24">
            <Reveal motion=HEADING_MOTION class="mb-8">
                <h2 class="text-3xl font-bold text-indigo-600 dark:text-indigo-400">
                    {title}
                </h2>
            </Reveal>
            {children()}
        </section>
    }
}

#[component]
pub fn CardGrid(#[prop(into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=format!("grid {class}")>{children()}</div> }
}

/// A card in a grid. With `href` the whole card is an external link.
///
/// `kind` ends up in a `data-card` attribute.
#[component]
pub fn Card(
    kind: &'static str,
    motion: Motion,
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] href: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = format!("{CARD_BASE} {class}");
    view! {
        <Reveal motion>
            {match href {
                Some(href) => {
                    Either::Left(
                        view! {
                            <a href=href target="_blank" rel="noreferrer" data-card=kind class=class>
                                {children()}
                            </a>
                        },
                    )
                }
                None => {
                    Either::Right(
                        view! {
                            <div data-card=kind class=class>
                                {children()}
                            </div>
                        },
                    )
                }
            }}
        </Reveal>
    }
}

#[component]
pub fn Pill(tag: TagStyle, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <span
            data-tag=tag.name()
            class=format!("px-3 py-1 rounded-full text-sm {}", tag.class())
        >
            {label}
        </span>
    }
}

#[component]
pub fn LinkButton(link: ContactLink) -> impl IntoView {
    let external = link.opens_new_context();
    view! {
        <a
            href=link.href
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
            class=format!("{} flex items-center gap-2", button_class(link.style))
        >
            <i class=icon_class(link.kind)></i>
            {link.label}
        </a>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::{ContactKind, LinkStyle};

    fn render<V: IntoView + 'static>(f: impl FnOnce() -> V) -> String {
        let owner = Owner::new();
        owner.with(|| f().to_html())
    }

    #[test]
    fn test_section_anchor_and_heading() {
        let html = render(|| view! { <Section id=SectionId::Skills>"body"</Section> });
        assert!(html.contains("id=\"skills\""));
        assert!(html.contains("Skills"));
        assert!(html.contains("body"));
    }

    #[test]
    fn test_section_heading_override() {
        let html = render(|| {
            view! {
                <Section id=SectionId::Projects title="Selected Work">
                    "body"
                </Section>
            }
        });
        assert!(html.contains("id=\"projects\""));
        assert!(html.contains("Selected Work"));
    }

    #[test]
    fn test_card_with_href_is_link() {
        let html = render(|| {
            view! {
                <Card kind="project" motion=HEADING_MOTION href="https://example.com">
                    "x"
                </Card>
            }
        });
        assert!(html.contains("<a href=\"https://example.com\""));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("data-card=\"project\""));
    }

    #[test]
    fn test_card_without_href_is_not_link() {
        let html = render(|| view! { <Card kind="education" motion=HEADING_MOTION>"x"</Card> });
        assert!(!html.contains("<a"));
        assert!(html.contains("data-card=\"education\""));
    }

    #[test]
    fn test_link_button_mailto_stays_in_page() {
        let link = ContactLink {
            kind: ContactKind::Email,
            label: "Email".to_string(),
            href: "mailto:someone@example.com".to_string(),
            style: LinkStyle::Plain,
        };
        let html = render(move || view! { <LinkButton link /> });
        assert!(html.contains("href=\"mailto:someone@example.com\""));
        assert!(!html.contains("target="));
        assert!(html.contains("extra-email"));
    }

    #[test]
    fn test_pill_style() {
        let html = render(|| view! { <Pill tag=TagStyle::Highlight label="AVISPA" /> });
        assert!(html.contains("data-tag=\"highlight\""));
        assert!(html.contains("bg-emerald-100"));
    }
}
