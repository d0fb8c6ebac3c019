use leptos::{html, prelude::*};
use leptos_use::use_intersection_observer;

use crate::motion::{Motion, Trigger};

/// Wraps content in an element that animates from `motion`'s starting pose to
/// rest, either once on mount or each time it scrolls into view.
#[component]
pub fn Reveal(
    motion: Motion,
    #[prop(optional)] trigger: Trigger,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let shown = RwSignal::new(false);

    match trigger {
        Trigger::Mount => {
            // effects only run in the browser, after hydration
            Effect::new(move |_| shown.set(true));
        }
        Trigger::InView => {
            let _ = use_intersection_observer(target, move |entries, _| {
                let visible = settled_visibility(entries.as_slice(), |e| e.is_intersecting());
                if let Some(visible) = visible {
                    shown.set(visible);
                }
            });
        }
    }

    view! {
        <div node_ref=target class=class style=move || motion.style(shown.get())>
            {children()}
        </div>
    }
}

/// Observer batches are oldest first; the last entry is the current state.
fn settled_visibility<T>(entries: &[T], is_visible: impl Fn(&T) -> bool) -> Option<bool> {
    entries.last().map(is_visible)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::motion::Pose;

    fn render(trigger: Trigger) -> String {
        let owner = Owner::new();
        owner.with(|| {
            view! {
                <Reveal motion=Motion::new(Pose::below(20.0), 0.5) trigger class="mb-4">
                    <p>"hello"</p>
                </Reveal>
            }
            .to_html()
        })
    }

    #[test]
    fn test_latest_observer_entry_wins() {
        let visible = |v: &bool| *v;
        assert_eq!(settled_visibility(&[true, false], visible), Some(false));
        assert_eq!(settled_visibility(&[false, true], visible), Some(true));
        assert_eq!(settled_visibility(&[] as &[bool], visible), None);
    }

    #[test]
    fn test_renders_hidden_pose_on_server() {
        for trigger in [Trigger::Mount, Trigger::InView] {
            let html = render(trigger);
            assert!(html.contains("opacity:0;transform:translateY(20px)"));
            assert!(html.contains("class=\"mb-4\""));
            assert!(html.contains("hello"));
        }
    }
}
