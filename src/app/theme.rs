use leptos::prelude::*;
use leptos_use::use_preferred_dark;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// Class toggled on the page root for Tailwind's `dark:` variants.
    pub fn class(self) -> &'static str {
        match self {
            ColorScheme::Light => "",
            ColorScheme::Dark => "dark",
        }
    }
}

/// Provides the color scheme as a read-only signal following the OS preference.
pub fn provide_color_scheme() {
    let prefers_dark = use_preferred_dark();
    let scheme = Signal::derive(move || {
        if prefers_dark.get() {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    });
    provide_context(scheme);
}

pub fn use_color_scheme() -> Signal<ColorScheme> {
    use_context::<Signal<ColorScheme>>().unwrap_or_else(|| Signal::stored(ColorScheme::default()))
}
