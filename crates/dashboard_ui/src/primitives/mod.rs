//! Button, link-button, spinner, and touch-target primitives.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::style::{cx, ButtonColor, ButtonSize, ButtonStyle, ButtonVariant};
use crate::target::{ActionState, ButtonTarget, LinkAttributes, LoadingContent};

mod button;
mod feedback;

pub use button::{Button, DynamicButton, LinkButton};
pub use feedback::{LoadingSpinner, TouchTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Form behavior of a `<button>` element.
pub enum ButtonType {
    /// Plain button with no form behavior.
    Button,
    /// Submits the enclosing form.
    Submit,
    /// Resets the enclosing form.
    Reset,
}

impl Default for ButtonType {
    fn default() -> Self {
        Self::Button
    }
}

impl ButtonType {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(all(test, feature = "ssr"))]
mod render_tests;
