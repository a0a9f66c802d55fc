//! Presentational primitives for data-visualization dashboards.
//!
//! The crate owns the dashboard button family: a `'static` utility-class style
//! table keyed by variant, color, and size, the [`Button`] and [`LinkButton`]
//! Leptos components that keep the action and link shapes apart at compile
//! time, and the loading and touch-target wrappers they share. Buttons can
//! also be described as data with [`ButtonSpec`] and rendered through
//! [`DynamicButton`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;
mod style;
mod target;

pub use primitives::{Button, ButtonType, DynamicButton, LinkButton, LoadingSpinner, TouchTarget};
pub use style::{cx, ButtonColor, ButtonSize, ButtonStyle, ButtonVariant, BUTTON_BASE_CLASS};
pub use target::{
    ActionState, ButtonSpec, ButtonSpecError, ButtonTarget, LinkAttributes, LoadingContent,
    LOADING_LABEL,
};

/// Convenience imports for crates composing dashboard buttons.
pub mod prelude {
    pub use crate::{
        cx, Button, ButtonColor, ButtonSize, ButtonSpec, ButtonStyle, ButtonTarget, ButtonType,
        ButtonVariant, DynamicButton, LinkButton, LoadingSpinner, TouchTarget,
    };
}
