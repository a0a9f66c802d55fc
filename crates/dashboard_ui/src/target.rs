//! Plain-data model of the two exclusive button shapes.
//!
//! [`crate::Button`] and [`crate::LinkButton`] keep the shapes apart at compile
//! time. This module carries the same split as data so buttons can be
//! described by configuration and rendered through [`crate::DynamicButton`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::style::ButtonStyle;

/// Accessible label applied while a button is busy without visible loading text.
pub const LOADING_LABEL: &str = "Loading, please wait";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Attributes forwarded to a link-shaped button.
pub struct LinkAttributes {
    /// Navigation target.
    pub href: String,
    /// Browsing context (`_blank`, ...).
    pub target: Option<String>,
    /// Link relationship.
    pub rel: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Interaction state of a button-shaped button.
pub struct ActionState {
    /// Caller-requested disabled state.
    pub disabled: bool,
    /// Pending work indicator.
    pub loading: bool,
    /// Text shown beside the spinner while loading.
    pub loading_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// What the button renders inside its frame.
pub enum LoadingContent {
    /// Children as supplied.
    Children,
    /// Spinner followed by the loading text; children are not rendered.
    SpinnerWithText(String),
    /// Children kept for layout but invisible, spinner centered over them.
    SpinnerOverChildren,
}

impl ActionState {
    /// Builds an action state, treating blank loading text as absent.
    pub fn new(disabled: bool, loading: bool, loading_text: Option<String>) -> Self {
        Self {
            disabled,
            loading,
            loading_text: loading_text.filter(|text| !text.is_empty()),
        }
    }

    /// Loading implies disabled so pending work cannot be submitted twice.
    pub fn is_disabled(&self) -> bool {
        self.disabled || self.loading
    }

    /// Label for assistive technology.
    ///
    /// An explicit caller label always wins. Otherwise a busy button without
    /// loading text announces [`LOADING_LABEL`].
    pub fn accessible_label(&self, caller_label: Option<&str>) -> Option<String> {
        match caller_label {
            Some(label) => Some(label.to_string()),
            None if self.loading && self.loading_text.is_none() => {
                Some(LOADING_LABEL.to_string())
            }
            None => None,
        }
    }

    /// Selects one of the three loading branches.
    pub fn content(&self) -> LoadingContent {
        match (self.loading, &self.loading_text) {
            (false, _) => LoadingContent::Children,
            (true, Some(text)) => LoadingContent::SpinnerWithText(text.clone()),
            (true, None) => LoadingContent::SpinnerOverChildren,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One of the two mutually exclusive button shapes.
pub enum ButtonTarget {
    /// Renders an `<a>` element.
    Link(LinkAttributes),
    /// Renders a `<button>` element.
    Action(ActionState),
}

impl Default for ButtonTarget {
    fn default() -> Self {
        Self::Action(ActionState::default())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejections raised when a [`ButtonSpec`] mixes the two button shapes.
pub enum ButtonSpecError {
    /// A link button was given an interaction field.
    #[error("link button cannot carry `{field}`")]
    ActionFieldOnLink {
        /// Offending field name.
        field: &'static str,
    },
    /// A button without `href` was given a link field.
    #[error("action button cannot carry `{field}` without `href`")]
    LinkFieldOnAction {
        /// Offending field name.
        field: &'static str,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Loose, deserializable button description.
///
/// The shape is chosen by the presence of a non-empty `href`; fields that
/// belong to the other shape are rejected by [`ButtonSpec::target`].
pub struct ButtonSpec {
    /// Visible label.
    pub label: String,
    /// Style axes.
    #[serde(flatten)]
    pub style: ButtonStyle,
    /// Caller class override.
    pub class_name: Option<String>,
    /// Link target.
    pub href: Option<String>,
    /// Link browsing context.
    pub target: Option<String>,
    /// Link relationship.
    pub rel: Option<String>,
    /// Disabled flag.
    pub disabled: Option<bool>,
    /// Loading flag.
    pub loading: Option<bool>,
    /// Loading text.
    pub loading_text: Option<String>,
}

impl ButtonSpec {
    /// Resolves the button shape.
    ///
    /// # Errors
    ///
    /// Returns [`ButtonSpecError::ActionFieldOnLink`] when a link carries
    /// `disabled`, `loading`, or `loadingText`, and
    /// [`ButtonSpecError::LinkFieldOnAction`] when `target` or `rel` appear
    /// without an `href`.
    pub fn target(&self) -> Result<ButtonTarget, ButtonSpecError> {
        match self.href.as_deref().filter(|href| !href.is_empty()) {
            Some(href) => {
                let action_fields = [
                    ("disabled", self.disabled.is_some()),
                    ("loading", self.loading.is_some()),
                    ("loadingText", self.loading_text.is_some()),
                ];
                if let Some((field, _)) = action_fields.into_iter().find(|(_, set)| *set) {
                    return Err(ButtonSpecError::ActionFieldOnLink { field });
                }
                Ok(ButtonTarget::Link(LinkAttributes {
                    href: href.to_string(),
                    target: self.target.clone(),
                    rel: self.rel.clone(),
                }))
            }
            None => {
                if self.target.is_some() {
                    return Err(ButtonSpecError::LinkFieldOnAction { field: "target" });
                }
                if self.rel.is_some() {
                    return Err(ButtonSpecError::LinkFieldOnAction { field: "rel" });
                }
                Ok(ButtonTarget::Action(ActionState::new(
                    self.disabled.unwrap_or(false),
                    self.loading.unwrap_or(false),
                    self.loading_text.clone(),
                )))
            }
        }
    }
}

impl TryFrom<&ButtonSpec> for ButtonTarget {
    type Error = ButtonSpecError;

    fn try_from(spec: &ButtonSpec) -> Result<Self, Self::Error> {
        spec.target()
    }
}
