//! Utility-class style table for the button primitives.
//!
//! Every fragment is `'static` data selected by exhaustive matches, so each
//! (color, variant) pair resolves by construction and nothing is ever mutated
//! after compilation.

use serde::{Deserialize, Serialize};

/// Layout, focus, and disabled treatment shared by every button.
pub const BUTTON_BASE_CLASS: &str = "inline-flex appearance-none items-center justify-center \
select-none relative whitespace-nowrap align-middle outline-none rounded-md font-medium \
transition-colors transition-shadow min-w-[2.5rem] gap-2 disabled:opacity-40 \
disabled:shadow-none disabled:pointer-events-none focus-visible:shadow-outline";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Visual treatment of a button, independent of its color.
pub enum ButtonVariant {
    /// Filled background with a border and subtle shadow.
    Solid,
    /// Transparent background with a colored border.
    Outline,
    /// Transparent background without a border.
    Ghost,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Solid
    }
}

impl ButtonVariant {
    /// Every variant in table order.
    pub const ALL: [Self; 3] = [Self::Solid, Self::Outline, Self::Ghost];

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
        }
    }

    /// Variant fragment of the style table.
    pub fn class(self) -> &'static str {
        match self {
            Self::Solid => "border shadow-subtle",
            Self::Outline => "bg-transparent border hover:bg-opacity-50",
            Self::Ghost => "bg-transparent border-none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Color family of a button.
pub enum ButtonColor {
    /// Neutral gray.
    Gray,
    /// Brand purple.
    Purple,
    /// Destructive red.
    Red,
    /// High-contrast black.
    Black,
    /// Warning yellow.
    Yellow,
}

impl Default for ButtonColor {
    fn default() -> Self {
        Self::Gray
    }
}

impl ButtonColor {
    /// Every color in table order.
    pub const ALL: [Self; 5] = [
        Self::Gray,
        Self::Purple,
        Self::Red,
        Self::Black,
        Self::Yellow,
    ];

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Purple => "purple",
            Self::Red => "red",
            Self::Black => "black",
            Self::Yellow => "yellow",
        }
    }

    /// Color fragment for this color under `variant`.
    pub fn class(self, variant: ButtonVariant) -> &'static str {
        use ButtonVariant::{Ghost, Outline, Solid};

        match (self, variant) {
            (Self::Gray, Solid) => {
                "text-gray-800 bg-whiteAlpha-900 border-gray-200 hover:bg-gray-100 active:bg-gray-300"
            }
            (Self::Gray, Ghost) => "text-gray-800 hover:bg-gray-100 active:bg-gray-200",
            (Self::Gray, Outline) => {
                "border-gray-200 text-gray-800 hover:bg-gray-100 active:bg-gray-200"
            }
            (Self::Purple, Solid) => {
                "bg-purple-500 text-white border-current hover:bg-purple-600 active:bg-purple-700"
            }
            (Self::Purple, Ghost) => {
                "text-purple-500 border-none hover:bg-purple-50 active:bg-purple-100"
            }
            (Self::Purple, Outline) => "text-purple-500 hover:bg-purple-50 active:bg-purple-100",
            (Self::Red, Solid) => {
                "text-white bg-red-500 border-current hover:bg-red-600 active:bg-red-700"
            }
            (Self::Red, Ghost) => "text-red-500 hover:bg-red-50 active:bg-red-100",
            (Self::Red, Outline) => "text-red-500 border-current hover:bg-red-50 active:bg-red-100",
            (Self::Black, Solid) => {
                "text-whiteAlpha-900 bg-gray-800 border-current hover:bg-gray-900 active:bg-gray-900"
            }
            (Self::Black, Ghost) => "text-gray-800 hover:bg-gray-50 active:bg-gray-100",
            (Self::Black, Outline) => {
                "text-gray-800 border-current hover:bg-gray-50 active:bg-gray-100"
            }
            (Self::Yellow, Solid) => {
                "text-gray-800 bg-yellow-400 hover:bg-yellow-500 active:bg-yellow-600"
            }
            (Self::Yellow, Ghost) => "text-yellow-500 hover:bg-yellow-50 active:bg-yellow-100",
            (Self::Yellow, Outline) => {
                "text-yellow-500 border-current hover:bg-yellow-50 hover:bg-opacity-50 active:bg-yellow-100"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Button sizing tokens.
pub enum ButtonSize {
    /// Extra small.
    Xs,
    /// Small.
    Sm,
    /// Default.
    Md,
    /// Large.
    Lg,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ButtonSize {
    /// Every size in table order.
    pub const ALL: [Self; 4] = [Self::Xs, Self::Sm, Self::Md, Self::Lg];

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    /// Size fragment of the style table.
    pub fn class(self) -> &'static str {
        match self {
            Self::Xs => "text-xs px-2 h-6",
            Self::Sm => "text-sm px-3 h-8",
            Self::Md => "text-sm px-3 py-1.5 h-8",
            Self::Lg => "text-lg px-6 h-12",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
/// The three style axes of a button.
pub struct ButtonStyle {
    /// Visual treatment.
    pub variant: ButtonVariant,
    /// Color family.
    pub color: ButtonColor,
    /// Sizing token.
    pub size: ButtonSize,
}

impl ButtonStyle {
    /// Creates a style from its three axes.
    pub const fn new(variant: ButtonVariant, color: ButtonColor, size: ButtonSize) -> Self {
        Self {
            variant,
            color,
            size,
        }
    }

    /// Resolves the class string for this style with an optional caller override.
    ///
    /// Fragments are joined as base, size, color, variant, and the override
    /// comes last so it wins cascade-order ties.
    pub fn class(self, class: Option<&str>) -> String {
        cx(&[
            Some(BUTTON_BASE_CLASS),
            Some(self.size.class()),
            Some(self.color.class(self.variant)),
            Some(self.variant.class()),
            class,
        ])
    }
}

/// Joins class fragments with single spaces, skipping absent and blank entries.
pub fn cx(parts: &[Option<&str>]) -> String {
    let mut joined = String::new();
    for part in parts.iter().flatten().map(|part| part.trim()) {
        if part.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(part);
    }
    joined
}
