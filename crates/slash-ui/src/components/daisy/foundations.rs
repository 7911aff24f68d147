use yew::prelude::*;

/// Shared DaisyUI color tokens used by multiple components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DaisyColor {
    Primary,
}

impl DaisyColor {
    /// Returns the class suffix (e.g. `"primary"`) for the color.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
        }
    }
}

/// Common sizing tokens used by DaisyUI controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DaisySize {
    Xs,
    Sm,
    #[default]
    Md,
}

impl DaisySize {
    /// Returns the suffix used by DaisyUI for the selected size.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }

    /// Adds a prefix (e.g. `btn`) to the size suffix for class composition.
    #[must_use]
    pub fn with_prefix(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.suffix())
    }
}

/// Variants used across button-like elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DaisyVariant {
    #[default]
    Solid,
    Outline,
    Ghost,
}

impl DaisyVariant {
    /// Maps the variant to the DaisyUI class name.
    #[must_use]
    pub const fn as_class(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Outline => Some("btn-outline"),
            Self::Ghost => Some("btn-ghost"),
        }
    }
}

/// Convenience helper for composing class lists with an optional tone.
#[must_use]
pub fn tone_class(prefix: &str, tone: Option<DaisyColor>) -> Option<String> {
    tone.map(|color| format!("{prefix}-{}", color.as_str()))
}

/// Prefix-aware class list: base, size and optional tone, then consumer classes.
#[must_use]
pub fn control_classes(
    base: &'static str,
    size: DaisySize,
    tone: Option<DaisyColor>,
    extra: &Classes,
) -> Classes {
    let mut classes = classes!(base, size.with_prefix(base), extra.clone());
    if let Some(tone) = tone_class(base, tone) {
        classes.push(tone);
    }
    classes
}
