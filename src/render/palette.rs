//! Fixed color palettes

use crate::block::{AmountStyle, ButtonColor, CalloutTone, HeadingSize};

pub(crate) struct CalloutPalette {
    pub background: &'static str,
    pub border: &'static str,
    pub text: &'static str,
}

pub(crate) fn callout(tone: CalloutTone) -> CalloutPalette {
    match tone {
        CalloutTone::Success => CalloutPalette {
            background: "#f0fdf4",
            border: "#22c55e",
            text: "#166534",
        },
        CalloutTone::Info => CalloutPalette {
            background: "#eff6ff",
            border: "#3b82f6",
            text: "#1e40af",
        },
        CalloutTone::Warning => CalloutPalette {
            background: "#fffbeb",
            border: "#f59e0b",
            text: "#92400e",
        },
        CalloutTone::Error => CalloutPalette {
            background: "#fef2f2",
            border: "#ef4444",
            text: "#991b1b",
        },
    }
}

/// Button background and label colors
pub(crate) fn button(color: ButtonColor) -> (&'static str, &'static str) {
    match color {
        ButtonColor::Primary => ("#2563eb", "#ffffff"),
        ButtonColor::Success => ("#16a34a", "#ffffff"),
        ButtonColor::Warning => ("#d97706", "#ffffff"),
        ButtonColor::Danger => ("#dc2626", "#ffffff"),
        ButtonColor::Gray => ("#6b7280", "#ffffff"),
    }
}

pub(crate) struct AmountPalette {
    pub background: &'static str,
    pub figure: &'static str,
    pub caption: &'static str,
}

pub(crate) fn amount(style: AmountStyle) -> AmountPalette {
    match style {
        AmountStyle::Default => AmountPalette {
            background: "#f3f4f6",
            figure: "#111827",
            caption: "#6b7280",
        },
        AmountStyle::Success => AmountPalette {
            background: "#f0fdf4",
            figure: "#15803d",
            caption: "#166534",
        },
        AmountStyle::Warning => AmountPalette {
            background: "#fffbeb",
            figure: "#b45309",
            caption: "#92400e",
        },
    }
}

/// Heading tag and font size in pixels
pub(crate) fn heading(size: HeadingSize) -> (&'static str, u32) {
    match size {
        HeadingSize::Small => ("h3", 18),
        HeadingSize::Medium => ("h2", 22),
        HeadingSize::Large => ("h1", 28),
    }
}
