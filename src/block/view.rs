//! Typed per-kind view over a block

use super::types::{Block, BlockKind};

/// Heading size hint (`size` property)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl HeadingSize {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "small" => Some(HeadingSize::Small),
            "medium" => Some(HeadingSize::Medium),
            "large" => Some(HeadingSize::Large),
            _ => None,
        }
    }
}

/// Button variant (`color` property)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonColor {
    #[default]
    Primary,
    Success,
    Warning,
    Danger,
    /// Neutral variant, also used for unrecognized colors
    Gray,
}

impl ButtonColor {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "primary" => Some(ButtonColor::Primary),
            "success" => Some(ButtonColor::Success),
            "warning" => Some(ButtonColor::Warning),
            "danger" => Some(ButtonColor::Danger),
            "gray" => Some(ButtonColor::Gray),
            _ => None,
        }
    }
}

/// Amount palette (`style` property)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmountStyle {
    #[default]
    Default,
    Success,
    Warning,
}

impl AmountStyle {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "default" => Some(AmountStyle::Default),
            "success" => Some(AmountStyle::Success),
            "warning" => Some(AmountStyle::Warning),
            _ => None,
        }
    }
}

/// Fixed callout palette, one per box kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalloutTone {
    Success,
    Info,
    Warning,
    Error,
}

/// A property resolved against its closed set of values.
///
/// `rejected` holds the raw value when it was present but unrecognized
/// and `resolved` is the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyChoice<'a, T> {
    pub resolved: T,
    pub rejected: Option<&'a str>,
}

impl<'a, T> PropertyChoice<'a, T> {
    fn resolve(
        raw: Option<&'a str>,
        parse: impl Fn(&str) -> Option<T>,
        when_absent: T,
        when_unrecognized: T,
    ) -> Self {
        match raw {
            None => Self {
                resolved: when_absent,
                rejected: None,
            },
            Some(value) => match parse(value) {
                Some(resolved) => Self {
                    resolved,
                    rejected: None,
                },
                None => Self {
                    resolved: when_unrecognized,
                    rejected: Some(value),
                },
            },
        }
    }
}

/// One row of a `details-table`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailRow<'a> {
    /// `Label:Value`, split on the first colon
    Pair { label: &'a str, value: &'a str },
    /// A line without a colon, spanning both columns
    FullWidth(&'a str),
}

/// A block interpreted according to its kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockView<'a> {
    Greeting {
        text: &'a str,
    },
    Text {
        text: &'a str,
    },
    Heading {
        text: &'a str,
        size: PropertyChoice<'a, HeadingSize>,
    },
    Button {
        label: &'a str,
        url: Option<&'a str>,
        color: PropertyChoice<'a, ButtonColor>,
    },
    Callout {
        tone: CalloutTone,
        text: &'a str,
    },
    DetailsTable {
        rows: Vec<DetailRow<'a>>,
    },
    AmountDisplay {
        amount: &'a str,
        label: Option<&'a str>,
        style: PropertyChoice<'a, AmountStyle>,
    },
    NumberedList {
        items: Vec<&'a str>,
    },
    Footer {
        text: &'a str,
    },
    Unknown {
        kind: &'a str,
    },
}

impl Block {
    /// Interpret this block according to its kind
    pub fn view(&self) -> BlockView<'_> {
        let text = self.content.as_str();

        match &self.kind {
            BlockKind::Greeting => BlockView::Greeting { text },
            BlockKind::Text => BlockView::Text { text },
            BlockKind::Heading => BlockView::Heading {
                text,
                size: PropertyChoice::resolve(
                    self.property("size"),
                    HeadingSize::parse,
                    HeadingSize::Medium,
                    HeadingSize::Medium,
                ),
            },
            BlockKind::Button => BlockView::Button {
                label: text,
                url: self.property("url"),
                color: PropertyChoice::resolve(
                    self.property("color"),
                    ButtonColor::parse,
                    ButtonColor::Primary,
                    ButtonColor::Gray,
                ),
            },
            BlockKind::SuccessBox => BlockView::Callout {
                tone: CalloutTone::Success,
                text,
            },
            BlockKind::InfoBox => BlockView::Callout {
                tone: CalloutTone::Info,
                text,
            },
            BlockKind::WarningBox => BlockView::Callout {
                tone: CalloutTone::Warning,
                text,
            },
            BlockKind::ErrorBox => BlockView::Callout {
                tone: CalloutTone::Error,
                text,
            },
            BlockKind::DetailsTable => BlockView::DetailsTable {
                rows: detail_rows(text),
            },
            BlockKind::AmountDisplay => BlockView::AmountDisplay {
                amount: text,
                label: self.property("label"),
                style: PropertyChoice::resolve(
                    self.property("style"),
                    AmountStyle::parse,
                    AmountStyle::Default,
                    AmountStyle::Default,
                ),
            },
            BlockKind::NumberedList => BlockView::NumberedList {
                items: list_items(text),
            },
            BlockKind::Footer => BlockView::Footer { text },
            BlockKind::Unknown(kind) => BlockView::Unknown { kind },
        }
    }
}

fn detail_rows(content: &str) -> Vec<DetailRow<'_>> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once(':') {
            Some((label, value)) => DetailRow::Pair {
                label: label.trim(),
                value: value.trim(),
            },
            None => DetailRow::FullWidth(line),
        })
        .collect()
}

// A line starting with "- " stays part of its own item text.
fn list_items(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_size_fallback() {
        let block = Block::new(BlockKind::Heading, "Title");
        match block.view() {
            BlockView::Heading { size, .. } => {
                assert_eq!(size.resolved, HeadingSize::Medium);
                assert_eq!(size.rejected, None);
            }
            other => panic!("unexpected view: {:?}", other),
        }

        let block = block.with_property("size", "huge");
        match block.view() {
            BlockView::Heading { size, .. } => {
                assert_eq!(size.resolved, HeadingSize::Medium);
                assert_eq!(size.rejected, Some("huge"));
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_button_color_absent_vs_unrecognized() {
        let block = Block::new(BlockKind::Button, "Go").with_property("url", "https://x.test");
        match block.view() {
            BlockView::Button { color, url, .. } => {
                assert_eq!(color.resolved, ButtonColor::Primary);
                assert_eq!(url, Some("https://x.test"));
            }
            other => panic!("unexpected view: {:?}", other),
        }

        let block = block.with_property("color", "purple");
        match block.view() {
            BlockView::Button { color, .. } => {
                assert_eq!(color.resolved, ButtonColor::Gray);
                assert_eq!(color.rejected, Some("purple"));
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_callout_tones() {
        let cases = [
            (BlockKind::SuccessBox, CalloutTone::Success),
            (BlockKind::InfoBox, CalloutTone::Info),
            (BlockKind::WarningBox, CalloutTone::Warning),
            (BlockKind::ErrorBox, CalloutTone::Error),
        ];

        for (kind, expected) in cases {
            let block = Block::new(kind, "note");
            assert_eq!(
                block.view(),
                BlockView::Callout {
                    tone: expected,
                    text: "note"
                }
            );
        }
    }

    #[test]
    fn test_details_rows_split_on_first_colon() {
        let block = Block::new(
            BlockKind::DetailsTable,
            "Gross:100\nNo colon here\n\nLink: https://example.com/a\nFee:5",
        );

        match block.view() {
            BlockView::DetailsTable { rows } => {
                assert_eq!(
                    rows,
                    vec![
                        DetailRow::Pair {
                            label: "Gross",
                            value: "100"
                        },
                        DetailRow::FullWidth("No colon here"),
                        DetailRow::Pair {
                            label: "Link",
                            value: "https://example.com/a"
                        },
                        DetailRow::Pair {
                            label: "Fee",
                            value: "5"
                        },
                    ]
                );
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_list_items_drop_blanks_and_keep_dash_prefix() {
        let block = Block::new(
            BlockKind::NumberedList,
            "Step one\n\n- sub point\r\n   \nStep two",
        );

        match block.view() {
            BlockView::NumberedList { items } => {
                assert_eq!(items, vec!["Step one", "- sub point", "Step two"]);
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_amount_display_view() {
        let block = Block::new(BlockKind::AmountDisplay, "{{amount}}")
            .with_property("label", "You received")
            .with_property("style", "success");

        assert_eq!(
            block.view(),
            BlockView::AmountDisplay {
                amount: "{{amount}}",
                label: Some("You received"),
                style: PropertyChoice {
                    resolved: AmountStyle::Success,
                    rejected: None
                },
            }
        );
    }

    #[test]
    fn test_unknown_view() {
        let block = Block::new(BlockKind::parse("poll"), "?");
        assert_eq!(block.view(), BlockView::Unknown { kind: "poll" });
    }
}
