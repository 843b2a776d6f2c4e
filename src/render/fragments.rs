//! Per-block HTML fragments

use crate::block::{Block, BlockView, DetailRow};

use super::escape::{escape_html, is_safe_url, multiline_html};
use super::palette;
use super::types::RenderWarning;

/// Emit the fragment for one block.
///
/// Returns `None` when the block produces no markup (unknown kind, or a
/// table/list with no rows).
pub(crate) fn block_fragment(block: &Block, warnings: &mut Vec<RenderWarning>) -> Option<String> {
    match block.view() {
        BlockView::Greeting { text } => Some(format!(
            "<p style=\"margin:0 0 16px;font-size:16px;line-height:1.6;color:#111827;font-weight:600;\">{}</p>",
            multiline_html(text)
        )),
        BlockView::Text { text } => Some(format!(
            "<p style=\"margin:0 0 16px;font-size:16px;line-height:1.6;color:#374151;\">{}</p>",
            multiline_html(text)
        )),
        BlockView::Heading { text, size } => {
            if let Some(raw) = size.rejected {
                warnings.push(RenderWarning::UnknownHeadingSize {
                    block_id: block.id.clone(),
                    size: raw.to_string(),
                });
            }
            let (tag, px) = palette::heading(size.resolved);
            Some(format!(
                "<{tag} style=\"margin:24px 0 12px;font-size:{px}px;line-height:1.3;font-weight:700;color:#111827;\">{}</{tag}>",
                escape_html(text),
            ))
        }
        BlockView::Button { label, url, color } => {
            if let Some(raw) = color.rejected {
                warnings.push(RenderWarning::UnknownButtonColor {
                    block_id: block.id.clone(),
                    color: raw.to_string(),
                });
            }

            match url {
                Some(url) if is_safe_url(url) => {
                    let (background, foreground) = palette::button(color.resolved);
                    Some(format!(
                        "<table role=\"presentation\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\" style=\"margin:24px auto;\">\
<tr><td align=\"center\" style=\"border-radius:6px;background-color:{background};\">\
<a href=\"{}\" target=\"_blank\" style=\"display:inline-block;padding:12px 28px;font-size:16px;font-weight:600;color:{foreground};text-decoration:none;border-radius:6px;\">{}</a>\
</td></tr></table>",
                        escape_html(url),
                        escape_html(label),
                    ))
                }
                other => {
                    match other {
                        Some(url) => warnings.push(RenderWarning::UnsafeButtonUrl {
                            block_id: block.id.clone(),
                            url: url.to_string(),
                        }),
                        None => warnings.push(RenderWarning::MissingButtonUrl {
                            block_id: block.id.clone(),
                        }),
                    }
                    Some(format!(
                        "<p style=\"margin:24px 0;text-align:center;\"><span style=\"display:inline-block;padding:12px 28px;font-size:16px;font-weight:600;color:#374151;background-color:#f3f4f6;border-radius:6px;\">{}</span></p>",
                        escape_html(label)
                    ))
                }
            }
        }
        BlockView::Callout { tone, text } => {
            let colors = palette::callout(tone);
            Some(format!(
                "<div style=\"margin:16px 0;padding:16px 20px;background-color:{};border-left:4px solid {};border-radius:4px;color:{};font-size:15px;line-height:1.6;\">{}</div>",
                colors.background,
                colors.border,
                colors.text,
                multiline_html(text)
            ))
        }
        BlockView::DetailsTable { rows } => {
            if rows.is_empty() {
                return None;
            }

            let mut html = String::from(
                "<table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\" style=\"margin:16px 0;border:1px solid #e5e7eb;border-radius:6px;border-collapse:separate;\">",
            );
            for row in rows {
                match row {
                    DetailRow::Pair { label, value } => html.push_str(&format!(
                        "<tr><td style=\"padding:10px 16px;border-bottom:1px solid #e5e7eb;font-size:14px;color:#6b7280;\">{}</td>\
<td style=\"padding:10px 16px;border-bottom:1px solid #e5e7eb;font-size:14px;color:#111827;font-weight:600;text-align:right;\">{}</td></tr>",
                        escape_html(label),
                        escape_html(value)
                    )),
                    DetailRow::FullWidth(line) => html.push_str(&format!(
                        "<tr><td colspan=\"2\" style=\"padding:10px 16px;border-bottom:1px solid #e5e7eb;font-size:14px;color:#374151;\">{}</td></tr>",
                        escape_html(line)
                    )),
                }
            }
            html.push_str("</table>");
            Some(html)
        }
        BlockView::AmountDisplay {
            amount,
            label,
            style,
        } => {
            if let Some(raw) = style.rejected {
                warnings.push(RenderWarning::UnknownAmountStyle {
                    block_id: block.id.clone(),
                    style: raw.to_string(),
                });
            }
            let colors = palette::amount(style.resolved);
            let caption = label
                .map(|label| {
                    format!(
                        "<p style=\"margin:0 0 8px;font-size:13px;letter-spacing:0.05em;text-transform:uppercase;color:{};\">{}</p>",
                        colors.caption,
                        escape_html(label)
                    )
                })
                .unwrap_or_default();
            Some(format!(
                "<div style=\"margin:24px 0;padding:24px;text-align:center;background-color:{};border-radius:8px;\">{}\
<p style=\"margin:0;font-size:36px;line-height:1.2;font-weight:700;color:{};\">{}</p></div>",
                colors.background,
                caption,
                colors.figure,
                escape_html(amount)
            ))
        }
        BlockView::NumberedList { items } => {
            if items.is_empty() {
                return None;
            }

            let mut html = String::from(
                "<ol style=\"margin:16px 0;padding-left:24px;font-size:16px;line-height:1.6;color:#374151;\">",
            );
            for item in items {
                html.push_str(&format!(
                    "<li style=\"margin:0 0 8px;\">{}</li>",
                    escape_html(item)
                ));
            }
            html.push_str("</ol>");
            Some(html)
        }
        BlockView::Footer { text } => Some(format!(
            "<p style=\"margin:0 0 8px;\">{}</p>",
            multiline_html(text)
        )),
        BlockView::Unknown { kind } => {
            warnings.push(RenderWarning::UnknownKind {
                block_id: block.id.clone(),
                kind: kind.to_string(),
            });
            None
        }
    }
}
