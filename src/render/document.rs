//! Document shell and block layout

use crate::block::{normalize_hex_color, BlockKind, VisualTemplate, DEFAULT_HEADER_COLOR};

use super::escape::escape_html;
use super::fragments::block_fragment;
use super::types::{RenderOptions, RenderWarning, Rendered};

/// Renders block compositions into email HTML.
///
/// Stateless apart from its layout options; safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render a template into a complete HTML document.
    ///
    /// Deterministic: equal input always yields byte-identical output.
    pub fn render(&self, template: &VisualTemplate) -> Rendered {
        let mut warnings = Vec::new();

        let header_color = match template.normalized_header_color() {
            Some(color) => color,
            None => {
                warnings.push(RenderWarning::InvalidHeaderColor {
                    color: template.header_color.clone(),
                });
                DEFAULT_HEADER_COLOR.to_string()
            }
        };

        let mut body = Vec::with_capacity(template.blocks.len());
        let mut footer = Vec::new();
        for block in &template.blocks {
            let Some(fragment) = block_fragment(block, &mut warnings) else {
                continue;
            };
            // Footers are pinned below everything else, keeping their relative order
            if block.kind == BlockKind::Footer {
                footer.push(fragment);
            } else {
                body.push(fragment);
            }
        }

        for warning in &warnings {
            tracing::debug!(
                code = warning.code(),
                block_id = warning.block_id().unwrap_or("-"),
                "Render degraded: {}",
                warning
            );
        }

        Rendered {
            html: self.document(&template.header_title, &header_color, &body, &footer),
            warnings,
        }
    }

    fn document(&self, title: &str, header_color: &str, body: &[String], footer: &[String]) -> String {
        let width = self.options.content_width;
        let background = normalize_hex_color(&self.options.background_color)
            .unwrap_or_else(|| RenderOptions::default().background_color);
        let font = escape_html(&self.options.font_family);
        let title = escape_html(title);

        let mut html = String::with_capacity(4096);
        html.push_str("<!DOCTYPE html>\n");
        html.push_str("<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        html.push_str("<meta http-equiv=\"X-UA-Compatible\" content=\"IE=edge\">\n");
        html.push_str(&format!("<title>{title}</title>\n"));
        html.push_str("</head>\n");
        html.push_str(&format!(
            "<body style=\"margin:0;padding:0;background-color:{background};font-family:{font};\">\n"
        ));
        html.push_str(&format!(
            "<table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\" style=\"background-color:{background};\">\n"
        ));
        html.push_str("<tr><td align=\"center\" style=\"padding:24px 12px;\">\n");
        html.push_str(&format!(
            "<table role=\"presentation\" width=\"{width}\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\" style=\"width:{width}px;max-width:{width}px;background-color:#ffffff;border-radius:8px;\">\n"
        ));

        // Banner
        html.push_str(&format!(
            "<tr><td style=\"padding:32px 40px;background-color:{header_color};border-radius:8px 8px 0 0;text-align:center;\">\
<h1 style=\"margin:0;font-size:24px;line-height:1.3;font-weight:700;color:#ffffff;\">{title}</h1></td></tr>\n"
        ));

        html.push_str("<tr><td style=\"padding:32px 40px;font-size:16px;line-height:1.6;color:#374151;\">\n");
        for fragment in body {
            html.push_str(fragment);
            html.push('\n');
        }
        html.push_str("</td></tr>\n");

        if !footer.is_empty() {
            html.push_str("<tr><td style=\"padding:24px 40px;background-color:#f9fafb;border-top:1px solid #e5e7eb;border-radius:0 0 8px 8px;font-size:12px;line-height:1.5;color:#6b7280;text-align:center;\">\n");
            for fragment in footer {
                html.push_str(fragment);
                html.push('\n');
            }
            html.push_str("</td></tr>\n");
        }

        html.push_str("</table>\n</td></tr>\n</table>\n</body>\n</html>\n");
        html
    }
}

/// Render with default layout options
pub fn render(template: &VisualTemplate) -> Rendered {
    Renderer::default().render(template)
}
