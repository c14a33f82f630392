//! HTML serialization of a [`RenderedDocument`].
//!
//! User text reaches the output only through [`escape_html`].

use std::fmt::Write;

use crate::render::document::{Block, Contact, Header, Item, RenderedDocument, SectionBody, SectionKind};

pub const PLACEHOLDER_HTML: &str = "<p class=\"placeholder-text\">Your CV preview will appear here. \
     Fill in the form and click \"Generate Preview\".</p>";

const CONTACT_SEPARATOR: &str = "<span class=\"cv-sep\"> | </span>";

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

pub fn to_html(doc: &RenderedDocument) -> String {
    if doc.is_placeholder() {
        return PLACEHOLDER_HTML.to_string();
    }

    let mut html = String::new();
    if let Some(header) = &doc.header {
        write_header(&mut html, header);
    }
    for section in &doc.sections {
        let _ = write!(
            html,
            "<div class=\"cv-section cv-section-{}\"><div class=\"cv-section-title\">{}</div>",
            section_slug(section.kind),
            escape_html(&section.title)
        );
        match &section.body {
            SectionBody::Block(block) => {
                let class = match section.kind {
                    SectionKind::Summary => "cv-summary",
                    SectionKind::Skills => "cv-skills",
                    _ => "cv-text",
                };
                let _ = write!(html, "<div class=\"{class}\">");
                write_block(&mut html, block);
                html.push_str("</div>");
            }
            SectionBody::Items(items) => {
                for item in items {
                    write_item(&mut html, section.kind, item);
                }
            }
        }
        html.push_str("</div>");
    }
    html
}

fn section_slug(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Summary => "summary",
        SectionKind::Experience => "experience",
        SectionKind::Education => "education",
        SectionKind::Skills => "skills",
        SectionKind::Certifications => "certifications",
    }
}

fn write_header(html: &mut String, header: &Header) {
    html.push_str("<div class=\"cv-header\">");
    if let Some(src) = &header.photo_data_url {
        let _ = write!(
            html,
            "<img class=\"cv-photo\" src=\"{}\" alt=\"Profile photo\">",
            escape_html(src)
        );
    }
    if let Some(name) = &header.name {
        let _ = write!(html, "<div class=\"cv-name\">{}</div>", escape_html(name));
    }
    if let Some(headline) = &header.headline {
        let _ = write!(html, "<div class=\"cv-headline\">{}</div>", escape_html(headline));
    }
    if !header.contacts.is_empty() {
        html.push_str("<div class=\"cv-contact\">");
        for (i, contact) in header.contacts.iter().enumerate() {
            if i > 0 {
                html.push_str(CONTACT_SEPARATOR);
            }
            match contact {
                Contact::Text { value } => {
                    let _ = write!(html, "<span>{}</span>", escape_html(value));
                }
                Contact::Link { href, label } => {
                    let _ = write!(
                        html,
                        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                        escape_html(href),
                        escape_html(label)
                    );
                }
            }
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");
}

fn write_item(html: &mut String, kind: SectionKind, item: &Item) {
    let (item_class, title_class, subtitle_class) = match kind {
        SectionKind::Education => ("cv-education-item", "cv-degree", "cv-school"),
        SectionKind::Certifications => ("cv-certification-item", "cv-job-title", "cv-company"),
        _ => ("cv-experience-item", "cv-job-title", "cv-company"),
    };
    let _ = write!(
        html,
        "<div class=\"{item_class}\"><div class=\"{title_class}\">{}</div><div class=\"{subtitle_class}\">{}</div>",
        escape_html(&item.title),
        escape_html(&item.subtitle)
    );
    if let Some(date) = &item.date_line {
        let _ = write!(html, "<div class=\"cv-date\">{}</div>", escape_html(date));
    }
    if let Some(block) = &item.description {
        html.push_str("<div class=\"cv-description\">");
        write_block(html, block);
        html.push_str("</div>");
    }
    html.push_str("</div>");
}

fn write_block(html: &mut String, block: &Block) {
    match block {
        Block::Plain(text) => html.push_str(&escape_html(text)),
        Block::Bullets(lines) => {
            html.push_str("<ul>");
            for line in lines {
                let _ = write!(html, "<li>{}</li>", escape_html(line));
            }
            html.push_str("</ul>");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::document::{ContentStats, Section};

    fn doc_with(sections: Vec<Section>) -> RenderedDocument {
        RenderedDocument {
            header: None,
            sections,
            stats: ContentStats::default(),
        }
    }

    #[test]
    fn test_escape_html_covers_significant_characters() {
        assert_eq!(
            escape_html(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escape_html_leaves_plain_text() {
        assert_eq!(escape_html("Café – 2024"), "Café – 2024");
    }

    #[test]
    fn test_empty_document_is_placeholder_markup() {
        let html = to_html(&doc_with(vec![]));
        assert_eq!(html, PLACEHOLDER_HTML);
        assert!(html.contains("placeholder-text"));
    }

    #[test]
    fn test_plain_block_has_no_list() {
        let html = to_html(&doc_with(vec![Section::new(
            SectionKind::Skills,
            SectionBody::Block(Block::Plain("Rust".to_string())),
        )]));
        assert!(html.contains("<div class=\"cv-skills\">Rust</div>"));
        assert!(!html.contains("<ul>"));
    }

    #[test]
    fn test_bullets_render_as_list_items() {
        let html = to_html(&doc_with(vec![Section::new(
            SectionKind::Skills,
            SectionBody::Block(Block::Bullets(vec!["Rust".to_string(), "a<b".to_string()])),
        )]));
        assert!(html.contains("<ul><li>Rust</li><li>a&lt;b</li></ul>"));
    }

    #[test]
    fn test_contacts_are_separated() {
        let doc = RenderedDocument {
            header: Some(Header {
                name: Some("Jane".to_string()),
                headline: None,
                contacts: vec![
                    Contact::Text {
                        value: "Berlin".to_string(),
                    },
                    Contact::Link {
                        href: "https://example.com/?a=1&b=2".to_string(),
                        label: "Site".to_string(),
                    },
                ],
                photo_data_url: None,
            }),
            sections: vec![],
            stats: ContentStats::default(),
        };
        let html = to_html(&doc);
        assert!(html.contains("<span>Berlin</span><span class=\"cv-sep\"> | </span><a href"));
        assert!(html.contains("href=\"https://example.com/?a=1&amp;b=2\""));
        assert!(!html.contains("placeholder-text"));
    }
}
