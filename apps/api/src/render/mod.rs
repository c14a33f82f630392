// Preview Renderer: form snapshot → structured document → escaped markup.
// Rendering is total: missing optional fields drop their fragment, nothing fails.

pub mod document;
pub mod export;
pub mod handlers;
pub mod markup;
pub mod preview;
pub mod text;

use tracing::{debug, instrument};

use crate::form::state::FormState;
use crate::models::form::{Certification, Education, LinkField, PersonalInfo, WorkExperience};
use crate::render::document::{
    Block, Contact, ContentStats, Header, Item, RenderedDocument, Section, SectionBody, SectionKind,
};
use crate::render::text::{block_from_lines, description_lines, join_present, non_empty, skill_items};

pub use preview::{generate_preview, Preview};

/// Builds the full document from a settled snapshot of the form.
#[instrument(skip(form))]
pub fn render(form: &FormState) -> RenderedDocument {
    let personal = &form.personal;
    let mut stats = ContentStats::default();
    let mut sections = Vec::new();

    if let Some(summary) = non_empty(&personal.summary) {
        stats.summary_chars = summary.chars().count();
        sections.push(Section::new(
            SectionKind::Summary,
            SectionBody::Block(Block::Plain(summary)),
        ));
    }

    let experience: Vec<Item> = form
        .experience()
        .qualifying()
        .map(|e| {
            let item = experience_item(e);
            stats.bullet_lines += item.description.as_ref().map_or(0, Block::line_count);
            item
        })
        .collect();
    stats.experience_count = experience.len();
    push_items(&mut sections, SectionKind::Experience, experience);

    let education: Vec<Item> = form.education().qualifying().map(education_item).collect();
    stats.education_count = education.len();
    push_items(&mut sections, SectionKind::Education, education);

    let skills = personal.skills.trim();
    if let Some(block) = block_from_lines(skill_items(skills)) {
        stats.skills_chars = skills.chars().count();
        sections.push(Section::new(SectionKind::Skills, SectionBody::Block(block)));
    }

    let certifications: Vec<Item> = form
        .certifications()
        .qualifying()
        .map(certification_item)
        .collect();
    stats.certification_count = certifications.len();
    push_items(&mut sections, SectionKind::Certifications, certifications);

    let header = build_header(personal, form.photo().map(|p| p.data_url.clone()));

    debug!(
        sections = sections.len(),
        has_header = header.is_some(),
        ?stats,
        "Document rendered"
    );

    RenderedDocument {
        header,
        sections,
        stats,
    }
}

fn push_items(sections: &mut Vec<Section>, kind: SectionKind, items: Vec<Item>) {
    if !items.is_empty() {
        sections.push(Section::new(kind, SectionBody::Items(items)));
    }
}

/// `None` when no header text is present; a photo alone does not make a header.
fn build_header(personal: &PersonalInfo, photo_data_url: Option<String>) -> Option<Header> {
    let name = non_empty(&personal.full_name);
    let headline = non_empty(&personal.headline);

    let mut contacts = Vec::new();
    for value in [&personal.location, &personal.email, &personal.phone] {
        if let Some(value) = non_empty(value) {
            contacts.push(Contact::Text { value });
        }
    }
    for link in [&personal.linkedin, &personal.portfolio] {
        if let Some(contact) = link_contact(link) {
            contacts.push(contact);
        }
    }

    if name.is_none() && headline.is_none() && contacts.is_empty() {
        return None;
    }

    Some(Header {
        name,
        headline,
        contacts,
        photo_data_url,
    })
}

fn link_contact(link: &LinkField) -> Option<Contact> {
    let url = non_empty(&link.url)?;
    let label = non_empty(&link.label);
    match (link.show_as_link, label, link_href(&url)) {
        (true, Some(label), Some(href)) => Some(Contact::Link { href, label }),
        _ => Some(Contact::Text { value: url }),
    }
}

/// Only http(s) targets become links. A bare host gets `https://`; any other scheme stays text.
fn link_href(url: &str) -> Option<String> {
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        return Some(url.to_string());
    }
    let has_scheme = url
        .split_once(':')
        .map(|(scheme, _)| !scheme.contains('/') && scheme.chars().all(|c| c.is_ascii_alphabetic()))
        .unwrap_or(false);
    if has_scheme {
        None
    } else {
        Some(format!("https://{url}"))
    }
}

fn with_suffix(main: &str, sep: &str, suffix: &str) -> String {
    match non_empty(suffix) {
        Some(s) => format!("{}{sep}{s}", main.trim()),
        None => main.trim().to_string(),
    }
}

fn experience_item(e: &WorkExperience) -> Item {
    Item {
        title: e.title.trim().to_string(),
        subtitle: with_suffix(&e.company, ", ", &e.location),
        date_line: non_empty(&join_present(&[e.start_date.as_str(), e.end_date.as_str()], " - ")),
        description: block_from_lines(description_lines(&e.description)),
    }
}

fn education_item(e: &Education) -> Item {
    let gpa = non_empty(&e.gpa).map(|g| format!("GPA: {g}")).unwrap_or_default();
    Item {
        title: e.degree.trim().to_string(),
        subtitle: with_suffix(&e.school, ", ", &e.location),
        date_line: non_empty(&join_present(&[e.graduation_date.as_str(), gpa.as_str()], " | ")),
        description: None,
    }
}

fn certification_item(c: &Certification) -> Item {
    Item {
        title: c.name.trim().to_string(),
        subtitle: with_suffix(&c.issuer, " | ", &c.date),
        date_line: None,
        description: None,
    }
}
