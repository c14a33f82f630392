//! Structured model of a rendered CV.
//!
//! Everything here holds raw (unescaped) user text. The only way to markup is
//! [`crate::render::markup::to_html`], which escapes every string it writes.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedDocument {
    pub header: Option<Header>,
    pub sections: Vec<Section>,
    pub stats: ContentStats,
}

impl RenderedDocument {
    /// True when there was nothing to show and the placeholder notice stands in for the CV.
    pub fn is_placeholder(&self) -> bool {
        self.header.is_none() && self.sections.is_empty()
    }
}

#[cfg(test)]
impl RenderedDocument {
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub name: Option<String>,
    pub headline: Option<String>,
    /// Non-empty contact fields in display order: location, email, phone, linkedin, portfolio.
    pub contacts: Vec<Contact>,
    pub photo_data_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Contact {
    Text { value: String },
    Link { href: String, label: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Certifications,
}

impl SectionKind {
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Summary => "Professional Summary",
            SectionKind::Experience => "Work Experience",
            SectionKind::Education => "Education",
            SectionKind::Skills => "Skills",
            SectionKind::Certifications => "Certifications",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub title: String,
    pub body: SectionBody,
}

impl Section {
    pub fn new(kind: SectionKind, body: SectionBody) -> Self {
        Section {
            kind,
            title: kind.title().to_string(),
            body,
        }
    }
}

#[cfg(test)]
impl Section {
    pub fn items(&self) -> &[Item] {
        match &self.body {
            SectionBody::Items(items) => items,
            SectionBody::Block(_) => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SectionBody {
    Block(Block),
    Items(Vec<Item>),
}

/// Free text after line splitting: a single line stays plain, several become bullets.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Block {
    Plain(String),
    Bullets(Vec<String>),
}

impl Block {
    /// Number of printed lines this block contributes.
    pub fn line_count(&self) -> usize {
        match self {
            Block::Plain(_) => 1,
            Block::Bullets(lines) => lines.len(),
        }
    }
}

/// One qualifying experience, education, or certification entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub title: String,
    pub subtitle: String,
    pub date_line: Option<String>,
    pub description: Option<Block>,
}

/// Content counts feeding the font-size heuristic.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContentStats {
    pub experience_count: usize,
    pub education_count: usize,
    pub certification_count: usize,
    pub summary_chars: usize,
    pub skills_chars: usize,
    /// Non-blank description lines across all rendered experience entries.
    pub bullet_lines: usize,
}
