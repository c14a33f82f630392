use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// The three repeatable entry categories of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Experience,
    Education,
    Certification,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Experience => "experience",
            Category::Education => "education",
            Category::Certification => "certification",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "experience" => Ok(Category::Experience),
            "education" => Ok(Category::Education),
            "certification" => Ok(Category::Certification),
            other => Err(AppError::NotFound(format!("Unknown entry category '{other}'"))),
        }
    }
}

/// Stable identifier of one entry: its category plus a per-category sequence number.
///
/// Sequence numbers are allocated in insertion order and never reused until the
/// form is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId {
    pub category: Category,
    pub seq: u32,
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category, self.seq)
    }
}

/// An entry that only appears in the rendered document once its mandatory fields are filled.
pub trait Qualifies {
    fn qualifies(&self) -> bool;
}

fn filled(s: &str) -> bool {
    !s.trim().is_empty()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkExperience {
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    /// Free text; one line per bullet, optional leading `-`, `•` or `*`.
    pub description: String,
}

impl Qualifies for WorkExperience {
    fn qualifies(&self) -> bool {
        filled(&self.title) && filled(&self.company)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub location: String,
    pub graduation_date: String,
    pub gpa: String,
}

impl Qualifies for Education {
    fn qualifies(&self) -> bool {
        filled(&self.degree) && filled(&self.school)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

impl Qualifies for Certification {
    fn qualifies(&self) -> bool {
        filled(&self.name) && filled(&self.issuer)
    }
}

/// Field payload for one entry, tagged with its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum EntryFields {
    Experience(WorkExperience),
    Education(Education),
    Certification(Certification),
}

impl EntryFields {
    pub fn category(&self) -> Category {
        match self {
            EntryFields::Experience(_) => Category::Experience,
            EntryFields::Education(_) => Category::Education,
            EntryFields::Certification(_) => Category::Certification,
        }
    }
}

/// A contact link (LinkedIn, portfolio) that can be shown either as raw text or as a named link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkField {
    pub url: String,
    pub label: String,
    pub show_as_link: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub headline: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: LinkField,
    pub portfolio: LinkField,
    pub summary: String,
    /// Comma- or newline-separated skill list.
    pub skills: String,
}

/// The single photo attachment, already encoded for embedding.
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub mime_type: String,
    pub bytes: bytes::Bytes,
    /// `data:<mime>;base64,...` URL used as the `<img>` source.
    pub data_url: String,
}

/// Metadata returned to clients instead of the raw image bytes.
#[derive(Debug, Clone, Serialize)]
pub struct PhotoSummary {
    pub mime_type: String,
    pub size_bytes: usize,
}

impl From<&Photo> for PhotoSummary {
    fn from(photo: &Photo) -> Self {
        PhotoSummary {
            mime_type: photo.mime_type.clone(),
            size_bytes: photo.bytes.len(),
        }
    }
}
