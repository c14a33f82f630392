//! Form State Manager: the owned system of record for everything the user typed.

use serde::Serialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::form::entries::{EntryList, Slot};
use crate::form::sample;
use crate::models::form::{
    Category, Certification, Education, EntryFields, EntryId, PersonalInfo, Photo, PhotoSummary,
    WorkExperience,
};

#[derive(Debug, Clone)]
pub struct FormState {
    pub personal: PersonalInfo,
    experience: EntryList<WorkExperience>,
    education: EntryList<Education>,
    certifications: EntryList<Certification>,
    photo: Option<Photo>,
}

/// Serializable view of the form, with the photo reduced to its metadata.
#[derive(Debug, Clone, Serialize)]
pub struct FormSnapshot {
    pub personal: PersonalInfo,
    pub experience: Vec<Slot<WorkExperience>>,
    pub education: Vec<Slot<Education>>,
    pub certifications: Vec<Slot<Certification>>,
    pub photo: Option<PhotoSummary>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// Starting shape of the form: one empty work experience and one empty education entry.
    pub fn new() -> Self {
        let mut state = FormState {
            personal: PersonalInfo::default(),
            experience: EntryList::default(),
            education: EntryList::default(),
            certifications: EntryList::default(),
            photo: None,
        };
        state.seed();
        state
    }

    fn seed(&mut self) {
        self.experience.add();
        self.education.add();
    }

    pub fn add_entry(&mut self, category: Category) -> EntryId {
        let seq = match category {
            Category::Experience => self.experience.add(),
            Category::Education => self.education.add(),
            Category::Certification => self.certifications.add(),
        };
        let id = EntryId { category, seq };
        debug!(%id, "Entry added");
        id
    }

    /// Replaces the fields of an existing entry.
    ///
    /// The payload's category must match the id's category.
    pub fn update_entry(&mut self, id: EntryId, fields: EntryFields) -> Result<(), AppError> {
        if fields.category() != id.category {
            return Err(AppError::Validation(format!(
                "Entry {id} cannot hold {} fields",
                fields.category()
            )));
        }
        let missing = || AppError::NotFound(format!("Entry {id} not found"));
        match fields {
            EntryFields::Experience(f) => *self.experience.get_mut(id.seq).ok_or_else(missing)? = f,
            EntryFields::Education(f) => *self.education.get_mut(id.seq).ok_or_else(missing)? = f,
            EntryFields::Certification(f) => {
                *self.certifications.get_mut(id.seq).ok_or_else(missing)? = f
            }
        }
        Ok(())
    }

    pub fn entry(&self, id: EntryId) -> Option<EntryFields> {
        match id.category {
            Category::Experience => self.experience.get(id.seq).cloned().map(EntryFields::Experience),
            Category::Education => self.education.get(id.seq).cloned().map(EntryFields::Education),
            Category::Certification => self
                .certifications
                .get(id.seq)
                .cloned()
                .map(EntryFields::Certification),
        }
    }

    /// Removes the entry if present. An unknown id is not an error.
    pub fn remove_entry(&mut self, id: EntryId) -> bool {
        let removed = match id.category {
            Category::Experience => self.experience.remove(id.seq),
            Category::Education => self.education.remove(id.seq),
            Category::Certification => self.certifications.remove(id.seq),
        };
        debug!(%id, removed, "Entry remove requested");
        removed
    }

    /// Wipes everything and re-seeds the starting shape. Confirmation is the caller's job.
    pub fn clear_all(&mut self) {
        self.personal = PersonalInfo::default();
        self.experience.reset();
        self.education.reset();
        self.certifications.reset();
        self.photo = None;
        self.seed();
        info!("Form cleared");
    }

    pub fn set_photo(&mut self, photo: Photo) {
        info!(mime = %photo.mime_type, size = photo.bytes.len(), "Photo attached");
        self.photo = Some(photo);
    }

    pub fn remove_photo(&mut self) -> bool {
        self.photo.take().is_some()
    }

    /// Overwrites personal info and every entry list with the sample dataset. The photo is kept.
    pub fn load_sample(&mut self) {
        self.personal = sample::sample_personal();

        self.experience.reset();
        for e in sample::sample_experience() {
            self.experience.push(e);
        }
        self.education.reset();
        for e in sample::sample_education() {
            self.education.push(e);
        }
        self.certifications.reset();
        for c in sample::sample_certifications() {
            self.certifications.push(c);
        }
        info!(
            experience = self.experience.len(),
            education = self.education.len(),
            certifications = self.certifications.len(),
            "Sample data loaded"
        );
    }

    pub fn experience(&self) -> &EntryList<WorkExperience> {
        &self.experience
    }

    pub fn education(&self) -> &EntryList<Education> {
        &self.education
    }

    pub fn certifications(&self) -> &EntryList<Certification> {
        &self.certifications
    }

    pub fn photo(&self) -> Option<&Photo> {
        self.photo.as_ref()
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            personal: self.personal.clone(),
            experience: self.experience.slots().to_vec(),
            education: self.education.slots().to_vec(),
            certifications: self.certifications.slots().to_vec(),
            photo: self.photo.as_ref().map(PhotoSummary::from),
        }
    }
}
