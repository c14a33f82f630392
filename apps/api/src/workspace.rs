//! The single in-memory editing session: form state, font scale, and the last preview.

use tracing::info;

use crate::form::state::FormState;
use crate::layout::{FontScale, SizingConfig};
use crate::render::{generate_preview, Preview};

#[derive(Debug, Default)]
pub struct Workspace {
    pub form: FormState,
    pub font_scale: FontScale,
    /// Last generated preview. `None` until the first render and after a clear.
    pub preview: Option<Preview>,
}

impl Workspace {
    /// Re-renders from the current form and stores the result.
    pub fn generate(&mut self, sizing: &SizingConfig) -> &Preview {
        self.preview
            .insert(generate_preview(&self.form, self.font_scale, sizing))
    }

    /// Clears the form and the stored preview, but only when `confirm` is set.
    /// Returns whether anything happened.
    pub fn clear_all(&mut self, confirm: bool) -> bool {
        if !confirm {
            info!("Clear declined; form left untouched");
            return false;
        }
        self.form.clear_all();
        self.preview = None;
        true
    }

    /// Loads the sample dataset and renders it.
    pub fn load_sample(&mut self, sizing: &SizingConfig) -> &Preview {
        self.form.load_sample();
        self.generate(sizing)
    }

    /// Updates the user scale and re-sizes the stored preview in place.
    pub fn set_font_scale(&mut self, scale: FontScale, sizing: &SizingConfig) {
        self.font_scale = scale;
        if let Some(preview) = self.preview.as_mut() {
            preview.rescale(scale, sizing);
        }
        info!(scale = scale.get(), "Font scale updated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::form::Category;

    #[test]
    fn test_declined_clear_changes_nothing() {
        let mut ws = Workspace::default();
        let sizing = SizingConfig::default();
        ws.load_sample(&sizing);
        ws.form.add_entry(Category::Certification);

        assert!(!ws.clear_all(false));

        assert_eq!(ws.form.personal.full_name, "Alex Morgan");
        assert_eq!(ws.form.certifications().len(), 4);
        assert!(ws.preview.is_some());
    }

    #[test]
    fn test_confirmed_clear_drops_preview() {
        let mut ws = Workspace::default();
        let sizing = SizingConfig::default();
        ws.load_sample(&sizing);

        assert!(ws.clear_all(true));

        assert!(ws.preview.is_none());
        assert!(ws.form.personal.full_name.is_empty());
        assert_eq!(ws.form.experience().len(), 1);
    }

    #[test]
    fn test_generate_is_idempotent() {
        let mut ws = Workspace::default();
        let sizing = SizingConfig::default();
        ws.form.load_sample();
        let first = ws.generate(&sizing).html.clone();
        let second = ws.generate(&sizing).html.clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_font_scale_applies_to_stored_preview() {
        let mut ws = Workspace::default();
        let sizing = SizingConfig::default();
        ws.load_sample(&sizing);
        let scale = FontScale::new(1.2).unwrap();
        ws.set_font_scale(scale, &sizing);
        let preview = ws.preview.as_ref().unwrap();
        assert_eq!(preview.sizing.scale, scale);
        assert_eq!(ws.font_scale, scale);
    }
}
