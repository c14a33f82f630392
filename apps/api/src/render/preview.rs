use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::form::state::FormState;
use crate::layout::{apply_dynamic_font_size, FontScale, FontSizing, SizingConfig};
use crate::render::document::RenderedDocument;
use crate::render::markup::to_html;
use crate::render::render;

/// A generated preview: the document, its markup, and its sizing.
#[derive(Debug, Clone, Serialize)]
pub struct Preview {
    pub document: RenderedDocument,
    pub html: String,
    pub sizing: FontSizing,
    pub rendered_at: DateTime<Utc>,
}

impl Preview {
    pub fn is_placeholder(&self) -> bool {
        self.document.is_placeholder()
    }

    /// Re-applies sizing for a new user scale. The document itself is untouched.
    pub fn rescale(&mut self, scale: FontScale, config: &SizingConfig) {
        self.sizing = apply_dynamic_font_size(&self.document, scale, config);
    }
}

/// Full render pipeline. Always re-derives everything from the current form.
pub fn generate_preview(form: &FormState, scale: FontScale, config: &SizingConfig) -> Preview {
    let document = render(form);
    let html = to_html(&document);
    let sizing = apply_dynamic_font_size(&document, scale, config);
    info!(
        sections = document.sections.len(),
        placeholder = document.is_placeholder(),
        class = ?sizing.class,
        "Preview generated"
    );
    Preview {
        document,
        html,
        sizing,
        rendered_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SizeClass;

    #[test]
    fn test_empty_form_gives_placeholder_preview() {
        let preview = generate_preview(&FormState::new(), FontScale::default(), &SizingConfig::default());
        assert!(preview.is_placeholder());
        assert_eq!(preview.sizing.score, 0.0);
        assert_eq!(preview.sizing.class, SizeClass::Compact);
    }

    #[test]
    fn test_sample_preview_is_compact() {
        let mut form = FormState::new();
        form.load_sample();
        let preview = generate_preview(&form, FontScale::default(), &SizingConfig::default());
        assert!(!preview.is_placeholder());
        // 2 jobs, 2 schools, 3 certs and 8 bullet lines: 200 + 100 + 90 + 320 = 710,
        // plus a short summary and skill list.
        let score = preview.sizing.score;
        assert!(score > 710.0 && score < 800.0, "score was {score}");
        assert_eq!(preview.sizing.class, SizeClass::Compact);
    }

    #[test]
    fn test_rescale_keeps_document() {
        let mut form = FormState::new();
        form.load_sample();
        let config = SizingConfig::default();
        let mut preview = generate_preview(&form, FontScale::default(), &config);
        let before = preview.document.clone();
        let class = preview.sizing.class;
        preview.rescale(FontScale::new(0.8).unwrap(), &config);
        assert_eq!(preview.document, before);
        assert_eq!(preview.sizing.class, class);
        assert!((preview.sizing.font_size_pt - class.base_font_pt() * 0.8).abs() < 1e-4);
    }
}
