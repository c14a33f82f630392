//! Export: turns the stored preview into a print job and hands it off.
//!
//! PDF conversion itself is an external step. The default [`FileExporter`]
//! writes a standalone, print-ready HTML page whose `@page` rule carries the
//! fixed geometry.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::layout::{PageGeometry, SizeClass};
use crate::render::markup::escape_html;
use crate::render::preview::Preview;

/// Everything the print/PDF step needs.
#[derive(Debug, Clone, Serialize)]
pub struct ExportJob {
    /// Target file name, e.g. `Jane_Doe_CV.pdf`.
    pub filename: String,
    /// Standalone HTML page.
    pub page_html: String,
    pub geometry: PageGeometry,
}

/// Receiver of finished export jobs. Implementations own the actual print/PDF step.
#[async_trait]
pub trait Exporter: Send + Sync {
    async fn export(&self, job: ExportJob) -> Result<()>;
}

/// Writes `<stem>.html` into a directory for an external print-to-PDF step.
pub struct FileExporter {
    dir: PathBuf,
}

impl FileExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, filename: &str) -> PathBuf {
        let stem = filename.strip_suffix(".pdf").unwrap_or(filename);
        self.dir.join(format!("{stem}.html"))
    }
}

#[async_trait]
impl Exporter for FileExporter {
    #[instrument(skip(self, job), fields(filename = %job.filename))]
    async fn export(&self, job: ExportJob) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("creating export directory {}", self.dir.display()))?;
        let path = self.path_for(&job.filename);
        tokio::fs::write(&path, job.page_html.as_bytes())
            .await
            .with_context(|| format!("writing export {}", path.display()))?;
        info!(path = %path.display(), "Print page written");
        Ok(())
    }
}

/// `Jane  Doe` → `Jane_Doe_CV.pdf`; an empty name gives `CV_CV.pdf`.
pub fn export_filename(full_name: &str) -> String {
    let name = full_name.trim();
    let stem = if name.is_empty() {
        "CV".to_string()
    } else {
        name.split_whitespace().collect::<Vec<_>>().join("_")
    };
    format!("{stem}_CV.pdf")
}

/// `<name> CV`, or `My CV` when the name is blank.
pub fn page_title(full_name: &str) -> String {
    match full_name.trim() {
        "" => "My CV".to_string(),
        name => format!("{name} CV"),
    }
}

/// Builds the job for a stored preview, refusing when nothing real has been rendered.
pub fn build_export_job(
    preview: Option<&Preview>,
    full_name: &str,
    geometry: &PageGeometry,
) -> Result<ExportJob, AppError> {
    let preview = match preview {
        Some(p) if !p.is_placeholder() => p,
        _ => return Err(AppError::ExportWithoutRender),
    };
    Ok(ExportJob {
        filename: export_filename(full_name),
        page_html: standalone_page(&page_title(full_name), preview, geometry),
        geometry: geometry.clone(),
    })
}

/// Wraps preview markup in a complete HTML page with print styles.
pub fn standalone_page(title: &str, preview: &Preview, geometry: &PageGeometry) -> String {
    let size_class: SizeClass = preview.sizing.class;
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <style>\n{page_rule}\nbody {{ font-family: Arial, Helvetica, sans-serif; color: #222; }}\n\
         .cv-document {{ font-size: {size:.2}pt; line-height: 1.35; }}\n\
         .cv-name {{ font-size: 2em; font-weight: bold; }}\n\
         .cv-headline {{ font-size: 1.15em; color: #444; }}\n\
         .cv-photo {{ float: right; width: 90px; height: 90px; object-fit: cover; border-radius: 50%; }}\n\
         .cv-section-title {{ font-weight: bold; text-transform: uppercase; border-bottom: 1px solid #999; margin-top: 1em; }}\n\
         .cv-job-title, .cv-degree {{ font-weight: bold; }}\n\
         .cv-date {{ color: #555; font-style: italic; }}\n\
         </style>\n</head>\n<body>\n<div class=\"cv-document {class}\">{body}</div>\n</body>\n</html>\n",
        title = escape_html(title),
        page_rule = geometry.css_page_rule(),
        size = preview.sizing.font_size_pt,
        class = size_class.css_class(),
        body = preview.html,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::state::FormState;
    use crate::layout::{default_page_geometry, FontScale, SizingConfig};
    use crate::render::preview::generate_preview;

    fn sample_preview() -> Preview {
        let mut form = FormState::new();
        form.load_sample();
        generate_preview(&form, FontScale::default(), &SizingConfig::default())
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("Jane   Q  Doe"), "Jane_Q_Doe_CV.pdf");
        assert_eq!(export_filename("  "), "CV_CV.pdf");
    }

    #[test]
    fn test_export_without_preview_fails() {
        let err = build_export_job(None, "Jane", &default_page_geometry()).unwrap_err();
        assert!(matches!(err, AppError::ExportWithoutRender));
    }

    #[test]
    fn test_export_of_placeholder_fails() {
        let placeholder = generate_preview(&FormState::new(), FontScale::default(), &SizingConfig::default());
        let err = build_export_job(Some(&placeholder), "", &default_page_geometry()).unwrap_err();
        assert!(matches!(err, AppError::ExportWithoutRender));
    }

    #[test]
    fn test_export_job_carries_geometry_and_markup() {
        let preview = sample_preview();
        let job = build_export_job(Some(&preview), "Alex Morgan", &default_page_geometry()).unwrap();
        assert_eq!(job.filename, "Alex_Morgan_CV.pdf");
        assert!(job.page_html.contains("@page { size: letter portrait; margin: 0.5in 0.5in 0.5in 0.5in; }"));
        assert!(job.page_html.contains(&preview.html));
        assert!(job.page_html.contains("font-size: 11.00pt"));
        assert!(job.page_html.contains("<title>Alex Morgan CV</title>"));
    }

    #[tokio::test]
    async fn test_file_exporter_writes_page() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = FileExporter::new(dir.path().join("out"));
        let job = build_export_job(Some(&sample_preview()), "Alex Morgan", &default_page_geometry()).unwrap();
        let expected = job.page_html.clone();

        exporter.export(job).await.unwrap();

        let written = std::fs::read_to_string(dir.path().join("out/Alex_Morgan_CV.html")).unwrap();
        assert_eq!(written, expected);
    }
}
