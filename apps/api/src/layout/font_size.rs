//! Content-driven font sizing.
//!
//! A weighted content score picks one of three size classes; the user's
//! [`FontScale`] multiplies the class's base size without moving the class
//! boundaries. Weights and thresholds were tuned by eye, so they live here as
//! configurable constants rather than derived values.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::render::document::{ContentStats, RenderedDocument};

pub const DEFAULT_NORMAL_MIN_SCORE: f64 = 800.0;
pub const DEFAULT_DENSE_MIN_SCORE: f64 = 1500.0;

pub const MIN_FONT_SCALE: f32 = 0.5;
pub const MAX_FONT_SCALE: f32 = 2.0;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Baseline text size chosen from content volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeClass {
    /// score < normal_min: little content, largest type.
    Compact,
    /// normal_min ≤ score < dense_min.
    Normal,
    /// score ≥ dense_min: lots of content, smallest type.
    Dense,
}

impl SizeClass {
    pub fn base_font_pt(&self) -> f32 {
        match self {
            SizeClass::Compact => 11.0,
            SizeClass::Normal => 10.0,
            SizeClass::Dense => 9.0,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            SizeClass::Compact => "cv-size-compact",
            SizeClass::Normal => "cv-size-normal",
            SizeClass::Dense => "cv-size-dense",
        }
    }
}

/// Per-item weights of the content score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub experience: f64,
    pub education: f64,
    pub certification: f64,
    /// Summary characters are divided by this.
    pub summary_chars_per_point: f64,
    /// Skills characters are divided by this.
    pub skills_chars_per_point: f64,
    pub bullet_line: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            experience: 100.0,
            education: 50.0,
            certification: 30.0,
            summary_chars_per_point: 5.0,
            skills_chars_per_point: 5.0,
            bullet_line: 40.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeThresholds {
    pub normal_min: f64,
    pub dense_min: f64,
}

impl Default for SizeThresholds {
    fn default() -> Self {
        Self {
            normal_min: DEFAULT_NORMAL_MIN_SCORE,
            dense_min: DEFAULT_DENSE_MIN_SCORE,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SizingConfig {
    pub weights: ScoreWeights,
    pub thresholds: SizeThresholds,
}

/// User-controlled multiplier on top of the size class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct FontScale(f32);

impl FontScale {
    pub fn new(scale: f32) -> Result<Self, AppError> {
        if !scale.is_finite() || !(MIN_FONT_SCALE..=MAX_FONT_SCALE).contains(&scale) {
            return Err(AppError::Validation(format!(
                "Font scale must be between {MIN_FONT_SCALE} and {MAX_FONT_SCALE}, got {scale}"
            )));
        }
        Ok(FontScale(scale))
    }

    pub fn get(&self) -> f32 {
        self.0
    }
}

impl Default for FontScale {
    fn default() -> Self {
        FontScale(1.0)
    }
}

impl TryFrom<f32> for FontScale {
    type Error = AppError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        FontScale::new(value)
    }
}

impl From<FontScale> for f32 {
    fn from(scale: FontScale) -> Self {
        scale.0
    }
}

/// Result of sizing one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSizing {
    pub score: f64,
    pub class: SizeClass,
    pub scale: FontScale,
    /// `class.base_font_pt() × scale`.
    pub font_size_pt: f32,
}

// ────────────────────────────────────────────────────────────────────────────
// Core functions
// ────────────────────────────────────────────────────────────────────────────

pub fn content_score(stats: &ContentStats, weights: &ScoreWeights) -> f64 {
    weights.experience * stats.experience_count as f64
        + weights.education * stats.education_count as f64
        + weights.certification * stats.certification_count as f64
        + stats.summary_chars as f64 / weights.summary_chars_per_point
        + stats.skills_chars as f64 / weights.skills_chars_per_point
        + weights.bullet_line * stats.bullet_lines as f64
}

pub fn classify(score: f64, thresholds: &SizeThresholds) -> SizeClass {
    if score >= thresholds.dense_min {
        SizeClass::Dense
    } else if score >= thresholds.normal_min {
        SizeClass::Normal
    } else {
        SizeClass::Compact
    }
}

/// Scores the document, picks its size class, and layers the user scale on top.
pub fn apply_dynamic_font_size(
    doc: &RenderedDocument,
    scale: FontScale,
    config: &SizingConfig,
) -> FontSizing {
    let score = content_score(&doc.stats, &config.weights);
    let class = classify(score, &config.thresholds);
    let font_size_pt = class.base_font_pt() * scale.get();
    debug!(score, ?class, scale = scale.get(), font_size_pt, "Font size applied");
    FontSizing {
        score,
        class,
        scale,
        font_size_pt,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(exp: usize, edu: usize, cert: usize, summary: usize, skills: usize, bullets: usize) -> ContentStats {
        ContentStats {
            experience_count: exp,
            education_count: edu,
            certification_count: cert,
            summary_chars: summary,
            skills_chars: skills,
            bullet_lines: bullets,
        }
    }

    fn doc(stats: ContentStats) -> RenderedDocument {
        RenderedDocument {
            header: None,
            sections: vec![],
            stats,
        }
    }

    #[test]
    fn test_score_weights() {
        let w = ScoreWeights::default();
        // 100*2 + 50*1 + 30*3 + 100/5 + 50/5 + 40*8 = 200 + 50 + 90 + 20 + 10 + 320 = 690
        assert_eq!(content_score(&stats(2, 1, 3, 100, 50, 8), &w), 690.0);
    }

    #[test]
    fn test_empty_content_scores_zero() {
        assert_eq!(content_score(&ContentStats::default(), &ScoreWeights::default()), 0.0);
    }

    #[test]
    fn test_class_boundaries() {
        let t = SizeThresholds::default();
        assert_eq!(classify(799.0, &t), SizeClass::Compact);
        assert_eq!(classify(800.0, &t), SizeClass::Normal);
        assert_eq!(classify(1499.0, &t), SizeClass::Normal);
        assert_eq!(classify(1500.0, &t), SizeClass::Dense);
    }

    #[test]
    fn test_boundaries_from_real_content() {
        let config = SizingConfig::default();
        // 700 + 50 + 245/5 = 799
        let at_799 = apply_dynamic_font_size(&doc(stats(7, 1, 0, 245, 0, 0)), FontScale::default(), &config);
        assert_eq!(at_799.score, 799.0);
        assert_eq!(at_799.class, SizeClass::Compact);

        let at_800 = apply_dynamic_font_size(&doc(stats(8, 0, 0, 0, 0, 0)), FontScale::default(), &config);
        assert_eq!(at_800.class, SizeClass::Normal);

        // 1000 + 400 + 495/5 = 1499
        let at_1499 = apply_dynamic_font_size(&doc(stats(10, 0, 0, 0, 495, 10)), FontScale::default(), &config);
        assert_eq!(at_1499.score, 1499.0);
        assert_eq!(at_1499.class, SizeClass::Normal);

        // 1000 + 100/5 + 40*12 = 1500
        let at_1500 = apply_dynamic_font_size(&doc(stats(10, 0, 0, 100, 0, 12)), FontScale::default(), &config);
        assert_eq!(at_1500.score, 1500.0);
        assert_eq!(at_1500.class, SizeClass::Dense);
    }

    #[test]
    fn test_scale_multiplies_without_moving_class() {
        let config = SizingConfig::default();
        let content = doc(stats(8, 0, 0, 0, 0, 0));
        let base = apply_dynamic_font_size(&content, FontScale::default(), &config);
        let scaled = apply_dynamic_font_size(&content, FontScale::new(1.5).unwrap(), &config);
        assert_eq!(base.class, scaled.class);
        assert!((scaled.font_size_pt - base.font_size_pt * 1.5).abs() < 1e-4);
        assert!((base.font_size_pt - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_custom_thresholds() {
        let t = SizeThresholds {
            normal_min: 10.0,
            dense_min: 20.0,
        };
        assert_eq!(classify(15.0, &t), SizeClass::Normal);
        assert_eq!(classify(25.0, &t), SizeClass::Dense);
    }

    #[test]
    fn test_font_scale_rejects_out_of_range() {
        assert!(FontScale::new(0.49).is_err());
        assert!(FontScale::new(2.01).is_err());
        assert!(FontScale::new(f32::NAN).is_err());
        assert!(FontScale::new(0.5).is_ok());
        assert!(FontScale::new(2.0).is_ok());
    }

    #[test]
    fn test_font_scale_deserialize_validates() {
        assert!(serde_json::from_str::<FontScale>("1.25").is_ok());
        assert!(serde_json::from_str::<FontScale>("9.0").is_err());
    }
}
