use serde::{Deserialize, Serialize};
use tracing::info;

use crate::prefs::store::{PrefsError, PreferenceStore};

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Only `"light"` selects the light theme; anything else, or nothing, is dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

pub async fn load_theme(store: &dyn PreferenceStore) -> Result<Theme, PrefsError> {
    let stored = store.get(THEME_KEY).await?;
    Ok(Theme::from_stored(stored.as_deref()))
}

/// Flips the stored theme and writes it back in one atomic store update.
pub async fn toggle_theme(store: &dyn PreferenceStore) -> Result<Theme, PrefsError> {
    let written = store
        .update(THEME_KEY, &|current| {
            Theme::from_stored(current).toggled().as_str().to_string()
        })
        .await?;
    let next = Theme::from_stored(Some(&written));
    info!(theme = next.as_str(), "Theme toggled");
    Ok(next)
}
