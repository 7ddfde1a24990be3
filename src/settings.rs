//! Game settings and preferences
//!
//! Persisted in LocalStorage. Only preferences live here, never scores.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::i18n::{Language, Strings};
use crate::sim::{BalloonColor, Palette};

/// Settings-menu key that selects the mixed preset
pub const MIXED_KEY: &str = "mixed";

/// Color checkbox values in the order the settings form lists them
pub const FORM_COLOR_KEYS: [&str; 7] = [
    "red", "yellow", "green", "blue", "orange", "purple", MIXED_KEY,
];

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Display language for menus and overlays
    pub language: Language,
    /// Colors balloons are drawn from (never empty)
    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::En,
            palette: Palette::default(),
        }
    }
}

impl Settings {
    pub fn strings(&self) -> &'static Strings {
        self.language.strings()
    }

    /// Apply the language picked in the settings menu
    pub fn apply_language(&mut self, code: &str) -> Result<(), ConfigError> {
        self.language = code.parse()?;
        Ok(())
    }

    /// Apply the checked color boxes from the settings menu.
    ///
    /// `mixed` replaces everything checked before it with the mixed preset.
    /// An empty selection is rejected and the current palette is kept.
    pub fn apply_color_selection<'a>(
        &mut self,
        keys: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), ConfigError> {
        let mut colors: Vec<BalloonColor> = Vec::new();
        for key in keys {
            if key.eq_ignore_ascii_case(MIXED_KEY) {
                colors = Palette::mixed().into();
            } else {
                colors.push(key.parse()?);
            }
        }
        self.palette = Palette::new(colors)?;
        Ok(())
    }

    /// Whether the settings form should show `key` as checked
    pub fn is_color_selected(&self, key: &str) -> bool {
        if key.eq_ignore_ascii_case(MIXED_KEY) {
            return self.palette == Palette::mixed();
        }
        key.parse::<BalloonColor>()
            .map(|color| self.palette.contains(color))
            .unwrap_or(false)
    }

    /// Checked color keys, in form order, that describe the current palette
    pub fn form_selection(&self) -> Vec<&'static str> {
        FORM_COLOR_KEYS
            .into_iter()
            .filter(|key| self.is_color_selected(key))
            .collect()
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "balloon_pop_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
