use std::{
    fmt,
    str::FromStr,
    sync::{Arc, Mutex},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Browser storage key holding the persisted preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class set on `<html>` that switches Tailwind into dark mode.
pub const DARK_CLASS: &str = "dark";

/// Inlined into the document head so the stored preference is applied before
/// the body is painted. Hydration picks the same value up afterwards.
pub const THEME_BOOTSTRAP_SCRIPT: &str = r#"(function () {
  try {
    if (window.localStorage.getItem("theme") === "dark") {
      document.documentElement.classList.add("dark");
    }
  } catch (e) {}
})();"#;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Root class for this theme, if any.
    pub fn root_class(self) -> Option<&'static str> {
        self.is_dark().then_some(DARK_CLASS)
    }

    /// Font Awesome icon shown on the toggle button: the sun switches back to light.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("theme storage is unavailable")]
    Unavailable,
    #[error("couldn't read theme preference: {0}")]
    Read(String),
    #[error("couldn't write theme preference: {0}")]
    Write(String),
}

/// Where the theme preference is persisted between sessions.
pub trait ThemeStore {
    /// `Ok(None)` means nothing has been stored yet.
    fn load(&self) -> Result<Option<Theme>, StorageError>;
    fn save(&mut self, theme: Theme) -> Result<(), StorageError>;
}

/// In-process store. Used during server rendering, where there is no browser
/// storage, and in tests. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    slot: Arc<Mutex<Option<Theme>>>,
}

impl MemoryThemeStore {
    pub fn with_value(theme: Theme) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(theme))),
        }
    }

    pub fn stored(&self) -> Option<Theme> {
        self.slot.lock().ok().and_then(|slot| *slot)
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<Theme>, StorageError> {
        self.slot
            .lock()
            .map(|slot| *slot)
            .map_err(|e| StorageError::Read(e.to_string()))
    }

    fn save(&mut self, theme: Theme) -> Result<(), StorageError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| StorageError::Write(e.to_string()))?;
        *slot = Some(theme);
        Ok(())
    }
}

/// Interprets a raw stored value. Only the exact strings `"light"` and
/// `"dark"` count; anything else is treated as nothing stored.
pub fn parse_stored(raw: Option<String>) -> Option<Theme> {
    raw.and_then(|s| match s.parse::<Theme>() {
        Ok(theme) => Some(theme),
        Err(e) => {
            log::warn!("ignoring stored preference: {e}");
            None
        }
    })
}

/// `window.localStorage` backed store.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalThemeStore;

#[cfg(feature = "hydrate")]
impl LocalThemeStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .ok()
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Result<Option<Theme>, StorageError> {
        let raw = Self::storage()?
            .get_item(THEME_STORAGE_KEY)
            .map_err(|e| StorageError::Read(format!("{e:?}")))?;
        Ok(parse_stored(raw))
    }

    fn save(&mut self, theme: Theme) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(THEME_STORAGE_KEY, theme.as_str())
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
}

/// Owns the current preference and writes every change through to its store.
///
/// Storage failures never reach the caller: the preference keeps working in
/// memory and simply won't survive a reload.
#[derive(Debug)]
pub struct ThemeController<S> {
    current: Theme,
    store: S,
}

impl<S: ThemeStore> ThemeController<S> {
    /// Reads the persisted preference, falling back to [`Theme::Light`].
    pub fn init(store: S) -> Self {
        let current = match store.load() {
            Ok(theme) => theme.unwrap_or_default(),
            Err(e) => {
                log::debug!("{e}, using default theme");
                Theme::default()
            }
        };
        Self { current, store }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        if let Err(e) = self.store.save(self.current) {
            log::debug!("{e}, preference won't persist");
        }
        self.current
    }
}

/// Adds or removes the dark class on the document root.
pub fn apply_to_document(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let class_list = root.class_list();
        let res = match theme.root_class() {
            Some(class) => class_list.add_1(class),
            None => class_list.remove_1(DARK_CLASS),
        };
        if let Err(e) = res {
            log::warn!("couldn't apply {theme} theme: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl ThemeStore for BrokenStore {
        fn load(&self) -> Result<Option<Theme>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn save(&mut self, _theme: Theme) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    /// Keeps the raw string the way browser storage does.
    struct RawStore(Option<String>);

    impl ThemeStore for RawStore {
        fn load(&self) -> Result<Option<Theme>, StorageError> {
            Ok(parse_stored(self.0.clone()))
        }

        fn save(&mut self, theme: Theme) -> Result<(), StorageError> {
            self.0 = Some(theme.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_fresh_start_is_light() {
        let controller = ThemeController::init(MemoryThemeStore::default());
        assert_eq!(controller.current(), Theme::Light);
    }

    #[test]
    fn test_init_reads_persisted_value() {
        let controller = ThemeController::init(MemoryThemeStore::with_value(Theme::Dark));
        assert_eq!(controller.current(), Theme::Dark);
    }

    #[test]
    fn test_double_toggle_round_trips() {
        for start in [Theme::Light, Theme::Dark] {
            let mut controller = ThemeController::init(MemoryThemeStore::with_value(start));
            controller.toggle();
            let back = controller.toggle();
            assert_eq!(back, start);
        }
    }

    #[test]
    fn test_toggle_writes_through() {
        let store = MemoryThemeStore::default();
        let mut controller = ThemeController::init(store.clone());
        assert_eq!(store.stored(), None);

        let theme = controller.toggle();
        assert_eq!(theme, Theme::Dark);
        assert_eq!(store.stored(), Some(controller.current()));

        controller.toggle();
        assert_eq!(store.stored(), Some(Theme::Light));
    }

    #[test]
    fn test_unavailable_storage_still_toggles() {
        let mut controller = ThemeController::init(BrokenStore);
        assert_eq!(controller.current(), Theme::Light);
        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(controller.current(), Theme::Dark);
    }

    #[test]
    fn test_parse_stored() {
        assert_eq!(parse_stored(None), None);
        assert_eq!(parse_stored(Some("dark".into())), Some(Theme::Dark));
        assert_eq!(parse_stored(Some("light".into())), Some(Theme::Light));
        assert_eq!(parse_stored(Some("solarized".into())), None);
        assert_eq!(parse_stored(Some(String::new())), None);
    }

    #[test]
    fn test_garbage_persisted_falls_back_to_light() {
        let mut controller = ThemeController::init(RawStore(Some("{not a theme".into())));
        assert_eq!(controller.current(), Theme::Light);
        controller.toggle();
        assert_eq!(controller.store.0.as_deref(), Some("dark"));
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert!("Dark!".parse::<Theme>().is_err());
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!(Theme::Light.to_string(), "light");
    }

    #[test]
    fn test_padded_value_matches_bootstrap() {
        // the pre-paint script compares with === "dark", so the parser must not trim
        assert!(THEME_BOOTSTRAP_SCRIPT.contains(r#"=== "dark""#));
        for raw in [" dark", "dark\n", " light "] {
            assert!(raw.parse::<Theme>().is_err(), "{raw:?}");
            let controller = ThemeController::init(RawStore(Some(raw.into())));
            assert_eq!(controller.current(), Theme::Light, "{raw:?}");
        }
    }

    #[test]
    fn test_serde_uses_storage_strings() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
    }

    #[test]
    fn test_root_class_and_icon() {
        assert_eq!(Theme::Dark.root_class(), Some(DARK_CLASS));
        assert_eq!(Theme::Light.root_class(), None);
        assert_eq!(Theme::Dark.toggle_icon(), "fas fa-sun");
        assert_eq!(Theme::Light.toggle_icon(), "fas fa-moon");
    }

    #[test]
    fn test_bootstrap_script_reads_same_key() {
        assert!(THEME_BOOTSTRAP_SCRIPT.contains(&format!("\"{THEME_STORAGE_KEY}\"")));
        assert!(THEME_BOOTSTRAP_SCRIPT.contains(&format!("\"{DARK_CLASS}\"")));
    }
}
