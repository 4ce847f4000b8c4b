//! # Default Theme
//!
//! A process-wide slot holding the theme used by code that has no resolver
//! passed to it.
//!
//! Prefer handing a `&ThemeResolver` down explicitly. The slot exists for the
//! application boundary, where a single theme is chosen at startup and read for
//! the rest of the session.
//!
//! ## Usage Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use themekit_theme::globals::{default_theme, set_default_theme};
//! use themekit_theme::resolver::ThemeResolver;
//! use themekit_theme::value::StyleMap;
//!
//! let theme = Arc::new(ThemeResolver::new(StyleMap::new()).with_name("App"));
//! set_default_theme(theme).unwrap();
//!
//! assert_eq!(default_theme().unwrap().name(), "App");
//! assert!(set_default_theme(Arc::new(ThemeResolver::new(StyleMap::new()))).is_err());
//! ```

use std::sync::{Arc, OnceLock};

use crate::error::{ThemeError, ThemeResult};
use crate::resolver::ThemeResolver;

static DEFAULT_THEME: OnceLock<Arc<ThemeResolver>> = OnceLock::new();

/// Install the default theme. Only the first call succeeds.
pub fn set_default_theme(theme: Arc<ThemeResolver>) -> ThemeResult<()> {
    let name = theme.name().to_string();
    match DEFAULT_THEME.set(theme) {
        Ok(()) => {
            log::debug!("Default theme set to '{}'", name);
            Ok(())
        },
        Err(_) => {
            log::warn!("Default theme already set, ignoring '{}'", name);
            Err(ThemeError::DefaultThemeAlreadySet { name })
        },
    }
}

/// The default theme, if one was installed.
pub fn default_theme() -> Option<Arc<ThemeResolver>> {
    DEFAULT_THEME.get().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::StyleMap;

    #[test]
    fn second_install_is_rejected_and_first_is_kept() {
        let first = Arc::new(ThemeResolver::new(StyleMap::new()).with_name("First"));
        let second = Arc::new(ThemeResolver::new(StyleMap::new()).with_name("Second"));

        assert!(set_default_theme(first).is_ok());
        match set_default_theme(second) {
            Err(ThemeError::DefaultThemeAlreadySet { name }) => assert_eq!(name, "Second"),
            other => panic!("expected DefaultThemeAlreadySet, got {:?}", other),
        }
        assert_eq!(default_theme().map(|theme| theme.name().to_string()), Some("First".to_string()));
    }
}
