//! Construction options for the panel and the asset URLs derived from them.

use std::{fmt, fs, path::Path, str::FromStr};

use serde::Deserialize;

use crate::error::{OptionsError, Result};

/// Colour scheme modifier applied to the whole panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    Light,
    Dark,
}

impl ThemeName {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Style class added to the panel container.
    #[must_use]
    pub fn style_class(self) -> String {
        format!("theme-{}", self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = OptionsError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(OptionsError::UnknownTheme(other.to_string())),
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static images shipped next to the panel. The set is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Asset {
    SplashLogo,
    Egg,
    Wait,
    Ready,
}

impl Asset {
    /// Images worth fetching before they are first shown.
    pub const PRELOAD: [Self; 2] = [Self::SplashLogo, Self::Egg];

    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::SplashLogo => "jscoq-splash.png",
            Self::Egg => "egg.png",
            Self::Wait => "wait.gif",
            Self::Ready => "ready.gif",
        }
    }
}

/// Options read once when the panel is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelOptions {
    /// Identifier of the IDE container the panel is attached to.
    pub wrapper_id: String,
    /// Root under which `ui-images/` lives.
    pub base_path: String,
    pub theme: Option<ThemeName>,
}

impl PanelOptions {
    #[must_use]
    pub fn new(wrapper_id: impl Into<String>) -> Self {
        Self {
            wrapper_id: wrapper_id.into(),
            base_path: ".".to_string(),
            theme: None,
        }
    }

    #[must_use]
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    #[must_use]
    pub const fn with_theme(mut self, theme: ThemeName) -> Self {
        self.theme = Some(theme);
        self
    }

    #[must_use]
    pub fn asset_url(&self, asset: Asset) -> String {
        format!(
            "{}/ui-images/{}",
            self.base_path.trim_end_matches('/'),
            asset.file_name()
        )
    }

    pub fn preload_urls(&self) -> impl Iterator<Item = String> + '_ {
        Asset::PRELOAD.into_iter().map(|asset| self.asset_url(asset))
    }
}

/// Shape of the JSON options file; every key may be overridden on the
/// command line.
#[derive(Debug, Default, Deserialize)]
struct OptionsFile {
    wrapper_id: Option<String>,
    base_path: Option<String>,
    theme: Option<String>,
}

/// Command-line values layered over the options file.
#[derive(Debug, Default, Clone)]
pub struct OptionOverrides {
    pub wrapper_id: Option<String>,
    pub base_path: Option<String>,
    pub theme: Option<String>,
}

/// Merge an optional options file with command-line overrides.
///
/// # Errors
///
/// Fails when the file cannot be read or parsed, when no wrapper id is given,
/// or when the theme name is unknown.
pub fn resolve(file: Option<&Path>, overrides: OptionOverrides) -> Result<PanelOptions> {
    let from_file = match file {
        Some(path) => read_options_file(path)?,
        None => OptionsFile::default(),
    };

    let wrapper_id = overrides
        .wrapper_id
        .or(from_file.wrapper_id)
        .filter(|id| !id.is_empty())
        .ok_or(OptionsError::MissingWrapperId)?;

    let theme = overrides
        .theme
        .or(from_file.theme)
        .map(|name| name.parse::<ThemeName>())
        .transpose()?;

    Ok(PanelOptions {
        wrapper_id,
        base_path: overrides
            .base_path
            .or(from_file.base_path)
            .unwrap_or_else(|| ".".to_string()),
        theme,
    })
}

fn read_options_file(path: &Path) -> Result<OptionsFile> {
    let text = fs::read_to_string(path).map_err(|e| OptionsError::Unreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_asset_url_joins_base_path() {
        let options = PanelOptions::new("ide").with_base_path("/static/jscoq/");
        assert_eq!(
            options.asset_url(Asset::Wait),
            "/static/jscoq/ui-images/wait.gif"
        );
    }

    #[test]
    fn test_preload_urls() {
        let options = PanelOptions::new("ide").with_base_path("base");
        let urls: Vec<String> = options.preload_urls().collect();
        assert_eq!(
            urls,
            vec!["base/ui-images/jscoq-splash.png", "base/ui-images/egg.png"]
        );
    }

    #[test]
    fn test_resolve_requires_wrapper_id() {
        let result = resolve(None, OptionOverrides::default());
        assert!(matches!(
            result,
            Err(Error::Options(OptionsError::MissingWrapperId))
        ));
    }

    #[test]
    fn test_resolve_rejects_unknown_theme() {
        let overrides = OptionOverrides {
            wrapper_id: Some("ide".to_string()),
            theme: Some("solarized".to_string()),
            ..OptionOverrides::default()
        };
        let result = resolve(None, overrides);
        assert!(matches!(
            result,
            Err(Error::Options(OptionsError::UnknownTheme(name))) if name == "solarized"
        ));
    }

    #[test]
    fn test_resolve_overrides_file() {
        let path = std::env::temp_dir().join(format!("proof-panel-opts-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"{"wrapper_id":"from-file","base_path":"/srv","theme":"light"}"#,
        )
        .unwrap();

        let overrides = OptionOverrides {
            theme: Some("dark".to_string()),
            ..OptionOverrides::default()
        };
        let options = resolve(Some(&path), overrides).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(options.wrapper_id, "from-file");
        assert_eq!(options.base_path, "/srv");
        assert_eq!(options.theme, Some(ThemeName::Dark));
        assert_eq!(ThemeName::Dark.style_class(), "theme-dark");
    }
}
