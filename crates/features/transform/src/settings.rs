//! Declarative options loaded from a settings file plus `BEMT__*` environment overrides.
//!
//! Functions cannot live in a file, so settings cover the naming preset, the
//! prefix/suffix pair and the two membership lists.

use crate::filter::MembershipEntry;
use crate::name_transform::NameTransform;
use crate::options::{Naming, TransformOptions};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

const DEFAULT_SETTINGS_FILE: &str = "bemt";
const ENV_PREFIX: &str = "BEMT";

#[bemt_derive::bemt_error]
pub enum SettingsError {
    #[error("Settings error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// File/environment shape of [`TransformOptions`].
///
/// ```toml
/// naming = "origin"
/// prefix = "b-"
/// blacklist = ["legacy", "vendor"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformSettings {
    pub naming: Naming,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub blacklist: Option<Vec<MembershipEntry>>,
    pub whitelist: Option<Vec<MembershipEntry>>,
}

impl From<TransformSettings> for TransformOptions {
    fn from(settings: TransformSettings) -> Self {
        let transforms = (settings.prefix.is_some() || settings.suffix.is_some()).then(|| {
            NameTransform::builder()
                .prefix(settings.prefix.unwrap_or_default())
                .suffix(settings.suffix.unwrap_or_default())
                .build()
        });

        Self {
            naming: settings.naming,
            transforms,
            blacklist: settings.blacklist,
            whitelist: settings.whitelist,
        }
    }
}

/// Loads [`TransformSettings`] from a file layered with environment overrides.
///
/// 1. **Base File**: `path`, or `bemt` in the current directory when `None`. The format
///    is taken from the extension; without one, every supported extension is tried.
/// 2. **Environment Overrides**: variables prefixed with `BEMT__`, e.g.
///    `BEMT__NAMING=origin` or `BEMT__PREFIX=x-`.
///
/// # Errors
/// Returns [`SettingsError::Config`] if the file is missing or its content does not
/// match [`TransformSettings`].
///
/// # Example
/// ```rust,no_run
/// use bemt_transform::{TransformOptions, load_settings};
///
/// let options: TransformOptions = load_settings(Some("config/bemt.toml"))?.into();
/// # Ok::<(), bemt_transform::SettingsError>(())
/// ```
pub fn load_settings(path: Option<impl AsRef<Path>>) -> Result<TransformSettings, SettingsError> {
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!("Loading transform settings from {}", effective_path.display());

    let settings = builder
        .build()
        .context("Failed to build settings")?
        .try_deserialize::<TransformSettings>()
        .context("Failed to deserialize settings")?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::Preset;

    #[test]
    fn prefix_or_suffix_enable_custom_transforms() {
        let options: TransformOptions =
            TransformSettings { prefix: Some("x-".to_owned()), ..Default::default() }.into();

        let transforms = options.transforms.expect("transforms from prefix");
        assert_eq!(transforms.prefix(), "x-");
        assert_eq!(transforms.suffix(), "");
    }

    #[test]
    fn plain_settings_have_no_custom_transforms() {
        let options: TransformOptions = TransformSettings::default().into();

        assert!(options.transforms.is_none());
        assert_eq!(options.naming.preset(), Some(Preset::React));
    }
}
