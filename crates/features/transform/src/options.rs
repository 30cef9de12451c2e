use crate::filter::MembershipEntry;
use crate::name_transform::NameTransform;
use crate::preset::Preset;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Which preset runs as the base transform.
///
/// Defaults to [`Preset::React`]. A name the registry does not know, like
/// [`Naming::Disabled`], means "no base transform".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "NamingRepr", into = "NamingRepr")]
pub enum Naming {
    Named(Cow<'static, str>),
    Disabled,
}

/// Wire shape of [`Naming`]: a preset name or a boolean (`false` in practice).
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum NamingRepr {
    Flag(bool),
    Name(String),
}

impl Naming {
    /// Resolves the configured name in the preset registry.
    #[must_use]
    pub fn preset(&self) -> Option<Preset> {
        match self {
            Self::Named(name) => Preset::resolve(name),
            Self::Disabled => None,
        }
    }
}

impl Default for Naming {
    fn default() -> Self {
        Preset::React.into()
    }
}

impl From<Preset> for Naming {
    fn from(preset: Preset) -> Self {
        Self::Named(Cow::Borrowed(preset.into()))
    }
}

impl From<&str> for Naming {
    fn from(name: &str) -> Self {
        Self::Named(Cow::Owned(name.to_owned()))
    }
}

impl From<String> for Naming {
    fn from(name: String) -> Self {
        Self::Named(Cow::Owned(name))
    }
}

impl From<NamingRepr> for Naming {
    fn from(repr: NamingRepr) -> Self {
        match repr {
            NamingRepr::Flag(_) => Self::Disabled,
            NamingRepr::Name(name) => name.into(),
        }
    }
}

impl From<Naming> for NamingRepr {
    fn from(naming: Naming) -> Self {
        match naming {
            Naming::Named(name) => Self::Name(name.into_owned()),
            Naming::Disabled => Self::Flag(false),
        }
    }
}

/// Per-call options of [`crate::bem_entity_name_transform`].
///
/// `Default` gives the `react` preset, no custom transforms and no filtering.
#[derive(Debug, Clone, Default)]
pub struct TransformOptions {
    pub naming: Naming,
    /// Second, independent pass over the preset output.
    pub transforms: Option<NameTransform>,
    pub blacklist: Option<Vec<MembershipEntry>>,
    /// When present, the blacklist is ignored.
    pub whitelist: Option<Vec<MembershipEntry>>,
}

impl TransformOptions {
    #[must_use = "The builder must be finished with `build`"]
    pub fn builder() -> TransformOptionsBuilder {
        TransformOptionsBuilder::default()
    }
}

/// Builder for [`TransformOptions`].
#[derive(Debug, Clone, Default)]
pub struct TransformOptionsBuilder {
    options: TransformOptions,
}

impl TransformOptionsBuilder {
    #[must_use = "The builder must be finished with `build`"]
    pub fn naming(mut self, naming: impl Into<Naming>) -> Self {
        self.options.naming = naming.into();
        self
    }

    /// Runs no preset: only custom transforms (if any) are applied.
    #[must_use = "The builder must be finished with `build`"]
    pub fn without_naming(mut self) -> Self {
        self.options.naming = Naming::Disabled;
        self
    }

    #[must_use = "The builder must be finished with `build`"]
    pub fn transforms(mut self, transforms: NameTransform) -> Self {
        self.options.transforms = Some(transforms);
        self
    }

    #[must_use = "The builder must be finished with `build`"]
    pub fn blacklist<I, E>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<MembershipEntry>,
    {
        self.options.blacklist = Some(entries.into_iter().map(Into::into).collect());
        self
    }

    #[must_use = "The builder must be finished with `build`"]
    pub fn whitelist<I, E>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<MembershipEntry>,
    {
        self.options.whitelist = Some(entries.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn build(self) -> TransformOptions {
        self.options
    }
}
