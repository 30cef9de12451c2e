use bemt_entity::ModValue;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A per-field string function (`block`, `elem`, `mod_name`).
pub type NameFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// The modifier value function. It receives the boolean sentinel as well, and must
/// decide itself what to do with it.
pub type ModValueFn = Arc<dyn Fn(&ModValue) -> ModValue + Send + Sync>;

/// A complete transform specification.
///
/// Every field is always populated: functions default to identity and `prefix`/`suffix`
/// default to the empty string, so there is no difference between "not set" and
/// "set to identity". Cloning is cheap (the functions are reference-counted).
#[derive(Clone)]
pub struct NameTransform {
    pub(crate) block: NameFn,
    pub(crate) elem: NameFn,
    pub(crate) mod_name: NameFn,
    pub(crate) mod_val: ModValueFn,
    pub(crate) prefix: Cow<'static, str>,
    pub(crate) suffix: Cow<'static, str>,
}

impl NameTransform {
    /// A transform that leaves every field unchanged.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            block: Arc::new(|s: &str| s.to_owned()),
            elem: Arc::new(|s: &str| s.to_owned()),
            mod_name: Arc::new(|s: &str| s.to_owned()),
            mod_val: Arc::new(|v: &ModValue| v.clone()),
            prefix: Cow::Borrowed(""),
            suffix: Cow::Borrowed(""),
        }
    }

    /// Starts from [`NameTransform::identity`] and overrides only the fields you set.
    ///
    /// ```rust
    /// use bemt_transform::NameTransform;
    ///
    /// let spec = NameTransform::builder()
    ///     .block(|b| b.replace("old", "new"))
    ///     .prefix("x-")
    ///     .build();
    /// assert_eq!(spec.prefix(), "x-");
    /// ```
    #[must_use = "The builder must be finished with `build`"]
    pub fn builder() -> NameTransformBuilder {
        NameTransformBuilder { spec: Self::identity() }
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl Default for NameTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Debug for NameTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameTransform")
            .field("prefix", &self.prefix)
            .field("suffix", &self.suffix)
            .finish_non_exhaustive()
    }
}

/// Builder for [`NameTransform`]; unset fields keep their identity defaults.
#[derive(Debug, Clone, Default)]
pub struct NameTransformBuilder {
    spec: NameTransform,
}

impl NameTransformBuilder {
    #[must_use = "The builder must be finished with `build`"]
    pub fn block(mut self, f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.spec.block = Arc::new(f);
        self
    }

    #[must_use = "The builder must be finished with `build`"]
    pub fn elem(mut self, f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.spec.elem = Arc::new(f);
        self
    }

    #[must_use = "The builder must be finished with `build`"]
    pub fn mod_name(mut self, f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.spec.mod_name = Arc::new(f);
        self
    }

    /// Sets the modifier value function. Boolean modifiers are passed to `f` as
    /// [`ModValue::Boolean`].
    #[must_use = "The builder must be finished with `build`"]
    pub fn mod_val(mut self, f: impl Fn(&ModValue) -> ModValue + Send + Sync + 'static) -> Self {
        self.spec.mod_val = Arc::new(f);
        self
    }

    /// Sets a modifier value function over literal values only; boolean modifiers
    /// pass through untouched.
    #[must_use = "The builder must be finished with `build`"]
    pub fn mod_val_text(self, f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.mod_val(move |v: &ModValue| v.map_value(&f))
    }

    #[must_use = "The builder must be finished with `build`"]
    pub fn prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.spec.prefix = prefix.into();
        self
    }

    #[must_use = "The builder must be finished with `build`"]
    pub fn suffix(mut self, suffix: impl Into<Cow<'static, str>>) -> Self {
        self.spec.suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn build(self) -> NameTransform {
        self.spec
    }
}
