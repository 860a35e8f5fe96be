//! Shim configuration.
//!
//! There is no runtime configuration surface: the defaults are fixed at
//! build time, with the `debug-mirror` feature selecting the variant that
//! duplicates every message to stderr.

use std::borrow::Cow;

/// Tag printed in every primary message.
pub const DEFAULT_TAG: &str = "Naviary";

/// Whether printed values are mirrored to the diagnostic stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirror {
    Enabled,
    Disabled,
}

impl Mirror {
    /// The variant selected by the crate features of this build.
    pub const fn from_build() -> Self {
        if cfg!(feature = "debug-mirror") {
            Mirror::Enabled
        } else {
            Mirror::Disabled
        }
    }

    pub fn is_enabled(self) -> bool {
        self == Mirror::Enabled
    }
}

/// Output shim configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShimConfig {
    /// Tag shown in `"🚀 <tag> says: ..."`.
    pub tag: Cow<'static, str>,
    /// Diagnostic mirroring.
    pub mirror: Mirror,
}

impl ShimConfig {
    /// Set diagnostic mirroring.
    pub fn with_mirror(mut self, mirror: Mirror) -> Self {
        self.mirror = mirror;
        self
    }
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            tag: Cow::Borrowed(DEFAULT_TAG),
            mirror: Mirror::from_build(),
        }
    }
}
