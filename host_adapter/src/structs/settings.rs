use std::path::Path;

use serde::Deserialize;

use crate::{
    enums::capability::{Capabilities, Capability, Variant},
    error::{Error, Result},
    policy::referrer::ReferrerRepair,
};

/// Adapter configuration, usually read from a TOML file by the host.
///
/// ```toml
/// variant = "reduced"
/// enforce_ui_thread = true
///
/// [referrer_repair]
/// enabled = true
/// target_prefix = "https://www.youtube.com/embed/"
/// referrer = "https://www.youtube.com/"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdapterSettings {
    pub variant: Variant,

    /// Replaces the variant's capability set when present.
    pub capabilities: Option<Vec<Capability>>,

    pub enforce_ui_thread: bool,

    pub referrer_repair: ReferrerRepairSettings,
}

impl Default for AdapterSettings {
    fn default() -> Self {
        Self {
            variant: Variant::Full,
            capabilities: None,
            enforce_ui_thread: true,
            referrer_repair: ReferrerRepairSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReferrerRepairSettings {
    pub enabled: bool,
    pub target_prefix: String,
    pub referrer: String,
}

impl Default for ReferrerRepairSettings {
    fn default() -> Self {
        let repair = ReferrerRepair::default();
        Self {
            enabled: true,
            target_prefix: repair.target_prefix().to_owned(),
            referrer: repair.referrer().to_owned(),
        }
    }
}

impl AdapterSettings {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| Error::SettingsIo {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn capabilities(&self) -> Capabilities {
        match &self.capabilities {
            Some(capabilities) => capabilities.iter().copied().collect(),
            None => self.variant.capabilities(),
        }
    }

    pub fn referrer_repair(&self) -> Option<ReferrerRepair> {
        let settings = &self.referrer_repair;
        settings
            .enabled
            .then(|| ReferrerRepair::new(&settings.target_prefix, &settings.referrer))
    }
}
