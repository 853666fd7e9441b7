use flagset::{FlagSet, flags};
use serde::Deserialize;

flags! {
    /// One category of engine events the adapter can opt into.
    #[derive(Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum Capability: u8 {
        Display = 0b0000_0001,
        LifeSpan = 0b0000_0010,
        Render = 0b0000_0100,
        Load = 0b0000_1000,
        Request = 0b0001_0000,
        JsDialog = 0b0010_0000,
        FileDialog = 0b0100_0000,
        Download = 0b1000_0000,
    }
}

/// The set of capabilities an adapter claims.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Capabilities(FlagSet<Capability>);

impl Default for Capabilities {
    fn default() -> Self {
        Variant::Full.capabilities()
    }
}

impl Capabilities {
    pub fn empty() -> Self {
        Self(FlagSet::default())
    }

    pub fn all() -> Self {
        Self(FlagSet::full())
    }

    pub fn contains(&self, capability: Capability) -> bool {
        self.0.contains(capability)
    }

    pub fn with(self, capability: Capability) -> Self {
        Self(self.0 | capability)
    }

    pub fn without(self, capability: Capability) -> Self {
        Self(self.0 - capability)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Capability> {
        self.0.into_iter()
    }
}

impl FromIterator<Capability> for Capabilities {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl From<FlagSet<Capability>> for Capabilities {
    fn from(value: FlagSet<Capability>) -> Self {
        Self(value)
    }
}

impl From<Capabilities> for FlagSet<Capability> {
    fn from(value: Capabilities) -> Self {
        value.0
    }
}

/// The two shapes the adapter ships in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Every capability, including request interception and the dialog,
    /// file dialog and download defaults.
    #[default]
    Full,
    /// Display, lifespan, render and load only. The engine keeps its own
    /// request, dialog and download behavior.
    Reduced,
}

impl Variant {
    pub fn capabilities(self) -> Capabilities {
        match self {
            Variant::Full => Capabilities::all(),
            Variant::Reduced => {
                (Capability::Display | Capability::LifeSpan | Capability::Render | Capability::Load)
                    .into()
            }
        }
    }
}
