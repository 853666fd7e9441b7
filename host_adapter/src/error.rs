use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read adapter settings from {}", path.display())]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid adapter settings")]
    SettingsParse(#[from] toml::de::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
