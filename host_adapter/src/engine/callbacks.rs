use std::path::PathBuf;

use crate::util::engine_string::EngineString;

/// Answers a JavaScript dialog the adapter chose to handle.
pub trait JsDialogCallback: Send + Sync {
    fn cont(&self, success: bool, user_input: &EngineString);
}

/// Completes a file chooser request.
pub trait FileDialogCallback: Send + Sync {
    fn cont(&self, file_paths: &[PathBuf]);

    fn cancel(&self);
}

/// Lets a download proceed. Not calling it leaves the download canceled.
pub trait BeforeDownloadCallback: Send + Sync {
    fn cont(&self, download_path: &EngineString, show_dialog: bool);
}
