use std::path::PathBuf;

use parking_lot::Mutex;

use crate::{
    engine::{
        callbacks::{BeforeDownloadCallback, FileDialogCallback, JsDialogCallback},
        download_item::DownloadItem,
    },
    util::engine_string::EngineString,
};

#[derive(Default)]
pub struct SimJsDialogCallback {
    answers: Mutex<Vec<(bool, String)>>,
}

impl SimJsDialogCallback {
    pub fn answers(&self) -> Vec<(bool, String)> {
        self.answers.lock().clone()
    }
}

impl JsDialogCallback for SimJsDialogCallback {
    fn cont(&self, success: bool, user_input: &EngineString) {
        self.answers
            .lock()
            .push((success, user_input.to_string_lossy()));
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FileDialogOutcome {
    #[default]
    Pending,
    Canceled,
    Selected(Vec<PathBuf>),
}

#[derive(Default)]
pub struct SimFileDialogCallback {
    outcome: Mutex<FileDialogOutcome>,
}

impl SimFileDialogCallback {
    pub fn outcome(&self) -> FileDialogOutcome {
        self.outcome.lock().clone()
    }
}

impl FileDialogCallback for SimFileDialogCallback {
    fn cont(&self, file_paths: &[PathBuf]) {
        *self.outcome.lock() = FileDialogOutcome::Selected(file_paths.to_vec());
    }

    fn cancel(&self) {
        *self.outcome.lock() = FileDialogOutcome::Canceled;
    }
}

#[derive(Default)]
pub struct SimBeforeDownloadCallback {
    continued: Mutex<Option<(String, bool)>>,
}

impl SimBeforeDownloadCallback {
    /// The path and show-dialog flag the download was continued with, or
    /// `None` if it was left to be canceled.
    pub fn continued_with(&self) -> Option<(String, bool)> {
        self.continued.lock().clone()
    }
}

impl BeforeDownloadCallback for SimBeforeDownloadCallback {
    fn cont(&self, download_path: &EngineString, show_dialog: bool) {
        *self.continued.lock() = Some((download_path.to_string_lossy(), show_dialog));
    }
}

pub struct SimDownloadItem {
    pub id: u32,
    pub url: String,
    pub mime_type: String,
    pub total_bytes: Option<u64>,
}

impl SimDownloadItem {
    pub fn new(id: u32, url: &str) -> Self {
        Self {
            id,
            url: url.to_owned(),
            mime_type: "application/octet-stream".to_owned(),
            total_bytes: None,
        }
    }
}

impl DownloadItem for SimDownloadItem {
    fn id(&self) -> u32 {
        self.id
    }

    fn url(&self) -> EngineString {
        self.url.as_str().into()
    }

    fn mime_type(&self) -> EngineString {
        self.mime_type.as_str().into()
    }

    fn total_bytes(&self) -> Option<u64> {
        self.total_bytes
    }
}
