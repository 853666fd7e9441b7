use std::path::PathBuf;

use crate::{
    enums::{file_dialog_mode::FileDialogMode, js_dialog_type::JsDialogType},
    handle::BrowserHandle,
};

#[derive(Debug, Clone, Copy)]
pub struct JsDialog<'a> {
    pub origin_url: &'a str,
    pub dialog_type: JsDialogType,
    pub message_text: &'a str,
    pub default_prompt_text: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JsDialogDecision {
    /// Drop the dialog without showing anything, as if the page never asked.
    Suppress,
    /// Let the engine show its own dialog.
    ShowDefault,
    /// Answer as if the user pressed OK. `user_input` fills prompt dialogs.
    Accept { user_input: Option<String> },
    /// Answer as if the user pressed Cancel.
    Dismiss,
}

pub trait JsDialogPolicy: Send + Sync {
    fn on_js_dialog(&self, browser: &BrowserHandle, dialog: &JsDialog<'_>) -> JsDialogDecision;
}

impl<F> JsDialogPolicy for F
where
    F: Fn(&BrowserHandle, &JsDialog<'_>) -> JsDialogDecision + Send + Sync,
{
    fn on_js_dialog(&self, browser: &BrowserHandle, dialog: &JsDialog<'_>) -> JsDialogDecision {
        self(browser, dialog)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SuppressJsDialogs;

impl JsDialogPolicy for SuppressJsDialogs {
    fn on_js_dialog(&self, _browser: &BrowserHandle, _dialog: &JsDialog<'_>) -> JsDialogDecision {
        JsDialogDecision::Suppress
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FileDialog<'a> {
    pub mode: FileDialogMode,
    pub title: &'a str,
    pub default_file_path: &'a str,
    pub accept_filters: &'a [String],
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FileDialogDecision {
    Cancel,
    ShowDefault,
    Select(Vec<PathBuf>),
}

pub trait FileDialogPolicy: Send + Sync {
    fn on_file_dialog(&self, browser: &BrowserHandle, dialog: &FileDialog<'_>)
        -> FileDialogDecision;
}

impl<F> FileDialogPolicy for F
where
    F: Fn(&BrowserHandle, &FileDialog<'_>) -> FileDialogDecision + Send + Sync,
{
    fn on_file_dialog(
        &self,
        browser: &BrowserHandle,
        dialog: &FileDialog<'_>,
    ) -> FileDialogDecision {
        self(browser, dialog)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CancelFileDialogs;

impl FileDialogPolicy for CancelFileDialogs {
    fn on_file_dialog(
        &self,
        _browser: &BrowserHandle,
        _dialog: &FileDialog<'_>,
    ) -> FileDialogDecision {
        FileDialogDecision::Cancel
    }
}
