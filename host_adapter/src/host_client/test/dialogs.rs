use std::path::PathBuf;

use crate::{
    enums::{file_dialog_mode::FileDialogMode, js_dialog_type::JsDialogType},
    handle::BrowserHandle,
    handlers::js_dialog_handler::JsDialogResult,
    host_client::HostClient,
    policy::{
        dialog::{FileDialog, FileDialogDecision, JsDialog, JsDialogDecision},
        download::{Download, DownloadDecision},
    },
    sim::callbacks::{
        FileDialogOutcome, SimBeforeDownloadCallback, SimDownloadItem, SimFileDialogCallback,
        SimJsDialogCallback,
    },
};

use super::{start, Recorder};

#[test]
fn js_dialogs_are_suppressed() {
    let (engine, _client) = start(HostClient::new(Recorder::default().table()));
    let browser = engine.create_browser("https://example.com/");

    for dialog_type in [JsDialogType::Alert, JsDialogType::Confirm, JsDialogType::Prompt] {
        let callback = SimJsDialogCallback::default();
        let result = engine.js_dialog(&browser, dialog_type, "Are you sure?", &callback);

        assert_eq!(
            result,
            JsDialogResult {
                handled: false,
                suppress_message: true,
            }
        );
        assert!(callback.answers().is_empty());
    }
}

#[test]
fn js_dialog_policy_can_answer() {
    let client = HostClient::builder()
        .js_dialog_policy(|_: &BrowserHandle, dialog: &JsDialog<'_>| match dialog.dialog_type {
            JsDialogType::Prompt => JsDialogDecision::Accept {
                user_input: Some(format!("re: {}", dialog.message_text)),
            },
            JsDialogType::Confirm => JsDialogDecision::Dismiss,
            JsDialogType::Alert => JsDialogDecision::ShowDefault,
        })
        .build();
    let (engine, _client) = start(client);
    let browser = engine.create_browser("https://example.com/");

    let prompt = SimJsDialogCallback::default();
    let result = engine.js_dialog(&browser, JsDialogType::Prompt, "name?", &prompt);
    assert!(result.handled);
    assert_eq!(prompt.answers(), vec![(true, "re: name?".to_owned())]);

    let confirm = SimJsDialogCallback::default();
    assert!(engine.js_dialog(&browser, JsDialogType::Confirm, "ok?", &confirm).handled);
    assert_eq!(confirm.answers(), vec![(false, String::new())]);

    let alert = SimJsDialogCallback::default();
    assert_eq!(
        engine.js_dialog(&browser, JsDialogType::Alert, "hi", &alert),
        JsDialogResult::default()
    );
    assert!(alert.answers().is_empty());
}

#[test]
fn file_dialogs_are_canceled() {
    let (engine, _client) = start(HostClient::new(Recorder::default().table()));
    let browser = engine.create_browser("about:blank");

    let callback = SimFileDialogCallback::default();
    assert!(engine.file_dialog(&browser, FileDialogMode::Open, &["image/*"], &callback));
    assert_eq!(callback.outcome(), FileDialogOutcome::Canceled);
}

#[test]
fn file_dialog_policy_can_select_or_defer() {
    let client = HostClient::builder()
        .file_dialog_policy(|_: &BrowserHandle, dialog: &FileDialog<'_>| {
            match dialog.accept_filters {
                [filter] if filter == ".txt" => {
                    FileDialogDecision::Select(vec![PathBuf::from("/tmp/notes.txt")])
                }
                _ => FileDialogDecision::ShowDefault,
            }
        })
        .build();
    let (engine, _client) = start(client);
    let browser = engine.create_browser("about:blank");

    let text = SimFileDialogCallback::default();
    assert!(engine.file_dialog(&browser, FileDialogMode::Open, &[".txt"], &text));
    assert_eq!(
        text.outcome(),
        FileDialogOutcome::Selected(vec![PathBuf::from("/tmp/notes.txt")])
    );

    let other = SimFileDialogCallback::default();
    assert!(!engine.file_dialog(&browser, FileDialogMode::Save, &[], &other));
    assert_eq!(other.outcome(), FileDialogOutcome::Pending);
}

#[test]
fn downloads_are_denied() {
    let (engine, _client) = start(HostClient::new(Recorder::default().table()));
    let browser = engine.create_browser("about:blank");

    let callback = SimBeforeDownloadCallback::default();
    let item = SimDownloadItem::new(1, "https://example.com/file.zip");
    engine.download(&browser, &item, "file.zip", &callback);

    assert_eq!(callback.continued_with(), None);
}

#[test]
fn download_policy_can_save() {
    let client = HostClient::builder()
        .download_policy(|_: &BrowserHandle, download: &Download<'_>| {
            assert_eq!(download.url, "https://example.com/file.zip");
            assert_eq!(download.mime_type, "application/octet-stream");
            DownloadDecision::Save {
                path: PathBuf::from("/downloads").join(download.suggested_name),
                show_dialog: false,
            }
        })
        .build();
    let (engine, _client) = start(client);
    let browser = engine.create_browser("about:blank");

    let callback = SimBeforeDownloadCallback::default();
    let item = SimDownloadItem::new(7, "https://example.com/file.zip");
    engine.download(&browser, &item, "file.zip", &callback);

    assert_eq!(
        callback.continued_with(),
        Some(("/downloads/file.zip".to_owned(), false))
    );
}
