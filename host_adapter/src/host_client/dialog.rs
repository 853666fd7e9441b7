use log::debug;

use crate::{
    engine::{
        browser::Browser,
        callbacks::{FileDialogCallback, JsDialogCallback},
    },
    enums::{file_dialog_mode::FileDialogMode, js_dialog_type::JsDialogType},
    handle::BrowserHandle,
    handlers::{
        dialog_handler::DialogHandler,
        js_dialog_handler::{JsDialogHandler, JsDialogResult},
    },
    policy::dialog::{FileDialog, FileDialogDecision, JsDialog, JsDialogDecision},
    util::engine_string::EngineString,
};

use super::HostClient;

impl JsDialogHandler for HostClient {
    fn on_js_dialog(
        &self,
        browser: &dyn Browser,
        origin_url: &EngineString,
        dialog_type: JsDialogType,
        message_text: &EngineString,
        default_prompt_text: &EngineString,
        callback: &dyn JsDialogCallback,
    ) -> JsDialogResult {
        let origin_url = origin_url.to_string_lossy();
        let message_text = message_text.to_string_lossy();
        let default_prompt_text = default_prompt_text.to_string_lossy();
        let dialog = JsDialog {
            origin_url: &origin_url,
            dialog_type,
            message_text: &message_text,
            default_prompt_text: &default_prompt_text,
        };

        let decision = self
            .policies
            .js_dialog
            .on_js_dialog(&BrowserHandle::new(browser), &dialog);
        debug!("{dialog_type:?} dialog from {origin_url}: {decision:?}");

        match decision {
            JsDialogDecision::Suppress => JsDialogResult {
                handled: false,
                suppress_message: true,
            },
            JsDialogDecision::ShowDefault => JsDialogResult {
                handled: false,
                suppress_message: false,
            },
            JsDialogDecision::Accept { user_input } => {
                let user_input = user_input.map(EngineString::from).unwrap_or_default();
                callback.cont(true, &user_input);
                JsDialogResult {
                    handled: true,
                    suppress_message: false,
                }
            }
            JsDialogDecision::Dismiss => {
                callback.cont(false, &EngineString::new());
                JsDialogResult {
                    handled: true,
                    suppress_message: false,
                }
            }
        }
    }
}

impl DialogHandler for HostClient {
    fn on_file_dialog(
        &self,
        browser: &dyn Browser,
        mode: FileDialogMode,
        title: &EngineString,
        default_file_path: &EngineString,
        accept_filters: &[EngineString],
        callback: &dyn FileDialogCallback,
    ) -> bool {
        let title = title.to_string_lossy();
        let default_file_path = default_file_path.to_string_lossy();
        let accept_filters = accept_filters
            .iter()
            .map(EngineString::to_string_lossy)
            .collect::<Vec<_>>();
        let dialog = FileDialog {
            mode,
            title: &title,
            default_file_path: &default_file_path,
            accept_filters: &accept_filters,
        };

        match self
            .policies
            .file_dialog
            .on_file_dialog(&BrowserHandle::new(browser), &dialog)
        {
            FileDialogDecision::Cancel => {
                callback.cancel();
                true
            }
            FileDialogDecision::ShowDefault => false,
            FileDialogDecision::Select(paths) => {
                callback.cont(&paths);
                true
            }
        }
    }
}
