use crate::{
    engine::{browser::Browser, callbacks::JsDialogCallback},
    enums::js_dialog_type::JsDialogType,
    util::engine_string::EngineString,
};

/// The engine-level answer to a JavaScript dialog request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct JsDialogResult {
    /// True if the handler will run (or already ran) the callback.
    pub handled: bool,
    /// With `handled` false, true drops the dialog without showing anything.
    pub suppress_message: bool,
}

pub trait JsDialogHandler: Send + Sync {
    #[allow(clippy::too_many_arguments)]
    fn on_js_dialog(
        &self,
        _browser: &dyn Browser,
        _origin_url: &EngineString,
        _dialog_type: JsDialogType,
        _message_text: &EngineString,
        _default_prompt_text: &EngineString,
        _callback: &dyn JsDialogCallback,
    ) -> JsDialogResult {
        JsDialogResult::default()
    }
}
