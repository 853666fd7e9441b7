use crate::{
    engine::{browser::Browser, callbacks::FileDialogCallback},
    enums::file_dialog_mode::FileDialogMode,
    util::engine_string::EngineString,
};

pub trait DialogHandler: Send + Sync {
    /// Return true to take over the dialog, running `callback` now or later.
    /// Return false to let the engine show its own chooser.
    #[allow(clippy::too_many_arguments)]
    fn on_file_dialog(
        &self,
        _browser: &dyn Browser,
        _mode: FileDialogMode,
        _title: &EngineString,
        _default_file_path: &EngineString,
        _accept_filters: &[EngineString],
        _callback: &dyn FileDialogCallback,
    ) -> bool {
        false
    }
}
