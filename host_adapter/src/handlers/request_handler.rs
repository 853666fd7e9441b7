use crate::{
    engine::{browser::Browser, frame::Frame, request::Request},
    util::engine_string::EngineString,
};

/// What the engine should do with a resource request. Intercepted requests
/// are only ever rewritten, never held back, so continuing is the one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResourceLoadAction {
    #[default]
    Continue,
}

pub trait RequestHandler: Send + Sync {
    /// Called on the IO thread before a resource request is started.
    /// Return a handler to intercept the request, or `None` to let it
    /// proceed untouched.
    #[allow(clippy::too_many_arguments)]
    fn get_resource_request_handler(
        &self,
        _browser: &dyn Browser,
        _frame: &dyn Frame,
        _request: &dyn Request,
        _is_navigation: bool,
        _is_download: bool,
        _request_initiator: &EngineString,
    ) -> Option<&dyn ResourceRequestHandler> {
        None
    }
}

pub trait ResourceRequestHandler: Send + Sync {
    /// The request may still be modified here.
    fn on_before_resource_load(
        &self,
        _browser: &dyn Browser,
        _frame: &dyn Frame,
        _request: &dyn Request,
    ) -> ResourceLoadAction {
        ResourceLoadAction::Continue
    }
}
