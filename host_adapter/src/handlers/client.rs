use super::{
    dialog_handler::DialogHandler, display_handler::DisplayHandler,
    download_handler::DownloadHandler, js_dialog_handler::JsDialogHandler,
    life_span_handler::LifeSpanHandler, load_handler::LoadHandler,
    render_handler::RenderHandler, request_handler::RequestHandler,
};

/// Answers the engine's "which object handles capability X" queries.
///
/// Returning `None` tells the engine to use its own behavior for that
/// capability. Returning a handler means the engine will call into it, so
/// only return one for capabilities that are actually wired.
pub trait Client: Send + Sync {
    fn display_handler(&self) -> Option<&dyn DisplayHandler> {
        None
    }

    fn life_span_handler(&self) -> Option<&dyn LifeSpanHandler> {
        None
    }

    fn render_handler(&self) -> Option<&dyn RenderHandler> {
        None
    }

    fn load_handler(&self) -> Option<&dyn LoadHandler> {
        None
    }

    fn request_handler(&self) -> Option<&dyn RequestHandler> {
        None
    }

    fn js_dialog_handler(&self) -> Option<&dyn JsDialogHandler> {
        None
    }

    fn dialog_handler(&self) -> Option<&dyn DialogHandler> {
        None
    }

    fn download_handler(&self) -> Option<&dyn DownloadHandler> {
        None
    }
}
