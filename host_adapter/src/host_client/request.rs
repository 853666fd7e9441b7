use log::debug;

use crate::{
    engine::{browser::Browser, frame::Frame, request::Request},
    handlers::request_handler::{RequestHandler, ResourceRequestHandler},
    util::engine_string::EngineString,
};

use super::HostClient;

impl RequestHandler for HostClient {
    fn get_resource_request_handler(
        &self,
        _browser: &dyn Browser,
        frame: &dyn Frame,
        request: &dyn Request,
        _is_navigation: bool,
        _is_download: bool,
        _request_initiator: &EngineString,
    ) -> Option<&dyn ResourceRequestHandler> {
        let repair = self.referrer_repair.as_ref()?;
        if !repair.applies_to(frame, request) {
            return None;
        }

        debug!("routing {} through referrer repair", request.url());
        Some(repair)
    }
}
