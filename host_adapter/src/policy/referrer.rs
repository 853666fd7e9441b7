use log::debug;

use crate::{
    engine::{browser::Browser, frame::Frame, request::Request},
    enums::referrer_policy::ReferrerPolicy,
    handlers::request_handler::{ResourceLoadAction, ResourceRequestHandler},
    util::engine_string::EngineString,
};

const YOUTUBE_EMBED_PREFIX: &str = "https://www.youtube.com/embed/";
const YOUTUBE_ROOT: &str = "https://www.youtube.com/";

/// Gives referrer-less embedded player requests a referrer.
///
/// Pages loaded from memory (data: urls and the like) never send a referrer,
/// and some embedded players refuse to play without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferrerRepair {
    target_prefix: String,
    referrer: String,
}

impl Default for ReferrerRepair {
    fn default() -> Self {
        Self::new(YOUTUBE_EMBED_PREFIX, YOUTUBE_ROOT)
    }
}

impl ReferrerRepair {
    pub fn new(target_prefix: &str, referrer: &str) -> Self {
        Self {
            target_prefix: target_prefix.to_owned(),
            referrer: referrer.to_owned(),
        }
    }

    pub fn target_prefix(&self) -> &str {
        &self.target_prefix
    }

    pub fn referrer(&self) -> &str {
        &self.referrer
    }

    /// True when the request has no referrer, its frame has no url of its
    /// own, and it targets the player prefix.
    pub fn applies_to(&self, frame: &dyn Frame, request: &dyn Request) -> bool {
        request.referrer_url().is_empty()
            && frame.url().is_empty()
            && request.url().starts_with_str(&self.target_prefix)
    }
}

impl ResourceRequestHandler for ReferrerRepair {
    fn on_before_resource_load(
        &self,
        _browser: &dyn Browser,
        _frame: &dyn Frame,
        request: &dyn Request,
    ) -> ResourceLoadAction {
        debug!("setting referrer {} for {}", self.referrer, request.url());
        request.set_referrer(
            &EngineString::from(self.referrer.as_str()),
            ReferrerPolicy::DEFAULT,
        );

        ResourceLoadAction::Continue
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        enums::referrer_policy::ReferrerPolicy,
        handlers::request_handler::{ResourceLoadAction, ResourceRequestHandler},
        sim::{browser::SimBrowser, frame::SimFrame, request::SimRequest},
    };

    use super::ReferrerRepair;

    #[test]
    fn matches_only_referrerless_embeds_from_blank_frames() {
        let repair = ReferrerRepair::default();
        let blank = SimFrame::main("");
        let real = SimFrame::main("https://example.com/");
        let embed = SimRequest::new("https://www.youtube.com/embed/XYZ");

        assert!(repair.applies_to(&blank, &embed));
        assert!(!repair.applies_to(&real, &embed));

        let referred = SimRequest::with_referrer(
            "https://www.youtube.com/embed/XYZ",
            "https://example.com/",
        );
        assert!(!repair.applies_to(&blank, &referred));

        let watch = SimRequest::new("https://www.youtube.com/watch?v=XYZ");
        assert!(!repair.applies_to(&blank, &watch));
    }

    #[test]
    fn injects_the_canonical_root() {
        let repair = ReferrerRepair::default();
        let browser = SimBrowser::new(1, "");
        let request = SimRequest::new("https://www.youtube.com/embed/XYZ");

        let action = repair.on_before_resource_load(&browser, &browser.main_frame_sim(), &request);

        assert_eq!(action, ResourceLoadAction::Continue);
        assert_eq!(request.referrer(), "https://www.youtube.com/");
        assert_eq!(request.referrer_policy_set(), Some(ReferrerPolicy::DEFAULT));
    }

    #[test]
    fn custom_rules_match_and_inject_their_own_urls() {
        let repair = ReferrerRepair::new("https://player.example/v/", "https://example.org/");
        assert_eq!(repair.target_prefix(), "https://player.example/v/");
        assert_eq!(repair.referrer(), "https://example.org/");

        let browser = SimBrowser::new(1, "");
        let frame = browser.main_frame_sim();
        let request = SimRequest::new("https://player.example/v/42");
        assert!(repair.applies_to(&frame, &request));
        assert!(!repair.applies_to(&frame, &SimRequest::new("https://player.example/w/42")));

        repair.on_before_resource_load(&browser, &frame, &request);
        assert_eq!(request.referrer(), "https://example.org/");
        assert_eq!(request.set_referrer_calls(), 1);
    }
}
