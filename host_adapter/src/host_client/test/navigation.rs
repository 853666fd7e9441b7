use crate::{
    enums::{capability::Capability, referrer_policy::ReferrerPolicy},
    handle::BrowserHandle,
    handlers::request_handler::ResourceLoadAction,
    host_client::HostClient,
    policy::{
        popup::{PopupDecision, PopupRequest},
        referrer::ReferrerRepair,
    },
    sim::{frame::SimFrame, request::SimRequest},
};

use super::{start, Event, Recorder};

const EMBED: &str = "https://www.youtube.com/embed/XYZ";

#[test]
fn embedded_player_requests_get_a_referrer() {
    let (engine, _client) = start(HostClient::new(Recorder::default().table()));

    let browser = engine.create_browser("");
    let request = SimRequest::new(EMBED);
    let outcome = engine.send_request(&browser, &browser.main_frame_sim(), &request, true);

    assert!(outcome.intercepted);
    assert_eq!(outcome.action, ResourceLoadAction::Continue);
    assert_eq!(request.referrer(), "https://www.youtube.com/");
    assert_eq!(request.referrer_policy_set(), Some(ReferrerPolicy::DEFAULT));
}

#[test]
fn requests_from_pages_with_a_url_are_untouched() {
    let (engine, _client) = start(HostClient::new(Recorder::default().table()));

    let browser = engine.create_browser("https://example.com/");
    let request = SimRequest::new(EMBED);
    let outcome = engine.send_request(&browser, &browser.main_frame_sim(), &request, false);

    assert!(!outcome.intercepted);
    assert_eq!(request.referrer(), "");
    assert_eq!(request.set_referrer_calls(), 0);
}

#[test]
fn existing_referrers_and_other_urls_are_untouched() {
    let (engine, _client) = start(HostClient::new(Recorder::default().table()));
    let browser = engine.create_browser("");
    let frame = browser.main_frame_sim();

    let referred = SimRequest::with_referrer(EMBED, "https://example.com/");
    assert!(!engine.send_request(&browser, &frame, &referred, false).intercepted);
    assert_eq!(referred.referrer(), "https://example.com/");

    let watch = SimRequest::new("https://www.youtube.com/watch?v=XYZ");
    assert!(!engine.send_request(&browser, &frame, &watch, true).intercepted);
    assert_eq!(watch.set_referrer_calls(), 0);
}

#[test]
fn referrer_rule_can_be_replaced() {
    let client = HostClient::builder()
        .referrer_repair(Some(ReferrerRepair::new(
            "https://player.example/",
            "https://example.org/",
        )))
        .build();
    let (engine, _client) = start(client);
    let browser = engine.create_browser("");
    let frame = SimFrame::sub("");

    let request = SimRequest::new("https://player.example/v/1");
    assert!(engine.send_request(&browser, &frame, &request, false).intercepted);
    assert_eq!(request.referrer(), "https://example.org/");

    let embed = SimRequest::new(EMBED);
    assert!(!engine.send_request(&browser, &frame, &embed, false).intercepted);
}

#[test]
fn without_a_referrer_rule_requests_are_not_claimed() {
    let client = HostClient::builder().referrer_repair(None).build();
    let (engine, client) = start(client);

    assert!(!client.capabilities().contains(Capability::Request));

    let browser = engine.create_browser("");
    let request = SimRequest::new(EMBED);
    assert!(!engine.send_request(&browser, &browser.main_frame_sim(), &request, true).intercepted);
    assert_eq!(request.referrer(), "");
}

#[test]
fn popups_load_in_the_frame_that_opened_them() {
    let (engine, _client) = start(HostClient::new(Recorder::default().table()));

    let browser = engine.create_browser("https://example.com/");
    let frame = browser.main_frame_sim();
    assert!(engine.open_popup(&browser, &frame, "https://example.com/popup", true));

    assert_eq!(frame.loaded_urls(), vec!["https://example.com/popup".to_owned()]);
}

#[test]
fn popup_policy_can_allow_or_block() {
    let allow = HostClient::builder()
        .popup_policy(|_: &BrowserHandle, _: &PopupRequest<'_>| PopupDecision::Allow)
        .build();
    let (engine, _client) = start(allow);
    let browser = engine.create_browser("about:blank");
    assert!(!engine.open_popup(&browser, &browser.main_frame_sim(), "https://a.example/", false));
    assert!(browser.main_frame_sim().loaded_urls().is_empty());

    let block = HostClient::builder()
        .popup_policy(|_: &BrowserHandle, popup: &PopupRequest<'_>| {
            if popup.user_gesture {
                PopupDecision::Redirect
            } else {
                PopupDecision::Block
            }
        })
        .build();
    let (engine, _client) = start(block);
    let browser = engine.create_browser("about:blank");
    let frame = browser.main_frame_sim();
    assert!(engine.open_popup(&browser, &frame, "https://ad.example/", false));
    assert!(frame.loaded_urls().is_empty());
    assert!(engine.open_popup(&browser, &frame, "https://b.example/", true));
    assert_eq!(frame.loaded_urls(), vec!["https://b.example/".to_owned()]);
}

#[test]
fn only_main_frame_loads_are_reported() {
    let recorder = Recorder::default();
    let (engine, _client) = start(HostClient::new(recorder.table()));

    let browser = engine.create_browser("https://example.com/");
    engine.load_end(&browser, &SimFrame::sub("https://ads.example/"), 200);
    engine.load_end(&browser, &browser.main_frame_sim(), 404);

    assert_eq!(
        recorder.events(),
        vec![Event::AfterCreated(1), Event::LoadEnd(1)]
    );
}
