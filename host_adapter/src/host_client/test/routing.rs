use crate::{
    callback_table::CallbackTable,
    enums::{
        capability::{Capabilities, Capability, Variant},
        file_dialog_mode::FileDialogMode,
        js_dialog_type::JsDialogType,
        paint_element_type::PaintElementType,
    },
    handlers::{client::Client, js_dialog_handler::JsDialogResult},
    host_client::HostClient,
    sim::{
        callbacks::{
            FileDialogOutcome, SimBeforeDownloadCallback, SimDownloadItem, SimFileDialogCallback,
            SimJsDialogCallback,
        },
        frame::SimFrame,
        request::SimRequest,
    },
    structs::settings::AdapterSettings,
};

use super::{start, Event, Recorder};

fn claimed(client: &HostClient) -> [bool; 8] {
    [
        client.display_handler().is_some(),
        client.life_span_handler().is_some(),
        client.render_handler().is_some(),
        client.load_handler().is_some(),
        client.request_handler().is_some(),
        client.js_dialog_handler().is_some(),
        client.dialog_handler().is_some(),
        client.download_handler().is_some(),
    ]
}

#[test]
fn full_variant_claims_every_capability() {
    let client = HostClient::new(Recorder::default().table());
    assert_eq!(client.capabilities(), Capabilities::all());
    assert_eq!(claimed(&client), [true; 8]);
}

#[test]
fn reduced_variant_claims_only_its_capabilities() {
    let client = HostClient::builder()
        .callbacks(Recorder::default().table())
        .variant(Variant::Reduced)
        .build();
    assert_eq!(
        claimed(&client),
        [true, true, true, true, false, false, false, false]
    );

    // the engine falls back to its own behavior for the rest
    let (engine, _client) = start(client);
    let browser = engine.create_browser("");
    let request = SimRequest::new("https://www.youtube.com/embed/XYZ");
    assert!(!engine.send_request(&browser, &browser.main_frame_sim(), &request, true).intercepted);
    assert_eq!(
        engine.js_dialog(&browser, JsDialogType::Alert, "hi", &SimJsDialogCallback::default()),
        JsDialogResult::default()
    );
}

#[test]
fn explicit_capabilities_override_the_variant() {
    let client = HostClient::builder()
        .callbacks(Recorder::default().table())
        .variant(Variant::Reduced)
        .capabilities([Capability::Display, Capability::Download].into_iter().collect::<Capabilities>())
        .build();
    assert_eq!(
        claimed(&client),
        [true, false, false, false, false, false, false, true]
    );
}

#[test]
fn settings_choose_the_claimed_set() {
    let settings = AdapterSettings::from_toml_str(
        r#"
        capabilities = ["display", "life_span", "request"]

        [referrer_repair]
        target_prefix = "https://player.example/"
        referrer = "https://example.org/"
        "#,
    )
    .unwrap();
    let (engine, client) = start(HostClient::builder().settings(&settings).build());

    assert_eq!(
        claimed(&client),
        [true, true, false, false, true, false, false, false]
    );

    let browser = engine.create_browser("");
    let request = SimRequest::new("https://player.example/v/2");
    assert!(engine.send_request(&browser, &browser.main_frame_sim(), &request, false).intercepted);
    assert_eq!(request.referrer(), "https://example.org/");
}

#[test]
fn titles_arrive_as_utf8() {
    let recorder = Recorder::default();
    let (engine, _client) = start(HostClient::new(recorder.table()));
    let browser = engine.create_browser("about:blank");

    engine.title_change_utf16(&browser, "Grüße 🎉".encode_utf16().collect());
    // an unpaired surrogate is replaced rather than dropped
    engine.title_change_utf16(&browser, vec![0x0041, 0xd800, 0x0042]);

    assert_eq!(
        recorder.events()[1..],
        [
            Event::TitleChange(1, "Grüße 🎉".to_owned()),
            Event::TitleChange(1, "A\u{fffd}B".to_owned()),
        ]
    );
}

#[test]
fn an_empty_table_survives_every_event() {
    let (engine, client) = start(HostClient::new(CallbackTable::new()));
    assert!(!client.capabilities().contains(Capability::Render));

    let browser = engine.create_browser("");
    let frame = browser.main_frame_sim();
    engine.title_change(&browser, "Nobody listens");
    engine.loading_progress(&browser, 0.5);
    engine.load_end(&browser, &frame, 200);
    engine.load_end(&browser, &SimFrame::sub(""), 200);
    assert_eq!(engine.view_rect(&browser), None);
    assert!(!engine.paint(&browser, PaintElementType::View, 2, 2, 0));

    assert!(engine.open_popup(&browser, &frame, "https://example.com/", true));
    let request = SimRequest::new("https://www.youtube.com/embed/XYZ");
    assert!(engine.send_request(&browser, &frame, &request, true).intercepted);

    let js = SimJsDialogCallback::default();
    assert!(engine.js_dialog(&browser, JsDialogType::Confirm, "?", &js).suppress_message);
    let file = SimFileDialogCallback::default();
    assert!(engine.file_dialog(&browser, FileDialogMode::OpenMultiple, &[], &file));
    assert_eq!(file.outcome(), FileDialogOutcome::Canceled);
    engine.download(
        &browser,
        &SimDownloadItem::new(1, "https://example.com/a"),
        "a",
        &SimBeforeDownloadCallback::default(),
    );

    assert!(engine.close_browser(&browser));
    assert_eq!(browser.ref_count(), 1);
}
