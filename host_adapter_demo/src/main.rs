use std::{env, sync::Arc};

use anyhow::{Context, Result, ensure};
use host_adapter::{
    AdapterSettings, CallbackTable, HostClient,
    enums::{js_dialog_type::JsDialogType, paint_element_type::PaintElementType},
    sim::{
        callbacks::{SimBeforeDownloadCallback, SimDownloadItem, SimJsDialogCallback},
        engine::SimEngine,
        request::SimRequest,
    },
};
use log::info;

use surface::Surface;

mod surface;

const EMBED_URL: &str = "https://www.youtube.com/embed/dQw4w9WgXcQ";

fn load_settings() -> Result<AdapterSettings> {
    match env::args().nth(1) {
        Some(path) => AdapterSettings::load(&path)
            .with_context(|| format!("failed to load adapter settings from {path}")),
        None => Ok(AdapterSettings::default()),
    }
}

fn callbacks(surface: &Arc<Surface>) -> CallbackTable {
    let paint_surface = surface.clone();
    let rect_surface = surface.clone();

    CallbackTable::new()
        .on_after_created(|browser| info!("browser {} created", browser.identifier()))
        .on_before_close(|browser| info!("browser {} closing", browser.identifier()))
        .on_title_change(|browser, title| {
            info!("browser {} title: {title}", browser.identifier())
        })
        .on_load_end(|browser| info!("browser {} loaded", browser.identifier()))
        .on_paint(move |browser, frame| paint_surface.present(&browser, frame))
        .get_view_rect(move |_| rect_surface.view_rect())
}

pub fn main() -> Result<()> {
    env_logger::init();

    let settings = load_settings()?;
    info!("adapter settings: {settings:?}");

    let surface = Arc::new(Surface::new(640, 360));
    let client = Arc::new(
        HostClient::builder()
            .settings(&settings)
            .callbacks(callbacks(&surface))
            .build(),
    );
    info!(
        "claimed capabilities: {:?}",
        client.capabilities().iter().collect::<Vec<_>>()
    );

    let engine = SimEngine::new(client.clone());

    // a page loaded from memory, which has no url of its own
    let browser = engine.create_browser("");
    engine.title_change(&browser, "Embedded player");
    engine.loading_progress(&browser, 0.5);

    let request = SimRequest::new(EMBED_URL);
    let outcome = engine.send_request(&browser, &browser.main_frame_sim(), &request, false);
    info!(
        "player request intercepted: {}, referrer now {:?}",
        outcome.intercepted,
        request.referrer()
    );

    engine.load_end(&browser, &browser.main_frame_sim(), 200);

    if let Some(rect) = engine.view_rect(&browser) {
        engine.paint(
            &browser,
            PaintElementType::View,
            rect.width,
            rect.height,
            0x80,
        );
    }
    match surface.snapshot() {
        Some(snapshot) => info!(
            "browser {} painted {}x{} ({} bytes kept)",
            snapshot.browser,
            snapshot.width,
            snapshot.height,
            snapshot.pixels.len()
        ),
        None => info!("nothing painted"),
    }

    let popup_blocked =
        engine.open_popup(&browser, &browser.main_frame_sim(), "https://example.com/", true);
    info!(
        "popup blocked: {popup_blocked}, frame loaded {:?}",
        browser.main_frame_sim().loaded_urls()
    );

    let dialog = engine.js_dialog(
        &browser,
        JsDialogType::Alert,
        "hello",
        &SimJsDialogCallback::default(),
    );
    info!("alert result: {dialog:?}");

    let download = SimBeforeDownloadCallback::default();
    engine.download(
        &browser,
        &SimDownloadItem::new(1, "https://example.com/file.zip"),
        "file.zip",
        &download,
    );
    info!("download continued with: {:?}", download.continued_with());

    ensure!(engine.close_browser(&browser), "browser refused to close");
    ensure!(
        browser.ref_count() == 1,
        "{} browser references leaked",
        browser.ref_count() - 1
    );

    Ok(())
}
