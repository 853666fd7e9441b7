mod dialogs;
mod navigation;
mod routing;

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{callback_table::CallbackTable, sim::engine::SimEngine, structs::geometry::Rect};

use super::HostClient;

const VIEW: Rect = Rect {
    x: 0,
    y: 0,
    width: 800,
    height: 600,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    AfterCreated(i32),
    BeforeClose(i32),
    TitleChange(i32, String),
    LoadEnd(i32),
    Paint {
        browser: i32,
        width: usize,
        height: usize,
        pixels: Vec<u8>,
    },
}

/// Records every notification the host receives, in order.
#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<Event>>>,
}

impl Recorder {
    fn push(&self, event: Event) {
        self.events.lock().push(event);
    }

    fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    fn table(&self) -> CallbackTable {
        let after_created = self.clone();
        let before_close = self.clone();
        let title_change = self.clone();
        let load_end = self.clone();
        let paint = self.clone();

        CallbackTable::new()
            .on_after_created(move |browser| {
                after_created.push(Event::AfterCreated(browser.identifier()))
            })
            .on_before_close(move |browser| {
                before_close.push(Event::BeforeClose(browser.identifier()))
            })
            .on_title_change(move |browser, title| {
                title_change.push(Event::TitleChange(browser.identifier(), title.to_owned()))
            })
            .on_load_end(move |browser| load_end.push(Event::LoadEnd(browser.identifier())))
            .on_paint(move |browser, frame| {
                paint.push(Event::Paint {
                    browser: browser.identifier(),
                    width: frame.width,
                    height: frame.height,
                    pixels: frame.buffer.to_vec(),
                })
            })
            .get_view_rect(|_| VIEW)
    }
}

fn start(client: HostClient) -> (SimEngine, Arc<HostClient>) {
    let client = Arc::new(client);
    (SimEngine::new(client.clone()), client)
}
