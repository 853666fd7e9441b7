//! C entry points for hosts that are not written in Rust.
//!
//! Every handle given to a C callback is owned by the callee, which must hand
//! it back to [`host_adapter_browser_release`] exactly once.

use std::{
    ffi::{CString, c_char, c_int, c_void},
    ptr,
};

use log::warn;

use crate::{
    callback_table::CallbackTable,
    handle::BrowserHandle,
    structs::geometry::{RawRect, Rect},
};

pub type RawBrowserCallback =
    unsafe extern "C" fn(user_data: *mut c_void, browser: *mut BrowserHandle);
pub type RawTitleCallback =
    unsafe extern "C" fn(user_data: *mut c_void, browser: *mut BrowserHandle, title: *const c_char);
pub type RawPaintCallback = unsafe extern "C" fn(
    user_data: *mut c_void,
    browser: *mut BrowserHandle,
    buffer: *const c_void,
    width: c_int,
    height: c_int,
);
pub type RawViewRectCallback =
    unsafe extern "C" fn(user_data: *mut c_void, browser: *mut BrowserHandle) -> RawRect;

/// The callback table as a C host lays it out. Null slots are left empty.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawCallbackTable {
    pub user_data: *mut c_void,
    pub on_after_created: Option<RawBrowserCallback>,
    pub on_before_close: Option<RawBrowserCallback>,
    pub on_title_change: Option<RawTitleCallback>,
    pub on_load_end: Option<RawBrowserCallback>,
    pub on_paint: Option<RawPaintCallback>,
    pub get_view_rect: Option<RawViewRectCallback>,
}

#[derive(Clone, Copy)]
struct UserData(*mut c_void);

// the host promises its user data may be used from the engine's threads.
unsafe impl Send for UserData {}
unsafe impl Sync for UserData {}

impl UserData {
    fn ptr(self) -> *mut c_void {
        self.0
    }
}

impl RawCallbackTable {
    /// # Safety
    ///
    /// Every non-null slot must be safe to call with `user_data` from any
    /// thread for as long as the resulting table is alive.
    pub unsafe fn into_callback_table(self) -> CallbackTable {
        let user_data = UserData(self.user_data);
        let mut table = CallbackTable::new();

        if let Some(on_after_created) = self.on_after_created {
            table = table.on_after_created(move |browser| unsafe {
                on_after_created(user_data.ptr(), into_raw(browser))
            });
        }

        if let Some(on_before_close) = self.on_before_close {
            table = table.on_before_close(move |browser| unsafe {
                on_before_close(user_data.ptr(), into_raw(browser))
            });
        }

        if let Some(on_title_change) = self.on_title_change {
            table = table.on_title_change(move |browser, title| {
                let title = nul_terminated(title);
                unsafe { on_title_change(user_data.ptr(), into_raw(browser), title.as_ptr()) }
            });
        }

        if let Some(on_load_end) = self.on_load_end {
            table = table.on_load_end(move |browser| unsafe {
                on_load_end(user_data.ptr(), into_raw(browser))
            });
        }

        if let Some(on_paint) = self.on_paint {
            table = table.on_paint(move |browser, frame| {
                let (Ok(width), Ok(height)) =
                    (c_int::try_from(frame.width), c_int::try_from(frame.height))
                else {
                    warn!("{}x{} frame does not fit a C int", frame.width, frame.height);
                    return;
                };

                unsafe {
                    on_paint(
                        user_data.ptr(),
                        into_raw(browser),
                        frame.buffer.as_ptr().cast(),
                        width,
                        height,
                    )
                }
            });
        }

        if let Some(get_view_rect) = self.get_view_rect {
            table = table.get_view_rect(move |browser| {
                Rect::from(unsafe { get_view_rect(user_data.ptr(), into_raw(browser)) })
            });
        }

        table
    }
}

fn into_raw(browser: BrowserHandle) -> *mut BrowserHandle {
    Box::into_raw(Box::new(browser))
}

/// Titles stop at an embedded NUL, as any C reader would see them.
fn nul_terminated(title: &str) -> CString {
    let end = title.find('\0').unwrap_or(title.len());
    CString::new(&title[..end]).unwrap_or_default()
}

/// Takes another reference to `browser`. Returns null for a null handle.
///
/// # Safety
///
/// `browser` must be null or a live handle from this crate.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn host_adapter_browser_add_ref(
    browser: *const BrowserHandle,
) -> *mut BrowserHandle {
    match unsafe { browser.as_ref() } {
        Some(browser) => into_raw(browser.clone()),
        None => {
            warn!("add_ref on a null browser handle");
            ptr::null_mut()
        }
    }
}

/// Releases a handle. Null is ignored.
///
/// # Safety
///
/// `browser` must be null or a live handle from this crate, and is dangling
/// once this returns.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn host_adapter_browser_release(browser: *mut BrowserHandle) {
    if browser.is_null() {
        return;
    }
    drop(unsafe { Box::from_raw(browser) });
}

/// The engine identifier of `browser`, or -1 for a null handle.
///
/// # Safety
///
/// `browser` must be null or a live handle from this crate.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn host_adapter_browser_identifier(browser: *const BrowserHandle) -> c_int {
    unsafe { browser.as_ref() }.map_or(-1, BrowserHandle::identifier)
}

/// # Safety
///
/// Both arguments must be null or live handles from this crate.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn host_adapter_browser_is_same(
    browser: *const BrowserHandle,
    other: *const BrowserHandle,
) -> bool {
    match unsafe { (browser.as_ref(), other.as_ref()) } {
        (Some(browser), Some(other)) => browser.is_same(other),
        _ => false,
    }
}
