//! Decisions the adapter makes on its own, without asking the host through
//! the callback table.
//!
//! Each policy is a trait with a default implementation. A host can replace
//! any one of them independently, either with its own type or with a closure
//! of the matching shape.

pub mod close;
pub mod dialog;
pub mod download;
pub mod popup;
pub mod referrer;

use std::fmt;

use self::{
    close::{AllowClose, ClosePolicy},
    dialog::{CancelFileDialogs, FileDialogPolicy, JsDialogPolicy, SuppressJsDialogs},
    download::{DenyDownloads, DownloadPolicy},
    popup::{PopupPolicy, RedirectPopups},
};

pub struct Policies {
    pub(crate) popup: Box<dyn PopupPolicy>,
    pub(crate) close: Box<dyn ClosePolicy>,
    pub(crate) js_dialog: Box<dyn JsDialogPolicy>,
    pub(crate) file_dialog: Box<dyn FileDialogPolicy>,
    pub(crate) download: Box<dyn DownloadPolicy>,
}

impl Default for Policies {
    fn default() -> Self {
        Self {
            popup: Box::new(RedirectPopups),
            close: Box::new(AllowClose),
            js_dialog: Box::new(SuppressJsDialogs),
            file_dialog: Box::new(CancelFileDialogs),
            download: Box::new(DenyDownloads),
        }
    }
}

impl fmt::Debug for Policies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Policies").finish_non_exhaustive()
    }
}
