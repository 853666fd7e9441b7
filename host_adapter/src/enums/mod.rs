pub mod capability;
pub mod file_dialog_mode;
pub mod js_dialog_type;
pub mod paint_element_type;
pub mod referrer_policy;
pub mod window_open_disposition;
