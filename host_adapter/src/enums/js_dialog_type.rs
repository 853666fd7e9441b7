#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsDialogType {
    Alert,
    Confirm,
    Prompt,
}
