#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaintElementType {
    #[default]
    View,
    Popup,
}
