#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileDialogMode {
    /// Requires that the file exists before allowing the user to pick it.
    Open,
    /// Like Open, but allows picking multiple files to open.
    OpenMultiple,
    /// Like Open, but selects a folder to open.
    OpenFolder,
    /// Allows picking a nonexistent file, and prompts to overwrite if the file
    /// already exists.
    Save,
}
