use std::fmt;

/// A string as the engine stores it: UTF-16 code units.
///
/// The host side only ever sees UTF-8, so everything crossing towards the
/// host goes through [`EngineString::to_string_lossy`].
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct EngineString {
    data: Vec<u16>,
}

impl EngineString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_utf16(data: Vec<u16>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Unpaired surrogates are replaced with U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.data)
    }

    pub fn starts_with_str(&self, prefix: &str) -> bool {
        let mut units = self.data.iter().copied();
        prefix
            .encode_utf16()
            .all(|expected| units.next() == Some(expected))
    }
}

impl From<&str> for EngineString {
    fn from(value: &str) -> Self {
        Self {
            data: value.encode_utf16().collect(),
        }
    }
}

impl From<String> for EngineString {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

impl PartialEq<str> for EngineString {
    fn eq(&self, other: &str) -> bool {
        self.data.iter().copied().eq(other.encode_utf16())
    }
}

impl PartialEq<&str> for EngineString {
    fn eq(&self, other: &&str) -> bool {
        PartialEq::<str>::eq(self, *other)
    }
}

impl fmt::Display for EngineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in char::decode_utf16(self.data.iter().copied()) {
            write!(f, "{}", c.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

impl fmt::Debug for EngineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_string_lossy(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::EngineString;

    #[test]
    fn converts_non_ascii_titles() {
        let title = EngineString::from("Grüße – 日本語 🎵");
        assert_eq!(title.to_string_lossy(), "Grüße – 日本語 🎵");
        assert_eq!(title.to_string(), "Grüße – 日本語 🎵");
        // the note is a surrogate pair
        assert_eq!(title.len(), "Grüße – 日本語 ".encode_utf16().count() + 2);
    }

    #[test]
    fn lone_surrogates_are_replaced() {
        let broken = EngineString::from_utf16(vec![0x0041, 0xD800, 0x0042]);
        assert_eq!(broken.to_string_lossy(), "A\u{FFFD}B");
    }

    #[test]
    fn prefix_matching_works_on_code_units() {
        let url = EngineString::from("https://www.youtube.com/embed/XYZ");
        assert!(url.starts_with_str("https://www.youtube.com/embed/"));
        assert!(!url.starts_with_str("https://www.youtube.com/watch"));
        assert!(!EngineString::new().starts_with_str("h"));
        assert!(EngineString::new().starts_with_str(""));
        assert_eq!(url, "https://www.youtube.com/embed/XYZ");
    }
}
