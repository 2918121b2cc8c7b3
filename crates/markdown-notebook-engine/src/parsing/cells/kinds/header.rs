pub struct Header;

impl Header {
    pub const MARKER: char = '#';

    /// A header is any line whose content starts with one or more `#`.
    ///
    /// No space after the markers is required, so `#tag` also counts.
    pub fn is_header(content: &str) -> bool {
        content.starts_with(Self::MARKER)
    }
}
