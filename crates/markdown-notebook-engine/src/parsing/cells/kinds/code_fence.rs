pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns the language tag if `content` is a fence delimiter.
    ///
    /// `content` is the line with surrounding whitespace and terminator removed.
    /// The tag is whatever follows the backticks, trimmed, and may be empty.
    pub fn tag(content: &str) -> Option<&str> {
        content.strip_prefix(Self::BACKTICKS).map(str::trim)
    }

    /// Rebuilds an opening delimiter for a fence demoted to prose.
    pub fn opening_line(tag: &str, terminator: &str) -> String {
        format!("{}{tag}{terminator}", Self::BACKTICKS)
    }

    /// Rebuilds a closing delimiter for a fence demoted to prose.
    pub fn closing_line(terminator: &str) -> String {
        format!("{}{terminator}", Self::BACKTICKS)
    }
}
