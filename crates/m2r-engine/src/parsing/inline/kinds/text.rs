/// A backslash before an ASCII punctuation character Markdown treats as
/// special.
pub struct Escape;

impl Escape {
    pub const ESCAPABLE: &str = "\\`*{}[]()#+-.!_>~|<";

    pub fn scan(s: &str) -> Option<(usize, char)> {
        let c = s.strip_prefix('\\')?.chars().next()?;
        Self::ESCAPABLE.contains(c).then_some((2, c))
    }
}

/// Two or more spaces before a newline that is not the last one.
pub struct LineBreak;

impl LineBreak {
    pub const MIN_SPACES: usize = 2;

    pub fn scan(s: &str) -> Option<usize> {
        let spaces = s.bytes().take_while(|b| *b == b' ').count();
        if spaces < Self::MIN_SPACES || !s[spaces..].starts_with('\n') {
            return None;
        }
        let len = spaces + 1;
        (!s[len..].trim().is_empty()).then_some(len)
    }
}
