/// Instructional wrapper applied to every request. The framing stays verbatim;
/// the user text lands at the `{text}` placeholder, unmodified.
pub const TEMPLATE: &str = "\n<<SYS>>\nyou are a helpful assistant that gives short and simple answers.\n<</SYS>>\n\n{text}\n";

pub struct Formatter;

impl Formatter {
    /// Substitution is total for any string input; callers reject empty
    /// prompts before reaching this point.
    pub fn format(text: &str) -> String {
        TEMPLATE.replacen("{text}", text, 1)
    }
}
