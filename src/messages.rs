pub const ABOUT_MESSAGE: &str = "Tells you exactly what characters are in your text.

Pass text as arguments, or run without any to be prompted for input. \
Escapes such as \\x41, \\u00e9 and \\u{1F980} name a code point directly.";

pub const PROMPT: &str = "Input string: ";

pub const NONCHARACTER: &str = "Noncharacter";

pub const INVALID_CODEPOINT: &str = "Didn't recognise that codepoint.";
