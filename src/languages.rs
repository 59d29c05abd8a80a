//! Language codes understood by the mBART-50 translation backend.

/// (code, name) pairs offered by the interactive picker.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("en_XX", "English"),
    ("hi_IN", "Hindi"),
    ("ta_IN", "Tamil"),
    ("bn_IN", "Bengali"),
    ("gu_IN", "Gujarati"),
    ("mr_IN", "Marathi"),
    ("as_IN", "Assamese"),
];

/// Resolve a code or a language name (case-insensitive) to its code.
pub fn resolve(input: &str) -> Option<&'static str> {
    let needle = input.trim();
    LANGUAGES
        .iter()
        .find(|(code, name)| code.eq_ignore_ascii_case(needle) || name.eq_ignore_ascii_case(needle))
        .map(|(code, _)| *code)
}

/// "English (en_XX)" for known codes, the code itself otherwise.
pub fn display_name(code: &str) -> String {
    LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(c, n)| format!("{} ({})", n, c))
        .unwrap_or_else(|| code.to_string())
}

/// Position of a code in [`LANGUAGES`], for picker defaults.
pub fn index_of(code: &str) -> Option<usize> {
    let code = resolve(code)?;
    LANGUAGES.iter().position(|(c, _)| *c == code)
}
