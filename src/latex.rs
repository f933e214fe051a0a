//! Transliteration of accented Latin characters into LaTeX escapes.

/// Characters with a known LaTeX spelling. Lookup is exact: case variants
/// are separate rows and anything not listed passes through unchanged.
pub static LATEX_ESCAPES: &[(char, &str)] = &[
    // Older tables spelled this row `{\'\i}`, which renders as í.
    ('á', r"{\'a}"),
    ('é', r"{\'e}"),
    ('í', r"{\'\i}"),
    ('ó', r"{\'o}"),
    ('ú', r"{\'u}"),
    ('à', r"{\`a}"),
    ('è', r"{\`e}"),
    ('ì', r"{\`i}"),
    ('ò', r"{\`o}"),
    ('ù', r"{\`u}"),
    ('ä', r#"{\"a}"#),
    ('ë', r#"{\"e}"#),
    ('ï', r#"{\"i}"#),
    ('ö', r#"{\"o}"#),
    ('ü', r#"{\"u}"#),
    ('ñ', r"{\~n}"),
    ('ã', r"{\~a}"),
    ('õ', r"{\~o}"),
    ('ç', r"{\c{c}}"),
    ('š', r"{\v{s}}"),
    ('č', r"{\v{c}}"),
    ('ž', r"{\v{z}}"),
    ('Á', r"{\'A}"),
    ('É', r"{\'E}"),
    ('Í', r"{\'I}"),
    ('Ó', r"{\'O}"),
    ('Ú', r"{\'U}"),
    ('Ñ', r"{\~N}"),
];

pub fn escape_char(ch: char) -> Option<&'static str> {
    LATEX_ESCAPES
        .iter()
        .find(|(from, _)| *from == ch)
        .map(|(_, to)| *to)
}

pub fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match escape_char(ch) {
            Some(escape) => out.push_str(escape),
            None => out.push(ch),
        }
    }
    out
}
