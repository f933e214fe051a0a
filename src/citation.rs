use std::sync::LazyLock;

use regex::Regex;

// Letters, numbers and underscore. Unlike regex's `\w` this excludes
// combining marks, so a decomposed "e\u{301}" ends the word at "e".
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\p{L}\p{N}_]+").unwrap());

/// Builds a citation key as `<lastname><year><firstword>`.
///
/// Keys are not disambiguated: two works sharing first-author surname, year
/// and leading title word get the same key.
pub fn citation_key(first_author: &str, year: &str, title: &str) -> String {
    let last_name = last_name(first_author)
        .to_lowercase()
        .chars()
        .filter(|ch| ch.is_ascii_lowercase())
        .collect::<String>();
    format!("{last_name}{year}{}", first_title_word(title))
}

fn last_name(author: &str) -> &str {
    match author.split_once(',') {
        Some((family, _)) => family.trim(),
        None => author.split_whitespace().last().unwrap_or("unknown"),
    }
}

fn first_title_word(title: &str) -> String {
    let lowered = title.to_lowercase();
    WORD_RE
        .find(&lowered)
        .map(|word| word.as_str().to_string())
        .unwrap_or_else(|| "untitled".to_string())
}
