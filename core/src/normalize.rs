//! Accent stripping and uppercasing of input words.

/// Accented letters replaced during normalization, lowercase and uppercase forms.
const REPLACEMENTS: [(char, char); 14] = [
    ('á', 'a'),
    ('é', 'e'),
    ('í', 'i'),
    ('ó', 'o'),
    ('ú', 'u'),
    ('ü', 'u'),
    ('ñ', 'n'),
    ('Á', 'A'),
    ('É', 'E'),
    ('Í', 'I'),
    ('Ó', 'O'),
    ('Ú', 'U'),
    ('Ü', 'U'),
    ('Ñ', 'N'),
];

fn strip_accent(c: char) -> char {
    REPLACEMENTS
        .iter()
        .find(|(accented, _)| *accented == c)
        .map(|(_, plain)| *plain)
        .unwrap_or(c)
}

/// Uppercase `word` and strip the accents of Spanish vowels and `ñ`.
///
/// Characters outside the replacement table pass through untouched.
pub fn normalize_word(word: &str) -> String {
    word.to_uppercase().chars().map(strip_accent).collect()
}

pub fn normalize_words<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    words.iter().map(|w| normalize_word(w.as_ref())).collect()
}
