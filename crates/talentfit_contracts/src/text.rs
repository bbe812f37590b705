#![forbid(unsafe_code)]

//! Label folding shared by the registry lookup and the values canonicalizer.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Removes combining marks after canonical decomposition ("Estético" -> "Estetico").
pub fn strip_diacritics(value: &str) -> String {
    value.nfd().filter(|ch| !is_combining_mark(*ch)).collect()
}

/// Diacritic-free, lowercased and trimmed label.
pub fn normalize_label(value: &str) -> String {
    strip_diacritics(value).to_lowercase().trim().to_string()
}

/// `normalize_label` with every run of non-alphanumerics collapsed to `_`,
/// so "Pensamento Prático", "pensamento-pratico" and "pensamento_pratico" compare equal.
pub fn fold_name(value: &str) -> String {
    let normalized = normalize_label(value);
    let mut out = String::with_capacity(normalized.len());
    let mut last_was_sep = false;
    for ch in normalized.chars() {
        if ch.is_alphanumeric() {
            out.push(ch);
            last_was_sep = false;
            continue;
        }
        if !last_was_sep {
            out.push('_');
            last_was_sep = true;
        }
    }
    out.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_text_01_strip_diacritics_keeps_base_letters() {
        assert_eq!(strip_diacritics("Estético"), "Estetico");
        assert_eq!(strip_diacritics("Econômico"), "Economico");
        assert_eq!(strip_diacritics("Autodireção"), "Autodirecao");
    }

    #[test]
    fn at_text_02_normalize_label_lowercases_and_trims() {
        assert_eq!(normalize_label("  Teórico "), "teorico");
        assert_eq!(normalize_label("ALTRUÍSTA"), "altruista");
    }

    #[test]
    fn at_text_03_fold_name_collapses_separators() {
        assert_eq!(fold_name("Pensamento Prático"), "pensamento_pratico");
        assert_eq!(fold_name("pensamento--pratico "), "pensamento_pratico");
        assert_eq!(fold_name("Self-Esteem"), "self_esteem");
    }
}
