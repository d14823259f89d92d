/// Utility helpers for the site

/// Create an anchor-friendly slug from a heading.
/// Lowercases, folds Spanish accents to plain ASCII, converts groups of other
/// characters to single hyphens, and trims leading/trailing hyphens.
pub fn slugify<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref().to_lowercase();
    let mut out = String::with_capacity(s.len());
    let mut prev_dash = false;

    for ch in s.chars().map(fold_accent) {
        if ch.is_ascii_alphanumeric() {
            out.push(ch);
            prev_dash = false;
        } else if !prev_dash {
            out.push('-');
            prev_dash = true;
        }
    }

    out.trim_matches('-').to_string()
}

fn fold_accent(ch: char) -> char {
    match ch {
        'á' | 'à' | 'ä' => 'a',
        'é' | 'è' | 'ë' => 'e',
        'í' | 'ì' | 'ï' => 'i',
        'ó' | 'ò' | 'ö' => 'o',
        'ú' | 'ù' | 'ü' => 'u',
        'ñ' => 'n',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_menu_headings() {
        assert_eq!(slugify("Tacos de Birria"), "tacos-de-birria");
        assert_eq!(slugify("  Consomé & Caldos!  "), "consome-caldos");
        assert_eq!(slugify("Niños"), "ninos");
    }
}
