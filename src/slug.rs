//! Slug derivation for companies and assets.
//!
//! Company names drive two generated identifiers: the card anchor id
//! (`#exp-scale-ai`) and the staged logo filename (`scale-ai-<hash>.jpeg`).
//! Both come from [`slugify`], so an entry's markup and its assets always
//! agree on spelling.
//!
//! ## Rules
//!
//! - ASCII letters and digits are kept, lowercased
//! - any run of other characters collapses to a single `-`
//! - leading/trailing dashes are trimmed
//!
//! `"Scale AI"` → `"scale-ai"`, `"Cher Real Estate"` → `"cher-real-estate"`.

/// Derive a URL-safe slug from a display name.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Initials for the logo placeholder tile, shown when an entry has no
/// (usable) logo asset: first letter of up to two words, uppercased.
///
/// `"Trojan Marketing Group"` → `"TM"`, `"Whatnot"` → `"W"`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_word_name() {
        assert_eq!(slugify("Cher Real Estate"), "cher-real-estate");
    }

    #[test]
    fn single_word_lowercased() {
        assert_eq!(slugify("Whatnot"), "whatnot");
    }

    #[test]
    fn punctuation_collapses_to_one_dash() {
        assert_eq!(slugify("Scale AI & Co."), "scale-ai-co");
    }

    #[test]
    fn leading_and_trailing_separators_trimmed() {
        assert_eq!(slugify("  HappyRobot  "), "happyrobot");
        assert_eq!(slugify("(Acme)"), "acme");
    }

    #[test]
    fn digits_preserved() {
        assert_eq!(slugify("Studio 54"), "studio-54");
    }

    #[test]
    fn empty_input_gives_empty_slug() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("Trojan Marketing Group"), "TM");
        assert_eq!(initials("Whatnot"), "W");
        assert_eq!(initials("scale ai"), "SA");
    }

    #[test]
    fn initials_of_empty_name() {
        assert_eq!(initials(""), "");
    }
}
