//! Ukrainian-alphabet string ordering.
//!
//! Code-point order missorts Ukrainian text: І, Ї and Є sit before the
//! А-Я block and Ґ after it. City and vehicle ordering therefore goes
//! through an alphabet-rank key. Characters outside the alphabet keep
//! their code point and sort ahead of Ukrainian letters, which preserves
//! the usual digits-and-Latin-first ordering for license plates.

use std::cmp::Ordering;

const ALPHABET: [char; 33] = [
    'а', 'б', 'в', 'г', 'ґ', 'д', 'е', 'є', 'ж', 'з', 'и', 'і', 'ї', 'й', 'к', 'л', 'м', 'н',
    'о', 'п', 'р', 'с', 'т', 'у', 'ф', 'х', 'ц', 'ч', 'ш', 'щ', 'ь', 'ю', 'я',
];

fn char_key(ch: char) -> (u8, u32) {
    let folded = ch.to_lowercase().next().unwrap_or(ch);
    match ALPHABET.iter().position(|letter| *letter == folded) {
        Some(rank) => (1, rank as u32),
        None => (0, folded as u32),
    }
}

/// Compare two strings in Ukrainian alphabetical order.
///
/// Case-insensitive on the key, with a plain byte-order tiebreak so
/// strings differing only in case still order deterministically.
pub fn compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(char_key)
        .cmp(b.chars().map(char_key))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_rank_overrides_code_points() {
        // І (U+0406) precedes В by code point but follows it alphabetically.
        assert_eq!(compare("Вінниця", "Івано-Франківськ"), Ordering::Less);
        assert_eq!(compare("Івано-Франківськ", "Київ"), Ordering::Less);
        // Є between Е and Ж, Ґ between Г and Д.
        assert_eq!(compare("Єнакієве", "Жашків"), Ordering::Less);
        assert_eq!(compare("Есмань", "Єнакієве"), Ordering::Less);
        assert_eq!(compare("Гадяч", "Ґалаґани"), Ordering::Less);
        assert_eq!(compare("Ґалаґани", "Дніпро"), Ordering::Less);
    }

    #[test]
    fn case_folds_with_a_stable_tiebreak() {
        assert_eq!(compare("Київ", "Київ"), Ordering::Equal);
        assert_eq!(compare("Київ", "київ"), Ordering::Less);
        assert_eq!(compare("київ", "Львів"), Ordering::Less);
    }

    #[test]
    fn non_alphabet_text_keeps_code_point_order() {
        assert_eq!(compare("AA1234BM", "BB5678CK"), Ordering::Less);
        assert_eq!(compare("Kyiv", "Вінниця"), Ordering::Less);
    }
}
