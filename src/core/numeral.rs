use crate::utils::error::{CalcError, Result};

/// Canonical Roman numerals and their values. Nothing outside this table is
/// recognised as a Roman numeral.
const ROMAN_TO_ARABIC: [(&str, i64); 10] = [
    ("I", 1),
    ("II", 2),
    ("III", 3),
    ("IV", 4),
    ("V", 5),
    ("VI", 6),
    ("VII", 7),
    ("VIII", 8),
    ("IX", 9),
    ("X", 10),
];

/// Greedy decomposition table, largest value first. Every value 1..=10 has
/// its own atomic symbol.
const ARABIC_TO_ROMAN: [(i64, &str); 10] = [
    (10, "X"),
    (9, "IX"),
    (8, "VIII"),
    (7, "VII"),
    (6, "VI"),
    (5, "V"),
    (4, "IV"),
    (3, "III"),
    (2, "II"),
    (1, "I"),
];

/// Exact, case-sensitive lookup of a canonical numeral.
pub fn roman_to_arabic(symbol: &str) -> Result<i64> {
    ROMAN_TO_ARABIC
        .iter()
        .find(|(roman, _)| *roman == symbol)
        .map(|&(_, value)| value)
        .ok_or(CalcError::InvalidRomanFormat)
}

pub fn arabic_to_roman(value: i64) -> Result<String> {
    if value < 1 {
        return Err(CalcError::InvalidResult);
    }

    let mut remaining = value;
    let mut roman = String::new();
    for &(arabic, symbol) in ARABIC_TO_ROMAN.iter() {
        while remaining >= arabic {
            roman.push_str(symbol);
            remaining -= arabic;
        }
    }
    Ok(roman)
}
