//! Heading number formats.

/// Upper-case Roman numeral for `num`. Zero yields an empty string.
pub fn to_roman(mut num: u32) -> String {
    const NUMERALS: [(u32, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut result = String::new();
    for (value, symbol) in NUMERALS {
        while num >= value {
            result.push_str(symbol);
            num -= value;
        }
    }
    result
}

/// Upper-case letter label for `num`: 1 is `A`, 26 is `Z`, 27 is `AA`.
/// Zero yields an empty string.
pub fn to_letter(mut num: u32) -> String {
    let mut letters = Vec::new();
    while num > 0 {
        num -= 1;
        letters.push(char::from(b'A' + (num % 26) as u8));
        num /= 26;
    }
    letters.iter().rev().collect()
}
