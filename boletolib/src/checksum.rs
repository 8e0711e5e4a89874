//! Контрольные разряды по модулю 10.
//!
//! Два алгоритма похожи, но не совпадают: проверка блока (`mod10_is_valid`)
//! и вычисление разряда при переводе штрихкода в цифровую строку
//! (`verification_digit`). Оба в ходу, объединять их нельзя.

/// Проверка блока вместе с его контрольным разрядом.
///
/// Справа налево: разряды на позициях size-1, size-3, … складываются как есть,
/// на позициях size-2, size-4, … удваиваются (минус 9, если больше 9).
pub fn mod10_is_valid(digits: &str) -> bool {
    let bytes = digits.as_bytes();
    let mut checksum: u32 = 0;

    for (i, b) in bytes.iter().rev().enumerate() {
        let n = digit_value(*b);
        if i % 2 == 0 {
            checksum += n;
        } else {
            let doubled = n * 2;
            checksum += if doubled > 9 { doubled - 9 } else { doubled };
        }
    }

    checksum % 10 == 0
}

/// Контрольный разряд блока: множители 2, 1, 2, … справа налево,
/// двузначное произведение заменяется суммой его цифр.
pub fn verification_digit(block: &str) -> String {
    let mut sum: u32 = 0;
    let mut multiplier: u32 = 2;

    for b in block.bytes().rev() {
        let mut result = digit_value(b) * multiplier;
        if result > 9 {
            result = result / 10 + result % 10;
        }
        sum += result;
        multiplier = 3 - multiplier;
    }

    match sum % 10 {
        0 => "0".to_string(),
        r => (10 - r).to_string(),
    }
}

// Не-цифра считается нулём.
fn digit_value(b: u8) -> u32 {
    if b.is_ascii_digit() {
        u32::from(b - b'0')
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_blocks_from_real_lines() {
        assert!(mod10_is_valid("3419175124"));
        assert!(mod10_is_valid("34567871230"));
        assert!(mod10_is_valid("41234560005"));
        assert!(mod10_is_valid("0019000009"));
    }

    #[test]
    fn single_digit_perturbation_flips() {
        assert!(mod10_is_valid("7489111612"));
        assert!(!mod10_is_valid("7489111611"));
        assert!(mod10_is_valid("7399000004"));
        assert!(!mod10_is_valid("7399000005"));
    }

    #[test]
    fn validation_is_deterministic() {
        for s in ["3419175124", "123", ""] {
            assert_eq!(mod10_is_valid(s), mod10_is_valid(s));
        }
        assert!(mod10_is_valid(""));
    }

    #[test]
    fn verification_digit_known_blocks() {
        // блоки штрихкода 34191990600000005001092664672997197273480000
        assert_eq!(verification_digit("341910926"), "3");
        assert_eq!(verification_digit("6467299719"), "0");
        assert_eq!(verification_digit("7273480000"), "5");
    }

    #[test]
    fn verification_digit_zero_remainder() {
        assert_eq!(verification_digit(""), "0");
        assert_eq!(verification_digit("0000000000"), "0");
    }
}
