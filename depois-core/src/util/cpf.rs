//! Check digit verification of the Brazilian taxpayer registry
//! number (CPF).
//!
//! A CPF consists of nine base digits followed by two check digits.
//! Each check digit is derived from the digits in front of it:
//! the digits are multiplied with descending weights (ending at 2),
//! summed up and the remainder of the sum divided by 11 is mapped
//! to `0` if it is less than 2 and to `11 - remainder` otherwise.

use depois_entities::cpf::Cpf;

const MODULUS: u32 = 11;

/// Returns `true` if `cpf` consists of exactly 11 decimal digits
/// and both check digits match.
///
/// Sequences of identical digits like `11111111111` are rejected
/// although some of them would satisfy the checksum.
pub fn is_valid_cpf(cpf: &str) -> bool {
    let Some(digits) = parse_digits(cpf) else {
        return false;
    };
    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }
    let (base, check_digits) = digits.split_at(Cpf::LEN - 2);
    let first = check_digit(base);
    if first != check_digits[0] {
        return false;
    }
    let second = check_digit(&digits[..Cpf::LEN - 1]);
    second == check_digits[1]
}

/// Computes the check digit that follows the given digits.
///
/// The weights start at `digits.len() + 1` and descend to 2.
pub fn check_digit(digits: &[u8]) -> u8 {
    let max_weight = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .zip((2..=max_weight).rev())
        .map(|(digit, weight)| u32::from(*digit) * weight)
        .sum();
    let remainder = sum % MODULUS;
    if remainder < 2 {
        0
    } else {
        (MODULUS - remainder) as u8
    }
}

fn parse_digits(cpf: &str) -> Option<[u8; Cpf::LEN]> {
    if cpf.len() != Cpf::LEN {
        return None;
    }
    let mut digits = [0; Cpf::LEN];
    for (digit, c) in digits.iter_mut().zip(cpf.chars()) {
        *digit = c.to_digit(10)? as u8;
    }
    Some(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_valid_cpfs() {
        for cpf in [
            "87748248800",
            "12371093025",
            "97456321558",
            "71428793860",
            "52998224725",
        ] {
            assert!(is_valid_cpf(cpf), "{cpf}");
        }
    }

    #[test]
    fn wrong_check_digits() {
        for cpf in [
            "87748248801",
            "87748248810",
            "12371093026",
            "12371093015",
            "97456321559",
            "12345678901",
        ] {
            assert!(!is_valid_cpf(cpf), "{cpf}");
        }
    }

    #[test]
    fn wrong_length() {
        assert!(!is_valid_cpf(""));
        assert!(!is_valid_cpf("8774824880"));
        assert!(!is_valid_cpf("877482488000"));
        assert!(!is_valid_cpf("123211345611"));
    }

    #[test]
    fn non_numeric_characters() {
        assert!(!is_valid_cpf("877.482.488-00"));
        assert!(!is_valid_cpf("8774824880a"));
        assert!(!is_valid_cpf("877 4824880"));
        // 11 bytes but not 11 digits
        assert!(!is_valid_cpf("877482488é"));
        assert!(!is_valid_cpf("８７７４８２４８８００"));
    }

    #[test]
    fn identical_digits() {
        for d in 0..=9 {
            let cpf = d.to_string().repeat(11);
            assert!(!is_valid_cpf(&cpf), "{cpf}");
        }
    }

    #[test]
    fn compute_check_digits() {
        assert_eq!(0, check_digit(&[8, 7, 7, 4, 8, 2, 4, 8, 8]));
        assert_eq!(0, check_digit(&[8, 7, 7, 4, 8, 2, 4, 8, 8, 0]));
        assert_eq!(2, check_digit(&[1, 2, 3, 7, 1, 0, 9, 3, 0]));
        assert_eq!(5, check_digit(&[1, 2, 3, 7, 1, 0, 9, 3, 0, 2]));
        assert_eq!(5, check_digit(&[9, 7, 4, 5, 6, 3, 2, 1, 5]));
        assert_eq!(8, check_digit(&[9, 7, 4, 5, 6, 3, 2, 1, 5, 5]));
    }
}
