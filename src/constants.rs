//! Access bits and the algebra over them

// Access bit constants
pub const READ: u8 = 1;
pub const UPDATE: u8 = 1 << 1;
pub const CREATE: u8 = 1 << 2;
pub const DELETE: u8 = 1 << 3;
pub const ALL: u8 = CREATE | READ | UPDATE | DELETE;

/// The four bits in display order
pub const BITS: [u8; 4] = [CREATE, READ, UPDATE, DELETE];

// Bit name mappings
const NAMES: &[(&str, u8)] = &[
    ("create", CREATE),
    ("read", READ),
    ("update", UPDATE),
    ("delete", DELETE),
];

/// Flip `bit` in `current`
#[inline]
pub fn toggle(current: u8, bit: u8) -> u8 {
    current ^ bit
}

/// Whether `bit` is set in `value`
#[inline]
pub fn has_bit(value: u8, bit: u8) -> bool {
    value & bit != 0
}

/// Whether a definition with mask `allowed` exposes a control for `bit`
#[inline]
pub fn is_allowed(allowed: u8, bit: u8) -> bool {
    allowed & bit != 0
}

/// Lowercase name of a single bit
pub fn bit_name(bit: u8) -> Option<&'static str> {
    NAMES.iter().find(|(_, b)| *b == bit).map(|(n, _)| *n)
}

/// Bit for a lowercase name
pub fn bit_from_name(name: &str) -> Option<u8> {
    NAMES.iter().find(|(n, _)| *n == name).map(|(_, b)| *b)
}

/// Convert a mask to a list of bit names, in display order
pub fn bits_to_names(mask: u8) -> Vec<&'static str> {
    NAMES
        .iter()
        .filter(|(_, b)| mask & b == *b)
        .map(|(n, _)| *n)
        .collect()
}

/// Convert a list of bit names to a mask; unknown names are skipped
pub fn names_to_bits(names: &[&str]) -> u8 {
    names
        .iter()
        .filter_map(|n| bit_from_name(n))
        .fold(0, |a, b| a | b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        assert_eq!((READ, UPDATE, CREATE, DELETE), (1, 2, 4, 8));
        assert_eq!(ALL, 15);
        assert_eq!(BITS, [4, 1, 2, 8]);
    }

    #[test]
    fn test_double_toggle_is_identity() {
        for r in 0..=ALL {
            for b in BITS {
                assert_eq!(toggle(toggle(r, b), b), r);
            }
        }
    }

    #[test]
    fn test_has_and_allowed() {
        assert!(has_bit(READ | UPDATE, UPDATE));
        assert!(!has_bit(READ | UPDATE, DELETE));
        assert!(is_allowed(ALL, DELETE));
        assert!(!is_allowed(READ | UPDATE, CREATE));
    }

    #[test]
    fn test_names() {
        assert_eq!(bits_to_names(READ | DELETE), vec!["read", "delete"]);
        assert_eq!(bits_to_names(ALL), vec!["create", "read", "update", "delete"]);
        assert_eq!(names_to_bits(&["read", "bogus", "create"]), READ | CREATE);
        assert_eq!(bit_name(UPDATE), Some("update"));
        assert_eq!(bit_name(3), None);
        assert_eq!(bit_from_name("delete"), Some(DELETE));
    }
}
