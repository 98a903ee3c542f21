//! Locale-independent case conversion of single UTF-16 code units.
//!
//! Each direction has a sorted range table (see `case_table.rs`) and a
//! direct-index cache for Latin-1 Supplement through Latin Extended-B. The
//! caches are evaluated from the range tables at compile time.
//!
//! Mappings are simple (one unit in, one unit out). Characters whose full
//! mapping expands, like `ß`, map to themselves. Upper and lower case are
//! not inverses of each other outside ASCII.

use crate::case_table::{LOWER_CASE_KEYS, LOWER_CASE_VALUES, UPPER_CASE_KEYS, UPPER_CASE_VALUES};

/// Nothing above ASCII has an uppercase mapping before U+00B5 MICRO SIGN.
const UPPER_CASE_FLOOR: u16 = 181;
/// Nothing above ASCII has a lowercase mapping before U+00C0.
const LOWER_CASE_FLOOR: u16 = 192;
/// Exclusive end of both cache windows.
const CACHE_LIMIT: u16 = 0x0250;

/// Set on an entry's end when the entry only maps every other code unit.
const ALTERNATE_FLAG: u16 = 0x8000;

const ASCII_CASE_OFFSET: u16 = (b'a' - b'A') as u16;

struct CaseTable {
    keys: &'static [u16],
    values: &'static [u16],
}

const UPPER_CASE: CaseTable = CaseTable {
    keys: &UPPER_CASE_KEYS,
    values: &UPPER_CASE_VALUES,
};

const LOWER_CASE: CaseTable = CaseTable {
    keys: &LOWER_CASE_KEYS,
    values: &LOWER_CASE_VALUES,
};

impl CaseTable {
    /// Map `c` through the range table, returning `c` when no entry applies.
    const fn lookup(&self, c: u16) -> u16 {
        // Upper bound: first entry whose start is greater than `c`.
        let mut low = 0;
        let mut high = self.keys.len();
        while low < high {
            let mid = low + (high - low) / 2;
            if self.keys[mid] <= c {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
        if low == 0 {
            return c;
        }

        let index = low - 1;
        let start = self.keys[index];
        let mut end = self.values[index * 2];
        let alternate = (start & ALTERNATE_FLAG) != (end & ALTERNATE_FLAG);
        if alternate {
            end ^= ALTERNATE_FLAG;
        }
        if c > end {
            return c;
        }
        if alternate && (c & 1) != (start & 1) {
            return c;
        }
        c.wrapping_add(self.values[index * 2 + 1])
    }
}

const fn build_cache<const N: usize>(table: &CaseTable, base: u16) -> [u16; N] {
    let mut cache = [0u16; N];
    let mut i = 0;
    while i < N {
        cache[i] = table.lookup(base + i as u16);
        i += 1;
    }
    cache
}

const UPPER_CACHE_LEN: usize = (CACHE_LIMIT - UPPER_CASE_FLOOR) as usize;
const LOWER_CACHE_LEN: usize = (CACHE_LIMIT - LOWER_CASE_FLOOR) as usize;

static UPPER_CASE_CACHE: [u16; UPPER_CACHE_LEN] = build_cache(&UPPER_CASE, UPPER_CASE_FLOOR);
static LOWER_CASE_CACHE: [u16; LOWER_CACHE_LEN] = build_cache(&LOWER_CASE, LOWER_CASE_FLOOR);

/// Convert a code unit to upper case.
///
/// # Examples
///
/// ```
/// use character::to_upper_case;
///
/// assert_eq!(to_upper_case(u16::from(b'q')), u16::from(b'Q'));
/// assert_eq!(to_upper_case(0x00B5), 0x039C); // MICRO SIGN -> GREEK CAPITAL MU
/// assert_eq!(to_upper_case(0x00DF), 0x00DF); // no single-unit mapping
/// ```
pub fn to_upper_case(c: u16) -> u16 {
    if (u16::from(b'a')..=u16::from(b'z')).contains(&c) {
        return c - ASCII_CASE_OFFSET;
    }
    if c < UPPER_CASE_FLOOR {
        return c;
    }
    match UPPER_CASE_CACHE.get(usize::from(c - UPPER_CASE_FLOOR)) {
        Some(&mapped) => mapped,
        None => UPPER_CASE.lookup(c),
    }
}

/// Convert a code unit to lower case.
///
/// # Examples
///
/// ```
/// use character::to_lower_case;
///
/// assert_eq!(to_lower_case(u16::from(b'Q')), u16::from(b'q'));
/// assert_eq!(to_lower_case(0x0410), 0x0430); // CYRILLIC CAPITAL A
/// ```
pub fn to_lower_case(c: u16) -> u16 {
    if (u16::from(b'A')..=u16::from(b'Z')).contains(&c) {
        return c + ASCII_CASE_OFFSET;
    }
    if c < LOWER_CASE_FLOOR {
        return c;
    }
    match LOWER_CASE_CACHE.get(usize::from(c - LOWER_CASE_FLOOR)) {
        Some(&mapped) => mapped,
        None => LOWER_CASE.lookup(c),
    }
}

/// Upper-case a UTF-16 buffer one code unit at a time.
///
/// Surrogate units are left untouched.
pub fn to_upper_case_units(units: &[u16]) -> Vec<u16> {
    units.iter().map(|&c| to_upper_case(c)).collect()
}

/// Lower-case a UTF-16 buffer one code unit at a time.
pub fn to_lower_case_units(units: &[u16]) -> Vec<u16> {
    units.iter().map(|&c| to_lower_case(c)).collect()
}
