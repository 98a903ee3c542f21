//! Unicode general category lookup for UTF-16 code units.
//!
//! This module is the category oracle the lexical predicates are built on.
//! Categories form a closed enumeration; predicates test membership through
//! [`CategorySet`] rather than comparing raw category numbers.

use crate::category_table::CATEGORY_RANGES;

/// Unicode general category of a code unit.
///
/// Variant order follows the UCD property value listing. The discriminant is
/// the bit position of the category inside a [`CategorySet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneralCategory {
    /// Lu
    UppercaseLetter,
    /// Ll
    LowercaseLetter,
    /// Lt
    TitlecaseLetter,
    /// Lm
    ModifierLetter,
    /// Lo
    OtherLetter,
    /// Mn
    NonspacingMark,
    /// Mc
    SpacingMark,
    /// Me
    EnclosingMark,
    /// Nd
    DecimalNumber,
    /// Nl
    LetterNumber,
    /// No
    OtherNumber,
    /// Pc
    ConnectorPunctuation,
    /// Pd
    DashPunctuation,
    /// Ps
    OpenPunctuation,
    /// Pe
    ClosePunctuation,
    /// Pi
    InitialPunctuation,
    /// Pf
    FinalPunctuation,
    /// Po
    OtherPunctuation,
    /// Sm
    MathSymbol,
    /// Sc
    CurrencySymbol,
    /// Sk
    ModifierSymbol,
    /// So
    OtherSymbol,
    /// Zs
    SpaceSeparator,
    /// Zl
    LineSeparator,
    /// Zp
    ParagraphSeparator,
    /// Cc
    Control,
    /// Cf
    Format,
    /// Cs
    Surrogate,
    /// Co
    PrivateUse,
    /// Cn
    Unassigned,
}

impl GeneralCategory {
    /// Every category, in discriminant order.
    pub const ALL: [GeneralCategory; 30] = [
        GeneralCategory::UppercaseLetter,
        GeneralCategory::LowercaseLetter,
        GeneralCategory::TitlecaseLetter,
        GeneralCategory::ModifierLetter,
        GeneralCategory::OtherLetter,
        GeneralCategory::NonspacingMark,
        GeneralCategory::SpacingMark,
        GeneralCategory::EnclosingMark,
        GeneralCategory::DecimalNumber,
        GeneralCategory::LetterNumber,
        GeneralCategory::OtherNumber,
        GeneralCategory::ConnectorPunctuation,
        GeneralCategory::DashPunctuation,
        GeneralCategory::OpenPunctuation,
        GeneralCategory::ClosePunctuation,
        GeneralCategory::InitialPunctuation,
        GeneralCategory::FinalPunctuation,
        GeneralCategory::OtherPunctuation,
        GeneralCategory::MathSymbol,
        GeneralCategory::CurrencySymbol,
        GeneralCategory::ModifierSymbol,
        GeneralCategory::OtherSymbol,
        GeneralCategory::SpaceSeparator,
        GeneralCategory::LineSeparator,
        GeneralCategory::ParagraphSeparator,
        GeneralCategory::Control,
        GeneralCategory::Format,
        GeneralCategory::Surrogate,
        GeneralCategory::PrivateUse,
        GeneralCategory::Unassigned,
    ];

    /// Two-letter property value alias used by the UCD (`"Lu"`, `"Nd"`, ...).
    pub const fn abbreviation(self) -> &'static str {
        match self {
            GeneralCategory::UppercaseLetter => "Lu",
            GeneralCategory::LowercaseLetter => "Ll",
            GeneralCategory::TitlecaseLetter => "Lt",
            GeneralCategory::ModifierLetter => "Lm",
            GeneralCategory::OtherLetter => "Lo",
            GeneralCategory::NonspacingMark => "Mn",
            GeneralCategory::SpacingMark => "Mc",
            GeneralCategory::EnclosingMark => "Me",
            GeneralCategory::DecimalNumber => "Nd",
            GeneralCategory::LetterNumber => "Nl",
            GeneralCategory::OtherNumber => "No",
            GeneralCategory::ConnectorPunctuation => "Pc",
            GeneralCategory::DashPunctuation => "Pd",
            GeneralCategory::OpenPunctuation => "Ps",
            GeneralCategory::ClosePunctuation => "Pe",
            GeneralCategory::InitialPunctuation => "Pi",
            GeneralCategory::FinalPunctuation => "Pf",
            GeneralCategory::OtherPunctuation => "Po",
            GeneralCategory::MathSymbol => "Sm",
            GeneralCategory::CurrencySymbol => "Sc",
            GeneralCategory::ModifierSymbol => "Sk",
            GeneralCategory::OtherSymbol => "So",
            GeneralCategory::SpaceSeparator => "Zs",
            GeneralCategory::LineSeparator => "Zl",
            GeneralCategory::ParagraphSeparator => "Zp",
            GeneralCategory::Control => "Cc",
            GeneralCategory::Format => "Cf",
            GeneralCategory::Surrogate => "Cs",
            GeneralCategory::PrivateUse => "Co",
            GeneralCategory::Unassigned => "Cn",
        }
    }

    /// The singleton set holding only this category.
    pub const fn set(self) -> CategorySet {
        CategorySet::from_bits_retain(1 << self as u32)
    }
}

bitflags::bitflags! {
    /// A set of general categories, one bit per [`GeneralCategory`].
    ///
    /// Lexical predicates are written as "the category of `c` is in set `S`".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CategorySet: u32 {
        /// Lu
        const UPPERCASE_LETTER = 1 << 0;
        /// Ll
        const LOWERCASE_LETTER = 1 << 1;
        /// Lt
        const TITLECASE_LETTER = 1 << 2;
        /// Lm
        const MODIFIER_LETTER = 1 << 3;
        /// Lo
        const OTHER_LETTER = 1 << 4;
        /// Mn
        const NONSPACING_MARK = 1 << 5;
        /// Mc
        const SPACING_MARK = 1 << 6;
        /// Me
        const ENCLOSING_MARK = 1 << 7;
        /// Nd
        const DECIMAL_NUMBER = 1 << 8;
        /// Nl
        const LETTER_NUMBER = 1 << 9;
        /// No
        const OTHER_NUMBER = 1 << 10;
        /// Pc
        const CONNECTOR_PUNCTUATION = 1 << 11;
        /// Pd
        const DASH_PUNCTUATION = 1 << 12;
        /// Ps
        const OPEN_PUNCTUATION = 1 << 13;
        /// Pe
        const CLOSE_PUNCTUATION = 1 << 14;
        /// Pi
        const INITIAL_PUNCTUATION = 1 << 15;
        /// Pf
        const FINAL_PUNCTUATION = 1 << 16;
        /// Po
        const OTHER_PUNCTUATION = 1 << 17;
        /// Sm
        const MATH_SYMBOL = 1 << 18;
        /// Sc
        const CURRENCY_SYMBOL = 1 << 19;
        /// Sk
        const MODIFIER_SYMBOL = 1 << 20;
        /// So
        const OTHER_SYMBOL = 1 << 21;
        /// Zs
        const SPACE_SEPARATOR = 1 << 22;
        /// Zl
        const LINE_SEPARATOR = 1 << 23;
        /// Zp
        const PARAGRAPH_SEPARATOR = 1 << 24;
        /// Cc
        const CONTROL = 1 << 25;
        /// Cf
        const FORMAT = 1 << 26;
        /// Cs
        const SURROGATE = 1 << 27;
        /// Co
        const PRIVATE_USE = 1 << 28;
        /// Cn
        const UNASSIGNED = 1 << 29;

        /// Categories that make up `UnicodeLetter`: Lu, Ll, Lt, Lm, Lo and Nl.
        const LETTER = Self::UPPERCASE_LETTER.bits()
            | Self::LOWERCASE_LETTER.bits()
            | Self::TITLECASE_LETTER.bits()
            | Self::MODIFIER_LETTER.bits()
            | Self::OTHER_LETTER.bits()
            | Self::LETTER_NUMBER.bits();

        /// Categories that make up `UnicodeCombiningMark`: Mn and Mc.
        const COMBINING_MARK = Self::NONSPACING_MARK.bits() | Self::SPACING_MARK.bits();
    }
}

impl CategorySet {
    /// Returns true if `category` is a member of this set.
    #[inline]
    pub const fn contains_category(self, category: GeneralCategory) -> bool {
        self.bits() & category.set().bits() != 0
    }
}

/// Unicode version the category and case tables were generated from.
pub const UNICODE_VERSION: (u8, u8, u8) = crate::category_table::UNICODE_VERSION;

/// Returns the general category of a UTF-16 code unit.
///
/// Total over all `u16` values: code units outside every assigned run are
/// [`GeneralCategory::Unassigned`], lone surrogates are
/// [`GeneralCategory::Surrogate`].
///
/// # Examples
///
/// ```
/// use character::{general_category, GeneralCategory};
///
/// assert_eq!(general_category(u16::from(b'A')), GeneralCategory::UppercaseLetter);
/// assert_eq!(general_category(0x0378), GeneralCategory::Unassigned);
/// ```
pub fn general_category(c: u16) -> GeneralCategory {
    // Runs are sorted by first code unit; find the last run starting at or before `c`.
    let index = CATEGORY_RANGES.partition_point(|&(first, _, _)| first <= c);
    match index.checked_sub(1).map(|i| CATEGORY_RANGES[i]) {
        Some((_, last, category)) if c <= last => category,
        _ => GeneralCategory::Unassigned,
    }
}

/// Returns true if the category of `c` is a member of `set`.
#[inline]
pub fn in_categories(c: u16, set: CategorySet) -> bool {
    set.contains_category(general_category(c))
}
