// Generated from the Unicode Character Database, version 14.0.0.
// Basic Multilingual Plane only; code units missing from the table are unassigned.

use crate::category::GeneralCategory::{self, *};

pub(crate) const UNICODE_VERSION: (u8, u8, u8) = (14, 0, 0);

/// Sorted, non-overlapping `(first, last, category)` runs.
pub(crate) static CATEGORY_RANGES: [(u16, u16, GeneralCategory); 2552] = [
    (0x0000, 0x001F, Control),
    (0x0020, 0x0020, SpaceSeparator),
    (0x0021, 0x0023, OtherPunctuation),
    (0x0024, 0x0024, CurrencySymbol),
    (0x0025, 0x0027, OtherPunctuation),
    (0x0028, 0x0028, OpenPunctuation),
    (0x0029, 0x0029, ClosePunctuation),
    (0x002A, 0x002A, OtherPunctuation),
    (0x002B, 0x002B, MathSymbol),
    (0x002C, 0x002C, OtherPunctuation),
    (0x002D, 0x002D, DashPunctuation),
    (0x002E, 0x002F, OtherPunctuation),
    (0x0030, 0x0039, DecimalNumber),
    (0x003A, 0x003B, OtherPunctuation),
    (0x003C, 0x003E, MathSymbol),
    (0x003F, 0x0040, OtherPunctuation),
    (0x0041, 0x005A, UppercaseLetter),
    (0x005B, 0x005B, OpenPunctuation),
    (0x005C, 0x005C, OtherPunctuation),
    (0x005D, 0x005D, ClosePunctuation),
    (0x005E, 0x005E, ModifierSymbol),
    (0x005F, 0x005F, ConnectorPunctuation),
    (0x0060, 0x0060, ModifierSymbol),
    (0x0061, 0x007A, LowercaseLetter),
    (0x007B, 0x007B, OpenPunctuation),
    (0x007C, 0x007C, MathSymbol),
    (0x007D, 0x007D, ClosePunctuation),
    (0x007E, 0x007E, MathSymbol),
    (0x007F, 0x009F, Control),
    (0x00A0, 0x00A0, SpaceSeparator),
    (0x00A1, 0x00A1, OtherPunctuation),
    (0x00A2, 0x00A5, CurrencySymbol),
    (0x00A6, 0x00A6, OtherSymbol),
    (0x00A7, 0x00A7, OtherPunctuation),
    (0x00A8, 0x00A8, ModifierSymbol),
    (0x00A9, 0x00A9, OtherSymbol),
    (0x00AA, 0x00AA, OtherLetter),
    (0x00AB, 0x00AB, InitialPunctuation),
    (0x00AC, 0x00AC, MathSymbol),
    (0x00AD, 0x00AD, Format),
    (0x00AE, 0x00AE, OtherSymbol),
    (0x00AF, 0x00AF, ModifierSymbol),
    (0x00B0, 0x00B0, OtherSymbol),
    (0x00B1, 0x00B1, MathSymbol),
    (0x00B2, 0x00B3, OtherNumber),
    (0x00B4, 0x00B4, ModifierSymbol),
    (0x00B5, 0x00B5, LowercaseLetter),
    (0x00B6, 0x00B7, OtherPunctuation),
    (0x00B8, 0x00B8, ModifierSymbol),
    (0x00B9, 0x00B9, OtherNumber),
    (0x00BA, 0x00BA, OtherLetter),
    (0x00BB, 0x00BB, FinalPunctuation),
    (0x00BC, 0x00BE, OtherNumber),
    (0x00BF, 0x00BF, OtherPunctuation),
    (0x00C0, 0x00D6, UppercaseLetter),
    (0x00D7, 0x00D7, MathSymbol),
    (0x00D8, 0x00DE, UppercaseLetter),
    (0x00DF, 0x00F6, LowercaseLetter),
    (0x00F7, 0x00F7, MathSymbol),
    (0x00F8, 0x00FF, LowercaseLetter),
    (0x0100, 0x0100, UppercaseLetter),
    (0x0101, 0x0101, LowercaseLetter),
    (0x0102, 0x0102, UppercaseLetter),
    (0x0103, 0x0103, LowercaseLetter),
    (0x0104, 0x0104, UppercaseLetter),
    (0x0105, 0x0105, LowercaseLetter),
    (0x0106, 0x0106, UppercaseLetter),
    (0x0107, 0x0107, LowercaseLetter),
    (0x0108, 0x0108, UppercaseLetter),
    (0x0109, 0x0109, LowercaseLetter),
    (0x010A, 0x010A, UppercaseLetter),
    (0x010B, 0x010B, LowercaseLetter),
    (0x010C, 0x010C, UppercaseLetter),
    (0x010D, 0x010D, LowercaseLetter),
    (0x010E, 0x010E, UppercaseLetter),
    (0x010F, 0x010F, LowercaseLetter),
    (0x0110, 0x0110, UppercaseLetter),
    (0x0111, 0x0111, LowercaseLetter),
    (0x0112, 0x0112, UppercaseLetter),
    (0x0113, 0x0113, LowercaseLetter),
    (0x0114, 0x0114, UppercaseLetter),
    (0x0115, 0x0115, LowercaseLetter),
    (0x0116, 0x0116, UppercaseLetter),
    (0x0117, 0x0117, LowercaseLetter),
    (0x0118, 0x0118, UppercaseLetter),
    (0x0119, 0x0119, LowercaseLetter),
    (0x011A, 0x011A, UppercaseLetter),
    (0x011B, 0x011B, LowercaseLetter),
    (0x011C, 0x011C, UppercaseLetter),
    (0x011D, 0x011D, LowercaseLetter),
    (0x011E, 0x011E, UppercaseLetter),
    (0x011F, 0x011F, LowercaseLetter),
    (0x0120, 0x0120, UppercaseLetter),
    (0x0121, 0x0121, LowercaseLetter),
    (0x0122, 0x0122, UppercaseLetter),
    (0x0123, 0x0123, LowercaseLetter),
    (0x0124, 0x0124, UppercaseLetter),
    (0x0125, 0x0125, LowercaseLetter),
    (0x0126, 0x0126, UppercaseLetter),
    (0x0127, 0x0127, LowercaseLetter),
    (0x0128, 0x0128, UppercaseLetter),
    (0x0129, 0x0129, LowercaseLetter),
    (0x012A, 0x012A, UppercaseLetter),
    (0x012B, 0x012B, LowercaseLetter),
    (0x012C, 0x012C, UppercaseLetter),
    (0x012D, 0x012D, LowercaseLetter),
    (0x012E, 0x012E, UppercaseLetter),
    (0x012F, 0x012F, LowercaseLetter),
    (0x0130, 0x0130, UppercaseLetter),
    (0x0131, 0x0131, LowercaseLetter),
    (0x0132, 0x0132, UppercaseLetter),
    (0x0133, 0x0133, LowercaseLetter),
    (0x0134, 0x0134, UppercaseLetter),
    (0x0135, 0x0135, LowercaseLetter),
    (0x0136, 0x0136, UppercaseLetter),
    (0x0137, 0x0138, LowercaseLetter),
    (0x0139, 0x0139, UppercaseLetter),
    (0x013A, 0x013A, LowercaseLetter),
    (0x013B, 0x013B, UppercaseLetter),
    (0x013C, 0x013C, LowercaseLetter),
    (0x013D, 0x013D, UppercaseLetter),
    (0x013E, 0x013E, LowercaseLetter),
    (0x013F, 0x013F, UppercaseLetter),
    (0x0140, 0x0140, LowercaseLetter),
    (0x0141, 0x0141, UppercaseLetter),
    (0x0142, 0x0142, LowercaseLetter),
    (0x0143, 0x0143, UppercaseLetter),
    (0x0144, 0x0144, LowercaseLetter),
    (0x0145, 0x0145, UppercaseLetter),
    (0x0146, 0x0146, LowercaseLetter),
    (0x0147, 0x0147, UppercaseLetter),
    (0x0148, 0x0149, LowercaseLetter),
    (0x014A, 0x014A, UppercaseLetter),
    (0x014B, 0x014B, LowercaseLetter),
    (0x014C, 0x014C, UppercaseLetter),
    (0x014D, 0x014D, LowercaseLetter),
    (0x014E, 0x014E, UppercaseLetter),
    (0x014F, 0x014F, LowercaseLetter),
    (0x0150, 0x0150, UppercaseLetter),
    (0x0151, 0x0151, LowercaseLetter),
    (0x0152, 0x0152, UppercaseLetter),
    (0x0153, 0x0153, LowercaseLetter),
    (0x0154, 0x0154, UppercaseLetter),
    (0x0155, 0x0155, LowercaseLetter),
    (0x0156, 0x0156, UppercaseLetter),
    (0x0157, 0x0157, LowercaseLetter),
    (0x0158, 0x0158, UppercaseLetter),
    (0x0159, 0x0159, LowercaseLetter),
    (0x015A, 0x015A, UppercaseLetter),
    (0x015B, 0x015B, LowercaseLetter),
    (0x015C, 0x015C, UppercaseLetter),
    (0x015D, 0x015D, LowercaseLetter),
    (0x015E, 0x015E, UppercaseLetter),
    (0x015F, 0x015F, LowercaseLetter),
    (0x0160, 0x0160, UppercaseLetter),
    (0x0161, 0x0161, LowercaseLetter),
    (0x0162, 0x0162, UppercaseLetter),
    (0x0163, 0x0163, LowercaseLetter),
    (0x0164, 0x0164, UppercaseLetter),
    (0x0165, 0x0165, LowercaseLetter),
    (0x0166, 0x0166, UppercaseLetter),
    (0x0167, 0x0167, LowercaseLetter),
    (0x0168, 0x0168, UppercaseLetter),
    (0x0169, 0x0169, LowercaseLetter),
    (0x016A, 0x016A, UppercaseLetter),
    (0x016B, 0x016B, LowercaseLetter),
    (0x016C, 0x016C, UppercaseLetter),
    (0x016D, 0x016D, LowercaseLetter),
    (0x016E, 0x016E, UppercaseLetter),
    (0x016F, 0x016F, LowercaseLetter),
    (0x0170, 0x0170, UppercaseLetter),
    (0x0171, 0x0171, LowercaseLetter),
    (0x0172, 0x0172, UppercaseLetter),
    (0x0173, 0x0173, LowercaseLetter),
    (0x0174, 0x0174, UppercaseLetter),
    (0x0175, 0x0175, LowercaseLetter),
    (0x0176, 0x0176, UppercaseLetter),
    (0x0177, 0x0177, LowercaseLetter),
    (0x0178, 0x0179, UppercaseLetter),
    (0x017A, 0x017A, LowercaseLetter),
    (0x017B, 0x017B, UppercaseLetter),
    (0x017C, 0x017C, LowercaseLetter),
    (0x017D, 0x017D, UppercaseLetter),
    (0x017E, 0x0180, LowercaseLetter),
    (0x0181, 0x0182, UppercaseLetter),
    (0x0183, 0x0183, LowercaseLetter),
    (0x0184, 0x0184, UppercaseLetter),
    (0x0185, 0x0185, LowercaseLetter),
    (0x0186, 0x0187, UppercaseLetter),
    (0x0188, 0x0188, LowercaseLetter),
    (0x0189, 0x018B, UppercaseLetter),
    (0x018C, 0x018D, LowercaseLetter),
    (0x018E, 0x0191, UppercaseLetter),
    (0x0192, 0x0192, LowercaseLetter),
    (0x0193, 0x0194, UppercaseLetter),
    (0x0195, 0x0195, LowercaseLetter),
    (0x0196, 0x0198, UppercaseLetter),
    (0x0199, 0x019B, LowercaseLetter),
    (0x019C, 0x019D, UppercaseLetter),
    (0x019E, 0x019E, LowercaseLetter),
    (0x019F, 0x01A0, UppercaseLetter),
    (0x01A1, 0x01A1, LowercaseLetter),
    (0x01A2, 0x01A2, UppercaseLetter),
    (0x01A3, 0x01A3, LowercaseLetter),
    (0x01A4, 0x01A4, UppercaseLetter),
    (0x01A5, 0x01A5, LowercaseLetter),
    (0x01A6, 0x01A7, UppercaseLetter),
    (0x01A8, 0x01A8, LowercaseLetter),
    (0x01A9, 0x01A9, UppercaseLetter),
    (0x01AA, 0x01AB, LowercaseLetter),
    (0x01AC, 0x01AC, UppercaseLetter),
    (0x01AD, 0x01AD, LowercaseLetter),
    (0x01AE, 0x01AF, UppercaseLetter),
    (0x01B0, 0x01B0, LowercaseLetter),
    (0x01B1, 0x01B3, UppercaseLetter),
    (0x01B4, 0x01B4, LowercaseLetter),
    (0x01B5, 0x01B5, UppercaseLetter),
    (0x01B6, 0x01B6, LowercaseLetter),
    (0x01B7, 0x01B8, UppercaseLetter),
    (0x01B9, 0x01BA, LowercaseLetter),
    (0x01BB, 0x01BB, OtherLetter),
    (0x01BC, 0x01BC, UppercaseLetter),
    (0x01BD, 0x01BF, LowercaseLetter),
    (0x01C0, 0x01C3, OtherLetter),
    (0x01C4, 0x01C4, UppercaseLetter),
    (0x01C5, 0x01C5, TitlecaseLetter),
    (0x01C6, 0x01C6, LowercaseLetter),
    (0x01C7, 0x01C7, UppercaseLetter),
    (0x01C8, 0x01C8, TitlecaseLetter),
    (0x01C9, 0x01C9, LowercaseLetter),
    (0x01CA, 0x01CA, UppercaseLetter),
    (0x01CB, 0x01CB, TitlecaseLetter),
    (0x01CC, 0x01CC, LowercaseLetter),
    (0x01CD, 0x01CD, UppercaseLetter),
    (0x01CE, 0x01CE, LowercaseLetter),
    (0x01CF, 0x01CF, UppercaseLetter),
    (0x01D0, 0x01D0, LowercaseLetter),
    (0x01D1, 0x01D1, UppercaseLetter),
    (0x01D2, 0x01D2, LowercaseLetter),
    (0x01D3, 0x01D3, UppercaseLetter),
    (0x01D4, 0x01D4, LowercaseLetter),
    (0x01D5, 0x01D5, UppercaseLetter),
    (0x01D6, 0x01D6, LowercaseLetter),
    (0x01D7, 0x01D7, UppercaseLetter),
    (0x01D8, 0x01D8, LowercaseLetter),
    (0x01D9, 0x01D9, UppercaseLetter),
    (0x01DA, 0x01DA, LowercaseLetter),
    (0x01DB, 0x01DB, UppercaseLetter),
    (0x01DC, 0x01DD, LowercaseLetter),
    (0x01DE, 0x01DE, UppercaseLetter),
    (0x01DF, 0x01DF, LowercaseLetter),
    (0x01E0, 0x01E0, UppercaseLetter),
    (0x01E1, 0x01E1, LowercaseLetter),
    (0x01E2, 0x01E2, UppercaseLetter),
    (0x01E3, 0x01E3, LowercaseLetter),
    (0x01E4, 0x01E4, UppercaseLetter),
    (0x01E5, 0x01E5, LowercaseLetter),
    (0x01E6, 0x01E6, UppercaseLetter),
    (0x01E7, 0x01E7, LowercaseLetter),
    (0x01E8, 0x01E8, UppercaseLetter),
    (0x01E9, 0x01E9, LowercaseLetter),
    (0x01EA, 0x01EA, UppercaseLetter),
    (0x01EB, 0x01EB, LowercaseLetter),
    (0x01EC, 0x01EC, UppercaseLetter),
    (0x01ED, 0x01ED, LowercaseLetter),
    (0x01EE, 0x01EE, UppercaseLetter),
    (0x01EF, 0x01F0, LowercaseLetter),
    (0x01F1, 0x01F1, UppercaseLetter),
    (0x01F2, 0x01F2, TitlecaseLetter),
    (0x01F3, 0x01F3, LowercaseLetter),
    (0x01F4, 0x01F4, UppercaseLetter),
    (0x01F5, 0x01F5, LowercaseLetter),
    (0x01F6, 0x01F8, UppercaseLetter),
    (0x01F9, 0x01F9, LowercaseLetter),
    (0x01FA, 0x01FA, UppercaseLetter),
    (0x01FB, 0x01FB, LowercaseLetter),
    (0x01FC, 0x01FC, UppercaseLetter),
    (0x01FD, 0x01FD, LowercaseLetter),
    (0x01FE, 0x01FE, UppercaseLetter),
    (0x01FF, 0x01FF, LowercaseLetter),
    (0x0200, 0x0200, UppercaseLetter),
    (0x0201, 0x0201, LowercaseLetter),
    (0x0202, 0x0202, UppercaseLetter),
    (0x0203, 0x0203, LowercaseLetter),
    (0x0204, 0x0204, UppercaseLetter),
    (0x0205, 0x0205, LowercaseLetter),
    (0x0206, 0x0206, UppercaseLetter),
    (0x0207, 0x0207, LowercaseLetter),
    (0x0208, 0x0208, UppercaseLetter),
    (0x0209, 0x0209, LowercaseLetter),
    (0x020A, 0x020A, UppercaseLetter),
    (0x020B, 0x020B, LowercaseLetter),
    (0x020C, 0x020C, UppercaseLetter),
    (0x020D, 0x020D, LowercaseLetter),
    (0x020E, 0x020E, UppercaseLetter),
    (0x020F, 0x020F, LowercaseLetter),
    (0x0210, 0x0210, UppercaseLetter),
    (0x0211, 0x0211, LowercaseLetter),
    (0x0212, 0x0212, UppercaseLetter),
    (0x0213, 0x0213, LowercaseLetter),
    (0x0214, 0x0214, UppercaseLetter),
    (0x0215, 0x0215, LowercaseLetter),
    (0x0216, 0x0216, UppercaseLetter),
    (0x0217, 0x0217, LowercaseLetter),
    (0x0218, 0x0218, UppercaseLetter),
    (0x0219, 0x0219, LowercaseLetter),
    (0x021A, 0x021A, UppercaseLetter),
    (0x021B, 0x021B, LowercaseLetter),
    (0x021C, 0x021C, UppercaseLetter),
    (0x021D, 0x021D, LowercaseLetter),
    (0x021E, 0x021E, UppercaseLetter),
    (0x021F, 0x021F, LowercaseLetter),
    (0x0220, 0x0220, UppercaseLetter),
    (0x0221, 0x0221, LowercaseLetter),
    (0x0222, 0x0222, UppercaseLetter),
    (0x0223, 0x0223, LowercaseLetter),
    (0x0224, 0x0224, UppercaseLetter),
    (0x0225, 0x0225, LowercaseLetter),
    (0x0226, 0x0226, UppercaseLetter),
    (0x0227, 0x0227, LowercaseLetter),
    (0x0228, 0x0228, UppercaseLetter),
    (0x0229, 0x0229, LowercaseLetter),
    (0x022A, 0x022A, UppercaseLetter),
    (0x022B, 0x022B, LowercaseLetter),
    (0x022C, 0x022C, UppercaseLetter),
    (0x022D, 0x022D, LowercaseLetter),
    (0x022E, 0x022E, UppercaseLetter),
    (0x022F, 0x022F, LowercaseLetter),
    (0x0230, 0x0230, UppercaseLetter),
    (0x0231, 0x0231, LowercaseLetter),
    (0x0232, 0x0232, UppercaseLetter),
    (0x0233, 0x0239, LowercaseLetter),
    (0x023A, 0x023B, UppercaseLetter),
    (0x023C, 0x023C, LowercaseLetter),
    (0x023D, 0x023E, UppercaseLetter),
    (0x023F, 0x0240, LowercaseLetter),
    (0x0241, 0x0241, UppercaseLetter),
    (0x0242, 0x0242, LowercaseLetter),
    (0x0243, 0x0246, UppercaseLetter),
    (0x0247, 0x0247, LowercaseLetter),
    (0x0248, 0x0248, UppercaseLetter),
    (0x0249, 0x0249, LowercaseLetter),
    (0x024A, 0x024A, UppercaseLetter),
    (0x024B, 0x024B, LowercaseLetter),
    (0x024C, 0x024C, UppercaseLetter),
    (0x024D, 0x024D, LowercaseLetter),
    (0x024E, 0x024E, UppercaseLetter),
    (0x024F, 0x0293, LowercaseLetter),
    (0x0294, 0x0294, OtherLetter),
    (0x0295, 0x02AF, LowercaseLetter),
    (0x02B0, 0x02C1, ModifierLetter),
    (0x02C2, 0x02C5, ModifierSymbol),
    (0x02C6, 0x02D1, ModifierLetter),
    (0x02D2, 0x02DF, ModifierSymbol),
    (0x02E0, 0x02E4, ModifierLetter),
    (0x02E5, 0x02EB, ModifierSymbol),
    (0x02EC, 0x02EC, ModifierLetter),
    (0x02ED, 0x02ED, ModifierSymbol),
    (0x02EE, 0x02EE, ModifierLetter),
    (0x02EF, 0x02FF, ModifierSymbol),
    (0x0300, 0x036F, NonspacingMark),
    (0x0370, 0x0370, UppercaseLetter),
    (0x0371, 0x0371, LowercaseLetter),
    (0x0372, 0x0372, UppercaseLetter),
    (0x0373, 0x0373, LowercaseLetter),
    (0x0374, 0x0374, ModifierLetter),
    (0x0375, 0x0375, ModifierSymbol),
    (0x0376, 0x0376, UppercaseLetter),
    (0x0377, 0x0377, LowercaseLetter),
    (0x037A, 0x037A, ModifierLetter),
    (0x037B, 0x037D, LowercaseLetter),
    (0x037E, 0x037E, OtherPunctuation),
    (0x037F, 0x037F, UppercaseLetter),
    (0x0384, 0x0385, ModifierSymbol),
    (0x0386, 0x0386, UppercaseLetter),
    (0x0387, 0x0387, OtherPunctuation),
    (0x0388, 0x038A, UppercaseLetter),
    (0x038C, 0x038C, UppercaseLetter),
    (0x038E, 0x038F, UppercaseLetter),
    (0x0390, 0x0390, LowercaseLetter),
    (0x0391, 0x03A1, UppercaseLetter),
    (0x03A3, 0x03AB, UppercaseLetter),
    (0x03AC, 0x03CE, LowercaseLetter),
    (0x03CF, 0x03CF, UppercaseLetter),
    (0x03D0, 0x03D1, LowercaseLetter),
    (0x03D2, 0x03D4, UppercaseLetter),
    (0x03D5, 0x03D7, LowercaseLetter),
    (0x03D8, 0x03D8, UppercaseLetter),
    (0x03D9, 0x03D9, LowercaseLetter),
    (0x03DA, 0x03DA, UppercaseLetter),
    (0x03DB, 0x03DB, LowercaseLetter),
    (0x03DC, 0x03DC, UppercaseLetter),
    (0x03DD, 0x03DD, LowercaseLetter),
    (0x03DE, 0x03DE, UppercaseLetter),
    (0x03DF, 0x03DF, LowercaseLetter),
    (0x03E0, 0x03E0, UppercaseLetter),
    (0x03E1, 0x03E1, LowercaseLetter),
    (0x03E2, 0x03E2, UppercaseLetter),
    (0x03E3, 0x03E3, LowercaseLetter),
    (0x03E4, 0x03E4, UppercaseLetter),
    (0x03E5, 0x03E5, LowercaseLetter),
    (0x03E6, 0x03E6, UppercaseLetter),
    (0x03E7, 0x03E7, LowercaseLetter),
    (0x03E8, 0x03E8, UppercaseLetter),
    (0x03E9, 0x03E9, LowercaseLetter),
    (0x03EA, 0x03EA, UppercaseLetter),
    (0x03EB, 0x03EB, LowercaseLetter),
    (0x03EC, 0x03EC, UppercaseLetter),
    (0x03ED, 0x03ED, LowercaseLetter),
    (0x03EE, 0x03EE, UppercaseLetter),
    (0x03EF, 0x03F3, LowercaseLetter),
    (0x03F4, 0x03F4, UppercaseLetter),
    (0x03F5, 0x03F5, LowercaseLetter),
    (0x03F6, 0x03F6, MathSymbol),
    (0x03F7, 0x03F7, UppercaseLetter),
    (0x03F8, 0x03F8, LowercaseLetter),
    (0x03F9, 0x03FA, UppercaseLetter),
    (0x03FB, 0x03FC, LowercaseLetter),
    (0x03FD, 0x042F, UppercaseLetter),
    (0x0430, 0x045F, LowercaseLetter),
    (0x0460, 0x0460, UppercaseLetter),
    (0x0461, 0x0461, LowercaseLetter),
    (0x0462, 0x0462, UppercaseLetter),
    (0x0463, 0x0463, LowercaseLetter),
    (0x0464, 0x0464, UppercaseLetter),
    (0x0465, 0x0465, LowercaseLetter),
    (0x0466, 0x0466, UppercaseLetter),
    (0x0467, 0x0467, LowercaseLetter),
    (0x0468, 0x0468, UppercaseLetter),
    (0x0469, 0x0469, LowercaseLetter),
    (0x046A, 0x046A, UppercaseLetter),
    (0x046B, 0x046B, LowercaseLetter),
    (0x046C, 0x046C, UppercaseLetter),
    (0x046D, 0x046D, LowercaseLetter),
    (0x046E, 0x046E, UppercaseLetter),
    (0x046F, 0x046F, LowercaseLetter),
    (0x0470, 0x0470, UppercaseLetter),
    (0x0471, 0x0471, LowercaseLetter),
    (0x0472, 0x0472, UppercaseLetter),
    (0x0473, 0x0473, LowercaseLetter),
    (0x0474, 0x0474, UppercaseLetter),
    (0x0475, 0x0475, LowercaseLetter),
    (0x0476, 0x0476, UppercaseLetter),
    (0x0477, 0x0477, LowercaseLetter),
    (0x0478, 0x0478, UppercaseLetter),
    (0x0479, 0x0479, LowercaseLetter),
    (0x047A, 0x047A, UppercaseLetter),
    (0x047B, 0x047B, LowercaseLetter),
    (0x047C, 0x047C, UppercaseLetter),
    (0x047D, 0x047D, LowercaseLetter),
    (0x047E, 0x047E, UppercaseLetter),
    (0x047F, 0x047F, LowercaseLetter),
    (0x0480, 0x0480, UppercaseLetter),
    (0x0481, 0x0481, LowercaseLetter),
    (0x0482, 0x0482, OtherSymbol),
    (0x0483, 0x0487, NonspacingMark),
    (0x0488, 0x0489, EnclosingMark),
    (0x048A, 0x048A, UppercaseLetter),
    (0x048B, 0x048B, LowercaseLetter),
    (0x048C, 0x048C, UppercaseLetter),
    (0x048D, 0x048D, LowercaseLetter),
    (0x048E, 0x048E, UppercaseLetter),
    (0x048F, 0x048F, LowercaseLetter),
    (0x0490, 0x0490, UppercaseLetter),
    (0x0491, 0x0491, LowercaseLetter),
    (0x0492, 0x0492, UppercaseLetter),
    (0x0493, 0x0493, LowercaseLetter),
    (0x0494, 0x0494, UppercaseLetter),
    (0x0495, 0x0495, LowercaseLetter),
    (0x0496, 0x0496, UppercaseLetter),
    (0x0497, 0x0497, LowercaseLetter),
    (0x0498, 0x0498, UppercaseLetter),
    (0x0499, 0x0499, LowercaseLetter),
    (0x049A, 0x049A, UppercaseLetter),
    (0x049B, 0x049B, LowercaseLetter),
    (0x049C, 0x049C, UppercaseLetter),
    (0x049D, 0x049D, LowercaseLetter),
    (0x049E, 0x049E, UppercaseLetter),
    (0x049F, 0x049F, LowercaseLetter),
    (0x04A0, 0x04A0, UppercaseLetter),
    (0x04A1, 0x04A1, LowercaseLetter),
    (0x04A2, 0x04A2, UppercaseLetter),
    (0x04A3, 0x04A3, LowercaseLetter),
    (0x04A4, 0x04A4, UppercaseLetter),
    (0x04A5, 0x04A5, LowercaseLetter),
    (0x04A6, 0x04A6, UppercaseLetter),
    (0x04A7, 0x04A7, LowercaseLetter),
    (0x04A8, 0x04A8, UppercaseLetter),
    (0x04A9, 0x04A9, LowercaseLetter),
    (0x04AA, 0x04AA, UppercaseLetter),
    (0x04AB, 0x04AB, LowercaseLetter),
    (0x04AC, 0x04AC, UppercaseLetter),
    (0x04AD, 0x04AD, LowercaseLetter),
    (0x04AE, 0x04AE, UppercaseLetter),
    (0x04AF, 0x04AF, LowercaseLetter),
    (0x04B0, 0x04B0, UppercaseLetter),
    (0x04B1, 0x04B1, LowercaseLetter),
    (0x04B2, 0x04B2, UppercaseLetter),
    (0x04B3, 0x04B3, LowercaseLetter),
    (0x04B4, 0x04B4, UppercaseLetter),
    (0x04B5, 0x04B5, LowercaseLetter),
    (0x04B6, 0x04B6, UppercaseLetter),
    (0x04B7, 0x04B7, LowercaseLetter),
    (0x04B8, 0x04B8, UppercaseLetter),
    (0x04B9, 0x04B9, LowercaseLetter),
    (0x04BA, 0x04BA, UppercaseLetter),
    (0x04BB, 0x04BB, LowercaseLetter),
    (0x04BC, 0x04BC, UppercaseLetter),
    (0x04BD, 0x04BD, LowercaseLetter),
    (0x04BE, 0x04BE, UppercaseLetter),
    (0x04BF, 0x04BF, LowercaseLetter),
    (0x04C0, 0x04C1, UppercaseLetter),
    (0x04C2, 0x04C2, LowercaseLetter),
    (0x04C3, 0x04C3, UppercaseLetter),
    (0x04C4, 0x04C4, LowercaseLetter),
    (0x04C5, 0x04C5, UppercaseLetter),
    (0x04C6, 0x04C6, LowercaseLetter),
    (0x04C7, 0x04C7, UppercaseLetter),
    (0x04C8, 0x04C8, LowercaseLetter),
    (0x04C9, 0x04C9, UppercaseLetter),
    (0x04CA, 0x04CA, LowercaseLetter),
    (0x04CB, 0x04CB, UppercaseLetter),
    (0x04CC, 0x04CC, LowercaseLetter),
    (0x04CD, 0x04CD, UppercaseLetter),
    (0x04CE, 0x04CF, LowercaseLetter),
    (0x04D0, 0x04D0, UppercaseLetter),
    (0x04D1, 0x04D1, LowercaseLetter),
    (0x04D2, 0x04D2, UppercaseLetter),
    (0x04D3, 0x04D3, LowercaseLetter),
    (0x04D4, 0x04D4, UppercaseLetter),
    (0x04D5, 0x04D5, LowercaseLetter),
    (0x04D6, 0x04D6, UppercaseLetter),
    (0x04D7, 0x04D7, LowercaseLetter),
    (0x04D8, 0x04D8, UppercaseLetter),
    (0x04D9, 0x04D9, LowercaseLetter),
    (0x04DA, 0x04DA, UppercaseLetter),
    (0x04DB, 0x04DB, LowercaseLetter),
    (0x04DC, 0x04DC, UppercaseLetter),
    (0x04DD, 0x04DD, LowercaseLetter),
    (0x04DE, 0x04DE, UppercaseLetter),
    (0x04DF, 0x04DF, LowercaseLetter),
    (0x04E0, 0x04E0, UppercaseLetter),
    (0x04E1, 0x04E1, LowercaseLetter),
    (0x04E2, 0x04E2, UppercaseLetter),
    (0x04E3, 0x04E3, LowercaseLetter),
    (0x04E4, 0x04E4, UppercaseLetter),
    (0x04E5, 0x04E5, LowercaseLetter),
    (0x04E6, 0x04E6, UppercaseLetter),
    (0x04E7, 0x04E7, LowercaseLetter),
    (0x04E8, 0x04E8, UppercaseLetter),
    (0x04E9, 0x04E9, LowercaseLetter),
    (0x04EA, 0x04EA, UppercaseLetter),
    (0x04EB, 0x04EB, LowercaseLetter),
    (0x04EC, 0x04EC, UppercaseLetter),
    (0x04ED, 0x04ED, LowercaseLetter),
    (0x04EE, 0x04EE, UppercaseLetter),
    (0x04EF, 0x04EF, LowercaseLetter),
    (0x04F0, 0x04F0, UppercaseLetter),
    (0x04F1, 0x04F1, LowercaseLetter),
    (0x04F2, 0x04F2, UppercaseLetter),
    (0x04F3, 0x04F3, LowercaseLetter),
    (0x04F4, 0x04F4, UppercaseLetter),
    (0x04F5, 0x04F5, LowercaseLetter),
    (0x04F6, 0x04F6, UppercaseLetter),
    (0x04F7, 0x04F7, LowercaseLetter),
    (0x04F8, 0x04F8, UppercaseLetter),
    (0x04F9, 0x04F9, LowercaseLetter),
    (0x04FA, 0x04FA, UppercaseLetter),
    (0x04FB, 0x04FB, LowercaseLetter),
    (0x04FC, 0x04FC, UppercaseLetter),
    (0x04FD, 0x04FD, LowercaseLetter),
    (0x04FE, 0x04FE, UppercaseLetter),
    (0x04FF, 0x04FF, LowercaseLetter),
    (0x0500, 0x0500, UppercaseLetter),
    (0x0501, 0x0501, LowercaseLetter),
    (0x0502, 0x0502, UppercaseLetter),
    (0x0503, 0x0503, LowercaseLetter),
    (0x0504, 0x0504, UppercaseLetter),
    (0x0505, 0x0505, LowercaseLetter),
    (0x0506, 0x0506, UppercaseLetter),
    (0x0507, 0x0507, LowercaseLetter),
    (0x0508, 0x0508, UppercaseLetter),
    (0x0509, 0x0509, LowercaseLetter),
    (0x050A, 0x050A, UppercaseLetter),
    (0x050B, 0x050B, LowercaseLetter),
    (0x050C, 0x050C, UppercaseLetter),
    (0x050D, 0x050D, LowercaseLetter),
    (0x050E, 0x050E, UppercaseLetter),
    (0x050F, 0x050F, LowercaseLetter),
    (0x0510, 0x0510, UppercaseLetter),
    (0x0511, 0x0511, LowercaseLetter),
    (0x0512, 0x0512, UppercaseLetter),
    (0x0513, 0x0513, LowercaseLetter),
    (0x0514, 0x0514, UppercaseLetter),
    (0x0515, 0x0515, LowercaseLetter),
    (0x0516, 0x0516, UppercaseLetter),
    (0x0517, 0x0517, LowercaseLetter),
    (0x0518, 0x0518, UppercaseLetter),
    (0x0519, 0x0519, LowercaseLetter),
    (0x051A, 0x051A, UppercaseLetter),
    (0x051B, 0x051B, LowercaseLetter),
    (0x051C, 0x051C, UppercaseLetter),
    (0x051D, 0x051D, LowercaseLetter),
    (0x051E, 0x051E, UppercaseLetter),
    (0x051F, 0x051F, LowercaseLetter),
    (0x0520, 0x0520, UppercaseLetter),
    (0x0521, 0x0521, LowercaseLetter),
    (0x0522, 0x0522, UppercaseLetter),
    (0x0523, 0x0523, LowercaseLetter),
    (0x0524, 0x0524, UppercaseLetter),
    (0x0525, 0x0525, LowercaseLetter),
    (0x0526, 0x0526, UppercaseLetter),
    (0x0527, 0x0527, LowercaseLetter),
    (0x0528, 0x0528, UppercaseLetter),
    (0x0529, 0x0529, LowercaseLetter),
    (0x052A, 0x052A, UppercaseLetter),
    (0x052B, 0x052B, LowercaseLetter),
    (0x052C, 0x052C, UppercaseLetter),
    (0x052D, 0x052D, LowercaseLetter),
    (0x052E, 0x052E, UppercaseLetter),
    (0x052F, 0x052F, LowercaseLetter),
    (0x0531, 0x0556, UppercaseLetter),
    (0x0559, 0x0559, ModifierLetter),
    (0x055A, 0x055F, OtherPunctuation),
    (0x0560, 0x0588, LowercaseLetter),
    (0x0589, 0x0589, OtherPunctuation),
    (0x058A, 0x058A, DashPunctuation),
    (0x058D, 0x058E, OtherSymbol),
    (0x058F, 0x058F, CurrencySymbol),
    (0x0591, 0x05BD, NonspacingMark),
    (0x05BE, 0x05BE, DashPunctuation),
    (0x05BF, 0x05BF, NonspacingMark),
    (0x05C0, 0x05C0, OtherPunctuation),
    (0x05C1, 0x05C2, NonspacingMark),
    (0x05C3, 0x05C3, OtherPunctuation),
    (0x05C4, 0x05C5, NonspacingMark),
    (0x05C6, 0x05C6, OtherPunctuation),
    (0x05C7, 0x05C7, NonspacingMark),
    (0x05D0, 0x05EA, OtherLetter),
    (0x05EF, 0x05F2, OtherLetter),
    (0x05F3, 0x05F4, OtherPunctuation),
    (0x0600, 0x0605, Format),
    (0x0606, 0x0608, MathSymbol),
    (0x0609, 0x060A, OtherPunctuation),
    (0x060B, 0x060B, CurrencySymbol),
    (0x060C, 0x060D, OtherPunctuation),
    (0x060E, 0x060F, OtherSymbol),
    (0x0610, 0x061A, NonspacingMark),
    (0x061B, 0x061B, OtherPunctuation),
    (0x061C, 0x061C, Format),
    (0x061D, 0x061F, OtherPunctuation),
    (0x0620, 0x063F, OtherLetter),
    (0x0640, 0x0640, ModifierLetter),
    (0x0641, 0x064A, OtherLetter),
    (0x064B, 0x065F, NonspacingMark),
    (0x0660, 0x0669, DecimalNumber),
    (0x066A, 0x066D, OtherPunctuation),
    (0x066E, 0x066F, OtherLetter),
    (0x0670, 0x0670, NonspacingMark),
    (0x0671, 0x06D3, OtherLetter),
    (0x06D4, 0x06D4, OtherPunctuation),
    (0x06D5, 0x06D5, OtherLetter),
    (0x06D6, 0x06DC, NonspacingMark),
    (0x06DD, 0x06DD, Format),
    (0x06DE, 0x06DE, OtherSymbol),
    (0x06DF, 0x06E4, NonspacingMark),
    (0x06E5, 0x06E6, ModifierLetter),
    (0x06E7, 0x06E8, NonspacingMark),
    (0x06E9, 0x06E9, OtherSymbol),
    (0x06EA, 0x06ED, NonspacingMark),
    (0x06EE, 0x06EF, OtherLetter),
    (0x06F0, 0x06F9, DecimalNumber),
    (0x06FA, 0x06FC, OtherLetter),
    (0x06FD, 0x06FE, OtherSymbol),
    (0x06FF, 0x06FF, OtherLetter),
    (0x0700, 0x070D, OtherPunctuation),
    (0x070F, 0x070F, Format),
    (0x0710, 0x0710, OtherLetter),
    (0x0711, 0x0711, NonspacingMark),
    (0x0712, 0x072F, OtherLetter),
    (0x0730, 0x074A, NonspacingMark),
    (0x074D, 0x07A5, OtherLetter),
    (0x07A6, 0x07B0, NonspacingMark),
    (0x07B1, 0x07B1, OtherLetter),
    (0x07C0, 0x07C9, DecimalNumber),
    (0x07CA, 0x07EA, OtherLetter),
    (0x07EB, 0x07F3, NonspacingMark),
    (0x07F4, 0x07F5, ModifierLetter),
    (0x07F6, 0x07F6, OtherSymbol),
    (0x07F7, 0x07F9, OtherPunctuation),
    (0x07FA, 0x07FA, ModifierLetter),
    (0x07FD, 0x07FD, NonspacingMark),
    (0x07FE, 0x07FF, CurrencySymbol),
    (0x0800, 0x0815, OtherLetter),
    (0x0816, 0x0819, NonspacingMark),
    (0x081A, 0x081A, ModifierLetter),
    (0x081B, 0x0823, NonspacingMark),
    (0x0824, 0x0824, ModifierLetter),
    (0x0825, 0x0827, NonspacingMark),
    (0x0828, 0x0828, ModifierLetter),
    (0x0829, 0x082D, NonspacingMark),
    (0x0830, 0x083E, OtherPunctuation),
    (0x0840, 0x0858, OtherLetter),
    (0x0859, 0x085B, NonspacingMark),
    (0x085E, 0x085E, OtherPunctuation),
    (0x0860, 0x086A, OtherLetter),
    (0x0870, 0x0887, OtherLetter),
    (0x0888, 0x0888, ModifierSymbol),
    (0x0889, 0x088E, OtherLetter),
    (0x0890, 0x0891, Format),
    (0x0898, 0x089F, NonspacingMark),
    (0x08A0, 0x08C8, OtherLetter),
    (0x08C9, 0x08C9, ModifierLetter),
    (0x08CA, 0x08E1, NonspacingMark),
    (0x08E2, 0x08E2, Format),
    (0x08E3, 0x0902, NonspacingMark),
    (0x0903, 0x0903, SpacingMark),
    (0x0904, 0x0939, OtherLetter),
    (0x093A, 0x093A, NonspacingMark),
    (0x093B, 0x093B, SpacingMark),
    (0x093C, 0x093C, NonspacingMark),
    (0x093D, 0x093D, OtherLetter),
    (0x093E, 0x0940, SpacingMark),
    (0x0941, 0x0948, NonspacingMark),
    (0x0949, 0x094C, SpacingMark),
    (0x094D, 0x094D, NonspacingMark),
    (0x094E, 0x094F, SpacingMark),
    (0x0950, 0x0950, OtherLetter),
    (0x0951, 0x0957, NonspacingMark),
    (0x0958, 0x0961, OtherLetter),
    (0x0962, 0x0963, NonspacingMark),
    (0x0964, 0x0965, OtherPunctuation),
    (0x0966, 0x096F, DecimalNumber),
    (0x0970, 0x0970, OtherPunctuation),
    (0x0971, 0x0971, ModifierLetter),
    (0x0972, 0x0980, OtherLetter),
    (0x0981, 0x0981, NonspacingMark),
    (0x0982, 0x0983, SpacingMark),
    (0x0985, 0x098C, OtherLetter),
    (0x098F, 0x0990, OtherLetter),
    (0x0993, 0x09A8, OtherLetter),
    (0x09AA, 0x09B0, OtherLetter),
    (0x09B2, 0x09B2, OtherLetter),
    (0x09B6, 0x09B9, OtherLetter),
    (0x09BC, 0x09BC, NonspacingMark),
    (0x09BD, 0x09BD, OtherLetter),
    (0x09BE, 0x09C0, SpacingMark),
    (0x09C1, 0x09C4, NonspacingMark),
    (0x09C7, 0x09C8, SpacingMark),
    (0x09CB, 0x09CC, SpacingMark),
    (0x09CD, 0x09CD, NonspacingMark),
    (0x09CE, 0x09CE, OtherLetter),
    (0x09D7, 0x09D7, SpacingMark),
    (0x09DC, 0x09DD, OtherLetter),
    (0x09DF, 0x09E1, OtherLetter),
    (0x09E2, 0x09E3, NonspacingMark),
    (0x09E6, 0x09EF, DecimalNumber),
    (0x09F0, 0x09F1, OtherLetter),
    (0x09F2, 0x09F3, CurrencySymbol),
    (0x09F4, 0x09F9, OtherNumber),
    (0x09FA, 0x09FA, OtherSymbol),
    (0x09FB, 0x09FB, CurrencySymbol),
    (0x09FC, 0x09FC, OtherLetter),
    (0x09FD, 0x09FD, OtherPunctuation),
    (0x09FE, 0x09FE, NonspacingMark),
    (0x0A01, 0x0A02, NonspacingMark),
    (0x0A03, 0x0A03, SpacingMark),
    (0x0A05, 0x0A0A, OtherLetter),
    (0x0A0F, 0x0A10, OtherLetter),
    (0x0A13, 0x0A28, OtherLetter),
    (0x0A2A, 0x0A30, OtherLetter),
    (0x0A32, 0x0A33, OtherLetter),
    (0x0A35, 0x0A36, OtherLetter),
    (0x0A38, 0x0A39, OtherLetter),
    (0x0A3C, 0x0A3C, NonspacingMark),
    (0x0A3E, 0x0A40, SpacingMark),
    (0x0A41, 0x0A42, NonspacingMark),
    (0x0A47, 0x0A48, NonspacingMark),
    (0x0A4B, 0x0A4D, NonspacingMark),
    (0x0A51, 0x0A51, NonspacingMark),
    (0x0A59, 0x0A5C, OtherLetter),
    (0x0A5E, 0x0A5E, OtherLetter),
    (0x0A66, 0x0A6F, DecimalNumber),
    (0x0A70, 0x0A71, NonspacingMark),
    (0x0A72, 0x0A74, OtherLetter),
    (0x0A75, 0x0A75, NonspacingMark),
    (0x0A76, 0x0A76, OtherPunctuation),
    (0x0A81, 0x0A82, NonspacingMark),
    (0x0A83, 0x0A83, SpacingMark),
    (0x0A85, 0x0A8D, OtherLetter),
    (0x0A8F, 0x0A91, OtherLetter),
    (0x0A93, 0x0AA8, OtherLetter),
    (0x0AAA, 0x0AB0, OtherLetter),
    (0x0AB2, 0x0AB3, OtherLetter),
    (0x0AB5, 0x0AB9, OtherLetter),
    (0x0ABC, 0x0ABC, NonspacingMark),
    (0x0ABD, 0x0ABD, OtherLetter),
    (0x0ABE, 0x0AC0, SpacingMark),
    (0x0AC1, 0x0AC5, NonspacingMark),
    (0x0AC7, 0x0AC8, NonspacingMark),
    (0x0AC9, 0x0AC9, SpacingMark),
    (0x0ACB, 0x0ACC, SpacingMark),
    (0x0ACD, 0x0ACD, NonspacingMark),
    (0x0AD0, 0x0AD0, OtherLetter),
    (0x0AE0, 0x0AE1, OtherLetter),
    (0x0AE2, 0x0AE3, NonspacingMark),
    (0x0AE6, 0x0AEF, DecimalNumber),
    (0x0AF0, 0x0AF0, OtherPunctuation),
    (0x0AF1, 0x0AF1, CurrencySymbol),
    (0x0AF9, 0x0AF9, OtherLetter),
    (0x0AFA, 0x0AFF, NonspacingMark),
    (0x0B01, 0x0B01, NonspacingMark),
    (0x0B02, 0x0B03, SpacingMark),
    (0x0B05, 0x0B0C, OtherLetter),
    (0x0B0F, 0x0B10, OtherLetter),
    (0x0B13, 0x0B28, OtherLetter),
    (0x0B2A, 0x0B30, OtherLetter),
    (0x0B32, 0x0B33, OtherLetter),
    (0x0B35, 0x0B39, OtherLetter),
    (0x0B3C, 0x0B3C, NonspacingMark),
    (0x0B3D, 0x0B3D, OtherLetter),
    (0x0B3E, 0x0B3E, SpacingMark),
    (0x0B3F, 0x0B3F, NonspacingMark),
    (0x0B40, 0x0B40, SpacingMark),
    (0x0B41, 0x0B44, NonspacingMark),
    (0x0B47, 0x0B48, SpacingMark),
    (0x0B4B, 0x0B4C, SpacingMark),
    (0x0B4D, 0x0B4D, NonspacingMark),
    (0x0B55, 0x0B56, NonspacingMark),
    (0x0B57, 0x0B57, SpacingMark),
    (0x0B5C, 0x0B5D, OtherLetter),
    (0x0B5F, 0x0B61, OtherLetter),
    (0x0B62, 0x0B63, NonspacingMark),
    (0x0B66, 0x0B6F, DecimalNumber),
    (0x0B70, 0x0B70, OtherSymbol),
    (0x0B71, 0x0B71, OtherLetter),
    (0x0B72, 0x0B77, OtherNumber),
    (0x0B82, 0x0B82, NonspacingMark),
    (0x0B83, 0x0B83, OtherLetter),
    (0x0B85, 0x0B8A, OtherLetter),
    (0x0B8E, 0x0B90, OtherLetter),
    (0x0B92, 0x0B95, OtherLetter),
    (0x0B99, 0x0B9A, OtherLetter),
    (0x0B9C, 0x0B9C, OtherLetter),
    (0x0B9E, 0x0B9F, OtherLetter),
    (0x0BA3, 0x0BA4, OtherLetter),
    (0x0BA8, 0x0BAA, OtherLetter),
    (0x0BAE, 0x0BB9, OtherLetter),
    (0x0BBE, 0x0BBF, SpacingMark),
    (0x0BC0, 0x0BC0, NonspacingMark),
    (0x0BC1, 0x0BC2, SpacingMark),
    (0x0BC6, 0x0BC8, SpacingMark),
    (0x0BCA, 0x0BCC, SpacingMark),
    (0x0BCD, 0x0BCD, NonspacingMark),
    (0x0BD0, 0x0BD0, OtherLetter),
    (0x0BD7, 0x0BD7, SpacingMark),
    (0x0BE6, 0x0BEF, DecimalNumber),
    (0x0BF0, 0x0BF2, OtherNumber),
    (0x0BF3, 0x0BF8, OtherSymbol),
    (0x0BF9, 0x0BF9, CurrencySymbol),
    (0x0BFA, 0x0BFA, OtherSymbol),
    (0x0C00, 0x0C00, NonspacingMark),
    (0x0C01, 0x0C03, SpacingMark),
    (0x0C04, 0x0C04, NonspacingMark),
    (0x0C05, 0x0C0C, OtherLetter),
    (0x0C0E, 0x0C10, OtherLetter),
    (0x0C12, 0x0C28, OtherLetter),
    (0x0C2A, 0x0C39, OtherLetter),
    (0x0C3C, 0x0C3C, NonspacingMark),
    (0x0C3D, 0x0C3D, OtherLetter),
    (0x0C3E, 0x0C40, NonspacingMark),
    (0x0C41, 0x0C44, SpacingMark),
    (0x0C46, 0x0C48, NonspacingMark),
    (0x0C4A, 0x0C4D, NonspacingMark),
    (0x0C55, 0x0C56, NonspacingMark),
    (0x0C58, 0x0C5A, OtherLetter),
    (0x0C5D, 0x0C5D, OtherLetter),
    (0x0C60, 0x0C61, OtherLetter),
    (0x0C62, 0x0C63, NonspacingMark),
    (0x0C66, 0x0C6F, DecimalNumber),
    (0x0C77, 0x0C77, OtherPunctuation),
    (0x0C78, 0x0C7E, OtherNumber),
    (0x0C7F, 0x0C7F, OtherSymbol),
    (0x0C80, 0x0C80, OtherLetter),
    (0x0C81, 0x0C81, NonspacingMark),
    (0x0C82, 0x0C83, SpacingMark),
    (0x0C84, 0x0C84, OtherPunctuation),
    (0x0C85, 0x0C8C, OtherLetter),
    (0x0C8E, 0x0C90, OtherLetter),
    (0x0C92, 0x0CA8, OtherLetter),
    (0x0CAA, 0x0CB3, OtherLetter),
    (0x0CB5, 0x0CB9, OtherLetter),
    (0x0CBC, 0x0CBC, NonspacingMark),
    (0x0CBD, 0x0CBD, OtherLetter),
    (0x0CBE, 0x0CBE, SpacingMark),
    (0x0CBF, 0x0CBF, NonspacingMark),
    (0x0CC0, 0x0CC4, SpacingMark),
    (0x0CC6, 0x0CC6, NonspacingMark),
    (0x0CC7, 0x0CC8, SpacingMark),
    (0x0CCA, 0x0CCB, SpacingMark),
    (0x0CCC, 0x0CCD, NonspacingMark),
    (0x0CD5, 0x0CD6, SpacingMark),
    (0x0CDD, 0x0CDE, OtherLetter),
    (0x0CE0, 0x0CE1, OtherLetter),
    (0x0CE2, 0x0CE3, NonspacingMark),
    (0x0CE6, 0x0CEF, DecimalNumber),
    (0x0CF1, 0x0CF2, OtherLetter),
    (0x0D00, 0x0D01, NonspacingMark),
    (0x0D02, 0x0D03, SpacingMark),
    (0x0D04, 0x0D0C, OtherLetter),
    (0x0D0E, 0x0D10, OtherLetter),
    (0x0D12, 0x0D3A, OtherLetter),
    (0x0D3B, 0x0D3C, NonspacingMark),
    (0x0D3D, 0x0D3D, OtherLetter),
    (0x0D3E, 0x0D40, SpacingMark),
    (0x0D41, 0x0D44, NonspacingMark),
    (0x0D46, 0x0D48, SpacingMark),
    (0x0D4A, 0x0D4C, SpacingMark),
    (0x0D4D, 0x0D4D, NonspacingMark),
    (0x0D4E, 0x0D4E, OtherLetter),
    (0x0D4F, 0x0D4F, OtherSymbol),
    (0x0D54, 0x0D56, OtherLetter),
    (0x0D57, 0x0D57, SpacingMark),
    (0x0D58, 0x0D5E, OtherNumber),
    (0x0D5F, 0x0D61, OtherLetter),
    (0x0D62, 0x0D63, NonspacingMark),
    (0x0D66, 0x0D6F, DecimalNumber),
    (0x0D70, 0x0D78, OtherNumber),
    (0x0D79, 0x0D79, OtherSymbol),
    (0x0D7A, 0x0D7F, OtherLetter),
    (0x0D81, 0x0D81, NonspacingMark),
    (0x0D82, 0x0D83, SpacingMark),
    (0x0D85, 0x0D96, OtherLetter),
    (0x0D9A, 0x0DB1, OtherLetter),
    (0x0DB3, 0x0DBB, OtherLetter),
    (0x0DBD, 0x0DBD, OtherLetter),
    (0x0DC0, 0x0DC6, OtherLetter),
    (0x0DCA, 0x0DCA, NonspacingMark),
    (0x0DCF, 0x0DD1, SpacingMark),
    (0x0DD2, 0x0DD4, NonspacingMark),
    (0x0DD6, 0x0DD6, NonspacingMark),
    (0x0DD8, 0x0DDF, SpacingMark),
    (0x0DE6, 0x0DEF, DecimalNumber),
    (0x0DF2, 0x0DF3, SpacingMark),
    (0x0DF4, 0x0DF4, OtherPunctuation),
    (0x0E01, 0x0E30, OtherLetter),
    (0x0E31, 0x0E31, NonspacingMark),
    (0x0E32, 0x0E33, OtherLetter),
    (0x0E34, 0x0E3A, NonspacingMark),
    (0x0E3F, 0x0E3F, CurrencySymbol),
    (0x0E40, 0x0E45, OtherLetter),
    (0x0E46, 0x0E46, ModifierLetter),
    (0x0E47, 0x0E4E, NonspacingMark),
    (0x0E4F, 0x0E4F, OtherPunctuation),
    (0x0E50, 0x0E59, DecimalNumber),
    (0x0E5A, 0x0E5B, OtherPunctuation),
    (0x0E81, 0x0E82, OtherLetter),
    (0x0E84, 0x0E84, OtherLetter),
    (0x0E86, 0x0E8A, OtherLetter),
    (0x0E8C, 0x0EA3, OtherLetter),
    (0x0EA5, 0x0EA5, OtherLetter),
    (0x0EA7, 0x0EB0, OtherLetter),
    (0x0EB1, 0x0EB1, NonspacingMark),
    (0x0EB2, 0x0EB3, OtherLetter),
    (0x0EB4, 0x0EBC, NonspacingMark),
    (0x0EBD, 0x0EBD, OtherLetter),
    (0x0EC0, 0x0EC4, OtherLetter),
    (0x0EC6, 0x0EC6, ModifierLetter),
    (0x0EC8, 0x0ECD, NonspacingMark),
    (0x0ED0, 0x0ED9, DecimalNumber),
    (0x0EDC, 0x0EDF, OtherLetter),
    (0x0F00, 0x0F00, OtherLetter),
    (0x0F01, 0x0F03, OtherSymbol),
    (0x0F04, 0x0F12, OtherPunctuation),
    (0x0F13, 0x0F13, OtherSymbol),
    (0x0F14, 0x0F14, OtherPunctuation),
    (0x0F15, 0x0F17, OtherSymbol),
    (0x0F18, 0x0F19, NonspacingMark),
    (0x0F1A, 0x0F1F, OtherSymbol),
    (0x0F20, 0x0F29, DecimalNumber),
    (0x0F2A, 0x0F33, OtherNumber),
    (0x0F34, 0x0F34, OtherSymbol),
    (0x0F35, 0x0F35, NonspacingMark),
    (0x0F36, 0x0F36, OtherSymbol),
    (0x0F37, 0x0F37, NonspacingMark),
    (0x0F38, 0x0F38, OtherSymbol),
    (0x0F39, 0x0F39, NonspacingMark),
    (0x0F3A, 0x0F3A, OpenPunctuation),
    (0x0F3B, 0x0F3B, ClosePunctuation),
    (0x0F3C, 0x0F3C, OpenPunctuation),
    (0x0F3D, 0x0F3D, ClosePunctuation),
    (0x0F3E, 0x0F3F, SpacingMark),
    (0x0F40, 0x0F47, OtherLetter),
    (0x0F49, 0x0F6C, OtherLetter),
    (0x0F71, 0x0F7E, NonspacingMark),
    (0x0F7F, 0x0F7F, SpacingMark),
    (0x0F80, 0x0F84, NonspacingMark),
    (0x0F85, 0x0F85, OtherPunctuation),
    (0x0F86, 0x0F87, NonspacingMark),
    (0x0F88, 0x0F8C, OtherLetter),
    (0x0F8D, 0x0F97, NonspacingMark),
    (0x0F99, 0x0FBC, NonspacingMark),
    (0x0FBE, 0x0FC5, OtherSymbol),
    (0x0FC6, 0x0FC6, NonspacingMark),
    (0x0FC7, 0x0FCC, OtherSymbol),
    (0x0FCE, 0x0FCF, OtherSymbol),
    (0x0FD0, 0x0FD4, OtherPunctuation),
    (0x0FD5, 0x0FD8, OtherSymbol),
    (0x0FD9, 0x0FDA, OtherPunctuation),
    (0x1000, 0x102A, OtherLetter),
    (0x102B, 0x102C, SpacingMark),
    (0x102D, 0x1030, NonspacingMark),
    (0x1031, 0x1031, SpacingMark),
    (0x1032, 0x1037, NonspacingMark),
    (0x1038, 0x1038, SpacingMark),
    (0x1039, 0x103A, NonspacingMark),
    (0x103B, 0x103C, SpacingMark),
    (0x103D, 0x103E, NonspacingMark),
    (0x103F, 0x103F, OtherLetter),
    (0x1040, 0x1049, DecimalNumber),
    (0x104A, 0x104F, OtherPunctuation),
    (0x1050, 0x1055, OtherLetter),
    (0x1056, 0x1057, SpacingMark),
    (0x1058, 0x1059, NonspacingMark),
    (0x105A, 0x105D, OtherLetter),
    (0x105E, 0x1060, NonspacingMark),
    (0x1061, 0x1061, OtherLetter),
    (0x1062, 0x1064, SpacingMark),
    (0x1065, 0x1066, OtherLetter),
    (0x1067, 0x106D, SpacingMark),
    (0x106E, 0x1070, OtherLetter),
    (0x1071, 0x1074, NonspacingMark),
    (0x1075, 0x1081, OtherLetter),
    (0x1082, 0x1082, NonspacingMark),
    (0x1083, 0x1084, SpacingMark),
    (0x1085, 0x1086, NonspacingMark),
    (0x1087, 0x108C, SpacingMark),
    (0x108D, 0x108D, NonspacingMark),
    (0x108E, 0x108E, OtherLetter),
    (0x108F, 0x108F, SpacingMark),
    (0x1090, 0x1099, DecimalNumber),
    (0x109A, 0x109C, SpacingMark),
    (0x109D, 0x109D, NonspacingMark),
    (0x109E, 0x109F, OtherSymbol),
    (0x10A0, 0x10C5, UppercaseLetter),
    (0x10C7, 0x10C7, UppercaseLetter),
    (0x10CD, 0x10CD, UppercaseLetter),
    (0x10D0, 0x10FA, LowercaseLetter),
    (0x10FB, 0x10FB, OtherPunctuation),
    (0x10FC, 0x10FC, ModifierLetter),
    (0x10FD, 0x10FF, LowercaseLetter),
    (0x1100, 0x1248, OtherLetter),
    (0x124A, 0x124D, OtherLetter),
    (0x1250, 0x1256, OtherLetter),
    (0x1258, 0x1258, OtherLetter),
    (0x125A, 0x125D, OtherLetter),
    (0x1260, 0x1288, OtherLetter),
    (0x128A, 0x128D, OtherLetter),
    (0x1290, 0x12B0, OtherLetter),
    (0x12B2, 0x12B5, OtherLetter),
    (0x12B8, 0x12BE, OtherLetter),
    (0x12C0, 0x12C0, OtherLetter),
    (0x12C2, 0x12C5, OtherLetter),
    (0x12C8, 0x12D6, OtherLetter),
    (0x12D8, 0x1310, OtherLetter),
    (0x1312, 0x1315, OtherLetter),
    (0x1318, 0x135A, OtherLetter),
    (0x135D, 0x135F, NonspacingMark),
    (0x1360, 0x1368, OtherPunctuation),
    (0x1369, 0x137C, OtherNumber),
    (0x1380, 0x138F, OtherLetter),
    (0x1390, 0x1399, OtherSymbol),
    (0x13A0, 0x13F5, UppercaseLetter),
    (0x13F8, 0x13FD, LowercaseLetter),
    (0x1400, 0x1400, DashPunctuation),
    (0x1401, 0x166C, OtherLetter),
    (0x166D, 0x166D, OtherSymbol),
    (0x166E, 0x166E, OtherPunctuation),
    (0x166F, 0x167F, OtherLetter),
    (0x1680, 0x1680, SpaceSeparator),
    (0x1681, 0x169A, OtherLetter),
    (0x169B, 0x169B, OpenPunctuation),
    (0x169C, 0x169C, ClosePunctuation),
    (0x16A0, 0x16EA, OtherLetter),
    (0x16EB, 0x16ED, OtherPunctuation),
    (0x16EE, 0x16F0, LetterNumber),
    (0x16F1, 0x16F8, OtherLetter),
    (0x1700, 0x1711, OtherLetter),
    (0x1712, 0x1714, NonspacingMark),
    (0x1715, 0x1715, SpacingMark),
    (0x171F, 0x1731, OtherLetter),
    (0x1732, 0x1733, NonspacingMark),
    (0x1734, 0x1734, SpacingMark),
    (0x1735, 0x1736, OtherPunctuation),
    (0x1740, 0x1751, OtherLetter),
    (0x1752, 0x1753, NonspacingMark),
    (0x1760, 0x176C, OtherLetter),
    (0x176E, 0x1770, OtherLetter),
    (0x1772, 0x1773, NonspacingMark),
    (0x1780, 0x17B3, OtherLetter),
    (0x17B4, 0x17B5, NonspacingMark),
    (0x17B6, 0x17B6, SpacingMark),
    (0x17B7, 0x17BD, NonspacingMark),
    (0x17BE, 0x17C5, SpacingMark),
    (0x17C6, 0x17C6, NonspacingMark),
    (0x17C7, 0x17C8, SpacingMark),
    (0x17C9, 0x17D3, NonspacingMark),
    (0x17D4, 0x17D6, OtherPunctuation),
    (0x17D7, 0x17D7, ModifierLetter),
    (0x17D8, 0x17DA, OtherPunctuation),
    (0x17DB, 0x17DB, CurrencySymbol),
    (0x17DC, 0x17DC, OtherLetter),
    (0x17DD, 0x17DD, NonspacingMark),
    (0x17E0, 0x17E9, DecimalNumber),
    (0x17F0, 0x17F9, OtherNumber),
    (0x1800, 0x1805, OtherPunctuation),
    (0x1806, 0x1806, DashPunctuation),
    (0x1807, 0x180A, OtherPunctuation),
    (0x180B, 0x180D, NonspacingMark),
    (0x180E, 0x180E, Format),
    (0x180F, 0x180F, NonspacingMark),
    (0x1810, 0x1819, DecimalNumber),
    (0x1820, 0x1842, OtherLetter),
    (0x1843, 0x1843, ModifierLetter),
    (0x1844, 0x1878, OtherLetter),
    (0x1880, 0x1884, OtherLetter),
    (0x1885, 0x1886, NonspacingMark),
    (0x1887, 0x18A8, OtherLetter),
    (0x18A9, 0x18A9, NonspacingMark),
    (0x18AA, 0x18AA, OtherLetter),
    (0x18B0, 0x18F5, OtherLetter),
    (0x1900, 0x191E, OtherLetter),
    (0x1920, 0x1922, NonspacingMark),
    (0x1923, 0x1926, SpacingMark),
    (0x1927, 0x1928, NonspacingMark),
    (0x1929, 0x192B, SpacingMark),
    (0x1930, 0x1931, SpacingMark),
    (0x1932, 0x1932, NonspacingMark),
    (0x1933, 0x1938, SpacingMark),
    (0x1939, 0x193B, NonspacingMark),
    (0x1940, 0x1940, OtherSymbol),
    (0x1944, 0x1945, OtherPunctuation),
    (0x1946, 0x194F, DecimalNumber),
    (0x1950, 0x196D, OtherLetter),
    (0x1970, 0x1974, OtherLetter),
    (0x1980, 0x19AB, OtherLetter),
    (0x19B0, 0x19C9, OtherLetter),
    (0x19D0, 0x19D9, DecimalNumber),
    (0x19DA, 0x19DA, OtherNumber),
    (0x19DE, 0x19FF, OtherSymbol),
    (0x1A00, 0x1A16, OtherLetter),
    (0x1A17, 0x1A18, NonspacingMark),
    (0x1A19, 0x1A1A, SpacingMark),
    (0x1A1B, 0x1A1B, NonspacingMark),
    (0x1A1E, 0x1A1F, OtherPunctuation),
    (0x1A20, 0x1A54, OtherLetter),
    (0x1A55, 0x1A55, SpacingMark),
    (0x1A56, 0x1A56, NonspacingMark),
    (0x1A57, 0x1A57, SpacingMark),
    (0x1A58, 0x1A5E, NonspacingMark),
    (0x1A60, 0x1A60, NonspacingMark),
    (0x1A61, 0x1A61, SpacingMark),
    (0x1A62, 0x1A62, NonspacingMark),
    (0x1A63, 0x1A64, SpacingMark),
    (0x1A65, 0x1A6C, NonspacingMark),
    (0x1A6D, 0x1A72, SpacingMark),
    (0x1A73, 0x1A7C, NonspacingMark),
    (0x1A7F, 0x1A7F, NonspacingMark),
    (0x1A80, 0x1A89, DecimalNumber),
    (0x1A90, 0x1A99, DecimalNumber),
    (0x1AA0, 0x1AA6, OtherPunctuation),
    (0x1AA7, 0x1AA7, ModifierLetter),
    (0x1AA8, 0x1AAD, OtherPunctuation),
    (0x1AB0, 0x1ABD, NonspacingMark),
    (0x1ABE, 0x1ABE, EnclosingMark),
    (0x1ABF, 0x1ACE, NonspacingMark),
    (0x1B00, 0x1B03, NonspacingMark),
    (0x1B04, 0x1B04, SpacingMark),
    (0x1B05, 0x1B33, OtherLetter),
    (0x1B34, 0x1B34, NonspacingMark),
    (0x1B35, 0x1B35, SpacingMark),
    (0x1B36, 0x1B3A, NonspacingMark),
    (0x1B3B, 0x1B3B, SpacingMark),
    (0x1B3C, 0x1B3C, NonspacingMark),
    (0x1B3D, 0x1B41, SpacingMark),
    (0x1B42, 0x1B42, NonspacingMark),
    (0x1B43, 0x1B44, SpacingMark),
    (0x1B45, 0x1B4C, OtherLetter),
    (0x1B50, 0x1B59, DecimalNumber),
    (0x1B5A, 0x1B60, OtherPunctuation),
    (0x1B61, 0x1B6A, OtherSymbol),
    (0x1B6B, 0x1B73, NonspacingMark),
    (0x1B74, 0x1B7C, OtherSymbol),
    (0x1B7D, 0x1B7E, OtherPunctuation),
    (0x1B80, 0x1B81, NonspacingMark),
    (0x1B82, 0x1B82, SpacingMark),
    (0x1B83, 0x1BA0, OtherLetter),
    (0x1BA1, 0x1BA1, SpacingMark),
    (0x1BA2, 0x1BA5, NonspacingMark),
    (0x1BA6, 0x1BA7, SpacingMark),
    (0x1BA8, 0x1BA9, NonspacingMark),
    (0x1BAA, 0x1BAA, SpacingMark),
    (0x1BAB, 0x1BAD, NonspacingMark),
    (0x1BAE, 0x1BAF, OtherLetter),
    (0x1BB0, 0x1BB9, DecimalNumber),
    (0x1BBA, 0x1BE5, OtherLetter),
    (0x1BE6, 0x1BE6, NonspacingMark),
    (0x1BE7, 0x1BE7, SpacingMark),
    (0x1BE8, 0x1BE9, NonspacingMark),
    (0x1BEA, 0x1BEC, SpacingMark),
    (0x1BED, 0x1BED, NonspacingMark),
    (0x1BEE, 0x1BEE, SpacingMark),
    (0x1BEF, 0x1BF1, NonspacingMark),
    (0x1BF2, 0x1BF3, SpacingMark),
    (0x1BFC, 0x1BFF, OtherPunctuation),
    (0x1C00, 0x1C23, OtherLetter),
    (0x1C24, 0x1C2B, SpacingMark),
    (0x1C2C, 0x1C33, NonspacingMark),
    (0x1C34, 0x1C35, SpacingMark),
    (0x1C36, 0x1C37, NonspacingMark),
    (0x1C3B, 0x1C3F, OtherPunctuation),
    (0x1C40, 0x1C49, DecimalNumber),
    (0x1C4D, 0x1C4F, OtherLetter),
    (0x1C50, 0x1C59, DecimalNumber),
    (0x1C5A, 0x1C77, OtherLetter),
    (0x1C78, 0x1C7D, ModifierLetter),
    (0x1C7E, 0x1C7F, OtherPunctuation),
    (0x1C80, 0x1C88, LowercaseLetter),
    (0x1C90, 0x1CBA, UppercaseLetter),
    (0x1CBD, 0x1CBF, UppercaseLetter),
    (0x1CC0, 0x1CC7, OtherPunctuation),
    (0x1CD0, 0x1CD2, NonspacingMark),
    (0x1CD3, 0x1CD3, OtherPunctuation),
    (0x1CD4, 0x1CE0, NonspacingMark),
    (0x1CE1, 0x1CE1, SpacingMark),
    (0x1CE2, 0x1CE8, NonspacingMark),
    (0x1CE9, 0x1CEC, OtherLetter),
    (0x1CED, 0x1CED, NonspacingMark),
    (0x1CEE, 0x1CF3, OtherLetter),
    (0x1CF4, 0x1CF4, NonspacingMark),
    (0x1CF5, 0x1CF6, OtherLetter),
    (0x1CF7, 0x1CF7, SpacingMark),
    (0x1CF8, 0x1CF9, NonspacingMark),
    (0x1CFA, 0x1CFA, OtherLetter),
    (0x1D00, 0x1D2B, LowercaseLetter),
    (0x1D2C, 0x1D6A, ModifierLetter),
    (0x1D6B, 0x1D77, LowercaseLetter),
    (0x1D78, 0x1D78, ModifierLetter),
    (0x1D79, 0x1D9A, LowercaseLetter),
    (0x1D9B, 0x1DBF, ModifierLetter),
    (0x1DC0, 0x1DFF, NonspacingMark),
    (0x1E00, 0x1E00, UppercaseLetter),
    (0x1E01, 0x1E01, LowercaseLetter),
    (0x1E02, 0x1E02, UppercaseLetter),
    (0x1E03, 0x1E03, LowercaseLetter),
    (0x1E04, 0x1E04, UppercaseLetter),
    (0x1E05, 0x1E05, LowercaseLetter),
    (0x1E06, 0x1E06, UppercaseLetter),
    (0x1E07, 0x1E07, LowercaseLetter),
    (0x1E08, 0x1E08, UppercaseLetter),
    (0x1E09, 0x1E09, LowercaseLetter),
    (0x1E0A, 0x1E0A, UppercaseLetter),
    (0x1E0B, 0x1E0B, LowercaseLetter),
    (0x1E0C, 0x1E0C, UppercaseLetter),
    (0x1E0D, 0x1E0D, LowercaseLetter),
    (0x1E0E, 0x1E0E, UppercaseLetter),
    (0x1E0F, 0x1E0F, LowercaseLetter),
    (0x1E10, 0x1E10, UppercaseLetter),
    (0x1E11, 0x1E11, LowercaseLetter),
    (0x1E12, 0x1E12, UppercaseLetter),
    (0x1E13, 0x1E13, LowercaseLetter),
    (0x1E14, 0x1E14, UppercaseLetter),
    (0x1E15, 0x1E15, LowercaseLetter),
    (0x1E16, 0x1E16, UppercaseLetter),
    (0x1E17, 0x1E17, LowercaseLetter),
    (0x1E18, 0x1E18, UppercaseLetter),
    (0x1E19, 0x1E19, LowercaseLetter),
    (0x1E1A, 0x1E1A, UppercaseLetter),
    (0x1E1B, 0x1E1B, LowercaseLetter),
    (0x1E1C, 0x1E1C, UppercaseLetter),
    (0x1E1D, 0x1E1D, LowercaseLetter),
    (0x1E1E, 0x1E1E, UppercaseLetter),
    (0x1E1F, 0x1E1F, LowercaseLetter),
    (0x1E20, 0x1E20, UppercaseLetter),
    (0x1E21, 0x1E21, LowercaseLetter),
    (0x1E22, 0x1E22, UppercaseLetter),
    (0x1E23, 0x1E23, LowercaseLetter),
    (0x1E24, 0x1E24, UppercaseLetter),
    (0x1E25, 0x1E25, LowercaseLetter),
    (0x1E26, 0x1E26, UppercaseLetter),
    (0x1E27, 0x1E27, LowercaseLetter),
    (0x1E28, 0x1E28, UppercaseLetter),
    (0x1E29, 0x1E29, LowercaseLetter),
    (0x1E2A, 0x1E2A, UppercaseLetter),
    (0x1E2B, 0x1E2B, LowercaseLetter),
    (0x1E2C, 0x1E2C, UppercaseLetter),
    (0x1E2D, 0x1E2D, LowercaseLetter),
    (0x1E2E, 0x1E2E, UppercaseLetter),
    (0x1E2F, 0x1E2F, LowercaseLetter),
    (0x1E30, 0x1E30, UppercaseLetter),
    (0x1E31, 0x1E31, LowercaseLetter),
    (0x1E32, 0x1E32, UppercaseLetter),
    (0x1E33, 0x1E33, LowercaseLetter),
    (0x1E34, 0x1E34, UppercaseLetter),
    (0x1E35, 0x1E35, LowercaseLetter),
    (0x1E36, 0x1E36, UppercaseLetter),
    (0x1E37, 0x1E37, LowercaseLetter),
    (0x1E38, 0x1E38, UppercaseLetter),
    (0x1E39, 0x1E39, LowercaseLetter),
    (0x1E3A, 0x1E3A, UppercaseLetter),
    (0x1E3B, 0x1E3B, LowercaseLetter),
    (0x1E3C, 0x1E3C, UppercaseLetter),
    (0x1E3D, 0x1E3D, LowercaseLetter),
    (0x1E3E, 0x1E3E, UppercaseLetter),
    (0x1E3F, 0x1E3F, LowercaseLetter),
    (0x1E40, 0x1E40, UppercaseLetter),
    (0x1E41, 0x1E41, LowercaseLetter),
    (0x1E42, 0x1E42, UppercaseLetter),
    (0x1E43, 0x1E43, LowercaseLetter),
    (0x1E44, 0x1E44, UppercaseLetter),
    (0x1E45, 0x1E45, LowercaseLetter),
    (0x1E46, 0x1E46, UppercaseLetter),
    (0x1E47, 0x1E47, LowercaseLetter),
    (0x1E48, 0x1E48, UppercaseLetter),
    (0x1E49, 0x1E49, LowercaseLetter),
    (0x1E4A, 0x1E4A, UppercaseLetter),
    (0x1E4B, 0x1E4B, LowercaseLetter),
    (0x1E4C, 0x1E4C, UppercaseLetter),
    (0x1E4D, 0x1E4D, LowercaseLetter),
    (0x1E4E, 0x1E4E, UppercaseLetter),
    (0x1E4F, 0x1E4F, LowercaseLetter),
    (0x1E50, 0x1E50, UppercaseLetter),
    (0x1E51, 0x1E51, LowercaseLetter),
    (0x1E52, 0x1E52, UppercaseLetter),
    (0x1E53, 0x1E53, LowercaseLetter),
    (0x1E54, 0x1E54, UppercaseLetter),
    (0x1E55, 0x1E55, LowercaseLetter),
    (0x1E56, 0x1E56, UppercaseLetter),
    (0x1E57, 0x1E57, LowercaseLetter),
    (0x1E58, 0x1E58, UppercaseLetter),
    (0x1E59, 0x1E59, LowercaseLetter),
    (0x1E5A, 0x1E5A, UppercaseLetter),
    (0x1E5B, 0x1E5B, LowercaseLetter),
    (0x1E5C, 0x1E5C, UppercaseLetter),
    (0x1E5D, 0x1E5D, LowercaseLetter),
    (0x1E5E, 0x1E5E, UppercaseLetter),
    (0x1E5F, 0x1E5F, LowercaseLetter),
    (0x1E60, 0x1E60, UppercaseLetter),
    (0x1E61, 0x1E61, LowercaseLetter),
    (0x1E62, 0x1E62, UppercaseLetter),
    (0x1E63, 0x1E63, LowercaseLetter),
    (0x1E64, 0x1E64, UppercaseLetter),
    (0x1E65, 0x1E65, LowercaseLetter),
    (0x1E66, 0x1E66, UppercaseLetter),
    (0x1E67, 0x1E67, LowercaseLetter),
    (0x1E68, 0x1E68, UppercaseLetter),
    (0x1E69, 0x1E69, LowercaseLetter),
    (0x1E6A, 0x1E6A, UppercaseLetter),
    (0x1E6B, 0x1E6B, LowercaseLetter),
    (0x1E6C, 0x1E6C, UppercaseLetter),
    (0x1E6D, 0x1E6D, LowercaseLetter),
    (0x1E6E, 0x1E6E, UppercaseLetter),
    (0x1E6F, 0x1E6F, LowercaseLetter),
    (0x1E70, 0x1E70, UppercaseLetter),
    (0x1E71, 0x1E71, LowercaseLetter),
    (0x1E72, 0x1E72, UppercaseLetter),
    (0x1E73, 0x1E73, LowercaseLetter),
    (0x1E74, 0x1E74, UppercaseLetter),
    (0x1E75, 0x1E75, LowercaseLetter),
    (0x1E76, 0x1E76, UppercaseLetter),
    (0x1E77, 0x1E77, LowercaseLetter),
    (0x1E78, 0x1E78, UppercaseLetter),
    (0x1E79, 0x1E79, LowercaseLetter),
    (0x1E7A, 0x1E7A, UppercaseLetter),
    (0x1E7B, 0x1E7B, LowercaseLetter),
    (0x1E7C, 0x1E7C, UppercaseLetter),
    (0x1E7D, 0x1E7D, LowercaseLetter),
    (0x1E7E, 0x1E7E, UppercaseLetter),
    (0x1E7F, 0x1E7F, LowercaseLetter),
    (0x1E80, 0x1E80, UppercaseLetter),
    (0x1E81, 0x1E81, LowercaseLetter),
    (0x1E82, 0x1E82, UppercaseLetter),
    (0x1E83, 0x1E83, LowercaseLetter),
    (0x1E84, 0x1E84, UppercaseLetter),
    (0x1E85, 0x1E85, LowercaseLetter),
    (0x1E86, 0x1E86, UppercaseLetter),
    (0x1E87, 0x1E87, LowercaseLetter),
    (0x1E88, 0x1E88, UppercaseLetter),
    (0x1E89, 0x1E89, LowercaseLetter),
    (0x1E8A, 0x1E8A, UppercaseLetter),
    (0x1E8B, 0x1E8B, LowercaseLetter),
    (0x1E8C, 0x1E8C, UppercaseLetter),
    (0x1E8D, 0x1E8D, LowercaseLetter),
    (0x1E8E, 0x1E8E, UppercaseLetter),
    (0x1E8F, 0x1E8F, LowercaseLetter),
    (0x1E90, 0x1E90, UppercaseLetter),
    (0x1E91, 0x1E91, LowercaseLetter),
    (0x1E92, 0x1E92, UppercaseLetter),
    (0x1E93, 0x1E93, LowercaseLetter),
    (0x1E94, 0x1E94, UppercaseLetter),
    (0x1E95, 0x1E9D, LowercaseLetter),
    (0x1E9E, 0x1E9E, UppercaseLetter),
    (0x1E9F, 0x1E9F, LowercaseLetter),
    (0x1EA0, 0x1EA0, UppercaseLetter),
    (0x1EA1, 0x1EA1, LowercaseLetter),
    (0x1EA2, 0x1EA2, UppercaseLetter),
    (0x1EA3, 0x1EA3, LowercaseLetter),
    (0x1EA4, 0x1EA4, UppercaseLetter),
    (0x1EA5, 0x1EA5, LowercaseLetter),
    (0x1EA6, 0x1EA6, UppercaseLetter),
    (0x1EA7, 0x1EA7, LowercaseLetter),
    (0x1EA8, 0x1EA8, UppercaseLetter),
    (0x1EA9, 0x1EA9, LowercaseLetter),
    (0x1EAA, 0x1EAA, UppercaseLetter),
    (0x1EAB, 0x1EAB, LowercaseLetter),
    (0x1EAC, 0x1EAC, UppercaseLetter),
    (0x1EAD, 0x1EAD, LowercaseLetter),
    (0x1EAE, 0x1EAE, UppercaseLetter),
    (0x1EAF, 0x1EAF, LowercaseLetter),
    (0x1EB0, 0x1EB0, UppercaseLetter),
    (0x1EB1, 0x1EB1, LowercaseLetter),
    (0x1EB2, 0x1EB2, UppercaseLetter),
    (0x1EB3, 0x1EB3, LowercaseLetter),
    (0x1EB4, 0x1EB4, UppercaseLetter),
    (0x1EB5, 0x1EB5, LowercaseLetter),
    (0x1EB6, 0x1EB6, UppercaseLetter),
    (0x1EB7, 0x1EB7, LowercaseLetter),
    (0x1EB8, 0x1EB8, UppercaseLetter),
    (0x1EB9, 0x1EB9, LowercaseLetter),
    (0x1EBA, 0x1EBA, UppercaseLetter),
    (0x1EBB, 0x1EBB, LowercaseLetter),
    (0x1EBC, 0x1EBC, UppercaseLetter),
    (0x1EBD, 0x1EBD, LowercaseLetter),
    (0x1EBE, 0x1EBE, UppercaseLetter),
    (0x1EBF, 0x1EBF, LowercaseLetter),
    (0x1EC0, 0x1EC0, UppercaseLetter),
    (0x1EC1, 0x1EC1, LowercaseLetter),
    (0x1EC2, 0x1EC2, UppercaseLetter),
    (0x1EC3, 0x1EC3, LowercaseLetter),
    (0x1EC4, 0x1EC4, UppercaseLetter),
    (0x1EC5, 0x1EC5, LowercaseLetter),
    (0x1EC6, 0x1EC6, UppercaseLetter),
    (0x1EC7, 0x1EC7, LowercaseLetter),
    (0x1EC8, 0x1EC8, UppercaseLetter),
    (0x1EC9, 0x1EC9, LowercaseLetter),
    (0x1ECA, 0x1ECA, UppercaseLetter),
    (0x1ECB, 0x1ECB, LowercaseLetter),
    (0x1ECC, 0x1ECC, UppercaseLetter),
    (0x1ECD, 0x1ECD, LowercaseLetter),
    (0x1ECE, 0x1ECE, UppercaseLetter),
    (0x1ECF, 0x1ECF, LowercaseLetter),
    (0x1ED0, 0x1ED0, UppercaseLetter),
    (0x1ED1, 0x1ED1, LowercaseLetter),
    (0x1ED2, 0x1ED2, UppercaseLetter),
    (0x1ED3, 0x1ED3, LowercaseLetter),
    (0x1ED4, 0x1ED4, UppercaseLetter),
    (0x1ED5, 0x1ED5, LowercaseLetter),
    (0x1ED6, 0x1ED6, UppercaseLetter),
    (0x1ED7, 0x1ED7, LowercaseLetter),
    (0x1ED8, 0x1ED8, UppercaseLetter),
    (0x1ED9, 0x1ED9, LowercaseLetter),
    (0x1EDA, 0x1EDA, UppercaseLetter),
    (0x1EDB, 0x1EDB, LowercaseLetter),
    (0x1EDC, 0x1EDC, UppercaseLetter),
    (0x1EDD, 0x1EDD, LowercaseLetter),
    (0x1EDE, 0x1EDE, UppercaseLetter),
    (0x1EDF, 0x1EDF, LowercaseLetter),
    (0x1EE0, 0x1EE0, UppercaseLetter),
    (0x1EE1, 0x1EE1, LowercaseLetter),
    (0x1EE2, 0x1EE2, UppercaseLetter),
    (0x1EE3, 0x1EE3, LowercaseLetter),
    (0x1EE4, 0x1EE4, UppercaseLetter),
    (0x1EE5, 0x1EE5, LowercaseLetter),
    (0x1EE6, 0x1EE6, UppercaseLetter),
    (0x1EE7, 0x1EE7, LowercaseLetter),
    (0x1EE8, 0x1EE8, UppercaseLetter),
    (0x1EE9, 0x1EE9, LowercaseLetter),
    (0x1EEA, 0x1EEA, UppercaseLetter),
    (0x1EEB, 0x1EEB, LowercaseLetter),
    (0x1EEC, 0x1EEC, UppercaseLetter),
    (0x1EED, 0x1EED, LowercaseLetter),
    (0x1EEE, 0x1EEE, UppercaseLetter),
    (0x1EEF, 0x1EEF, LowercaseLetter),
    (0x1EF0, 0x1EF0, UppercaseLetter),
    (0x1EF1, 0x1EF1, LowercaseLetter),
    (0x1EF2, 0x1EF2, UppercaseLetter),
    (0x1EF3, 0x1EF3, LowercaseLetter),
    (0x1EF4, 0x1EF4, UppercaseLetter),
    (0x1EF5, 0x1EF5, LowercaseLetter),
    (0x1EF6, 0x1EF6, UppercaseLetter),
    (0x1EF7, 0x1EF7, LowercaseLetter),
    (0x1EF8, 0x1EF8, UppercaseLetter),
    (0x1EF9, 0x1EF9, LowercaseLetter),
    (0x1EFA, 0x1EFA, UppercaseLetter),
    (0x1EFB, 0x1EFB, LowercaseLetter),
    (0x1EFC, 0x1EFC, UppercaseLetter),
    (0x1EFD, 0x1EFD, LowercaseLetter),
    (0x1EFE, 0x1EFE, UppercaseLetter),
    (0x1EFF, 0x1F07, LowercaseLetter),
    (0x1F08, 0x1F0F, UppercaseLetter),
    (0x1F10, 0x1F15, LowercaseLetter),
    (0x1F18, 0x1F1D, UppercaseLetter),
    (0x1F20, 0x1F27, LowercaseLetter),
    (0x1F28, 0x1F2F, UppercaseLetter),
    (0x1F30, 0x1F37, LowercaseLetter),
    (0x1F38, 0x1F3F, UppercaseLetter),
    (0x1F40, 0x1F45, LowercaseLetter),
    (0x1F48, 0x1F4D, UppercaseLetter),
    (0x1F50, 0x1F57, LowercaseLetter),
    (0x1F59, 0x1F59, UppercaseLetter),
    (0x1F5B, 0x1F5B, UppercaseLetter),
    (0x1F5D, 0x1F5D, UppercaseLetter),
    (0x1F5F, 0x1F5F, UppercaseLetter),
    (0x1F60, 0x1F67, LowercaseLetter),
    (0x1F68, 0x1F6F, UppercaseLetter),
    (0x1F70, 0x1F7D, LowercaseLetter),
    (0x1F80, 0x1F87, LowercaseLetter),
    (0x1F88, 0x1F8F, TitlecaseLetter),
    (0x1F90, 0x1F97, LowercaseLetter),
    (0x1F98, 0x1F9F, TitlecaseLetter),
    (0x1FA0, 0x1FA7, LowercaseLetter),
    (0x1FA8, 0x1FAF, TitlecaseLetter),
    (0x1FB0, 0x1FB4, LowercaseLetter),
    (0x1FB6, 0x1FB7, LowercaseLetter),
    (0x1FB8, 0x1FBB, UppercaseLetter),
    (0x1FBC, 0x1FBC, TitlecaseLetter),
    (0x1FBD, 0x1FBD, ModifierSymbol),
    (0x1FBE, 0x1FBE, LowercaseLetter),
    (0x1FBF, 0x1FC1, ModifierSymbol),
    (0x1FC2, 0x1FC4, LowercaseLetter),
    (0x1FC6, 0x1FC7, LowercaseLetter),
    (0x1FC8, 0x1FCB, UppercaseLetter),
    (0x1FCC, 0x1FCC, TitlecaseLetter),
    (0x1FCD, 0x1FCF, ModifierSymbol),
    (0x1FD0, 0x1FD3, LowercaseLetter),
    (0x1FD6, 0x1FD7, LowercaseLetter),
    (0x1FD8, 0x1FDB, UppercaseLetter),
    (0x1FDD, 0x1FDF, ModifierSymbol),
    (0x1FE0, 0x1FE7, LowercaseLetter),
    (0x1FE8, 0x1FEC, UppercaseLetter),
    (0x1FED, 0x1FEF, ModifierSymbol),
    (0x1FF2, 0x1FF4, LowercaseLetter),
    (0x1FF6, 0x1FF7, LowercaseLetter),
    (0x1FF8, 0x1FFB, UppercaseLetter),
    (0x1FFC, 0x1FFC, TitlecaseLetter),
    (0x1FFD, 0x1FFE, ModifierSymbol),
    (0x2000, 0x200A, SpaceSeparator),
    (0x200B, 0x200F, Format),
    (0x2010, 0x2015, DashPunctuation),
    (0x2016, 0x2017, OtherPunctuation),
    (0x2018, 0x2018, InitialPunctuation),
    (0x2019, 0x2019, FinalPunctuation),
    (0x201A, 0x201A, OpenPunctuation),
    (0x201B, 0x201C, InitialPunctuation),
    (0x201D, 0x201D, FinalPunctuation),
    (0x201E, 0x201E, OpenPunctuation),
    (0x201F, 0x201F, InitialPunctuation),
    (0x2020, 0x2027, OtherPunctuation),
    (0x2028, 0x2028, LineSeparator),
    (0x2029, 0x2029, ParagraphSeparator),
    (0x202A, 0x202E, Format),
    (0x202F, 0x202F, SpaceSeparator),
    (0x2030, 0x2038, OtherPunctuation),
    (0x2039, 0x2039, InitialPunctuation),
    (0x203A, 0x203A, FinalPunctuation),
    (0x203B, 0x203E, OtherPunctuation),
    (0x203F, 0x2040, ConnectorPunctuation),
    (0x2041, 0x2043, OtherPunctuation),
    (0x2044, 0x2044, MathSymbol),
    (0x2045, 0x2045, OpenPunctuation),
    (0x2046, 0x2046, ClosePunctuation),
    (0x2047, 0x2051, OtherPunctuation),
    (0x2052, 0x2052, MathSymbol),
    (0x2053, 0x2053, OtherPunctuation),
    (0x2054, 0x2054, ConnectorPunctuation),
    (0x2055, 0x205E, OtherPunctuation),
    (0x205F, 0x205F, SpaceSeparator),
    (0x2060, 0x2064, Format),
    (0x2066, 0x206F, Format),
    (0x2070, 0x2070, OtherNumber),
    (0x2071, 0x2071, ModifierLetter),
    (0x2074, 0x2079, OtherNumber),
    (0x207A, 0x207C, MathSymbol),
    (0x207D, 0x207D, OpenPunctuation),
    (0x207E, 0x207E, ClosePunctuation),
    (0x207F, 0x207F, ModifierLetter),
    (0x2080, 0x2089, OtherNumber),
    (0x208A, 0x208C, MathSymbol),
    (0x208D, 0x208D, OpenPunctuation),
    (0x208E, 0x208E, ClosePunctuation),
    (0x2090, 0x209C, ModifierLetter),
    (0x20A0, 0x20C0, CurrencySymbol),
    (0x20D0, 0x20DC, NonspacingMark),
    (0x20DD, 0x20E0, EnclosingMark),
    (0x20E1, 0x20E1, NonspacingMark),
    (0x20E2, 0x20E4, EnclosingMark),
    (0x20E5, 0x20F0, NonspacingMark),
    (0x2100, 0x2101, OtherSymbol),
    (0x2102, 0x2102, UppercaseLetter),
    (0x2103, 0x2106, OtherSymbol),
    (0x2107, 0x2107, UppercaseLetter),
    (0x2108, 0x2109, OtherSymbol),
    (0x210A, 0x210A, LowercaseLetter),
    (0x210B, 0x210D, UppercaseLetter),
    (0x210E, 0x210F, LowercaseLetter),
    (0x2110, 0x2112, UppercaseLetter),
    (0x2113, 0x2113, LowercaseLetter),
    (0x2114, 0x2114, OtherSymbol),
    (0x2115, 0x2115, UppercaseLetter),
    (0x2116, 0x2117, OtherSymbol),
    (0x2118, 0x2118, MathSymbol),
    (0x2119, 0x211D, UppercaseLetter),
    (0x211E, 0x2123, OtherSymbol),
    (0x2124, 0x2124, UppercaseLetter),
    (0x2125, 0x2125, OtherSymbol),
    (0x2126, 0x2126, UppercaseLetter),
    (0x2127, 0x2127, OtherSymbol),
    (0x2128, 0x2128, UppercaseLetter),
    (0x2129, 0x2129, OtherSymbol),
    (0x212A, 0x212D, UppercaseLetter),
    (0x212E, 0x212E, OtherSymbol),
    (0x212F, 0x212F, LowercaseLetter),
    (0x2130, 0x2133, UppercaseLetter),
    (0x2134, 0x2134, LowercaseLetter),
    (0x2135, 0x2138, OtherLetter),
    (0x2139, 0x2139, LowercaseLetter),
    (0x213A, 0x213B, OtherSymbol),
    (0x213C, 0x213D, LowercaseLetter),
    (0x213E, 0x213F, UppercaseLetter),
    (0x2140, 0x2144, MathSymbol),
    (0x2145, 0x2145, UppercaseLetter),
    (0x2146, 0x2149, LowercaseLetter),
    (0x214A, 0x214A, OtherSymbol),
    (0x214B, 0x214B, MathSymbol),
    (0x214C, 0x214D, OtherSymbol),
    (0x214E, 0x214E, LowercaseLetter),
    (0x214F, 0x214F, OtherSymbol),
    (0x2150, 0x215F, OtherNumber),
    (0x2160, 0x2182, LetterNumber),
    (0x2183, 0x2183, UppercaseLetter),
    (0x2184, 0x2184, LowercaseLetter),
    (0x2185, 0x2188, LetterNumber),
    (0x2189, 0x2189, OtherNumber),
    (0x218A, 0x218B, OtherSymbol),
    (0x2190, 0x2194, MathSymbol),
    (0x2195, 0x2199, OtherSymbol),
    (0x219A, 0x219B, MathSymbol),
    (0x219C, 0x219F, OtherSymbol),
    (0x21A0, 0x21A0, MathSymbol),
    (0x21A1, 0x21A2, OtherSymbol),
    (0x21A3, 0x21A3, MathSymbol),
    (0x21A4, 0x21A5, OtherSymbol),
    (0x21A6, 0x21A6, MathSymbol),
    (0x21A7, 0x21AD, OtherSymbol),
    (0x21AE, 0x21AE, MathSymbol),
    (0x21AF, 0x21CD, OtherSymbol),
    (0x21CE, 0x21CF, MathSymbol),
    (0x21D0, 0x21D1, OtherSymbol),
    (0x21D2, 0x21D2, MathSymbol),
    (0x21D3, 0x21D3, OtherSymbol),
    (0x21D4, 0x21D4, MathSymbol),
    (0x21D5, 0x21F3, OtherSymbol),
    (0x21F4, 0x22FF, MathSymbol),
    (0x2300, 0x2307, OtherSymbol),
    (0x2308, 0x2308, OpenPunctuation),
    (0x2309, 0x2309, ClosePunctuation),
    (0x230A, 0x230A, OpenPunctuation),
    (0x230B, 0x230B, ClosePunctuation),
    (0x230C, 0x231F, OtherSymbol),
    (0x2320, 0x2321, MathSymbol),
    (0x2322, 0x2328, OtherSymbol),
    (0x2329, 0x2329, OpenPunctuation),
    (0x232A, 0x232A, ClosePunctuation),
    (0x232B, 0x237B, OtherSymbol),
    (0x237C, 0x237C, MathSymbol),
    (0x237D, 0x239A, OtherSymbol),
    (0x239B, 0x23B3, MathSymbol),
    (0x23B4, 0x23DB, OtherSymbol),
    (0x23DC, 0x23E1, MathSymbol),
    (0x23E2, 0x2426, OtherSymbol),
    (0x2440, 0x244A, OtherSymbol),
    (0x2460, 0x249B, OtherNumber),
    (0x249C, 0x24E9, OtherSymbol),
    (0x24EA, 0x24FF, OtherNumber),
    (0x2500, 0x25B6, OtherSymbol),
    (0x25B7, 0x25B7, MathSymbol),
    (0x25B8, 0x25C0, OtherSymbol),
    (0x25C1, 0x25C1, MathSymbol),
    (0x25C2, 0x25F7, OtherSymbol),
    (0x25F8, 0x25FF, MathSymbol),
    (0x2600, 0x266E, OtherSymbol),
    (0x266F, 0x266F, MathSymbol),
    (0x2670, 0x2767, OtherSymbol),
    (0x2768, 0x2768, OpenPunctuation),
    (0x2769, 0x2769, ClosePunctuation),
    (0x276A, 0x276A, OpenPunctuation),
    (0x276B, 0x276B, ClosePunctuation),
    (0x276C, 0x276C, OpenPunctuation),
    (0x276D, 0x276D, ClosePunctuation),
    (0x276E, 0x276E, OpenPunctuation),
    (0x276F, 0x276F, ClosePunctuation),
    (0x2770, 0x2770, OpenPunctuation),
    (0x2771, 0x2771, ClosePunctuation),
    (0x2772, 0x2772, OpenPunctuation),
    (0x2773, 0x2773, ClosePunctuation),
    (0x2774, 0x2774, OpenPunctuation),
    (0x2775, 0x2775, ClosePunctuation),
    (0x2776, 0x2793, OtherNumber),
    (0x2794, 0x27BF, OtherSymbol),
    (0x27C0, 0x27C4, MathSymbol),
    (0x27C5, 0x27C5, OpenPunctuation),
    (0x27C6, 0x27C6, ClosePunctuation),
    (0x27C7, 0x27E5, MathSymbol),
    (0x27E6, 0x27E6, OpenPunctuation),
    (0x27E7, 0x27E7, ClosePunctuation),
    (0x27E8, 0x27E8, OpenPunctuation),
    (0x27E9, 0x27E9, ClosePunctuation),
    (0x27EA, 0x27EA, OpenPunctuation),
    (0x27EB, 0x27EB, ClosePunctuation),
    (0x27EC, 0x27EC, OpenPunctuation),
    (0x27ED, 0x27ED, ClosePunctuation),
    (0x27EE, 0x27EE, OpenPunctuation),
    (0x27EF, 0x27EF, ClosePunctuation),
    (0x27F0, 0x27FF, MathSymbol),
    (0x2800, 0x28FF, OtherSymbol),
    (0x2900, 0x2982, MathSymbol),
    (0x2983, 0x2983, OpenPunctuation),
    (0x2984, 0x2984, ClosePunctuation),
    (0x2985, 0x2985, OpenPunctuation),
    (0x2986, 0x2986, ClosePunctuation),
    (0x2987, 0x2987, OpenPunctuation),
    (0x2988, 0x2988, ClosePunctuation),
    (0x2989, 0x2989, OpenPunctuation),
    (0x298A, 0x298A, ClosePunctuation),
    (0x298B, 0x298B, OpenPunctuation),
    (0x298C, 0x298C, ClosePunctuation),
    (0x298D, 0x298D, OpenPunctuation),
    (0x298E, 0x298E, ClosePunctuation),
    (0x298F, 0x298F, OpenPunctuation),
    (0x2990, 0x2990, ClosePunctuation),
    (0x2991, 0x2991, OpenPunctuation),
    (0x2992, 0x2992, ClosePunctuation),
    (0x2993, 0x2993, OpenPunctuation),
    (0x2994, 0x2994, ClosePunctuation),
    (0x2995, 0x2995, OpenPunctuation),
    (0x2996, 0x2996, ClosePunctuation),
    (0x2997, 0x2997, OpenPunctuation),
    (0x2998, 0x2998, ClosePunctuation),
    (0x2999, 0x29D7, MathSymbol),
    (0x29D8, 0x29D8, OpenPunctuation),
    (0x29D9, 0x29D9, ClosePunctuation),
    (0x29DA, 0x29DA, OpenPunctuation),
    (0x29DB, 0x29DB, ClosePunctuation),
    (0x29DC, 0x29FB, MathSymbol),
    (0x29FC, 0x29FC, OpenPunctuation),
    (0x29FD, 0x29FD, ClosePunctuation),
    (0x29FE, 0x2AFF, MathSymbol),
    (0x2B00, 0x2B2F, OtherSymbol),
    (0x2B30, 0x2B44, MathSymbol),
    (0x2B45, 0x2B46, OtherSymbol),
    (0x2B47, 0x2B4C, MathSymbol),
    (0x2B4D, 0x2B73, OtherSymbol),
    (0x2B76, 0x2B95, OtherSymbol),
    (0x2B97, 0x2BFF, OtherSymbol),
    (0x2C00, 0x2C2F, UppercaseLetter),
    (0x2C30, 0x2C5F, LowercaseLetter),
    (0x2C60, 0x2C60, UppercaseLetter),
    (0x2C61, 0x2C61, LowercaseLetter),
    (0x2C62, 0x2C64, UppercaseLetter),
    (0x2C65, 0x2C66, LowercaseLetter),
    (0x2C67, 0x2C67, UppercaseLetter),
    (0x2C68, 0x2C68, LowercaseLetter),
    (0x2C69, 0x2C69, UppercaseLetter),
    (0x2C6A, 0x2C6A, LowercaseLetter),
    (0x2C6B, 0x2C6B, UppercaseLetter),
    (0x2C6C, 0x2C6C, LowercaseLetter),
    (0x2C6D, 0x2C70, UppercaseLetter),
    (0x2C71, 0x2C71, LowercaseLetter),
    (0x2C72, 0x2C72, UppercaseLetter),
    (0x2C73, 0x2C74, LowercaseLetter),
    (0x2C75, 0x2C75, UppercaseLetter),
    (0x2C76, 0x2C7B, LowercaseLetter),
    (0x2C7C, 0x2C7D, ModifierLetter),
    (0x2C7E, 0x2C80, UppercaseLetter),
    (0x2C81, 0x2C81, LowercaseLetter),
    (0x2C82, 0x2C82, UppercaseLetter),
    (0x2C83, 0x2C83, LowercaseLetter),
    (0x2C84, 0x2C84, UppercaseLetter),
    (0x2C85, 0x2C85, LowercaseLetter),
    (0x2C86, 0x2C86, UppercaseLetter),
    (0x2C87, 0x2C87, LowercaseLetter),
    (0x2C88, 0x2C88, UppercaseLetter),
    (0x2C89, 0x2C89, LowercaseLetter),
    (0x2C8A, 0x2C8A, UppercaseLetter),
    (0x2C8B, 0x2C8B, LowercaseLetter),
    (0x2C8C, 0x2C8C, UppercaseLetter),
    (0x2C8D, 0x2C8D, LowercaseLetter),
    (0x2C8E, 0x2C8E, UppercaseLetter),
    (0x2C8F, 0x2C8F, LowercaseLetter),
    (0x2C90, 0x2C90, UppercaseLetter),
    (0x2C91, 0x2C91, LowercaseLetter),
    (0x2C92, 0x2C92, UppercaseLetter),
    (0x2C93, 0x2C93, LowercaseLetter),
    (0x2C94, 0x2C94, UppercaseLetter),
    (0x2C95, 0x2C95, LowercaseLetter),
    (0x2C96, 0x2C96, UppercaseLetter),
    (0x2C97, 0x2C97, LowercaseLetter),
    (0x2C98, 0x2C98, UppercaseLetter),
    (0x2C99, 0x2C99, LowercaseLetter),
    (0x2C9A, 0x2C9A, UppercaseLetter),
    (0x2C9B, 0x2C9B, LowercaseLetter),
    (0x2C9C, 0x2C9C, UppercaseLetter),
    (0x2C9D, 0x2C9D, LowercaseLetter),
    (0x2C9E, 0x2C9E, UppercaseLetter),
    (0x2C9F, 0x2C9F, LowercaseLetter),
    (0x2CA0, 0x2CA0, UppercaseLetter),
    (0x2CA1, 0x2CA1, LowercaseLetter),
    (0x2CA2, 0x2CA2, UppercaseLetter),
    (0x2CA3, 0x2CA3, LowercaseLetter),
    (0x2CA4, 0x2CA4, UppercaseLetter),
    (0x2CA5, 0x2CA5, LowercaseLetter),
    (0x2CA6, 0x2CA6, UppercaseLetter),
    (0x2CA7, 0x2CA7, LowercaseLetter),
    (0x2CA8, 0x2CA8, UppercaseLetter),
    (0x2CA9, 0x2CA9, LowercaseLetter),
    (0x2CAA, 0x2CAA, UppercaseLetter),
    (0x2CAB, 0x2CAB, LowercaseLetter),
    (0x2CAC, 0x2CAC, UppercaseLetter),
    (0x2CAD, 0x2CAD, LowercaseLetter),
    (0x2CAE, 0x2CAE, UppercaseLetter),
    (0x2CAF, 0x2CAF, LowercaseLetter),
    (0x2CB0, 0x2CB0, UppercaseLetter),
    (0x2CB1, 0x2CB1, LowercaseLetter),
    (0x2CB2, 0x2CB2, UppercaseLetter),
    (0x2CB3, 0x2CB3, LowercaseLetter),
    (0x2CB4, 0x2CB4, UppercaseLetter),
    (0x2CB5, 0x2CB5, LowercaseLetter),
    (0x2CB6, 0x2CB6, UppercaseLetter),
    (0x2CB7, 0x2CB7, LowercaseLetter),
    (0x2CB8, 0x2CB8, UppercaseLetter),
    (0x2CB9, 0x2CB9, LowercaseLetter),
    (0x2CBA, 0x2CBA, UppercaseLetter),
    (0x2CBB, 0x2CBB, LowercaseLetter),
    (0x2CBC, 0x2CBC, UppercaseLetter),
    (0x2CBD, 0x2CBD, LowercaseLetter),
    (0x2CBE, 0x2CBE, UppercaseLetter),
    (0x2CBF, 0x2CBF, LowercaseLetter),
    (0x2CC0, 0x2CC0, UppercaseLetter),
    (0x2CC1, 0x2CC1, LowercaseLetter),
    (0x2CC2, 0x2CC2, UppercaseLetter),
    (0x2CC3, 0x2CC3, LowercaseLetter),
    (0x2CC4, 0x2CC4, UppercaseLetter),
    (0x2CC5, 0x2CC5, LowercaseLetter),
    (0x2CC6, 0x2CC6, UppercaseLetter),
    (0x2CC7, 0x2CC7, LowercaseLetter),
    (0x2CC8, 0x2CC8, UppercaseLetter),
    (0x2CC9, 0x2CC9, LowercaseLetter),
    (0x2CCA, 0x2CCA, UppercaseLetter),
    (0x2CCB, 0x2CCB, LowercaseLetter),
    (0x2CCC, 0x2CCC, UppercaseLetter),
    (0x2CCD, 0x2CCD, LowercaseLetter),
    (0x2CCE, 0x2CCE, UppercaseLetter),
    (0x2CCF, 0x2CCF, LowercaseLetter),
    (0x2CD0, 0x2CD0, UppercaseLetter),
    (0x2CD1, 0x2CD1, LowercaseLetter),
    (0x2CD2, 0x2CD2, UppercaseLetter),
    (0x2CD3, 0x2CD3, LowercaseLetter),
    (0x2CD4, 0x2CD4, UppercaseLetter),
    (0x2CD5, 0x2CD5, LowercaseLetter),
    (0x2CD6, 0x2CD6, UppercaseLetter),
    (0x2CD7, 0x2CD7, LowercaseLetter),
    (0x2CD8, 0x2CD8, UppercaseLetter),
    (0x2CD9, 0x2CD9, LowercaseLetter),
    (0x2CDA, 0x2CDA, UppercaseLetter),
    (0x2CDB, 0x2CDB, LowercaseLetter),
    (0x2CDC, 0x2CDC, UppercaseLetter),
    (0x2CDD, 0x2CDD, LowercaseLetter),
    (0x2CDE, 0x2CDE, UppercaseLetter),
    (0x2CDF, 0x2CDF, LowercaseLetter),
    (0x2CE0, 0x2CE0, UppercaseLetter),
    (0x2CE1, 0x2CE1, LowercaseLetter),
    (0x2CE2, 0x2CE2, UppercaseLetter),
    (0x2CE3, 0x2CE4, LowercaseLetter),
    (0x2CE5, 0x2CEA, OtherSymbol),
    (0x2CEB, 0x2CEB, UppercaseLetter),
    (0x2CEC, 0x2CEC, LowercaseLetter),
    (0x2CED, 0x2CED, UppercaseLetter),
    (0x2CEE, 0x2CEE, LowercaseLetter),
    (0x2CEF, 0x2CF1, NonspacingMark),
    (0x2CF2, 0x2CF2, UppercaseLetter),
    (0x2CF3, 0x2CF3, LowercaseLetter),
    (0x2CF9, 0x2CFC, OtherPunctuation),
    (0x2CFD, 0x2CFD, OtherNumber),
    (0x2CFE, 0x2CFF, OtherPunctuation),
    (0x2D00, 0x2D25, LowercaseLetter),
    (0x2D27, 0x2D27, LowercaseLetter),
    (0x2D2D, 0x2D2D, LowercaseLetter),
    (0x2D30, 0x2D67, OtherLetter),
    (0x2D6F, 0x2D6F, ModifierLetter),
    (0x2D70, 0x2D70, OtherPunctuation),
    (0x2D7F, 0x2D7F, NonspacingMark),
    (0x2D80, 0x2D96, OtherLetter),
    (0x2DA0, 0x2DA6, OtherLetter),
    (0x2DA8, 0x2DAE, OtherLetter),
    (0x2DB0, 0x2DB6, OtherLetter),
    (0x2DB8, 0x2DBE, OtherLetter),
    (0x2DC0, 0x2DC6, OtherLetter),
    (0x2DC8, 0x2DCE, OtherLetter),
    (0x2DD0, 0x2DD6, OtherLetter),
    (0x2DD8, 0x2DDE, OtherLetter),
    (0x2DE0, 0x2DFF, NonspacingMark),
    (0x2E00, 0x2E01, OtherPunctuation),
    (0x2E02, 0x2E02, InitialPunctuation),
    (0x2E03, 0x2E03, FinalPunctuation),
    (0x2E04, 0x2E04, InitialPunctuation),
    (0x2E05, 0x2E05, FinalPunctuation),
    (0x2E06, 0x2E08, OtherPunctuation),
    (0x2E09, 0x2E09, InitialPunctuation),
    (0x2E0A, 0x2E0A, FinalPunctuation),
    (0x2E0B, 0x2E0B, OtherPunctuation),
    (0x2E0C, 0x2E0C, InitialPunctuation),
    (0x2E0D, 0x2E0D, FinalPunctuation),
    (0x2E0E, 0x2E16, OtherPunctuation),
    (0x2E17, 0x2E17, DashPunctuation),
    (0x2E18, 0x2E19, OtherPunctuation),
    (0x2E1A, 0x2E1A, DashPunctuation),
    (0x2E1B, 0x2E1B, OtherPunctuation),
    (0x2E1C, 0x2E1C, InitialPunctuation),
    (0x2E1D, 0x2E1D, FinalPunctuation),
    (0x2E1E, 0x2E1F, OtherPunctuation),
    (0x2E20, 0x2E20, InitialPunctuation),
    (0x2E21, 0x2E21, FinalPunctuation),
    (0x2E22, 0x2E22, OpenPunctuation),
    (0x2E23, 0x2E23, ClosePunctuation),
    (0x2E24, 0x2E24, OpenPunctuation),
    (0x2E25, 0x2E25, ClosePunctuation),
    (0x2E26, 0x2E26, OpenPunctuation),
    (0x2E27, 0x2E27, ClosePunctuation),
    (0x2E28, 0x2E28, OpenPunctuation),
    (0x2E29, 0x2E29, ClosePunctuation),
    (0x2E2A, 0x2E2E, OtherPunctuation),
    (0x2E2F, 0x2E2F, ModifierLetter),
    (0x2E30, 0x2E39, OtherPunctuation),
    (0x2E3A, 0x2E3B, DashPunctuation),
    (0x2E3C, 0x2E3F, OtherPunctuation),
    (0x2E40, 0x2E40, DashPunctuation),
    (0x2E41, 0x2E41, OtherPunctuation),
    (0x2E42, 0x2E42, OpenPunctuation),
    (0x2E43, 0x2E4F, OtherPunctuation),
    (0x2E50, 0x2E51, OtherSymbol),
    (0x2E52, 0x2E54, OtherPunctuation),
    (0x2E55, 0x2E55, OpenPunctuation),
    (0x2E56, 0x2E56, ClosePunctuation),
    (0x2E57, 0x2E57, OpenPunctuation),
    (0x2E58, 0x2E58, ClosePunctuation),
    (0x2E59, 0x2E59, OpenPunctuation),
    (0x2E5A, 0x2E5A, ClosePunctuation),
    (0x2E5B, 0x2E5B, OpenPunctuation),
    (0x2E5C, 0x2E5C, ClosePunctuation),
    (0x2E5D, 0x2E5D, DashPunctuation),
    (0x2E80, 0x2E99, OtherSymbol),
    (0x2E9B, 0x2EF3, OtherSymbol),
    (0x2F00, 0x2FD5, OtherSymbol),
    (0x2FF0, 0x2FFB, OtherSymbol),
    (0x3000, 0x3000, SpaceSeparator),
    (0x3001, 0x3003, OtherPunctuation),
    (0x3004, 0x3004, OtherSymbol),
    (0x3005, 0x3005, ModifierLetter),
    (0x3006, 0x3006, OtherLetter),
    (0x3007, 0x3007, LetterNumber),
    (0x3008, 0x3008, OpenPunctuation),
    (0x3009, 0x3009, ClosePunctuation),
    (0x300A, 0x300A, OpenPunctuation),
    (0x300B, 0x300B, ClosePunctuation),
    (0x300C, 0x300C, OpenPunctuation),
    (0x300D, 0x300D, ClosePunctuation),
    (0x300E, 0x300E, OpenPunctuation),
    (0x300F, 0x300F, ClosePunctuation),
    (0x3010, 0x3010, OpenPunctuation),
    (0x3011, 0x3011, ClosePunctuation),
    (0x3012, 0x3013, OtherSymbol),
    (0x3014, 0x3014, OpenPunctuation),
    (0x3015, 0x3015, ClosePunctuation),
    (0x3016, 0x3016, OpenPunctuation),
    (0x3017, 0x3017, ClosePunctuation),
    (0x3018, 0x3018, OpenPunctuation),
    (0x3019, 0x3019, ClosePunctuation),
    (0x301A, 0x301A, OpenPunctuation),
    (0x301B, 0x301B, ClosePunctuation),
    (0x301C, 0x301C, DashPunctuation),
    (0x301D, 0x301D, OpenPunctuation),
    (0x301E, 0x301F, ClosePunctuation),
    (0x3020, 0x3020, OtherSymbol),
    (0x3021, 0x3029, LetterNumber),
    (0x302A, 0x302D, NonspacingMark),
    (0x302E, 0x302F, SpacingMark),
    (0x3030, 0x3030, DashPunctuation),
    (0x3031, 0x3035, ModifierLetter),
    (0x3036, 0x3037, OtherSymbol),
    (0x3038, 0x303A, LetterNumber),
    (0x303B, 0x303B, ModifierLetter),
    (0x303C, 0x303C, OtherLetter),
    (0x303D, 0x303D, OtherPunctuation),
    (0x303E, 0x303F, OtherSymbol),
    (0x3041, 0x3096, OtherLetter),
    (0x3099, 0x309A, NonspacingMark),
    (0x309B, 0x309C, ModifierSymbol),
    (0x309D, 0x309E, ModifierLetter),
    (0x309F, 0x309F, OtherLetter),
    (0x30A0, 0x30A0, DashPunctuation),
    (0x30A1, 0x30FA, OtherLetter),
    (0x30FB, 0x30FB, OtherPunctuation),
    (0x30FC, 0x30FE, ModifierLetter),
    (0x30FF, 0x30FF, OtherLetter),
    (0x3105, 0x312F, OtherLetter),
    (0x3131, 0x318E, OtherLetter),
    (0x3190, 0x3191, OtherSymbol),
    (0x3192, 0x3195, OtherNumber),
    (0x3196, 0x319F, OtherSymbol),
    (0x31A0, 0x31BF, OtherLetter),
    (0x31C0, 0x31E3, OtherSymbol),
    (0x31F0, 0x31FF, OtherLetter),
    (0x3200, 0x321E, OtherSymbol),
    (0x3220, 0x3229, OtherNumber),
    (0x322A, 0x3247, OtherSymbol),
    (0x3248, 0x324F, OtherNumber),
    (0x3250, 0x3250, OtherSymbol),
    (0x3251, 0x325F, OtherNumber),
    (0x3260, 0x327F, OtherSymbol),
    (0x3280, 0x3289, OtherNumber),
    (0x328A, 0x32B0, OtherSymbol),
    (0x32B1, 0x32BF, OtherNumber),
    (0x32C0, 0x33FF, OtherSymbol),
    (0x3400, 0x4DBF, OtherLetter),
    (0x4DC0, 0x4DFF, OtherSymbol),
    (0x4E00, 0xA014, OtherLetter),
    (0xA015, 0xA015, ModifierLetter),
    (0xA016, 0xA48C, OtherLetter),
    (0xA490, 0xA4C6, OtherSymbol),
    (0xA4D0, 0xA4F7, OtherLetter),
    (0xA4F8, 0xA4FD, ModifierLetter),
    (0xA4FE, 0xA4FF, OtherPunctuation),
    (0xA500, 0xA60B, OtherLetter),
    (0xA60C, 0xA60C, ModifierLetter),
    (0xA60D, 0xA60F, OtherPunctuation),
    (0xA610, 0xA61F, OtherLetter),
    (0xA620, 0xA629, DecimalNumber),
    (0xA62A, 0xA62B, OtherLetter),
    (0xA640, 0xA640, UppercaseLetter),
    (0xA641, 0xA641, LowercaseLetter),
    (0xA642, 0xA642, UppercaseLetter),
    (0xA643, 0xA643, LowercaseLetter),
    (0xA644, 0xA644, UppercaseLetter),
    (0xA645, 0xA645, LowercaseLetter),
    (0xA646, 0xA646, UppercaseLetter),
    (0xA647, 0xA647, LowercaseLetter),
    (0xA648, 0xA648, UppercaseLetter),
    (0xA649, 0xA649, LowercaseLetter),
    (0xA64A, 0xA64A, UppercaseLetter),
    (0xA64B, 0xA64B, LowercaseLetter),
    (0xA64C, 0xA64C, UppercaseLetter),
    (0xA64D, 0xA64D, LowercaseLetter),
    (0xA64E, 0xA64E, UppercaseLetter),
    (0xA64F, 0xA64F, LowercaseLetter),
    (0xA650, 0xA650, UppercaseLetter),
    (0xA651, 0xA651, LowercaseLetter),
    (0xA652, 0xA652, UppercaseLetter),
    (0xA653, 0xA653, LowercaseLetter),
    (0xA654, 0xA654, UppercaseLetter),
    (0xA655, 0xA655, LowercaseLetter),
    (0xA656, 0xA656, UppercaseLetter),
    (0xA657, 0xA657, LowercaseLetter),
    (0xA658, 0xA658, UppercaseLetter),
    (0xA659, 0xA659, LowercaseLetter),
    (0xA65A, 0xA65A, UppercaseLetter),
    (0xA65B, 0xA65B, LowercaseLetter),
    (0xA65C, 0xA65C, UppercaseLetter),
    (0xA65D, 0xA65D, LowercaseLetter),
    (0xA65E, 0xA65E, UppercaseLetter),
    (0xA65F, 0xA65F, LowercaseLetter),
    (0xA660, 0xA660, UppercaseLetter),
    (0xA661, 0xA661, LowercaseLetter),
    (0xA662, 0xA662, UppercaseLetter),
    (0xA663, 0xA663, LowercaseLetter),
    (0xA664, 0xA664, UppercaseLetter),
    (0xA665, 0xA665, LowercaseLetter),
    (0xA666, 0xA666, UppercaseLetter),
    (0xA667, 0xA667, LowercaseLetter),
    (0xA668, 0xA668, UppercaseLetter),
    (0xA669, 0xA669, LowercaseLetter),
    (0xA66A, 0xA66A, UppercaseLetter),
    (0xA66B, 0xA66B, LowercaseLetter),
    (0xA66C, 0xA66C, UppercaseLetter),
    (0xA66D, 0xA66D, LowercaseLetter),
    (0xA66E, 0xA66E, OtherLetter),
    (0xA66F, 0xA66F, NonspacingMark),
    (0xA670, 0xA672, EnclosingMark),
    (0xA673, 0xA673, OtherPunctuation),
    (0xA674, 0xA67D, NonspacingMark),
    (0xA67E, 0xA67E, OtherPunctuation),
    (0xA67F, 0xA67F, ModifierLetter),
    (0xA680, 0xA680, UppercaseLetter),
    (0xA681, 0xA681, LowercaseLetter),
    (0xA682, 0xA682, UppercaseLetter),
    (0xA683, 0xA683, LowercaseLetter),
    (0xA684, 0xA684, UppercaseLetter),
    (0xA685, 0xA685, LowercaseLetter),
    (0xA686, 0xA686, UppercaseLetter),
    (0xA687, 0xA687, LowercaseLetter),
    (0xA688, 0xA688, UppercaseLetter),
    (0xA689, 0xA689, LowercaseLetter),
    (0xA68A, 0xA68A, UppercaseLetter),
    (0xA68B, 0xA68B, LowercaseLetter),
    (0xA68C, 0xA68C, UppercaseLetter),
    (0xA68D, 0xA68D, LowercaseLetter),
    (0xA68E, 0xA68E, UppercaseLetter),
    (0xA68F, 0xA68F, LowercaseLetter),
    (0xA690, 0xA690, UppercaseLetter),
    (0xA691, 0xA691, LowercaseLetter),
    (0xA692, 0xA692, UppercaseLetter),
    (0xA693, 0xA693, LowercaseLetter),
    (0xA694, 0xA694, UppercaseLetter),
    (0xA695, 0xA695, LowercaseLetter),
    (0xA696, 0xA696, UppercaseLetter),
    (0xA697, 0xA697, LowercaseLetter),
    (0xA698, 0xA698, UppercaseLetter),
    (0xA699, 0xA699, LowercaseLetter),
    (0xA69A, 0xA69A, UppercaseLetter),
    (0xA69B, 0xA69B, LowercaseLetter),
    (0xA69C, 0xA69D, ModifierLetter),
    (0xA69E, 0xA69F, NonspacingMark),
    (0xA6A0, 0xA6E5, OtherLetter),
    (0xA6E6, 0xA6EF, LetterNumber),
    (0xA6F0, 0xA6F1, NonspacingMark),
    (0xA6F2, 0xA6F7, OtherPunctuation),
    (0xA700, 0xA716, ModifierSymbol),
    (0xA717, 0xA71F, ModifierLetter),
    (0xA720, 0xA721, ModifierSymbol),
    (0xA722, 0xA722, UppercaseLetter),
    (0xA723, 0xA723, LowercaseLetter),
    (0xA724, 0xA724, UppercaseLetter),
    (0xA725, 0xA725, LowercaseLetter),
    (0xA726, 0xA726, UppercaseLetter),
    (0xA727, 0xA727, LowercaseLetter),
    (0xA728, 0xA728, UppercaseLetter),
    (0xA729, 0xA729, LowercaseLetter),
    (0xA72A, 0xA72A, UppercaseLetter),
    (0xA72B, 0xA72B, LowercaseLetter),
    (0xA72C, 0xA72C, UppercaseLetter),
    (0xA72D, 0xA72D, LowercaseLetter),
    (0xA72E, 0xA72E, UppercaseLetter),
    (0xA72F, 0xA731, LowercaseLetter),
    (0xA732, 0xA732, UppercaseLetter),
    (0xA733, 0xA733, LowercaseLetter),
    (0xA734, 0xA734, UppercaseLetter),
    (0xA735, 0xA735, LowercaseLetter),
    (0xA736, 0xA736, UppercaseLetter),
    (0xA737, 0xA737, LowercaseLetter),
    (0xA738, 0xA738, UppercaseLetter),
    (0xA739, 0xA739, LowercaseLetter),
    (0xA73A, 0xA73A, UppercaseLetter),
    (0xA73B, 0xA73B, LowercaseLetter),
    (0xA73C, 0xA73C, UppercaseLetter),
    (0xA73D, 0xA73D, LowercaseLetter),
    (0xA73E, 0xA73E, UppercaseLetter),
    (0xA73F, 0xA73F, LowercaseLetter),
    (0xA740, 0xA740, UppercaseLetter),
    (0xA741, 0xA741, LowercaseLetter),
    (0xA742, 0xA742, UppercaseLetter),
    (0xA743, 0xA743, LowercaseLetter),
    (0xA744, 0xA744, UppercaseLetter),
    (0xA745, 0xA745, LowercaseLetter),
    (0xA746, 0xA746, UppercaseLetter),
    (0xA747, 0xA747, LowercaseLetter),
    (0xA748, 0xA748, UppercaseLetter),
    (0xA749, 0xA749, LowercaseLetter),
    (0xA74A, 0xA74A, UppercaseLetter),
    (0xA74B, 0xA74B, LowercaseLetter),
    (0xA74C, 0xA74C, UppercaseLetter),
    (0xA74D, 0xA74D, LowercaseLetter),
    (0xA74E, 0xA74E, UppercaseLetter),
    (0xA74F, 0xA74F, LowercaseLetter),
    (0xA750, 0xA750, UppercaseLetter),
    (0xA751, 0xA751, LowercaseLetter),
    (0xA752, 0xA752, UppercaseLetter),
    (0xA753, 0xA753, LowercaseLetter),
    (0xA754, 0xA754, UppercaseLetter),
    (0xA755, 0xA755, LowercaseLetter),
    (0xA756, 0xA756, UppercaseLetter),
    (0xA757, 0xA757, LowercaseLetter),
    (0xA758, 0xA758, UppercaseLetter),
    (0xA759, 0xA759, LowercaseLetter),
    (0xA75A, 0xA75A, UppercaseLetter),
    (0xA75B, 0xA75B, LowercaseLetter),
    (0xA75C, 0xA75C, UppercaseLetter),
    (0xA75D, 0xA75D, LowercaseLetter),
    (0xA75E, 0xA75E, UppercaseLetter),
    (0xA75F, 0xA75F, LowercaseLetter),
    (0xA760, 0xA760, UppercaseLetter),
    (0xA761, 0xA761, LowercaseLetter),
    (0xA762, 0xA762, UppercaseLetter),
    (0xA763, 0xA763, LowercaseLetter),
    (0xA764, 0xA764, UppercaseLetter),
    (0xA765, 0xA765, LowercaseLetter),
    (0xA766, 0xA766, UppercaseLetter),
    (0xA767, 0xA767, LowercaseLetter),
    (0xA768, 0xA768, UppercaseLetter),
    (0xA769, 0xA769, LowercaseLetter),
    (0xA76A, 0xA76A, UppercaseLetter),
    (0xA76B, 0xA76B, LowercaseLetter),
    (0xA76C, 0xA76C, UppercaseLetter),
    (0xA76D, 0xA76D, LowercaseLetter),
    (0xA76E, 0xA76E, UppercaseLetter),
    (0xA76F, 0xA76F, LowercaseLetter),
    (0xA770, 0xA770, ModifierLetter),
    (0xA771, 0xA778, LowercaseLetter),
    (0xA779, 0xA779, UppercaseLetter),
    (0xA77A, 0xA77A, LowercaseLetter),
    (0xA77B, 0xA77B, UppercaseLetter),
    (0xA77C, 0xA77C, LowercaseLetter),
    (0xA77D, 0xA77E, UppercaseLetter),
    (0xA77F, 0xA77F, LowercaseLetter),
    (0xA780, 0xA780, UppercaseLetter),
    (0xA781, 0xA781, LowercaseLetter),
    (0xA782, 0xA782, UppercaseLetter),
    (0xA783, 0xA783, LowercaseLetter),
    (0xA784, 0xA784, UppercaseLetter),
    (0xA785, 0xA785, LowercaseLetter),
    (0xA786, 0xA786, UppercaseLetter),
    (0xA787, 0xA787, LowercaseLetter),
    (0xA788, 0xA788, ModifierLetter),
    (0xA789, 0xA78A, ModifierSymbol),
    (0xA78B, 0xA78B, UppercaseLetter),
    (0xA78C, 0xA78C, LowercaseLetter),
    (0xA78D, 0xA78D, UppercaseLetter),
    (0xA78E, 0xA78E, LowercaseLetter),
    (0xA78F, 0xA78F, OtherLetter),
    (0xA790, 0xA790, UppercaseLetter),
    (0xA791, 0xA791, LowercaseLetter),
    (0xA792, 0xA792, UppercaseLetter),
    (0xA793, 0xA795, LowercaseLetter),
    (0xA796, 0xA796, UppercaseLetter),
    (0xA797, 0xA797, LowercaseLetter),
    (0xA798, 0xA798, UppercaseLetter),
    (0xA799, 0xA799, LowercaseLetter),
    (0xA79A, 0xA79A, UppercaseLetter),
    (0xA79B, 0xA79B, LowercaseLetter),
    (0xA79C, 0xA79C, UppercaseLetter),
    (0xA79D, 0xA79D, LowercaseLetter),
    (0xA79E, 0xA79E, UppercaseLetter),
    (0xA79F, 0xA79F, LowercaseLetter),
    (0xA7A0, 0xA7A0, UppercaseLetter),
    (0xA7A1, 0xA7A1, LowercaseLetter),
    (0xA7A2, 0xA7A2, UppercaseLetter),
    (0xA7A3, 0xA7A3, LowercaseLetter),
    (0xA7A4, 0xA7A4, UppercaseLetter),
    (0xA7A5, 0xA7A5, LowercaseLetter),
    (0xA7A6, 0xA7A6, UppercaseLetter),
    (0xA7A7, 0xA7A7, LowercaseLetter),
    (0xA7A8, 0xA7A8, UppercaseLetter),
    (0xA7A9, 0xA7A9, LowercaseLetter),
    (0xA7AA, 0xA7AE, UppercaseLetter),
    (0xA7AF, 0xA7AF, LowercaseLetter),
    (0xA7B0, 0xA7B4, UppercaseLetter),
    (0xA7B5, 0xA7B5, LowercaseLetter),
    (0xA7B6, 0xA7B6, UppercaseLetter),
    (0xA7B7, 0xA7B7, LowercaseLetter),
    (0xA7B8, 0xA7B8, UppercaseLetter),
    (0xA7B9, 0xA7B9, LowercaseLetter),
    (0xA7BA, 0xA7BA, UppercaseLetter),
    (0xA7BB, 0xA7BB, LowercaseLetter),
    (0xA7BC, 0xA7BC, UppercaseLetter),
    (0xA7BD, 0xA7BD, LowercaseLetter),
    (0xA7BE, 0xA7BE, UppercaseLetter),
    (0xA7BF, 0xA7BF, LowercaseLetter),
    (0xA7C0, 0xA7C0, UppercaseLetter),
    (0xA7C1, 0xA7C1, LowercaseLetter),
    (0xA7C2, 0xA7C2, UppercaseLetter),
    (0xA7C3, 0xA7C3, LowercaseLetter),
    (0xA7C4, 0xA7C7, UppercaseLetter),
    (0xA7C8, 0xA7C8, LowercaseLetter),
    (0xA7C9, 0xA7C9, UppercaseLetter),
    (0xA7CA, 0xA7CA, LowercaseLetter),
    (0xA7D0, 0xA7D0, UppercaseLetter),
    (0xA7D1, 0xA7D1, LowercaseLetter),
    (0xA7D3, 0xA7D3, LowercaseLetter),
    (0xA7D5, 0xA7D5, LowercaseLetter),
    (0xA7D6, 0xA7D6, UppercaseLetter),
    (0xA7D7, 0xA7D7, LowercaseLetter),
    (0xA7D8, 0xA7D8, UppercaseLetter),
    (0xA7D9, 0xA7D9, LowercaseLetter),
    (0xA7F2, 0xA7F4, ModifierLetter),
    (0xA7F5, 0xA7F5, UppercaseLetter),
    (0xA7F6, 0xA7F6, LowercaseLetter),
    (0xA7F7, 0xA7F7, OtherLetter),
    (0xA7F8, 0xA7F9, ModifierLetter),
    (0xA7FA, 0xA7FA, LowercaseLetter),
    (0xA7FB, 0xA801, OtherLetter),
    (0xA802, 0xA802, NonspacingMark),
    (0xA803, 0xA805, OtherLetter),
    (0xA806, 0xA806, NonspacingMark),
    (0xA807, 0xA80A, OtherLetter),
    (0xA80B, 0xA80B, NonspacingMark),
    (0xA80C, 0xA822, OtherLetter),
    (0xA823, 0xA824, SpacingMark),
    (0xA825, 0xA826, NonspacingMark),
    (0xA827, 0xA827, SpacingMark),
    (0xA828, 0xA82B, OtherSymbol),
    (0xA82C, 0xA82C, NonspacingMark),
    (0xA830, 0xA835, OtherNumber),
    (0xA836, 0xA837, OtherSymbol),
    (0xA838, 0xA838, CurrencySymbol),
    (0xA839, 0xA839, OtherSymbol),
    (0xA840, 0xA873, OtherLetter),
    (0xA874, 0xA877, OtherPunctuation),
    (0xA880, 0xA881, SpacingMark),
    (0xA882, 0xA8B3, OtherLetter),
    (0xA8B4, 0xA8C3, SpacingMark),
    (0xA8C4, 0xA8C5, NonspacingMark),
    (0xA8CE, 0xA8CF, OtherPunctuation),
    (0xA8D0, 0xA8D9, DecimalNumber),
    (0xA8E0, 0xA8F1, NonspacingMark),
    (0xA8F2, 0xA8F7, OtherLetter),
    (0xA8F8, 0xA8FA, OtherPunctuation),
    (0xA8FB, 0xA8FB, OtherLetter),
    (0xA8FC, 0xA8FC, OtherPunctuation),
    (0xA8FD, 0xA8FE, OtherLetter),
    (0xA8FF, 0xA8FF, NonspacingMark),
    (0xA900, 0xA909, DecimalNumber),
    (0xA90A, 0xA925, OtherLetter),
    (0xA926, 0xA92D, NonspacingMark),
    (0xA92E, 0xA92F, OtherPunctuation),
    (0xA930, 0xA946, OtherLetter),
    (0xA947, 0xA951, NonspacingMark),
    (0xA952, 0xA953, SpacingMark),
    (0xA95F, 0xA95F, OtherPunctuation),
    (0xA960, 0xA97C, OtherLetter),
    (0xA980, 0xA982, NonspacingMark),
    (0xA983, 0xA983, SpacingMark),
    (0xA984, 0xA9B2, OtherLetter),
    (0xA9B3, 0xA9B3, NonspacingMark),
    (0xA9B4, 0xA9B5, SpacingMark),
    (0xA9B6, 0xA9B9, NonspacingMark),
    (0xA9BA, 0xA9BB, SpacingMark),
    (0xA9BC, 0xA9BD, NonspacingMark),
    (0xA9BE, 0xA9C0, SpacingMark),
    (0xA9C1, 0xA9CD, OtherPunctuation),
    (0xA9CF, 0xA9CF, ModifierLetter),
    (0xA9D0, 0xA9D9, DecimalNumber),
    (0xA9DE, 0xA9DF, OtherPunctuation),
    (0xA9E0, 0xA9E4, OtherLetter),
    (0xA9E5, 0xA9E5, NonspacingMark),
    (0xA9E6, 0xA9E6, ModifierLetter),
    (0xA9E7, 0xA9EF, OtherLetter),
    (0xA9F0, 0xA9F9, DecimalNumber),
    (0xA9FA, 0xA9FE, OtherLetter),
    (0xAA00, 0xAA28, OtherLetter),
    (0xAA29, 0xAA2E, NonspacingMark),
    (0xAA2F, 0xAA30, SpacingMark),
    (0xAA31, 0xAA32, NonspacingMark),
    (0xAA33, 0xAA34, SpacingMark),
    (0xAA35, 0xAA36, NonspacingMark),
    (0xAA40, 0xAA42, OtherLetter),
    (0xAA43, 0xAA43, NonspacingMark),
    (0xAA44, 0xAA4B, OtherLetter),
    (0xAA4C, 0xAA4C, NonspacingMark),
    (0xAA4D, 0xAA4D, SpacingMark),
    (0xAA50, 0xAA59, DecimalNumber),
    (0xAA5C, 0xAA5F, OtherPunctuation),
    (0xAA60, 0xAA6F, OtherLetter),
    (0xAA70, 0xAA70, ModifierLetter),
    (0xAA71, 0xAA76, OtherLetter),
    (0xAA77, 0xAA79, OtherSymbol),
    (0xAA7A, 0xAA7A, OtherLetter),
    (0xAA7B, 0xAA7B, SpacingMark),
    (0xAA7C, 0xAA7C, NonspacingMark),
    (0xAA7D, 0xAA7D, SpacingMark),
    (0xAA7E, 0xAAAF, OtherLetter),
    (0xAAB0, 0xAAB0, NonspacingMark),
    (0xAAB1, 0xAAB1, OtherLetter),
    (0xAAB2, 0xAAB4, NonspacingMark),
    (0xAAB5, 0xAAB6, OtherLetter),
    (0xAAB7, 0xAAB8, NonspacingMark),
    (0xAAB9, 0xAABD, OtherLetter),
    (0xAABE, 0xAABF, NonspacingMark),
    (0xAAC0, 0xAAC0, OtherLetter),
    (0xAAC1, 0xAAC1, NonspacingMark),
    (0xAAC2, 0xAAC2, OtherLetter),
    (0xAADB, 0xAADC, OtherLetter),
    (0xAADD, 0xAADD, ModifierLetter),
    (0xAADE, 0xAADF, OtherPunctuation),
    (0xAAE0, 0xAAEA, OtherLetter),
    (0xAAEB, 0xAAEB, SpacingMark),
    (0xAAEC, 0xAAED, NonspacingMark),
    (0xAAEE, 0xAAEF, SpacingMark),
    (0xAAF0, 0xAAF1, OtherPunctuation),
    (0xAAF2, 0xAAF2, OtherLetter),
    (0xAAF3, 0xAAF4, ModifierLetter),
    (0xAAF5, 0xAAF5, SpacingMark),
    (0xAAF6, 0xAAF6, NonspacingMark),
    (0xAB01, 0xAB06, OtherLetter),
    (0xAB09, 0xAB0E, OtherLetter),
    (0xAB11, 0xAB16, OtherLetter),
    (0xAB20, 0xAB26, OtherLetter),
    (0xAB28, 0xAB2E, OtherLetter),
    (0xAB30, 0xAB5A, LowercaseLetter),
    (0xAB5B, 0xAB5B, ModifierSymbol),
    (0xAB5C, 0xAB5F, ModifierLetter),
    (0xAB60, 0xAB68, LowercaseLetter),
    (0xAB69, 0xAB69, ModifierLetter),
    (0xAB6A, 0xAB6B, ModifierSymbol),
    (0xAB70, 0xABBF, LowercaseLetter),
    (0xABC0, 0xABE2, OtherLetter),
    (0xABE3, 0xABE4, SpacingMark),
    (0xABE5, 0xABE5, NonspacingMark),
    (0xABE6, 0xABE7, SpacingMark),
    (0xABE8, 0xABE8, NonspacingMark),
    (0xABE9, 0xABEA, SpacingMark),
    (0xABEB, 0xABEB, OtherPunctuation),
    (0xABEC, 0xABEC, SpacingMark),
    (0xABED, 0xABED, NonspacingMark),
    (0xABF0, 0xABF9, DecimalNumber),
    (0xAC00, 0xD7A3, OtherLetter),
    (0xD7B0, 0xD7C6, OtherLetter),
    (0xD7CB, 0xD7FB, OtherLetter),
    (0xD800, 0xDFFF, Surrogate),
    (0xE000, 0xF8FF, PrivateUse),
    (0xF900, 0xFA6D, OtherLetter),
    (0xFA70, 0xFAD9, OtherLetter),
    (0xFB00, 0xFB06, LowercaseLetter),
    (0xFB13, 0xFB17, LowercaseLetter),
    (0xFB1D, 0xFB1D, OtherLetter),
    (0xFB1E, 0xFB1E, NonspacingMark),
    (0xFB1F, 0xFB28, OtherLetter),
    (0xFB29, 0xFB29, MathSymbol),
    (0xFB2A, 0xFB36, OtherLetter),
    (0xFB38, 0xFB3C, OtherLetter),
    (0xFB3E, 0xFB3E, OtherLetter),
    (0xFB40, 0xFB41, OtherLetter),
    (0xFB43, 0xFB44, OtherLetter),
    (0xFB46, 0xFBB1, OtherLetter),
    (0xFBB2, 0xFBC2, ModifierSymbol),
    (0xFBD3, 0xFD3D, OtherLetter),
    (0xFD3E, 0xFD3E, ClosePunctuation),
    (0xFD3F, 0xFD3F, OpenPunctuation),
    (0xFD40, 0xFD4F, OtherSymbol),
    (0xFD50, 0xFD8F, OtherLetter),
    (0xFD92, 0xFDC7, OtherLetter),
    (0xFDCF, 0xFDCF, OtherSymbol),
    (0xFDF0, 0xFDFB, OtherLetter),
    (0xFDFC, 0xFDFC, CurrencySymbol),
    (0xFDFD, 0xFDFF, OtherSymbol),
    (0xFE00, 0xFE0F, NonspacingMark),
    (0xFE10, 0xFE16, OtherPunctuation),
    (0xFE17, 0xFE17, OpenPunctuation),
    (0xFE18, 0xFE18, ClosePunctuation),
    (0xFE19, 0xFE19, OtherPunctuation),
    (0xFE20, 0xFE2F, NonspacingMark),
    (0xFE30, 0xFE30, OtherPunctuation),
    (0xFE31, 0xFE32, DashPunctuation),
    (0xFE33, 0xFE34, ConnectorPunctuation),
    (0xFE35, 0xFE35, OpenPunctuation),
    (0xFE36, 0xFE36, ClosePunctuation),
    (0xFE37, 0xFE37, OpenPunctuation),
    (0xFE38, 0xFE38, ClosePunctuation),
    (0xFE39, 0xFE39, OpenPunctuation),
    (0xFE3A, 0xFE3A, ClosePunctuation),
    (0xFE3B, 0xFE3B, OpenPunctuation),
    (0xFE3C, 0xFE3C, ClosePunctuation),
    (0xFE3D, 0xFE3D, OpenPunctuation),
    (0xFE3E, 0xFE3E, ClosePunctuation),
    (0xFE3F, 0xFE3F, OpenPunctuation),
    (0xFE40, 0xFE40, ClosePunctuation),
    (0xFE41, 0xFE41, OpenPunctuation),
    (0xFE42, 0xFE42, ClosePunctuation),
    (0xFE43, 0xFE43, OpenPunctuation),
    (0xFE44, 0xFE44, ClosePunctuation),
    (0xFE45, 0xFE46, OtherPunctuation),
    (0xFE47, 0xFE47, OpenPunctuation),
    (0xFE48, 0xFE48, ClosePunctuation),
    (0xFE49, 0xFE4C, OtherPunctuation),
    (0xFE4D, 0xFE4F, ConnectorPunctuation),
    (0xFE50, 0xFE52, OtherPunctuation),
    (0xFE54, 0xFE57, OtherPunctuation),
    (0xFE58, 0xFE58, DashPunctuation),
    (0xFE59, 0xFE59, OpenPunctuation),
    (0xFE5A, 0xFE5A, ClosePunctuation),
    (0xFE5B, 0xFE5B, OpenPunctuation),
    (0xFE5C, 0xFE5C, ClosePunctuation),
    (0xFE5D, 0xFE5D, OpenPunctuation),
    (0xFE5E, 0xFE5E, ClosePunctuation),
    (0xFE5F, 0xFE61, OtherPunctuation),
    (0xFE62, 0xFE62, MathSymbol),
    (0xFE63, 0xFE63, DashPunctuation),
    (0xFE64, 0xFE66, MathSymbol),
    (0xFE68, 0xFE68, OtherPunctuation),
    (0xFE69, 0xFE69, CurrencySymbol),
    (0xFE6A, 0xFE6B, OtherPunctuation),
    (0xFE70, 0xFE74, OtherLetter),
    (0xFE76, 0xFEFC, OtherLetter),
    (0xFEFF, 0xFEFF, Format),
    (0xFF01, 0xFF03, OtherPunctuation),
    (0xFF04, 0xFF04, CurrencySymbol),
    (0xFF05, 0xFF07, OtherPunctuation),
    (0xFF08, 0xFF08, OpenPunctuation),
    (0xFF09, 0xFF09, ClosePunctuation),
    (0xFF0A, 0xFF0A, OtherPunctuation),
    (0xFF0B, 0xFF0B, MathSymbol),
    (0xFF0C, 0xFF0C, OtherPunctuation),
    (0xFF0D, 0xFF0D, DashPunctuation),
    (0xFF0E, 0xFF0F, OtherPunctuation),
    (0xFF10, 0xFF19, DecimalNumber),
    (0xFF1A, 0xFF1B, OtherPunctuation),
    (0xFF1C, 0xFF1E, MathSymbol),
    (0xFF1F, 0xFF20, OtherPunctuation),
    (0xFF21, 0xFF3A, UppercaseLetter),
    (0xFF3B, 0xFF3B, OpenPunctuation),
    (0xFF3C, 0xFF3C, OtherPunctuation),
    (0xFF3D, 0xFF3D, ClosePunctuation),
    (0xFF3E, 0xFF3E, ModifierSymbol),
    (0xFF3F, 0xFF3F, ConnectorPunctuation),
    (0xFF40, 0xFF40, ModifierSymbol),
    (0xFF41, 0xFF5A, LowercaseLetter),
    (0xFF5B, 0xFF5B, OpenPunctuation),
    (0xFF5C, 0xFF5C, MathSymbol),
    (0xFF5D, 0xFF5D, ClosePunctuation),
    (0xFF5E, 0xFF5E, MathSymbol),
    (0xFF5F, 0xFF5F, OpenPunctuation),
    (0xFF60, 0xFF60, ClosePunctuation),
    (0xFF61, 0xFF61, OtherPunctuation),
    (0xFF62, 0xFF62, OpenPunctuation),
    (0xFF63, 0xFF63, ClosePunctuation),
    (0xFF64, 0xFF65, OtherPunctuation),
    (0xFF66, 0xFF6F, OtherLetter),
    (0xFF70, 0xFF70, ModifierLetter),
    (0xFF71, 0xFF9D, OtherLetter),
    (0xFF9E, 0xFF9F, ModifierLetter),
    (0xFFA0, 0xFFBE, OtherLetter),
    (0xFFC2, 0xFFC7, OtherLetter),
    (0xFFCA, 0xFFCF, OtherLetter),
    (0xFFD2, 0xFFD7, OtherLetter),
    (0xFFDA, 0xFFDC, OtherLetter),
    (0xFFE0, 0xFFE1, CurrencySymbol),
    (0xFFE2, 0xFFE2, MathSymbol),
    (0xFFE3, 0xFFE3, ModifierSymbol),
    (0xFFE4, 0xFFE4, OtherSymbol),
    (0xFFE5, 0xFFE6, CurrencySymbol),
    (0xFFE8, 0xFFE8, OtherSymbol),
    (0xFFE9, 0xFFEC, MathSymbol),
    (0xFFED, 0xFFEE, OtherSymbol),
    (0xFFF9, 0xFFFB, Format),
    (0xFFFC, 0xFFFD, OtherSymbol),
];
