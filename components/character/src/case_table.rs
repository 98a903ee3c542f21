// Generated from the Unicode Character Database, version 14.0.0.
// Simple (single code unit) case mappings for the Basic Multilingual Plane.
//
// Entry `i` covers `KEYS[i]..=VALUES[2 * i]` and maps through `VALUES[2 * i + 1]`
// (a wrapping delta). When bit 15 of the stored end differs from bit 15 of the
// start, the end has been flipped by 0x8000 and the entry only maps code units
// sharing the start's parity.

pub(crate) const UPPER_CASE_KEYS: [u16; 190] = [
    0x0061,
    0x00B5,
    0x00E0,
    0x00F8,
    0x00FF,
    0x0101,
    0x0131,
    0x0133,
    0x013A,
    0x014B,
    0x017A,
    0x017F,
    0x0180,
    0x0183,
    0x0188,
    0x018C,
    0x0192,
    0x0195,
    0x0199,
    0x019A,
    0x019E,
    0x01A1,
    0x01A8,
    0x01AD,
    0x01B0,
    0x01B4,
    0x01B9,
    0x01BD,
    0x01BF,
    0x01C5,
    0x01C6,
    0x01C8,
    0x01C9,
    0x01CB,
    0x01CC,
    0x01CE,
    0x01DD,
    0x01DF,
    0x01F2,
    0x01F3,
    0x01F5,
    0x01F9,
    0x0223,
    0x023C,
    0x023F,
    0x0242,
    0x0247,
    0x0250,
    0x0251,
    0x0252,
    0x0253,
    0x0254,
    0x0256,
    0x0259,
    0x025B,
    0x025C,
    0x0260,
    0x0261,
    0x0263,
    0x0265,
    0x0266,
    0x0268,
    0x0269,
    0x026A,
    0x026B,
    0x026C,
    0x026F,
    0x0271,
    0x0272,
    0x0275,
    0x027D,
    0x0280,
    0x0282,
    0x0283,
    0x0287,
    0x0288,
    0x0289,
    0x028A,
    0x028C,
    0x0292,
    0x029D,
    0x029E,
    0x0345,
    0x0371,
    0x0377,
    0x037B,
    0x03AC,
    0x03AD,
    0x03B1,
    0x03C2,
    0x03C3,
    0x03CC,
    0x03CD,
    0x03D0,
    0x03D1,
    0x03D5,
    0x03D6,
    0x03D7,
    0x03D9,
    0x03F0,
    0x03F1,
    0x03F2,
    0x03F3,
    0x03F5,
    0x03F8,
    0x03FB,
    0x0430,
    0x0450,
    0x0461,
    0x048B,
    0x04C2,
    0x04CF,
    0x04D1,
    0x0561,
    0x10D0,
    0x10FD,
    0x13F8,
    0x1C80,
    0x1C81,
    0x1C82,
    0x1C83,
    0x1C85,
    0x1C86,
    0x1C87,
    0x1C88,
    0x1D79,
    0x1D7D,
    0x1D8E,
    0x1E01,
    0x1E9B,
    0x1EA1,
    0x1F00,
    0x1F10,
    0x1F20,
    0x1F30,
    0x1F40,
    0x1F51,
    0x1F60,
    0x1F70,
    0x1F72,
    0x1F76,
    0x1F78,
    0x1F7A,
    0x1F7C,
    0x1F80,
    0x1F90,
    0x1FA0,
    0x1FB0,
    0x1FB3,
    0x1FBE,
    0x1FC3,
    0x1FD0,
    0x1FE0,
    0x1FE5,
    0x1FF3,
    0x214E,
    0x2170,
    0x2184,
    0x24D0,
    0x2C30,
    0x2C61,
    0x2C65,
    0x2C66,
    0x2C68,
    0x2C73,
    0x2C76,
    0x2C81,
    0x2CEC,
    0x2CF3,
    0x2D00,
    0x2D27,
    0x2D2D,
    0xA641,
    0xA681,
    0xA723,
    0xA733,
    0xA77A,
    0xA77F,
    0xA78C,
    0xA791,
    0xA794,
    0xA797,
    0xA7B5,
    0xA7C8,
    0xA7D1,
    0xA7D7,
    0xA7F6,
    0xAB53,
    0xAB70,
    0xFF41,
];

pub(crate) const UPPER_CASE_VALUES: [u16; 380] = [
    0x007A, 0xFFE0,
    0x00B5, 0x02E7,
    0x00F6, 0xFFE0,
    0x00FE, 0xFFE0,
    0x00FF, 0x0079,
    0x812F, 0xFFFF,
    0x0131, 0xFF18,
    0x8137, 0xFFFF,
    0x8148, 0xFFFF,
    0x8177, 0xFFFF,
    0x817E, 0xFFFF,
    0x017F, 0xFED4,
    0x0180, 0x00C3,
    0x8185, 0xFFFF,
    0x0188, 0xFFFF,
    0x018C, 0xFFFF,
    0x0192, 0xFFFF,
    0x0195, 0x0061,
    0x0199, 0xFFFF,
    0x019A, 0x00A3,
    0x019E, 0x0082,
    0x81A5, 0xFFFF,
    0x01A8, 0xFFFF,
    0x01AD, 0xFFFF,
    0x01B0, 0xFFFF,
    0x81B6, 0xFFFF,
    0x01B9, 0xFFFF,
    0x01BD, 0xFFFF,
    0x01BF, 0x0038,
    0x01C5, 0xFFFF,
    0x01C6, 0xFFFE,
    0x01C8, 0xFFFF,
    0x01C9, 0xFFFE,
    0x01CB, 0xFFFF,
    0x01CC, 0xFFFE,
    0x81DC, 0xFFFF,
    0x01DD, 0xFFB1,
    0x81EF, 0xFFFF,
    0x01F2, 0xFFFF,
    0x01F3, 0xFFFE,
    0x01F5, 0xFFFF,
    0x821F, 0xFFFF,
    0x8233, 0xFFFF,
    0x023C, 0xFFFF,
    0x0240, 0x2A3F,
    0x0242, 0xFFFF,
    0x824F, 0xFFFF,
    0x0250, 0x2A1F,
    0x0251, 0x2A1C,
    0x0252, 0x2A1E,
    0x0253, 0xFF2E,
    0x0254, 0xFF32,
    0x0257, 0xFF33,
    0x0259, 0xFF36,
    0x025B, 0xFF35,
    0x025C, 0xA54F,
    0x0260, 0xFF33,
    0x0261, 0xA54B,
    0x0263, 0xFF31,
    0x0265, 0xA528,
    0x0266, 0xA544,
    0x0268, 0xFF2F,
    0x0269, 0xFF2D,
    0x026A, 0xA544,
    0x026B, 0x29F7,
    0x026C, 0xA541,
    0x026F, 0xFF2D,
    0x0271, 0x29FD,
    0x0272, 0xFF2B,
    0x0275, 0xFF2A,
    0x027D, 0x29E7,
    0x0280, 0xFF26,
    0x0282, 0xA543,
    0x0283, 0xFF26,
    0x0287, 0xA52A,
    0x0288, 0xFF26,
    0x0289, 0xFFBB,
    0x028B, 0xFF27,
    0x028C, 0xFFB9,
    0x0292, 0xFF25,
    0x029D, 0xA515,
    0x029E, 0xA512,
    0x0345, 0x0054,
    0x8373, 0xFFFF,
    0x0377, 0xFFFF,
    0x037D, 0x0082,
    0x03AC, 0xFFDA,
    0x03AF, 0xFFDB,
    0x03C1, 0xFFE0,
    0x03C2, 0xFFE1,
    0x03CB, 0xFFE0,
    0x03CC, 0xFFC0,
    0x03CE, 0xFFC1,
    0x03D0, 0xFFC2,
    0x03D1, 0xFFC7,
    0x03D5, 0xFFD1,
    0x03D6, 0xFFCA,
    0x03D7, 0xFFF8,
    0x83EF, 0xFFFF,
    0x03F0, 0xFFAA,
    0x03F1, 0xFFB0,
    0x03F2, 0x0007,
    0x03F3, 0xFF8C,
    0x03F5, 0xFFA0,
    0x03F8, 0xFFFF,
    0x03FB, 0xFFFF,
    0x044F, 0xFFE0,
    0x045F, 0xFFB0,
    0x8481, 0xFFFF,
    0x84BF, 0xFFFF,
    0x84CE, 0xFFFF,
    0x04CF, 0xFFF1,
    0x852F, 0xFFFF,
    0x0586, 0xFFD0,
    0x10FA, 0x0BC0,
    0x10FF, 0x0BC0,
    0x13FD, 0xFFF8,
    0x1C80, 0xE792,
    0x1C81, 0xE793,
    0x1C82, 0xE79C,
    0x1C84, 0xE79E,
    0x1C85, 0xE79D,
    0x1C86, 0xE7A4,
    0x1C87, 0xE7DB,
    0x1C88, 0x89C2,
    0x1D79, 0x8A04,
    0x1D7D, 0x0EE6,
    0x1D8E, 0x8A38,
    0x9E95, 0xFFFF,
    0x1E9B, 0xFFC5,
    0x9EFF, 0xFFFF,
    0x1F07, 0x0008,
    0x1F15, 0x0008,
    0x1F27, 0x0008,
    0x1F37, 0x0008,
    0x1F45, 0x0008,
    0x9F57, 0x0008,
    0x1F67, 0x0008,
    0x1F71, 0x004A,
    0x1F75, 0x0056,
    0x1F77, 0x0064,
    0x1F79, 0x0080,
    0x1F7B, 0x0070,
    0x1F7D, 0x007E,
    0x1F87, 0x0008,
    0x1F97, 0x0008,
    0x1FA7, 0x0008,
    0x1FB1, 0x0008,
    0x1FB3, 0x0009,
    0x1FBE, 0xE3DB,
    0x1FC3, 0x0009,
    0x1FD1, 0x0008,
    0x1FE1, 0x0008,
    0x1FE5, 0x0007,
    0x1FF3, 0x0009,
    0x214E, 0xFFE4,
    0x217F, 0xFFF0,
    0x2184, 0xFFFF,
    0x24E9, 0xFFE6,
    0x2C5F, 0xFFD0,
    0x2C61, 0xFFFF,
    0x2C65, 0xD5D5,
    0x2C66, 0xD5D8,
    0xAC6C, 0xFFFF,
    0x2C73, 0xFFFF,
    0x2C76, 0xFFFF,
    0xACE3, 0xFFFF,
    0xACEE, 0xFFFF,
    0x2CF3, 0xFFFF,
    0x2D25, 0xE3A0,
    0x2D27, 0xE3A0,
    0x2D2D, 0xE3A0,
    0x266D, 0xFFFF,
    0x269B, 0xFFFF,
    0x272F, 0xFFFF,
    0x276F, 0xFFFF,
    0x277C, 0xFFFF,
    0x2787, 0xFFFF,
    0xA78C, 0xFFFF,
    0x2793, 0xFFFF,
    0xA794, 0x0030,
    0x27A9, 0xFFFF,
    0x27C3, 0xFFFF,
    0x27CA, 0xFFFF,
    0xA7D1, 0xFFFF,
    0x27D9, 0xFFFF,
    0xA7F6, 0xFFFF,
    0xAB53, 0xFC60,
    0xABBF, 0x6830,
    0xFF5A, 0xFFE0,
];

pub(crate) const LOWER_CASE_KEYS: [u16; 172] = [
    0x0041,
    0x00C0,
    0x00D8,
    0x0100,
    0x0130,
    0x0132,
    0x0139,
    0x014A,
    0x0178,
    0x0179,
    0x0181,
    0x0182,
    0x0186,
    0x0187,
    0x0189,
    0x018B,
    0x018E,
    0x018F,
    0x0190,
    0x0191,
    0x0193,
    0x0194,
    0x0196,
    0x0197,
    0x0198,
    0x019C,
    0x019D,
    0x019F,
    0x01A0,
    0x01A6,
    0x01A7,
    0x01A9,
    0x01AC,
    0x01AE,
    0x01AF,
    0x01B1,
    0x01B3,
    0x01B7,
    0x01B8,
    0x01BC,
    0x01C4,
    0x01C5,
    0x01C7,
    0x01C8,
    0x01CA,
    0x01CB,
    0x01DE,
    0x01F1,
    0x01F2,
    0x01F6,
    0x01F7,
    0x01F8,
    0x0220,
    0x0222,
    0x023A,
    0x023B,
    0x023D,
    0x023E,
    0x0241,
    0x0243,
    0x0244,
    0x0245,
    0x0246,
    0x0370,
    0x0376,
    0x037F,
    0x0386,
    0x0388,
    0x038C,
    0x038E,
    0x0391,
    0x03A3,
    0x03CF,
    0x03D8,
    0x03F4,
    0x03F7,
    0x03F9,
    0x03FA,
    0x03FD,
    0x0400,
    0x0410,
    0x0460,
    0x048A,
    0x04C0,
    0x04C1,
    0x04D0,
    0x0531,
    0x10A0,
    0x10C7,
    0x10CD,
    0x13A0,
    0x13F0,
    0x1C90,
    0x1CBD,
    0x1E00,
    0x1E9E,
    0x1EA0,
    0x1F08,
    0x1F18,
    0x1F28,
    0x1F38,
    0x1F48,
    0x1F59,
    0x1F68,
    0x1F88,
    0x1F98,
    0x1FA8,
    0x1FB8,
    0x1FBA,
    0x1FBC,
    0x1FC8,
    0x1FCC,
    0x1FD8,
    0x1FDA,
    0x1FE8,
    0x1FEA,
    0x1FEC,
    0x1FF8,
    0x1FFA,
    0x1FFC,
    0x2126,
    0x212A,
    0x212B,
    0x2132,
    0x2160,
    0x2183,
    0x24B6,
    0x2C00,
    0x2C60,
    0x2C62,
    0x2C63,
    0x2C64,
    0x2C67,
    0x2C6D,
    0x2C6E,
    0x2C6F,
    0x2C70,
    0x2C72,
    0x2C75,
    0x2C7E,
    0x2C80,
    0x2CEB,
    0x2CF2,
    0xA640,
    0xA680,
    0xA722,
    0xA732,
    0xA779,
    0xA77D,
    0xA77E,
    0xA78B,
    0xA78D,
    0xA790,
    0xA796,
    0xA7AA,
    0xA7AB,
    0xA7AC,
    0xA7AD,
    0xA7AE,
    0xA7B0,
    0xA7B1,
    0xA7B2,
    0xA7B3,
    0xA7B4,
    0xA7C4,
    0xA7C5,
    0xA7C6,
    0xA7C7,
    0xA7D0,
    0xA7D6,
    0xA7F5,
    0xFF21,
];

pub(crate) const LOWER_CASE_VALUES: [u16; 344] = [
    0x005A, 0x0020,
    0x00D6, 0x0020,
    0x00DE, 0x0020,
    0x812E, 0x0001,
    0x0130, 0xFF39,
    0x8136, 0x0001,
    0x8147, 0x0001,
    0x8176, 0x0001,
    0x0178, 0xFF87,
    0x817D, 0x0001,
    0x0181, 0x00D2,
    0x8184, 0x0001,
    0x0186, 0x00CE,
    0x0187, 0x0001,
    0x018A, 0x00CD,
    0x018B, 0x0001,
    0x018E, 0x004F,
    0x018F, 0x00CA,
    0x0190, 0x00CB,
    0x0191, 0x0001,
    0x0193, 0x00CD,
    0x0194, 0x00CF,
    0x0196, 0x00D3,
    0x0197, 0x00D1,
    0x0198, 0x0001,
    0x019C, 0x00D3,
    0x019D, 0x00D5,
    0x019F, 0x00D6,
    0x81A4, 0x0001,
    0x01A6, 0x00DA,
    0x01A7, 0x0001,
    0x01A9, 0x00DA,
    0x01AC, 0x0001,
    0x01AE, 0x00DA,
    0x01AF, 0x0001,
    0x01B2, 0x00D9,
    0x81B5, 0x0001,
    0x01B7, 0x00DB,
    0x01B8, 0x0001,
    0x01BC, 0x0001,
    0x01C4, 0x0002,
    0x01C5, 0x0001,
    0x01C7, 0x0002,
    0x01C8, 0x0001,
    0x01CA, 0x0002,
    0x81DB, 0x0001,
    0x81EE, 0x0001,
    0x01F1, 0x0002,
    0x81F4, 0x0001,
    0x01F6, 0xFF9F,
    0x01F7, 0xFFC8,
    0x821E, 0x0001,
    0x0220, 0xFF7E,
    0x8232, 0x0001,
    0x023A, 0x2A2B,
    0x023B, 0x0001,
    0x023D, 0xFF5D,
    0x023E, 0x2A28,
    0x0241, 0x0001,
    0x0243, 0xFF3D,
    0x0244, 0x0045,
    0x0245, 0x0047,
    0x824E, 0x0001,
    0x8372, 0x0001,
    0x0376, 0x0001,
    0x037F, 0x0074,
    0x0386, 0x0026,
    0x038A, 0x0025,
    0x038C, 0x0040,
    0x038F, 0x003F,
    0x03A1, 0x0020,
    0x03AB, 0x0020,
    0x03CF, 0x0008,
    0x83EE, 0x0001,
    0x03F4, 0xFFC4,
    0x03F7, 0x0001,
    0x03F9, 0xFFF9,
    0x03FA, 0x0001,
    0x03FF, 0xFF7E,
    0x040F, 0x0050,
    0x042F, 0x0020,
    0x8480, 0x0001,
    0x84BE, 0x0001,
    0x04C0, 0x000F,
    0x84CD, 0x0001,
    0x852E, 0x0001,
    0x0556, 0x0030,
    0x10C5, 0x1C60,
    0x10C7, 0x1C60,
    0x10CD, 0x1C60,
    0x13EF, 0x97D0,
    0x13F5, 0x0008,
    0x1CBA, 0xF440,
    0x1CBF, 0xF440,
    0x9E94, 0x0001,
    0x1E9E, 0xE241,
    0x9EFE, 0x0001,
    0x1F0F, 0xFFF8,
    0x1F1D, 0xFFF8,
    0x1F2F, 0xFFF8,
    0x1F3F, 0xFFF8,
    0x1F4D, 0xFFF8,
    0x9F5F, 0xFFF8,
    0x1F6F, 0xFFF8,
    0x1F8F, 0xFFF8,
    0x1F9F, 0xFFF8,
    0x1FAF, 0xFFF8,
    0x1FB9, 0xFFF8,
    0x1FBB, 0xFFB6,
    0x1FBC, 0xFFF7,
    0x1FCB, 0xFFAA,
    0x1FCC, 0xFFF7,
    0x1FD9, 0xFFF8,
    0x1FDB, 0xFF9C,
    0x1FE9, 0xFFF8,
    0x1FEB, 0xFF90,
    0x1FEC, 0xFFF9,
    0x1FF9, 0xFF80,
    0x1FFB, 0xFF82,
    0x1FFC, 0xFFF7,
    0x2126, 0xE2A3,
    0x212A, 0xDF41,
    0x212B, 0xDFBA,
    0x2132, 0x001C,
    0x216F, 0x0010,
    0x2183, 0x0001,
    0x24CF, 0x001A,
    0x2C2F, 0x0030,
    0x2C60, 0x0001,
    0x2C62, 0xD609,
    0x2C63, 0xF11A,
    0x2C64, 0xD619,
    0xAC6B, 0x0001,
    0x2C6D, 0xD5E4,
    0x2C6E, 0xD603,
    0x2C6F, 0xD5E1,
    0x2C70, 0xD5E2,
    0x2C72, 0x0001,
    0x2C75, 0x0001,
    0x2C7F, 0xD5C1,
    0xACE2, 0x0001,
    0xACED, 0x0001,
    0x2CF2, 0x0001,
    0x266C, 0x0001,
    0x269A, 0x0001,
    0x272E, 0x0001,
    0x276E, 0x0001,
    0x277B, 0x0001,
    0xA77D, 0x75FC,
    0x2786, 0x0001,
    0xA78B, 0x0001,
    0xA78D, 0x5AD8,
    0x2792, 0x0001,
    0x27A8, 0x0001,
    0xA7AA, 0x5ABC,
    0xA7AB, 0x5AB1,
    0xA7AC, 0x5AB5,
    0xA7AD, 0x5ABF,
    0xA7AE, 0x5ABC,
    0xA7B0, 0x5AEE,
    0xA7B1, 0x5AD6,
    0xA7B2, 0x5AEB,
    0xA7B3, 0x03A0,
    0x27C2, 0x0001,
    0xA7C4, 0xFFD0,
    0xA7C5, 0x5ABD,
    0xA7C6, 0x75C8,
    0x27C9, 0x0001,
    0xA7D0, 0x0001,
    0x27D8, 0x0001,
    0xA7F5, 0x0001,
    0xFF3A, 0x0020,
];
