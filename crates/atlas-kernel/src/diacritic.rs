//! The Unicode `Diacritic` property (PropList.txt, Unicode 17.0).
//!
//! Unlike `is_combining_mark`, this also covers spacing and modifier
//! diacritics such as `` ` ``, `^`, `¨`, `·` and most of U+02B0..U+02FF.

/// Whether `c` carries the `Diacritic` property.
pub(crate) fn is_diacritic(c: char) -> bool {
    let c = c as u32;
    DIACRITIC
        .binary_search_by(|&(lo, hi)| {
            if hi < c {
                std::cmp::Ordering::Less
            } else if lo > c {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// Inclusive, sorted, non-overlapping ranges.
#[rustfmt::skip]
const DIACRITIC: &[(u32, u32)] = &[
    (0x005E, 0x005E),
    (0x0060, 0x0060),
    (0x00A8, 0x00A8),
    (0x00AF, 0x00AF),
    (0x00B4, 0x00B4),
    (0x00B7, 0x00B8),
    (0x02B0, 0x034E),
    (0x0350, 0x0357),
    (0x035D, 0x0362),
    (0x0374, 0x0375),
    (0x037A, 0x037A),
    (0x0384, 0x0385),
    (0x0483, 0x0487),
    (0x0559, 0x0559),
    (0x0591, 0x05BD),
    (0x05BF, 0x05BF),
    (0x05C1, 0x05C2),
    (0x05C4, 0x05C5),
    (0x05C7, 0x05C7),
    (0x064B, 0x0652),
    (0x0657, 0x0658),
    (0x06DF, 0x06E0),
    (0x06E5, 0x06E6),
    (0x06EA, 0x06EC),
    (0x0730, 0x074A),
    (0x07A6, 0x07B0),
    (0x07EB, 0x07F5),
    (0x0818, 0x0819),
    (0x0898, 0x089F),
    (0x08C9, 0x08D2),
    (0x08E3, 0x08FE),
    (0x093C, 0x093C),
    (0x094D, 0x094D),
    (0x0951, 0x0954),
    (0x0971, 0x0971),
    (0x09BC, 0x09BC),
    (0x09CD, 0x09CD),
    (0x0A3C, 0x0A3C),
    (0x0A4D, 0x0A4D),
    (0x0ABC, 0x0ABC),
    (0x0ACD, 0x0ACD),
    (0x0AFD, 0x0AFF),
    (0x0B3C, 0x0B3C),
    (0x0B4D, 0x0B4D),
    (0x0B55, 0x0B55),
    (0x0BCD, 0x0BCD),
    (0x0C3C, 0x0C3C),
    (0x0C4D, 0x0C4D),
    (0x0CBC, 0x0CBC),
    (0x0CCD, 0x0CCD),
    (0x0D3B, 0x0D3C),
    (0x0D4D, 0x0D4D),
    (0x0DCA, 0x0DCA),
    (0x0E3A, 0x0E3A),
    (0x0E47, 0x0E4C),
    (0x0E4E, 0x0E4E),
    (0x0EBA, 0x0EBA),
    (0x0EC8, 0x0ECC),
    (0x0F18, 0x0F19),
    (0x0F35, 0x0F35),
    (0x0F37, 0x0F37),
    (0x0F39, 0x0F39),
    (0x0F3E, 0x0F3F),
    (0x0F82, 0x0F84),
    (0x0F86, 0x0F87),
    (0x0FC6, 0x0FC6),
    (0x1037, 0x1037),
    (0x1039, 0x103A),
    (0x1063, 0x1064),
    (0x1069, 0x106D),
    (0x1087, 0x108D),
    (0x108F, 0x108F),
    (0x109A, 0x109B),
    (0x135D, 0x135F),
    (0x1714, 0x1715),
    (0x1734, 0x1734),
    (0x17C9, 0x17D3),
    (0x17DD, 0x17DD),
    (0x1939, 0x193B),
    (0x1A60, 0x1A60),
    (0x1A75, 0x1A7C),
    (0x1A7F, 0x1A7F),
    (0x1AB0, 0x1ABE),
    (0x1AC1, 0x1ACB),
    (0x1ACF, 0x1ADD),
    (0x1AE0, 0x1AEB),
    (0x1B34, 0x1B34),
    (0x1B44, 0x1B44),
    (0x1B6B, 0x1B73),
    (0x1BAA, 0x1BAB),
    (0x1BE6, 0x1BE6),
    (0x1BF2, 0x1BF3),
    (0x1C36, 0x1C37),
    (0x1C78, 0x1C7D),
    (0x1CD0, 0x1CE8),
    (0x1CED, 0x1CED),
    (0x1CF4, 0x1CF4),
    (0x1CF7, 0x1CF9),
    (0x1D2C, 0x1D6A),
    (0x1D9B, 0x1DBE),
    (0x1DC4, 0x1DCF),
    (0x1DF5, 0x1DFF),
    (0x1FBD, 0x1FBD),
    (0x1FBF, 0x1FC1),
    (0x1FCD, 0x1FCF),
    (0x1FDD, 0x1FDF),
    (0x1FED, 0x1FEF),
    (0x1FFD, 0x1FFE),
    (0x2CEF, 0x2CF1),
    (0x2E2F, 0x2E2F),
    (0x302A, 0x302F),
    (0x3099, 0x309C),
    (0x30FC, 0x30FC),
    (0xA66F, 0xA66F),
    (0xA67C, 0xA67D),
    (0xA67F, 0xA67F),
    (0xA69C, 0xA69D),
    (0xA6F0, 0xA6F1),
    (0xA700, 0xA721),
    (0xA788, 0xA78A),
    (0xA7F1, 0xA7F1),
    (0xA7F8, 0xA7F9),
    (0xA806, 0xA806),
    (0xA82C, 0xA82C),
    (0xA8C4, 0xA8C4),
    (0xA8E0, 0xA8F1),
    (0xA92B, 0xA92E),
    (0xA953, 0xA953),
    (0xA9B3, 0xA9B3),
    (0xA9C0, 0xA9C0),
    (0xA9E5, 0xA9E5),
    (0xAA7B, 0xAA7D),
    (0xAABF, 0xAAC2),
    (0xAAF6, 0xAAF6),
    (0xAB5B, 0xAB5F),
    (0xAB69, 0xAB6B),
    (0xABEC, 0xABED),
    (0xFB1E, 0xFB1E),
    (0xFE20, 0xFE2F),
    (0xFF3E, 0xFF3E),
    (0xFF40, 0xFF40),
    (0xFF70, 0xFF70),
    (0xFF9E, 0xFF9F),
    (0xFFE3, 0xFFE3),
    (0x102E0, 0x102E0),
    (0x10780, 0x10785),
    (0x10787, 0x107B0),
    (0x107B2, 0x107BA),
    (0x10A38, 0x10A3A),
    (0x10A3F, 0x10A3F),
    (0x10AE5, 0x10AE6),
    (0x10D22, 0x10D27),
    (0x10D4E, 0x10D4E),
    (0x10D69, 0x10D6D),
    (0x10EFA, 0x10EFA),
    (0x10EFD, 0x10EFF),
    (0x10F46, 0x10F50),
    (0x10F82, 0x10F85),
    (0x11046, 0x11046),
    (0x11070, 0x11070),
    (0x110B9, 0x110BA),
    (0x11133, 0x11134),
    (0x11173, 0x11173),
    (0x111C0, 0x111C0),
    (0x111CA, 0x111CC),
    (0x11235, 0x11236),
    (0x112E9, 0x112EA),
    (0x1133B, 0x1133C),
    (0x1134D, 0x1134D),
    (0x11366, 0x1136C),
    (0x11370, 0x11374),
    (0x113CE, 0x113D0),
    (0x113D2, 0x113D3),
    (0x113E1, 0x113E2),
    (0x11442, 0x11442),
    (0x11446, 0x11446),
    (0x114C2, 0x114C3),
    (0x115BF, 0x115C0),
    (0x1163F, 0x1163F),
    (0x116B6, 0x116B7),
    (0x1172B, 0x1172B),
    (0x11839, 0x1183A),
    (0x1193D, 0x1193E),
    (0x11943, 0x11943),
    (0x119E0, 0x119E0),
    (0x11A34, 0x11A34),
    (0x11A47, 0x11A47),
    (0x11A99, 0x11A99),
    (0x11C3F, 0x11C3F),
    (0x11D42, 0x11D42),
    (0x11D44, 0x11D45),
    (0x11D97, 0x11D97),
    (0x11DD9, 0x11DD9),
    (0x11F41, 0x11F42),
    (0x11F5A, 0x11F5A),
    (0x13447, 0x13455),
    (0x1612F, 0x1612F),
    (0x16AF0, 0x16AF4),
    (0x16B30, 0x16B36),
    (0x16D6B, 0x16D6C),
    (0x16F8F, 0x16F9F),
    (0x16FF0, 0x16FF1),
    (0x1AFF0, 0x1AFF3),
    (0x1AFF5, 0x1AFFB),
    (0x1AFFD, 0x1AFFE),
    (0x1CF00, 0x1CF2D),
    (0x1CF30, 0x1CF46),
    (0x1D167, 0x1D169),
    (0x1D16D, 0x1D172),
    (0x1D17B, 0x1D182),
    (0x1D185, 0x1D18B),
    (0x1D1AA, 0x1D1AD),
    (0x1E030, 0x1E06D),
    (0x1E130, 0x1E136),
    (0x1E2AE, 0x1E2AE),
    (0x1E2EC, 0x1E2EF),
    (0x1E5EE, 0x1E5EF),
    (0x1E8D0, 0x1E8D6),
    (0x1E944, 0x1E946),
    (0x1E948, 0x1E94A),
];
