//! Static font-metric tables for the standard PDF Helvetica faces.
//!
//! Widths are in em units (AFM widths / 1000) and cover ASCII 0x20..=0x7E plus the
//! WinAnsi typographic block 0x80..=0x9F (curly quotes, dashes, bullet, ellipsis, euro).
//! Characters are measured as the WinAnsi glyph they encode to: other Latin-1 letters
//! fall back to `average_char_width`, and unencodable characters measure as `?`.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Font enum
// ────────────────────────────────────────────────────────────────────────────

/// The three standard Type1 faces used by the exported document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PdfFont {
    /// Body text.
    Helvetica,
    /// Title line.
    HelveticaBold,
    /// Footer line.
    HelveticaOblique,
}

impl PdfFont {
    pub const ALL: [PdfFont; 3] = [
        PdfFont::Helvetica,
        PdfFont::HelveticaBold,
        PdfFont::HelveticaOblique,
    ];

    /// PostScript name of the standard 14 font.
    pub fn base_font(&self) -> &'static str {
        match self {
            PdfFont::Helvetica => "Helvetica",
            PdfFont::HelveticaBold => "Helvetica-Bold",
            PdfFont::HelveticaOblique => "Helvetica-Oblique",
        }
    }

    /// Resource name used inside page content streams.
    pub fn resource_key(&self) -> &'static str {
        match self {
            PdfFont::Helvetica => "F1",
            PdfFont::HelveticaBold => "F2",
            PdfFont::HelveticaOblique => "F3",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for a font face.
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
///
/// `win_ansi_widths[i]` is the glyph at WinAnsi code `0x80 + i`; undefined slots are zero.
pub struct FontMetricTable {
    widths: [f32; 95],
    win_ansi_widths: [f32; 32],
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars().map(|c| self.char_width(c)).sum()
    }

    /// Width of a string in points at `size_pt`.
    pub fn measure_pt(&self, s: &str, size_pt: f32) -> f32 {
        self.measure_str(s) * size_pt
    }

    pub fn char_width(&self, c: char) -> f32 {
        match win_ansi_byte(c) {
            code @ 0x20..=0x7E => self.widths[usize::from(code) - 32],
            code @ 0x80..=0x9F => self.win_ansi_widths[usize::from(code) - 0x80],
            _ => self.average_char_width,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// WinAnsi encoding
// ────────────────────────────────────────────────────────────────────────────

/// Unicode code points of WinAnsi 0x80..=0x9F. `None` marks codes with no glyph.
const WIN_ANSI_HIGH: [Option<char>; 32] = [
    Some('\u{20AC}'), None,             Some('\u{201A}'), Some('\u{0192}'),
    Some('\u{201E}'), Some('\u{2026}'), Some('\u{2020}'), Some('\u{2021}'),
    Some('\u{02C6}'), Some('\u{2030}'), Some('\u{0160}'), Some('\u{2039}'),
    Some('\u{0152}'), None,             Some('\u{017D}'), None,
    None,             Some('\u{2018}'), Some('\u{2019}'), Some('\u{201C}'),
    Some('\u{201D}'), Some('\u{2022}'), Some('\u{2013}'), Some('\u{2014}'),
    Some('\u{02DC}'), Some('\u{2122}'), Some('\u{0161}'), Some('\u{203A}'),
    Some('\u{0153}'), None,             Some('\u{017E}'), Some('\u{0178}'),
];

/// Maps a character to its single-byte WinAnsi code.
///
/// ASCII and Latin-1 from U+00A0 pass through, the typographic characters of the
/// 0x80..=0x9F block map to their slots, control characters become spaces, and
/// everything else (C1 controls included) becomes `?`.
pub fn win_ansi_byte(c: char) -> u8 {
    match c as u32 {
        0x00..=0x1F | 0x7F => b' ',
        code @ (0x20..=0x7E | 0xA0..=0xFF) => code as u8,
        _ => WIN_ANSI_HIGH
            .iter()
            .position(|&slot| slot == Some(c))
            .map(|i| 0x80 + i as u8)
            .unwrap_or(b'?'),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

#[rustfmt::skip]
const HELVETICA_WIDTHS: [f32; 95] = [
    // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
    0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
    // 0      1      2      3      4      5      6      7      8      9
    0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
    // :      ;      <      =      >      ?      @
    0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
    // A      B      C      D      E      F      G      H      I      J      K      L      M
    0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
    // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
    0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
    // [      \      ]      ^      _      `
    0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
    // a      b      c      d      e      f      g      h      i      j      k      l      m
    0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
    // n      o      p      q      r      s      t      u      v      w      x      y      z
    0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
    // {      |      }      ~
    0.334, 0.260, 0.334, 0.584,
];

#[rustfmt::skip]
const HELVETICA_WIN_ANSI_WIDTHS: [f32; 32] = [
    // €      -      ‚      ƒ      „      …      †      ‡
    0.556, 0.0,   0.222, 0.556, 0.333, 1.000, 0.556, 0.556,
    // ˆ      ‰      Š      ‹      Œ      -      Ž      -
    0.333, 1.000, 0.667, 0.333, 1.000, 0.0,   0.611, 0.0,
    // -      ‘      ’      “      ”      •      –      —
    0.0,   0.222, 0.222, 0.333, 0.333, 0.350, 0.556, 1.000,
    // ˜      ™      š      ›      œ      -      ž      Ÿ
    0.333, 1.000, 0.500, 0.333, 0.944, 0.0,   0.500, 0.667,
];

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    widths: HELVETICA_WIDTHS,
    win_ansi_widths: HELVETICA_WIN_ANSI_WIDTHS,
    average_char_width: 0.556,
    space_width: 0.278,
};

static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    win_ansi_widths: [
        // €      -      ‚      ƒ      „      …      †      ‡
        0.556, 0.0,   0.278, 0.556, 0.500, 1.000, 0.556, 0.556,
        // ˆ      ‰      Š      ‹      Œ      -      Ž      -
        0.333, 1.000, 0.667, 0.333, 1.000, 0.0,   0.611, 0.0,
        // -      ‘      ’      “      ”      •      –      —
        0.0,   0.278, 0.278, 0.500, 0.500, 0.350, 0.556, 1.000,
        // ˜      ™      š      ›      œ      -      ž      Ÿ
        0.333, 1.000, 0.556, 0.333, 0.944, 0.0,   0.500, 0.667,
    ],
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.333, 0.474, 0.556, 0.556, 0.889, 0.722, 0.238, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.333, 0.333, 0.584, 0.584, 0.584, 0.611, 0.975,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.722, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.556, 0.722, 0.611, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.584, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.611, 0.556, 0.611, 0.556, 0.333, 0.611, 0.611, 0.278, 0.278, 0.556, 0.278, 0.889,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.611, 0.611, 0.611, 0.611, 0.389, 0.556, 0.333, 0.611, 0.556, 0.778, 0.556, 0.556, 0.500,
        // {      |      }      ~
        0.389, 0.280, 0.389, 0.584,
    ],
    average_char_width: 0.611,
    space_width: 0.278,
};

/// Oblique shares the upright glyph widths.
static HELVETICA_OBLIQUE_TABLE: FontMetricTable = FontMetricTable {
    widths: HELVETICA_WIDTHS,
    win_ansi_widths: HELVETICA_WIN_ANSI_WIDTHS,
    average_char_width: 0.556,
    space_width: 0.278,
};

/// Returns the static metric table for the given face.
pub fn get_metrics(font: PdfFont) -> &'static FontMetricTable {
    match font {
        PdfFont::Helvetica => &HELVETICA_TABLE,
        PdfFont::HelveticaBold => &HELVETICA_BOLD_TABLE,
        PdfFont::HelveticaOblique => &HELVETICA_OBLIQUE_TABLE,
    }
}
