//! Legacy `§` color-code translation.
//!
//! Older config files carry formatting as `§x` pairs. Everything downstream
//! expects the `&x` spelling with a lowercase code, so values are rewritten
//! before any other processing.

use crate::utils::fuzzy::NamedVariant;

/// Sentinel that introduces a legacy color code.
pub const SENTINEL: char = '§';

/// Replacement for [`SENTINEL`] in translated text.
pub const ALT_SENTINEL: char = '&';

/// Whether `c` may follow the sentinel: hex digits, `K`-`O` and `R`, any case.
pub fn is_color_code_char(c: char) -> bool {
    matches!(
        c,
        '0'..='9' | 'a'..='f' | 'A'..='F' | 'k'..='o' | 'K'..='O' | 'r' | 'R'
    )
}

/// Rewrite every recognized `§x` pair as `&x` with `x` lowercased.
///
/// Unrecognized pairs such as `§Z` are left intact. The output has the same
/// number of characters as the input.
pub fn translate_color_codes(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();

    for i in 0..chars.len().saturating_sub(1) {
        if chars[i] == SENTINEL && is_color_code_char(chars[i + 1]) {
            chars[i] = ALT_SENTINEL;
            chars[i + 1] = chars[i + 1].to_ascii_lowercase();
        }
    }

    chars.into_iter().collect()
}

/// The recognized formatting codes, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorCode {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
    Obfuscated,
    Bold,
    Strikethrough,
    Underline,
    Italic,
    Reset,
}

const ALL_CODES: &[ColorCode] = &[
    ColorCode::Black,
    ColorCode::DarkBlue,
    ColorCode::DarkGreen,
    ColorCode::DarkAqua,
    ColorCode::DarkRed,
    ColorCode::DarkPurple,
    ColorCode::Gold,
    ColorCode::Gray,
    ColorCode::DarkGray,
    ColorCode::Blue,
    ColorCode::Green,
    ColorCode::Aqua,
    ColorCode::Red,
    ColorCode::LightPurple,
    ColorCode::Yellow,
    ColorCode::White,
    ColorCode::Obfuscated,
    ColorCode::Bold,
    ColorCode::Strikethrough,
    ColorCode::Underline,
    ColorCode::Italic,
    ColorCode::Reset,
];

impl ColorCode {
    /// Lowercase code character.
    pub fn code(&self) -> char {
        match self {
            ColorCode::Black => '0',
            ColorCode::DarkBlue => '1',
            ColorCode::DarkGreen => '2',
            ColorCode::DarkAqua => '3',
            ColorCode::DarkRed => '4',
            ColorCode::DarkPurple => '5',
            ColorCode::Gold => '6',
            ColorCode::Gray => '7',
            ColorCode::DarkGray => '8',
            ColorCode::Blue => '9',
            ColorCode::Green => 'a',
            ColorCode::Aqua => 'b',
            ColorCode::Red => 'c',
            ColorCode::LightPurple => 'd',
            ColorCode::Yellow => 'e',
            ColorCode::White => 'f',
            ColorCode::Obfuscated => 'k',
            ColorCode::Bold => 'l',
            ColorCode::Strikethrough => 'm',
            ColorCode::Underline => 'n',
            ColorCode::Italic => 'o',
            ColorCode::Reset => 'r',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorCode::Black => "black",
            ColorCode::DarkBlue => "dark_blue",
            ColorCode::DarkGreen => "dark_green",
            ColorCode::DarkAqua => "dark_aqua",
            ColorCode::DarkRed => "dark_red",
            ColorCode::DarkPurple => "dark_purple",
            ColorCode::Gold => "gold",
            ColorCode::Gray => "gray",
            ColorCode::DarkGray => "dark_gray",
            ColorCode::Blue => "blue",
            ColorCode::Green => "green",
            ColorCode::Aqua => "aqua",
            ColorCode::Red => "red",
            ColorCode::LightPurple => "light_purple",
            ColorCode::Yellow => "yellow",
            ColorCode::White => "white",
            ColorCode::Obfuscated => "obfuscated",
            ColorCode::Bold => "bold",
            ColorCode::Strikethrough => "strikethrough",
            ColorCode::Underline => "underline",
            ColorCode::Italic => "italic",
            ColorCode::Reset => "reset",
        }
    }

    /// Look up a code by its character, in either case.
    pub fn from_code(c: char) -> Option<ColorCode> {
        let c = c.to_ascii_lowercase();
        ALL_CODES.iter().copied().find(|code| code.code() == c)
    }

    /// The `&x` spelling of this code.
    pub fn to_ampersand(&self) -> String {
        format!("{}{}", ALT_SENTINEL, self.code())
    }
}

impl NamedVariant for ColorCode {
    fn variants() -> &'static [Self] {
        ALL_CODES
    }

    fn name(&self) -> &'static str {
        self.label()
    }
}
