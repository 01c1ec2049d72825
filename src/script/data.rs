use crate::script::{Script, ScriptEntry};

use paste::paste;
use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates the constants and the lookup table from one listing
/// ---------------------------------------------------------------------------
macro_rules! define_scripts {
($(
        $code:ident, $code_str:literal, $name:literal,
        vowels: [ $($v:expr),* $(,)? ],
        consonants: [ $($c:expr),* $(,)? ],
        diacritics: $dstart:literal ..= $dend:literal
    ),* $(,)?) => {
        $(
            pub const $code: Script = Script { code: $code_str, name: $name };
        )*

        $(
            paste! {
                mod [<$code:lower _data>] {
                    pub const VOWELS: &[char] = &[$($v),*];
                    pub const CONSONANTS: &[char] = &[$($c),*];
                }
            }
        )*

        paste! {
            pub static SCRIPT_TABLE: Map<&'static str, ScriptEntry> = phf_map! {
                $(
                    $code_str => ScriptEntry {
                        vowels: [<$code:lower _data>]::VOWELS,
                        consonants: [<$code:lower _data>]::CONSONANTS,
                        diacritic_start: $dstart,
                        diacritic_end: $dend,
                    }
                ),*
            };
        }

        pub fn all_scripts() -> &'static [Script] {
            &[$($code),*]
        }

        pub fn from_code(code: &str) -> Option<Script> {
            let upper = code.to_uppercase();
            match upper.as_str() {
                $(
                    $code_str => Some($code),
                )*
                _ => None,
            }
        }
    };
}

// ---------------------------------------------------------------------------
//    Script definitions
//    Diacritic block U+064B..=U+0652: fathatan, dammatan, kasratan, fatha,
//    damma, kasra, shadda, sukun.
// ---------------------------------------------------------------------------
define_scripts! {
    ARA, "ARA", "Arabic",
        vowels: [ 'ا', 'و', 'ي' ],
        consonants: [
            'ب', 'ت', 'ث', 'ج', 'ح', 'خ', 'د', 'ذ', 'ر', 'ز', 'س', 'ش', 'ص',
            'ض', 'ط', 'ظ', 'ع', 'غ', 'ف', 'ق', 'ك', 'ل', 'م', 'ن', 'ه',
        ],
        diacritics: '\u{064B}' ..= '\u{0652}',

    FAS, "FAS", "Persian",
        vowels: [ 'ا', 'و', 'ي', 'ی' ],
        consonants: [
            'ب', 'پ', 'ت', 'ث', 'ج', 'چ', 'ح', 'خ', 'د', 'ذ', 'ر', 'ز', 'ژ',
            'س', 'ش', 'ص', 'ض', 'ط', 'ظ', 'ع', 'غ', 'ف', 'ق', 'ك', 'ک', 'گ',
            'ل', 'م', 'ن', 'ه',
        ],
        diacritics: '\u{064B}' ..= '\u{0652}',
}
