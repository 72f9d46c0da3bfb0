//! Month label tables.
//!
//! Month numbers are 1-based throughout, matching `chrono::Datelike::month`.

use super::{LabelStyle, Language};

const EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const DE: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
    "Oktober", "November", "Dezember",
];
const FR: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
    "octobre", "novembre", "décembre",
];
const ES: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
    "octubre", "noviembre", "diciembre",
];
const IT: [&str; 12] = [
    "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno", "luglio", "agosto",
    "settembre", "ottobre", "novembre", "dicembre",
];
const NL: [&str; 12] = [
    "januari", "februari", "maart", "april", "mei", "juni", "juli", "augustus", "september",
    "oktober", "november", "december",
];
const PT: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
    "outubro", "novembro", "dezembro",
];
const SV: [&str; 12] = [
    "januari", "februari", "mars", "april", "maj", "juni", "juli", "augusti", "september",
    "oktober", "november", "december",
];

const EMOJI: [&str; 12] = [
    "⛄", "💘", "🍀", "🌷", "🌼", "☀", "🏖", "🍉", "🍂", "🎃", "🍁", "🎄",
];

fn index(month: u32) -> usize {
    (month.clamp(1, 12) - 1) as usize
}

/// Full month name as written in `language`.
pub fn month_name(language: Language, month: u32) -> &'static str {
    let table = match language {
        Language::En => &EN,
        Language::De => &DE,
        Language::Fr => &FR,
        Language::Es => &ES,
        Language::It => &IT,
        Language::Nl => &NL,
        Language::Pt => &PT,
        Language::Sv => &SV,
    };
    table[index(month)]
}

pub fn month_emoji(month: u32) -> &'static str {
    EMOJI[index(month)]
}

/// Label drawn in a first-of-month cell.
pub fn month_label(style: LabelStyle, language: Language, month: u32) -> String {
    match style {
        LabelStyle::Number => month.to_string(),
        LabelStyle::Initial => capitalized(month_name(language, month), 1),
        LabelStyle::Name => capitalized(month_name(language, month), 3),
        LabelStyle::Emoji => month_emoji(month).to_string(),
    }
}

/// First `len` characters with the leading one uppercased.
fn capitalized(name: &str, len: usize) -> String {
    let mut chars = name.chars().take(len);
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
