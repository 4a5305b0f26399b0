/// Replaces ASCII angle-bracket quote markers with typographic quotation
/// marks. Double-angle pairs are substituted first so the single-angle pass
/// cannot split `<<` into two opening single quotes.
pub fn substitute_quotes(text: &str) -> String {
    text.replace("<<", "\u{201C}")
        .replace(">>", "\u{201D}")
        .replace('<', "\u{2018}")
        .replace('>', "\u{2019}")
}
