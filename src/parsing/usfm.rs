use crate::types::scripture::{CvIndex, VerseGroup};
use regex::Regex;

// Markers whose whole line is front/heading matter rather than verse text.
const SKIPPED_MARKERS: &[&str] = &[
    "id", "ide", "h", "toc1", "toc2", "toc3", "mt", "mt1", "mt2", "mt3", "ms", "ms1", "s",
    "s1", "s2", "r", "rem", "d", "sp",
];

/// Scans line-oriented USFM-style text for `\c` and `\v` markers and builds
/// the chapter/verse index the alignment engine consumes. No validation is
/// performed; anything before the first chapter marker, or between a `\c`
/// and its first `\v`, is ignored. Verse text is whitespace-normalized and
/// stripped of inline markers.
pub fn parse_usfm(content: &str) -> Vec<CvIndex> {
    let chapter_re = Regex::new(r"^\\c\s+(\S+)").unwrap();
    let verse_re = Regex::new(r"^\\v\s+(\S+)\s*(.*)$").unwrap();
    let marker_re = Regex::new(r"^\\([a-z0-9]+)\*?\s*(.*)$").unwrap();

    let mut cv_indexes: Vec<CvIndex> = Vec::new();
    let mut current_group: Option<VerseGroup> = None;

    for line in content.lines() {
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() {
            continue;
        }

        if let Some(caps) = chapter_re.captures(line_trimmed) {
            flush_group(&mut cv_indexes, &mut current_group);
            cv_indexes.push(CvIndex {
                chapter: caps.get(1).map_or_else(String::new, |m| m.as_str().to_string()),
                verses: Vec::new(),
            });
            continue;
        }

        if let Some(caps) = verse_re.captures(line_trimmed) {
            flush_group(&mut cv_indexes, &mut current_group);
            if cv_indexes.is_empty() {
                // Verse marker before any chapter marker; nothing to attach it to.
                continue;
            }
            current_group = Some(VerseGroup {
                verse_range: caps.get(1).map_or_else(String::new, |m| m.as_str().to_string()),
                text: strip_inline_markers(caps.get(2).map_or("", |m| m.as_str())),
            });
            continue;
        }

        if let Some(caps) = marker_re.captures(line_trimmed) {
            let marker = caps.get(1).map_or("", |m| m.as_str());
            if SKIPPED_MARKERS.contains(&marker) {
                continue;
            }
            // Paragraph-level marker (\p, \q1, ...): its trailing text still
            // belongs to the current verse.
            append_text(&mut current_group, caps.get(2).map_or("", |m| m.as_str()));
            continue;
        }

        // Plain continuation line.
        append_text(&mut current_group, line_trimmed);
    }
    flush_group(&mut cv_indexes, &mut current_group);

    cv_indexes
}

fn flush_group(cv_indexes: &mut Vec<CvIndex>, current_group: &mut Option<VerseGroup>) {
    if let Some(mut group) = current_group.take() {
        group.text = normalize_space(&group.text);
        if let Some(chapter) = cv_indexes.last_mut() {
            chapter.verses.push(vec![group]);
        }
    }
}

fn append_text(current_group: &mut Option<VerseGroup>, text: &str) {
    if let Some(group) = current_group.as_mut() {
        let stripped = strip_inline_markers(text);
        if !stripped.is_empty() {
            group.text.push(' ');
            group.text.push_str(&stripped);
        }
    }
}

fn strip_inline_markers(text: &str) -> String {
    let inline_re = Regex::new(r"\\[+a-zA-Z0-9]+\*?").unwrap();
    normalize_space(&inline_re.replace_all(text, " "))
}

fn normalize_space(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
