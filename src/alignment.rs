use tracing::debug;

use crate::types::scripture::{CvIndex, TranslationId};

/// The merged chapter/verse grid. Every level is an explicit ordered
/// sequence of key/value pairs: chapters in reference order, verse ranges
/// in reference order, cells in reference-then-registration order. Built
/// once by `build_grid` and read once by the renderer.
#[derive(Debug, Default)]
pub struct AlignedGrid {
    pub chapters: Vec<ChapterRows>,
}

#[derive(Debug)]
pub struct ChapterRows {
    pub chapter: String,
    pub verses: Vec<VerseRow>,
}

#[derive(Debug)]
pub struct VerseRow {
    pub verse_range: String,
    pub cells: Vec<(TranslationId, String)>,
}

impl VerseRow {
    pub fn text_for(&self, id: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(cell_id, _)| cell_id == id)
            .map(|(_, text)| text.as_str())
    }

    fn set(&mut self, id: &str, text: String) {
        match self.cells.iter_mut().find(|(cell_id, _)| cell_id == id) {
            Some(cell) => cell.1 = text,
            None => self.cells.push((id.to_string(), text)),
        }
    }
}

/// Builds the aligned grid. The reference translation alone defines which
/// (chapter, verse-range) keys exist; every other translation only fills
/// cells whose chapter label and verse-range string match the reference
/// byte-for-byte. Non-matching data points are dropped without error.
///
/// Per verse slot only the first group is consulted; empty slots are
/// skipped. A verse range repeated within a reference chapter keeps the
/// later text (last write wins).
pub fn build_grid(
    reference_id: &str,
    reference: &[CvIndex],
    others: &[(TranslationId, &[CvIndex])],
) -> AlignedGrid {
    let mut grid = AlignedGrid::default();

    for cv_index in reference {
        // A repeated chapter label resets that chapter in place, keeping
        // its original position.
        let chapter_pos = match grid
            .chapters
            .iter()
            .position(|c| c.chapter == cv_index.chapter)
        {
            Some(pos) => {
                debug!(chapter = %cv_index.chapter, "duplicate chapter in reference; resetting");
                grid.chapters[pos].verses.clear();
                pos
            }
            None => {
                grid.chapters.push(ChapterRows {
                    chapter: cv_index.chapter.clone(),
                    verses: Vec::new(),
                });
                grid.chapters.len() - 1
            }
        };
        let rows = &mut grid.chapters[chapter_pos];

        for slot in &cv_index.verses {
            let Some(group) = slot.first() else {
                continue;
            };
            match rows
                .verses
                .iter_mut()
                .find(|row| row.verse_range == group.verse_range)
            {
                Some(row) => {
                    debug!(
                        chapter = %cv_index.chapter,
                        verse_range = %group.verse_range,
                        "duplicate verse range in reference; keeping later text"
                    );
                    row.set(reference_id, group.text.clone());
                }
                None => rows.verses.push(VerseRow {
                    verse_range: group.verse_range.clone(),
                    cells: vec![(reference_id.to_string(), group.text.clone())],
                }),
            }
        }
    }

    for (other_id, cv_indexes) in others {
        for cv_index in *cv_indexes {
            let Some(rows) = grid
                .chapters
                .iter_mut()
                .find(|c| c.chapter == cv_index.chapter)
            else {
                debug!(
                    translation = %other_id,
                    chapter = %cv_index.chapter,
                    "chapter absent from reference; dropping"
                );
                continue;
            };
            for slot in &cv_index.verses {
                let Some(group) = slot.first() else {
                    continue;
                };
                match rows
                    .verses
                    .iter_mut()
                    .find(|row| row.verse_range == group.verse_range)
                {
                    Some(row) => row.set(other_id, group.text.clone()),
                    None => debug!(
                        translation = %other_id,
                        chapter = %cv_index.chapter,
                        verse_range = %group.verse_range,
                        "verse range absent from reference; dropping"
                    ),
                }
            }
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scripture::VerseGroup;

    fn group(verse_range: &str, text: &str) -> VerseGroup {
        VerseGroup {
            verse_range: verse_range.to_string(),
            text: text.to_string(),
        }
    }

    fn chapter(label: &str, slots: Vec<Vec<VerseGroup>>) -> CvIndex {
        CvIndex {
            chapter: label.to_string(),
            verses: slots,
        }
    }

    #[test]
    fn matching_cells_merge_and_foreign_keys_are_dropped() {
        let reference = vec![chapter("1", vec![vec![group("1", "In the beginning")]])];
        let german = vec![chapter("1", vec![vec![group("1", "Am Anfang")]])];
        // Range "2" does not exist in the reference.
        let french = vec![chapter("1", vec![vec![group("2", "Au commencement")]])];

        let grid = build_grid(
            "en",
            &reference,
            &[
                ("de".to_string(), german.as_slice()),
                ("fr".to_string(), french.as_slice()),
            ],
        );

        assert_eq!(grid.chapters.len(), 1);
        assert_eq!(grid.chapters[0].verses.len(), 1);
        let row = &grid.chapters[0].verses[0];
        assert_eq!(row.text_for("en"), Some("In the beginning"));
        assert_eq!(row.text_for("de"), Some("Am Anfang"));
        assert_eq!(row.text_for("fr"), None);
    }

    #[test]
    fn verse_ranges_must_match_exactly() {
        let reference = vec![chapter("1", vec![vec![group("1", "ref text")]])];
        let other = vec![chapter("1", vec![vec![group("1-2", "spanning text")]])];

        let grid = build_grid("en", &reference, &[("de".to_string(), other.as_slice())]);

        let row = &grid.chapters[0].verses[0];
        assert_eq!(row.verse_range, "1");
        assert_eq!(row.text_for("de"), None);
    }

    #[test]
    fn comparator_chapter_absent_from_reference_is_ignored() {
        let reference = vec![chapter("1", vec![vec![group("1", "only chapter")]])];
        let other = vec![chapter("2", vec![vec![group("1", "extra chapter")]])];

        let grid = build_grid("en", &reference, &[("de".to_string(), other.as_slice())]);

        assert_eq!(grid.chapters.len(), 1);
        assert_eq!(grid.chapters[0].chapter, "1");
    }

    #[test]
    fn empty_slots_are_skipped() {
        let reference = vec![chapter(
            "1",
            vec![vec![], vec![group("2", "second verse")], vec![]],
        )];

        let grid = build_grid("en", &reference, &[]);

        assert_eq!(grid.chapters[0].verses.len(), 1);
        assert_eq!(grid.chapters[0].verses[0].verse_range, "2");
    }

    #[test]
    fn only_first_group_of_a_slot_is_used() {
        let reference = vec![chapter(
            "1",
            vec![vec![group("1", "first reading"), group("1b", "second reading")]],
        )];

        let grid = build_grid("en", &reference, &[]);

        assert_eq!(grid.chapters[0].verses.len(), 1);
        assert_eq!(grid.chapters[0].verses[0].text_for("en"), Some("first reading"));
    }

    #[test]
    fn duplicate_reference_range_keeps_later_text() {
        let reference = vec![chapter(
            "1",
            vec![vec![group("1", "earlier")], vec![group("1", "later")]],
        )];

        let grid = build_grid("en", &reference, &[]);

        assert_eq!(grid.chapters[0].verses.len(), 1);
        assert_eq!(grid.chapters[0].verses[0].text_for("en"), Some("later"));
    }

    #[test]
    fn chapter_and_verse_order_follow_the_reference() {
        let reference = vec![
            chapter("2", vec![vec![group("3", "c2v3")], vec![group("1", "c2v1")]]),
            chapter("1", vec![vec![group("1", "c1v1")]]),
        ];

        let grid = build_grid("en", &reference, &[]);

        let chapters: Vec<&str> = grid.chapters.iter().map(|c| c.chapter.as_str()).collect();
        assert_eq!(chapters, vec!["2", "1"]);
        let ranges: Vec<&str> = grid.chapters[0]
            .verses
            .iter()
            .map(|row| row.verse_range.as_str())
            .collect();
        assert_eq!(ranges, vec!["3", "1"]);
    }

    #[test]
    fn cells_follow_registration_order() {
        let reference = vec![chapter("1", vec![vec![group("1", "ref")]])];
        let second = vec![chapter("1", vec![vec![group("1", "zwei")]])];
        let third = vec![chapter("1", vec![vec![group("1", "trois")]])];

        let grid = build_grid(
            "en",
            &reference,
            &[
                ("de".to_string(), second.as_slice()),
                ("fr".to_string(), third.as_slice()),
            ],
        );

        let ids: Vec<&str> = grid.chapters[0].verses[0]
            .cells
            .iter()
            .map(|(id, _)| id.as_str())
            .collect();
        assert_eq!(ids, vec!["en", "de", "fr"]);
    }
}
