use crate::alignment::AlignedGrid;
use crate::types::scripture::TranslationId;

const ROW_BG: &str = "#FFF";

/// Serializes the aligned grid as one static HTML table, one column per
/// translation id in the given order. Texts and ids are inserted verbatim,
/// without HTML-escaping; a translation with no text for a cell renders as
/// an empty cell.
pub fn render(grid: &AlignedGrid, column_ids: &[TranslationId]) -> String {
    let mut html_bits: Vec<String> = vec![
        "<html>".to_string(),
        "<head>".to_string(),
        "<title>Bible</title>".to_string(),
        "</head>".to_string(),
        "<body>".to_string(),
        "<h1>Bible</h1>".to_string(),
        "<table>".to_string(),
        "<tbody>".to_string(),
    ];

    for chapter in &grid.chapters {
        html_bits.push("<tr>".to_string());
        html_bits.push(format!(
            "<th colspan=\"{}\" style=\"font-size: xx-large; border-bottom: black 2px solid\">- {} - </th>",
            column_ids.len() + 1,
            chapter.chapter
        ));
        html_bits.push("</tr>".to_string());

        html_bits.push("<tr>".to_string());
        html_bits.push("<th></th>".to_string());
        for id in column_ids {
            html_bits.push(format!("<th>{}</th>", id));
        }
        html_bits.push("</tr>".to_string());

        for row in &chapter.verses {
            html_bits.push("<tr>".to_string());
            html_bits.push(format!(
                "<th style=\"vertical-align: top; background-color: {ROW_BG}; padding: 5px 15px\">{}</th>",
                row.verse_range
            ));
            for id in column_ids {
                html_bits.push(format!(
                    "<td style=\"vertical-align: top; background-color: {ROW_BG}; text-align: justify; padding: 5px 15px\">{}</td>",
                    row.text_for(id).unwrap_or("")
                ));
            }
            html_bits.push("</tr>".to_string());
        }
    }

    html_bits.push("</tbody>".to_string());
    html_bits.push("</table>".to_string());
    html_bits.push("</body>".to_string());
    html_bits.push("</html>".to_string());
    html_bits.join("\n")
}
