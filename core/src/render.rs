//! Plain-text rendering of a finished puzzle.

use crate::WordSearch;
use crate::word_search::PlacementOutcome;

pub const HEADER: &str = "SOPA DE LETRAS";

pub const WORDS_HEADING: &str = "Palabras a encontrar:";

/// Render the grid and the placed words the way they are printed and saved.
pub fn to_text(search: &WordSearch) -> String {
    let mut output = String::new();

    output.push_str(HEADER);
    output.push('\n');
    output.push_str(&"=".repeat(search.grid.size * 2));
    output.push('\n');

    for row in search.grid.rows() {
        let line: Vec<String> = row
            .iter()
            .map(|cell| cell.get_display_char().to_string())
            .collect();
        output.push_str(&line.join(" "));
        output.push('\n');
    }

    output.push('\n');
    output.push_str(WORDS_HEADING);
    output.push('\n');
    output.push_str(&search.placed_words().join(", "));
    output.push('\n');

    output
}

/// Per-word summary of the placement run, one line per input word.
pub fn report_text(search: &WordSearch) -> String {
    let mut output = String::new();
    for entry in &search.report {
        let line = match &entry.outcome {
            PlacementOutcome::Placed(p) => format!(
                "{}: placed at row {}, col {} going {} ({} attempts)",
                entry.word,
                p.row + 1,
                p.col + 1,
                p.direction.name(),
                entry.attempts
            ),
            PlacementOutcome::InvalidChars => {
                format!("{}: skipped, contains characters outside the alphabet", entry.word)
            }
            PlacementOutcome::TooLong => {
                format!("{}: skipped, longer than the grid", entry.word)
            }
            PlacementOutcome::NoSlot => format!(
                "{}: skipped, no slot found in {} attempts",
                entry.word, entry.attempts
            ),
        };
        output.push_str(&line);
        output.push('\n');
    }
    output
}
