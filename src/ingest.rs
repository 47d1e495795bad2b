use std::{collections::HashSet, fs::File, path::Path};

use csv::ReaderBuilder;

use crate::core::{SvmineError, Utterance};

/// First-column sentinel closing a child's block of rows.
const END_MARKER: &str = "Total Frequency";

// Transcript fields that are not utterance text (id and age columns).
const DROPPED_COLUMNS: [usize; 2] = [0, 2];

/// Reads the transcript table (a CSV export of the coded spreadsheet) and
/// slices out one child's utterances.
pub fn read_transcript(path: &Path, child_id: &str) -> Result<Vec<Utterance>, SvmineError> {
    let mut reader = ReaderBuilder::new().has_headers(false).flexible(true).from_reader(File::open(path)?);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|cell| cell.trim().to_string()).collect());
    }

    let rows = child_rows(rows, child_id)?;
    Ok(flatten_columns(&rows))
}

/// Rows belonging to the given child: everything after the row whose first
/// cell equals the child id, up to and including the `Total Frequency` row
/// (to the end of the table when the end sentinel is absent). Non-utterance
/// columns, duplicate rows, and rows with an empty cell are dropped.
pub fn child_rows(
    rows: Vec<Vec<String>>,
    child_id: &str,
) -> Result<Vec<Vec<String>>, SvmineError> {
    let start = rows
        .iter()
        .position(|row| row.first().map(String::as_str) == Some(child_id))
        .ok_or_else(|| SvmineError::ChildIdNotFound(child_id.to_string()))?;

    let rows = &rows[start + 1..];
    let end = rows
        .iter()
        .position(|row| row.first().map(String::as_str) == Some(END_MARKER))
        .map(|idx| idx + 1)
        .unwrap_or(rows.len());

    let mut seen = HashSet::new();
    let sliced = rows[..end]
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|(idx, _)| !DROPPED_COLUMNS.contains(idx))
                .map(|(_, cell)| cell.clone())
                .collect::<Vec<String>>()
        })
        .filter(|row| !row.is_empty() && row.iter().all(|cell| !cell.is_empty()))
        .filter(|row| seen.insert(row.clone()))
        .collect();

    Ok(sliced)
}

/// Flattens the table column-major (each column top to bottom, left to
/// right), matching the order the counts were originally reported in.
pub fn flatten_columns(rows: &[Vec<String>]) -> Vec<Utterance> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);

    let mut lines = Vec::new();
    for col in 0..width {
        for row in rows {
            if let Some(cell) = row.get(col) {
                lines.push(Utterance { id: lines.len() as u32, text: cell.clone() });
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn table() -> Vec<Vec<String>> {
        vec![
            row(&["id", "Transcript", "age", "Transcript"]),
            row(&["OTHER.SLT", "C ignored", "3", "C ignored too"]),
            row(&["CHILD.SLT", "", "", ""]),
            row(&["1", "C a dog", "30", "C the cat"]),
            row(&["2", "C a dog", "30", "C the cat"]), // duplicate after column drop
            row(&["3", "C he ran", "30", "C she sat"]),
            row(&["Total Frequency", "C last one", "30", "C very last"]),
            row(&["4", "C past the end", "30", "C not ours"]),
        ]
    }

    #[test]
    fn slices_rows_between_sentinels() {
        let rows = child_rows(table(), "CHILD.SLT").unwrap();
        // Header-like rows above the child id are gone, as is everything
        // past the end marker; the empty child-id row itself is dropped.
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], row(&["C a dog", "C the cat"]));
        assert_eq!(rows[2], row(&["C last one", "C very last"]));
    }

    #[test]
    fn unknown_child_id_is_fatal() {
        assert!(matches!(
            child_rows(table(), "NOBODY.SLT"),
            Err(SvmineError::ChildIdNotFound(_))
        ));
    }

    #[test]
    fn missing_end_marker_runs_to_the_end() {
        let rows = vec![
            row(&["CHILD.SLT", "", "", ""]),
            row(&["1", "C a dog", "30", "C the cat"]),
        ];
        let rows = child_rows(rows, "CHILD.SLT").unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn flattening_is_column_major() {
        let rows = child_rows(table(), "CHILD.SLT").unwrap();
        let lines = flatten_columns(&rows);

        let texts: Vec<&str> = lines.iter().map(|u| u.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["C a dog", "C he ran", "C last one", "C the cat", "C she sat", "C very last"]
        );
        assert_eq!(lines[3].id, 3);
    }
}
