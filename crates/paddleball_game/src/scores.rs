use std::fs;
use std::path::PathBuf;

use log::warn;

/// Number of entries kept in the table.
pub const TABLE_SIZE: usize = 3;

/// Persistent top-three score table.
///
/// The backing file holds newline-separated decimal integers, highest
/// first. A missing or malformed file reads as an empty table and a failed
/// write is logged and dropped; score keeping never interrupts play.
pub struct ScoreTable {
    path: PathBuf,
}

impl ScoreTable {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the stored table, highest first. Slots without a valid stored
    /// value read as zero.
    pub fn load_top3(&self) -> [u32; TABLE_SIZE] {
        let mut table = [0u32; TABLE_SIZE];
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("No readable score file at {}: {e}", self.path.display());
                return table;
            }
        };
        for (slot, line) in table.iter_mut().zip(contents.lines()) {
            match line.trim().parse() {
                Ok(value) => *slot = value,
                Err(e) => warn!("Ignoring malformed score line {line:?}: {e}"),
            }
        }
        table
    }

    /// Offer a finished match's score to the table.
    ///
    /// Returns true when the score enters the top three; lower entries
    /// shift down and the previous third place drops off. The table is only
    /// rewritten on a change.
    pub fn try_record(&self, score: u32) -> bool {
        let mut table = self.load_top3();
        let Some(slot) = table.iter().position(|&stored| score > stored) else {
            return false;
        };
        for i in (slot + 1..TABLE_SIZE).rev() {
            table[i] = table[i - 1];
        }
        table[slot] = score;
        self.store(&table);
        true
    }

    fn store(&self, table: &[u32; TABLE_SIZE]) {
        let mut contents = String::new();
        for value in table {
            contents.push_str(&value.to_string());
            contents.push('\n');
        }
        if let Err(e) = fs::write(&self.path, contents) {
            warn!("Failed to write score file {}: {e}", self.path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(name: &str, contents: Option<&str>) -> ScoreTable {
        let path = std::env::temp_dir().join(format!(
            "paddleball_scores_{}_{name}.txt",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        if let Some(contents) = contents {
            fs::write(&path, contents).unwrap();
        }
        ScoreTable::new(path)
    }

    fn cleanup(table: &ScoreTable) {
        let _ = fs::remove_file(&table.path);
    }

    #[test]
    fn missing_file_reads_as_empty_table() {
        let table = table_with("missing", None);
        assert_eq!(table.load_top3(), [0, 0, 0]);
    }

    #[test]
    fn malformed_lines_read_as_zero() {
        let table = table_with("malformed", Some("50\nnot-a-number\n10\n"));
        assert_eq!(table.load_top3(), [50, 0, 10]);
        cleanup(&table);
    }

    #[test]
    fn middle_entry_shifts_lower_scores_down() {
        let table = table_with("middle", Some("50\n30\n10\n"));
        assert!(table.try_record(40));
        assert_eq!(table.load_top3(), [50, 40, 30]);
        cleanup(&table);
    }

    #[test]
    fn new_best_takes_first_place() {
        let table = table_with("best", Some("50\n30\n10\n"));
        assert!(table.try_record(100));
        assert_eq!(table.load_top3(), [100, 50, 30]);
        cleanup(&table);
    }

    #[test]
    fn low_score_leaves_the_table_alone() {
        let table = table_with("low", Some("50\n30\n10\n"));
        assert!(!table.try_record(5));
        assert_eq!(table.load_top3(), [50, 30, 10]);
        cleanup(&table);
    }

    #[test]
    fn tie_does_not_displace_a_stored_score() {
        let table = table_with("tie", Some("50\n30\n10\n"));
        assert!(!table.try_record(10));
        assert_eq!(table.load_top3(), [50, 30, 10]);
        cleanup(&table);
    }
}
