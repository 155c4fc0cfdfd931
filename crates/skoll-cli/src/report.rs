//! Results file writer.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use skoll_hal::ExecutionResult;
use skoll_search::TargetState;

/// File name of the counts report inside the output directory.
pub const REPORT_FILE: &str = "grover_results.txt";

/// Write the measurement counts to `<dir>/grover_results.txt`.
///
/// Creates the directory if missing and overwrites any previous report.
/// One `<bitstring>: <count>` line per observed outcome, sorted by count
/// descending (ties broken lexicographically), after a single header
/// comment line.
pub fn write_report(
    dir: &Path,
    target: &TargetState,
    iterations: usize,
    result: &ExecutionResult,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let path = dir.join(REPORT_FILE);

    let mut contents = format!(
        "# Grover search: target {}, {} shots, {} iterations\n",
        target.as_str(),
        result.shots,
        iterations
    );
    for (bitstring, count) in result.counts.sorted() {
        contents.push_str(&format!("{bitstring}: {count}\n"));
    }

    fs::write(&path, contents)
        .with_context(|| format!("Failed to write results file: {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skoll_hal::Counts;

    fn sample_result() -> ExecutionResult {
        let mut counts = Counts::new();
        counts.insert("11", 980);
        counts.insert("00", 20);
        counts.insert("01", 24);
        ExecutionResult::new(counts, 1024)
    }

    #[test]
    fn test_report_format_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let target = TargetState::parse("11").unwrap();

        let path = write_report(dir.path(), &target, 1, &sample_result()).unwrap();
        let contents = fs::read_to_string(&path).unwrap();

        let lines: Vec<_> = contents.lines().collect();
        assert!(lines[0].starts_with('#'));
        assert_eq!(lines[1], "11: 980");
        assert_eq!(lines[2], "01: 24");
        assert_eq!(lines[3], "00: 20");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_report_overwrites_previous_run() {
        let dir = tempfile::tempdir().unwrap();
        let target = TargetState::parse("11").unwrap();

        write_report(dir.path(), &target, 1, &sample_result()).unwrap();

        let mut counts = Counts::new();
        counts.insert("11", 10);
        let second = ExecutionResult::new(counts, 10);
        let path = write_report(dir.path(), &target, 1, &second).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_report_creates_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let target = TargetState::parse("101").unwrap();

        let path = write_report(&nested, &target, 2, &sample_result()).unwrap();
        assert!(path.exists());
    }
}
