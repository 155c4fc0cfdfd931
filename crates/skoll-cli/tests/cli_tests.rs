//! CLI argument parsing and results-file tests.
//!
//! The CLI is a binary crate, so clap parsing is validated via a mirror
//! of the argument struct with `try_parse_from`, and the results file
//! format is checked against the `Counts` ordering it is built from.

// ============================================================================
// Clap argument parsing (mirror of the binary's Cli struct)
// ============================================================================

mod clap_parsing {
    use clap::Parser;

    #[derive(Parser)]
    #[command(name = "skoll")]
    struct TestCli {
        #[arg(short, long, default_value = "11")]
        target: String,

        #[arg(short = 'n', long)]
        qubits: Option<usize>,

        #[arg(short, long, default_value = "1024")]
        shots: u32,

        #[arg(short, long, default_value = "0")]
        iterations: usize,

        #[arg(short, long, default_value = "results")]
        out: String,

        #[arg(short, long, action = clap::ArgAction::Count)]
        verbose: u8,
    }

    #[test]
    fn test_parse_no_args_uses_defaults() {
        let cli = TestCli::try_parse_from(["skoll"]).unwrap();
        assert_eq!(cli.target, "11");
        assert!(cli.qubits.is_none());
        assert_eq!(cli.shots, 1024);
        assert_eq!(cli.iterations, 0);
        assert_eq!(cli.out, "results");
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_register_size_flag() {
        let cli = TestCli::try_parse_from(["skoll", "-t", "101", "-n", "3"]).unwrap();
        assert_eq!(cli.qubits, Some(3));
    }

    #[test]
    fn test_parse_all_args() {
        let cli = TestCli::try_parse_from([
            "skoll", "--target", "101", "--shots", "4096", "--iterations", "3", "--out", "/tmp/x",
        ])
        .unwrap();
        assert_eq!(cli.target, "101");
        assert_eq!(cli.shots, 4096);
        assert_eq!(cli.iterations, 3);
        assert_eq!(cli.out, "/tmp/x");
    }

    #[test]
    fn test_parse_short_flags() {
        let cli = TestCli::try_parse_from(["skoll", "-t", "01", "-s", "500"]).unwrap();
        assert_eq!(cli.target, "01");
        assert_eq!(cli.shots, 500);
    }

    #[test]
    fn test_parse_verbose_counts() {
        let cli = TestCli::try_parse_from(["skoll", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_non_numeric_shots_rejected() {
        assert!(TestCli::try_parse_from(["skoll", "--shots", "many"]).is_err());
    }

    #[test]
    fn test_parse_unknown_flag_rejected() {
        assert!(TestCli::try_parse_from(["skoll", "--nonsense", "2"]).is_err());
    }
}

// ============================================================================
// Target validation as seen from the CLI surface
// ============================================================================

mod target_validation {
    use skoll_search::{SearchError, TargetState};

    #[test]
    fn test_default_target_is_valid() {
        assert!(TargetState::parse("11").is_ok());
    }

    #[test]
    fn test_register_size_flag_enforces_target_length() {
        assert!(matches!(
            TargetState::parse_sized("11", 3),
            Err(SearchError::TargetLength {
                expected: 3,
                got: 2,
                ..
            })
        ));
        assert!(TargetState::parse_sized("101", 3).is_ok());
    }

    #[test]
    fn test_malformed_targets_fail_before_simulation() {
        assert!(matches!(
            TargetState::parse(""),
            Err(SearchError::EmptyTarget)
        ));
        assert!(matches!(
            TargetState::parse("12"),
            Err(SearchError::NonBinaryTarget { .. })
        ));
        assert!(matches!(
            TargetState::parse("0110"),
            Err(SearchError::TooManyQubits { .. })
        ));
    }
}

// ============================================================================
// Results file contents
// ============================================================================

mod results_file {
    use skoll_hal::Counts;
    use std::fs;

    /// The line format the report writer emits for each outcome.
    fn render_lines(counts: &Counts) -> Vec<String> {
        counts
            .sorted()
            .into_iter()
            .map(|(bitstring, count)| format!("{bitstring}: {count}"))
            .collect()
    }

    #[test]
    fn test_lines_sorted_by_count_descending() {
        let mut counts = Counts::new();
        counts.insert("00", 14);
        counts.insert("11", 990);
        counts.insert("10", 20);

        let lines = render_lines(&counts);
        assert_eq!(lines, vec!["11: 990", "10: 20", "00: 14"]);
    }

    #[test]
    fn test_tie_broken_lexicographically() {
        let mut counts = Counts::new();
        counts.insert("10", 512);
        counts.insert("01", 512);

        let lines = render_lines(&counts);
        assert_eq!(lines, vec!["01: 512", "10: 512"]);
    }

    #[test]
    fn test_written_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grover_results.txt");

        let mut counts = Counts::new();
        counts.insert("11", 1000);
        counts.insert("00", 24);

        let body: String = render_lines(&counts)
            .into_iter()
            .map(|l| l + "\n")
            .collect();
        fs::write(&path, &body).unwrap();

        let read_back = fs::read_to_string(&path).unwrap();
        assert_eq!(read_back, "11: 1000\n00: 24\n");
    }
}
