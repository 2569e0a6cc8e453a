//! Tests for CLI argument handling and batch file processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tilestitch::SolverError;
    use tilestitch::io::cli::{Cli, FileProcessor};

    const SAMPLE: &str = include_str!("../../data/sample_tiles.txt");

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["tilestitch"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[test]
    fn test_defaults() {
        let parsed = cli(&["puzzle.txt"]);

        assert!(!parsed.quiet);
        assert!(!parsed.render);
        assert!(parsed.pattern.is_none());
        assert!(parsed.skip_existing());
        assert!(parsed.should_show_progress());
    }

    #[test]
    fn test_flags_toggle_behavior() {
        let parsed = cli(&["puzzle.txt", "--quiet", "--render", "--no-skip"]);

        assert!(parsed.quiet);
        assert!(parsed.render);
        assert!(!parsed.skip_existing());
        assert!(!parsed.should_show_progress());
    }

    #[test]
    fn test_missing_target_is_rejected() {
        assert!(Cli::try_parse_from(["tilestitch"]).is_err());
    }

    #[test]
    fn test_solves_and_renders_a_puzzle_file() {
        let dir = tempfile::tempdir().unwrap();
        let puzzle = dir.path().join("sample.txt");
        std::fs::write(&puzzle, SAMPLE).unwrap();

        let target = puzzle.to_string_lossy().to_string();
        let mut processor = FileProcessor::new(cli(&[&target, "--quiet", "--render"]));
        processor.process().unwrap();

        let rendered = dir.path().join("sample_assembled.png");
        assert!(rendered.exists(), "render flag must produce a PNG");
    }

    #[test]
    fn test_existing_render_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let puzzle = dir.path().join("sample.txt");
        std::fs::write(&puzzle, SAMPLE).unwrap();
        let rendered = dir.path().join("sample_assembled.png");
        std::fs::write(&rendered, b"sentinel").unwrap();

        let target = puzzle.to_string_lossy().to_string();
        let mut processor = FileProcessor::new(cli(&[&target, "--quiet", "--render"]));
        processor.process().unwrap();

        // The placeholder must survive: the file was skipped, not re-rendered
        assert_eq!(std::fs::read(&rendered).unwrap(), b"sentinel");
    }

    #[test]
    fn test_directory_target_processes_every_puzzle() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), SAMPLE).unwrap();
        std::fs::write(dir.path().join("b.txt"), SAMPLE).unwrap();
        std::fs::write(dir.path().join("notes.md"), "ignored").unwrap();

        let target = dir.path().to_string_lossy().to_string();
        let mut processor = FileProcessor::new(cli(&[&target, "--quiet", "--render"]));
        processor.process().unwrap();

        assert!(dir.path().join("a_assembled.png").exists());
        assert!(dir.path().join("b_assembled.png").exists());
    }

    #[test]
    fn test_non_puzzle_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let target_path = dir.path().join("image.png");
        std::fs::write(&target_path, b"not a puzzle").unwrap();

        let target = target_path.to_string_lossy().to_string();
        let mut processor = FileProcessor::new(cli(&[&target, "--quiet"]));
        let result = processor.process();
        assert!(matches!(result, Err(SolverError::InvalidTarget { .. })));
    }

    #[test]
    fn test_missing_target_path_is_rejected() {
        let mut processor = FileProcessor::new(cli(&["/no/such/path", "--quiet"]));
        let result = processor.process();
        assert!(matches!(result, Err(SolverError::InvalidTarget { .. })));
    }

    #[test]
    fn test_custom_pattern_file() {
        let dir = tempfile::tempdir().unwrap();
        let puzzle = dir.path().join("sample.txt");
        std::fs::write(&puzzle, SAMPLE).unwrap();
        let mask = dir.path().join("motif.txt");
        std::fs::write(&mask, "#.\n.#").unwrap();

        let target = puzzle.to_string_lossy().to_string();
        let mask_arg = mask.to_string_lossy().to_string();
        let mut processor =
            FileProcessor::new(cli(&[&target, "--quiet", "--pattern", &mask_arg]));
        processor.process().unwrap();
    }
}
