#[cfg(test)]
mod examples {
    use std::fs;
    use std::path::{Path, PathBuf};

    use vuefmt::composing::Composer;
    use vuefmt::external::{FormatOptions, Verbatim};
    use vuefmt::formatting::Settings;
    use vuefmt::parsing;

    /// Golden test for the format command
    ///
    /// Every .vue file in tests/golden/ is expected to already be in its
    /// canonical form, so formatting it must give back exactly what was
    /// read. Script and style bodies go through the Verbatim backend, which
    /// means only the template layout and the block wrapping are under test
    /// here. If a file fails, either the formatter is wrong (a bug that needs
    /// to be fixed!) or the fixture is (perhaps because of a deliberate style
    /// change, and it thus might need reformatting).

    /// Simple diff function to show line-by-line differences
    fn show_diff(original: &str, formatted: &str, file_path: &Path) {
        let original_lines: Vec<&str> = original
            .lines()
            .collect();
        let formatted_lines: Vec<&str> = formatted
            .lines()
            .collect();

        let max_lines = original_lines
            .len()
            .max(formatted_lines.len());

        println!("\nDifferences found in file: {:?}", file_path);
        println!("--- Original");
        println!("+++ Formatted");

        for i in 0..max_lines {
            let orig_line = original_lines
                .get(i)
                .unwrap_or(&"");
            let fmt_line = formatted_lines
                .get(i)
                .unwrap_or(&"");

            if orig_line != fmt_line {
                println!("@@ Line {} @@", i + 1);
                println!("- {}", orig_line);
                println!("+ {}", fmt_line);
            }
        }
    }

    fn golden_files() -> Vec<PathBuf> {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/golden");
        assert!(dir.exists(), "golden directory missing");

        let entries = fs::read_dir(&dir).expect("Failed to read golden directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("vue")
            {
                files.push(path);
            }
        }
        files.sort();

        assert!(!files.is_empty(), "No .vue files found in golden directory");
        files
    }

    #[test]
    fn ensure_identical_output() {
        let verbatim = Verbatim;
        let composer = Composer::new(
            &verbatim,
            FormatOptions::default(),
            Settings::default(),
            vec!["v-".to_string(), ":".to_string()],
        );

        let mut failures = Vec::new();

        for file in &golden_files() {
            let original = parsing::load(file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let result = composer
                .compose(&original)
                .unwrap_or_else(|e| panic!("Failed to format file {:?}: {}", file, e));

            if result != original {
                show_diff(&original, &result, file);
                failures.push(file.clone());
            }
        }

        if !failures.is_empty() {
            panic!("All golden files must format unchanged: {:?}", failures);
        }
    }

    #[test]
    fn formatting_is_stable() {
        let verbatim = Verbatim;
        let composer = Composer::new(
            &verbatim,
            FormatOptions::default(),
            Settings::default(),
            vec!["v-".to_string(), ":".to_string()],
        );

        for file in &golden_files() {
            let original = parsing::load(file).unwrap();

            // scramble the indentation, which must make no difference
            let flattened: String = original
                .lines()
                .map(|line| format!("  {}  \n", line.trim()))
                .collect();

            let first = composer
                .compose(&flattened)
                .unwrap();
            let second = composer
                .compose(&first)
                .unwrap();

            pretty_assertions::assert_eq!(first, second);
        }
    }
}
