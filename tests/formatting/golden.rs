#[cfg(test)]
mod examples {
    use std::fs;
    use std::path::Path;

    use pexpr::maybe::Just;
    use pexpr::parsing;
    use pexpr::rendering::render;

    /// Golden test for the format command
    ///
    /// Every line of every .txt file in tests/golden/ is parsed and
    /// rendered back to text, which must be identical to the line it came
    /// from. If a line fails, either the parser & renderer is wrong or the
    /// line is not in canonical form (a literal like `1.50` renders as
    /// `1.5`).
    #[test]
    fn ensure_identical_output() {
        let dir = Path::new("tests/golden");

        assert!(dir.exists(), "golden directory missing");

        let entries = fs::read_dir(dir).expect("Failed to read golden directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("txt")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .txt files found in golden directory");

        let mut failures = Vec::new();

        for file in &files {
            let original = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            for line in original
                .lines()
                .filter(|line| !line.is_empty())
            {
                match parsing::parse(line) {
                    Just((expression, "")) => {
                        let result = render(&expression);
                        if result != line {
                            println!("@@ {:?} @@", file);
                            println!("- {}", line);
                            println!("+ {}", result);
                            failures.push(line.to_string());
                        }
                    }
                    other => {
                        println!("{:?}: {} did not parse completely: {:?}", file, line, other);
                        failures.push(line.to_string());
                    }
                }
            }
        }

        if !failures.is_empty() {
            panic!("All golden expressions must format unchanged");
        }
    }
}
