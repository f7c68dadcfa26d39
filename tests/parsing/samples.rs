#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::{Path, PathBuf};

    use erv::parsing;

    fn erv_files(dir: &Path) -> Vec<PathBuf> {
        assert!(dir.exists(), "{:?} directory missing", dir);

        let entries = fs::read_dir(dir).expect("Failed to read directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("erv")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .erv files found in {:?}", dir);
        files
    }

    #[test]
    fn ensure_samples_parse() {
        let mut failures = Vec::new();

        for file in erv_files(Path::new("tests/samples/")) {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let parsed = parsing::parse(&content);
            if !parsed.is_valid() {
                println!("File {:?} failed to parse: {:?}", file, parsed.errors);
                failures.push(file.clone());
            }
        }

        if !failures.is_empty() {
            panic!(
                "Sample files should parse successfully, but {} files failed",
                failures.len()
            );
        }
    }

    #[test]
    fn ensure_broken_fail() {
        let mut unexpected_successes = Vec::new();

        for file in erv_files(Path::new("tests/broken/")) {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let parsed = parsing::parse(&content);
            if parsed.is_valid() {
                println!("File {:?} unexpectedly parsed successfully", file);
                unexpected_successes.push(file.clone());
            }
        }

        if !unexpected_successes.is_empty() {
            panic!(
                "Broken files should not parse successfully, but {} files passed",
                unexpected_successes.len()
            );
        }
    }

    #[test]
    fn missing_file() {
        let result = parsing::load(Path::new("tests/samples/does-not-exist.erv"));

        match result {
            Ok(_) => panic!("Expected loading a missing file to fail"),
            Err(error) => assert_eq!(error.problem, "File not found"),
        }
    }
}
