use std::{fs, io};

use meth::{run, run_file};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

const EXPECT_PREFIX: &str = "// expect:";

#[test]
fn demo_scripts_work() {
    let mut count = 0;

    for entry in WalkDir::new("demos").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "meth"))
    {
        let path = entry.path();
        let content = fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        // Files without a header are modules loaded by other scripts.
        let Some(expected) = content.lines().next().and_then(|line| line.strip_prefix(EXPECT_PREFIX)) else {
            continue;
        };
        count += 1;

        match run_file(path, Vec::new(), &mut io::sink()) {
            Ok(result) => assert_eq!(result.map(|v| v.to_string()).unwrap_or_default(),
                                     expected.trim(),
                                     "script {path:?}"),
            Err(e) => panic!("Script {path:?} failed:\nError: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in demos");
}

#[test]
fn readme_examples_work() {
    let content = fs::read_to_string("README.md").unwrap_or_else(|e| panic!("Failed to read README.md: {e}"));
    let blocks = extract_meth_blocks(&content);

    assert!(!blocks.is_empty(), "No examples found in README.md");

    for (i, code) in blocks.into_iter().enumerate() {
        if let Err(e) = run(&code, Vec::new(), None, &mut io::sink()) {
            panic!("README example {} failed:\n{}\nError: {:?}", i + 1, code, e);
        }
    }
}

fn extract_meth_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```meth") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}
