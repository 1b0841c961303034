//! Test infrastructure for integration tests
//!
//! Provides isolated temp directories and sample CSV fixtures. Each test
//! gets its own directory to ensure no shared state.

use std::path::{Path, PathBuf};

/// Test context containing an isolated temp directory
pub struct TestContext {
    pub temp_dir: PathBuf,
}

impl TestContext {
    /// Create a new test context with an isolated temp directory.
    ///
    /// Each call creates a uniquely named directory using process ID,
    /// thread ID, and nanosecond timestamp to guarantee isolation.
    pub fn new(name: &str) -> Self {
        let temp_dir = std::env::temp_dir().join(format!(
            "tch-integration-{}-{}-{:?}-{}",
            name,
            std::process::id(),
            std::thread::current().id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::create_dir_all(&temp_dir).unwrap();
        Self { temp_dir }
    }

    /// Write a file inside the context directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    /// Path of a file inside the context directory, without creating it.
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.join(name)
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        // Auto-cleanup on drop
        let _ = std::fs::remove_dir_all(&self.temp_dir);
    }
}

/// A well-formed three-task project file.
pub const SAMPLE_CSV: &str = "task,start_date,end_date,status,color,assignee\n\
Design Phase,2024-02-01,2024-02-15,In Progress,#FF5733,Jessica Rabbit\n\
Build Phase,2024-02-10,2024-02-28,Not Started,#33FF57,Roger Rabbit\n\
Launch,2024-02-28,2024-02-28,Not Started,,\n";

/// A project file whose second record carries an unparseable date.
pub const BAD_DATE_CSV: &str = "task,start_date,end_date,status,color,assignee\n\
Good Task,2024-02-01,2024-02-05,Todo,,\n\
Broken Task,2024-02-01,whenever,Todo,,\n";

/// A project file with only the header row.
pub const HEADER_ONLY_CSV: &str = "task,start_date,end_date,status,color,assignee\n";

/// Write the sample project file into a context directory.
#[allow(dead_code)]
pub fn sample_project(ctx: &TestContext) -> PathBuf {
    ctx.write_file("project.csv", SAMPLE_CSV)
}

/// Assert that every rendered line carries the label column separator.
#[allow(dead_code)]
pub fn assert_chart_shape(output: &str, expected_rows: usize) {
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines.len(),
        3 + expected_rows,
        "expected 3 header lines plus {} rows, got:\n{}",
        expected_rows,
        output
    );
    for line in &lines {
        assert_eq!(
            line.chars().nth(20),
            Some('|'),
            "column separator missing in line: {:?}",
            line
        );
    }
}

/// Returns the path separator-stable display form used in error assertions.
#[allow(dead_code)]
pub fn display(path: &Path) -> String {
    path.display().to_string()
}
