//! Custom assertion macros for CLI tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

/// Assert that command output (stdout + stderr) contains a string.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "Cleaning up filecache...");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $needle:expr) => {
        let combined = $result.combined_output();
        assert!(
            combined.contains($needle),
            "Expected output to contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $needle,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that a user's home exists and has no entries left.
///
/// # Example
/// ```ignore
/// assert_home_empty!(env, "alice");
/// ```
#[macro_export]
macro_rules! assert_home_empty {
    ($env:expr, $user:expr) => {
        let home = $env.home_path($user, "");
        assert!(home.is_dir(), "Expected home {:?} to still exist", home);
        let left: Vec<_> = std::fs::read_dir(&home)
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        assert!(left.is_empty(), "Expected home {:?} to be empty, found {:?}", home, left);
    };
}
