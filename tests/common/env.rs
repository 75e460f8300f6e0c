//! Test environment builder for isolated user-cleanup testing.
//!
//! Provides `TestEnv` - a temp directory holding a data dir with user homes
//! and a config file, plus helpers to run the CLI against it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("invalid JSON line {:?}: {}", l, e))
            })
            .collect()
    }

    /// The `event` field of every NDJSON line
    pub fn event_names(&self) -> Vec<String> {
        self.json_events()
            .iter()
            .map(|e| e["event"].as_str().unwrap_or_default().to_string())
            .collect()
    }
}

/// Isolated test environment.
///
/// Layout of `root`:
/// - `data/` - data dir, one home per user
/// - `config.toml` - configuration passed with `--config`
/// - `xdg/` - empty user config dir
pub struct TestEnv {
    pub root: TempDir,
    config_path: PathBuf,
    bin: PathBuf,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.path().join("data")
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Path inside a user's home directory
    pub fn home_path(&self, user: &str, relative: &str) -> PathBuf {
        let home = self.data_dir().join(user);
        if relative.is_empty() {
            home
        } else {
            home.join(relative)
        }
    }

    /// Write a file into a user's home directory
    pub fn write_home_file(&self, user: &str, relative: &str, content: &str) {
        let full_path = self.home_path(user, relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Number of entries directly under a user's home
    pub fn home_entry_count(&self, user: &str) -> usize {
        std::fs::read_dir(self.home_path(user, ""))
            .map(|entries| entries.count())
            .unwrap_or(0)
    }

    /// Cache index file (default location)
    pub fn cache_index_path(&self) -> PathBuf {
        self.data_dir().join(".filecache.json")
    }

    /// Indexed paths of a user's home storage
    pub fn cached_paths(&self, user: &str) -> Vec<String> {
        let content = match std::fs::read_to_string(self.cache_index_path()) {
            Ok(content) => content,
            Err(_) => return Vec::new(),
        };
        let index: serde_json::Value =
            serde_json::from_str(&content).expect("cache index is valid JSON");
        index["storages"][format!("home::{}", user)]
            .as_array()
            .map(|entries| {
                entries
                    .iter()
                    .map(|e| e["path"].as_str().unwrap_or_default().to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Run the CLI with the environment's config file
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the CLI with the environment's config file and extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let config = self.config_path.to_string_lossy().to_string();
        let mut full_args: Vec<&str> = vec!["--config", config.as_str()];
        full_args.extend_from_slice(args);
        self.run_raw(&full_args, env_vars)
    }

    /// Run the CLI without adding `--config`
    pub fn run_raw(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env("XDG_CONFIG_HOME", self.root.path().join("xdg"))
            .env_remove("USER_CLEANUP_CONFIG")
            .env_remove("USER_CLEANUP_DATA_DIR")
            .env_remove("USER_CLEANUP_COLOR");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute user-cleanup");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    backends: Vec<String>,
    home_files: Vec<(String, String, String)>,
    passwd: Option<String>,
    extra_config: String,
    raw_config: Option<String>,
    create_data_dir: bool,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            backends: Vec::new(),
            home_files: Vec::new(),
            passwd: None,
            extra_config: String::new(),
            raw_config: None,
            create_data_dir: true,
        }
    }

    /// Register an inline account list backend
    pub fn with_list_backend(mut self, name: Option<&str>, users: &[&str]) -> Self {
        let mut block = String::from("[[backends]]\nkind = \"list\"\n");
        if let Some(name) = name {
            block.push_str(&format!("name = \"{}\"\n", name));
        }
        let quoted: Vec<String> = users.iter().map(|u| format!("\"{}\"", u)).collect();
        block.push_str(&format!("users = [{}]\n", quoted.join(", ")));
        self.backends.push(block);
        self
    }

    /// Register a passwd-style backend reading `<root>/passwd`
    pub fn with_passwd_backend(mut self, content: &str) -> Self {
        self.passwd = Some(content.to_string());
        self.backends.push("[[backends]]\nkind = \"passwd\"\npath = '{PASSWD}'\n".to_string());
        self
    }

    /// Add a file to a user's home (`relative` is inside the home dir)
    pub fn with_home_file(mut self, user: &str, relative: &str, content: &str) -> Self {
        self.home_files
            .push((user.to_string(), relative.to_string(), content.to_string()));
        self
    }

    /// Append raw TOML to the generated config
    pub fn with_extra_config(mut self, toml: &str) -> Self {
        self.extra_config.push_str(toml);
        self
    }

    /// Replace the generated config entirely
    pub fn with_raw_config(mut self, toml: &str) -> Self {
        self.raw_config = Some(toml.to_string());
        self
    }

    /// Do not create the data dir
    pub fn without_data_dir(mut self) -> Self {
        self.create_data_dir = false;
        self
    }

    pub fn build(self) -> TestEnv {
        let root = TempDir::new().expect("Failed to create temp dir");
        let data_dir = root.path().join("data");
        let passwd_path = root.path().join("passwd");
        let config_path = root.path().join("config.toml");

        if self.create_data_dir {
            std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");
        }
        std::fs::create_dir_all(root.path().join("xdg")).expect("Failed to create xdg dir");

        if let Some(passwd) = &self.passwd {
            std::fs::write(&passwd_path, passwd).expect("Failed to write passwd file");
        }

        let config = match self.raw_config {
            Some(raw) => raw,
            None => {
                let mut config = format!("[storage]\ndata_dir = '{}'\n\n", data_dir.display());
                for block in &self.backends {
                    config.push_str(
                        &block.replace("{PASSWD}", &passwd_path.display().to_string()),
                    );
                    config.push('\n');
                }
                config.push_str(&self.extra_config);
                config
            }
        };
        std::fs::write(&config_path, config).expect("Failed to write config.toml");

        let env = TestEnv {
            root,
            config_path,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_user-cleanup")),
        };

        for (user, relative, content) in &self.home_files {
            env.write_home_file(user, relative, content);
        }

        env
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
