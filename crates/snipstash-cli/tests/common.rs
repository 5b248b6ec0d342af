#![allow(dead_code)]
use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _dir: TempDir,
    pub library: PathBuf,
    pub cfg: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = dir.path().join("config");
        std::fs::create_dir_all(&cfg).expect("cfg dir");
        let library = dir.path().join("library.json");
        Self {
            _dir: dir,
            library,
            cfg,
        }
    }

    pub fn bin(&self) -> Command {
        let mut cmd = Command::cargo_bin("snipstash-cli").unwrap();
        // Keep the host's real config out of the picture.
        cmd.env("XDG_CONFIG_HOME", &self.cfg);
        cmd.arg("--library").arg(&self.library);
        cmd
    }

    pub fn add(&self, content: &str, args: &[&str]) {
        self.bin().args(["add", content]).args(args).assert().success();
    }

    pub fn write_library(&self, json: &str) {
        std::fs::write(&self.library, json).expect("write library");
    }

    pub fn write_settings(&self, toml: &str) {
        let dir = self.cfg.join("snipstash");
        std::fs::create_dir_all(&dir).expect("settings dir");
        std::fs::write(dir.join("settings.toml"), toml).expect("write settings");
    }

    pub fn stdout_of(&self, args: &[&str]) -> String {
        let out = self
            .bin()
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).expect("utf8")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
