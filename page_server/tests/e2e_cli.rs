//! End-to-end CLI tests for mindread_server.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const HEADINGS: [&str; 4] = [
    "Core Ideas the Book Hammers Home",
    "Signature Methods the Book Demystifies",
    "Biggest Secrets He Explicitly Reveals",
    "How Oz Recommends Translating Skills Beyond the Stage",
];

fn mindread() -> Command {
    cargo_bin_cmd!("mindread_server")
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        mindread()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("serve"))
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("content"));
    }

    #[test]
    fn shows_version() {
        mindread()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn requires_a_subcommand() {
        mindread().assert().failure();
    }

    #[test]
    fn rejects_unparsable_host() {
        mindread()
            .args(["serve", "--host", "not an address", "--port", "0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid --host address"));
    }
}

// ============================================
// Render
// ============================================

mod render {
    use super::*;

    #[test]
    fn renders_to_stdout_by_default() {
        mindread()
            .arg("render")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("Read Your Mind by Oz"))
            .stdout(predicate::str::contains("Reading Roadmap"));
    }

    #[test]
    fn logs_stay_off_stdout() {
        mindread()
            .args(["--log-level", "debug", "render"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Starting mindread_server").not());
    }

    #[test]
    fn renders_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.html");

        mindread()
            .args(["render", "-o"])
            .arg(&path)
            .assert()
            .success();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        for heading in HEADINGS {
            assert_eq!(html.matches(heading).count(), 1, "{heading}");
        }
        assert_eq!(html.matches("<li").count(), 12);
    }

    #[test]
    fn render_is_deterministic() {
        let first = mindread().arg("render").output().unwrap().stdout;
        let second = mindread().arg("render").output().unwrap().stdout;
        assert_eq!(first, second);
    }

    #[test]
    fn fails_on_unwritable_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("page.html");

        mindread()
            .args(["render", "-o"])
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to write page"));
    }
}

// ============================================
// Content
// ============================================

mod content {
    use super::*;

    #[test]
    fn lists_sections_in_page_order() {
        let out = mindread().arg("content").output().unwrap();
        assert!(out.status.success());

        let text = String::from_utf8(out.stdout).unwrap();
        let positions: Vec<_> = HEADINGS
            .iter()
            .map(|h| text.find(h).expect("heading listed"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.contains(" 1. Mindset as the Real Stage"));
    }

    #[test]
    fn exports_json() {
        let out = mindread().args(["content", "--json"]).output().unwrap();
        assert!(out.status.success());

        let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
        let sections = json.as_array().unwrap();
        assert_eq!(sections.len(), 4);
        assert_eq!(sections[0]["id"], "core_ideas");
        assert_eq!(sections[3]["heading"], HEADINGS[3]);
        for section in sections {
            assert_eq!(section["entries"].as_array().unwrap().len(), 3);
        }
    }
}
