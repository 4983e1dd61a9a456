use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const BRIEF: &str = "# Content Brief: cuenta autónomo\n\
\n\
## Objective\n\
- **Content Category**: comparison\n\
- [x] Outline approved\n\
| Stage | Intent |\n\
|-------|--------|\n\
| MOFU | `commercial` |\n\
---\n\
> Keep it short\n";

fn brief_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(BRIEF.as_bytes()).unwrap();
    file
}

fn bdcli() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bdcli"));
    cmd.env_remove("BRIEFDOC_LOG").env_remove("BRIEFDOC_LOG_FORMAT");
    cmd
}

#[test]
fn render_summary_is_the_default() {
    let file = brief_file();
    bdcli()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Lines: 10"))
        .stdout(predicate::str::contains("Blocks: 7"))
        .stdout(predicate::str::contains("[1] Heading (level 1)"))
        .stdout(predicate::str::contains("[5] Table (2 columns, 1 rows)"))
        .stdout(predicate::str::contains("[7] Quote"));
}

#[test]
fn render_verbose_rebuilds_inline_markup() {
    let file = brief_file();
    bdcli()
        .args(["render", "--verbose"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Item 1: **Content Category**: comparison",
        ))
        .stdout(predicate::str::contains("Item 2: [x] Outline approved"))
        .stdout(predicate::str::contains("Row 1: MOFU | `commercial`"));
}

#[test]
fn render_json_tags_blocks() {
    let file = brief_file();
    let output = bdcli()
        .arg("--json")
        .arg(file.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["line_count"], 10);
    assert_eq!(value["blocks"][0]["type"], "heading");
    assert_eq!(value["blocks"][0]["level"], 1);
    assert_eq!(value["blocks"][1]["type"], "spacer");
    assert_eq!(value["blocks"][3]["items"][1]["check"], "checked");
    assert_eq!(value["blocks"][6]["type"], "quote");
}

#[test]
fn verbose_and_json_conflict() {
    let file = brief_file();
    bdcli()
        .args(["-v", "-j"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn stats_reports_counts() {
    let file = brief_file();
    bdcli()
        .arg("stats")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Headings:       2"))
        .stdout(predicate::str::contains(
            "List items:     2 (1 checked, 0 unchecked)",
        ))
        .stdout(predicate::str::contains("Table rows:     1"));
}

#[test]
fn text_strips_markers() {
    bdcli()
        .arg("text")
        .write_stdin("## **Bold** heading\n- [ ] `task`\n")
        .assert()
        .success()
        .stdout("Bold heading\ntask\n");
}

#[test]
fn dash_reads_standard_input() {
    bdcli()
        .args(["render", "-"])
        .write_stdin("plain line")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] Paragraph"));
}

#[test]
fn empty_input_has_no_blocks() {
    bdcli()
        .write_stdin("")
        .assert()
        .success()
        .stdout("Lines: 0\nBlocks: 0\n");
}

#[test]
fn missing_file_fails_with_message() {
    bdcli()
        .arg("no-such-brief.md")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: failed to read 'no-such-brief.md'"));
}

#[test]
fn trace_logs_go_to_stderr() {
    bdcli()
        .env("BRIEFDOC_LOG", "briefdoc_core=debug")
        .write_stdin("# Title")
        .assert()
        .success()
        .stdout(predicate::str::contains("Blocks: 1"))
        .stderr(predicate::str::contains("parsed document"));
}

#[test]
fn json_log_format_emits_json_records() {
    bdcli()
        .args(["--log-format", "json"])
        .env("BRIEFDOC_LOG", "briefdoc_core=debug")
        .write_stdin("# Title")
        .assert()
        .success()
        .stdout(predicate::str::contains("Blocks: 1"))
        .stderr(predicate::str::contains(r#""level":"DEBUG""#))
        .stderr(predicate::str::contains(r#""message":"parsed document""#));
}

#[test]
fn log_format_is_read_from_environment() {
    let output = bdcli()
        .env("BRIEFDOC_LOG_FORMAT", "json")
        .env("BRIEFDOC_LOG", "briefdoc_core=debug")
        .arg("text")
        .write_stdin("plain")
        .assert()
        .success()
        .stdout("plain\n")
        .get_output()
        .stderr
        .clone();

    let stderr = String::from_utf8(output).unwrap();
    let record: serde_json::Value = stderr
        .lines()
        .find(|line| line.contains("parsed document"))
        .map(|line| serde_json::from_str(line).unwrap())
        .unwrap();
    assert_eq!(record["fields"]["blocks"], 1);
    assert_eq!(record["target"], "briefdoc_core::parser");
}
