use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

const SAMPLE_PAGE: &str = r#"<html><body>
  <div role="listitem" title="+60123456789">Alice</div>
  <div role="listitem">Bob 012-345 6789</div>
  <div aria-label="+60 19-876 5432">chat</div>
  <p>London office +44 20 7946 0958, order id 2024001</p>
</body></html>"#;

fn write_page(dir: &Path, html: &str) -> std::path::PathBuf {
    let path = dir.join("page.html");
    fs::write(&path, html).expect("write page");
    path
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    cargo_bin_cmd!("dialsift")
        .env("XDG_CONFIG_HOME", dir)
        .current_dir(dir)
        .args(args)
        .output()
        .expect("run command")
}

fn run_ok(dir: &Path, args: &[&str]) -> String {
    let output = run_in(dir, args);
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

#[test]
fn extract_lists_canonical_numbers() {
    let temp = TempDir::new().expect("temp dir");
    let page = write_page(temp.path(), SAMPLE_PAGE);

    let stdout = run_ok(temp.path(), &["extract", page.to_str().expect("path")]);
    let lines: Vec<&str> = stdout.lines().collect();

    assert!(lines.contains(&"+60 12-345 6789"));
    assert!(lines.contains(&"+60 19-876 5432"));
    assert!(lines.contains(&"+442079460958"));
    // Dedup: the same Malaysian number appears three ways in the fixture.
    assert_eq!(
        lines.iter().filter(|l| **l == "+60 12-345 6789").count(),
        1
    );
}

#[test]
fn extract_json_is_sorted_and_counted() {
    let temp = TempDir::new().expect("temp dir");
    let page = write_page(temp.path(), SAMPLE_PAGE);

    let stdout = run_ok(
        temp.path(),
        &["--json", "extract", page.to_str().expect("path")],
    );
    let report: Value = serde_json::from_str(&stdout).expect("parse json");

    let numbers: Vec<String> = report["numbers"]
        .as_array()
        .expect("numbers array")
        .iter()
        .map(|v| v.as_str().expect("string").to_string())
        .collect();
    assert_eq!(report["count"].as_u64(), Some(numbers.len() as u64));

    let mut sorted = numbers.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(numbers, sorted);
    assert_eq!(numbers.len(), 3);
}

#[test]
fn extract_reads_stdin() {
    use std::io::Write as _;
    use std::process::Stdio;

    let temp = TempDir::new().expect("temp dir");
    let mut child = std::process::Command::new(assert_cmd::cargo::cargo_bin!("dialsift"))
        .env("XDG_CONFIG_HOME", temp.path())
        .current_dir(temp.path())
        .args(["extract", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn");
    child
        .stdin
        .as_mut()
        .expect("stdin")
        .write_all(b"<body><p>call 012-345 6789</p></body>")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(stdout.trim(), "+60 12-345 6789");
}

#[test]
fn extract_empty_page_hints_instead_of_failing() {
    let temp = TempDir::new().expect("temp dir");
    let page = write_page(temp.path(), "<html><body><p>just chatter</p></body></html>");

    let output = run_in(temp.path(), &["extract", page.to_str().expect("path")]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("No phone numbers found"));
}

#[test]
fn extract_missing_file_fails() {
    let temp = TempDir::new().expect("temp dir");
    let output = run_in(temp.path(), &["extract", "nope.html"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("error:"));
}

#[test]
fn export_writes_csv_with_header() {
    let temp = TempDir::new().expect("temp dir");
    let page = write_page(temp.path(), SAMPLE_PAGE);

    run_ok(
        temp.path(),
        &[
            "export",
            page.to_str().expect("path"),
            "--out",
            "numbers.csv",
        ],
    );

    let csv = fs::read_to_string(temp.path().join("numbers.csv")).expect("read csv");
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Phone Number"));
    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 3);
    assert!(rows.contains(&"+60 12-345 6789"));
}

#[test]
fn export_defaults_to_date_stamped_filename() {
    let temp = TempDir::new().expect("temp dir");
    let page = write_page(temp.path(), SAMPLE_PAGE);

    run_ok(temp.path(), &["export", page.to_str().expect("path")]);

    let expected = format!(
        "whatsapp_numbers_{}.csv",
        chrono::Local::now().format("%Y-%m-%d")
    );
    assert!(temp.path().join(expected).exists());
}

#[test]
fn export_refuses_empty_result() {
    let temp = TempDir::new().expect("temp dir");
    let page = write_page(temp.path(), "<html><body></body></html>");

    let output = run_in(temp.path(), &["export", page.to_str().expect("path")]);
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("nothing to export"));
}

#[test]
fn config_overrides_country_rule() {
    let temp = TempDir::new().expect("temp dir");
    let config_path = temp.path().join("config.toml");
    fs::write(
        &config_path,
        "[country]\ndial_code = \"61\"\ntrunk_prefix = \"0\"\n",
    )
    .expect("write config");
    let page = write_page(temp.path(), "<body><p>call 012-345 6789</p></body>");

    let stdout = run_ok(
        temp.path(),
        &[
            "--config",
            config_path.to_str().expect("path"),
            "extract",
            page.to_str().expect("path"),
        ],
    );
    assert_eq!(stdout.trim(), "+61 12-345 6789");
}
