//! Integration tests for the `hu` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn hu() -> Command {
    let mut cmd = Command::cargo_bin("hu").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

// =========================================================================
// 404-links
// =========================================================================

#[test]
fn links_reports_broken_page_and_fails() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "content/a/index.md", "[x](/a/b)");

    hu().args(["404-links", "--hugo-root"])
        .arg(tmp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Scanning for broken links"))
        .stdout(predicate::str::contains("Found broken links in 1 file(s)"))
        .stdout(predicate::str::contains("content/a/index.md:"))
        .stdout(predicate::str::contains("  - /a/b"));
}

#[test]
fn links_clean_tree_succeeds() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "content/a/index.md", "[b](/a/b) [x](https://example.com)");
    write(tmp.path(), "content/a/b/index.md", "[up](../) [top](#top)");

    hu().args(["404-links", "--hugo-root"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No broken links found!"));
}

#[test]
fn links_relative_content_dir_resolves_against_hugo_root() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "site/pages/a/index.md", "[gone](/missing)");

    hu().args(["404-links", "--content-dir", "site/pages", "--hugo-root"])
        .arg(tmp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("site/pages/a/index.md:"));
}

#[test]
fn links_content_dir_from_config() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "hu.toml", "content_dir = \"docs\"\n");
    write(tmp.path(), "docs/a/index.md", "[gone](/missing)");

    hu().args(["404-links", "--hugo-root"])
        .arg(tmp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("docs/a/index.md:"));
}

#[test]
fn links_json_report() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "content/a/index.md", "[x](/a/b) [y](/c)");

    let output = hu()
        .args(["404-links", "--json", "--hugo-root"])
        .arg(tmp.path())
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["content/a/index.md"], serde_json::json!(["/a/b", "/c"]));
}

#[test]
fn links_missing_content_dir_is_user_error() {
    let tmp = TempDir::new().unwrap();

    hu().args(["404-links", "--hugo-root"])
        .arg(tmp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Content directory not found"));
}

#[test]
fn links_invalid_config_is_reported() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "hu.toml", "bogus = true\n");
    write(tmp.path(), "content/_index.md", "");

    hu().args(["404-links", "--hugo-root"])
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

// =========================================================================
// svg
// =========================================================================

#[test]
fn svg_writes_image_from_frontmatter() {
    let tmp = TempDir::new().unwrap();
    write(
        tmp.path(),
        "content/hello/index.md",
        "---\ntitle: \"Hello\"\ndescription: \"World\"\n---\nBody\n",
    );

    hu().arg("svg")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Generating SVGs from"))
        .stdout(predicate::str::contains("wrote hello/hello-image.svg"))
        .stdout(predicate::str::contains("Generated 1 SVG file(s)"));

    let svg = fs::read_to_string(tmp.path().join("content/hello/hello-image.svg")).unwrap();
    assert!(svg.contains(">Hello</tspan>"));
    assert!(svg.contains(">World</tspan>"));
}

#[test]
fn svg_skips_page_without_frontmatter() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "content/plain/index.md", "# Just markdown\n");

    hu().arg("svg")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("skip plain/index.md"))
        .stdout(predicate::str::contains("Generated 0 SVG file(s)"));

    assert!(!tmp.path().join("content/plain/plain-image.svg").exists());
}

#[test]
fn svg_style_flags_are_applied() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "pages/_index.md", "---\ntitle: Home\n---\n");

    hu().args([
        "svg",
        "--content-dir",
        "pages",
        "--width",
        "800",
        "--height",
        "418",
        "--bg",
        "#000000",
        "--fg",
        "white",
    ])
    .current_dir(tmp.path())
    .assert()
    .success();

    let svg = fs::read_to_string(tmp.path().join("pages/pages-image.svg")).unwrap();
    assert!(svg.contains(r#"viewBox="0 0 800 418""#));
    assert!(svg.contains(r##"fill="#000000""##));
    assert!(svg.contains(r#"fill="white""#));
}

#[test]
fn svg_without_pages_says_so() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("content")).unwrap();

    hu().arg("svg")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No markdown files (index.md/_index.md) found"));
}

#[test]
fn svg_missing_content_dir_fails() {
    let tmp = TempDir::new().unwrap();

    hu().arg("svg")
        .current_dir(tmp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Content directory not found"));
}

#[test]
fn svg_rejects_zero_width() {
    let tmp = TempDir::new().unwrap();

    hu().args(["svg", "--width", "0"])
        .current_dir(tmp.path())
        .assert()
        .failure();
}

// =========================================================================
// gen-config
// =========================================================================

#[test]
fn gen_config_prints_stock_toml() {
    hu().arg("gen-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("content_dir = \"content\""))
        .stdout(predicate::str::contains("[svg]"));
}
