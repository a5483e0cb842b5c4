//! Rewrites a realistic landing page end to end through the library API.

use class_token_rewriter::{
    preview_file, rewrite_class_tokens, rewrite_file, RewriteConfig, RewriteError,
    RewriteOutcome, WriteMode,
};
use std::fs;
use tempfile::TempDir;

const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Desktop</title>
  <link rel="stylesheet" href="css/style.css">
</head>
<body>
  <div id="start-menu" class="start-menu hide">
    <ul class="start-items">
      <li class="start-item">Programs</li>
      <li class="start-item hideaway">Documents</li>
    </ul>
  </div>
  <div id="about" class="win-window hide" style="left: 40px">
    <div class="win-titlebar">About</div>
  </div>
  <div id="readme" class="win-window hidden"></div>
  <p>Click to hide the window.</p>
  <script src="js/main.js"></script>
</body>
</html>
"#;

fn setup_site() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.html"), PAGE).unwrap();
    dir
}

#[test]
fn rewrites_only_standalone_tokens_in_class_attributes() {
    let site = setup_site();
    let path = site.path().join("index.html");

    let report = rewrite_file(&RewriteConfig::for_target(&path)).unwrap();
    assert_eq!(report.outcome, RewriteOutcome::Rewritten { replacements: 2 });

    let output = fs::read_to_string(&path).unwrap();
    assert!(output.contains(r#"class="start-menu hidden""#));
    assert!(output.contains(r#"class="win-window hidden" style="left: 40px""#));
    assert!(output.contains(r#"class="start-item hideaway""#));
    assert!(output.contains(r#"<div id="readme" class="win-window hidden"></div>"#));
    assert!(output.contains("<p>Click to hide the window.</p>"));
    assert_eq!(output.len(), PAGE.len() + 2 * "den".len());
}

#[test]
fn second_run_is_a_no_op() {
    let site = setup_site();
    let path = site.path().join("index.html");
    let config = RewriteConfig::for_target(&path);

    let first = rewrite_file(&config).unwrap();
    assert!(first.is_changed());
    let after_first = fs::read_to_string(&path).unwrap();

    let second = rewrite_file(&config).unwrap();
    assert_eq!(second.outcome, RewriteOutcome::Unchanged);
    assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
}

#[test]
fn file_result_matches_pure_rewrite() {
    let site = setup_site();
    let path = site.path().join("index.html");

    rewrite_file(&RewriteConfig::for_target(&path).with_write_mode(WriteMode::Atomic)).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), rewrite_class_tokens(PAGE).unwrap());
}

#[test]
fn preview_reports_without_touching_disk() {
    let site = setup_site();
    let path = site.path().join("index.html");

    let report = preview_file(&RewriteConfig::for_target(&path)).unwrap();

    assert_eq!(report.replacements(), 2);
    assert_eq!(report.original, PAGE);
    assert_eq!(fs::read_to_string(&path).unwrap(), PAGE);
}

#[test]
fn missing_page_surfaces_not_found() {
    let site = TempDir::new().unwrap();
    let path = site.path().join("index.html");

    let err = rewrite_file(&RewriteConfig::for_target(&path)).unwrap_err();

    assert!(matches!(err, RewriteError::NotFound { .. }));
    assert!(err.to_string().contains("index.html"));
}
