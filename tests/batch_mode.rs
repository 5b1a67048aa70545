//! Tests for batch mode (explicit domain list).

use dns_query_tool::app::{run_batch, Session};
use dns_query_tool::{run, Config, RecordType};
use tempfile::TempDir;

#[path = "helpers.rs"]
mod helpers;

use helpers::{log_lines, scratch_log, scripted_console, transcript, StubResolver};

fn types(tags: &[&str]) -> Vec<RecordType> {
    tags.iter().map(|tag| RecordType::new(tag)).collect()
}

#[test]
fn test_explicit_records_keep_empty_types_and_save_csv() {
    let dir = TempDir::new().unwrap();
    let (log, _) = scratch_log(&dir);
    let resolver = StubResolver::new().found("example.com", "A", &["93.184.216.34"]);
    let target = dir.path().join("out");
    let mut console = scripted_console(&format!("csv\n{}\n", target.display()));

    let config = Config {
        domains: Some("example.com".to_string()),
        records: Some("A,MX".to_string()),
        ..Default::default()
    };
    run(&config, &resolver, &mut console, &log).expect("batch run should succeed");

    let saved = dir.path().join("out.csv");
    let csv = std::fs::read_to_string(&saved).expect("CSV file should be written");
    assert_eq!(
        csv,
        "domain,record type,record info\n\
         example.com,A,93.184.216.34\n\
         example.com,MX,No records found\n"
    );

    let output = transcript(&console);
    assert!(output.contains("Querying example.com for records: A, MX"));
    // No selection prompt when --records is given
    assert!(!output.contains("Record types found"));
    assert!(output.contains(&format!("Results saved to {}", saved.display())));
}

#[test]
fn test_default_types_with_selection_and_skipped_domain() {
    let dir = TempDir::new().unwrap();
    let (log, _) = scratch_log(&dir);
    let resolver = StubResolver::new()
        .found("a.example", "A", &["192.0.2.1"])
        .found("a.example", "TXT", &["v=spf1 -all", "google-site-verification=abc"])
        .found("c.example", "AAAA", &["2001:db8::1"]);
    // a.example: keep TXT only; c.example: keep all; then skip saving
    let mut console = scripted_console("txt\n\n\n");
    let mut session = Session::new(&resolver, &mut console, &log);

    let domains = vec![
        "a.example".to_string(),
        "b.example".to_string(),
        "c.example".to_string(),
    ];
    let bundle = run_batch(&mut session, &domains, None).unwrap();

    let kept: Vec<&str> = bundle.iter().map(|(domain, _)| domain).collect();
    assert_eq!(kept, vec!["a.example", "c.example"]);
    let a = bundle.get("a.example").unwrap();
    assert_eq!(a.len(), 1);
    assert_eq!(
        a.get(&RecordType::new("TXT")).unwrap(),
        &["v=spf1 -all".to_string(), "google-site-verification=abc".to_string()]
    );
    assert_eq!(
        bundle.get("c.example").unwrap().types_with_records(),
        types(&["AAAA"])
    );

    // Every domain is queried for the four defaults, one at a time
    assert_eq!(resolver.queries().len(), 12);
    assert_eq!(
        &resolver.queries()[..4],
        &["a.example/A", "a.example/CNAME", "a.example/AAAA", "a.example/TXT"]
    );

    let output = transcript(&console);
    assert!(output.contains("Record types found: A, TXT"));
    assert!(output.contains("No DNS records found for b.example."));
    assert!(output.contains("CSV Preview:"));
    assert!(output.contains("JSON Preview:"));
    assert!(output.contains("Results not saved."));
}

#[test]
fn test_no_results_skips_preview_and_save() {
    let dir = TempDir::new().unwrap();
    let (log, _) = scratch_log(&dir);
    let resolver = StubResolver::new();
    let mut console = scripted_console("");
    let mut session = Session::new(&resolver, &mut console, &log);

    let bundle = run_batch(&mut session, &["empty.example".to_string()], None).unwrap();

    assert!(bundle.is_empty());
    let output = transcript(&console);
    assert!(output.contains("No results to save. Exiting."));
    assert!(!output.contains("Save results?"));
}

#[test]
fn test_separator_only_domain_argument() {
    let dir = TempDir::new().unwrap();
    let (log, _) = scratch_log(&dir);
    let resolver = StubResolver::new();
    let mut console = scripted_console("");

    let config = Config {
        domains: Some(" , ".to_string()),
        ..Default::default()
    };
    run(&config, &resolver, &mut console, &log).unwrap();

    assert!(resolver.queries().is_empty());
    assert!(transcript(&console).contains("No valid domains provided. Exiting."));
}

#[test]
fn test_transport_error_is_logged_and_batch_continues() {
    let dir = TempDir::new().unwrap();
    let (log, log_path) = scratch_log(&dir);
    let resolver = StubResolver::new()
        .fault("one.example", "A", "io error: connection refused")
        .found("one.example", "TXT", &["hello"])
        .found("two.example", "A", &["198.51.100.7"]);
    let mut console = scripted_console("\n");
    let mut session = Session::new(&resolver, &mut console, &log);

    let bundle = run_batch(
        &mut session,
        &["one.example".to_string(), "two.example".to_string()],
        Some(types(&["A", "TXT"]).as_slice()),
    )
    .unwrap();
    log.close();

    let one = bundle.get("one.example").unwrap();
    assert_eq!(one.get(&RecordType::new("A")), Some(&[][..]));
    assert_eq!(one.get(&RecordType::new("TXT")).unwrap(), &["hello".to_string()]);
    assert_eq!(
        bundle.get("two.example").unwrap().types_with_records(),
        types(&["A"])
    );
    assert_eq!(resolver.queries().len(), 4);

    let lines = log_lines(&log_path);
    assert_eq!(lines.len(), 1);
    assert!(lines[0]
        .ends_with("WARN - Error querying A records for one.example: io error: connection refused"));
}

#[test]
fn test_failed_save_is_reported_and_logged() {
    let dir = TempDir::new().unwrap();
    let (log, log_path) = scratch_log(&dir);
    let resolver = StubResolver::new().found("example.com", "A", &["192.0.2.10"]);
    let target = dir.path().join("missing-dir").join("results");
    let mut console = scripted_console(&format!("JSON\n{}\n", target.display()));
    let mut session = Session::new(&resolver, &mut console, &log);

    run_batch(
        &mut session,
        &["example.com".to_string()],
        Some(types(&["A"]).as_slice()),
    )
    .expect("a failed save must not abort the run");
    log.close();

    let output = transcript(&console);
    assert!(output.contains("Error saving JSON file:"));
    assert!(!output.contains("Results saved to"));
    let lines = log_lines(&log_path);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("WARN - Failed to save JSON to"));
}

#[test]
fn test_unknown_save_answer_skips_saving() {
    let dir = TempDir::new().unwrap();
    let (log, _) = scratch_log(&dir);
    let resolver = StubResolver::new().found("example.com", "A", &["192.0.2.10"]);
    let mut console = scripted_console("xml\n");
    let mut session = Session::new(&resolver, &mut console, &log);

    run_batch(
        &mut session,
        &["example.com".to_string()],
        Some(types(&["A"]).as_slice()),
    )
    .unwrap();

    let output = transcript(&console);
    assert!(output.contains("Results not saved."));
    assert!(!output.contains("Enter filename"));
}
