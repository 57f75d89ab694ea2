mod common;

use common::{run_in, stderr, stdout};
use tempfile::TempDir;

#[test]
fn encode_prints_wire_bytes() {
    let tmp = TempDir::new().expect("temp dir");
    let out = run_in(tmp.path(), &["encode"]);

    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(stdout(&out).starts_with("Encoded Person: [10 5 74 97 109 101 115 16 1 26 20 "));
}

#[test]
fn write_then_decode() {
    let tmp = TempDir::new().expect("temp dir");

    let out = run_in(tmp.path(), &["write"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let text = stdout(&out);
    assert!(text.contains("person.bytes file successfully. len 31"));
    assert!(text.contains("person.json file successfully. len"));

    let json = std::fs::read_to_string(tmp.path().join("person.json")).expect("json file");
    assert_eq!(json, r#"{"name":"James","id":1,"email":"james.lewis2@anz.com"}"#);

    let out = run_in(tmp.path(), &["decode"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let text = stdout(&out);
    assert!(text.contains("name: James"));
    assert!(text.contains("id: 1"));
    assert!(text.contains("email: james.lewis2@anz.com"));
}

#[test]
fn write_honours_person_overrides() {
    let tmp = TempDir::new().expect("temp dir");

    let out = run_in(tmp.path(), &["write", "--name", "Ada", "--id", "-7"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let out = run_in(tmp.path(), &["decode"]);
    let text = stdout(&out);
    assert!(text.contains("name: Ada"));
    assert!(text.contains("id: -7"));
    assert!(text.contains("email: james.lewis2@anz.com"));
}

#[test]
fn probe_reports_first_accepting_type() {
    let tmp = TempDir::new().expect("temp dir");
    assert!(run_in(tmp.path(), &["write"]).status.success());

    let out = run_in(tmp.path(), &["probe"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out).trim(), "The data represents a example.person.Person");

    // Label shares wire types with field 1 and wins when tried first
    let out = run_in(tmp.path(), &["probe", "--order", "label,person"]);
    assert_eq!(stdout(&out).trim(), "The data represents a example.probe.Label");

    let out = run_in(tmp.path(), &["probe", "--order", "counter"]);
    assert_eq!(stdout(&out).trim(), "The data does not represent a known type");

    let out = run_in(
        tmp.path(),
        &["probe", "--schema", "example.nope.Missing", "--schema", "example.person.Person"],
    );
    assert_eq!(stdout(&out).trim(), "The data represents a example.person.Person");
}

#[test]
fn reflect_decodes_through_registry() {
    let tmp = TempDir::new().expect("temp dir");

    let out = run_in(tmp.path(), &["reflect", "--save"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let text = stdout(&out);
    assert!(text.contains("Field: name, Value: James"));
    assert!(text.contains("Field: id, Value: 1"));
    assert!(text.contains("Field: email, Value: james.lewis2@anz.com"));

    let event_file = tmp.path().join("person.event.json");
    assert!(event_file.exists());

    let out = run_in(
        tmp.path(),
        &["reflect", "--event", event_file.to_str().expect("utf8 path")],
    );
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(stdout(&out).contains("Field: name, Value: James"));
}

#[test]
fn reflect_rejects_person_flags_with_existing_event() {
    let tmp = TempDir::new().expect("temp dir");
    assert!(run_in(tmp.path(), &["reflect", "--save"]).status.success());
    let event_file = tmp.path().join("person.event.json");
    let event_arg = event_file.to_str().expect("utf8 path");

    for flag in [["--name", "Bob"], ["--id", "9"], ["--email", "bob@example.com"]] {
        let mut args = vec!["reflect", "--event", event_arg];
        args.extend(flag);
        let out = run_in(tmp.path(), &args);
        assert!(!out.status.success(), "{:?} was accepted", flag);
        assert!(stderr(&out).contains("cannot be used with"));
    }
}

#[test]
fn reflect_omits_default_fields() {
    let tmp = TempDir::new().expect("temp dir");

    let out = run_in(tmp.path(), &["reflect", "--id", "0"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let text = stdout(&out);
    assert!(!text.contains("Field: id"));
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn shapes_report_variant_and_values() {
    let tmp = TempDir::new().expect("temp dir");
    let out = run_in(tmp.path(), &["shapes"]);

    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let text = stdout(&out);
    assert!(text.contains("Type: Circle, Value: {5}"));
    assert!(text.contains("Type: Rectangle, Value: {3 4}"));
    assert!(text.contains("area: 12.00"));
    assert_eq!(text.lines().last(), Some("10"));
}

#[test]
fn schemas_lists_builtin_messages() {
    let tmp = TempDir::new().expect("temp dir");
    let out = run_in(tmp.path(), &["schemas"]);

    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let text = stdout(&out);
    assert!(text.lines().any(|l| l == "example.person.Person"));
    assert!(text.lines().any(|l| l == "example.probe.Counter"));
    assert!(!text.contains("PhoneType"));
}

#[test]
fn decode_without_file_fails() {
    let tmp = TempDir::new().expect("temp dir");
    let out = run_in(tmp.path(), &["decode"]);

    assert!(!out.status.success());
    assert!(stderr(&out).contains("person.bytes"));
}

#[test]
fn config_file_changes_defaults() {
    let tmp = TempDir::new().expect("temp dir");
    let config = tmp.path().join("pbtour.yaml");
    std::fs::write(
        &config,
        "bytes_file: grace.bytes\nperson:\n  name: Grace\n  id: 3\n",
    )
    .expect("write config");

    let config_arg = config.to_str().expect("utf8 path");
    let out = run_in(tmp.path(), &["--config", config_arg, "write"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(tmp.path().join("grace.bytes").exists());

    let out = run_in(tmp.path(), &["--config", config_arg, "decode"]);
    let text = stdout(&out);
    assert!(text.contains("name: Grace"));
    assert!(text.contains("id: 3"));
}
