use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

struct TempDirGuard {
    path: PathBuf,
}

impl TempDirGuard {
    fn new(prefix: &str) -> Self {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "atlas-cli-{prefix}-{}-{unique}",
            std::process::id()
        ));
        fs::create_dir_all(&path).expect("temp dir should be created");
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn progress(&self) -> String {
        self.path.join("progress.json").display().to_string()
    }
}

impl Drop for TempDirGuard {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn run_atlas<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = env!("CARGO_BIN_EXE_atlas");
    Command::new(bin)
        .args(args)
        .env_remove("ATLAS_PROGRESS")
        .env_remove("ATLAS_CONFIG")
        .env_remove("ATLAS_SEED")
        .output()
        .expect("atlas command should execute")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        panic!(
            "command failed with status {:?}\nstdout:\n{}\nstderr:\n{}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn assert_failure(output: &Output) {
    if output.status.success() {
        panic!(
            "command unexpectedly succeeded\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn parse_json_stdout(output: &Output) -> Value {
    serde_json::from_slice::<Value>(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout should be valid json: {e}\nstdout:\n{}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

fn open_gate(tmp: &TempDirGuard) {
    let output = run_atlas(["--progress", &tmp.progress(), "gate", "Atlas"]);
    assert_success(&output);
}

#[test]
fn value_prints_encoded_words() {
    let output = run_atlas(["value", "Arbre", "Nazareth", "--json"]);
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["action"], "value");
    assert_eq!(payload["values"][0]["value"], 4.5);
    assert_eq!(payload["values"][1]["value"], 16.5);

    let text = run_atlas(["value", "Nodal"]);
    assert_success(&text);
    assert!(String::from_utf8_lossy(&text.stdout).contains("Nodal: 20"));
}

#[test]
fn gate_refuses_wrong_phrase_and_opens_on_key() {
    let tmp = TempDirGuard::new("gate");

    let refused = run_atlas(["--progress", &tmp.progress(), "gate", "open sesame", "--json"]);
    assert_failure(&refused);
    let payload = parse_json_stdout(&refused);
    assert_eq!(payload["gateOpen"], false);

    let opened = run_atlas(["--progress", &tmp.progress(), "gate", "  ATLAS ", "--json"]);
    assert_success(&opened);
    let payload = parse_json_stdout(&opened);
    assert_eq!(payload["gateOpen"], true);

    let status = run_atlas(["--progress", &tmp.progress(), "status", "--json"]);
    assert_success(&status);
    assert_eq!(parse_json_stdout(&status)["gateOpen"], true);
}

#[test]
fn gate_ignores_spacing_diacritics_and_closes_on_wrong_phrase() {
    let tmp = TempDirGuard::new("gate-diacritics");

    let opened = run_atlas([
        "--progress",
        &tmp.progress(),
        "gate",
        "\u{FEFF}At^l`as",
        "--json",
    ]);
    assert_success(&opened);
    assert_eq!(parse_json_stdout(&opened)["gateOpen"], true);

    let refused = run_atlas(["--progress", &tmp.progress(), "gate", "atlantis"]);
    assert_failure(&refused);

    let status = run_atlas(["--progress", &tmp.progress(), "status", "--json"]);
    assert_success(&status);
    assert_eq!(parse_json_stdout(&status)["gateOpen"], false);
}

#[test]
fn tiles_require_open_gate() {
    let tmp = TempDirGuard::new("tiles-closed");
    let output = run_atlas(["--progress", &tmp.progress(), "tiles"]);
    assert_failure(&output);
    assert!(String::from_utf8_lossy(&output.stderr).contains("gate is closed"));
}

#[test]
fn tiles_solve_persists_and_restores() {
    let tmp = TempDirGuard::new("tiles-solve");
    open_gate(&tmp);

    let target = ["Arbre", "Nazareth", "Alea", "Nodal", "Ymagier", "Anchor"];
    let mut args = vec![
        "--progress".to_string(),
        tmp.progress(),
        "--seed".to_string(),
        "7".to_string(),
        "tiles".to_string(),
        "--json".to_string(),
    ];
    for (slot, word) in target.iter().enumerate() {
        args.push("--op".to_string());
        args.push(format!("stage {word} {slot}"));
        args.push("--op".to_string());
        args.push(format!("promote {slot}"));
    }

    let output = run_atlas(&args);
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["tilesSolved"], true);
    assert_eq!(payload["snapshot"]["solved"], true);
    let finals: Vec<&str> = payload["snapshot"]["final"]
        .as_array()
        .expect("final row")
        .iter()
        .map(|tile| tile["word"].as_str().expect("filled slot"))
        .collect();
    assert_eq!(finals, target);

    let again = run_atlas(["--progress", &tmp.progress(), "tiles", "--json"]);
    assert_success(&again);
    let payload = parse_json_stdout(&again);
    assert_eq!(payload["tilesSolved"], true);
    assert_eq!(payload["snapshot"]["solved"], true);
}

#[test]
fn tiles_report_refused_ops_without_failing() {
    let tmp = TempDirGuard::new("tiles-refused");
    open_gate(&tmp);

    let output = run_atlas([
        "--progress",
        &tmp.progress(),
        "tiles",
        "--op",
        "promote 0",
        "--json",
    ]);
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["results"][0]["ok"], false);
    assert_eq!(payload["tilesSolved"], false);

    let malformed = run_atlas(["--progress", &tmp.progress(), "tiles", "--op", "fly Moon"]);
    assert_failure(&malformed);
}

#[test]
fn sigils_advance_in_order() {
    let tmp = TempDirGuard::new("sigil");
    open_gate(&tmp);

    let wrong = run_atlas(["--progress", &tmp.progress(), "sigil", "tide", "--json"]);
    assert_failure(&wrong);
    assert_eq!(parse_json_stdout(&wrong)["message"], "Wrong sigil. Retry.");

    for (index, word) in ["Ember", "tide", " gale "].iter().enumerate() {
        let output = run_atlas(["--progress", &tmp.progress(), "sigil", word, "--json"]);
        assert_success(&output);
        let payload = parse_json_stdout(&output);
        assert_eq!(payload["unlocked"], index + 1);
        assert_eq!(payload["message"], "Sigil unlocked.");
    }

    let last = run_atlas(["--progress", &tmp.progress(), "sigil", "STONE", "--json"]);
    assert_success(&last);
    assert_eq!(parse_json_stdout(&last)["message"], "Chest unlocked!");

    let status = run_atlas(["--progress", &tmp.progress(), "status", "--json"]);
    assert_eq!(parse_json_stdout(&status)["sigils"]["complete"], true);
}

#[test]
fn order_moves_persist_and_combination_opens() {
    let tmp = TempDirGuard::new("order");
    open_gate(&tmp);
    let config = tmp.path().join("atlas.toml");
    fs::write(&config, "ordering_words = [\"Arbre\", \"Alea\", \"Nodal\"]\n")
        .expect("config should be written");
    let config = config.display().to_string();

    let moved = run_atlas([
        "--progress",
        &tmp.progress(),
        "--config",
        &config,
        "order",
        "--move",
        "2:0",
        "--json",
    ]);
    assert_success(&moved);
    let payload = parse_json_stdout(&moved);
    let words: Vec<&str> = payload["order"]
        .as_array()
        .expect("order")
        .iter()
        .map(|entry| entry["word"].as_str().expect("word"))
        .collect();
    assert_eq!(words, vec!["Nodal", "Arbre", "Alea"]);

    let rejected = run_atlas([
        "--progress",
        &tmp.progress(),
        "--config",
        &config,
        "order",
        "--submit",
        "17,4.5,20",
        "--json",
    ]);
    assert_failure(&rejected);
    let payload = parse_json_stdout(&rejected);
    assert_eq!(payload["combinationAccepted"], false);
    assert_eq!(payload["order"][0]["word"], "Nodal");

    let accepted = run_atlas([
        "--progress",
        &tmp.progress(),
        "--config",
        &config,
        "order",
        "--submit",
        "4.5, 17, 20",
        "--json",
    ]);
    assert_success(&accepted);
    assert_eq!(parse_json_stdout(&accepted)["combinationOpen"], true);
}

#[test]
fn reset_forgets_progress() {
    let tmp = TempDirGuard::new("reset");
    open_gate(&tmp);

    let output = run_atlas(["--progress", &tmp.progress(), "reset", "--json"]);
    assert_success(&output);
    assert_eq!(parse_json_stdout(&output)["action"], "reset");

    let status = run_atlas(["--progress", &tmp.progress(), "status", "--json"]);
    assert_success(&status);
    let payload = parse_json_stdout(&status);
    assert_eq!(payload["gateOpen"], false);
    assert_eq!(payload["sigils"]["unlocked"], 0);
}
