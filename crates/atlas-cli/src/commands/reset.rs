use crate::support::{Session, print_json};
use serde_json::json;

pub fn run(session: &Session, json_output: bool) {
    session.update_progress_or_exit(|store| {
        let changed = !store.is_fresh();
        store.clear();
        ((), changed)
    });

    if json_output {
        print_json(&json!({
            "action": "reset",
            "progressPath": session.progress_path.display().to_string(),
        }));
    } else {
        println!(
            "atlas reset\n  Progress cleared: {}\n  Speak the key phrase to pass through the gate.",
            session.progress_path.display()
        );
    }
}
