use crate::support::{Session, print_json};
use atlas_kernel::SigilOutcome;
use serde_json::json;

pub fn run(session: &Session, guess: String, json_output: bool) {
    let mut store = session.load_progress_or_exit();
    session.require_gate_or_exit(&store);

    let mut lock = session.sigil_lock(&store);
    let outcome = lock.guess(&guess);
    if store.sigil_index != lock.index() {
        store.sigil_index = lock.index();
        session.save_progress_or_exit(&store);
    }

    let message = match outcome {
        SigilOutcome::AlreadyComplete | SigilOutcome::Completed => "Chest unlocked!",
        SigilOutcome::Advanced { .. } => "Sigil unlocked.",
        SigilOutcome::Wrong => "Wrong sigil. Retry.",
        SigilOutcome::Empty => "Enter a sigil.",
    };

    if json_output {
        print_json(&json!({
            "action": "sigil",
            "result": outcome,
            "unlocked": lock.index(),
            "total": lock.len(),
            "message": message,
        }));
    } else {
        println!(
            "{message}\n  Sigils aligned: {} / {}",
            lock.index(),
            lock.len()
        );
    }

    if matches!(outcome, SigilOutcome::Wrong | SigilOutcome::Empty) {
        std::process::exit(1);
    }
}
