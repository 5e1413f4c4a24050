use crate::support::{Session, print_json};
use atlas_kernel::{GateOutcome, PassphraseGate};
use serde_json::json;

const SUCCESS_MESSAGE: &str = "The gatekeeper bows as the gate swings open.";
const FAILURE_MESSAGE: &str = "The sentry remains unmoved. Whisper the correct key phrase.";
const EMPTY_MESSAGE: &str = "Offer a phrase before seeking passage.";

pub fn run(session: &Session, phrase: String, json_output: bool) {
    let gate = PassphraseGate::new(&session.config.passphrase);
    let outcome = gate.attempt(&phrase);

    // Any attempt that does not open the gate closes it again.
    let gate_open = outcome.is_open();
    session.update_progress_or_exit(|store| {
        let changed = store.gate_open != gate_open;
        store.gate_open = gate_open;
        ((), changed)
    });

    let message = match outcome {
        GateOutcome::Opened => SUCCESS_MESSAGE,
        GateOutcome::Refused => FAILURE_MESSAGE,
        GateOutcome::Empty => EMPTY_MESSAGE,
    };

    if json_output {
        print_json(&json!({
            "action": "gate",
            "outcome": outcome,
            "gateOpen": gate_open,
            "message": message,
        }));
    } else {
        println!("{message}");
    }

    if !outcome.is_open() {
        std::process::exit(1);
    }
}
