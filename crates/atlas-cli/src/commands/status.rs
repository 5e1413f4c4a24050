use crate::support::{Session, print_json};
use serde_json::json;

pub fn run(session: &Session, json_output: bool) {
    let store = session.load_progress_or_exit();
    let lock = session.sigil_lock(&store);

    if json_output {
        let payload = json!({
            "action": "status",
            "progressPath": session.progress_path.display().to_string(),
            "gateOpen": store.gate_open,
            "sigils": {
                "unlocked": lock.index(),
                "total": lock.len(),
                "complete": lock.is_complete(),
                "states": lock.states(),
            },
            "tilesSolved": store.tiles_solved,
            "combinationOpen": store.combination_open,
        });
        print_json(&payload);
    } else {
        println!(
            "atlas status\n  Gate: {}\n  Sigils aligned: {} / {}\n  Tiles: {}\n  Combination: {}\n  Path: {}",
            if store.gate_open { "open" } else { "closed" },
            lock.index(),
            lock.len(),
            if store.tiles_solved { "solved" } else { "unsolved" },
            if store.combination_open { "open" } else { "locked" },
            session.progress_path.display()
        );
    }
}
