use crate::support::{Session, exit_with_error, print_json};
use atlas_kernel::{
    MoveOutcome, MoveRejection, PlacementEngine, PlacementEvent, PlacementSnapshot, TileId,
    TileView, normalize_word,
};
use serde_json::{Value, json};
use std::cell::Cell;
use std::rc::Rc;
use std::str::FromStr;

/// One discrete operation, as typed on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileOp {
    Stage { word: String, slot: Option<usize> },
    Source { word: String },
    Promote { slot: usize },
    Demote { slot: usize },
    Complete,
    Reset,
}

impl FromStr for TileOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let slot = |raw: &&str| parse_slot(raw, s);
        match parts.as_slice() {
            ["stage", word] => Ok(Self::Stage {
                word: word.to_string(),
                slot: None,
            }),
            ["stage", word, raw] => Ok(Self::Stage {
                word: word.to_string(),
                slot: Some(slot(raw)?),
            }),
            ["source", word] => Ok(Self::Source {
                word: word.to_string(),
            }),
            ["promote", raw] => Ok(Self::Promote { slot: slot(raw)? }),
            ["demote", raw] => Ok(Self::Demote { slot: slot(raw)? }),
            ["complete"] => Ok(Self::Complete),
            ["reset"] => Ok(Self::Reset),
            _ => Err(format!(
                "unknown op {s:?} (expected stage WORD [SLOT], source WORD, promote SLOT, demote SLOT, complete, reset)"
            )),
        }
    }
}

fn parse_slot(raw: &str, op: &str) -> Result<usize, String> {
    raw.parse()
        .map_err(|_| format!("invalid slot {raw:?} in op {op:?}"))
}

/// First tile with this word: source first, then staging, then final.
fn resolve(engine: &PlacementEngine, word: &str) -> Option<TileId> {
    let key = normalize_word(word);
    engine
        .source()
        .iter()
        .copied()
        .chain(engine.staging().iter().flatten().copied())
        .chain(engine.final_row().iter().flatten().copied())
        .find(|id| {
            engine
                .tile_by_id(*id)
                .is_some_and(|tile| tile.normalized() == key)
        })
}

fn tile_for_word(engine: &PlacementEngine, word: &str) -> Result<TileId, String> {
    resolve(engine, word).ok_or_else(|| format!("no tile for word {word:?}"))
}

fn apply(engine: &mut PlacementEngine, op: &TileOp) -> Result<MoveOutcome, String> {
    let rejected = |e: MoveRejection| e.to_string();

    match op {
        TileOp::Stage { word, slot } => {
            let id = tile_for_word(engine, word)?;
            engine.place_in_staging(id, *slot).map_err(rejected)
        }
        TileOp::Source { word } => {
            let id = tile_for_word(engine, word)?;
            engine.move_to_source(id).map_err(rejected)
        }
        TileOp::Promote { slot } => engine.promote(*slot).map_err(rejected),
        TileOp::Demote { slot } => engine.demote(*slot).map_err(rejected),
        TileOp::Complete => engine
            .complete_immediately()
            .map(|()| MoveOutcome::Applied)
            .map_err(|e| e.to_string()),
        TileOp::Reset => {
            engine.reset();
            Ok(MoveOutcome::Applied)
        }
    }
}

pub fn run(session: &Session, ops: Vec<String>, json_output: bool) {
    let parsed: Vec<TileOp> = ops
        .iter()
        .map(|raw| raw.parse().unwrap_or_else(|e: String| exit_with_error(e)))
        .collect();

    let mut store = session.load_progress_or_exit();
    session.require_gate_or_exit(&store);

    let mut engine = session.placement_engine_or_exit();
    if store.tiles_solved {
        engine
            .complete_immediately()
            .unwrap_or_else(|e| exit_with_error(format!("failed to restore tiles: {e}")));
    }

    let solved_event = Rc::new(Cell::new(false));
    {
        let solved_event = Rc::clone(&solved_event);
        engine.subscribe(move |event| {
            if matches!(event, PlacementEvent::Solved(_)) {
                solved_event.set(true);
            }
        });
    }

    let mut solved = store.tiles_solved;
    let mut results = Vec::new();
    for (raw, op) in ops.iter().zip(&parsed) {
        solved_event.set(false);
        let result = apply(&mut engine, op);
        if matches!(op, TileOp::Reset) {
            solved = false;
        }
        if matches!(op, TileOp::Complete) && result.is_ok() {
            solved = true;
        }
        if solved_event.get() {
            solved = true;
        }
        results.push(match result {
            Ok(MoveOutcome::Applied) => json!({"op": raw, "ok": true, "changed": true}),
            Ok(MoveOutcome::Unchanged) => json!({"op": raw, "ok": true, "changed": false}),
            Err(reason) => json!({"op": raw, "ok": false, "reason": reason}),
        });
    }

    if solved != store.tiles_solved {
        store.tiles_solved = solved;
        session.save_progress_or_exit(&store);
    }

    let snapshot = engine.snapshot();
    if json_output {
        print_json(&json!({
            "action": "tiles",
            "results": results,
            "snapshot": snapshot,
            "tilesSolved": store.tiles_solved,
        }));
    } else {
        for result in &results {
            print_result(result);
        }
        print_snapshot(&snapshot);
        if store.tiles_solved {
            println!("  The final row glows: the reward is revealed.");
        }
    }
}

fn print_result(result: &Value) {
    let op = result["op"].as_str().unwrap_or_default();
    match result["reason"].as_str() {
        Some(reason) => println!("  refused: {op}: {reason}"),
        None => println!("  ok: {op}"),
    }
}

fn print_snapshot(snapshot: &PlacementSnapshot) {
    fn cell(tile: &Option<TileView>) -> String {
        tile.as_ref()
            .map(|t| t.word.clone())
            .unwrap_or_else(|| "_".to_string())
    }

    let source: Vec<&str> = snapshot.source.iter().map(|t| t.word.as_str()).collect();
    let staging: Vec<String> = snapshot.staging.iter().map(cell).collect();
    let final_row: Vec<String> = snapshot.final_row.iter().map(cell).collect();
    println!(
        "atlas tiles\n  Source:  {}\n  Staging: [{}]\n  Final:   [{}]",
        source.join(", "),
        staging.join(", "),
        final_row.join(", ")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_op_form() {
        assert_eq!(
            "stage Arbre".parse::<TileOp>(),
            Ok(TileOp::Stage {
                word: "Arbre".to_string(),
                slot: None
            })
        );
        assert_eq!(
            " stage  Alea 3 ".parse::<TileOp>(),
            Ok(TileOp::Stage {
                word: "Alea".to_string(),
                slot: Some(3)
            })
        );
        assert_eq!(
            "source Moon".parse::<TileOp>(),
            Ok(TileOp::Source {
                word: "Moon".to_string()
            })
        );
        assert_eq!(
            "promote 2".parse::<TileOp>(),
            Ok(TileOp::Promote { slot: 2 })
        );
        assert_eq!("demote 0".parse::<TileOp>(), Ok(TileOp::Demote { slot: 0 }));
        assert_eq!("complete".parse::<TileOp>(), Ok(TileOp::Complete));
        assert_eq!("reset".parse::<TileOp>(), Ok(TileOp::Reset));
    }

    #[test]
    fn rejects_malformed_ops() {
        assert!("promote x".parse::<TileOp>().is_err());
        assert!("fly Arbre".parse::<TileOp>().is_err());
        assert!("stage".parse::<TileOp>().is_err());
    }

    #[test]
    fn resolve_prefers_source_tiles() {
        let mut engine =
            PlacementEngine::with_seed(&["moon", "Moon", "tide"], &["moon"], 1).expect("valid");
        let first = resolve(&engine, "MOON").expect("moon exists");
        engine.place_in_staging(first, Some(0)).expect("free slot");

        let second = resolve(&engine, "moon").expect("second moon in source");
        assert_ne!(first, second);
        assert_eq!(resolve(&engine, "gale"), None);
    }

    #[test]
    fn apply_reports_rejections_as_text() {
        let mut engine =
            PlacementEngine::with_seed(&["moon", "tide"], &["moon"], 1).expect("valid");
        let err = apply(&mut engine, &TileOp::Promote { slot: 0 }).expect_err("empty slot");
        assert_eq!(err, "staging slot 0 is empty");
        assert_eq!(
            apply(&mut engine, &TileOp::Stage {
                word: "tide".to_string(),
                slot: None
            }),
            Ok(MoveOutcome::Applied)
        );
    }
}
