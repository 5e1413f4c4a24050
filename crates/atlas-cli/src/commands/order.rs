use crate::support::{Session, exit_with_error, print_json};
use atlas_kernel::{CombinationLock, OrderSummary, OrderingEngine};
use serde_json::json;
use tracing::warn;

/// Parse `FROM:TO` into two positions.
fn parse_move(raw: &str) -> Result<(usize, usize), String> {
    let (from, to) = raw
        .split_once(':')
        .ok_or_else(|| format!("invalid move {raw:?} (expected FROM:TO)"))?;
    let position = |text: &str| {
        text.trim()
            .parse::<usize>()
            .map_err(|_| format!("invalid position {text:?} in move {raw:?}"))
    };
    Ok((position(from)?, position(to)?))
}

fn parse_combination(raw: &str) -> Result<Vec<f64>, String> {
    raw.split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| format!("invalid number {part:?} in combination"))
        })
        .collect()
}

fn restore(engine: &mut OrderingEngine, words: &[String]) {
    if words.is_empty() {
        return;
    }
    if let Err(e) = engine.reorder_by_words(words) {
        warn!(
            reason = %e,
            "persisted ordering no longer matches the word list; using the seed order"
        );
    }
}

fn words_of(order: &[OrderSummary]) -> Vec<String> {
    order.iter().map(|summary| summary.word.clone()).collect()
}

pub fn run(session: &Session, moves: Vec<String>, submit: Option<String>, json_output: bool) {
    let parsed_moves: Vec<(usize, usize)> = moves
        .iter()
        .map(|raw| parse_move(raw).unwrap_or_else(|e| exit_with_error(e)))
        .collect();
    let combination = submit
        .as_deref()
        .map(|raw| parse_combination(raw).unwrap_or_else(|e| exit_with_error(e)));

    let mut store = session.load_progress_or_exit();
    session.require_gate_or_exit(&store);

    let mut engine = session.ordering_engine();
    restore(&mut engine, &store.ordering);

    let mut results = Vec::new();
    for (raw, (from, to)) in moves.iter().zip(&parsed_moves) {
        results.push(match engine.move_entry(*from, *to) {
            Ok(()) => json!({"move": raw, "ok": true}),
            Err(e) => json!({"move": raw, "ok": false, "reason": e.to_string()}),
        });
    }

    let order = engine.current_order();
    let mut changed = false;
    let words = words_of(&order);
    if words != store.ordering && !moves.is_empty() {
        store.ordering = words;
        changed = true;
    }

    let accepted = combination.as_ref().map(|values| {
        CombinationLock::from_words(&session.config.ordering_words).check(values)
    });
    if accepted == Some(true) && !store.combination_open {
        store.combination_open = true;
        changed = true;
    }
    if changed {
        session.save_progress_or_exit(&store);
    }

    if json_output {
        print_json(&json!({
            "action": "order",
            "results": results,
            "order": order,
            "combinationAccepted": accepted,
            "combinationOpen": store.combination_open,
        }));
    } else {
        println!("atlas order");
        for result in &results {
            if let Some(reason) = result["reason"].as_str() {
                println!("  refused: {}: {reason}", result["move"].as_str().unwrap_or_default());
            }
        }
        for summary in &order {
            println!("  {}. {:<12} {}", summary.index, summary.word, summary.value);
        }
        match accepted {
            Some(true) => println!("  The combination clicks open."),
            Some(false) => println!("  The dials refuse to turn."),
            None => {}
        }
    }

    if accepted == Some(false) {
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_kernel::EntryId;

    #[test]
    fn parses_moves_and_combinations() {
        assert_eq!(parse_move("0:3"), Ok((0, 3)));
        assert_eq!(parse_move(" 2 : 1 "), Ok((2, 1)));
        assert!(parse_move("2-1").is_err());
        assert!(parse_move("a:1").is_err());

        assert_eq!(parse_combination("4.5, 16.5,17"), Ok(vec![4.5, 16.5, 17.0]));
        assert!(parse_combination("4.5,,17").is_err());
    }

    #[test]
    fn restores_persisted_order_by_word() {
        let mut engine = OrderingEngine::new(&["Arbre", "Alea", "Alea"]);
        let persisted = vec!["alea".to_string(), "Arbre".to_string(), "Aléa".to_string()];
        restore(&mut engine, &persisted);
        assert_eq!(engine.ids(), vec![EntryId(1), EntryId(0), EntryId(2)]);
    }

    #[test]
    fn stale_persisted_order_keeps_seed() {
        let mut engine = OrderingEngine::new(&["Arbre", "Alea"]);
        restore(&mut engine, &["Moon".to_string(), "Arbre".to_string()]);
        assert_eq!(engine.ids(), vec![EntryId(0), EntryId(1)]);
    }
}
