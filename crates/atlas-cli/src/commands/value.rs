use crate::support::print_json;
use atlas_kernel::{normalize_word, word_value};
use serde_json::json;

pub fn run(words: Vec<String>, json_output: bool) {
    if json_output {
        let values: Vec<_> = words
            .iter()
            .map(|word| {
                json!({
                    "word": word,
                    "normalized": normalize_word(word),
                    "value": word_value(word),
                })
            })
            .collect();
        print_json(&json!({
            "action": "value",
            "values": values,
        }));
    } else {
        for word in &words {
            println!("{word}: {}", word_value(word));
        }
    }
}
