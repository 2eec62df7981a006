//! "nice" Acceptor
//!
//! A linear chain of states that accepts exactly the word "nice". Each input
//! is checked as a whole batch.
//!
//! Run with: cargo run --example nice_string -- nice nie nicer

use minidfa::builder::chain;
use minidfa::{Automaton, TaggedState};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let states = [
        TaggedState::simple(0),
        TaggedState::simple(1),
        TaggedState::simple(2),
        TaggedState::simple(3),
        TaggedState::accepting(4),
    ];
    let delta = Arc::new(chain(&states, &['n', 'i', 'c', 'e']));

    let mut words: Vec<String> = std::env::args().skip(1).collect();
    if words.is_empty() {
        words = vec!["nice".to_string(), "nie".to_string(), "nicer".to_string()];
    }

    for word in &words {
        let mut acceptor = Automaton::new(states[0], Arc::clone(&delta));
        let all_taken = acceptor.consume(word.chars());

        tracing::info!(
            "{:?}: every letter matched = {}, ended in {} (accepted: {})",
            word,
            all_taken,
            acceptor.current_state(),
            all_taken && acceptor.is_accepting()
        );
    }
}
