//! Mood Automaton
//!
//! An agent that eats, sleeps and works depending on how it feels. The input
//! arrives one symbol at a time, like a live feed.
//!
//! Run with: RUST_LOG=trace cargo run --example mood

use minidfa::{delta, state_enum, symbol_enum, Automaton};
use tracing_subscriber::EnvFilter;

state_enum! {
    enum Mood {
        Eat,
        Sleep,
        Work,
    }
    final: [Sleep]
}

symbol_enum! {
    enum Feeling {
        Tired,
        Hungry,
        Bored,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let delta = delta![
        (Mood::Eat, Feeling::Tired) => Mood::Sleep,
        (Mood::Eat, Feeling::Hungry) => Mood::Eat,
        (Mood::Eat, Feeling::Bored) => Mood::Work,

        (Mood::Sleep, Feeling::Tired) => Mood::Sleep,
        (Mood::Sleep, Feeling::Hungry) => Mood::Eat,
        (Mood::Sleep, Feeling::Bored) => Mood::Work,

        (Mood::Work, Feeling::Tired) => Mood::Sleep,
        (Mood::Work, Feeling::Hungry) => Mood::Eat,
        (Mood::Work, Feeling::Bored) => Mood::Work,
    ];

    let mut agent = Automaton::new(Mood::Sleep, delta);
    tracing::info!("Agent wakes up in {:?}", agent.current_state());

    for feeling in [
        Feeling::Tired,
        Feeling::Hungry,
        Feeling::Bored,
        Feeling::Tired,
    ] {
        let moved = agent.step(&feeling);
        tracing::info!(
            "Feeling {:?}: {} -> now {:?}",
            feeling,
            if moved { "moved" } else { "stuck" },
            agent.current_state()
        );
    }

    tracing::info!(
        "Day over in {:?} (accepting: {})",
        agent.current_state(),
        agent.is_accepting()
    );
}
