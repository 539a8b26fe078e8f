//! Coin-operated turnstile driven from a JSON configuration.
//!
//! Run with `RUST_LOG=rewind_fsm=debug` to see every transition.

use rewind_fsm::{FsmError, StateMachine};
use tracing_subscriber::EnvFilter;

const TURNSTILE: &str = r#"{
    "initial": "locked",
    "states": {
        "locked":   { "transitions": { "coin": "unlocked", "push": "locked" } },
        "unlocked": { "transitions": { "push": "locked", "coin": "unlocked" } },
        "broken":   { "transitions": { "repair": "locked" } }
    }
}"#;

fn main() -> Result<(), FsmError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = StateMachine::from_json("null") {
        if err.is_configuration() {
            println!("Refused to start: {err}");
        }
    }

    let mut turnstile = StateMachine::from_json(TURNSTILE)?;
    println!("Start: {}", turnstile.state());

    for event in ["coin", "push", "push"] {
        turnstile.trigger(event)?;
        println!("{event:>6} -> {}", turnstile.state());
    }

    if let Err(err) = turnstile.trigger("kick") {
        println!("Rejected: {err}");
    }

    turnstile.change_state("broken")?;
    println!("Vandalised: {}", turnstile.state());
    println!("States accepting 'push': {:?}", turnstile.states(Some("push")));

    while turnstile.undo() {
        println!("  undo -> {}", turnstile.state());
    }
    turnstile.redo();
    println!("  redo -> {}", turnstile.state());

    turnstile.trigger("coin")?;
    println!("After coin, redo available: {}", turnstile.can_redo());

    Ok(())
}
