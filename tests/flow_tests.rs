//! End-to-end state machine scenarios
//!
//! Exercises the full session flow: browsing, recipe walkthroughs, typed
//! chat with the scripted reply, voice mode, and bridge-delivered messages.

use crossbeam_channel::bounded;
use quickrecipe::bridge::{BridgeCommand, BridgeEvent};
use quickrecipe::catalog::{categories, recipes_for_category, Difficulty};
use quickrecipe::chat::{script, Role};
use quickrecipe::config::AppConfig;
use quickrecipe::ui::{AppState, ViewState};
use std::time::{Duration, Instant};

fn later() -> Instant {
    Instant::now() + Duration::from_secs(10)
}

#[test]
fn test_pizza_category_scenario() {
    let recipes = recipes_for_category("pizza");
    assert_eq!(recipes.len(), 10);
    assert_eq!(recipes[0].title, "Classic Margherita Pizza");
    assert_eq!(recipes[0].difficulty, Difficulty::Easy);
}

#[test]
fn test_unknown_category_scenario() {
    assert_eq!(recipes_for_category("nonexistent"), recipes_for_category("all"));
}

#[test]
fn test_browse_select_and_return_home() {
    let mut state = AppState::new();

    let pizza = categories().into_iter().find(|c| c.id == "pizza").unwrap();
    state.select_category(pizza.clone());
    assert_eq!(state.view_state, ViewState::Category);
    assert_eq!(
        state.selected_category.as_ref().map(|c| c.id.as_str()),
        Some("pizza")
    );

    let margherita = recipes_for_category(&pizza.id).remove(0);
    state.select_recipe(margherita.clone());
    assert_eq!(state.view_state, ViewState::Chat);

    // The walkthrough replaces the whole log
    let messages = state.messages.get_all();
    assert_eq!(messages.len(), 4);
    assert!(messages.iter().all(|m| m.role == Role::Bot));
    assert!(messages[0].content.contains("Classic Margherita Pizza"));

    // Entry 2: one bullet per ingredient, in order
    let ingredient_lines: Vec<&str> = messages[1]
        .content
        .lines()
        .filter(|line| line.starts_with("• "))
        .collect();
    assert_eq!(ingredient_lines.len(), margherita.ingredients.len());
    for (line, ingredient) in ingredient_lines.iter().zip(&margherita.ingredients) {
        assert_eq!(*line, format!("• {}", ingredient));
    }

    // Entry 3: instructions numbered 1..N, in order
    for (index, step) in margherita.instructions.iter().enumerate() {
        assert!(
            messages[2]
                .content
                .contains(&format!("{}. {}", index + 1, step)),
            "missing step {}",
            index + 1
        );
    }

    state.go_to_home();
    assert_eq!(state.view_state, ViewState::Home);
    assert!(state.selected_category.is_none());
    assert!(state.selected_recipe.is_none());
}

#[test]
fn test_typed_conversation_gets_scripted_reply() {
    let mut state = AppState::new();
    state.go_to_chat();

    state.input_text = "What goes well with basil?".to_string();
    state.send_message();

    let messages = state.messages.get_all();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].role, Role::User);
    assert_eq!(messages[1].content, "What goes well with basil?");

    state.poll_timers(later());
    let messages = state.messages.get_all();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2].role, Role::Bot);
    assert_eq!(messages[2].content, script::CANNED_REPLY);
}

#[test]
fn test_empty_and_whitespace_input_leaves_log_unchanged() {
    let mut state = AppState::new();

    state.input_text = String::new();
    state.send_message();
    assert_eq!(state.messages.len(), 1);

    state.input_text = "  \t  ".to_string();
    state.send_message();
    assert_eq!(state.messages.len(), 1);

    state.poll_timers(later());
    assert_eq!(state.messages.len(), 1, "no reply without a message");
}

#[test]
fn test_typed_messages_are_forwarded_to_bridge() {
    let (tx, rx) = bounded(16);
    let mut state = AppState::new();
    state.bridge_tx = Some(tx);

    state.input_text = "Is my dough overproofed?".to_string();
    state.send_message();

    match rx.try_recv() {
        Ok(BridgeCommand::Say(text)) => assert_eq!(text, "Is my dough overproofed?"),
        other => panic!("expected forwarded text, got {:?}", other),
    }
}

#[test]
fn test_voice_toggle_round_trip() {
    let mut state = AppState::new();
    assert!(!state.voice_mode);

    state.toggle_voice_mode();
    assert!(state.voice_mode);

    state.toggle_voice_mode();
    assert!(!state.voice_mode);

    // Exactly two status messages beyond the welcome
    let messages = state.messages.get_all();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].content, script::VOICE_ON_STATUS);
    assert_eq!(messages[2].content, script::VOICE_OFF_STATUS);
}

#[test]
fn test_voice_mode_greeting_seeds_the_widget() {
    let (tx, rx) = bounded(16);
    let mut state = AppState::new();
    state.bridge_tx = Some(tx);

    state.toggle_voice_mode();

    // Greeting waits for the widget container to materialize
    state.poll_timers(Instant::now());
    assert!(rx.try_recv().is_err());

    state.poll_timers(later());
    match rx.try_recv() {
        Ok(BridgeCommand::Say(text)) => assert_eq!(text, script::VOICE_GREETING),
        other => panic!("expected greeting, got {:?}", other),
    }
}

#[test]
fn test_voice_toggle_during_reply_window_cancels_reply() {
    let mut state = AppState::new();

    state.input_text = "hello".to_string();
    state.send_message();

    // Voice mode turns on before the reply deadline
    state.toggle_voice_mode();
    state.poll_timers(later());

    let messages = state.messages.get_all();
    assert!(
        messages.iter().all(|m| m.content != script::CANNED_REPLY),
        "reply scheduled before the toggle must not fire"
    );
}

#[test]
fn test_recipe_selection_drops_stale_reply() {
    let mut state = AppState::new();

    state.input_text = "hello".to_string();
    state.send_message();

    let recipe = recipes_for_category("desserts").remove(0);
    state.select_recipe(recipe);

    state.poll_timers(later());
    assert_eq!(state.messages.len(), 4, "walkthrough only, no stale reply");
}

#[test]
fn test_inbound_voice_messages_interleave_in_arrival_order() {
    let (event_tx, event_rx) = bounded(16);
    let mut state = AppState::new();
    state.bridge_rx = Some(event_rx);
    state.go_to_chat();

    state.input_text = "How spicy is the arrabbiata?".to_string();
    state.send_message();

    event_tx
        .send(BridgeEvent::Message("Quite spicy, two chilies.".to_string()))
        .unwrap();
    state.poll_events();

    let messages = state.messages.get_all();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2].role, Role::Bot);
    assert_eq!(messages[2].content, "Quite spicy, two chilies.");
}

#[test]
fn test_inbound_voice_messages_append_on_any_screen() {
    let (event_tx, event_rx) = bounded(16);
    let mut state = AppState::new();
    state.bridge_rx = Some(event_rx);

    // Still on the home screen
    event_tx
        .send(BridgeEvent::Message("Ready when you are.".to_string()))
        .unwrap();
    state.poll_events();
    assert_eq!(state.messages.len(), 2);

    // And while browsing a category
    let soups = categories().into_iter().find(|c| c.id == "soups").unwrap();
    state.select_category(soups);
    event_tx
        .send(BridgeEvent::Message("Soup is a good choice.".to_string()))
        .unwrap();
    state.poll_events();
    assert_eq!(state.messages.len(), 3);
}

#[test]
fn test_shorter_configured_delays_are_respected() {
    let config = AppConfig::default()
        .with_reply_delay_ms(20)
        .with_bridge(Default::default());
    let mut state = AppState::with_config(config);

    state.input_text = "quick one".to_string();
    state.send_message();

    state.poll_timers(Instant::now() + Duration::from_millis(25));
    let messages = state.messages.get_all();
    assert_eq!(messages.last().unwrap().content, script::CANNED_REPLY);
}
