use toc_session::{update, AppState, Msg};

#[test]
fn noop_returns_same_state_and_no_effects() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);
    assert_eq!(next, state);
    assert!(effects.is_empty());
}
