use shadows_adventure::input::*;

#[test]
fn press_is_idempotent() {
    let mut input = InputState::new();
    input.press(Direction::Left);
    input.press(Direction::Left);
    assert_eq!(input.held(), &[Direction::Left]);
}

#[test]
fn release_keeps_order_of_the_rest() {
    let mut input: InputState = [Direction::Up, Direction::Left, Direction::Right]
        .into_iter()
        .collect();
    input.release(Direction::Left);
    assert_eq!(input.held(), &[Direction::Up, Direction::Right]);
}

#[test]
fn releasing_an_unheld_key_is_ignored() {
    let mut input: InputState = [Direction::Down].into_iter().collect();
    input.release(Direction::Up);
    assert!(input.is_held(Direction::Down));
    assert_eq!(input.held().len(), 1);
}

#[test]
fn clear_drops_everything() {
    let mut input: InputState = [Direction::Down, Direction::Right].into_iter().collect();
    input.clear();
    assert!(input.held().is_empty());
    assert_eq!(input, InputState::default());
}
