//! Cross-cell isolation on the composing view.

mod common;

use common::make_board;
use countercraft::view::{Button, Strategy};

#[test]
fn every_section_starts_at_zero() {
    let (_ctx, board) = make_board();
    assert!(board.readings().iter().all(|r| r.value == 0));
}

#[test]
fn mutating_one_section_leaves_the_others_alone() {
    for target in Strategy::ALL {
        let (_ctx, mut board) = make_board();
        board.press(target, Button::Plus).unwrap();
        board.press(target, Button::Plus).unwrap();
        board.press(target, Button::Minus).unwrap();

        for reading in board.readings() {
            if reading.strategy == target {
                assert_eq!(reading.value, 1, "{target}");
                assert_eq!(reading.renders, 3, "{target}");
            } else {
                assert_eq!(reading.value, 0, "{} changed by {target}", reading.strategy);
                assert_eq!(reading.renders, 0, "{} re-rendered by {target}", reading.strategy);
            }
        }
    }
}

#[test]
fn second_board_shares_only_the_shared_cells() {
    let (ctx, mut first) = make_board();
    let second = countercraft::board::Board::mount(&ctx, 0, 1);

    for strategy in Strategy::ALL {
        first.press(strategy, Button::Plus).unwrap();
    }

    assert_eq!(second.value(Strategy::Local), 0);
    assert_eq!(second.value(Strategy::Reducer), 0);
    assert_eq!(second.value(Strategy::GlobalStore), 1);
    assert_eq!(second.value(Strategy::Atom), 1);
    assert_eq!(second.value(Strategy::ExternalStore), 1);
}

#[test]
fn shared_cells_are_read_through_the_context() {
    let (ctx, mut board) = make_board();
    board.press(Strategy::ExternalStore, Button::Minus).unwrap();
    board.press(Strategy::Atom, Button::Plus).unwrap();

    assert_eq!(ctx.counter_store.count(), -1);
    assert_eq!(ctx.count_atom.read(), 1);
    assert_eq!(countercraft::store::select_counter(&ctx.global.get_state()), 0);
}

#[test]
fn rewriting_the_same_atom_value_redraws_nothing() {
    let (ctx, board) = make_board();
    let generation = board.render_generation();

    ctx.count_atom.write(0);
    ctx.count_atom.update(|value| *value);

    assert_eq!(board.render_generation(), generation);
    assert_eq!(board.reading(Strategy::Atom).renders, 0);
}

#[test]
fn unknown_reducer_tag_is_rejected_without_change() {
    let (_ctx, mut board) = make_board();
    let err = board.dispatch_tag(Strategy::Reducer, "reset").unwrap_err();
    assert_eq!(err.to_string(), "Unknown action 'reset'");
    assert_eq!(board.reading(Strategy::Reducer).renders, 0);
    assert!(board.dispatch_tag(Strategy::GlobalStore, "reset").is_ok());
}
