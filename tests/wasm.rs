#![cfg(target_arch = "wasm32")]

use checkers::api::Game;
use checkers::wasm_ready;
use js_sys::{Array, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::wasm_bindgen_test;

#[wasm_bindgen_test]
fn module_reports_ready() {
    assert!(wasm_ready());
}

#[wasm_bindgen_test]
fn new_game_reports_opening_state() {
    let game = Game::new();
    let state = game.state().unwrap();

    assert_eq!(get_number(&state, "turn"), 1.0);
    assert_eq!(get_number(&state, "black_count"), 20.0);
    assert_eq!(get_number(&state, "white_count"), 20.0);
    assert!(!get_bool(&state, "is_over"));
    assert_eq!(Array::from(&get(&state, "board")).length(), 100);
    assert_eq!(Array::from(&get(&state, "captured")).length(), 0);
}

#[wasm_bindgen_test]
fn opening_black_man_has_two_slides() {
    let game = Game::new();
    let moves = game.legal_moves(1, 6).unwrap();

    assert!(Array::is_array(&moves));
    assert_eq!(Array::from(&moves).length(), 2);
}

#[wasm_bindgen_test]
fn playing_the_first_move_flips_the_turn() {
    let mut game = Game::new();
    let state = game.play(1, 6, 0).unwrap();

    assert_eq!(get_number(&state, "turn"), 2.0);
    assert!(!get_bool(&state, "is_over"));
}

#[wasm_bindgen_test]
fn selecting_an_empty_square_errors() {
    let game = Game::new();
    let err = game.legal_moves(0, 5).unwrap_err();

    assert_eq!(
        err.as_string().unwrap(),
        "no piece at the selected square"
    );
}

#[wasm_bindgen_test]
fn result_has_no_winner_while_running() {
    let game = Game::new();
    let result = game.result().unwrap();

    assert_eq!(get_number(&result, "winner"), 0.0);
}

fn get(value: &JsValue, key: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(key)).unwrap()
}

fn get_number(value: &JsValue, key: &str) -> f64 {
    get(value, key).as_f64().unwrap()
}

fn get_bool(value: &JsValue, key: &str) -> bool {
    get(value, key).as_bool().unwrap()
}
