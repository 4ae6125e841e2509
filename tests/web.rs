//! Browser tests: `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use swaying_tree::{OrbitSystem, SwayingTree, TransformGrid};

wasm_bindgen_test_configure!(run_in_browser);

fn canvas(width: u32, height: u32) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_width(width);
    canvas.set_height(height);
    canvas
}

fn pixel(canvas: &HtmlCanvasElement, x: f64, y: f64) -> Vec<u8> {
    let ctx = canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into::<CanvasRenderingContext2d>()
        .unwrap();
    ctx.get_image_data(x, y, 1.0, 1.0).unwrap().data().0
}

#[wasm_bindgen_test]
fn tree_paints_trunk_and_sky() {
    let c = canvas(200, 200);
    let tree = SwayingTree::new(c.clone()).unwrap();
    tree.render(0.0);

    assert_eq!(pixel(&c, 100.0, 195.0), vec![255, 255, 255, 255]);
    let sky = pixel(&c, 0.0, 0.0);
    assert_eq!(sky[3], 255);
    assert!(sky[2] > sky[0]);
}

#[wasm_bindgen_test]
fn tree_rejects_bad_config() {
    let c = canvas(100, 100);
    assert!(SwayingTree::with_config(c, "tree: [not, a, map]").is_err());
}

#[wasm_bindgen_test]
fn orbits_paint_the_sun() {
    let c = canvas(400, 400);
    let orbits = OrbitSystem::new(c.clone()).unwrap();
    orbits.render(1000.0);
    assert_eq!(pixel(&c, 200.0, 200.0), vec![255, 255, 0, 255]);
}

#[wasm_bindgen_test]
fn grid_levels_cycle() {
    let c = canvas(300, 300);
    let grid = TransformGrid::new(c).unwrap();
    assert_eq!(grid.level(), 0);
    for expected in 1..=6 {
        assert_eq!(grid.advance(), expected);
    }
    assert_eq!(grid.advance(), 0);
    grid.render(0.0);
}
