use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlElement, MouseEvent};

pub mod animation;
pub mod config;
pub mod math;
pub mod particles;
pub mod render;
pub mod scene;

use config::SceneConfig;
use render::{CanvasSurface, Stage};
use render::stage;
use scene::{Animation, GridScene, OrbitScene, TreeScene};

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

/// High-resolution time in the same base as animation frame timestamps
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

fn attach(canvas: &HtmlCanvasElement) -> Result<CanvasSurface, JsValue> {
    CanvasSurface::attach(canvas).map_err(|e| JsValue::from_str(&e))
}

fn shared<A: Animation>(scene: A, surface: CanvasSurface) -> Rc<RefCell<Stage<A>>> {
    Rc::new(RefCell::new(Stage::new(scene, surface)))
}

fn render_shared<A: Animation>(stage: &Rc<RefCell<Stage<A>>>, timestamp: f64) {
    if let Ok(mut stage) = stage.try_borrow_mut() {
        stage.render(timestamp);
    }
}

/// Wind-swept tree under a turning night sky
#[wasm_bindgen]
pub struct SwayingTree {
    stage: Rc<RefCell<Stage<TreeScene>>>,
}

#[wasm_bindgen]
impl SwayingTree {
    /// Attach to a canvas with the stock scene
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<SwayingTree, JsValue> {
        Self::with_config(canvas, "")
    }

    /// Attach to a canvas with a YAML scene configuration
    #[wasm_bindgen]
    pub fn with_config(canvas: HtmlCanvasElement, yaml: &str) -> Result<SwayingTree, JsValue> {
        let config = SceneConfig::from_yaml(yaml).map_err(|e| JsValue::from_str(&e))?;
        let surface = attach(&canvas)?;
        let scene = TreeScene::new(&config, surface.width(), surface.height()).starting_at(now_ms());

        log(&format!(
            "swaying-tree: {}x{} canvas, depth {}, {} stars",
            surface.width(),
            surface.height(),
            config.tree.depth,
            config.sky.star_count,
        ));

        Ok(Self {
            stage: shared(scene, surface),
        })
    }

    /// Draw a single frame for `timestamp` (ms)
    #[wasm_bindgen]
    pub fn render(&self, timestamp: f64) {
        render_shared(&self.stage, timestamp);
    }

    /// Redraw on every animation frame from now on
    #[wasm_bindgen]
    pub fn start(&self) -> Result<(), JsValue> {
        stage::run(self.stage.clone())
    }
}

/// Planets circling a sun
#[wasm_bindgen]
pub struct OrbitSystem {
    stage: Rc<RefCell<Stage<OrbitScene>>>,
}

#[wasm_bindgen]
impl OrbitSystem {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<OrbitSystem, JsValue> {
        let surface = attach(&canvas)?;
        let scene = OrbitScene::new(surface.width(), surface.height());
        log(&format!("orbits: {} bodies", scene.bodies().len()));
        Ok(Self {
            stage: shared(scene, surface),
        })
    }

    #[wasm_bindgen]
    pub fn render(&self, timestamp: f64) {
        render_shared(&self.stage, timestamp);
    }

    #[wasm_bindgen]
    pub fn start(&self) -> Result<(), JsValue> {
        stage::run(self.stage.clone())
    }
}

/// Grid that gains one transform per click
#[wasm_bindgen]
pub struct TransformGrid {
    stage: Rc<RefCell<Stage<GridScene>>>,
}

#[wasm_bindgen]
impl TransformGrid {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<TransformGrid, JsValue> {
        let surface = attach(&canvas)?;
        let scene = GridScene::new(surface.width(), surface.height());
        Ok(Self {
            stage: shared(scene, surface),
        })
    }

    #[wasm_bindgen]
    pub fn render(&self, timestamp: f64) {
        render_shared(&self.stage, timestamp);
    }

    #[wasm_bindgen]
    pub fn start(&self) -> Result<(), JsValue> {
        stage::run(self.stage.clone())
    }

    /// Step to the next level now; returns the new level
    #[wasm_bindgen]
    pub fn advance(&self) -> usize {
        advance_grid(&self.stage)
    }

    #[wasm_bindgen]
    pub fn level(&self) -> usize {
        self.stage
            .try_borrow()
            .map(|stage| stage.scene.level())
            .unwrap_or(0)
    }

    /// Advance on every click on `canvas`. When `code_lines_id` names an
    /// element, its first `level` children are shown and the rest hidden.
    #[wasm_bindgen]
    pub fn listen_for_clicks(
        &self,
        canvas: &HtmlCanvasElement,
        code_lines_id: Option<String>,
    ) -> Result<(), JsValue> {
        if let Some(id) = &code_lines_id {
            show_code_lines(id, self.level())?;
        }

        let stage = self.stage.clone();
        let on_click = Closure::wrap(Box::new(move |_event: MouseEvent| {
            let level = advance_grid(&stage);
            if let Some(id) = &code_lines_id {
                if let Err(e) = show_code_lines(id, level) {
                    web_sys::console::error_1(&e);
                }
            }
        }) as Box<dyn FnMut(MouseEvent)>);

        canvas.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        // The listener lives as long as the page
        on_click.forget();
        Ok(())
    }
}

fn advance_grid(stage: &Rc<RefCell<Stage<GridScene>>>) -> usize {
    match stage.try_borrow_mut() {
        Ok(mut stage) => {
            stage.scene.advance(now_ms());
            stage.scene.level()
        }
        Err(_) => 0,
    }
}

fn show_code_lines(id: &str, level: usize) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;
    let Some(list) = document.get_element_by_id(id) else {
        return Ok(());
    };

    let lines = list.children();
    for i in 0..lines.length() {
        let Some(line) = lines.item(i) else {
            continue;
        };
        let visibility = if (i as usize) < level { "visible" } else { "hidden" };
        line.dyn_into::<HtmlElement>()?
            .style()
            .set_property("visibility", visibility)?;
    }
    Ok(())
}
