//! Browser shell for the Pong core
//!
//! Owns the canvas 2D renderer, the mouse input adapter, the score display
//! sink, and the interval ticker. All game rules live in `game_core`; this
//! crate only wires DOM callbacks to the session and paints frames.

#![cfg(target_arch = "wasm32")]

mod input;
mod renderer;
mod score;
mod ticker;

use game_core::{GameSession, Mode, Params};
use renderer::Renderer;
use score::ScoreDisplay;
use std::cell::RefCell;
use std::rc::Rc;
use ticker::Ticker;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, MouseEvent};

const START_LABEL: &str = "Start Game";
const RESET_LABEL: &str = "Reset Game";

/// State shared between the tick and mousemove closures
struct Inner {
    session: GameSession,
    renderer: Renderer,
    score_display: ScoreDisplay,
}

impl Inner {
    /// One frame: advance the simulation, push score changes to the
    /// display sink, repaint.
    fn run_tick(&mut self) {
        self.session.tick();
        if self.session.events().score_changed() {
            self.score_display.set(self.session.score());
        }
        self.redraw();
    }

    fn redraw(&self) {
        if let Err(e) = self
            .renderer
            .draw(&self.session.frame(), self.session.config())
        {
            web_sys::console::error_1(&e);
        }
    }
}

/// Main client, exported to JavaScript.
///
/// JS constructs it with the canvas, the start button, and the two score
/// elements, then forwards button clicks to [`App::toggle`]. Everything
/// else (mouse tracking, the tick interval) is wired here.
#[wasm_bindgen]
pub struct App {
    inner: Rc<RefCell<Inner>>,
    ticker: Ticker,
    tick_cb: Closure<dyn FnMut()>,
    _pointer_cb: Closure<dyn FnMut(MouseEvent)>,
}

#[wasm_bindgen]
impl App {
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        player_score: Element,
        opponent_score: Element,
    ) -> Result<App, JsValue> {
        console_error_panic_hook::set_once();

        canvas.set_width(Params::FIELD_WIDTH as u32);
        canvas.set_height(Params::FIELD_HEIGHT as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let seed = js_sys::Date::now() as u64;
        let inner = Rc::new(RefCell::new(Inner {
            session: GameSession::new(seed),
            renderer: Renderer::new(ctx),
            score_display: ScoreDisplay::new(player_score, opponent_score),
        }));

        // Mouse tracking on the whole document; the canvas rect maps the
        // pointer into field coordinates. Active even between games.
        let pointer_cb = {
            let inner = Rc::clone(&inner);
            let canvas = canvas.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                let rect = canvas.get_bounding_client_rect();
                let y = input::pointer_field_y(event.client_y() as f64, rect.top());
                inner.borrow_mut().session.pointer_moved(y);
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?
            .add_event_listener_with_callback("mousemove", pointer_cb.as_ref().unchecked_ref())?;

        let tick_cb = {
            let inner = Rc::clone(&inner);
            Closure::wrap(Box::new(move || {
                inner.borrow_mut().run_tick();
            }) as Box<dyn FnMut()>)
        };

        // Initial paint before the first start
        inner.borrow().redraw();

        Ok(App {
            inner,
            ticker: Ticker::new(Params::TICK_MS),
            tick_cb,
            _pointer_cb: pointer_cb,
        })
    }

    /// The single start/reset trigger; returns the label the button should
    /// now show.
    pub fn toggle(&mut self) -> Result<String, JsValue> {
        let mode = {
            let mut inner = self.inner.borrow_mut();
            let mode = inner.session.toggle();
            inner.score_display.set(inner.session.score());
            if mode == Mode::Inactive {
                // One redraw so the reset positions are visible while the
                // ticker is stopped
                inner.redraw();
            }
            mode
        };

        match mode {
            Mode::Active => {
                self.ticker.start(&self.tick_cb)?;
                Ok(RESET_LABEL.to_string())
            }
            Mode::Inactive => {
                self.ticker.stop();
                Ok(START_LABEL.to_string())
            }
        }
    }

    /// Label for the button's initial render
    pub fn button_label(&self) -> String {
        match self.inner.borrow().session.mode() {
            Mode::Active => RESET_LABEL.to_string(),
            Mode::Inactive => START_LABEL.to_string(),
        }
    }
}
