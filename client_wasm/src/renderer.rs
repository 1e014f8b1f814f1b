//! Canvas 2D renderer
//!
//! Paints one full frame from a [`Frame`] snapshot: background, dashed
//! center line, both paddles, and the ball. Idempotent; the loop calls it
//! every tick and once after a reset.

use game_core::{Config, Frame, Side};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

const BACKGROUND: &str = "#000";
const CENTER_LINE: &str = "#333";
const FOREGROUND: &str = "#fff";
const DASH_ON: f64 = 5.0;
const DASH_OFF: f64 = 15.0;

pub struct Renderer {
    ctx: CanvasRenderingContext2d,
}

impl Renderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    pub fn draw(&self, frame: &Frame, config: &Config) -> Result<(), JsValue> {
        let width = config.field_width as f64;
        let height = config.field_height as f64;

        self.ctx.set_fill_style_str(BACKGROUND);
        self.ctx.fill_rect(0.0, 0.0, width, height);

        self.draw_center_line(width, height)?;

        self.ctx.set_fill_style_str(FOREGROUND);
        for (side, y) in [(Side::Left, frame.player_y), (Side::Right, frame.opponent_y)] {
            self.ctx.fill_rect(
                config.paddle_x(side) as f64,
                y as f64,
                config.paddle_width as f64,
                config.paddle_height as f64,
            );
        }

        self.ctx.begin_path();
        self.ctx.arc(
            frame.ball_pos.x as f64,
            frame.ball_pos.y as f64,
            config.ball_radius as f64,
            0.0,
            std::f64::consts::TAU,
        )?;
        self.ctx.set_fill_style_str(FOREGROUND);
        self.ctx.fill();
        self.ctx.close_path();

        Ok(())
    }

    fn draw_center_line(&self, width: f64, height: f64) -> Result<(), JsValue> {
        let dash = js_sys::Array::of2(&DASH_ON.into(), &DASH_OFF.into());
        self.ctx.set_line_dash(&dash)?;
        self.ctx.begin_path();
        self.ctx.move_to(width / 2.0, 0.0);
        self.ctx.line_to(width / 2.0, height);
        self.ctx.set_stroke_style_str(CENTER_LINE);
        self.ctx.stroke();
        self.ctx.set_line_dash(&js_sys::Array::new())?;
        Ok(())
    }
}
