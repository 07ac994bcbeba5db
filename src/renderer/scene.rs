//! Scene composition
//!
//! Turns a `World` into draw calls: background, pillars, penguin, HUD.

use super::{RenderSink, palette};
use crate::consts::{PENGUIN_HEIGHT, PENGUIN_WIDTH, PILLAR_WIDTH};
use crate::sim::{GamePhase, Pillar, World};

const BORDER: i32 = 2;

fn draw_pillar(sink: &mut impl RenderSink, pillar: &Pillar) {
    let x = pillar.column();
    for (y, h) in [
        (0, pillar.top_height),
        (pillar.bottom_y, pillar.bottom_height),
    ] {
        sink.fill_rect(x, y, PILLAR_WIDTH, h, palette::ICE_BLUE);
        sink.fill_rect(x, y, BORDER, h, palette::WHITE);
        sink.fill_rect(x + PILLAR_WIDTH - BORDER, y, BORDER, h, palette::WHITE);
    }
}

fn draw_penguin(sink: &mut impl RenderSink, x: i32, y: i32) {
    // Body, belly, then a beak tucked inside the right edge
    sink.fill_rect(x, y, PENGUIN_WIDTH, PENGUIN_HEIGHT, palette::BLACK);
    sink.fill_rect(
        x + BORDER,
        y + BORDER,
        PENGUIN_WIDTH - 2 * BORDER,
        PENGUIN_HEIGHT - 2 * BORDER,
        palette::WHITE,
    );
    sink.fill_rect(
        x + PENGUIN_WIDTH - 3,
        y + PENGUIN_HEIGHT / 2 - 1,
        3,
        2,
        palette::YELLOW,
    );
}

/// Draw one complete frame
pub fn draw_scene(sink: &mut impl RenderSink, world: &World) {
    sink.clear(palette::DARK_BLUE);

    for pillar in world
        .pillars
        .active()
        .filter(|p| p.top_height > 0 && p.bottom_height > 0)
    {
        draw_pillar(sink, pillar);
    }

    let penguin = world.penguin.rect();
    draw_penguin(sink, penguin.x, penguin.y);

    let score = format!("Score: {}", world.state.score());
    sink.draw_text(5, 5, &score, palette::WHITE);

    match world.phase() {
        GamePhase::GameOver => {
            sink.draw_text(30, 100, "GAME OVER", palette::RED);
            sink.draw_text(20, 120, "BTN to restart", palette::WHITE);
        }
        GamePhase::Start => {
            sink.draw_text(20, 100, "DIVING PENGUIN", palette::WHITE);
            sink.draw_text(10, 120, "BTN to start", palette::WHITE);
        }
        GamePhase::Playing | GamePhase::Restart => {}
    }
}
