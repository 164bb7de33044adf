//! Title and result screens.
//!
//! Like [`GameView`](crate::GameView) these are pure: they only write into a
//! framebuffer.

use crate::core::RunResult;
use crate::fb::{CellStyle, FrameBuffer};
use crate::game_view::{draw_border, layer_color, Viewport, ACCENT, BACKGROUND, GOLD, TEXT};
use crate::types::Rating;

const TITLE: &str = "C A K E   T O W E R";
const SUBTITLE: &str = "challenge";

/// `h * num / den` without overflowing `u16`.
fn frac(h: u16, num: u16, den: u16) -> u16 {
    (h as u32 * num as u32 / den as u32) as u16
}

pub fn render_title_into(best: u32, viewport: Viewport, fb: &mut FrameBuffer) {
    fb.resize(viewport.width, viewport.height);
    fb.clear(CellStyle::new(TEXT, BACKGROUND).into_cell(' '));
    if viewport.width < 4 || viewport.height < 4 {
        return;
    }
    draw_border(
        fb,
        0,
        0,
        viewport.width,
        viewport.height,
        CellStyle::new(ACCENT, BACKGROUND),
    );

    let cx = viewport.width / 2;
    let h = viewport.height;

    // A small decorative tower.
    for (i, w) in [6u16, 10, 14].iter().enumerate() {
        let y = (frac(h, 1, 5) + i as u16).min(h - 2);
        let style = CellStyle::new(layer_color(i as u32), BACKGROUND);
        fb.fill_span(
            cx as i32 - *w as i32 / 2,
            cx as i32 + *w as i32 / 2,
            y,
            '█',
            style,
        );
    }

    let title = CellStyle::new(ACCENT, BACKGROUND).bold();
    let text = CellStyle::new(TEXT, BACKGROUND);
    fb.put_str_centered(cx, frac(h, 2, 5), TITLE, title);
    fb.put_str_centered(cx, frac(h, 2, 5) + 1, SUBTITLE, text);

    let best_label = "BEST ";
    let y = h / 2 + 1;
    let x = cx.saturating_sub(4);
    fb.put_str(x, y, best_label, CellStyle::new(GOLD, BACKGROUND).bold());
    fb.put_u32(x + best_label.len() as u16, y, best, text);

    fb.put_str_centered(cx, frac(h, 7, 10), "press SPACE to start", title);
    let dim = text.dim();
    fb.put_str_centered(cx, frac(h, 17, 20), "tap to drop the cake", dim);
    fb.put_str_centered(cx, (frac(h, 17, 20) + 1).min(h - 2), "stack it perfectly for a high score", dim);
}

pub fn render_title(best: u32, viewport: Viewport) -> FrameBuffer {
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    render_title_into(best, viewport, &mut fb);
    fb
}

pub fn render_result_into(
    result: &RunResult,
    banner: Option<&str>,
    viewport: Viewport,
    fb: &mut FrameBuffer,
) {
    fb.resize(viewport.width, viewport.height);
    fb.clear(CellStyle::new(TEXT, BACKGROUND).into_cell(' '));
    if viewport.width < 4 || viewport.height < 4 {
        return;
    }
    draw_border(
        fb,
        0,
        0,
        viewport.width,
        viewport.height,
        CellStyle::new(ACCENT, BACKGROUND),
    );

    let cx = viewport.width / 2;
    let h = viewport.height;
    let heading = CellStyle::new(ACCENT, BACKGROUND).bold();
    let gold = CellStyle::new(GOLD, BACKGROUND).bold();
    let text = CellStyle::new(TEXT, BACKGROUND);

    if result.is_new_record {
        fb.put_str_centered(cx, frac(h, 1, 5), "* NEW RECORD! *", gold);
    } else {
        fb.put_str_centered(cx, frac(h, 1, 5), "GAME OVER", heading);
    }

    let y = frac(h, 2, 5);
    let x = cx.saturating_sub(5);
    let n = fb.put_u32(x, y, result.score, heading);
    fb.put_str(x + n + 1, y, "layers", text);

    let label = "best ";
    fb.put_str(x, y + 2, label, text);
    fb.put_u32(x + label.len() as u16, y + 2, result.best, gold);

    fb.put_str_centered(cx, y + 4, Rating::from_score(result.score).title(), heading);

    if let Some(line) = banner {
        fb.put_str_centered(cx, y + 6, line, gold);
    }

    let dim = text.dim();
    fb.put_str_centered(cx, frac(h, 4, 5), "SPACE / R  play again", text);
    fb.put_str_centered(cx, (frac(h, 4, 5) + 1).min(h - 2), "T title   Q quit", dim);
}

pub fn render_result(result: &RunResult, banner: Option<&str>, viewport: Viewport) -> FrameBuffer {
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    render_result_into(result, banner, viewport, &mut fb);
    fb
}
