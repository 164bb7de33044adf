//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The logical world is 720 units wide; the view squeezes it into a fixed
//! number of columns and draws one terminal row per cake layer. When the tower
//! outgrows the frame the view scrolls so the top of the stack stays visible.

use crate::core::{GameSnapshot, SegmentSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, COMBO_CUE_MIN, LAYER_PALETTE_LEN};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Information shown next to the tower that the core does not own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudView<'a> {
    pub best: u32,
    /// Announcer line currently on screen.
    pub banner: Option<&'a str>,
}

/// Cake layer colours, cycled by layer index.
pub const CAKE_PALETTE: [Rgb; LAYER_PALETTE_LEN as usize] = [
    Rgb::hex(0xFFB5C5),
    Rgb::hex(0xFFD1DC),
    Rgb::hex(0xFFC4D6),
    Rgb::hex(0xE8B4CB),
    Rgb::hex(0xF4A7B9),
    Rgb::hex(0xFFAEC9),
];

pub(crate) const BACKGROUND: Rgb = Rgb::hex(0x2A1F27);
pub(crate) const ACCENT: Rgb = Rgb::hex(0xE75480);
pub(crate) const GOLD: Rgb = Rgb::hex(0xFFD700);
pub(crate) const TEXT: Rgb = Rgb::hex(0xF5E6EA);

const PLATE: Rgb = Rgb::hex(0xD4C4B0);
const LAYER_CHAR: char = '█';

/// A lightweight terminal renderer for the tower.
pub struct GameView {
    /// Columns used for the full world width.
    columns: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 720 / 48 = 15 world units per column, which keeps the perfect window
        // (±15) about one column wide.
        Self { columns: 48 }
    }
}

/// Placement of the play frame inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    /// Inner width in columns.
    w: u16,
    /// Inner height in rows.
    h: u16,
}

impl Frame {
    fn inner_x(&self) -> i32 {
        self.x as i32 + 1
    }

    fn inner_y(&self) -> u16 {
        self.y + 1
    }

    /// Row of the plate (last inner row).
    fn plate_row(&self) -> u16 {
        self.inner_y() + self.h - 1
    }

    /// Row the swinging piece is drawn on.
    fn swing_row(&self) -> u16 {
        self.inner_y()
    }

    /// How many stack rows fit between the swing row and the plate, keeping a
    /// one-row gap under the swinging piece.
    fn stack_rows(&self) -> u16 {
        self.h.saturating_sub(3)
    }
}

impl GameView {
    pub fn new(columns: u16) -> Self {
        Self {
            columns: columns.max(8),
        }
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_hud(snap, None, viewport, fb);
    }

    pub fn render_into_with_hud(
        &self,
        snap: &GameSnapshot,
        hud: Option<&HudView<'_>>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(TEXT, BACKGROUND).into_cell(' '));

        let Some(frame) = self.frame(viewport) else {
            fb.put_str(0, 0, "terminal too small", CellStyle::new(TEXT, BACKGROUND));
            return;
        };

        let border = CellStyle::new(ACCENT, BACKGROUND);
        draw_border(fb, frame.x, frame.y, frame.w + 2, frame.h + 2, border);

        // Plate.
        let plate = CellStyle::new(PLATE, BACKGROUND);
        fb.fill_span(
            frame.inner_x(),
            frame.inner_x() + frame.w as i32,
            frame.plate_row(),
            '▀',
            plate,
        );

        // Stack, scrolled so the top layer is always visible.
        let rows = frame.stack_rows() as usize;
        let visible = snap.segments.len().min(rows);
        let first = snap.segments.len() - visible;
        for (i, seg) in snap.segments[first..].iter().enumerate() {
            let row = frame.plate_row() - 1 - i as u16;
            let is_top = first + i + 1 == snap.segments.len();
            self.draw_segment(fb, &frame, snap, seg, row, is_top);
        }

        // Active piece: swinging at the top, or just above the stack while
        // it falls.
        if let Some(active) = snap.active {
            let row = if snap.dropping {
                frame.plate_row() - 1 - visible as u16
            } else {
                frame.swing_row()
            };
            let style = CellStyle::new(layer_color(active.layer), BACKGROUND).bold();
            let (x0, x1) = self.span(&frame, snap.world_width, active.center_x, active.width);
            fb.fill_span(x0, x1, row, LAYER_CHAR, style);
        }

        self.draw_side_panel(fb, snap, hud, viewport, &frame);

        if let Some(text) = hud.and_then(|h| h.banner) {
            let style = CellStyle::new(GOLD, BACKGROUND).bold();
            let center = frame.x + (frame.w + 2) / 2;
            fb.put_str_centered(center, frame.swing_row() + 1, text, style);
        }

        match snap.phase {
            Phase::Ready => self.draw_overlay_text(fb, &frame, "PRESS SPACE"),
            Phase::GameOver => self.draw_overlay_text(fb, &frame, "GAME OVER"),
            Phase::Swinging | Phase::Resolving => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_with_hud(
        &self,
        snap: &GameSnapshot,
        hud: Option<&HudView<'_>>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_hud(snap, hud, viewport, &mut fb);
        fb
    }

    fn frame(&self, viewport: Viewport) -> Option<Frame> {
        if viewport.width < 12 || viewport.height < 8 {
            return None;
        }
        let w = self.columns.min(viewport.width - 2);
        let h = viewport.height - 2;
        Some(Frame { x: 0, y: 0, w, h })
    }

    /// Terminal columns `[x0, x1)` covered by a piece, never empty.
    fn span(&self, frame: &Frame, world_width: f32, center_x: f32, width: f32) -> (i32, i32) {
        let scale = frame.w as f32 / world_width;
        let left = (center_x - width / 2.0) * scale;
        let right = (center_x + width / 2.0) * scale;
        let x0 = frame.inner_x() + left.round() as i32;
        let x1 = (frame.inner_x() + right.round() as i32).max(x0 + 1);
        (x0, x1)
    }

    fn draw_segment(
        &self,
        fb: &mut FrameBuffer,
        frame: &Frame,
        snap: &GameSnapshot,
        seg: &SegmentSnapshot,
        row: u16,
        is_top: bool,
    ) {
        let mut style = CellStyle::new(layer_color(seg.layer), BACKGROUND);
        if is_top {
            style = style.bold();
        }
        let (x0, x1) = self.span(frame, snap.world_width, seg.center_x, seg.width);
        // Keep layers inside the frame even if a run drifted against a wall.
        let lo = x0.max(frame.inner_x());
        let hi = x1.min(frame.inner_x() + frame.w as i32);
        fb.fill_span(lo, hi, row, LAYER_CHAR, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: Option<&HudView<'_>>,
        viewport: Viewport,
        frame: &Frame,
    ) {
        let panel_x = frame.x + frame.w + 2 + 2;
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::new(ACCENT, BACKGROUND).bold();
        let value = CellStyle::new(TEXT, BACKGROUND);

        let mut y = frame.y + 1;
        fb.put_str(panel_x, y, "LAYERS", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.score, value);
        y += 2;

        fb.put_str(panel_x, y, "COMBO", label);
        y += 1;
        let n = fb.put_u32(panel_x, y, snap.combo, value);
        if snap.combo >= COMBO_CUE_MIN {
            let hot = CellStyle::new(GOLD, BACKGROUND).bold();
            fb.put_str(panel_x + n + 1, y, "COMBO!", hot);
        }
        y += 2;

        fb.put_str(panel_x, y, "SPEED", label);
        y += 1;
        // One decimal without allocating: whole part, dot, tenths.
        let tenths = (snap.speed * 10.0).round().max(0.0) as u32;
        let n = fb.put_u32(panel_x, y, tenths / 10, value);
        fb.put_char(panel_x + n, y, '.', value);
        fb.put_u32(panel_x + n + 1, y, tenths % 10, value);
        y += 2;

        if let Some(hud) = hud {
            fb.put_str(panel_x, y, "BEST", label);
            y += 1;
            fb.put_u32(panel_x, y, hud.best.max(snap.score), value);
            y += 2;
        }

        let dim = CellStyle::new(TEXT, BACKGROUND).dim();
        if y + 2 < viewport.height {
            fb.put_str(panel_x, y, "SPACE drop", dim);
            fb.put_str(panel_x, y + 1, "R restart", dim);
            fb.put_str(panel_x, y + 2, "T title  Q quit", dim);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: &Frame, text: &str) {
        let mid_y = frame.y + (frame.h + 2) / 2;
        let center = frame.x + (frame.w + 2) / 2;
        let style = CellStyle::new(Rgb::new(255, 255, 255), ACCENT).bold();
        fb.put_str_centered(center, mid_y, text, style);
    }
}

pub(crate) fn draw_border(
    fb: &mut FrameBuffer,
    x: u16,
    y: u16,
    w: u16,
    h: u16,
    style: CellStyle,
) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '╭', style);
    fb.put_char(x + w - 1, y, '╮', style);
    fb.put_char(x, y + h - 1, '╰', style);
    fb.put_char(x + w - 1, y + h - 1, '╯', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Palette colour for a layer index.
pub fn layer_color(layer: u32) -> Rgb {
    CAKE_PALETTE[(layer % LAYER_PALETTE_LEN) as usize]
}
