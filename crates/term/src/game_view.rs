//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{piece_color, spawn_shape, GameSnapshot, ShapeMatrix};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Side length of the next-piece preview, in board cells.
const PREVIEW_CELLS: u16 = 4;

/// Width reserved for the controls help on the left of the board.
const HELP_WIDTH: u16 = 18;

const CONTROLS: [(&str, &str); 6] = [
    ("← →", "Move"),
    ("↑", "Rotate"),
    ("↓", "Soft Drop"),
    ("Space", "Hard Drop"),
    ("P", "Pause"),
    ("Q", "Quit"),
];

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);

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

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Size of the bordered playfield in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH as u16) * self.cell_w + 2,
            (BOARD_HEIGHT as u16) * self.cell_h + 2,
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only reallocated
    /// when the viewport size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle::new(Rgb::new(80, 80, 90), PLAYFIELD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            bg,
        );
        fb.draw_box(start_x, start_y, frame_w, frame_h, border);

        // Locked board cells.
        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                match snap.locked_kind(x as usize, y as usize) {
                    Some(kind) => self.draw_board_cell(fb, start_x, start_y, x, y, kind),
                    None => self.draw_empty_cell(fb, start_x, start_y, x, y),
                }
            }
        }

        // Current piece.
        for (x, y) in snap.active.cells() {
            if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                self.draw_board_cell(fb, start_x, start_y, x as u16, y as u16, snap.active.kind);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);
        if start_x >= HELP_WIDTH + 2 {
            self.draw_controls(fb, start_x - HELP_WIDTH - 2, start_y);
        }

        // Overlays.
        if snap.paused() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, &["PAUSED"]);
        } else if snap.game_over() {
            self.draw_overlay_text(
                fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                &["GAME OVER", "", "Press SPACE to restart"],
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), PLAYFIELD_BG).dim();
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let style = CellStyle::new(piece_color(kind), PLAYFIELD_BG).bold();
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        let preview_w = PREVIEW_CELLS * self.cell_w + 2;
        if panel_x.saturating_add(preview_w) > viewport.width {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, v, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        self.draw_preview(fb, panel_x, y + 1, snap.next);
    }

    /// Next piece centered inside a bordered 4x4-cell box.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind) {
        let inner_w = PREVIEW_CELLS * self.cell_w;
        let inner_h = PREVIEW_CELLS * self.cell_h;
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        fb.draw_box(x, y, inner_w + 2, inner_h + 2, border);

        let shape: ShapeMatrix = spawn_shape(kind);
        let off_x = inner_w.saturating_sub(shape.width() as u16 * self.cell_w) / 2;
        let off_y = inner_h.saturating_sub(shape.height() as u16 * self.cell_h) / 2;
        let style = CellStyle::new(piece_color(kind), Rgb::new(0, 0, 0)).bold();
        for (dx, dy) in shape.filled_cells() {
            fb.fill_rect(
                x + 1 + off_x + dx as u16 * self.cell_w,
                y + 1 + off_y + dy as u16 * self.cell_h,
                self.cell_w,
                self.cell_h,
                '█',
                style,
            );
        }
    }

    fn draw_controls(&self, fb: &mut FrameBuffer, x: u16, y: u16) {
        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let text = CellStyle::new(Rgb::new(170, 170, 170), Rgb::new(0, 0, 0));
        fb.put_str(x, y, "CONTROLS", label);
        for (i, (key, action)) in CONTROLS.iter().enumerate() {
            let row = y + 2 + i as u16;
            fb.put_str(x, row, key, text);
            fb.put_str(x + 7, row, action, text);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        lines: &[&str],
    ) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let top = start_y.saturating_add(frame_h / 2).saturating_sub(lines.len() as u16 / 2);
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, top + i as u16, text, style);
        }
    }
}
