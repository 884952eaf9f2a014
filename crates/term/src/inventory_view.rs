//! InventoryView: maps an `InventorySnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: title, the queue as a row of tiles (front on the left), the
//! reserve stack as a column of tiles (top first), a status line, and the key help.

use crate::core::InventorySnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::text::EMPTY_MARKER;
use crate::types::{MenuAction, Piece, PieceKind, QUEUE_CAPACITY, STACK_CAPACITY};

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

/// Message shown under the containers after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine<'a> {
    pub text: &'a str,
    pub error: bool,
}

impl<'a> StatusLine<'a> {
    pub fn info(text: &'a str) -> Self {
        Self { text, error: false }
    }

    pub fn error(text: &'a str) -> Self {
        Self { text, error: true }
    }
}

pub const TITLE_ROW: u16 = 0;
pub const QUEUE_LABEL_ROW: u16 = 2;
pub const QUEUE_ROW: u16 = 3;
pub const FRONT_MARKER_ROW: u16 = 4;
pub const STACK_LABEL_ROW: u16 = 6;
pub const STACK_FIRST_ROW: u16 = 7;
pub const STATUS_ROW: u16 = STACK_FIRST_ROW + STACK_CAPACITY as u16 + 1;
pub const NEXT_ID_ROW: u16 = STATUS_ROW + 1;
pub const HELP_FIRST_ROW: u16 = NEXT_ID_ROW + 2;

/// Widest tile `InventoryView::new` accepts.
pub const MAX_TILE_W: u16 = 32;

#[derive(Debug, Clone, Copy)]
pub struct InventoryView {
    margin_x: u16,
    tile_w: u16,
}

impl Default for InventoryView {
    fn default() -> Self {
        Self {
            margin_x: 2,
            tile_w: 7,
        }
    }
}

impl InventoryView {
    pub fn new(margin_x: u16, tile_w: u16) -> Self {
        // Kind letter, a gap and one id digit at minimum.
        Self {
            margin_x,
            tile_w: tile_w.clamp(4, MAX_TILE_W),
        }
    }

    /// Column where queue tile `index` starts.
    pub fn queue_tile_x(&self, index: usize) -> u16 {
        self.margin_x
            .saturating_add((index as u16).saturating_mul(self.tile_w + 1))
    }

    pub fn margin_x(&self) -> u16 {
        self.margin_x
    }

    pub fn tile_w(&self) -> u16 {
        self.tile_w
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &InventorySnapshot,
        status: Option<StatusLine<'_>>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let label = CellStyle::plain(Rgb::new(230, 230, 230)).bold();
        let muted = CellStyle::plain(Rgb::new(150, 150, 160));

        fb.put_str(self.margin_x, TITLE_ROW, "TETRIS STACK", label);

        // Queue.
        let x = fb.put_str(self.margin_x, QUEUE_LABEL_ROW, "QUEUE ", label);
        self.put_fill(fb, x, QUEUE_LABEL_ROW, snap.queue.len(), QUEUE_CAPACITY, muted);
        if snap.queue.is_empty() {
            fb.put_str(self.margin_x, QUEUE_ROW, EMPTY_MARKER, muted.dim());
        } else {
            for (i, piece) in snap.queue.iter().enumerate() {
                self.draw_tile(fb, self.queue_tile_x(i), QUEUE_ROW, piece);
            }
            fb.put_str(self.margin_x, FRONT_MARKER_ROW, "^ front", muted);
        }

        // Stack, top first; unused slots are drawn as dots so capacity stays visible.
        let x = fb.put_str(self.margin_x, STACK_LABEL_ROW, "RESERVE ", label);
        self.put_fill(fb, x, STACK_LABEL_ROW, snap.stack.len(), STACK_CAPACITY, muted);
        let free = STACK_CAPACITY - snap.stack.len();
        for slot in 0..STACK_CAPACITY {
            let y = STACK_FIRST_ROW + slot as u16;
            if slot < free {
                fb.fill_rect(self.margin_x, y, self.tile_w, 1, '·', muted.dim());
            } else {
                self.draw_tile(fb, self.margin_x, y, &snap.stack[slot - free]);
            }
        }
        let marker_x = self.margin_x.saturating_add(self.tile_w + 1);
        if snap.stack.is_empty() {
            fb.put_str(marker_x, STACK_FIRST_ROW, EMPTY_MARKER, muted.dim());
        } else {
            fb.put_str(marker_x, STACK_FIRST_ROW + free as u16, "< top", muted);
        }

        // Status and counters.
        if let Some(status) = status {
            let fg = if status.error {
                Rgb::new(230, 90, 90)
            } else {
                Rgb::new(120, 220, 120)
            };
            fb.put_str(self.margin_x, STATUS_ROW, status.text, CellStyle::plain(fg));
        }
        let x = fb.put_str(self.margin_x, NEXT_ID_ROW, "NEXT ID ", muted);
        fb.put_u64(x, NEXT_ID_ROW, snap.next_id, muted);

        self.draw_help(fb, viewport);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &InventorySnapshot,
        status: Option<StatusLine<'_>>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, status, viewport, &mut fb);
        fb
    }

    fn put_fill(&self, fb: &mut FrameBuffer, x: u16, y: u16, len: usize, cap: usize, style: CellStyle) {
        let x = fb.put_u64(x, y, len as u64, style);
        let x = fb.put_str(x, y, "/", style);
        fb.put_u64(x, y, cap as u64, style);
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: &Piece) {
        let style = CellStyle::plain(Rgb::new(20, 20, 20))
            .on(kind_color(piece.kind))
            .bold();
        let right = x.saturating_add(self.tile_w);
        fb.fill_rect(x, y, self.tile_w, 1, ' ', style);
        let cx = fb.put_str(x.saturating_add(1), y, piece.kind.as_str(), style);
        let end = fb.put_u64(cx.saturating_add(1), y, piece.id, style);
        // Ids wider than the tile would bleed into the neighbour.
        if end > right {
            fb.put_char(right - 1, y, '+', style);
            fb.fill_rect(right, y, end - right, 1, ' ', CellStyle::default());
        }
    }

    fn draw_help(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let key = CellStyle::plain(Rgb::new(240, 220, 80)).bold();
        let text = CellStyle::plain(Rgb::new(200, 200, 200));
        for (i, action) in MenuAction::ALL.iter().enumerate() {
            let y = HELP_FIRST_ROW + i as u16;
            if y >= viewport.height {
                break;
            }
            let k = match action {
                MenuAction::Quit => 'q',
                other => other.menu_key(),
            };
            let x = self.margin_x;
            fb.put_char(x, y, '[', key);
            fb.put_char(x.saturating_add(1), y, k, key);
            fb.put_char(x.saturating_add(2), y, ']', key);
            fb.put_str(x.saturating_add(4), y, action.label(), text);
        }
    }
}

fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}
