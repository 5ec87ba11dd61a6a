//! ScorecardView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout (one block per player, frame 10 is wider for fill balls):
//!
//! ```text
//! ┌────────┬─────┬─────┬ ┄ ┬───────┬───────┐
//! │PLAYER  │  1  │  2  │ ┄ │  10   │ TOTAL │
//! ├────────┼─────┼─────┼ ┄ ┼───────┼───────┤
//! │> P1    │ X   │ 7 / │ ┄ │ X X X │   ... │
//! │        │  20 │  39 │ ┄ │       │       │
//! └────────┴─────┴─────┴ ┄ ┴───────┴───────┘
//! ```

use crate::core::{FrameView, GameSnapshot, PlayerSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{LAST_FRAME, MAX_ROLLS_PER_FRAME};

const NAME_W: u16 = 8;
const FRAME_W: u16 = 5;
const LAST_FRAME_W: u16 = 7;
const TOTAL_W: u16 = 7;

/// Columns: name, frames 1-10, total.
const COLUMNS: usize = LAST_FRAME as usize + 2;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Renders the multi-player scorecard, a status line and key help.
pub struct ScorecardView {
    anchor_y: AnchorY,
}

impl Default for ScorecardView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Top,
        }
    }
}

#[derive(Clone, Copy)]
enum Rule {
    Top,
    Middle,
    Bottom,
}

impl ScorecardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Total width of the grid including borders.
    pub fn grid_width() -> u16 {
        let inner: u16 = (0..COLUMNS).map(column_width).sum();
        inner + COLUMNS as u16 + 1
    }

    /// Height of the grid for `players` rows, including borders.
    ///
    /// Saturates at `u16::MAX`; rows past the viewport are not drawn.
    pub fn grid_height(players: usize) -> u16 {
        let rows = u16::try_from(players).unwrap_or(u16::MAX);
        rows.saturating_mul(3).saturating_add(3)
    }

    /// Render into an existing framebuffer.
    ///
    /// `message` is shown under the status line, typically the last rejected
    /// action.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        message: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let grid_w = Self::grid_width();
        let grid_h = Self::grid_height(snap.players.len());
        // Status, message and help lines sit under the grid.
        let block_h = grid_h.saturating_add(4);

        let start_x = viewport.width.saturating_sub(grid_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(block_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle {
            fg: Rgb::new(160, 160, 170),
            ..CellStyle::default()
        };
        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };

        // Header.
        self.draw_rule(fb, start_x, start_y, Rule::Top, border);
        self.draw_verticals(fb, start_x, start_y + 1, border);
        fb.put_str(start_x + 1, start_y + 1, "PLAYER", label);
        for frame in 1..=LAST_FRAME {
            let (x, _) = column_span(start_x, frame as usize);
            fb.put_u32(x + 2, start_y + 1, frame as u32, label);
        }
        let (total_x, _) = column_span(start_x, COLUMNS - 1);
        fb.put_str(total_x + 1, start_y + 1, "TOTAL", label);

        // One block per player.
        for (i, player) in snap.players.iter().enumerate() {
            let y = start_y.saturating_add(Self::grid_height(i) - 1);
            if y >= viewport.height {
                break;
            }
            self.draw_rule(fb, start_x, y, Rule::Middle, border);
            self.draw_verticals(fb, start_x, y.saturating_add(1), border);
            self.draw_verticals(fb, start_x, y.saturating_add(2), border);
            self.draw_player(fb, snap, player, start_x, y.saturating_add(1));
        }
        self.draw_rule(fb, start_x, start_y.saturating_add(grid_h - 1), Rule::Bottom, border);

        let status_y = start_y.saturating_add(grid_h).saturating_add(1);
        self.draw_status(fb, snap, start_x, status_y);

        if let Some(message) = message {
            let warn = CellStyle {
                fg: Rgb::new(240, 120, 100),
                ..CellStyle::default()
            };
            fb.put_str(start_x, status_y.saturating_add(1), message, warn);
        }

        let help = CellStyle {
            dim: true,
            ..CellStyle::default()
        };
        fb.put_str(
            start_x,
            status_y.saturating_add(2),
            "A add player  SPACE roll  0-9 X / pins  N new game  Q quit",
            help,
        );
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        message: Option<&str>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, message, viewport, &mut fb);
        fb
    }

    fn draw_player(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        player: &PlayerSnapshot,
        start_x: u16,
        y: u16,
    ) {
        let value = CellStyle::default();
        let active = CellStyle {
            bg: Rgb::new(40, 60, 90),
            ..CellStyle::default()
        };
        let turn = snap.turn.filter(|t| t.player == player.id);

        let name_style = if turn.is_some() {
            CellStyle { bold: true, ..value }
        } else {
            value
        };
        if turn.is_some() {
            fb.put_char(start_x + 1, y, '>', name_style);
        }
        fb.put_char(start_x + 3, y, 'P', name_style);
        fb.put_u32(start_x + 4, y, player.id.0, name_style);

        for frame in &player.frames {
            let (x, w) = column_span(start_x, frame.index as usize);
            let style = if turn.is_some_and(|t| t.frame == frame.index) {
                fb.fill_rect(x, y, w, 2, ' ', active);
                active
            } else {
                value
            };
            draw_frame(fb, frame, x, w, y, style);
        }

        let (total_x, total_w) = column_span(start_x, COLUMNS - 1);
        let total_style = if player.finished {
            CellStyle { bold: true, ..value }
        } else {
            value
        };
        fb.put_u32_right(
            total_x + total_w - 2,
            y,
            player.total_score as u32,
            total_style,
        );
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bold: true,
            ..CellStyle::default()
        };

        let status = if snap.game_over {
            match snap.winner {
                Some(id) => format!("GAME OVER  Winner: Player {id}"),
                None => "GAME OVER  Tie".to_string(),
            }
        } else if let Some(turn) = snap.turn {
            format!(
                "Player {}  frame {}  roll {}",
                turn.player, turn.frame, turn.roll
            )
        } else {
            "Press A to add a player".to_string()
        };
        fb.put_str(x, y, &status, style);
    }

    fn draw_rule(&self, fb: &mut FrameBuffer, start_x: u16, y: u16, rule: Rule, style: CellStyle) {
        let (left, join, right) = match rule {
            Rule::Top => ('┌', '┬', '┐'),
            Rule::Middle => ('├', '┼', '┤'),
            Rule::Bottom => ('└', '┴', '┘'),
        };
        let w = Self::grid_width();
        for dx in 0..w {
            fb.put_char(start_x + dx, y, '─', style);
        }
        fb.put_char(start_x, y, left, style);
        for col in 1..COLUMNS {
            let (x, _) = column_span(start_x, col);
            fb.put_char(x - 1, y, join, style);
        }
        fb.put_char(start_x + w - 1, y, right, style);
    }

    fn draw_verticals(&self, fb: &mut FrameBuffer, start_x: u16, y: u16, style: CellStyle) {
        fb.put_char(start_x, y, '│', style);
        for col in 1..COLUMNS {
            let (x, _) = column_span(start_x, col);
            fb.put_char(x - 1, y, '│', style);
        }
        fb.put_char(start_x + Self::grid_width() - 1, y, '│', style);
    }
}

/// Marks on the first row, running total right-aligned on the second.
fn draw_frame(fb: &mut FrameBuffer, frame: &FrameView, x: u16, w: u16, y: u16, style: CellStyle) {
    for (i, mark) in frame.marks.chars().enumerate() {
        fb.put_char(x + 1 + 2 * i as u16, y, mark, style);
    }
    if let Some(total) = frame.running_total {
        fb.put_u32_right(x + w - 2, y + 1, total as u32, style);
    }
}

fn column_width(col: usize) -> u16 {
    match col {
        0 => NAME_W,
        c if c == LAST_FRAME as usize => LAST_FRAME_W,
        c if c == COLUMNS - 1 => TOTAL_W,
        _ => FRAME_W,
    }
}

/// Left edge (first inner column) and width of a grid column.
fn column_span(start_x: u16, col: usize) -> (u16, u16) {
    let x: u16 = (0..col).map(|c| column_width(c) + 1).sum();
    (start_x + 1 + x, column_width(col))
}

// Regular frames show at most two marks side by side.
const _: () = assert!(FRAME_W as usize >= 2 * MAX_ROLLS_PER_FRAME);
