use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use mazework::dims::Dims;

use super::{Canvas, Paint};
use crate::job::CellEvent;

fn term_color(paint: Paint) -> Option<Color> {
    match paint {
        Paint::Wall | Paint::Empty => None,
        Paint::Unvisited => Some(Color::DarkGrey),
        Paint::Processing => Some(Color::Cyan),
        Paint::Terminal => Some(Color::Green),
        Paint::Path => Some(Color::Yellow),
    }
}

/// Whether a `width` x `height` maze plus the status line fits the terminal.
pub fn fits_terminal(width: usize, height: usize) -> bool {
    match terminal::size() {
        Ok((cols, rows)) => {
            (2 * width + 1) * 2 <= cols as usize && 2 * height + 2 <= rows as usize
        }
        Err(_) => false,
    }
}

/// Animated view on the alternate screen, redrawing only the tiles an event
/// touches.
pub struct Screen<W: Write> {
    out: W,
    canvas: Canvas,
}

impl<W: Write> Screen<W> {
    pub fn start(mut out: W, width: usize, height: usize) -> io::Result<Self> {
        queue!(out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;

        let mut screen = Screen {
            out,
            canvas: Canvas::new(width, height),
        };
        for pos in Dims::iter_fill(Dims::ZERO, screen.canvas.size()) {
            screen.draw_tile(pos)?;
        }
        screen.out.flush()?;

        Ok(screen)
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    fn draw_tile(&mut self, pos: Dims) -> io::Result<()> {
        let paint = self.canvas.tile(pos);
        queue!(self.out, MoveTo(pos.0 as u16 * 2, pos.1 as u16))?;
        match term_color(paint) {
            Some(color) => queue!(
                self.out,
                SetForegroundColor(color),
                Print(paint.glyph()),
                ResetColor
            ),
            None => queue!(self.out, Print(paint.glyph())),
        }
    }

    pub fn apply(&mut self, event: &CellEvent) -> io::Result<()> {
        let dirty = self.canvas.paint(event.cell, event.state, &event.passages);
        if dirty.is_empty() {
            return Ok(());
        }

        for pos in dirty {
            self.draw_tile(pos)?;
        }
        self.out.flush()
    }

    /// Replaces the line under the maze.
    pub fn status(&mut self, text: &str) -> io::Result<()> {
        let row = self.canvas.size().1 as u16;
        queue!(
            self.out,
            MoveTo(0, row),
            Clear(ClearType::CurrentLine),
            Print(text)
        )?;
        self.out.flush()
    }

    /// Leaves the alternate screen, giving the writer back.
    pub fn finish(mut self) -> io::Result<W> {
        queue!(self.out, ResetColor, Show, LeaveAlternateScreen)?;
        self.out.flush()?;
        Ok(self.out)
    }
}
