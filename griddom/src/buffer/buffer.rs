use super::Cell;
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Write a run of text starting at (x, y), advancing by display width.
    /// Stops at `max_x` (exclusive) or the buffer edge. Returns the x
    /// position after the last written cell.
    #[allow(clippy::too_many_arguments)]
    pub fn set_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        max_x: u16,
        fg: Rgb,
        bg: Option<Rgb>,
        style: TextStyle,
    ) -> u16 {
        let mut x = x;
        let limit = max_x.min(self.width);

        for ch in text.chars() {
            let w = char_width(ch).max(1) as u16;
            if x + w > limit {
                break;
            }
            // Preserve the existing background unless one was given.
            let bg = bg.unwrap_or_else(|| self.get(x, y).map(|c| c.bg).unwrap_or_default());
            self.set(x, y, Cell::new(ch).with_fg(fg).with_bg(bg).with_style(style));
            x += w;
        }

        x
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }
}
