use super::Cell;
use crate::layout::Rect;
use crate::text::char_width;

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

    pub fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
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

    /// Fill a rectangle with copies of `cell`, clipped to the buffer.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        let rect = rect.clamp_to(self.area());
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.set(x, y, cell);
            }
        }
    }

    /// Write `text` starting at (x, y), taking colors and style from `template`.
    ///
    /// Stops at `max_x` or the buffer edge. Wide characters that would be cut
    /// in half are not drawn. Returns the column after the last drawn cell.
    pub fn set_string(&mut self, x: u16, y: u16, text: &str, max_x: u16, template: Cell) -> u16 {
        let limit = max_x.min(self.width);
        let mut col = x;
        for ch in text.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if col.saturating_add(w) > limit {
                break;
            }
            self.set(col, y, template.with_char(ch));
            for extra in 1..w {
                self.set(col + extra, y, template.continuation());
            }
            col += w;
        }
        col
    }

    /// Characters of one row as a string, skipping wide continuation cells.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect()
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
