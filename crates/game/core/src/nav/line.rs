use crate::state::Position;

/// Iterator over the cells of a discrete (Bresenham) line, both ends included.
#[derive(Clone, Debug)]
pub struct LineIter {
    current: Position,
    end: Position,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    done: bool,
}

impl LineIter {
    pub fn new(start: Position, end: Position) -> Self {
        let dx = (end.x - start.x).abs();
        let dy = -(end.y - start.y).abs();
        Self {
            current: start,
            end,
            dx,
            dy,
            sx: if start.x < end.x { 1 } else { -1 },
            sy: if start.y < end.y { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for LineIter {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.done {
            return None;
        }
        let cell = self.current;
        if cell == self.end {
            self.done = true;
            return Some(cell);
        }
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.current.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.current.y += self.sy;
        }
        Some(cell)
    }
}

/// True if the line from `start` to `end` visits `cell`.
pub fn line_passes_through(start: Position, end: Position, cell: Position) -> bool {
    LineIter::new(start, end).any(|c| c == cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(a: (i32, i32), b: (i32, i32)) -> Vec<(i32, i32)> {
        LineIter::new(Position::new(a.0, a.1), Position::new(b.0, b.1))
            .map(|p| (p.x, p.y))
            .collect()
    }

    #[test]
    fn single_cell_line() {
        assert_eq!(line((3, 3), (3, 3)), vec![(3, 3)]);
    }

    #[test]
    fn straight_and_diagonal_lines_include_both_ends() {
        assert_eq!(line((0, 0), (3, 0)), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert_eq!(line((2, 2), (2, 0)), vec![(2, 2), (2, 1), (2, 0)]);
        assert_eq!(line((0, 0), (-2, 2)), vec![(0, 0), (-1, 1), (-2, 2)]);
    }

    #[test]
    fn shallow_line_steps_one_column_at_a_time() {
        let cells = line((0, 0), (4, 2));
        assert_eq!(cells.len(), 5);
        assert_eq!(cells.first(), Some(&(0, 0)));
        assert_eq!(cells.last(), Some(&(4, 2)));
        assert!(cells.windows(2).all(|w| w[1].0 - w[0].0 == 1));
    }
}
