use rand::Rng;

use crate::grid::{Grid, Position};

/// The single food cell.
///
/// Placement is uniform over the whole grid and ignores the snake, so food
/// may land under the body.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Food {
    position: Position,
}

impl Food {
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, grid: Grid) -> Self {
        Self {
            position: random_cell(rng, grid),
        }
    }

    pub fn relocate<R: Rng + ?Sized>(&mut self, rng: &mut R, grid: Grid) {
        self.position = random_cell(rng, grid);
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

fn random_cell<R: Rng + ?Sized>(rng: &mut R, grid: Grid) -> Position {
    Position::new(rng.random_range(0..grid.width), rng.random_range(0..grid.height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use crate::snake::Snake;

    #[test]
    fn test_relocate_stays_in_bounds() {
        let grid = Grid::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut food = Food::spawn(&mut rng, grid);
        for _ in 0..1000 {
            food.relocate(&mut rng, grid);
            assert!(grid.contains(food.position()));
        }
    }

    #[test]
    fn test_relocate_covers_every_edge() {
        let grid = Grid::from_resolution(40, 30, 10);
        let mut rng = Pcg32::seed_from_u64(1234);
        let mut food = Food::at(Position::new(0, 0));
        let (mut min_x, mut max_x) = (i32::MAX, i32::MIN);
        let (mut min_y, mut max_y) = (i32::MAX, i32::MIN);
        for _ in 0..500 {
            food.relocate(&mut rng, grid);
            let p = food.position();
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        assert_eq!((min_x, max_x), (0, grid.width - 1));
        assert_eq!((min_y, max_y), (0, grid.height - 1));
    }

    #[test]
    fn test_relocate_may_land_on_snake() {
        // 4x4 grid, snake filling the top row: a quarter of the cells are body
        let grid = Grid::from_resolution(40, 40, 10);
        let snake = Snake::new(4, grid);
        let mut rng = Pcg32::seed_from_u64(3);
        let mut food = Food::at(Position::new(0, 3));

        let mut landed_on_body = false;
        for _ in 0..200 {
            food.relocate(&mut rng, grid);
            if snake.segments().iter().any(|s| s.position == food.position()) {
                landed_on_body = true;
                break;
            }
        }
        assert!(landed_on_body);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let grid = Grid::default();
        let mut a = Pcg32::seed_from_u64(99);
        let mut b = Pcg32::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(Food::spawn(&mut a, grid), Food::spawn(&mut b, grid));
        }
    }
}
