use ggez::graphics::{Mesh, MeshBuilder};
use ggez::{Context, GameResult};

use crate::app::Palette;
use crate::basic::{Board, Point};
use crate::error::{Error, ErrorConversion, Result};

/// End points of the grid lines: `cols + 1` vertical lines followed
/// by `rows + 1` horizontal ones, all spanning the whole playfield
pub fn grid_lines(board: &Board) -> Vec<[Point; 2]> {
    let origin = board.origin();
    let end = board.end();
    let side = board.cell_side;

    let vertical = (0..=board.dim.cols)
        .map(|col| origin.x + col as f32 * side)
        .map(|x| [Point { x, y: origin.y }, Point { x, y: end.y }]);
    let horizontal = (0..=board.dim.rows)
        .map(|row| origin.y + row as f32 * side)
        .map(|y| [Point { x: origin.x, y }, Point { x: end.x, y }]);

    vertical.chain(horizontal).collect()
}

// The board never changes size so this is only built once
pub fn grid_mesh(board: &Board, palette: &Palette, thickness: f32, ctx: &Context) -> Result<Mesh> {
    let mut builder = MeshBuilder::new();

    let res: GameResult = grid_lines(board)
        .iter()
        .try_for_each(|line| builder.line(&line[..], thickness, palette.grid_color.into()).map(|_| ()));

    res.map(|()| Mesh::from_data(ctx, builder.build()))
        .map_err(Error::from)
        .with_trace_step("grid_mesh")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_lines() {
        let board = Board::fit(Point { x: 800., y: 450. }, 31.);
        let lines = grid_lines(&board);
        assert_eq!(lines.len(), 26 + 15);

        let [top, bottom] = lines[0];
        assert_eq!(top, Point { x: 12.5, y: 8. });
        assert_eq!(bottom, Point { x: 12.5, y: 442. });

        let [_, bottom] = lines[25];
        assert_eq!(bottom, Point { x: 787.5, y: 442. });

        let [left, right] = lines[26];
        assert_eq!(left, Point { x: 12.5, y: 8. });
        assert_eq!(right, Point { x: 787.5, y: 8. });

        let [_, right] = lines[lines.len() - 1];
        assert_eq!(right, Point { x: 787.5, y: 442. });
    }
}
