use ggez::graphics::{DrawMode, Mesh};
use ggez::Context;

use crate::app::Palette;
use crate::basic::Board;
use crate::error::{Error, ErrorConversion, Result};
use crate::game::Food;

pub fn food_mesh(food: &Food, board: &Board, palette: &Palette, ctx: &Context) -> Result<Mesh> {
    Mesh::new_rectangle(
        ctx,
        DrawMode::fill(),
        board.rect(food.rect()),
        palette.food_color.into(),
    )
    .map_err(Error::from)
    .with_trace_step("food_mesh")
}
