use ggez::graphics::{DrawMode, Mesh, MeshBuilder};
use ggez::{Context, GameResult};

use crate::app::Palette;
use crate::basic::Board;
use crate::error::{Error, ErrorConversion, Result};
use crate::game::Segment;

pub fn snake_mesh(segments: &[Segment], board: &Board, palette: &Palette, ctx: &Context) -> Result<Mesh> {
    assert!(!segments.is_empty(), "tried to draw a snake without segments");

    let mut builder = MeshBuilder::new();

    // tail first so the head is drawn on top of a freshly grown tail
    let res: GameResult = segments.iter().rev().try_for_each(|segment| {
        let color = palette.segment_color(segment.kind);
        builder
            .rectangle(DrawMode::fill(), board.rect(segment.rect()), color.into())
            .map(|_| ())
    });

    res.map(|()| Mesh::from_data(ctx, builder.build()))
        .map_err(Error::from)
        .with_trace_step("snake_mesh")
}
