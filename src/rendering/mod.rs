pub use food_mesh::food_mesh;
pub use grid_mesh::grid_mesh;
pub use snake_mesh::snake_mesh;

mod food_mesh;
mod grid_mesh;
mod snake_mesh;
