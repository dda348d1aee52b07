pub mod colour;
pub mod complex;
pub mod pixel_size;
pub mod render_parameters;
pub mod rendered_image;
