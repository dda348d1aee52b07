pub mod colour_maps;
pub mod escape_time;
pub mod mandelbrot_config;
pub mod pass_schedule;
