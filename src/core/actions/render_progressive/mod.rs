pub mod ports;
pub mod render_pass;
#[allow(clippy::module_inception)]
pub mod render_progressive;
