use crate::core::data::colour::Colour;

/// Maps an escape iteration count to a colour.
pub trait ColourMap: Send + Sync {
    fn map(&self, iterations: u32) -> Colour;

    fn display_name(&self) -> &str;
}
