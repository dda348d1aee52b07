use crate::core::actions::render_progressive::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;

pub const COLOUR_TABLE_SIZE: usize = 512;

const VIOLET_NM: f64 = 380.0;
const VISIBLE_RANGE_NM: f64 = 400.0;
const GAMMA: f64 = 0.8;

/// Approximates the colour of monochromatic light, in linear `[0, 1]` channels
/// before intensity falloff and gamma.
fn spectral_rgb(wave: f64) -> (f64, f64, f64) {
    if (380.0..=440.0).contains(&wave) {
        (-(wave - 440.0) / (440.0 - 380.0), 0.0, 1.0)
    } else if (440.0..=490.0).contains(&wave) {
        (0.0, (wave - 440.0) / (490.0 - 440.0), 1.0)
    } else if (490.0..=510.0).contains(&wave) {
        (0.0, 1.0, -(wave - 510.0) / (510.0 - 490.0))
    } else if (510.0..=580.0).contains(&wave) {
        ((wave - 510.0) / (580.0 - 510.0), 1.0, 0.0)
    } else if (580.0..=645.0).contains(&wave) {
        (1.0, -(wave - 645.0) / (645.0 - 580.0), 0.0)
    } else if (645.0..=780.0).contains(&wave) {
        (1.0, 0.0, 0.0)
    } else {
        (0.0, 0.0, 0.0)
    }
}

/// Perceived intensity drops off towards both ends of the visible range.
fn intensity(wave: f64) -> f64 {
    if wave > 700.0 {
        0.3 + 0.7 * (780.0 - wave) / (780.0 - 700.0)
    } else if wave < 420.0 {
        0.3 + 0.7 * (wave - 380.0) / (420.0 - 380.0)
    } else {
        1.0
    }
}

fn quantize(channel: f64, s: f64) -> u8 {
    ((channel * s).powf(GAMMA) * 255.0) as u8
}

#[must_use]
pub fn rgb_from_wavelength(wave: f64) -> Colour {
    let (r, g, b) = spectral_rgb(wave);
    let s = intensity(wave);

    Colour {
        r: quantize(r, s),
        g: quantize(g, s),
        b: quantize(b, s),
    }
}

/// Precomputed violet-to-red palette indexed by `iterations % 512`.
///
/// Built once and never mutated, so it can be shared between threads freely.
#[derive(Debug, Clone)]
pub struct SpectralColourTable {
    table: [Colour; COLOUR_TABLE_SIZE],
}

impl ColourMap for SpectralColourTable {
    #[inline]
    fn map(&self, iterations: u32) -> Colour {
        self.table[iterations as usize % COLOUR_TABLE_SIZE]
    }

    fn display_name(&self) -> &str {
        "Spectral"
    }
}

impl Default for SpectralColourTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SpectralColourTable {
    #[must_use]
    pub fn new() -> Self {
        let mut table = [Colour::BLACK; COLOUR_TABLE_SIZE];
        for (i, entry) in table.iter_mut().enumerate() {
            let wave = VIOLET_NM + (i as f64 * VISIBLE_RANGE_NM / COLOUR_TABLE_SIZE as f64);
            *entry = rgb_from_wavelength(wave);
        }

        Self { table }
    }

    #[must_use]
    pub fn entries(&self) -> &[Colour; COLOUR_TABLE_SIZE] {
        &self.table
    }
}
