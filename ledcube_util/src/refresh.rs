use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

use crate::{SharedFrameBuffer, BRIGHTNESS_LEVELS, EXTENT, LAYER_DWELL};

/// Which level turns a line on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Polarity {
    /// Column level that lets the LED at that position light (sinking by default).
    pub column_active: PinState,
    /// Layer level that powers the layer.
    pub layer_active: PinState,
}

impl Default for Polarity {
    fn default() -> Self {
        Polarity {
            column_active: PinState::Low,
            layer_active: PinState::High,
        }
    }
}

/// Multiplexes the front frame onto the cube, one layer per call.
///
/// Brightness comes from comparing each voxel against a threshold that steps
/// up once per full sweep, so over `EXTENT * BRIGHTNESS_LEVELS` calls a voxel
/// is lit in a share of its layer's slots proportional to its brightness.
pub struct Refresher<P, D> {
    columns: [[P; EXTENT]; EXTENT],
    layers: [P; EXTENT],
    delay: D,
    polarity: Polarity,
    layer: usize,
}

impl<P: OutputPin, D: DelayNs> Refresher<P, D> {
    /// Takes the column pins indexed `[x][y]` and layer pins indexed by `z`,
    /// and switches all of them off.
    pub fn new(
        columns: [[P; EXTENT]; EXTENT],
        layers: [P; EXTENT],
        delay: D,
        polarity: Polarity,
    ) -> Result<Self, P::Error> {
        let mut refresher = Refresher {
            columns,
            layers,
            delay,
            polarity,
            layer: 0,
        };

        for pin in refresher.columns.iter_mut().flatten() {
            pin.set_state(!polarity.column_active)?;
        }
        for pin in refresher.layers.iter_mut() {
            pin.set_state(!polarity.layer_active)?;
        }

        log::info!(
            "Refresher ready: {} layers, {} brightness levels, {} us dwell",
            EXTENT,
            BRIGHTNESS_LEVELS,
            LAYER_DWELL.ticks()
        );
        Ok(refresher)
    }

    /// Layer the next call will scan.
    pub fn current_layer(&self) -> usize {
        self.layer
    }

    pub fn refresh(&mut self, buffer: &SharedFrameBuffer) -> Result<(), P::Error> {
        let z = self.layer;
        self.layer = (z + 1) % EXTENT;

        let lit = buffer.lock(|fb| {
            if z == 0 && fb.advance_intensity() == 0 {
                log::trace!("Brightness period complete");
            }
            fb.lit_columns(z)
        });

        let active = self.polarity.column_active;
        for (pins, row) in self.columns.iter_mut().zip(lit.iter()) {
            for (pin, &on) in pins.iter_mut().zip(row.iter()) {
                pin.set_state(if on { active } else { !active })?;
            }
        }

        let layer = &mut self.layers[z];
        layer.set_state(self.polarity.layer_active)?;
        self.delay.delay_us(LAYER_DWELL.ticks());
        layer.set_state(!self.polarity.layer_active)
    }

    pub fn release(self) -> ([[P; EXTENT]; EXTENT], [P; EXTENT], D) {
        (self.columns, self.layers, self.delay)
    }
}
