use embedded_hal::delay::DelayNs;
use fugit::MillisDurationU32;

use crate::font::{self, Glyph};
use crate::{Brightness, Buffer, Error, SharedFrameBuffer, EXTENT};

const SYMBOL_BRIGHTNESS: Brightness = 127;
const SYMBOL_HOLD: MillisDurationU32 = MillisDurationU32::from_ticks(700);

/// Drawing API over a shared frame buffer.
///
/// Every call except `read` targets the back buffer; nothing shows up on the
/// cube until `swap`.
pub struct Cube<'a, D> {
    buffer: &'a SharedFrameBuffer,
    delay: D,
}

impl<'a, D: DelayNs> Cube<'a, D> {
    pub fn new(buffer: &'a SharedFrameBuffer, delay: D) -> Self {
        Cube { buffer, delay }
    }

    pub fn release(self) -> D {
        self.delay
    }

    pub fn swap(&mut self) {
        self.buffer.lock(|fb| fb.swap());
    }

    pub fn read(&self, buffer: Buffer, x: usize, y: usize, z: usize) -> Result<Brightness, Error> {
        self.buffer.lock(|fb| fb.read(buffer, x, y, z))
    }

    pub fn read_front(&self, x: usize, y: usize, z: usize) -> Result<Brightness, Error> {
        self.read(Buffer::Front, x, y, z)
    }

    pub fn read_back(&self, x: usize, y: usize, z: usize) -> Result<Brightness, Error> {
        self.read(Buffer::Back, x, y, z)
    }

    pub fn write(&mut self, x: usize, y: usize, z: usize, value: Brightness) -> Result<(), Error> {
        self.buffer.lock(|fb| fb.write(x, y, z, value))
    }

    /// Copies front `src` into back `dst`.
    pub fn copy(&mut self, dst: (usize, usize, usize), src: (usize, usize, usize)) -> Result<(), Error> {
        self.buffer.lock(|fb| fb.copy(dst, src))
    }

    pub fn fill(&mut self, value: Brightness) {
        self.buffer.lock(|fb| fb.fill(value));
    }

    pub fn blank(&mut self) {
        self.fill(0);
    }

    /// Shows `text` one glyph at a time, holding each for `per_char` followed
    /// by a blank gap of a quarter of that. Blocks until the whole string has
    /// been shown. Spaces show as a blank frame.
    ///
    /// The string is checked against the font before anything is drawn.
    pub fn write_text(
        &mut self,
        text: &str,
        per_char: MillisDurationU32,
        brightness: Brightness,
    ) -> Result<(), Error> {
        if let Some(c) = text.chars().find(|&c| c != ' ' && font::glyph(c).is_err()) {
            log::warn!("Refusing to write {:?}: no glyph for {:?}", text, c);
            return Err(Error::UnsupportedCharacter(c));
        }
        log::debug!("Writing {:?}", text);

        for c in text.chars() {
            if c == ' ' {
                self.show_blank();
            } else {
                self.show_glyph(font::glyph(c)?, brightness)?;
            }
            self.delay.delay_ms(per_char.ticks());

            self.show_blank();
            self.delay.delay_ms(per_char.ticks() / 4);
        }
        Ok(())
    }

    /// Cycles through every glyph in the font.
    pub fn print_all_symbols(&mut self) -> Result<(), Error> {
        for c in font::symbols() {
            self.show_glyph(font::glyph(c)?, SYMBOL_BRIGHTNESS)?;
            self.delay.delay_ms(SYMBOL_HOLD.ticks());
        }
        Ok(())
    }

    fn show_blank(&mut self) {
        self.buffer.lock(|fb| {
            fb.blank();
            fb.swap();
        });
    }

    // Glyphs go on the x = EXTENT - 1 face, first row at the top.
    fn show_glyph(&mut self, glyph: &Glyph, brightness: Brightness) -> Result<(), Error> {
        self.buffer.lock(|fb| -> Result<(), Error> {
            fb.blank();
            for (row, bits) in glyph.iter().enumerate() {
                for (col, bit) in bits.iter().enumerate() {
                    fb.write(EXTENT - 1, col, EXTENT - 1 - row, bit * brightness)?;
                }
            }
            fb.swap();
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Frame;

    /// Records how long each pause lasted and what the cube showed meanwhile.
    struct RecordingDelay<'a> {
        buffer: &'a SharedFrameBuffer,
        pauses: Vec<(u32, Frame)>,
    }

    impl<'a> RecordingDelay<'a> {
        fn new(buffer: &'a SharedFrameBuffer) -> Self {
            RecordingDelay { buffer, pauses: Vec::new() }
        }
    }

    impl DelayNs for RecordingDelay<'_> {
        fn delay_ns(&mut self, ns: u32) {
            self.delay_ms(ns / 1_000_000);
        }

        fn delay_ms(&mut self, ms: u32) {
            let front = self.buffer.lock(|fb| *fb.front());
            self.pauses.push((ms, front));
        }
    }

    fn face(frame: &Frame) -> [[Brightness; EXTENT]; EXTENT] {
        let mut rows = [[0; EXTENT]; EXTENT];
        for (row, cells) in rows.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = frame.get(EXTENT - 1, col, EXTENT - 1 - row).unwrap();
            }
        }
        rows
    }

    fn only_face_lit(frame: &Frame) -> bool {
        (0..EXTENT - 1).all(|x| {
            (0..EXTENT).all(|y| (0..EXTENT).all(|z| frame.get(x, y, z) == Ok(0)))
        })
    }

    #[test]
    fn drawing_goes_to_back_until_swap() {
        let buffer = SharedFrameBuffer::new();
        let mut cube = Cube::new(&buffer, RecordingDelay::new(&buffer));

        cube.write(0, 0, 0, 200).unwrap();
        assert_eq!(cube.read_front(0, 0, 0), Ok(0));
        cube.swap();
        assert_eq!(cube.read_front(0, 0, 0), Ok(200));
        assert_eq!(cube.read_back(0, 0, 0), Ok(0));

        cube.fill(3);
        cube.copy((1, 1, 1), (0, 0, 0)).unwrap();
        cube.write(2, 2, 2, 9).unwrap();
        cube.swap();
        assert_eq!(cube.read_front(1, 1, 1), Ok(200));
        assert_eq!(cube.read_front(2, 2, 2), Ok(9));
        assert_eq!(cube.read_front(0, 0, 0), Ok(3));

        cube.blank();
        cube.swap();
        assert_eq!(cube.read_front(2, 2, 2), Ok(0));
        assert!(cube.release().pauses.is_empty());
    }

    #[test]
    fn out_of_range_write_fails() {
        let buffer = SharedFrameBuffer::new();
        let mut cube = Cube::new(&buffer, RecordingDelay::new(&buffer));
        assert_eq!(
            cube.write(EXTENT, 0, 0, 100),
            Err(Error::InvalidCoordinate { x: EXTENT, y: 0, z: 0 })
        );
        assert!(cube.copy((0, 0, 0), (0, 9, 0)).is_err());
        assert_eq!(buffer.lock(|fb| *fb.back()), Frame::EMPTY);
    }

    #[test_log::test]
    fn text_shows_glyph_then_gap() {
        let buffer = SharedFrameBuffer::new();
        let mut cube = Cube::new(&buffer, RecordingDelay::new(&buffer));
        cube.write_text("al", MillisDurationU32::from_ticks(400), 200).unwrap();

        let pauses = cube.release().pauses;
        let lengths: Vec<u32> = pauses.iter().map(|(ms, _)| *ms).collect();
        assert_eq!(lengths, [400, 100, 400, 100]);

        let a = &pauses[0].1;
        assert_eq!(
            face(a),
            [[0, 0, 0, 0], [200, 200, 200, 0], [200, 0, 200, 0], [200, 200, 200, 200]]
        );
        assert!(only_face_lit(a));
        assert_eq!(pauses[1].1, Frame::EMPTY);

        let l = &pauses[2].1;
        assert_eq!(
            face(l),
            [[0, 200, 0, 0], [0, 200, 0, 0], [0, 200, 0, 0], [0, 200, 200, 0]]
        );
        assert_eq!(pauses[3].1, Frame::EMPTY);
    }

    #[test]
    fn space_is_a_blank_frame() {
        let buffer = SharedFrameBuffer::new();
        buffer.lock(|fb| {
            fb.fill(80);
            fb.swap();
        });
        let mut cube = Cube::new(&buffer, RecordingDelay::new(&buffer));
        cube.write_text(" ", MillisDurationU32::from_ticks(100), 255).unwrap();

        let pauses = cube.release().pauses;
        assert_eq!(pauses.len(), 2);
        assert_eq!(pauses[0], (100, Frame::EMPTY));
        assert_eq!(pauses[1], (25, Frame::EMPTY));
    }

    #[test_log::test]
    fn unsupported_character_draws_nothing() {
        let buffer = SharedFrameBuffer::new();
        let mut cube = Cube::new(&buffer, RecordingDelay::new(&buffer));
        cube.write(1, 2, 3, 4).unwrap();

        assert_eq!(
            cube.write_text("ok!", MillisDurationU32::from_ticks(100), 255),
            Err(Error::UnsupportedCharacter('!'))
        );
        assert_eq!(cube.read_back(1, 2, 3), Ok(4));
        assert!(cube.release().pauses.is_empty());
    }

    #[test]
    fn all_symbols_are_shown_in_order() {
        let buffer = SharedFrameBuffer::new();
        let mut cube = Cube::new(&buffer, RecordingDelay::new(&buffer));
        cube.print_all_symbols().unwrap();

        let pauses = cube.release().pauses;
        assert_eq!(pauses.len(), 26);
        assert!(pauses.iter().all(|(ms, _)| *ms == 700));

        let z = &pauses[25].1;
        assert_eq!(
            face(z),
            [[127, 127, 127, 127], [0, 0, 127, 0], [0, 127, 0, 0], [127, 127, 127, 127]]
        );
        assert!(only_face_lit(z));
    }
}
