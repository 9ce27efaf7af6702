use core::cell::RefCell;
use critical_section::Mutex;

use crate::{dither, Brightness, Error, Frame, EXTENT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Buffer {
    /// The frame the refresh engine is displaying.
    Front,
    /// The frame drawing calls write into.
    Back,
}

/// Two frames whose front/back roles are exchanged by `swap`, plus the
/// rotating threshold used by the refresh engine.
#[derive(Debug)]
pub struct FrameBuffer {
    frames: [Frame; 2],
    front: usize,
    intensity: Brightness,
}

impl FrameBuffer {
    pub const fn new() -> Self {
        FrameBuffer {
            frames: [Frame::EMPTY; 2],
            front: 0,
            intensity: 0,
        }
    }

    pub fn swap(&mut self) {
        self.front ^= 1;
    }

    pub fn front(&self) -> &Frame {
        &self.frames[self.front]
    }

    pub fn back(&self) -> &Frame {
        &self.frames[self.front ^ 1]
    }

    fn back_mut(&mut self) -> &mut Frame {
        &mut self.frames[self.front ^ 1]
    }

    pub fn read(&self, buffer: Buffer, x: usize, y: usize, z: usize) -> Result<Brightness, Error> {
        match buffer {
            Buffer::Front => self.front().get(x, y, z),
            Buffer::Back => self.back().get(x, y, z),
        }
    }

    pub fn write(&mut self, x: usize, y: usize, z: usize, value: Brightness) -> Result<(), Error> {
        self.back_mut().set(x, y, z, value)
    }

    /// Copies the front voxel at `src` into the back voxel at `dst`.
    pub fn copy(&mut self, dst: (usize, usize, usize), src: (usize, usize, usize)) -> Result<(), Error> {
        let value = self.front().get(src.0, src.1, src.2)?;
        self.back_mut().set(dst.0, dst.1, dst.2, value)
    }

    pub fn fill(&mut self, value: Brightness) {
        self.back_mut().fill(value);
    }

    pub fn blank(&mut self) {
        self.fill(0);
    }

    pub fn intensity(&self) -> Brightness {
        self.intensity
    }

    pub(crate) fn advance_intensity(&mut self) -> Brightness {
        self.intensity = dither::next_threshold(self.intensity);
        self.intensity
    }

    /// Which columns of front layer `z` beat the current threshold.
    pub(crate) fn lit_columns(&self, z: usize) -> [[bool; EXTENT]; EXTENT] {
        let layer = self.front().layer(z);
        let mut lit = [[false; EXTENT]; EXTENT];
        for (x, row) in lit.iter_mut().enumerate() {
            for (y, on) in row.iter_mut().enumerate() {
                *on = dither::is_lit(layer[x][y], self.intensity);
            }
        }
        lit
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        FrameBuffer::new()
    }
}

/// A `FrameBuffer` that the foreground and the refresh interrupt can both reach.
pub struct SharedFrameBuffer {
    inner: Mutex<RefCell<FrameBuffer>>,
}

impl SharedFrameBuffer {
    pub const fn new() -> Self {
        SharedFrameBuffer {
            inner: Mutex::new(RefCell::new(FrameBuffer::new())),
        }
    }

    /// Runs `f` inside a critical section with exclusive access to the buffers.
    pub fn lock<R>(&self, f: impl FnOnce(&mut FrameBuffer) -> R) -> R {
        critical_section::with(|cs| f(&mut self.inner.borrow_ref_mut(cs)))
    }
}

impl Default for SharedFrameBuffer {
    fn default() -> Self {
        SharedFrameBuffer::new()
    }
}
