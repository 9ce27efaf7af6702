use crate::{Brightness, Error, EXTENT};

type Voxels = [[[Brightness; EXTENT]; EXTENT]; EXTENT];

/// Brightness of every voxel, indexed `[x][y][z]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    data: Voxels,
}

impl Frame {
    pub const EMPTY: Frame = Frame {
        data: [[[0; EXTENT]; EXTENT]; EXTENT],
    };

    pub fn get(&self, x: usize, y: usize, z: usize) -> Result<Brightness, Error> {
        check(x, y, z)?;
        Ok(self.data[x][y][z])
    }

    pub fn set(&mut self, x: usize, y: usize, z: usize, value: Brightness) -> Result<(), Error> {
        check(x, y, z)?;
        self.data[x][y][z] = value;
        Ok(())
    }

    pub fn fill(&mut self, value: Brightness) {
        self.data = [[[value; EXTENT]; EXTENT]; EXTENT];
    }

    /// Column `(x, y)` values for one z-slice.
    pub(crate) fn layer(&self, z: usize) -> [[Brightness; EXTENT]; EXTENT] {
        let mut layer = [[0; EXTENT]; EXTENT];
        for (x, row) in layer.iter_mut().enumerate() {
            for (y, value) in row.iter_mut().enumerate() {
                *value = self.data[x][y][z];
            }
        }
        layer
    }
}

impl Default for Frame {
    fn default() -> Self {
        Frame::EMPTY
    }
}

fn check(x: usize, y: usize, z: usize) -> Result<(), Error> {
    if x < EXTENT && y < EXTENT && z < EXTENT {
        Ok(())
    } else {
        Err(Error::InvalidCoordinate { x, y, z })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_dark() {
        let frame = Frame::default();
        for x in 0..EXTENT {
            for y in 0..EXTENT {
                for z in 0..EXTENT {
                    assert_eq!(frame.get(x, y, z), Ok(0));
                }
            }
        }
    }

    #[test]
    fn set_touches_one_voxel() {
        let mut frame = Frame::EMPTY;
        frame.set(1, 2, 3, 99).unwrap();
        assert_eq!(frame.get(1, 2, 3), Ok(99));
        assert_eq!(frame.get(3, 2, 1), Ok(0));
        assert_eq!(frame.layer(3)[1][2], 99);
        assert_eq!(frame.layer(2), [[0; EXTENT]; EXTENT]);
    }

    #[test]
    fn rejects_out_of_range() {
        let mut frame = Frame::EMPTY;
        assert_eq!(
            frame.set(EXTENT, 0, 0, 100),
            Err(Error::InvalidCoordinate { x: EXTENT, y: 0, z: 0 })
        );
        assert_eq!(
            frame.get(0, 0, 17),
            Err(Error::InvalidCoordinate { x: 0, y: 0, z: 17 })
        );
        assert_eq!(frame, Frame::EMPTY);
    }
}
