use enumflags2::{BitFlags, bitflags};

/// DRM plane rotation and reflection bits
///
/// Rotations are counter clockwise.
#[bitflags]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationFlag {
    Rotate0 = 1 << 0,
    Rotate90 = 1 << 1,
    Rotate180 = 1 << 2,
    Rotate270 = 1 << 3,
    ReflectX = 1 << 4,
    ReflectY = 1 << 5,
}

/// Set of [`RotationFlag`]s describing how a surface is placed onto its destination
pub type Rotation = BitFlags<RotationFlag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QuarterTurn {
    None,
    Rotate90,
    Rotate270,
}

/// A [`Rotation`] reduced to at most one quarter turn plus reflections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Orientation {
    pub(crate) turn: QuarterTurn,
    pub(crate) reflect_x: bool,
    pub(crate) reflect_y: bool,
}

impl Orientation {
    /// `Rotate180` is folded into both reflections. If both quarter turns are set `Rotate90` wins.
    pub(crate) fn simplify(rotation: Rotation) -> Self {
        let half_turn = rotation.contains(RotationFlag::Rotate180);

        let turn = if rotation.contains(RotationFlag::Rotate90) {
            QuarterTurn::Rotate90
        } else if rotation.contains(RotationFlag::Rotate270) {
            QuarterTurn::Rotate270
        } else {
            QuarterTurn::None
        };

        Self {
            turn,
            reflect_x: rotation.contains(RotationFlag::ReflectX) ^ half_turn,
            reflect_y: rotation.contains(RotationFlag::ReflectY) ^ half_turn,
        }
    }

    /// Whether column `i` read from the source lands at the mirrored position of the row
    pub(crate) fn mirrors_row(&self) -> bool {
        self.reflect_x ^ (self.turn == QuarterTurn::Rotate270)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drm_bit_values() {
        assert_eq!(Rotation::from(RotationFlag::Rotate0).bits(), 1);
        assert_eq!(RotationFlag::Rotate270 as u8, 8);
        assert_eq!((RotationFlag::ReflectX | RotationFlag::ReflectY).bits(), 48);
        assert_eq!(
            Rotation::from_bits(0x12).ok(),
            Some(RotationFlag::Rotate90 | RotationFlag::ReflectX)
        );
    }

    #[test]
    fn half_turn_is_both_reflections() {
        let half = Orientation::simplify(RotationFlag::Rotate180.into());
        let reflected = Orientation::simplify(RotationFlag::ReflectX | RotationFlag::ReflectY);

        assert_eq!(half, reflected);
        assert_eq!(half.turn, QuarterTurn::None);

        // Reflecting a half turn again cancels that axis
        let back = Orientation::simplify(RotationFlag::Rotate180 | RotationFlag::ReflectX);
        assert!(!back.reflect_x && back.reflect_y);
    }

    #[test]
    fn mirroring() {
        assert!(!Orientation::simplify(Rotation::empty()).mirrors_row());
        assert!(Orientation::simplify(RotationFlag::ReflectX.into()).mirrors_row());
        assert!(Orientation::simplify(RotationFlag::Rotate270.into()).mirrors_row());
        assert!(
            !Orientation::simplify(RotationFlag::Rotate270 | RotationFlag::ReflectX).mirrors_row()
        );
        assert!(!Orientation::simplify(RotationFlag::Rotate90.into()).mirrors_row());
    }
}
