//! Dice value type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GameError;

/// An immutable ordered sequence of non-negative face values.
///
/// All dice in one game share the same face count; that shared length is the
/// modulus for roll resolution and is enforced at game-assembly time, not
/// per dice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dice {
    values: Vec<u32>,
}

impl Dice {
    /// Build a dice from face values, rejecting negative faces.
    pub fn new(values: Vec<i64>) -> Result<Self, GameError> {
        let mut faces = Vec::with_capacity(values.len());
        for value in values {
            let face =
                u32::try_from(value).map_err(|_| GameError::InvalidFaceValue(value))?;
            faces.push(face);
        }
        Ok(Self { values: faces })
    }

    /// Number of faces; the arithmetic modulus for this dice.
    pub fn face_count(&self) -> u32 {
        self.values.len() as u32
    }

    /// The face values in order.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Value at `face_index`.
    ///
    /// An out-of-range index means the combiner produced an unbounded value,
    /// which is a bug, not a user error.
    pub fn roll(&self, face_index: u32) -> Result<u32, GameError> {
        self.values
            .get(face_index as usize)
            .copied()
            .ok_or(GameError::FaceIndexOutOfRange {
                index: face_index,
                faces: self.face_count(),
            })
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_face_is_rejected() {
        let err = Dice::new(vec![3, -1, 5]).unwrap_err();
        assert!(matches!(err, GameError::InvalidFaceValue(-1)));
    }

    #[test]
    fn test_roll_returns_indexed_face() {
        let dice = Dice::new(vec![2, 2, 4, 4, 9, 9]).unwrap();
        assert_eq!(dice.roll(2).unwrap(), 4);
        assert_eq!(dice.roll(0).unwrap(), 2);
        assert_eq!(dice.roll(5).unwrap(), 9);
    }

    #[test]
    fn test_roll_out_of_range() {
        let dice = Dice::new(vec![1, 2, 3]).unwrap();
        let err = dice.roll(3).unwrap_err();
        assert!(matches!(
            err,
            GameError::FaceIndexOutOfRange { index: 3, faces: 3 }
        ));
    }

    #[test]
    fn test_face_count() {
        let dice = Dice::new(vec![1, 1, 6, 6, 8, 8]).unwrap();
        assert_eq!(dice.face_count(), 6);
    }

    #[test]
    fn test_display_matches_definition() {
        let dice = Dice::new(vec![7, 5, 3]).unwrap();
        assert_eq!(dice.to_string(), "7,5,3");
    }

    #[test]
    fn test_value_above_u32_is_rejected() {
        let err = Dice::new(vec![i64::from(u32::MAX) + 1]).unwrap_err();
        assert!(matches!(err, GameError::InvalidFaceValue(_)));
    }
}
