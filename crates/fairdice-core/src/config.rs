//! Game configuration: parsing and validating the dice pool.

use crate::dice::Dice;
use crate::error::ConfigError;

/// Minimum pool size for a meaningful game.
pub const MIN_DICE: usize = 3;

/// Parse dice definitions of the form `"2,2,4,4,9,9"` into a validated pool.
///
/// Fails fast before any round begins: fewer than [`MIN_DICE`] definitions,
/// non-integer or negative faces, empty dice, and mismatched face counts are
/// all configuration errors.
pub fn parse_dice_pool<S: AsRef<str>>(specs: &[S]) -> Result<Vec<Dice>, ConfigError> {
    if specs.len() < MIN_DICE {
        return Err(ConfigError::TooFewDice {
            required: MIN_DICE,
            got: specs.len(),
        });
    }

    let mut pool = Vec::with_capacity(specs.len());
    for (index, spec) in specs.iter().enumerate() {
        let spec = spec.as_ref();
        if spec.trim().is_empty() {
            return Err(ConfigError::EmptyDice { index });
        }
        let mut faces = Vec::new();
        for face in spec.split(',') {
            let face = face.trim();
            let value: i64 = face.parse().map_err(|_| ConfigError::NotAnInteger {
                index,
                face: face.to_string(),
            })?;
            faces.push(value);
        }
        let dice = Dice::new(faces).map_err(|source| ConfigError::InvalidDice { index, source })?;
        pool.push(dice);
    }

    let expected = pool[0].face_count();
    for (index, dice) in pool.iter().enumerate().skip(1) {
        if dice.face_count() != expected {
            return Err(ConfigError::MismatchedFaceCount {
                index,
                expected,
                got: dice.face_count(),
            });
        }
    }

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_canonical_pool() {
        let pool = parse_dice_pool(&["2,2,4,4,9,9", "1,1,6,6,8,8", "3,3,5,5,7,7"]).unwrap();
        assert_eq!(pool.len(), 3);
        assert_eq!(pool[0].values(), &[2, 2, 4, 4, 9, 9]);
        assert_eq!(pool[1].face_count(), 6);
    }

    #[test]
    fn test_tolerates_whitespace_around_faces() {
        let pool = parse_dice_pool(&["1, 2, 3", "4,5,6", "7,8,9"]).unwrap();
        assert_eq!(pool[0].values(), &[1, 2, 3]);
    }

    #[test]
    fn test_rejects_too_few_dice() {
        let err = parse_dice_pool(&["1,2,3", "4,5,6"]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::TooFewDice { required: 3, got: 2 }
        ));
    }

    #[test]
    fn test_rejects_non_integer_face() {
        let err = parse_dice_pool(&["1,2,3", "4,x,6", "7,8,9"]).unwrap_err();
        match err {
            ConfigError::NotAnInteger { index, face } => {
                assert_eq!(index, 1);
                assert_eq!(face, "x");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_negative_face() {
        let err = parse_dice_pool(&["1,2,3", "4,-5,6", "7,8,9"]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDice { index: 1, .. }));
    }

    #[test]
    fn test_rejects_empty_definition() {
        let err = parse_dice_pool(&["1,2,3", "  ", "7,8,9"]).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyDice { index: 1 }));
    }

    #[test]
    fn test_rejects_mismatched_face_counts() {
        let err = parse_dice_pool(&["1,2,3", "4,5,6", "7,8"]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MismatchedFaceCount {
                index: 2,
                expected: 3,
                got: 2
            }
        ));
    }
}
