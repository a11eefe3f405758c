//! Dice expressions
//!
//! Parses and rolls expressions of the form `NdS[+M|-M][*X|xX]`, for
//! example `1d20`, `3d6+1` or `2d4x10`. A bare number such as `5` is a
//! fixed score.

use std::fmt;
use std::str::FromStr;

use fnf_rng::Rnd;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiceError {
    #[error("empty dice expression")]
    Empty,

    #[error("invalid number '{text}' in dice expression '{expression}'")]
    InvalidNumber { expression: String, text: String },

    #[error("dice expression '{expression}' has zero sides")]
    ZeroSides { expression: String },

    #[error("unexpected '{found}' in dice expression '{expression}'")]
    Unexpected { expression: String, found: char },

    #[error("dice expression '{expression}' can score outside the i32 range")]
    TooLarge { expression: String },
}

/// `count` dice of `sides` sides, plus `modifier`, times `multiplier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dice {
    pub count: i32,
    pub sides: i32,
    pub modifier: i32,
    pub multiplier: i32,
}

impl Dice {
    pub const fn new(count: i32, sides: i32) -> Self {
        Self {
            count,
            sides,
            modifier: 0,
            multiplier: 1,
        }
    }

    pub const fn with_modifier(self, modifier: i32) -> Self {
        Self { modifier, ..self }
    }

    pub const fn with_multiplier(self, multiplier: i32) -> Self {
        Self { multiplier, ..self }
    }

    /// A constant score with no dice.
    pub const fn fixed(score: i32) -> Self {
        Self::new(0, 1).with_modifier(score)
    }

    /// Roll the dice. Scores beyond the `i32` range saturate.
    pub fn roll<R: Rnd + ?Sized>(&self, rnd: &mut R) -> i32 {
        let total: i64 = (0..self.count)
            .map(|_| i64::from(rnd.next_uniform(1, self.sides)))
            .sum();
        saturate(self.score(total))
    }

    pub fn min_score(&self) -> i32 {
        saturate(self.score(i64::from(self.count)))
    }

    pub fn max_score(&self) -> i32 {
        saturate(self.score(i64::from(self.count) * i64::from(self.sides)))
    }

    /// Both extreme scores fit in an `i32`.
    pub fn fits(&self) -> bool {
        let low = self.score(i64::from(self.count));
        let high = self.score(i64::from(self.count) * i64::from(self.sides));
        [low, high].iter().all(|&score| i32::try_from(score).is_ok())
    }

    // i32 count by i32 sides plus an i32 modifier, times an i32 multiplier,
    // cannot overflow an i128.
    fn score(&self, total: i64) -> i128 {
        (i128::from(total) + i128::from(self.modifier)) * i128::from(self.multiplier)
    }
}

fn saturate(score: i128) -> i32 {
    score.clamp(i128::from(i32::MIN), i128::from(i32::MAX)) as i32
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count == 0 {
            write!(f, "{}", self.modifier)?;
        } else {
            write!(f, "{}d{}", self.count, self.sides)?;
            if self.modifier > 0 {
                write!(f, "+{}", self.modifier)?;
            } else if self.modifier < 0 {
                write!(f, "{}", self.modifier)?;
            }
        }
        if self.multiplier != 1 {
            write!(f, "x{}", self.multiplier)?;
        }
        Ok(())
    }
}

impl FromStr for Dice {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let expression = s.trim();
        if expression.is_empty() {
            return Err(DiceError::Empty);
        }

        let number = |text: &str| -> Result<i32, DiceError> {
            text.parse().map_err(|_| DiceError::InvalidNumber {
                expression: expression.to_string(),
                text: text.to_string(),
            })
        };

        let (body, multiplier) = match expression.find(['*', 'x']) {
            Some(at) => (&expression[..at], number(&expression[at + 1..])?),
            None => (expression, 1),
        };

        let Some((count, rest)) = body.split_once('d') else {
            let dice = Dice::fixed(number(body)?).with_multiplier(multiplier);
            if !dice.fits() {
                return Err(DiceError::TooLarge {
                    expression: expression.to_string(),
                });
            }
            return Ok(dice);
        };
        let count = number(count)?;

        let (sides, modifier) = match rest.find(['+', '-']) {
            Some(0) => {
                return Err(DiceError::Unexpected {
                    expression: expression.to_string(),
                    found: rest.chars().next().unwrap_or('d'),
                });
            }
            Some(at) => (number(&rest[..at])?, number(&rest[at..])?),
            None => (number(rest)?, 0),
        };
        if sides == 0 {
            return Err(DiceError::ZeroSides {
                expression: expression.to_string(),
            });
        }

        let dice = Dice::new(count, sides)
            .with_modifier(modifier)
            .with_multiplier(multiplier);
        if !dice.fits() {
            return Err(DiceError::TooLarge {
                expression: expression.to_string(),
            });
        }
        Ok(dice)
    }
}

/// Parse and roll `expression` in one step.
pub fn roll<R: Rnd + ?Sized>(expression: &str, rnd: &mut R) -> Result<i32, DiceError> {
    let dice: Dice = expression.parse()?;
    Ok(dice.roll(rnd))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnf_rng::{FixedRnd, GameRng};

    #[test]
    fn test_parse_simple() {
        let dice: Dice = "1d20".parse().unwrap();
        assert_eq!(dice, Dice::new(1, 20));
        assert_eq!(dice.to_string(), "1d20");
    }

    #[test]
    fn test_parse_modifier_and_multiplier() {
        let dice: Dice = "3d6+2".parse().unwrap();
        assert_eq!(dice, Dice::new(3, 6).with_modifier(2));

        let dice: Dice = "2d4-1x10".parse().unwrap();
        assert_eq!(dice, Dice::new(2, 4).with_modifier(-1).with_multiplier(10));
        assert_eq!(dice.to_string(), "2d4-1x10");

        let dice: Dice = "1d6*100".parse().unwrap();
        assert_eq!(dice.multiplier, 100);
    }

    #[test]
    fn test_parse_fixed_score() {
        let dice: Dice = "5".parse().unwrap();
        assert_eq!(dice.min_score(), 5);
        assert_eq!(dice.max_score(), 5);
        assert_eq!(dice.to_string(), "5");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Dice>(), Err(DiceError::Empty));
        assert!(matches!(
            "1dX".parse::<Dice>(),
            Err(DiceError::InvalidNumber { .. })
        ));
        assert!(matches!(
            "2d0".parse::<Dice>(),
            Err(DiceError::ZeroSides { .. })
        ));
        assert!(matches!(
            "1d+3".parse::<Dice>(),
            Err(DiceError::Unexpected { found: '+', .. })
        ));
    }

    #[test]
    fn test_roll_with_fakes() {
        let dice = Dice::new(2, 6).with_modifier(1);
        assert_eq!(dice.roll(&mut FixedRnd::min()), 3);
        assert_eq!(dice.roll(&mut FixedRnd::max()), 13);
        assert_eq!(roll("1d20", &mut FixedRnd::new(7)), Ok(7));
    }

    #[test]
    fn test_parse_rejects_scores_beyond_i32() {
        assert!(matches!(
            "3d2000000000".parse::<Dice>(),
            Err(DiceError::TooLarge { .. })
        ));
        assert!(matches!(
            "2000000000x2".parse::<Dice>(),
            Err(DiceError::TooLarge { .. })
        ));
        assert!(matches!(
            roll("3d2000000000", &mut FixedRnd::max()),
            Err(DiceError::TooLarge { .. })
        ));

        let dice: Dice = "1d2000000000".parse().unwrap();
        assert_eq!(dice.max_score(), 2_000_000_000);
        assert_eq!(roll("1d2000000000", &mut FixedRnd::max()), Ok(2_000_000_000));
    }

    #[test]
    fn test_unparsed_large_dice_saturate() {
        let dice = Dice::new(3, 2_000_000_000);
        assert!(!dice.fits());
        assert_eq!(dice.max_score(), i32::MAX);
        assert_eq!(dice.min_score(), 3);
        assert_eq!(dice.roll(&mut FixedRnd::max()), i32::MAX);

        let negative = Dice::new(2, 6).with_multiplier(-2_000_000_000);
        assert_eq!(negative.max_score(), i32::MIN);
        assert_eq!(negative.roll(&mut FixedRnd::min()), i32::MIN);
    }

    #[test]
    fn test_roll_within_range() {
        let mut rng = GameRng::new(42);
        let dice = Dice::new(3, 6).with_multiplier(10);
        for _ in 0..200 {
            let score = dice.roll(&mut rng);
            assert!(score >= dice.min_score() && score <= dice.max_score());
            assert_eq!(score % 10, 0);
        }
    }
}
