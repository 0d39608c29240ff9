//! Player resource stats (HP and Mana).
//!
//! The bounds `0 <= hp <= max_hp` and `0 <= mana <= max_mana` are
//! re-established by the turn resolver at the end of every turn; this type
//! itself does not clamp on construction so that intermediate values can be
//! inspected.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// HP and Mana with their maximums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    /// Current hit points.
    pub hp: i32,
    /// Maximum hit points.
    pub max_hp: i32,
    /// Current mana.
    pub mana: i32,
    /// Maximum mana.
    pub max_mana: i32,
}

impl GameStats {
    /// Stats every new playthrough starts with.
    pub const INITIAL: GameStats = GameStats {
        hp: 100,
        max_hp: 100,
        mana: 50,
        max_mana: 100,
    };

    /// Create stats with explicit current and maximum values.
    pub fn new(hp: i32, max_hp: i32, mana: i32, max_mana: i32) -> Self {
        Self {
            hp,
            max_hp,
            mana,
            max_mana,
        }
    }

    /// Returns true if both resources lie within their bounds.
    pub fn is_within_bounds(&self) -> bool {
        (0..=self.max_hp).contains(&self.hp) && (0..=self.max_mana).contains(&self.mana)
    }

    /// Return the stats unchanged if they are within bounds.
    ///
    /// A negative maximum can never hold a value in `0..=max`, so it is
    /// rejected too.
    pub fn validate(self) -> CoreResult<Self> {
        if self.is_within_bounds() {
            Ok(self)
        } else {
            Err(CoreError::InvalidStats(self))
        }
    }

    /// Fraction of HP remaining (0.0 to 1.0).
    pub fn hp_fraction(&self) -> f64 {
        fraction(self.hp, self.max_hp)
    }

    /// Fraction of Mana remaining (0.0 to 1.0).
    pub fn mana_fraction(&self) -> f64 {
        fraction(self.mana, self.max_mana)
    }
}

impl Default for GameStats {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl fmt::Display for GameStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HP {}/{}  Mana {}/{}",
            self.hp, self.max_hp, self.mana, self.max_mana
        )
    }
}

fn fraction(current: i32, max: i32) -> f64 {
    if max <= 0 {
        return 0.0;
    }
    (f64::from(current) / f64::from(max)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_stats() {
        let stats = GameStats::default();
        assert_eq!(stats.hp, 100);
        assert_eq!(stats.max_hp, 100);
        assert_eq!(stats.mana, 50);
        assert_eq!(stats.max_mana, 100);
        assert!(stats.is_within_bounds());
    }

    #[test]
    fn bounds_check() {
        assert!(!GameStats::new(-1, 100, 0, 100).is_within_bounds());
        assert!(!GameStats::new(10, 100, 101, 100).is_within_bounds());
        assert!(GameStats::new(0, 100, 0, 100).is_within_bounds());
    }

    #[test]
    fn validate_rejects_out_of_bounds() {
        assert!(GameStats::INITIAL.validate().is_ok());
        let err = GameStats::new(500, 100, -5, -10).validate().unwrap_err();
        assert!(matches!(err, CoreError::InvalidStats(s) if s.max_mana == -10));
        assert!(GameStats::new(10, 100, 0, -1).validate().is_err());
        assert!(GameStats::new(0, 0, 0, 0).validate().is_ok());
    }

    #[test]
    fn fractions() {
        let stats = GameStats::new(25, 100, 50, 100);
        assert!((stats.hp_fraction() - 0.25).abs() < f64::EPSILON);
        assert!((stats.mana_fraction() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn fraction_zero_max() {
        let stats = GameStats::new(0, 0, 0, 0);
        assert!(stats.hp_fraction().abs() < f64::EPSILON);
    }

    #[test]
    fn display() {
        assert_eq!(GameStats::default().to_string(), "HP 100/100  Mana 50/100");
    }

    #[test]
    fn camel_case_json() {
        let json = serde_json::to_string(&GameStats::default()).unwrap();
        assert!(json.contains("\"maxHp\":100"));
        assert!(json.contains("\"maxMana\":100"));
    }
}
