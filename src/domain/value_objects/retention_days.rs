use crate::domain::errors::ValidationError;

/// Number of days a restored copy stays readable; always at least one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RetentionDays(u32);

impl RetentionDays {
    /// Largest value accepted by the restore API (`Days` is an i32 on the wire)
    pub const MAX: u32 = i32::MAX as u32;

    pub fn new(days: u32) -> Result<Self, ValidationError> {
        if days == 0 || days > Self::MAX {
            return Err(ValidationError::InvalidRetentionDays {
                actual: days,
                max: Self::MAX,
            });
        }
        Ok(Self(days))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for RetentionDays {
    fn default() -> Self {
        Self(1)
    }
}

impl std::fmt::Display for RetentionDays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_days_rejected() {
        assert!(RetentionDays::new(0).is_err());
        assert!(RetentionDays::new(u32::MAX).is_err());
        assert_eq!(RetentionDays::new(7).unwrap().get(), 7);
        assert_eq!(RetentionDays::default().get(), 1);
    }
}
