use super::{Error, Result};

/// Probability of a sampled cell being alive, always finite and in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Density(f64);

impl Density {
    pub const EMPTY: Self = Self(0.);
    pub const FULL: Self = Self(1.);

    pub fn new(p: f64) -> Result<Self> {
        if (0. ..=1.).contains(&p) {
            Ok(Self(p))
        } else {
            Err(Error::InvalidDensity(p))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Density {
    type Error = Error;

    fn try_from(p: f64) -> Result<Self> {
        Self::new(p)
    }
}

impl std::fmt::Display for Density {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
