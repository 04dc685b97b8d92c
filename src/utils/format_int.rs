/// Integer displayed with `'` between groups of three digits.
pub struct NiceInt(i128);

impl NiceInt {
    pub fn from(value: impl Into<i128>) -> Self {
        Self(value.into())
    }

    pub fn from_usize(value: usize) -> Self {
        Self(value as i128)
    }
}

impl std::fmt::Display for NiceInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        if self.0 < 0 {
            f.write_str("-")?;
        }
        for (i, c) in digits.chars().enumerate() {
            if i != 0 && (digits.len() - i) % 3 == 0 {
                f.write_str("'")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::NiceInt;

    #[test]
    fn test_delimiters() {
        assert_eq!(NiceInt::from(0).to_string(), "0");
        assert_eq!(NiceInt::from(999).to_string(), "999");
        assert_eq!(NiceInt::from(1000).to_string(), "1'000");
        assert_eq!(NiceInt::from(-1234567).to_string(), "-1'234'567");
        assert_eq!(NiceInt::from_usize(12_345).to_string(), "12'345");
        assert_eq!(NiceInt::from(u64::MAX).to_string(), "18'446'744'073'709'551'615");
    }
}
