//! Validation utilities
//!
//! Provides helpers for common validation patterns.

/// Ensure a condition is true, or return a lazily formatted error
///
/// Similar to `assert!` but returns a Result instead of panicking.
///
/// # Example
/// ```rust
/// use ivy_module_metadata::utils::ensure_fmt;
///
/// let value = 3;
/// assert!(ensure_fmt(value > 0, || format!("{} must be positive", value)).is_ok());
/// ```
pub fn ensure_fmt<F>(condition: bool, message: F) -> Result<(), String>
where
    F: FnOnce() -> String,
{
    if condition {
        Ok(())
    } else {
        Err(message())
    }
}

/// Validate a slice is not empty
pub fn ensure_not_empty<T>(value: &[T], name: &str) -> Result<(), String> {
    if value.is_empty() {
        Err(format!("{} must not be empty", name))
    } else {
        Ok(())
    }
}

/// Validate a string has at least one non-whitespace character
pub fn ensure_not_blank(value: &str, name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} must not be blank", name))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_fmt_is_lazy() {
        assert!(ensure_fmt(true, || unreachable!()).is_ok());
        assert_eq!(ensure_fmt(false, || format!("{}!", 1)), Err("1!".to_string()));
    }

    #[test]
    fn test_ensure_not_empty() {
        assert!(ensure_not_empty(&[1], "list").is_ok());
        assert_eq!(
            ensure_not_empty::<u8>(&[], "list"),
            Err("list must not be empty".to_string())
        );
    }

    #[test]
    fn test_ensure_not_blank() {
        assert!(ensure_not_blank("lib", "module").is_ok());
        assert!(ensure_not_blank("", "module").is_err());
        assert!(ensure_not_blank(" \t", "module").is_err());
    }
}
