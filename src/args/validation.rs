use chrono::NaiveTime;
use std::{fs, path::PathBuf};

use crate::grouping::parse_tee_time;
use crate::model::{Allowance, HandicapBasis};

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The input file '{file}' is not readable."));
    }
    Ok(path)
}

/// Accepts a fraction in (0, 1] or a whole-number percentage in (1, 100].
///
/// # Errors
///
/// Will return `Err` if the value is not a number or is out of range
pub fn check_allowance(value: &str) -> Result<Allowance, String> {
    let raw: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("The allowance '{value}' is not a number."))?;
    let fraction = if raw <= 1.0 {
        raw
    } else if raw.fract() == 0.0 {
        raw / 100.0
    } else {
        return Err(format!(
            "The allowance '{value}' is neither a fraction up to 1 nor a whole percentage."
        ));
    };
    Allowance::new(fraction).map_err(|e| e.to_string())
}

/// # Errors
///
/// Will return `Err` if the group size is not a positive integer
pub fn check_group_size(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(size) if size >= 1 => Ok(size),
        _ => Err(format!("The group size '{value}' must be a whole number of at least 1.")),
    }
}

/// # Errors
///
/// Will return `Err` if the basis is neither course nor playing
pub fn check_basis(value: &str) -> Result<HandicapBasis, String> {
    value.parse()
}

/// # Errors
///
/// Will return `Err` if the value is not HH:MM
pub fn check_tee_time(value: &str) -> Result<NaiveTime, String> {
    parse_tee_time(value).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowance_accepts_fraction_or_percent() {
        assert_eq!(check_allowance("0.9").map(Allowance::fraction), Ok(0.9));
        assert_eq!(check_allowance("100").map(Allowance::fraction), Ok(1.0));
        assert!(check_allowance("ninety").is_err());
        assert!(check_allowance("-5").is_err());
        assert!(check_allowance("1.5").is_err());
        assert!(check_allowance("95.5").is_err());
        assert_eq!(check_allowance("95").map(Allowance::fraction), Ok(0.95));
    }

    #[test]
    fn group_size_must_be_positive() {
        assert_eq!(check_group_size("4"), Ok(4));
        assert!(check_group_size("0").is_err());
        assert!(check_group_size("-1").is_err());
    }
}
