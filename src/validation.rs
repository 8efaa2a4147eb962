// Validation utilities module
// Custom validation functions for domain-specific rules

use validator::ValidationError;

/// Validates that a derived college rating is between 0.0 and 5.0
pub fn validate_rating_range(rating: f64) -> Result<(), ValidationError> {
    if !(0.0..=5.0).contains(&rating) {
        Err(ValidationError::new("rating_out_of_range"))
    } else {
        Ok(())
    }
}

/// Validates that a tuition fee is not negative
pub fn validate_tuition_fee(fee: f64) -> Result<(), ValidationError> {
    if fee < 0.0 {
        Err(ValidationError::new("tuition_fee_must_not_be_negative"))
    } else {
        Ok(())
    }
}

/// Validates that an establishment year is plausible
pub fn validate_established_year(year: i32) -> Result<(), ValidationError> {
    if !(800..=2100).contains(&year) {
        Err(ValidationError::new("established_year_out_of_range"))
    } else {
        Ok(())
    }
}

/// Boundary checks shared by the college create and update handlers.
/// Present fields are checked; omitted ones pass.
pub fn check_college_constraints(
    rating: Option<f64>,
    established: Option<i32>,
    tuition_fee: Option<f64>,
) -> Result<(), String> {
    if let Some(rating) = rating {
        validate_rating_range(rating)
            .map_err(|_| "Rating must be between 0 and 5".to_string())?;
    }
    if let Some(year) = established {
        validate_established_year(year)
            .map_err(|_| "Established year is out of range".to_string())?;
    }
    if let Some(fee) = tuition_fee {
        validate_tuition_fee(fee).map_err(|_| "Tuition fee must not be negative".to_string())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(validate_rating_range(0.0).is_ok());
        assert!(validate_rating_range(5.0).is_ok());
        assert!(validate_rating_range(4.8).is_ok());
        assert!(validate_rating_range(-0.1).is_err());
        assert!(validate_rating_range(5.1).is_err());
    }

    #[test]
    fn test_tuition_fee_bounds() {
        assert!(validate_tuition_fee(0.0).is_ok());
        assert!(validate_tuition_fee(55000.0).is_ok());
        assert!(validate_tuition_fee(-1.0).is_err());
    }

    #[test]
    fn test_established_year_bounds() {
        assert!(validate_established_year(1096).is_ok()); // Oxford
        assert!(validate_established_year(2026).is_ok());
        assert!(validate_established_year(0).is_err());
        assert!(validate_established_year(3000).is_err());
    }

    #[test]
    fn test_college_constraints_skip_omitted_fields() {
        assert!(check_college_constraints(None, None, None).is_ok());
        assert!(check_college_constraints(Some(4.5), Some(1885), Some(55000.0)).is_ok());
    }

    #[test]
    fn test_college_constraints_report_the_offending_field() {
        let err = check_college_constraints(Some(5.5), None, None).unwrap_err();
        assert_eq!(err, "Rating must be between 0 and 5");

        let err = check_college_constraints(None, None, Some(-1.0)).unwrap_err();
        assert_eq!(err, "Tuition fee must not be negative");
    }
}
