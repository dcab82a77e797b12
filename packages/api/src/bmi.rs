//! Body Mass Index derived from the profile's weight (kg) and height (cm).

/// `weight / (height_m)^2`, rounded to one decimal.
///
/// Returns `None` when either measurement is non-finite or not positive.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if !(weight_kg.is_finite() && height_cm.is_finite()) || weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    Some((bmi * 10.0).round() / 10.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// CSS modifier used by the BMI badge.
    pub fn tone(self) -> &'static str {
        match self {
            Self::Normal => "good",
            Self::Underweight | Self::Overweight => "warn",
            Self::Obese => "bad",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_example() {
        let bmi = compute_bmi(70.0, 170.0).unwrap();
        assert_eq!(bmi, 24.2);
        assert_eq!(BmiCategory::from_bmi(bmi), BmiCategory::Normal);
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.9), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.9), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_category_uses_rounded_value() {
        // 24.96 rounds to 25.0
        let bmi = compute_bmi(72.13, 170.0).unwrap();
        assert_eq!(bmi, 25.0);
        assert_eq!(BmiCategory::from_bmi(bmi), BmiCategory::Overweight);
    }

    #[test]
    fn test_rejects_missing_measurements() {
        assert_eq!(compute_bmi(0.0, 170.0), None);
        assert_eq!(compute_bmi(70.0, 0.0), None);
        assert_eq!(compute_bmi(-5.0, 170.0), None);
        assert_eq!(compute_bmi(f64::NAN, 170.0), None);
    }
}
