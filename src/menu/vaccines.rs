//! Age-bracket vaccine recommendations, derived at request time and never
//! stored.

/// Recommendation bucket for a baby age given in months.
pub fn recommendation(age_months: u32) -> &'static str {
    match age_months {
        0 => "Next vaccine due: BCG, Hepatitis B at Birth.",
        1..=5 => "Next vaccine due: Polio, DPT, Hib at 6 weeks.",
        6..=11 => "Next vaccine due: MMR, Varicella at 12 months.",
        _ => "No further vaccines due at this time.",
    }
}

/// Months until the 6-month reminder point, floored at zero.
pub fn reminder_months(age_months: u32) -> u32 {
    6u32.saturating_sub(age_months)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_boundaries() {
        assert!(recommendation(0).contains("BCG"));
        assert!(recommendation(1).contains("6 weeks"));
        assert!(recommendation(5).contains("6 weeks"));
        assert!(recommendation(6).contains("12 months"));
        assert!(recommendation(11).contains("12 months"));
        assert!(recommendation(12).contains("No further vaccines"));
        assert!(recommendation(40).contains("No further vaccines"));
    }

    #[test]
    fn reminder_never_goes_negative() {
        assert_eq!(reminder_months(2), 4);
        assert_eq!(reminder_months(6), 0);
        assert_eq!(reminder_months(15), 0);
    }
}
