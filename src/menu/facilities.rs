//! Static reference data for the booking branch: county hospital tables,
//! the midwife roster, and on-call emergency contacts.

pub struct County {
    pub name: &'static str,
    pub hospitals: &'static [&'static str],
}

pub const COUNTIES: &[County] = &[
    County {
        name: "Nairobi",
        hospitals: &["Nairobi Hospital", "Aga Khan Hospital", "Karen Hospital"],
    },
    County {
        name: "Kisumu",
        hospitals: &[
            "Kisumu County Hospital",
            "Jaramogi Oginga Odinga Teaching and Referral Hospital",
        ],
    },
];

/// Hospitals for a county, matched case-insensitively since the county is
/// free-typed by the subscriber.
pub fn hospitals_for(county: &str) -> Option<&'static [&'static str]> {
    COUNTIES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(county.trim()))
        .map(|c| c.hospitals)
}

pub struct Midwife {
    pub name: &'static str,
    pub deliveries: u32,
}

pub const MIDWIVES: &[Midwife] = &[
    Midwife { name: "Ashley W", deliveries: 10 },
    Midwife { name: "Mary J", deliveries: 28 },
    Midwife { name: "John M", deliveries: 15 },
    Midwife { name: "Veronica S", deliveries: 20 },
];

pub const ON_CALL_DOCTOR: &str =
    "Doctor on call is Dr. Vamos (Gynecologist). Contact: +25471234567";
pub const ON_CALL_MIDWIFE: &str = "Midwife on call is Mary J. Contact: +25476543210";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn county_lookup_is_case_insensitive() {
        assert!(hospitals_for("nairobi").is_some());
        assert!(hospitals_for(" KISUMU ").is_some());
        assert!(hospitals_for("Mombasa").is_none());
    }

    #[test]
    fn nairobi_has_three_hospitals() {
        assert_eq!(hospitals_for("Nairobi").map(<[_]>::len), Some(3));
    }
}
