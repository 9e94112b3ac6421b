//! Declarative route table for the USSD menu.
//!
//! Each route pairs a typed segment pattern with a screen handler. Patterns
//! match the full trail, segment by segment; free-text and numeric captures
//! are forwarded to the handler in order. The first matching route wins, and
//! anything unmatched falls through to the invalid-option terminal screen,
//! so resolution is total over all input strings.

use crate::db::models::VaccineScheduleEntry;
use crate::menu::facilities::{self, MIDWIVES};
use crate::menu::vaccines;
use crate::menu::{AppointmentKind, Effect, Resolved};
use crate::types::Trail;

/// Read-only data the resolver needs beyond the trail itself.
pub struct ResolveCtx<'a> {
    pub schedule: &'a [VaccineScheduleEntry],
}

#[derive(Debug, Clone, Copy)]
enum Seg {
    /// Must equal this keystroke exactly.
    Lit(&'static str),
    /// Any non-empty free-typed segment (captured).
    Text,
    /// A non-empty all-digit segment (captured).
    Num,
}

type Handler = fn(&[&str], &ResolveCtx) -> Resolved;

struct Route {
    pattern: &'static [Seg],
    handler: Handler,
}

const ROUTES: &[Route] = &[
    Route { pattern: &[], handler: main_menu },
    Route { pattern: &[Seg::Lit("1")], handler: appointment_menu },
    Route { pattern: &[Seg::Lit("1"), Seg::Lit("1")], handler: county_prompt },
    Route {
        pattern: &[Seg::Lit("1"), Seg::Lit("1"), Seg::Text],
        handler: hospital_list,
    },
    Route {
        pattern: &[Seg::Lit("1"), Seg::Lit("1"), Seg::Text, Seg::Num],
        handler: book_doctor,
    },
    Route { pattern: &[Seg::Lit("1"), Seg::Lit("2")], handler: midwife_list },
    Route {
        pattern: &[Seg::Lit("1"), Seg::Lit("2"), Seg::Num],
        handler: book_midwife,
    },
    Route { pattern: &[Seg::Lit("2")], handler: vaccine_menu },
    Route { pattern: &[Seg::Lit("2"), Seg::Lit("1")], handler: vaccine_schedule },
    Route { pattern: &[Seg::Lit("2"), Seg::Lit("2")], handler: age_prompt },
    Route {
        pattern: &[Seg::Lit("2"), Seg::Lit("2"), Seg::Num],
        handler: age_recommendation,
    },
    Route { pattern: &[Seg::Lit("3")], handler: emergency_menu },
    Route { pattern: &[Seg::Lit("3"), Seg::Lit("1")], handler: emergency_doctor },
    Route { pattern: &[Seg::Lit("3"), Seg::Lit("2")], handler: emergency_midwife },
];

const INVALID_OPTION: &str = "Invalid option. Please try again.";

/// Resolve a trail to its screen. Never fails; unknown trails get the fixed
/// invalid-option terminal screen.
pub fn resolve(trail: &Trail, ctx: &ResolveCtx) -> Resolved {
    let segments = trail.segments();
    for route in ROUTES {
        if let Some(captures) = match_pattern(route.pattern, &segments) {
            return (route.handler)(&captures, ctx);
        }
    }
    Resolved::end(INVALID_OPTION)
}

fn match_pattern<'a>(pattern: &[Seg], segments: &[&'a str]) -> Option<Vec<&'a str>> {
    if pattern.len() != segments.len() {
        return None;
    }
    let mut captures = Vec::new();
    for (seg, input) in pattern.iter().zip(segments) {
        match seg {
            Seg::Lit(lit) => {
                if input != lit {
                    return None;
                }
            }
            Seg::Text => {
                if input.trim().is_empty() {
                    return None;
                }
                captures.push(*input);
            }
            Seg::Num => {
                if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                captures.push(*input);
            }
        }
    }
    Some(captures)
}

/// 1-based menu choice to an index. `None` for zero or overflow.
fn parse_choice(digits: &str) -> Option<usize> {
    let n: usize = digits.parse().ok()?;
    n.checked_sub(1)
}

fn main_menu(_: &[&str], _: &ResolveCtx) -> Resolved {
    Resolved::menu(
        "Welcome to Maternal Care\n\
         1. Schedule Appointment\n\
         2. Vaccine Rotation\n\
         3. Emergency Contacts",
    )
}

fn appointment_menu(_: &[&str], _: &ResolveCtx) -> Resolved {
    Resolved::menu("Schedule Appointment\n1. Book Doctor\n2. Book Midwife")
}

fn county_prompt(_: &[&str], _: &ResolveCtx) -> Resolved {
    Resolved::menu("Please indicate your county (e.g., Nairobi, Kisumu)")
}

fn hospital_list(captures: &[&str], _: &ResolveCtx) -> Resolved {
    match facilities::hospitals_for(captures[0]) {
        Some(hospitals) => {
            let mut text = String::from("Available Hospitals:");
            for (i, hospital) in hospitals.iter().enumerate() {
                text.push_str(&format!("\n{}. {}", i + 1, hospital));
            }
            Resolved::menu(text)
        }
        None => Resolved::end("No hospitals found for the given county."),
    }
}

fn book_doctor(captures: &[&str], _: &ResolveCtx) -> Resolved {
    let hospital = facilities::hospitals_for(captures[0])
        .and_then(|hospitals| parse_choice(captures[1]).and_then(|i| hospitals.get(i)));
    match hospital {
        Some(hospital) => Resolved::end(format!(
            "Your appointment with a doctor at {hospital} has been booked. \
             You will receive confirmation via SMS."
        ))
        .with_effect(Effect::BookAppointment {
            kind: AppointmentKind::Doctor,
            facility: hospital.to_string(),
        })
        .with_effect(Effect::Notify {
            message: format!("Appointment booked with a doctor at {hospital}."),
        }),
        None => Resolved::end("Invalid hospital choice."),
    }
}

fn midwife_list(_: &[&str], _: &ResolveCtx) -> Resolved {
    let mut text = String::from("Available Midwives");
    for (i, midwife) in MIDWIVES.iter().enumerate() {
        text.push_str(&format!(
            "\n{}. {} ({} deliveries)",
            i + 1,
            midwife.name,
            midwife.deliveries
        ));
    }
    Resolved::menu(text)
}

fn book_midwife(captures: &[&str], _: &ResolveCtx) -> Resolved {
    match parse_choice(captures[0]).and_then(|i| MIDWIVES.get(i)) {
        Some(midwife) => Resolved::end(
            "Your appointment with a midwife has been booked. \
             You will receive confirmation via SMS.",
        )
        .with_effect(Effect::BookAppointment {
            kind: AppointmentKind::Midwife,
            facility: midwife.name.to_string(),
        })
        .with_effect(Effect::Notify {
            message: format!("Appointment booked with midwife {}.", midwife.name),
        }),
        None => Resolved::end("Invalid midwife choice."),
    }
}

fn vaccine_menu(_: &[&str], _: &ResolveCtx) -> Resolved {
    Resolved::menu("Vaccine Rotation\n1. Baby's Vaccine Schedule\n2. Set Baby Age")
}

fn vaccine_schedule(_: &[&str], ctx: &ResolveCtx) -> Resolved {
    let mut text = String::from("Baby's Vaccines:");
    for entry in ctx.schedule {
        text.push_str(&format!("\n{}: {}", entry.age_label, entry.vaccines));
    }
    Resolved::end(text)
}

fn age_prompt(_: &[&str], _: &ResolveCtx) -> Resolved {
    Resolved::menu("Please enter your baby's age in months:")
}

fn age_recommendation(captures: &[&str], _: &ResolveCtx) -> Resolved {
    let Ok(age_months) = captures[0].parse::<u32>() else {
        return Resolved::end(INVALID_OPTION);
    };
    Resolved::end(vaccines::recommendation(age_months))
        .with_effect(Effect::SetBabyAge { months: age_months })
        .with_effect(Effect::Notify {
            message: format!(
                "Reminder: Next vaccine due for your baby in {} months.",
                vaccines::reminder_months(age_months)
            ),
        })
}

fn emergency_menu(_: &[&str], _: &ResolveCtx) -> Resolved {
    Resolved::menu("Emergency Contacts\n1. Hospital\n2. Midwife")
}

fn emergency_doctor(_: &[&str], _: &ResolveCtx) -> Resolved {
    Resolved::end(facilities::ON_CALL_DOCTOR).with_effect(Effect::Notify {
        message: facilities::ON_CALL_DOCTOR.to_string(),
    })
}

fn emergency_midwife(_: &[&str], _: &ResolveCtx) -> Resolved {
    Resolved::end(facilities::ON_CALL_MIDWIFE).with_effect(Effect::Notify {
        message: facilities::ON_CALL_MIDWIFE.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx_with_schedule(schedule: &[VaccineScheduleEntry]) -> ResolveCtx<'_> {
        ResolveCtx { schedule }
    }

    fn resolve_text(text: &str) -> Resolved {
        resolve(&Trail::parse(text), &ctx_with_schedule(&[]))
    }

    #[test]
    fn root_shows_main_menu() {
        let resolved = resolve_text("");
        assert!(!resolved.is_terminal());
        let rendered = resolved.render();
        assert!(rendered.starts_with("CON Welcome to Maternal Care"));
        assert!(rendered.contains("1. Schedule Appointment"));
        assert!(rendered.contains("2. Vaccine Rotation"));
        assert!(rendered.contains("3. Emergency Contacts"));
    }

    #[test]
    fn unknown_trails_end_with_invalid_option() {
        for text in ["9", "1*7", "abc", "1**2", "2*2*x", "1*1*Nairobi*2*9", "*"] {
            let resolved = resolve_text(text);
            assert!(resolved.is_terminal(), "trail {text:?} should terminate");
            assert!(
                resolved.render().starts_with("END Invalid option"),
                "trail {text:?} rendered {:?}",
                resolved.render()
            );
            assert!(resolved.effects().is_empty());
        }
    }

    #[test]
    fn doctor_booking_produces_record_and_notification() {
        let resolved = resolve_text("1*1*Nairobi*2");
        assert!(resolved.is_terminal());
        assert!(resolved.text().contains("Aga Khan Hospital"));
        assert_eq!(
            resolved.effects()[0],
            Effect::BookAppointment {
                kind: AppointmentKind::Doctor,
                facility: "Aga Khan Hospital".to_string(),
            }
        );
        assert_eq!(resolved.notifications().count(), 1);
    }

    #[test]
    fn out_of_range_hospital_choice_is_rejected() {
        let resolved = resolve_text("1*1*Nairobi*9");
        assert_eq!(resolved.render(), "END Invalid hospital choice.");
        assert!(resolved.effects().is_empty());

        let zero = resolve_text("1*1*Nairobi*0");
        assert_eq!(zero.render(), "END Invalid hospital choice.");
    }

    #[test]
    fn unknown_county_ends_the_session() {
        let resolved = resolve_text("1*1*Atlantis");
        assert_eq!(resolved.render(), "END No hospitals found for the given county.");
    }

    #[test]
    fn midwife_booking_uses_roster_name_as_facility() {
        let resolved = resolve_text("1*2*2");
        assert!(resolved.is_terminal());
        assert_eq!(
            resolved.effects()[0],
            Effect::BookAppointment {
                kind: AppointmentKind::Midwife,
                facility: "Mary J".to_string(),
            }
        );
        assert_eq!(resolved.notifications().count(), 1);

        let invalid = resolve_text("1*2*5");
        assert_eq!(invalid.render(), "END Invalid midwife choice.");
    }

    #[test]
    fn age_buckets_match_the_schedule() {
        let cases = [
            ("2*2*0", "BCG, Hepatitis B at Birth"),
            ("2*2*3", "Polio, DPT, Hib at 6 weeks"),
            ("2*2*8", "MMR, Varicella at 12 months"),
            ("2*2*15", "No further vaccines due"),
        ];
        for (trail, expected) in cases {
            let resolved = resolve_text(trail);
            assert!(resolved.is_terminal());
            assert!(
                resolved.text().contains(expected),
                "trail {trail:?} rendered {:?}",
                resolved.text()
            );
        }
    }

    #[test]
    fn age_entry_stores_age_and_sends_reminder() {
        let resolved = resolve_text("2*2*3");
        assert_eq!(resolved.effects()[0], Effect::SetBabyAge { months: 3 });
        let reminders: Vec<_> = resolved.notifications().collect();
        assert_eq!(reminders, vec!["Reminder: Next vaccine due for your baby in 3 months."]);
    }

    #[test]
    fn schedule_listing_comes_from_the_store_rows() {
        let schedule = vec![
            VaccineScheduleEntry {
                id: 1,
                recipient: "baby".to_string(),
                age_label: "At Birth".to_string(),
                vaccines: "BCG, Hepatitis B".to_string(),
            },
            VaccineScheduleEntry {
                id: 2,
                recipient: "baby".to_string(),
                age_label: "6 weeks".to_string(),
                vaccines: "Polio, DPT, Hib".to_string(),
            },
        ];
        let resolved = resolve(&Trail::parse("2*1"), &ctx_with_schedule(&schedule));
        assert!(resolved.is_terminal());
        assert!(resolved.text().contains("At Birth: BCG, Hepatitis B"));
        assert!(resolved.text().contains("6 weeks: Polio, DPT, Hib"));
    }

    #[test]
    fn emergency_leaves_echo_over_sms() {
        let resolved = resolve_text("3*1");
        assert!(resolved.is_terminal());
        assert!(resolved.text().contains("Dr. Vamos"));
        assert_eq!(resolved.notifications().count(), 1);

        let midwife = resolve_text("3*2");
        assert_eq!(midwife.notifications().count(), 1);
    }

    #[test]
    fn menus_carry_no_effects() {
        for text in ["", "1", "1*1", "1*2", "2", "2*2", "3"] {
            let resolved = resolve_text(text);
            assert!(!resolved.is_terminal(), "trail {text:?} should continue");
            assert!(resolved.effects().is_empty());
        }
    }
}
