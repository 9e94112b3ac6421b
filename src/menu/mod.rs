//! Menu Resolver: turns an accumulated USSD input trail into the next
//! screen plus the side effects to apply.
//!
//! Resolution is pure and table-driven (`tree.rs`); callers apply the
//! returned [`Effect`]s against the store and the notifier. The resolver is
//! total: every input string maps to a screen, unknown trails included.

pub mod facilities;
pub mod tree;
pub mod vaccines;

pub use tree::{ResolveCtx, resolve};

/// Appointment provider type offered by the booking branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentKind {
    Doctor,
    Midwife,
}

impl AppointmentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentKind::Doctor => "doctor",
            AppointmentKind::Midwife => "midwife",
        }
    }
}

/// Side effect requested by a terminal screen. Record writes happen inside
/// the per-request transaction; notifications are fired after commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    BookAppointment {
        kind: AppointmentKind,
        facility: String,
    },
    SetBabyAge {
        months: u32,
    },
    Notify {
        message: String,
    },
}

/// Outcome of resolving one trail: screen text, continue/terminate flag,
/// and the effects to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    text: String,
    terminal: bool,
    effects: Vec<Effect>,
}

impl Resolved {
    /// A `CON` screen: the session continues and further input is expected.
    pub fn menu(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            terminal: false,
            effects: Vec::new(),
        }
    }

    /// An `END` screen: the gateway terminates the session.
    pub fn end(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            terminal: true,
            effects: Vec::new(),
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Messages to send through the notifier, in effect order.
    pub fn notifications(&self) -> impl Iterator<Item = &str> {
        self.effects.iter().filter_map(|e| match e {
            Effect::Notify { message } => Some(message.as_str()),
            _ => None,
        })
    }

    /// Wire form expected by the USSD gateway.
    pub fn render(&self) -> String {
        let prefix = if self.terminal { "END" } else { "CON" };
        format!("{} {}", prefix, self.text)
    }
}
