pub mod ussd;

pub use ussd::{Trail, UssdRequest};
