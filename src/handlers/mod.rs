pub mod ussd;

pub use ussd::ussd_callback;
