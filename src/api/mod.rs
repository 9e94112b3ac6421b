pub mod africastalking;

pub use africastalking::{AfricasTalkingApi, SmsAck};
