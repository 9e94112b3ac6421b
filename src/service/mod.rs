pub mod notifier;

pub use notifier::{AfricasTalkingClient, NoopNotifier, Notifier};
