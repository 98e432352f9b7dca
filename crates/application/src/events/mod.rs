//! Cross-tree auth notifications.

mod broadcaster;

pub use broadcaster::{AuthEventBus, SubscriptionId};
