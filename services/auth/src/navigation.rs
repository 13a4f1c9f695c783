//! Navigation side effects of login and logout

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{info, warn};

/// Moves the UI to another route
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// Forwards navigation requests to whoever owns the router
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    sender: UnboundedSender<String>,
}

impl ChannelNavigator {
    /// Create a navigator and the receiving end for the router
    pub fn new() -> (Self, UnboundedReceiver<String>) {
        let (sender, receiver) = unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, route: &str) {
        info!("Navigating to {}", route);
        if self.sender.send(route.to_string()).is_err() {
            warn!("Navigation to {} dropped, router is gone", route);
        }
    }
}
