//! Command handler registry
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Case-insensitive lookup and ordered handler list for help
//! - 1.0.0: Initial implementation for handler dispatch

use log::warn;
use std::collections::HashMap;
use std::sync::Arc;

use super::handler::TextCommandHandler;

/// Registry mapping command keywords to handlers
///
/// Multiple keywords can map to the same handler if they share logic.
///
/// # Example
///
/// ```ignore
/// let mut registry = CommandRegistry::new();
/// registry.register(Arc::new(DeadlineHandler));
///
/// if let Some(handler) = registry.get("ADDHW") {
///     handler.handle(ctx, &invocation).await?;
/// }
/// ```
#[derive(Clone, Default)]
pub struct CommandRegistry {
    handlers: HashMap<&'static str, Arc<dyn TextCommandHandler>>,
    order: Vec<Arc<dyn TextCommandHandler>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for its declared keywords
    ///
    /// A keyword already claimed by another handler is reassigned to the
    /// newer one, with a warning.
    pub fn register(&mut self, handler: Arc<dyn TextCommandHandler>) {
        for name in handler.command_names() {
            if self.handlers.insert(*name, Arc::clone(&handler)).is_some() {
                warn!("Command '{name}' registered twice; keeping the latest handler");
            }
        }
        self.order.push(handler);
    }

    /// Look up the handler for a keyword, ignoring case
    pub fn get(&self, name: &str) -> Option<Arc<dyn TextCommandHandler>> {
        self.handlers.get(name.to_lowercase().as_str()).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of registered keywords (not handlers)
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Handlers in registration order
    pub fn handlers(&self) -> impl Iterator<Item = &Arc<dyn TextCommandHandler>> {
        self.order.iter()
    }
}
