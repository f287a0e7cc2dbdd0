//! Greeting service: the "act" target of the greeting scenarios.

use std::cell::RefCell;
use std::rc::Rc;

use testrig::log::LogService;

use crate::ServiceError;

/// Produce greetings, logging each one through the shared log dependency.
pub struct GreetingService {
    log: Rc<RefCell<dyn LogService>>,
}

impl GreetingService {
    /// Construct the service from the context's logging dependency.
    pub fn new(log: Rc<RefCell<dyn LogService>>) -> Self {
        Self { log }
    }

    /// Return `"Hello, {name}!"`.
    ///
    /// ## Errors
    /// - [`ServiceError::EmptyName`] if `name` is empty or all whitespace.
    pub fn greet(&self, name: &str) -> Result<String, ServiceError> {
        if name.trim().is_empty() {
            return Err(ServiceError::EmptyName);
        }
        let greeting = format!("Hello, {name}!");
        self.log.borrow_mut().record(&greeting);
        Ok(greeting)
    }
}
