//! User service: the "act" target of the login scenarios.

use std::cell::RefCell;
use std::rc::Rc;

use testrig::log::LogService;

/// Handle login attempts, logging each one through the shared log dependency.
pub struct UserService {
    log: Rc<RefCell<dyn LogService>>,
}

impl UserService {
    /// Construct the service from the context's logging dependency.
    pub fn new(log: Rc<RefCell<dyn LogService>>) -> Self {
        Self { log }
    }

    /// Attempt a login. Always succeeds with `"ok"`; credentials are not
    /// checked (demo behavior).
    pub fn login(&self, username: &str, _password: &str) -> String {
        self.log
            .borrow_mut()
            .record(&format!("login attempt for '{username}'"));
        "ok".to_owned()
    }
}
