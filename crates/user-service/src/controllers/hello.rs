//! Greeting endpoint. Stateless, infallible, and the simplest possible
//! collaborator in the system.

/// Controller for `GET /hello`.
pub struct HelloController;

impl HelloController {
    /// Returns the greeting.
    pub fn get(&self) -> &'static str {
        "Hello, DevOps World!"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_expected_message() {
        let controller = HelloController;
        let result = controller.get();
        assert_eq!("Hello, DevOps World!", result);
    }
}
