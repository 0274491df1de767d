//! Internal delegation
//!
//! No callback here: [`get_user`] calls [`greeting_handler`] directly.

use crate::console::Console;
use std::io;

const USER_NAME: &str = "Sarah";

/// Build a welcome message for `name`
pub fn greeting_handler(name: &str) -> String {
    format!("Welcome, {}!", name)
}

/// Greet the built-in user and log the greeting
pub fn get_user(console: &mut dyn Console) -> io::Result<()> {
    let greeting = greeting_handler(USER_NAME);
    console.log(&greeting)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;

    #[test]
    fn test_greeting_handler() {
        assert_eq!(greeting_handler("Tom"), "Welcome, Tom!");
    }

    #[test]
    fn test_get_user_logs_welcome() {
        let mut transcript = Transcript::new();
        get_user(&mut transcript).unwrap();
        assert_eq!(transcript.lines(), ["Welcome, Sarah!"]);
    }
}
