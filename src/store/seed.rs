use crate::model::User;

/// The records every server instance starts with, in listing order.
pub fn seed_users() -> Vec<User> {
    vec![
        User::new("1", "John Doe", "john.doe@example.com").with_age(30),
        User::new("2", "Jane Smith", "jane.smith@example.com").with_age(25),
        User::new("3", "Bob Johnson", "bob.johnson@example.com").with_age(35),
        User::new("4", "Alice Brown", "alice.brown@example.com"),
        User::new("5", "Charlie Wilson", "charlie.wilson@example.com").with_age(28),
    ]
}
