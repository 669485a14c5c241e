//! SQL DDL for initializing the user store.

/// SQLite schema with:
/// - `users`: `id` INTEGER PRIMARY KEY AUTOINCREMENT, `name` and `age` required
/// - `comments`: owned by a user through a nullable `user_id` foreign key
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    age INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS comments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    text TEXT NOT NULL,
    user_id INTEGER,
    FOREIGN KEY(user_id) REFERENCES users(id)
);
"#;

/// Individual statements of [`SQLITE_INIT`]; `sqlx::query` runs one at a time.
pub fn statements() -> impl Iterator<Item = &'static str> {
    SQLITE_INIT
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
