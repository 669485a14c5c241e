//! Per-operation SQL templates and their positional arguments.

use crate::db::models::User;
use crate::error::StoreError;
use sqlx::Sqlite;
use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Insert,
    Select,
    Update,
    Delete,
}

/// A single bound value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryArg {
    Integer(i64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreparedQuery {
    pub sql: &'static str,
    pub args: Vec<QueryArg>,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Insert => "insert",
            Operation::Select => "select",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "insert" => Ok(Operation::Insert),
            "select" => Ok(Operation::Select),
            "update" => Ok(Operation::Update),
            "delete" => Ok(Operation::Delete),
            _ => Err(StoreError::UnknownOperation(s.to_string())),
        }
    }
}

/// Build the statement for `op` from the fields of `user` it needs.
pub fn prepare_query(op: Operation, user: &User) -> PreparedQuery {
    match op {
        Operation::Insert => PreparedQuery {
            sql: "INSERT INTO users (name, age) VALUES (?, ?)",
            args: vec![QueryArg::Text(user.name.clone()), QueryArg::Integer(user.age)],
        },
        Operation::Select => PreparedQuery {
            sql: "SELECT id, name, age FROM users WHERE id = ? LIMIT 1",
            args: vec![QueryArg::Integer(user.id)],
        },
        Operation::Update => PreparedQuery {
            sql: "UPDATE users SET name = ?, age = ? WHERE id = ?",
            args: vec![
                QueryArg::Text(user.name.clone()),
                QueryArg::Integer(user.age),
                QueryArg::Integer(user.id),
            ],
        },
        Operation::Delete => PreparedQuery {
            sql: "DELETE FROM users WHERE id = ?",
            args: vec![QueryArg::Integer(user.id)],
        },
    }
}

impl PreparedQuery {
    /// Hand the template to sqlx with every argument bound in order.
    pub fn into_query(self) -> Query<'static, Sqlite, SqliteArguments<'static>> {
        self.args
            .into_iter()
            .fold(sqlx::query(self.sql), |q, arg| match arg {
                QueryArg::Integer(v) => q.bind(v),
                QueryArg::Text(s) => q.bind(s),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> User {
        User {
            id: 1,
            ..User::new("Ada", 30)
        }
    }

    #[test]
    fn insert_ignores_id() {
        let q = prepare_query(Operation::Insert, &ada());
        assert_eq!(q.sql, "INSERT INTO users (name, age) VALUES (?, ?)");
        assert_eq!(
            q.args,
            vec![QueryArg::Text("Ada".into()), QueryArg::Integer(30)]
        );
    }

    #[test]
    fn select_filters_by_id() {
        let q = prepare_query(Operation::Select, &ada());
        assert!(q.sql.contains("WHERE id = ?"));
        assert_eq!(q.args, vec![QueryArg::Integer(1)]);
    }

    #[test]
    fn update_binds_id_last() {
        let q = prepare_query(Operation::Update, &ada());
        assert_eq!(q.sql, "UPDATE users SET name = ?, age = ? WHERE id = ?");
        assert_eq!(q.args.last(), Some(&QueryArg::Integer(1)));
        assert_eq!(q.args.len(), 3);
    }

    #[test]
    fn placeholder_count_matches_args() {
        for op in [
            Operation::Insert,
            Operation::Select,
            Operation::Update,
            Operation::Delete,
        ] {
            let q = prepare_query(op, &ada());
            assert_eq!(q.sql.matches('?').count(), q.args.len(), "{op}");
        }
    }

    #[test]
    fn values_are_never_interpolated() {
        let user = User::new("Robert'); DROP TABLE users;--", 1);
        let q = prepare_query(Operation::Insert, &user);
        assert!(!q.sql.contains("DROP"));
        assert_eq!(q.args[0], QueryArg::Text(user.name.clone()));
    }

    #[test]
    fn operation_names_parse_case_insensitively() {
        assert_eq!("INSERT".parse::<Operation>().unwrap(), Operation::Insert);
        assert_eq!(" delete ".parse::<Operation>().unwrap(), Operation::Delete);
        assert_eq!(Operation::Update.to_string(), "update");
        let err = "upsert".parse::<Operation>().unwrap_err();
        assert!(matches!(err, StoreError::UnknownOperation(ref s) if s == "upsert"));
    }
}
