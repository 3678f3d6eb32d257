// Copyright (c) 2025 Offertory Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashSet;

use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, params};

use crate::error::LedgerError;
use crate::models::{Entry, EntryKind, Person, Snapshot};
use crate::vocab;

/// Single point of access to the persisted ledger. The aggregation engine
/// never touches storage; it consumes a `Snapshot` read from here.
///
/// The backing is whatever `Connection` the caller hands in: a file DB in
/// production (`db::open_or_init`), in-memory for tests.
pub struct EntityStore {
    conn: Connection,
}

impl EntityStore {
    pub fn open(conn: Connection) -> Result<Self, LedgerError> {
        init_schema(&conn)?;
        Ok(EntityStore { conn })
    }

    pub fn in_memory() -> Result<Self, LedgerError> {
        Self::open(Connection::open_in_memory()?)
    }

    pub fn snapshot(&self) -> Result<Snapshot, LedgerError> {
        Ok(Snapshot {
            people: self.people()?,
            entries: self.entries()?,
            expense_categories: self.expense_categories()?,
        })
    }

    pub fn people(&self) -> Result<Vec<Person>, LedgerError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, position FROM people ORDER BY id")?;
        let rows = stmt.query_map([], |r| {
            Ok(Person {
                id: r.get(0)?,
                name: r.get(1)?,
                position: r.get(2)?,
            })
        })?;
        let mut people = Vec::new();
        for row in rows {
            people.push(row?);
        }
        Ok(people)
    }

    fn entries(&self) -> Result<Vec<Entry>, LedgerError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, kind, date, category, amount, person_id, note FROM entries ORDER BY id",
        )?;
        let rows = stmt.query_map([], |r| {
            Ok((
                r.get::<_, i64>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, NaiveDate>(2)?,
                r.get::<_, String>(3)?,
                r.get::<_, i64>(4)?,
                r.get::<_, Option<i64>>(5)?,
                r.get::<_, Option<String>>(6)?,
            ))
        })?;
        let mut entries = Vec::new();
        for row in rows {
            let (id, kind, date, category, amount, person_id, note) = row?;
            entries.push(Entry {
                id,
                kind: kind.parse()?,
                date,
                category,
                amount,
                person_id,
                note,
            });
        }
        Ok(entries)
    }

    pub fn add_person(&self, name: &str, position: &str) -> Result<i64, LedgerError> {
        if !vocab::is_position(position) {
            return Err(LedgerError::UnknownPosition(position.to_string()));
        }
        self.conn.execute(
            "INSERT INTO people(name, position) VALUES (?1, ?2)",
            params![name, position],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Edit name and/or position; everything else about a person is fixed.
    pub fn update_person(
        &self,
        id: i64,
        name: Option<&str>,
        position: Option<&str>,
    ) -> Result<(), LedgerError> {
        if let Some(p) = position {
            if !vocab::is_position(p) {
                return Err(LedgerError::UnknownPosition(p.to_string()));
            }
        }
        let existing: Option<(String, String)> = self
            .conn
            .query_row(
                "SELECT name, position FROM people WHERE id=?1",
                params![id],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .optional()?;
        match existing {
            Some((cur_name, cur_position)) => {
                self.conn.execute(
                    "UPDATE people SET name=?1, position=?2 WHERE id=?3",
                    params![
                        name.unwrap_or(&cur_name),
                        position.unwrap_or(&cur_position),
                        id
                    ],
                )?;
                Ok(())
            }
            None => Err(LedgerError::UnknownPerson(id)),
        }
    }

    /// Remove a person from the roster. Their entries stay behind with a
    /// dangling `person_id` that resolves to the `unspecified` sentinel.
    pub fn remove_person(&self, id: i64) -> Result<(), LedgerError> {
        let affected = self
            .conn
            .execute("DELETE FROM people WHERE id=?1", params![id])?;
        if affected == 0 {
            return Err(LedgerError::UnknownPerson(id));
        }
        Ok(())
    }

    pub fn add_entry(
        &self,
        kind: EntryKind,
        date: NaiveDate,
        category: &str,
        amount: i64,
        person_id: Option<i64>,
        note: Option<&str>,
    ) -> Result<i64, LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::NonPositiveAmount(amount));
        }
        match kind {
            EntryKind::Income => {
                if !vocab::is_income_category(category) {
                    return Err(LedgerError::UnknownIncomeCategory(category.to_string()));
                }
            }
            EntryKind::Expense => {
                if !self.expense_categories()?.iter().any(|c| c == category) {
                    return Err(LedgerError::UnknownExpenseCategory(category.to_string()));
                }
            }
        }
        if let Some(pid) = person_id {
            let known: Option<i64> = self
                .conn
                .query_row("SELECT id FROM people WHERE id=?1", params![pid], |r| {
                    r.get(0)
                })
                .optional()?;
            if known.is_none() {
                return Err(LedgerError::UnknownPerson(pid));
            }
        }
        self.conn.execute(
            "INSERT INTO entries(kind, date, category, amount, person_id, note)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![kind.as_str(), date, category, amount, person_id, note],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn remove_entry(&self, id: i64) -> Result<(), LedgerError> {
        let affected = self
            .conn
            .execute("DELETE FROM entries WHERE id=?1", params![id])?;
        if affected == 0 {
            return Err(LedgerError::UnknownEntry(id));
        }
        Ok(())
    }

    /// Expense vocabulary in append order.
    pub fn expense_categories(&self) -> Result<Vec<String>, LedgerError> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM expense_categories ORDER BY id")?;
        let rows = stmt.query_map([], |r| r.get::<_, String>(0))?;
        let mut names = Vec::new();
        for row in rows {
            names.push(row?);
        }
        Ok(names)
    }

    pub fn add_expense_category(&self, name: &str) -> Result<(), LedgerError> {
        let exists: Option<i64> = self
            .conn
            .query_row(
                "SELECT id FROM expense_categories WHERE name=?1",
                params![name],
                |r| r.get(0),
            )
            .optional()?;
        if exists.is_some() {
            return Err(LedgerError::DuplicateCategory(name.to_string()));
        }
        self.conn.execute(
            "INSERT INTO expense_categories(name) VALUES (?1)",
            params![name],
        )?;
        Ok(())
    }

    /// Wholesale replacement of every collection, used by import. Applies the
    /// fresh-data validity rules (unique ids, positive amounts, no duplicate
    /// expense categories) but accepts any category/position vocabulary.
    pub fn replace_all(&mut self, snapshot: &Snapshot) -> Result<(), LedgerError> {
        let mut ids = HashSet::new();
        for p in &snapshot.people {
            if !ids.insert(p.id) {
                return Err(LedgerError::DuplicateId {
                    what: "person",
                    id: p.id,
                });
            }
        }
        let mut ids = HashSet::new();
        for e in &snapshot.entries {
            if !ids.insert(e.id) {
                return Err(LedgerError::DuplicateId {
                    what: "entry",
                    id: e.id,
                });
            }
            if e.amount <= 0 {
                return Err(LedgerError::NonPositiveAmount(e.amount));
            }
        }
        let mut names = HashSet::new();
        for c in &snapshot.expense_categories {
            if !names.insert(c.as_str()) {
                return Err(LedgerError::DuplicateCategory(c.clone()));
            }
        }

        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM entries", [])?;
        tx.execute("DELETE FROM people", [])?;
        tx.execute("DELETE FROM expense_categories", [])?;
        for p in &snapshot.people {
            tx.execute(
                "INSERT INTO people(id, name, position) VALUES (?1, ?2, ?3)",
                params![p.id, p.name, p.position],
            )?;
        }
        for e in &snapshot.entries {
            tx.execute(
                "INSERT INTO entries(id, kind, date, category, amount, person_id, note)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    e.id,
                    e.kind.as_str(),
                    e.date,
                    e.category,
                    e.amount,
                    e.person_id,
                    e.note
                ],
            )?;
        }
        for c in &snapshot.expense_categories {
            tx.execute(
                "INSERT INTO expense_categories(name) VALUES (?1)",
                params![c],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    pub fn setting(&self, key: &str) -> Result<Option<String>, LedgerError> {
        let v = self
            .conn
            .query_row("SELECT value FROM settings WHERE key=?1", params![key], |r| {
                r.get(0)
            })
            .optional()?;
        Ok(v)
    }

    pub fn set_setting(&self, key: &str, value: &str) -> Result<(), LedgerError> {
        self.conn.execute(
            "INSERT INTO settings(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

fn init_schema(conn: &Connection) -> Result<(), LedgerError> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS people(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        position TEXT NOT NULL
    );

    -- person_id carries no foreign key: removing a person must leave their
    -- entries behind, dangling.
    CREATE TABLE IF NOT EXISTS entries(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        kind TEXT NOT NULL CHECK(kind IN ('income','expense')),
        date TEXT NOT NULL,
        category TEXT NOT NULL,
        amount INTEGER NOT NULL CHECK(amount > 0),
        person_id INTEGER,
        note TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date);

    CREATE TABLE IF NOT EXISTS expense_categories(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE
    );
    "#,
    )?;
    Ok(())
}
