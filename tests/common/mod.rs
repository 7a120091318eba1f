#![allow(dead_code)]

use resql::prelude::*;

/// Article resource used across the integration tests.
pub fn articles() -> ResourceSelectBuilder {
    ResourceSelectBuilder::new(
        "articles",
        MapTranslator::new([
            ("id", "id"),
            ("title", "title"),
            ("body", "body"),
            ("createdAt", "created_at"),
            ("updatedAt", "updated_at"),
        ]),
    )
    .default_fields(["*"])
    .allow_select_fields(["*", "id", "title", "body", "created_at"])
    .allow_sorting_by_fields(["created_at", "id"])
    .allow_filtering(
        AllowedConditions::new()
            .field("id", ["eq", "in", "gt", "lt"])
            .field("title", ["eq", "startswith"])
            .field("body", ["like", "contains"]),
    )
}

/// Creates an in-memory database with a populated `articles` table.
pub fn seeded_connection() -> rusqlite::Connection {
    let conn = rusqlite::Connection::open_in_memory().expect("open in-memory database");
    conn.execute_batch(
        "CREATE TABLE articles (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            body TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT
        );
        INSERT INTO articles (id, title, body, created_at) VALUES
            (1, 'Rust 1.0', 'memory safety without gc', '2015-05-15'),
            (2, 'Bitcoin whitepaper', 'a peer-to-peer bitcoin cash system', '2008-10-31'),
            (3, 'Bitcoin mining', 'proof of work and bitcoin incentives', '2011-02-01'),
            (4, 'Async Rust', 'futures and executors', '2019-11-07'),
            (5, 'SQLite internals', 'b-trees and pages', '2004-06-18');",
    )
    .expect("seed articles");
    conn
}
