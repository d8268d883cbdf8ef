// src/common/migrations.rs
//! Database schema management

use sqlx::SqlitePool;
use std::env;
use tracing::{info, warn};

/// Run all database migrations
///
/// Tables are created if missing. Setting `RESET_DB=true` drops everything first.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let should_reset_db = env::var("RESET_DB").unwrap_or_else(|_| "false".to_string()) == "true";

    if should_reset_db {
        warn!("RESET_DB=true - dropping all tables and recreating schema");
        drop_all_tables(pool).await?;
    }

    sqlx::query("PRAGMA foreign_keys = ON").execute(pool).await?;

    create_user_tables(pool).await?;
    create_job_tables(pool).await?;
    create_application_tables(pool).await?;
    create_indexes(pool).await?;

    info!("Database migration completed");

    Ok(())
}

async fn drop_all_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Reverse dependency order
    let tables = [
        "templates",
        "applications",
        "jobs",
        "job_boards",
        "resumes",
        "profiles",
        "users",
    ];

    for table in tables {
        sqlx::query(&format!("DROP TABLE IF EXISTS {}", table))
            .execute(pool)
            .await?;
    }

    Ok(())
}

async fn create_user_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            email TEXT UNIQUE NOT NULL,
            name TEXT,
            created_at TEXT DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    // JSON columns: skills, experience, education, target_companies, target_roles
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS profiles (
            user_id TEXT PRIMARY KEY,
            phone TEXT,
            location TEXT,
            headline TEXT,
            summary TEXT,
            linkedin_url TEXT,
            portfolio_url TEXT,
            github_url TEXT,
            skills TEXT,
            experience TEXT,
            education TEXT,
            target_companies TEXT,
            target_roles TEXT,
            updated_at TEXT DEFAULT (datetime('now')),
            FOREIGN KEY(user_id) REFERENCES users(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS resumes (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            name TEXT NOT NULL,
            file_url TEXT NOT NULL,
            file_key TEXT NOT NULL,
            mime_type TEXT,
            file_size INTEGER,
            is_default INTEGER NOT NULL DEFAULT 0,
            created_at TEXT DEFAULT (datetime('now')),
            updated_at TEXT DEFAULT (datetime('now')),
            FOREIGN KEY(user_id) REFERENCES users(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_job_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS job_boards (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            slug TEXT NOT NULL UNIQUE,
            logo_url TEXT,
            website_url TEXT,
            api_endpoint TEXT,
            is_active INTEGER NOT NULL DEFAULT 1,
            success_rate INTEGER NOT NULL DEFAULT 0,
            total_applications INTEGER NOT NULL DEFAULT 0,
            created_at TEXT DEFAULT (datetime('now')),
            updated_at TEXT DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS jobs (
            id TEXT PRIMARY KEY,
            external_id TEXT,
            job_board_id TEXT,
            title TEXT NOT NULL,
            company TEXT NOT NULL,
            company_logo TEXT,
            location TEXT,
            location_type TEXT NOT NULL DEFAULT 'onsite'
                CHECK (location_type IN ('remote', 'hybrid', 'onsite')),
            salary TEXT,
            salary_min INTEGER,
            salary_max INTEGER,
            description TEXT,
            requirements TEXT,
            benefits TEXT,
            employment_type TEXT NOT NULL DEFAULT 'full-time'
                CHECK (employment_type IN ('full-time', 'part-time', 'contract', 'internship')),
            experience_level TEXT
                CHECK (experience_level IN ('entry', 'mid', 'senior', 'lead', 'executive')),
            application_url TEXT,
            posted_at TEXT,
            expires_at TEXT,
            is_active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT DEFAULT (datetime('now')),
            updated_at TEXT DEFAULT (datetime('now')),
            FOREIGN KEY(job_board_id) REFERENCES job_boards(id) ON DELETE SET NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_application_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS templates (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            name TEXT NOT NULL,
            type TEXT NOT NULL CHECK (type IN ('cover_letter', 'application_form')),
            content TEXT NOT NULL,
            variables TEXT,
            is_default INTEGER NOT NULL DEFAULT 0,
            created_at TEXT DEFAULT (datetime('now')),
            updated_at TEXT DEFAULT (datetime('now')),
            FOREIGN KEY(user_id) REFERENCES users(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS applications (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            job_id TEXT NOT NULL,
            resume_id TEXT,
            template_id TEXT,
            status TEXT NOT NULL DEFAULT 'draft' CHECK (status IN (
                'draft', 'pending', 'submitted', 'viewed',
                'interview', 'offered', 'rejected', 'withdrawn'
            )),
            cover_letter TEXT,
            custom_answers TEXT,
            applied_at TEXT,
            last_status_update TEXT,
            notes TEXT,
            created_at TEXT DEFAULT (datetime('now')),
            updated_at TEXT DEFAULT (datetime('now')),
            FOREIGN KEY(user_id) REFERENCES users(id) ON DELETE CASCADE,
            FOREIGN KEY(job_id) REFERENCES jobs(id) ON DELETE CASCADE,
            FOREIGN KEY(resume_id) REFERENCES resumes(id) ON DELETE SET NULL,
            FOREIGN KEY(template_id) REFERENCES templates(id) ON DELETE SET NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_indexes(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_resumes_user_id ON resumes(user_id)",
        "CREATE INDEX IF NOT EXISTS idx_jobs_active_posted ON jobs(is_active, posted_at)",
        "CREATE INDEX IF NOT EXISTS idx_jobs_job_board ON jobs(job_board_id)",
        "CREATE INDEX IF NOT EXISTS idx_applications_user ON applications(user_id, created_at)",
        "CREATE INDEX IF NOT EXISTS idx_applications_status ON applications(status)",
        // One live application per (user, job); withdrawn rows don't count
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_applications_user_job_live
            ON applications(user_id, job_id) WHERE status != 'withdrawn'",
        "CREATE INDEX IF NOT EXISTS idx_templates_user_type ON templates(user_id, type)",
    ];

    for index_sql in indexes {
        sqlx::query(index_sql).execute(pool).await?;
    }

    Ok(())
}

/// In-memory database with the full schema, for service tests
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    run_migrations(&pool).await.expect("migrations");
    pool
}

/// Inserts a bare user row, for service tests
#[cfg(test)]
pub async fn insert_test_user(pool: &SqlitePool, id: &str, name: Option<&str>) {
    sqlx::query("INSERT INTO users (id, email, name) VALUES (?, ?, ?)")
        .bind(id)
        .bind(format!("{}@example.com", id.to_lowercase()))
        .bind(name)
        .execute(pool)
        .await
        .expect("insert user");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let pool = test_pool().await;
        run_migrations(&pool).await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        let names: Vec<String> = tables.into_iter().map(|(n,)| n).collect();

        assert_eq!(
            names,
            vec!["applications", "job_boards", "jobs", "profiles", "resumes", "templates", "users"]
        );
    }
}
