use anyhow::Context;
use chrono::NaiveDate;
use sqlx::{PgPool, Row};
use tracing::info;
use uuid::Uuid;

use crate::models::{AttendanceEntry, MarkRecord, Resource};
use crate::store::RecordStore;

/// Postgres-backed implementation of the record-store port.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl RecordStore for PgStore {
    async fn student_exists(&self, student_id: Uuid) -> anyhow::Result<bool> {
        let row = sqlx::query(
            "SELECT EXISTS(SELECT 1 FROM placement_readiness.students WHERE id = $1) AS found",
        )
        .bind(student_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.get("found"))
    }

    async fn marks_for_student(&self, student_id: Uuid) -> anyhow::Result<Vec<MarkRecord>> {
        let rows = sqlx::query(
            "SELECT student_id, subject, exam_type, score, max_score \
             FROM placement_readiness.marks WHERE student_id = $1",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        let mut marks = Vec::new();
        for row in rows {
            marks.push(MarkRecord {
                student_id: row.get("student_id"),
                subject: row.get("subject"),
                exam_type: row.get("exam_type"),
                score: row.get("score"),
                max_score: row.get("max_score"),
            });
        }
        Ok(marks)
    }

    async fn attendance_for_student(
        &self,
        student_id: Uuid,
    ) -> anyhow::Result<Vec<AttendanceEntry>> {
        let rows = sqlx::query(
            "SELECT student_id, subject, on_date, present \
             FROM placement_readiness.attendance_records WHERE student_id = $1",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(AttendanceEntry {
                student_id: row.get("student_id"),
                subject: row.get("subject"),
                on_date: row.get("on_date"),
                present: row.get("present"),
            });
        }
        Ok(entries)
    }

    async fn resources_for_skill(
        &self,
        skill: &str,
        limit: usize,
    ) -> anyhow::Result<Vec<Resource>> {
        let rows = sqlx::query(
            "SELECT skill_name, title, url, kind \
             FROM placement_readiness.resources WHERE skill_name ILIKE $1 \
             ORDER BY skill_name, title LIMIT $2",
        )
        .bind(format!("%{skill}%"))
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        let mut resources = Vec::new();
        for row in rows {
            resources.push(Resource {
                skill_name: row.get("skill_name"),
                title: row.get("title"),
                url: row.get("url"),
                kind: row.get("kind"),
            });
        }
        Ok(resources)
    }
}

pub async fn init_db(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

async fn upsert_student(
    pool: &PgPool,
    full_name: &str,
    roll_number: &str,
    email: &str,
) -> anyhow::Result<Uuid> {
    let id: Uuid = sqlx::query(
        r#"
        INSERT INTO placement_readiness.students (id, full_name, roll_number, email)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (email) DO UPDATE
        SET full_name = EXCLUDED.full_name, roll_number = EXCLUDED.roll_number
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(full_name)
    .bind(roll_number)
    .bind(email)
    .fetch_one(pool)
    .await?
    .get("id");
    Ok(id)
}

pub async fn seed(pool: &PgPool) -> anyhow::Result<()> {
    let students = vec![
        ("Avery Lee", "CS-2026-014", "avery.lee@campus.edu"),
        ("Jules Moreno", "CS-2025-031", "jules.moreno@campus.edu"),
        ("Kiara Patel", "CS-2026-007", "kiara.patel@campus.edu"),
    ];

    let mut ids = Vec::new();
    for (name, roll, email) in students {
        ids.push(upsert_student(pool, name, roll, email).await?);
    }

    let marks = vec![
        ("seed-mark-001", ids[0], "DBMS", "Midterm", 78.0, 100.0),
        ("seed-mark-002", ids[0], "Operating Systems", "Final", 84.0, 100.0),
        ("seed-mark-003", ids[1], "DBMS", "Midterm", 52.0, 100.0),
        ("seed-mark-004", ids[2], "Computer Networks", "Assignment", 91.0, 100.0),
    ];
    for (source_key, student_id, subject, exam_type, score, max_score) in marks {
        sqlx::query(
            r#"
            INSERT INTO placement_readiness.marks
            (id, student_id, subject, exam_type, score, max_score, source_key)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (source_key) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(student_id)
        .bind(subject)
        .bind(exam_type)
        .bind(score)
        .bind(max_score)
        .bind(source_key)
        .execute(pool)
        .await?;
    }

    let attendance = vec![
        (
            "seed-att-001",
            ids[0],
            "DBMS",
            NaiveDate::from_ymd_opt(2026, 2, 2).context("invalid date")?,
            true,
        ),
        (
            "seed-att-002",
            ids[0],
            "DBMS",
            NaiveDate::from_ymd_opt(2026, 2, 3).context("invalid date")?,
            false,
        ),
        (
            "seed-att-003",
            ids[1],
            "Operating Systems",
            NaiveDate::from_ymd_opt(2026, 2, 2).context("invalid date")?,
            true,
        ),
    ];
    for (source_key, student_id, subject, on_date, present) in attendance {
        sqlx::query(
            r#"
            INSERT INTO placement_readiness.attendance_records
            (id, student_id, subject, on_date, present, source_key)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (source_key) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(student_id)
        .bind(subject)
        .bind(on_date)
        .bind(present)
        .bind(source_key)
        .execute(pool)
        .await?;
    }

    let resources = vec![
        (
            "Python",
            "Python Crash Course",
            "https://learn.campus.edu/python-crash-course",
            "Course",
        ),
        (
            "Python for Data",
            "Pandas in Practice",
            "https://learn.campus.edu/pandas-in-practice",
            "Video",
        ),
        (
            "SQL",
            "SQL Fundamentals",
            "https://learn.campus.edu/sql-fundamentals",
            "Article",
        ),
        (
            "System Design",
            "Designing Data-Intensive Systems",
            "https://learn.campus.edu/system-design",
            "Course",
        ),
    ];
    for (skill_name, title, url, kind) in resources {
        sqlx::query(
            r#"
            INSERT INTO placement_readiness.resources (id, skill_name, title, url, kind)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (skill_name, title) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(skill_name)
        .bind(title)
        .bind(url)
        .bind(kind)
        .execute(pool)
        .await?;
    }

    Ok(())
}

pub async fn import_marks_csv(pool: &PgPool, csv_path: &std::path::Path) -> anyhow::Result<usize> {
    #[derive(serde::Deserialize)]
    struct CsvRow {
        full_name: String,
        roll_number: String,
        email: String,
        subject: String,
        exam_type: String,
        score: f64,
        max_score: f64,
        source_key: Option<String>,
    }

    let mut reader = csv::Reader::from_path(csv_path)?;
    let mut inserted = 0usize;

    for result in reader.deserialize::<CsvRow>() {
        let row = result?;
        let student_id =
            upsert_student(pool, &row.full_name, &row.roll_number, &row.email).await?;
        let source_key = row
            .source_key
            .unwrap_or_else(|| format!("import-{}", Uuid::new_v4()));

        let result = sqlx::query(
            r#"
            INSERT INTO placement_readiness.marks
            (id, student_id, subject, exam_type, score, max_score, source_key)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (source_key) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(student_id)
        .bind(&row.subject)
        .bind(&row.exam_type)
        .bind(row.score)
        .bind(row.max_score)
        .bind(source_key)
        .execute(pool)
        .await?;

        if result.rows_affected() > 0 {
            inserted += 1;
        }
    }

    info!(count = inserted, path = %csv_path.display(), "imported mark rows");
    Ok(inserted)
}

pub async fn import_attendance_csv(
    pool: &PgPool,
    csv_path: &std::path::Path,
) -> anyhow::Result<usize> {
    #[derive(serde::Deserialize)]
    struct CsvRow {
        full_name: String,
        roll_number: String,
        email: String,
        subject: String,
        on_date: NaiveDate,
        present: bool,
        source_key: Option<String>,
    }

    let mut reader = csv::Reader::from_path(csv_path)?;
    let mut inserted = 0usize;

    for result in reader.deserialize::<CsvRow>() {
        let row = result?;
        let student_id =
            upsert_student(pool, &row.full_name, &row.roll_number, &row.email).await?;
        let source_key = row
            .source_key
            .unwrap_or_else(|| format!("import-{}", Uuid::new_v4()));

        let result = sqlx::query(
            r#"
            INSERT INTO placement_readiness.attendance_records
            (id, student_id, subject, on_date, present, source_key)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (source_key) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(student_id)
        .bind(&row.subject)
        .bind(row.on_date)
        .bind(row.present)
        .bind(source_key)
        .execute(pool)
        .await?;

        if result.rows_affected() > 0 {
            inserted += 1;
        }
    }

    info!(count = inserted, path = %csv_path.display(), "imported attendance rows");
    Ok(inserted)
}

pub async fn import_resources_csv(
    pool: &PgPool,
    csv_path: &std::path::Path,
) -> anyhow::Result<usize> {
    #[derive(serde::Deserialize)]
    struct CsvRow {
        skill_name: String,
        title: String,
        url: String,
        kind: String,
    }

    let mut reader = csv::Reader::from_path(csv_path)?;
    let mut inserted = 0usize;

    for result in reader.deserialize::<CsvRow>() {
        let row = result?;
        let result = sqlx::query(
            r#"
            INSERT INTO placement_readiness.resources (id, skill_name, title, url, kind)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (skill_name, title) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&row.skill_name)
        .bind(&row.title)
        .bind(&row.url)
        .bind(&row.kind)
        .execute(pool)
        .await?;

        if result.rows_affected() > 0 {
            inserted += 1;
        }
    }

    info!(count = inserted, path = %csv_path.display(), "imported resource rows");
    Ok(inserted)
}
