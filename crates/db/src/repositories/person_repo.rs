//! Repository for the `people` table.

use census_core::person::PersonDraft;
use census_core::types::DbId;
use sqlx::PgPool;

use crate::models::person::{Person, PersonFilter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, surname, patronymic, age, gender, nationality, created_at, updated_at";

/// Provides CRUD operations for people.
pub struct PersonRepo;

impl PersonRepo {
    /// Insert a new person, returning the created row.
    pub async fn create(pool: &PgPool, draft: &PersonDraft) -> Result<Person, sqlx::Error> {
        let query = format!(
            "INSERT INTO people (name, surname, patronymic, age, gender, nationality) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(&draft.name)
            .bind(&draft.surname)
            .bind(draft.patronymic.as_deref())
            .bind(draft.age)
            .bind(draft.gender.as_deref())
            .bind(draft.nationality.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Find a person by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM people WHERE id = $1");
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List people matching `filter`, ordered by ID.
    pub async fn list(
        pool: &PgPool,
        filter: &PersonFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Person>, sqlx::Error> {
        let (clause, bind_idx) = where_clause(filter);
        let query = format!(
            "SELECT {COLUMNS} FROM people \
             {clause} \
             ORDER BY id \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            next_idx = bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, Person>(&query);

        // Bind in the same order `where_clause` numbered them.
        for value in text_filters(filter).into_iter().flatten() {
            q = q.bind(format!("%{value}%"));
        }
        if let Some(age_min) = filter.age_min {
            q = q.bind(age_min);
        }
        if let Some(age_max) = filter.age_max {
            q = q.bind(age_max);
        }

        q = q.bind(limit).bind(offset);
        q.fetch_all(pool).await
    }

    /// Overwrite every mutable column with the draft's values.
    ///
    /// Enrichment columns are written even when `None`, so a lookup that no
    /// longer answers clears the stored value. Returns `None` if no row with
    /// the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        draft: &PersonDraft,
    ) -> Result<Option<Person>, sqlx::Error> {
        let query = format!(
            "UPDATE people SET \
                name = $2, \
                surname = $3, \
                patronymic = $4, \
                age = $5, \
                gender = $6, \
                nationality = $7, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .bind(&draft.name)
            .bind(&draft.surname)
            .bind(draft.patronymic.as_deref())
            .bind(draft.age)
            .bind(draft.gender.as_deref())
            .bind(draft.nationality.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete a person. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM people WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Columns matched by substring, in bind order.
const TEXT_COLUMNS: [&str; 5] = ["name", "surname", "patronymic", "gender", "nationality"];

/// Text filter values, aligned with [`TEXT_COLUMNS`].
fn text_filters(filter: &PersonFilter) -> [Option<&str>; 5] {
    [
        filter.name.as_deref(),
        filter.surname.as_deref(),
        filter.patronymic.as_deref(),
        filter.gender.as_deref(),
        filter.nationality.as_deref(),
    ]
}

/// Build the `WHERE` clause for `filter`.
///
/// Returns the clause (empty when unfiltered) and the next free bind index.
fn where_clause(filter: &PersonFilter) -> (String, u32) {
    let mut conditions = Vec::new();
    let mut bind_idx = 1u32;

    for (column, value) in TEXT_COLUMNS.iter().zip(text_filters(filter)) {
        if value.is_some() {
            conditions.push(format!("{column} ILIKE ${bind_idx}"));
            bind_idx += 1;
        }
    }
    if filter.age_min.is_some() {
        conditions.push(format!("age >= ${bind_idx}"));
        bind_idx += 1;
    }
    if filter.age_max.is_some() {
        conditions.push(format!("age <= ${bind_idx}"));
        bind_idx += 1;
    }

    let clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };
    (clause, bind_idx)
}
