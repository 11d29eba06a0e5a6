use sqlx::PgPool;

/// All `id` and foreign key columns must be bigint.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_keys_are_bigint(pool: PgPool) {
    let rows: Vec<(String, String, String)> = sqlx::query_as(
        "SELECT table_name, column_name, data_type
         FROM information_schema.columns
         WHERE table_schema = 'public'
           AND (column_name = 'id' OR column_name LIKE '%\\_id')
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name, column_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!rows.is_empty());
    for (table, column, data_type) in &rows {
        assert_eq!(
            data_type, "bigint",
            "{table}.{column} should be bigint, got {data_type}"
        );
    }
}

/// Every table (except _sqlx_migrations) must have created_at and updated_at as timestamptz.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_tables_have_timestamps(pool: PgPool) {
    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT table_name
         FROM information_schema.tables
         WHERE table_schema = 'public'
           AND table_type = 'BASE TABLE'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    let names: Vec<&str> = tables.iter().map(|(t,)| t.as_str()).collect();
    assert_eq!(names, vec!["artists", "shows", "venues"]);

    for (table,) in &tables {
        for col in ["created_at", "updated_at"] {
            let result: Option<(String,)> = sqlx::query_as(
                "SELECT data_type
                 FROM information_schema.columns
                 WHERE table_schema = 'public'
                   AND table_name = $1
                   AND column_name = $2",
            )
            .bind(table)
            .bind(col)
            .fetch_optional(&pool)
            .await
            .unwrap();

            let (data_type,) =
                result.unwrap_or_else(|| panic!("Table {table} is missing column {col}"));
            assert_eq!(
                data_type, "timestamp with time zone",
                "Table {table}.{col} should be timestamptz, got {data_type}"
            );
        }
    }
}

/// Text columns use TEXT, never character varying.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_no_varchar_columns(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, column_name
         FROM information_schema.columns
         WHERE table_schema = 'public'
           AND data_type = 'character varying'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name, column_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(rows.is_empty(), "Found varchar columns: {rows:?}");
}

/// Genres are stored as a native array, not as delimited text.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_genres_are_text_arrays(pool: PgPool) {
    for table in ["venues", "artists"] {
        let (data_type, udt_name): (String, String) = sqlx::query_as(
            "SELECT data_type, udt_name
             FROM information_schema.columns
             WHERE table_schema = 'public'
               AND table_name = $1
               AND column_name = 'genres'",
        )
        .bind(table)
        .fetch_one(&pool)
        .await
        .unwrap();

        assert_eq!(data_type, "ARRAY", "{table}.genres should be an array");
        assert_eq!(udt_name, "_text", "{table}.genres should be text[]");
    }
}

/// Show foreign keys cascade on delete.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_show_foreign_keys_cascade(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT ccu.table_name::text, rc.delete_rule::text
         FROM information_schema.referential_constraints rc
         JOIN information_schema.table_constraints tc
              ON tc.constraint_name = rc.constraint_name
         JOIN information_schema.constraint_column_usage ccu
              ON ccu.constraint_name = rc.constraint_name
         WHERE tc.table_name = 'shows'
         ORDER BY ccu.table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert_eq!(
        rows,
        vec![
            ("artists".to_string(), "CASCADE".to_string()),
            ("venues".to_string(), "CASCADE".to_string()),
        ]
    );
}
