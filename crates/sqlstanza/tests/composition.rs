use sqlstanza::prelude::*;

/// Filters a search screen might apply conditionally.
#[derive(Default)]
struct EmployeeSearch {
    name: Option<&'static str>,
    min_age: Option<i32>,
    hired_after: Option<chrono::NaiveDate>,
    team: Option<uuid::Uuid>,
    page_size: Option<i64>,
}

fn search(params: &EmployeeSearch, dialect: Dialect) -> Statement {
    let mut q = Statement::new()
        .dialect(dialect)
        .select("e.id", ())
        .select("e.name", ())
        .from("employees e", ());

    if let Some(name) = params.name {
        q = q.where_("e.name ILIKE ?", (format!("%{name}%"),));
    }
    if let Some(age) = params.min_age {
        q = q.where_("e.age >= ?", (age,));
    }
    if let Some(date) = params.hired_after {
        q = q.where_("e.hired_on > ?", (date,));
    }
    if let Some(team) = params.team {
        q = q
            .join("JOIN memberships m ON m.employee_id = e.id", ())
            .where_("m.team_id = ?", (team,));
    }
    q = q.order_by("e.id", ());
    if let Some(n) = params.page_size {
        q = q.limit("?", (n,));
    }
    q
}

#[test]
fn no_filters_renders_bare_query() {
    let q = search(&EmployeeSearch::default(), Dialect::Postgres);
    assert_eq!(q.to_sql(), "SELECT e.id, e.name\nFROM employees e\nORDER BY e.id");
    assert!(q.args().is_empty());
    assert!(q.validate().is_ok());
}

#[test]
fn conditional_filters_keep_args_aligned() {
    let team = uuid::Uuid::nil();
    let date = chrono::NaiveDate::from_ymd_opt(2020, 1, 31).unwrap();
    let q = search(
        &EmployeeSearch {
            name: Some("marg"),
            min_age: None,
            hired_after: Some(date),
            team: Some(team),
            page_size: Some(25),
        },
        Dialect::Postgres,
    );

    assert_eq!(
        q.to_sql(),
        "SELECT e.id, e.name\n\
         FROM employees e\n\
         JOIN memberships m ON m.employee_id = e.id\n\
         WHERE (e.name ILIKE $1) AND (e.hired_on > $2) AND (m.team_id = $3)\n\
         ORDER BY e.id\n\
         LIMIT $4"
    );
    assert_eq!(
        format!("{:?}", q.args()),
        format!("[\"%marg%\", {date:?}, {team:?}, 25]")
    );
    assert!(q.validate().is_ok());
}

#[test]
fn same_filters_under_each_dialect() {
    let params = EmployeeSearch {
        min_age: Some(30),
        page_size: Some(5),
        ..Default::default()
    };

    let question = search(&params, Dialect::Question).to_sql();
    let postgres = search(&params, Dialect::Postgres).to_sql();
    let sqlserver = search(&params, Dialect::SqlServer).to_sql();

    assert!(question.contains("WHERE (e.age >= ?)"));
    assert!(question.ends_with("LIMIT ?"));
    assert!(postgres.contains("WHERE (e.age >= $1)"));
    assert!(postgres.ends_with("LIMIT $2"));
    assert!(sqlserver.contains("WHERE (e.age >= @p1)"));
    assert!(sqlserver.ends_with("LIMIT @p2"));
}

#[test]
fn shared_base_serves_many_queries() {
    let base = Statement::postgres().select("count(*)", ()).from("orders", ());

    let queries: Vec<Statement> = ["open", "shipped", "returned"]
        .into_iter()
        .map(|status| base.where_("status = ?", (status,)))
        .collect();

    for (q, status) in queries.iter().zip(["open", "shipped", "returned"]) {
        assert_eq!(q.to_sql(), "SELECT count(*)\nFROM orders\nWHERE (status = $1)");
        assert_eq!(format!("{:?}", q.args()), format!("[{status:?}]"));
    }
    assert_eq!(base.to_sql(), "SELECT count(*)\nFROM orders");
}

#[test]
fn statements_extend_across_threads() {
    let base = Statement::postgres()
        .select("*", ())
        .from("events", ())
        .where_("tenant = ?", (7_i64,));

    let handles: Vec<_> = (0..4_i64)
        .map(|i| {
            let base = base.clone();
            std::thread::spawn(move || base.where_("kind = ?", (i,)).build())
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (sql, args) = handle.join().unwrap();
        assert_eq!(sql, "SELECT *\nFROM events\nWHERE (tenant = $1) AND (kind = $2)");
        assert_eq!(format!("{args:?}"), format!("[7, {i}]"));
    }
    assert_eq!(base.arg_count(), 1);
}

#[cfg(feature = "serde")]
#[test]
fn dialect_from_config() {
    #[derive(serde::Deserialize)]
    struct Config {
        dialect: Dialect,
    }

    let cfg: Config = serde_json::from_str(r#"{"dialect": "postgres"}"#).unwrap();
    assert_eq!(cfg.dialect, Dialect::Postgres);
    let cfg: Config = serde_json::from_str(r#"{"dialect": "mssql"}"#).unwrap();
    assert_eq!(cfg.dialect, Dialect::SqlServer);
    assert!(serde_json::from_str::<Config>(r#"{"dialect": "oracle"}"#).is_err());

    assert_eq!(serde_json::to_string(&Dialect::SqlServer).unwrap(), r#""sqlserver""#);
}

#[test]
fn long_argument_lists_via_macro() {
    let values = args![
        1_i64, 2_i64, 3_i64, 4_i64, 5_i64, 6_i64, 7_i64, 8_i64, 9_i64, 10_i64, 11_i64, 12_i64,
        13_i64,
    ];
    let marks = vec!["?"; values.len()].join(", ");
    let q = Statement::postgres()
        .select("*", ())
        .from("t", ())
        .where_(format!("id IN ({marks})"), values);

    assert!(q.to_sql().ends_with("$12, $13))"));
    assert_eq!(q.arg_count(), 13);
    assert!(q.validate().is_ok());
}
