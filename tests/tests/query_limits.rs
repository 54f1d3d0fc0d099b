use rowboat::{Db, Limit, Query};
use tests::models::User;
use tests::{models, setup};

async fn seeded_db() -> Db {
    let db = setup(&mut models!(User)).await;
    for n in 1..=5_i64 {
        let mut user = User {
            email: Some(format!("crew-{n}@example.com")),
            visits: Some(n),
            ..Default::default()
        };
        db.save(&mut user).await.unwrap();
    }
    db
}

async fn visits(db: &Db, query: Query) -> Vec<i64> {
    let users: Vec<User> = db
        .find_all::<User>(query)
        .await
        .unwrap()
        .collect()
        .await
        .unwrap();
    users.into_iter().map(|user| user.visits.unwrap()).collect()
}

#[tokio::test]
async fn filter_binds_narrow_the_rows() {
    let db = seeded_db().await;

    let hits = visits(&db, Query::new().filter("visits > ?").bind(3)).await;
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|&n| n > 3));
}

#[tokio::test]
async fn order_by_applies_verbatim() {
    let db = seeded_db().await;

    let hits = visits(&db, Query::new().order_by("visits desc")).await;
    assert_eq!(hits, [5, 4, 3, 2, 1]);
}

#[tokio::test]
async fn limit_count_caps_the_rows() {
    let db = seeded_db().await;

    let hits = visits(&db, Query::new().order_by("visits").limit(2)).await;
    assert_eq!(hits, [1, 2]);
}

#[tokio::test]
async fn limit_offset_count_pages() {
    let db = seeded_db().await;

    let hits = visits(&db, Query::new().order_by("visits").limit((2, 2))).await;
    assert_eq!(hits, [3, 4]);
}

#[tokio::test]
async fn combined_filter_order_and_limit() {
    let db = seeded_db().await;

    let query = Query::new()
        .filter("visits >= ?")
        .bind(2)
        .order_by("visits desc")
        .limit(3);
    assert_eq!(visits(&db, query).await, [5, 4, 3]);
}

#[tokio::test]
async fn dynamic_limits_parse_before_any_query_runs() {
    // Query-string limits arrive as text; the parse is the validation
    // gate, and bad shapes never reach the database.
    let limit: Limit = "10".parse().unwrap();
    assert_eq!(limit, Limit::Count(10));

    let limit: Limit = "20,10".parse().unwrap();
    assert_eq!(
        limit,
        Limit::OffsetCount {
            offset: 20,
            count: 10
        }
    );

    for junk in ["abc", "1,2,3", "-5"] {
        let err = junk.parse::<Limit>().unwrap_err();
        assert!(err.is_validation());
    }

    let db = seeded_db().await;
    let limit: Limit = "1,2".parse().unwrap();
    assert_eq!(
        visits(&db, Query::new().order_by("visits").limit(limit)).await,
        [2, 3]
    );
}
