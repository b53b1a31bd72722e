use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

use engine::{EngineError, Expense, ExpenseService, StoreError, ValidationError, store};
use migration::MigratorTrait;

async fn service_with_db() -> (ExpenseService, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let service = ExpenseService::builder().database(db.clone()).build();
    (service, db)
}

fn halo_kitty() -> Expense {
    Expense::new(
        75.0,
        "Halo Kitty".to_string(),
        "buy tea and coffee".to_string(),
        vec!["drinks".to_string(), "juices".to_string()],
    )
}

#[tokio::test]
async fn create_assigns_id_and_keeps_fields() {
    let (_service, db) = service_with_db().await;
    let mut expense = halo_kitty();

    store::create_expense(&db, &mut expense).await.unwrap();

    assert_eq!(expense.id, 1);
    assert_eq!(expense.amount, 75.0);
    assert_eq!(expense.title, "Halo Kitty");
    assert_eq!(expense.note, "buy tea and coffee");
    assert_eq!(expense.tags, vec!["drinks", "juices"]);
}

#[tokio::test]
async fn save_then_get_round_trips() {
    let (service, _db) = service_with_db().await;

    let first = service.save(halo_kitty()).await.unwrap();
    let second = service
        .save(Expense::new(
            12.25,
            "strawberry smoothie".to_string(),
            String::new(),
            Vec::new(),
        ))
        .await
        .unwrap();

    assert_ne!(first.id, 0);
    assert_ne!(first.id, second.id);
    assert_eq!(service.get_by_id(first.id).await.unwrap(), first);
    assert_eq!(service.get_by_id(second.id).await.unwrap(), second);
}

#[tokio::test]
async fn tags_keep_their_order() {
    let (service, _db) = service_with_db().await;
    let tags = vec!["z".to_string(), "a".to_string(), "m".to_string()];

    let saved = service
        .save(Expense::new(3.0, "gum".to_string(), String::new(), tags.clone()))
        .await
        .unwrap();

    assert_eq!(service.get_by_id(saved.id).await.unwrap().tags, tags);
}

#[tokio::test]
async fn get_missing_is_not_found() {
    let (service, db) = service_with_db().await;

    assert_eq!(
        store::get_expense_by_id(&db, 42).await,
        Err(StoreError::NotFound)
    );

    let err = service.get_by_id(42).await.unwrap_err();
    assert!(matches!(
        err,
        EngineError::NotFound {
            source: StoreError::NotFound,
            ..
        }
    ));
    assert_eq!(err.to_string(), "get_expense_by_id(42): not found");
}

#[tokio::test]
async fn save_rejects_invalid_without_writing() {
    let (service, _db) = service_with_db().await;

    let mut no_amount = halo_kitty();
    no_amount.amount = 0.0;
    let mut no_title = halo_kitty();
    no_title.title = String::new();

    assert_eq!(
        service.save(no_amount).await,
        Err(EngineError::Invalid(ValidationError::AmountInvalid))
    );
    assert_eq!(
        service.save(no_title).await,
        Err(EngineError::Invalid(ValidationError::TitleEmpty))
    );
    assert!(service.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_replaces_every_column() {
    let (service, _db) = service_with_db().await;
    let saved = service.save(halo_kitty()).await.unwrap();

    let replacement = Expense {
        id: saved.id,
        amount: 89.5,
        title: "apple smoothie".to_string(),
        note: String::new(),
        tags: vec!["beverage".to_string()],
    };
    let updated = service.update(replacement.clone()).await.unwrap();

    assert_eq!(updated, replacement);
    assert_eq!(service.get_by_id(saved.id).await.unwrap(), replacement);
}

#[tokio::test]
async fn update_missing_is_not_found() {
    let (service, _db) = service_with_db().await;
    let mut expense = halo_kitty();
    expense.id = 7;

    let err = service.update(expense).await.unwrap_err();

    assert!(matches!(err, EngineError::NotFound { .. }));
    assert_eq!(err.to_string(), "update_expense(7): not found");
}

#[tokio::test]
async fn update_rejects_invalid() {
    let (service, _db) = service_with_db().await;
    let mut saved = service.save(halo_kitty()).await.unwrap();
    saved.title = String::new();

    assert_eq!(
        service.update(saved).await,
        Err(EngineError::Invalid(ValidationError::TitleEmpty))
    );
}

#[tokio::test]
async fn list_is_empty_then_ordered_by_id() {
    let (service, _db) = service_with_db().await;
    assert!(service.list().await.unwrap().is_empty());

    let first = service.save(halo_kitty()).await.unwrap();
    let second = service
        .save(Expense::new(
            10.0,
            "rice".to_string(),
            "lunch".to_string(),
            vec!["food".to_string()],
        ))
        .await
        .unwrap();

    assert_eq!(service.list().await.unwrap(), vec![first, second]);
}

#[tokio::test]
async fn database_failure_is_internal() {
    let (service, db) = service_with_db().await;
    let backend = db.get_database_backend();
    db.execute(Statement::from_string(backend, "DROP TABLE expenses"))
        .await
        .unwrap();

    let err = service.list().await.unwrap_err();

    assert!(matches!(
        err,
        EngineError::Internal {
            source: StoreError::Database(_),
            ..
        }
    ));
    assert!(err.to_string().starts_with("list_expenses(): "));
}
