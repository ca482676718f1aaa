use netage_db::constraints;
use netage_db::models::account_group::CreateAccountGroup;
use netage_db::models::master_type::CreateMasterType;
use netage_db::models::product::CreateProduct;
use netage_db::repositories::{AccountGroupRepo, MasterTypeRepo, ProductRepo};
use sqlx::PgPool;

/// Connect, migrate, and verify the seeded lookup tables.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bootstrap_seeds_lookup_tables(pool: PgPool) {
    netage_db::health_check(&pool).await.unwrap();

    let types = MasterTypeRepo::list(&pool).await.unwrap();
    assert_eq!(types.len(), 5);
    assert_eq!(types[0].type_name, "Sole Proprietorship");

    let groups = AccountGroupRepo::list(&pool).await.unwrap();
    assert_eq!(groups.len(), 8);
    assert!(groups.iter().all(|g| g.group_name == "Current Assets"));

    let products: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(products.0, 0, "products are not seeded");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_master_type_violates_unique(pool: PgPool) {
    let input = CreateMasterType {
        type_name: "Partnership".to_string(),
        description: None,
    };
    let err = MasterTypeRepo::create(&pool, &input).await.unwrap_err();
    assert!(netage_db::is_unique_violation(&err, constraints::MASTER_TYPE_NAME));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_account_group_pair_is_unique(pool: PgPool) {
    let same_pair = CreateAccountGroup {
        main_group: "Inventories".to_string(),
        group_name: "Current Assets".to_string(),
        from_account_no: None,
        to_account_no: None,
    };
    let err = AccountGroupRepo::create(&pool, &same_pair).await.unwrap_err();
    assert!(netage_db::is_unique_violation(&err, constraints::ACCOUNT_GROUP_PAIR));

    let new_pair = CreateAccountGroup {
        group_name: "Non-Current Assets".to_string(),
        ..same_pair
    };
    let created = AccountGroupRepo::create(&pool, &new_pair).await.unwrap();
    assert_eq!(created.main_group, "Inventories");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_product_search_and_pagination(pool: PgPool) {
    for (code, name) in [("SUG-1", "Sugar 1kg"), ("RIC-1", "Basmati Rice"), ("SUG-5", "Sugar 5kg")] {
        ProductRepo::create(
            &pool,
            &CreateProduct {
                product_code: code.to_string(),
                product_name: name.to_string(),
                group_name: "Grocery".to_string(),
                sub_group: None,
                item: None,
                stock_keeping_unit: None,
            },
        )
        .await
        .unwrap();
    }

    let sugar = ProductRepo::list(&pool, Some("%SUGAR%"), 100, 0).await.unwrap();
    assert_eq!(sugar.len(), 2);

    let by_code = ProductRepo::list(&pool, Some("%ric-%"), 100, 0).await.unwrap();
    assert_eq!(by_code.len(), 1);
    assert_eq!(by_code[0].product_name, "Basmati Rice");

    let page = ProductRepo::list(&pool, None, 1, 2).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].product_code, "SUG-5");
}
