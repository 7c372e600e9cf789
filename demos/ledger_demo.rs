//! # Ledger Demo
//!
//! Walks through the asset ledger end to end:
//! - Loading configuration and installing the tracing subscriber
//! - Bootstrapping the schema and provisioning categories
//! - Submitting, listing, updating and deleting assets
//!
//! Reads `FINTRACK_CONFIG` / `./fintrack.toml`; falls back to a local
//! PostgreSQL with default credentials.

use fintrack::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Fintrack Ledger Demo");
    println!("====================");

    // 1. Configuration and logging
    let config = AppConfig::load().unwrap_or_else(|e| {
        println!("No usable config file ({}), using local defaults", e);
        AppConfig {
            database: DatabaseConfig::new(
                "localhost".to_string(),
                5432,
                "fintrack".to_string(),
                "postgres".to_string(),
                "password".to_string(),
                1,    // min_connections
                5,    // max_connections
                30,   // connection_timeout_seconds
                600,  // idle_timeout_seconds
                3600, // max_lifetime_seconds
            ),
            logging: LoggingConfig::default(),
        }
    });
    init_tracing(&config.logging)?;

    // 2. Database setup
    println!("\nStep 1: Database setup");
    let fintrack = Fintrack::new(config.database).await?;
    fintrack.health_check().await?;
    fintrack.migrate().await?;

    let user_id: UserId = 7;
    let ctx = RequestContext::authenticated(user_id);
    let store = fintrack.asset_store();
    let service = fintrack.asset_service();

    let precious = store.create_category(user_id, "Precious Metals").await?;
    let electronics = store.create_category(user_id, "Electronics").await?;
    println!("Categories: {:?}", service.list_categories(&ctx).await.data);

    // 3. Submit
    println!("\nStep 2: Submitting assets");
    let gold = AssetRequest::new("Gold Bar", precious.id, Decimal::from(10), Decimal::new(5550, 2), AssetStatus::Active);
    let laptop = AssetRequest::new("Laptop", electronics.id, Decimal::from(1), Decimal::new(120000, 2), AssetStatus::Active);
    for request in [gold, laptop] {
        let response = service.submit(&ctx, request).await;
        println!("submit -> {} {}", response.status_code, response.message);
    }

    let rejected = service
        .submit(&ctx, AssetRequest { status: Some("archived".to_string()), ..AssetRequest::default() })
        .await;
    println!("invalid submit -> {} {}", rejected.status_code, serde_json::to_string(&rejected)?);

    // 4. List
    println!("\nStep 3: Listing");
    let filter = ListFilter::default()
        .with_category("precious")
        .with_pagination(PaginationRequest::new(Some(1), Some(10)).with_sort("total_purchase_price desc"));
    let listed = service.list(&ctx, &filter).await;
    println!("{}", serde_json::to_string_pretty(&listed)?);

    let Some(gold_bar) = listed.data.and_then(|rows| rows.into_iter().next()) else {
        println!("Gold Bar not found, stopping");
        return Ok(());
    };

    // 5. Update under a row lock
    println!("\nStep 4: Updating");
    let update = AssetRequest::new("Gold Bar", precious.id, Decimal::new(25, 1), Decimal::new(19999, 2), AssetStatus::Inactive);
    let updated = service.update(&ctx, gold_bar.id, update).await;
    println!("{}", serde_json::to_string_pretty(&updated)?);

    // 6. Isolation and delete
    println!("\nStep 5: Isolation and delete");
    let stranger = RequestContext::authenticated(8);
    println!("stranger get -> {}", service.get_by_id(&stranger, gold_bar.id).await.status_code);
    println!("anonymous list -> {}", service.list(&RequestContext::anonymous(), &ListFilter::default()).await.status_code);

    let deleted = service.delete(&ctx, gold_bar.id).await;
    println!("delete -> {} {}", deleted.status_code, deleted.message);

    println!("\nDemo complete");
    Ok(())
}
