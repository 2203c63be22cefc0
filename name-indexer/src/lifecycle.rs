//! End-to-end lifecycle run against a live cluster.
//!
//! Stands the index up from nothing, registers the custom type mapping,
//! indexes a sample person, reads it back, runs the rescored name search,
//! and tears the index down again.

use chrono::NaiveDate;
use tracing::info;

use crate::IndexingError;
use name_indexer_repository::opensearch::person_mapping;
use name_indexer_repository::{NameSearchRequest, SearchIndexClient};
use name_indexer_shared::{IndexShape, PersonDocument};

/// Sample person used for the lifecycle run.
pub fn sample_person() -> PersonDocument {
    PersonDocument {
        id: "1".to_string(),
        full_name: "Joe Schmoe".to_string(),
        local_name: "Joe the Schmoe".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1980, 11, 11).expect("valid sample date"),
    }
}

/// Run the full index lifecycle.
pub async fn run(client: &SearchIndexClient) -> Result<(), IndexingError> {
    info!("Creating index");
    client.recreate_index().await?;

    // Custom types can't be expressed through typed mapping builders, so the
    // synthesized mapping is registered through the low-level mapping API.
    // This only needs to be done once per index.
    info!("Registering type mapping");
    let mapping = person_mapping()?;
    client
        .register_mapping(PersonDocument::shape_name(), &mapping)
        .await?;

    info!("Indexing sample record");
    let person = sample_person();
    client.index(&person).await?;

    // Read the record back to confirm it was stored. Not required for
    // operation.
    info!("Retrieving record as a check");
    let stored = client.get(&person.id).await?;
    info!(
        document = %serde_json::to_string(&stored).unwrap_or_default(),
        "Record retrieved"
    );

    info!("Performing search");
    let request = NameSearchRequest::new("full_name", "Joe Schmoe").with_rescore_query("Jo Schmoe");
    let matches = client.search(&request).await?;

    for m in &matches {
        info!(
            id = %m.document.id,
            full_name = %m.document.full_name,
            score = m.score,
            "Match"
        );
    }
    info!(count = matches.len(), "Search complete");

    info!("Removing index");
    client.delete_index().await?;

    Ok(())
}
