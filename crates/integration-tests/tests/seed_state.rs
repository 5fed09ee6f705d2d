//! First-run seed behavior against a file-backed store.

#![allow(clippy::unwrap_used)]

use bizfolio_integration_tests::Harness;

#[tokio::test]
async fn test_first_run_serves_exact_seed_collections() {
    let harness = Harness::new();
    let console = harness.console();

    let folders = console.folders.list().await.unwrap();
    let named: Vec<_> = folders
        .iter()
        .map(|f| (f.id.as_str(), f.name.as_str()))
        .collect();
    assert_eq!(
        named,
        vec![
            ("f1", "Summer Collection 2024"),
            ("f2", "Digital Assets"),
        ]
    );

    let products = console.products.list().await.unwrap();
    let associations: Vec<_> = products
        .iter()
        .map(|p| (p.id.as_str(), p.folder_id.as_str()))
        .collect();
    assert_eq!(associations, vec![("p1", "f1"), ("p2", "f1"), ("p3", "f2")]);

    let company = console.company.get().await.unwrap();
    assert_eq!(company.id.as_str(), "c1");
}

#[tokio::test]
async fn test_seed_counts_come_from_the_join_not_the_stored_value() {
    let harness = Harness::new();
    let console = harness.console();

    let folders = console.folders.list().await.unwrap();
    let counts: Vec<_> = folders.iter().map(|f| f.product_count).collect();
    assert_eq!(counts, vec![2, 1]);
}

#[tokio::test]
async fn test_mutations_survive_a_reopen() {
    let harness = Harness::new();

    {
        let console = harness.console();
        console
            .products
            .delete(&"p3".into())
            .await
            .unwrap();
    }

    // Fresh store handle over the same directory
    let console = harness.console();
    let products = console.products.list().await.unwrap();
    assert_eq!(products.len(), 2);
    assert!(products.iter().all(|p| p.id.as_str() != "p3"));
}
