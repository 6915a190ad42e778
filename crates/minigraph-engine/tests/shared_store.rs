#![allow(unused_crate_dependencies)]

use std::sync::Arc;

use minigraph_engine::{store::StatsSnapshot, Engine, EngineConfig, EntityStore};
use pretty_assertions::assert_eq;
use serde_json::json;

fn demo_engine() -> Engine {
    Engine::new(EntityStore::demo(), EngineConfig::default())
}

#[test]
fn relationships_are_only_scanned_when_requested() {
    let engine = demo_engine();

    engine.execute(r#"{ customer(id: "cust1") { name email } }"#);
    assert_eq!(
        StatsSnapshot {
            lookups: 1,
            full_scans: 0,
            relationship_scans: 0,
        },
        engine.store().stats()
    );

    engine.store().reset_stats();

    engine.execute(r#"{ customer(id: "cust1") { name orders { id } } }"#);
    assert_eq!(
        StatsSnapshot {
            lookups: 1,
            full_scans: 0,
            relationship_scans: 1,
        },
        engine.store().stats()
    );
}

#[test]
fn items_are_only_looked_up_when_requested() {
    let engine = demo_engine();

    engine.execute(r#"{ customer(id: "cust1") { orders { id } } }"#);
    let without_items = engine.store().stats();

    engine.store().reset_stats();

    engine.execute(r#"{ customer(id: "cust1") { orders { id items { name } } } }"#);
    let with_items = engine.store().stats();

    // cust1 has two orders holding two items each.
    assert_eq!(without_items.lookups + 4, with_items.lookups);
}

#[test]
fn missing_owner_is_never_traversed() {
    let engine = demo_engine();

    let response = engine.execute(r#"{ customer(id: "cust9") { orders { items { name } } } }"#);

    assert!(response.data.is_empty());
    assert_eq!(0, engine.store().stats().relationship_scans);
}

#[test]
fn demo_orders_of_a_customer() {
    let response = demo_engine().execute(r#"{ customer(id: "cust1") { name orders { id items { name } } } }"#);

    assert_eq!(
        json!({
            "customer": {
                "name": "Alice",
                "orders": [
                    { "id": "order1", "items": [{ "name": "Latte" }, { "name": "Espresso" }] },
                    { "id": "order3", "items": [{ "name": "Cappuccino" }, { "name": "Latte" }] }
                ]
            }
        }),
        serde_json::to_value(&response.data).unwrap()
    );
}

#[test]
fn demo_total_amount() {
    let response = demo_engine().execute(r#"{ customer(id: "cust2") { orders { totalAmount } } }"#);

    let total = response.data.get("customer").and_then(|customer| {
        let orders = customer.as_object()?.get("orders")?.as_list()?;
        orders.first()?.as_object()?.get("totalAmount")?.as_f64()
    });

    let total = total.unwrap();
    assert!((total - 4.20).abs() < f64::EPSILON, "unexpected total {total}");
}

#[test]
fn engine_is_shared_between_threads() {
    let store = Arc::new(EntityStore::demo());
    let engine = Engine::new(Arc::clone(&store), EngineConfig::default());

    let requests = [
        (r#"{ coffee(id: "coffee1") { name } }"#, json!({ "coffee": { "name": "Latte" } })),
        (r#"{ coffee(id: "coffee2") { origin } }"#, json!({ "coffee": { "origin": "Brazil" } })),
        (
            r#"{ customer(id: "cust3") { orders { id } } }"#,
            json!({ "customer": { "orders": [{ "id": "order4" }] } }),
        ),
        (r#"{ allCoffees { id } }"#, json!({ "allCoffees": [{ "id": "coffee1" }, { "id": "coffee2" }, { "id": "coffee3" }] })),
    ];

    std::thread::scope(|scope| {
        for _ in 0..4 {
            for (request, expected) in &requests {
                let engine = engine.clone();

                scope.spawn(move || {
                    for _ in 0..25 {
                        let response = engine.execute(request);
                        assert_eq!(*expected, serde_json::to_value(&response.data).unwrap());
                    }
                });
            }
        }
    });

    assert_eq!(400, store.stats().lookups + store.stats().full_scans);
}
