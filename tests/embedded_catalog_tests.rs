use solar_compare::category::{BATTERY, HYBRID_INVERTER};
use solar_compare::{CatalogStore, CategoryFilter, ComparisonSession, SpecCell, ToggleOutcome};

#[test]
fn embedded_ids_are_unique_and_products_valid() {
    let catalog = CatalogStore::embedded().expect("embedded catalog loads");
    for product in catalog.get_all() {
        assert!(product.validate().is_ok(), "{} failed validation", product.id);
        assert!(!product.specifications.is_empty(), "{} has no specs", product.id);
        assert!(catalog.get_by_id(product.id.as_str()).is_some());
    }
}

#[test]
fn compare_batteries_from_embedded_catalog() {
    let catalog = CatalogStore::embedded().unwrap();
    let mut session = ComparisonSession::new(&catalog);
    session.set_filter(CategoryFilter::only(BATTERY));

    let batteries: Vec<String> = session
        .visible_products()
        .iter()
        .map(|p| p.id.to_string())
        .collect();
    assert!(batteries.len() >= 3);
    for id in &batteries[..3] {
        assert_eq!(session.toggle(id), ToggleOutcome::Added);
    }

    session.set_filter(CategoryFilter::only(HYBRID_INVERTER));
    let inverter = session.visible_products()[0].id.to_string();
    assert!(session.is_disabled(&inverter));
    assert_eq!(session.toggle(&inverter), ToggleOutcome::AtCapacity);

    let view = session.view();
    assert_eq!(view.products.len(), 3);
    assert!(view.specification_keys.contains(&"Usable Capacity (kWh)"));

    // sonnenBatterie publishes no weight, Powerwall does
    let rows = view.rows();
    let weight = rows.iter().find(|row| row.key == "Weight (kg)").expect("weight row");
    assert!(weight.cells.iter().any(|cell| matches!(cell, SpecCell::NotApplicable)));
    assert!(weight.cells.iter().any(|cell| !cell.is_not_applicable()));
}

#[test]
fn view_json_for_renderer() {
    let catalog = CatalogStore::embedded().unwrap();
    let mut session = ComparisonSession::new(&catalog);
    session.toggle("enphase-iq8plus");
    session.toggle("hoymiles-hms-2000");

    let json = serde_json::to_value(session.view()).unwrap();
    assert_eq!(json["products"][0]["id"], "enphase-iq8plus");
    assert_eq!(json["products"][1]["applicationAreas"][1], "Agricultural");
    assert_eq!(json["specificationKeys"][0], "Peak Output (VA)");
}
