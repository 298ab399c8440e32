use mealwise_shared::{MealPlan, ProcessedShoppingItem, RawShoppingEntry, ShoppingList};
use mealwise_shopping::{
    Catalog, NormalizedUnit, ShoppingListService, normalize_unit, parse_quantity,
};

fn find<'a>(items: &'a [ProcessedShoppingItem], name: &str) -> &'a ProcessedShoppingItem {
    items
        .iter()
        .find(|item| item.name == name)
        .unwrap_or_else(|| panic!("{name} missing from {items:?}"))
}

/// A realistic three day plan with overlapping ingredients
fn week() -> Vec<ShoppingList> {
    vec![
        ShoppingList::new(
            "2025-05-01",
            vec![
                RawShoppingEntry::new("Lemon", "1", Some("each")),
                RawShoppingEntry::new("butter", "2", Some("tbsp")),
                RawShoppingEntry::new("flour", "1", Some("cup")),
                RawShoppingEntry::new("garlic", "3", Some("cloves")),
                RawShoppingEntry::new("water", "2", Some("cups")),
            ],
        ),
        ShoppingList::new(
            "2025-05-03",
            vec![
                RawShoppingEntry::new("lemon", "2", Some("each")),
                RawShoppingEntry::new("butter", "1", Some("tsp")),
                RawShoppingEntry::new("garlic", "2", None),
                RawShoppingEntry::new("pepper", "to taste", None),
                RawShoppingEntry::new("watermelon", "1", None),
            ],
        ),
        ShoppingList::new(
            "2025-05-02",
            vec![
                RawShoppingEntry::new("chicken breast", "1 1/2", Some("lbs")),
                RawShoppingEntry::new("chicken breast", "8", Some("oz")),
                RawShoppingEntry::new("dragon fruit", "1", None),
                RawShoppingEntry::new("red bell pepper - medium", "2", None),
            ],
        ),
    ]
}

#[test]
fn test_full_week_aggregation() {
    let report = ShoppingListService::default().generate(&week());

    let produce = report.items_in("Produce");
    assert_eq!(find(produce, "lemon").quantity, "~ 3");
    assert_eq!(find(produce, "garlic").quantity, "~ 5 cloves");
    assert_eq!(find(produce, "red bell pepper - medium").quantity, "2");

    let dairy = report.items_in("Dairy");
    let butter = find(dairy, "butter");
    assert_eq!(butter.quantity, "~ 2.33 tablespoons");
    assert_eq!(butter.unit, "tablespoons");

    let flour = find(report.items_in("Baking Aisle"), "flour");
    assert_eq!(flour.quantity, "4.25 ounces");

    let chicken = find(report.items_in("Meat Department"), "chicken breast");
    assert_eq!(chicken.quantity, "~ 2 pounds");

    let pepper = find(report.items_in("Seasoning/Spices/Sauces"), "pepper");
    assert_eq!(pepper.quantity, "to taste");

    assert_eq!(find(report.items_in("Other"), "dragon fruit").quantity, "1");
}

#[test]
fn test_water_filtered_before_aggregation() {
    let report = ShoppingListService::default().generate(&week());

    let names: Vec<_> = report
        .iter()
        .flat_map(|(_, items)| items.iter().map(|item| item.name.as_str()))
        .collect();

    assert!(!names.contains(&"water"));
    assert!(names.contains(&"watermelon"));
}

#[test]
fn test_categories_in_display_order() {
    let report = ShoppingListService::default().generate(&week());

    assert_eq!(
        report.ordered_categories,
        [
            "Produce",
            "Meat Department",
            "Dairy",
            "Baking Aisle",
            "Seasoning/Spices/Sauces",
            "Other",
        ]
    );
}

#[test]
fn test_date_range_spans_all_days() {
    let report = ShoppingListService::default().generate(&week());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["start_date"], "2025-05-01");
    assert_eq!(json["end_date"], "2025-05-03");
}

#[test]
fn test_custom_category_sorted_after_declared() {
    let catalog = Catalog::builtin().with_keywords("Exotic", ["durian"]);
    let lists = vec![ShoppingList::new(
        "2025-05-01",
        vec![
            RawShoppingEntry::new("durian", "1", None),
            RawShoppingEntry::new("milk", "1", Some("cup")),
        ],
    )];

    let report = ShoppingListService::new(catalog).generate(&lists);

    assert_eq!(report.ordered_categories, ["Dairy", "Exotic"]);
}

#[test]
fn test_empty_inputs() {
    let service = ShoppingListService::default();

    let report = service.generate(&[]);
    assert!(report.is_empty());
    assert!(report.ordered_categories.is_empty());

    let report = service.generate(&[ShoppingList::new("2025-05-01", vec![])]);
    assert!(report.is_empty());
    assert!(report.ordered_categories.is_empty());
}

#[test]
fn test_malformed_shopping_lists_are_empty() {
    let lists: Vec<ShoppingList> = serde_json::from_str(r#"[{}, {"date": "2025-05-01"}]"#).unwrap();

    let report = ShoppingListService::default().generate(&lists);

    assert!(report.is_empty());
}

#[test]
fn test_eighth_cup_sums_round_half_up() {
    let lists = vec![ShoppingList::new(
        "2025-05-01",
        vec![
            RawShoppingEntry::new("milk", "1", Some("cup")),
            RawShoppingEntry::new("milk", "2", Some("tbsp")),
        ],
    )];

    let report = ShoppingListService::default().generate(&lists);

    assert_eq!(find(report.items_in("Dairy"), "milk").quantity, "~ 1.13 cups");
}

#[test]
fn test_null_fields_do_not_fail_the_run() {
    let lists: Vec<ShoppingList> = serde_json::from_str(
        r#"[
            {"date": "2025-05-01", "items": null},
            {"date": "2025-05-02", "items": [
                {"name": "milk", "quantity": null, "unit": "cup"},
                {"name": "lemon", "quantity": 2, "unit": null}
            ]}
        ]"#,
    )
    .unwrap();

    let report = ShoppingListService::default().generate(&lists);

    assert_eq!(find(report.items_in("Dairy"), "milk").quantity, "(No valid quantity)");
    assert_eq!(find(report.items_in("Produce"), "lemon").quantity, "2");
}

#[test]
fn test_meal_plan_blank_cells() {
    let plan: MealPlan = serde_json::from_str(
        r#"{"days": [
            {"date": "2025-05-01", "recipes": [
                {"name": "Latte", "ingredients_with_quantities": [
                    ["Ingredient Name", "Quantity", "Unit"],
                    ["milk", "", "cup"],
                    ["", "2", ""]
                ]},
                {"name": "Broken", "ingredients_with_quantities": null}
            ]},
            {"recipes": [
                {"ingredients_with_quantities": [["Ingredient Name", "Quantity", "Unit"], ["eggs", "6", ""]]}
            ]}
        ]}"#,
    )
    .unwrap();

    let report = ShoppingListService::default().generate_from_meal_plan(&plan);

    assert_eq!(find(report.items_in("Dairy"), "milk").quantity, "(No valid quantity)");
    assert_eq!(find(report.items_in("Other"), "unknown item").quantity, "2");
    assert_eq!(report.total_items(), 2);
}

#[test]
fn test_meal_plan_to_report() {
    let plan: MealPlan = serde_json::from_str(
        r#"{"days": [
            {"date": "2025-05-01", "recipes": [
                {"name": "Pancakes", "ingredients_with_quantities": [
                    ["Ingredient Name", "Quantity", "Unit"],
                    ["flour", "2", "cups"],
                    ["sugar", "2", "tbsp"],
                    ["milk", "1 1/2", "cups"],
                    ["water", "1/2", "cup"]
                ]}
            ]},
            {"date": "2025-05-02", "recipes": [
                {"name": "Crepes", "ingredients_with_quantities": [
                    ["Ingredient Name", "Quantity", "Unit"],
                    ["flour", "1", "cup"],
                    ["milk", "1/2", "cup"]
                ]}
            ]}
        ]}"#,
    )
    .unwrap();

    let report = ShoppingListService::default().generate_from_meal_plan(&plan);

    let baking = report.items_in("Baking Aisle");
    assert_eq!(find(baking, "flour").quantity, "~ 12.75 ounces");
    assert_eq!(find(baking, "sugar").quantity, "0.88 ounces");
    assert_eq!(find(report.items_in("Dairy"), "milk").quantity, "~ 2 cups");
    assert_eq!(report.total_items(), 3);
}

#[test]
fn test_quantity_and_unit_properties() {
    assert_eq!(parse_quantity(&"1 1/2".into()), Some(1.5));
    assert_eq!(parse_quantity(&"3/4".into()), Some(0.75));
    assert_eq!(parse_quantity(&"2".into()), Some(2.0));
    assert_eq!(parse_quantity(&"abc".into()), None);

    for raw in ["tbsp", "TSP", "cups", "lbs", "oz", "dash"] {
        let once = normalize_unit(Some(raw)).unwrap();
        assert_eq!(normalize_unit(Some(once.as_str())), Some(once.clone()));
    }
    assert_eq!(normalize_unit(Some("tbsp")), Some(NormalizedUnit::Tablespoon));
}
