use al_explorer::relations::{FieldMapping, parse_table_relation};
use rstest::rstest;

#[rstest]
#[case("Customer", "Customer")]
#[case("\"Customer\"", "Customer")]
#[case("Record Customer", "Customer")]
#[case("RECORD \"Sales Header\"", "Sales Header")]
#[case("\"My Table\"", "My Table")]
#[case("  Item  ", "Item")]
#[case("Item_Ledger WHERE(\"Item No.\"=FIELD(\"No.\"))", "Item_Ledger")]
#[case("", "")]
#[case("WHERE(", "WHERE")]
#[case("(Customer)", "")]
fn test_target_name(#[case] expr: &str, #[case] expected: &str) {
    assert_eq!(parse_table_relation(expr).target_name, expected);
}

#[rstest]
#[case(
    r#"Customer WHERE("No."=FIELD("Sell-to Customer No."))"#,
    &[("No.", "Sell-to Customer No.")]
)]
#[case(
    r#""Customer" where(No = field("Cust No"))"#,
    &[("No", "Cust No")]
)]
#[case(
    r#""Ship-to Address" WHERE("Customer No." = FIELD("Sell-to Customer No."), Code=FIELD(Ship.Code))"#,
    &[("Customer No.", "Sell-to Customer No."), ("Code", "Ship.Code")]
)]
#[case(
    r#""Dimension Value" WHERE("Global Dimension No."=CONST(1), Blocked=CONST(false))"#,
    &[]
)]
#[case(r#"Customer WHERE("No."=FIELD("#, &[])]
#[case("Customer", &[])]
fn test_mappings(#[case] expr: &str, #[case] expected: &[(&str, &str)]) {
    let expected: Vec<FieldMapping> = expected
        .iter()
        .map(|(target, source)| FieldMapping::new(*target, *source))
        .collect();
    assert_eq!(parse_table_relation(expr).mappings, expected);
}

#[test]
fn test_empty_expression() {
    let rel = parse_table_relation("");
    assert!(rel.target_name.is_empty());
    assert!(rel.mappings.is_empty());
}
