//! Manifest JSON fixtures shared across integration tests.

use serde_json::{Value, json};

/// A small modern manifest: app identity plus a flat `Symbols` array with a
/// table, its extension, a page, an enum and a report.
pub fn sales_manifest() -> Value {
    json!({
        "Name": "Sales Demo",
        "Publisher": "Contoso",
        "Version": "1.0.0.0",
        "AppId": "8a4f6c1e-0000-4000-8000-000000000001",
        "Symbols": [
            {
                "Type": "Table",
                "Id": 50000,
                "Name": "Demo Customer",
                "ReferenceSourceFileName": "src/DemoCustomer.Table.al",
                "Fields": [
                    { "Id": 1, "Name": "No.", "TypeDefinition": { "Name": "Code" } },
                    { "Id": 2, "Name": "Name", "TypeDefinition": { "Name": "Text" } },
                    { "Id": 3, "Name": "Salesperson Code", "TypeDefinition": { "Name": "Code" },
                      "Properties": [{ "Name": "TableRelation", "Value": "\"Demo Salesperson\"" }] }
                ],
                "Keys": [{ "Name": "PK", "FieldNames": ["No."] }]
            },
            {
                "Type": "Table",
                "Id": 50001,
                "Name": "Demo Salesperson",
                "Fields": [{ "Id": 1, "Name": "Code", "TypeDefinition": { "Name": "Code" } }]
            },
            {
                "Type": "TableExtension",
                "Id": 50100,
                "Name": "Demo Customer Ext",
                "TargetObject": 50000,
                "Fields": [
                    { "Id": 50100, "Name": "Loyalty Tier", "TypeDefinition": { "Name": "Option" } },
                    { "Id": 50101, "Name": "Region", "TypeDefinition": { "Name": "Code" },
                      "TableRelation": "\"Demo Region\" WHERE(Country = FIELD(\"Country Code\"))" }
                ]
            },
            {
                "Type": "Page",
                "Id": 50000,
                "Name": "Demo Customer Card",
                "PageType": "Card",
                "SourceTable": "Demo Customer",
                "Controls": [
                    { "Name": "General", "TypeDefinition": { "Name": "Group" } },
                    { "Name": "No.", "TypeDefinition": { "Name": "Field" } }
                ],
                "Actions": [{ "Name": "Post" }]
            },
            {
                "Type": "Enum",
                "Id": 50000,
                "Name": "Demo Status",
                "Members": [
                    { "Kind": "EnumValue", "Id": 1, "Name": "Open" },
                    { "Kind": "EnumValue", "Id": 2, "Name": "Closed" }
                ]
            },
            {
                "Type": "Report",
                "Id": 50000,
                "Name": "Demo Statement",
                "ReferenceSourceFileName": "src/reports/DemoStatement.Report.al",
                "Properties": [{ "Name": "RDLCLayout", "Value": "'./layouts/DemoStatement.rdlc'" }]
            }
        ]
    })
}

/// Legacy per-type sections nested under namespaces.
pub fn sectioned_manifest() -> Value {
    json!({
        "Tables": [{ "Id": 18, "Name": "Customer" }],
        "Codeunits": [{ "Id": 80, "Name": "Sales-Post" }],
        "Namespaces": [
            {
                "Name": "Microsoft.Sales",
                "Pages": [{ "Id": 21, "Name": "Customer Card" }],
                "Namespaces": [
                    { "Name": "Microsoft.Sales.Document", "EnumTypes": [{ "Id": 36, "Name": "Sales Document Type" }] }
                ]
            }
        ]
    })
}
