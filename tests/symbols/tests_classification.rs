use al_explorer::symbols::{MemberCategory, classify_member};
use rstest::rstest;

#[rstest]
#[case("Field", Some(MemberCategory::Field))]
#[case("TableField", Some(MemberCategory::Field))]
#[case("PageField", Some(MemberCategory::Field))]
#[case("Column", Some(MemberCategory::Field))]
#[case("Action", Some(MemberCategory::Action))]
#[case("ActionArea", Some(MemberCategory::Action))]
#[case("ActionGroup", Some(MemberCategory::Action))]
#[case("Key", Some(MemberCategory::Key))]
#[case("Group", Some(MemberCategory::Control))]
#[case("Area", Some(MemberCategory::Control))]
#[case("Part", Some(MemberCategory::Control))]
#[case("Repeater", Some(MemberCategory::Control))]
#[case("Label", Some(MemberCategory::Control))]
#[case("UserControl", Some(MemberCategory::Control))]
#[case("EnumValue", Some(MemberCategory::EnumValue))]
#[case("Value", Some(MemberCategory::EnumValue))]
#[case("Method", None)]
#[case("Trigger", None)]
#[case("", None)]
fn test_member_classification(#[case] kind: &str, #[case] expected: Option<MemberCategory>) {
    assert_eq!(classify_member(kind), expected, "kind {kind:?}");
}

#[rstest]
#[case("field")]
#[case("FIELD")]
#[case("fIeLd")]
fn test_classification_ignores_case(#[case] kind: &str) {
    assert_eq!(classify_member(kind), Some(MemberCategory::Field));
}
