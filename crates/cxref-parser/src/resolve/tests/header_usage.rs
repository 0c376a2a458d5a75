use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;
use crate::types::{HeaderUsage, UsageCriterion};

// ── Header usage ───────────────────────────────────────────────

#[rstest]
#[case::functions(
    "int fan_speed(int id);\n",
    "int main(void) { return fan_speed(1); }\n",
    HeaderUsage::Used(UsageCriterion::Functions)
)]
#[case::types(
    "typedef struct { int rpm; } fan_info_t;\n",
    "fan_info_t info;\n",
    HeaderUsage::Used(UsageCriterion::Types)
)]
#[case::macros(
    "#define FAN_COUNT 4\n",
    "int fans = FAN_COUNT;\n",
    HeaderUsage::Used(UsageCriterion::Macros)
)]
#[case::extern_variables(
    "int fan_total = 0;\n",
    "extern int fan_total;\nint read_total(void) { return fan_total; }\n",
    HeaderUsage::Used(UsageCriterion::ExternVariables)
)]
#[case::unused(
    "#define OTHER 1\nint other(void);\ntypedef int other_t;\n",
    "int x = 1;\n",
    HeaderUsage::Unused
)]
fn classifies_header(#[case] header: &str, #[case] body: &str, #[case] expected: HeaderUsage) {
    let source = format!("#include \"fan.h\"\n{body}");
    let dir = project(&[("include/fan.h", header), ("src/main.c", source.as_str())]);
    let unit = open_in(&dir, "src/main.c");
    assert_eq!(unit.is_header_used("\"fan.h\"").expect("header readable"), expected);
}

#[test]
fn locally_defined_names_do_not_count() {
    let dir = project(&[
        ("fan.h", "#define FAN_COUNT 4\ntypedef int fan_id_t;\n"),
        (
            "main.c",
            "#include \"fan.h\"\n#define FAN_COUNT 2\ntypedef long fan_id_t;\nfan_id_t id = FAN_COUNT;\n",
        ),
    ]);
    let unit = open_in(&dir, "main.c");
    assert_eq!(
        unit.is_header_used("\"fan.h\"").expect("header readable"),
        HeaderUsage::Unused
    );
}

#[test]
fn extern_type_must_match() {
    let dir = project(&[
        ("fan.h", "long fan_total = 0;\n"),
        ("main.c", "#include \"fan.h\"\nextern int fan_total;\n"),
    ]);
    let unit = open_in(&dir, "main.c");
    assert_eq!(
        unit.is_header_used("\"fan.h\"").expect("header readable"),
        HeaderUsage::Unused
    );
}

#[test]
fn missing_header_is_not_in_project() {
    let dir = project(&[("main.c", "#include <stdio.h>\nint main(void) { return 0; }\n")]);
    let unit = open_in(&dir, "main.c");
    let usage = unit.is_header_used("<stdio.h>").expect("no io needed");
    assert_eq!(usage, HeaderUsage::NotInProject);
    assert!(!usage.is_used());
}
