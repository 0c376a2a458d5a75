use pretty_assertions::assert_eq;

use super::*;

// ── Enum constants ─────────────────────────────────────────────

#[test]
fn constant_resolves_to_owning_enum() {
    let unit = SourceUnit::from_text("enum color { RED, GREEN = 4 };\nint c = GREEN;");
    let found = unit.resolve_enum_constant("GREEN");
    assert_eq!(texts(&found), ["enum color { RED, GREEN = 4 }"]);
    assert_eq!(found[0].kind, SymbolKind::Enum);
    assert_eq!(found[0].name, "GREEN");
}

#[test]
fn anonymous_enum_inside_typedef() {
    let unit = SourceUnit::from_text("typedef enum {\n    FAN_OFF,\n    FAN_ON\n} fan_state_t;");
    let found = unit.resolve_enum_constant("FAN_ON");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].span.start, 1);
    assert_eq!(found[0].span.end, 4);
}

#[test]
fn enum_type_name_is_not_a_constant() {
    let unit = SourceUnit::from_text("enum color { RED };");
    assert!(unit.resolve_enum_constant("color").is_empty());
    assert!(unit.resolve_enum_constant("BLUE").is_empty());
}
