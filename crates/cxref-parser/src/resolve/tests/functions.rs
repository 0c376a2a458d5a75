use pretty_assertions::assert_eq;

use super::*;

// ── Functions ──────────────────────────────────────────────────

const SOURCE: &str = "\
#define MAKE_ID(x) ((x) + 1)
static int *make(int n) {
    return 0;
}
int use(void) { return MAKE_ID(2); }";

#[test]
fn function_by_name_returns_definition() {
    let unit = SourceUnit::from_text(SOURCE);
    let func = unit.function_by_name("make").expect("make is defined");
    assert_eq!(func.kind, SymbolKind::Function);
    assert_eq!(func.span.start, 2);
    assert_eq!(func.span.end, 4);
}

#[test]
fn function_like_macro_stands_in() {
    let unit = SourceUnit::from_text(SOURCE);
    let found = unit.function_by_name("MAKE_ID").expect("macro fallback");
    assert_eq!(found.kind, SymbolKind::Macro);
    assert_eq!(found.text, "#define MAKE_ID(x) ((x) + 1)");
    assert_eq!(unit.function_by_name("missing"), None);
}

#[test]
fn signature_joins_storage_type_and_declarator() {
    let unit = SourceUnit::from_text(SOURCE);
    assert_eq!(
        unit.function_signature("make").as_deref(),
        Some("static int *make(int n)")
    );
    assert_eq!(unit.function_signature("use").as_deref(), Some("int use(void)"));
    assert_eq!(unit.function_signature("MAKE_ID"), None);
}
