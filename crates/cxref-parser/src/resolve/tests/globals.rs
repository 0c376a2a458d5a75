use pretty_assertions::assert_eq;

use super::*;

// ── Global variables ───────────────────────────────────────────

const SOURCE: &str = "\
extern int shared;
extern int counted = 3;
int total = 0, *cursor;
static char name[8];
int helper(void);
int main(void) { int local = 1; return local; }";

#[test]
fn externs_without_initializer() {
    let globals = SourceUnit::from_text(SOURCE).resolve_global_variables();
    assert_eq!(globals.externs.keys().collect::<Vec<_>>(), ["shared"]);
    let shared = &globals.externs["shared"];
    assert_eq!(shared.type_text, "int");
    assert_eq!(shared.signature_key(), "shared@int");
    assert_eq!(shared.declaration.text, "extern int shared;");
}

#[test]
fn definitions_skip_prototypes_and_locals() {
    let globals = SourceUnit::from_text(SOURCE).resolve_global_variables();
    assert_eq!(
        globals.definitions.keys().collect::<Vec<_>>(),
        ["cursor", "name", "total"]
    );
    assert_eq!(globals.definitions["name"].type_text, "char");
    assert_eq!(
        globals.definitions["cursor"].declaration.text,
        "int total = 0, *cursor;"
    );
}

#[test]
fn empty_file_has_no_globals() {
    let globals = SourceUnit::from_text("").resolve_global_variables();
    assert!(globals.externs.is_empty());
    assert!(globals.definitions.is_empty());
}
