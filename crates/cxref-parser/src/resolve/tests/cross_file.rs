use std::thread;

use pretty_assertions::assert_eq;

use super::*;

// ── Header lookup ──────────────────────────────────────────────

const CONFIG_H: &str = "\
#define MAX_FANS 4
typedef struct fan { int rpm; } fan_t;
enum mode { MODE_OFF, MODE_ON };
";

const FAN_C: &str = "\
#include <stdio.h>
#include \"local.h\"
#include \"config.h\"
/* primary fan */
fan_t primary;
int count = MAX_FANS;
";

fn fan_project() -> TempDir {
    project(&[
        ("include/config.h", CONFIG_H),
        ("src/local.h", "#define LOCAL_ONLY 1\n"),
        ("src/fan.c", FAN_C),
    ])
}

#[test]
fn macro_found_in_project_header() {
    let dir = fan_project();
    let unit = open_in(&dir, "src/fan.c");
    let found = unit.resolve_macro("MAX_FANS");
    assert_eq!(texts(&found), ["#define MAX_FANS 4"]);
    assert!(defined_in(&found[0], "include/config.h"));
}

#[test]
fn enum_constant_and_type_found_in_header() {
    let dir = fan_project();
    let unit = open_in(&dir, "src/fan.c");
    assert_eq!(
        texts(&unit.resolve_enum_constant("MODE_ON")),
        ["enum mode { MODE_OFF, MODE_ON }"]
    );
    assert_eq!(names(&unit.resolve_type("fan_t")), ["fan_t", "fan"]);
}

#[test]
fn local_variable_typed_by_header_typedef() {
    let dir = fan_project();
    let unit = open_in(&dir, "src/fan.c");
    let found = unit.resolve_local_variable(None, "primary");
    assert_eq!(
        texts(&found),
        [
            "fan_t primary;",
            "typedef struct fan { int rpm; } fan_t;",
            "struct fan { int rpm; }"
        ]
    );
    assert_eq!(found[0].file, unit.path().map(Path::to_path_buf));
}

#[test]
fn quoted_sibling_wins_and_is_not_cached() {
    let dir = fan_project();
    let unit = open_in(&dir, "src/fan.c");

    let local = unit.resolve_header_path("\"local.h\"").expect("sibling header");
    assert!(local.ends_with("src/local.h"));
    assert!(!unit.header_cache.borrow().contains_key("local.h"));

    let config = unit.resolve_header_path("\"config.h\"").expect("project header");
    assert!(config.ends_with("include/config.h"));
    assert!(unit.header_cache.borrow().contains_key("config.h"));
    assert_eq!(unit.resolve_header_path("\"config.h\""), Some(config));
}

#[test]
fn system_headers_are_unresolved() {
    let dir = fan_project();
    let unit = open_in(&dir, "src/fan.c");
    assert_eq!(unit.resolve_header_path("<stdio.h>"), None);

    let headers = unit.resolved_headers();
    assert_eq!(headers.len(), 3);
    assert_eq!(headers[0].path, None);
    assert!(headers[2].path.as_ref().is_some_and(|p| p.ends_with("config.h")));
}

#[test]
fn typedef_chain_crosses_two_headers() {
    let dir = project(&[
        ("include/base.h", "struct base { int id; };\n"),
        ("src/types.h", "#include \"base.h\"\ntypedef struct base base_t;\n"),
        ("src/main.c", "#include \"types.h\"\nbase_t b;\n"),
    ]);
    let unit = open_in(&dir, "src/main.c");
    let chain = unit.resolve_type("base_t");
    assert_eq!(names(&chain), ["base_t", "base"]);
    assert!(defined_in(&chain[0], "src/types.h"));
    assert!(defined_in(&chain[1], "include/base.h"));
}

#[test]
fn unreadable_header_is_skipped() {
    let dir = project(&[
        ("src/table.inc", "#define MAX_FANS 99\n"),
        ("src/config.h", "#define MAX_FANS 4\n"),
        ("src/main.c", "#include \"table.inc\"\n#include \"config.h\"\n"),
    ]);
    let unit = open_in(&dir, "src/main.c");
    assert_eq!(texts(&unit.resolve_macro("MAX_FANS")), ["#define MAX_FANS 4"]);
}

// ── Recursion guard ────────────────────────────────────────────

#[test]
fn include_cycle_terminates() {
    let dir = project(&[
        ("a.h", "#include \"b.h\"\nint from_a;\n"),
        ("b.h", "#include \"a.h\"\nint from_b;\n"),
        ("main.c", "#include \"a.h\"\n"),
    ]);
    let unit = open_in(&dir, "main.c");
    assert!(unit.resolve_macro("NOWHERE").is_empty());
    assert!(unit.resolve_type("nothing_t").is_empty());
    assert!(unit.resolve_enum_constant("NO_SUCH").is_empty());

    let header = open_in(&dir, "b.h");
    assert!(header.resolve_macro("NOWHERE").is_empty());
}

/// `main.c` includes `h1.h`, which includes `h2.h`, down to `h7.h`.
fn include_ladder() -> TempDir {
    let headers: Vec<(String, String)> = (1..=7)
        .map(|i| {
            let body = if i == 7 {
                "#define DEEP 1\n".to_string()
            } else {
                format!("#include \"h{}.h\"\n", i + 1)
            };
            (format!("h{i}.h"), body)
        })
        .collect();
    let mut files: Vec<(&str, &str)> = headers
        .iter()
        .map(|(path, body)| (path.as_str(), body.as_str()))
        .collect();
    files.push(("main.c", "#include \"h1.h\"\n"));
    project(&files)
}

#[test]
fn depth_ceiling_stops_the_search() {
    let dir = include_ladder();
    let unit = open_in(&dir, "main.c");
    assert!(unit.resolve_macro("DEEP").is_empty());

    let deeper = ResolverOptions {
        max_header_depth: 7,
        ..ResolverOptions::default()
    };
    let unit = open_with(&dir, "main.c", deeper);
    assert_eq!(texts(&unit.resolve_macro("DEEP")), ["#define DEEP 1"]);
}

#[test]
fn concurrent_resolutions_keep_separate_depths() {
    let dir = include_ladder();
    let root = dir.path().to_path_buf();
    let workers: Vec<_> = [6, 7]
        .into_iter()
        .map(|max_header_depth| {
            let root = root.clone();
            thread::spawn(move || {
                let options = ResolverOptions {
                    max_header_depth,
                    ..ResolverOptions::default()
                };
                let unit = SourceUnit::open(&root.join("main.c"), Some(root.as_path()), options)
                    .expect("main.c should open");
                (0..3)
                    .map(|_| unit.resolve_macro("DEEP").len())
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    let results: Vec<_> = workers
        .into_iter()
        .map(|w| w.join().expect("worker should not panic"))
        .collect();
    assert_eq!(results, [vec![0, 0, 0], vec![1, 1, 1]]);
}

// ── Project roots ──────────────────────────────────────────────

#[test]
fn without_a_root_lookups_stay_local() {
    let dir = fan_project();
    let unit = SourceUnit::open(
        &dir.path().join("src/fan.c"),
        None,
        ResolverOptions::default(),
    )
    .expect("fan.c should open");
    assert!(!unit.is_cross_file());
    assert!(unit.resolve_macro("MAX_FANS").is_empty());
    assert_eq!(unit.resolve_header_path("\"local.h\""), None);
}

#[test]
fn root_inferred_from_projects_base() {
    let dir = project(&[
        ("dentOS/include/onlp.h", "#define ONLP_OK 0\n"),
        ("dentOS/src/thermal.c", "#include <onlp.h>\nint rv = ONLP_OK;\n"),
    ]);
    let options = ResolverOptions {
        projects_base: Some(dir.path().to_path_buf()),
        ..ResolverOptions::default()
    };
    let unit = SourceUnit::open(&dir.path().join("dentOS/src/thermal.c"), None, options)
        .expect("thermal.c should open");
    assert!(unit.project_root().is_some_and(|r| r.ends_with("dentOS")));
    assert_eq!(texts(&unit.resolve_macro("ONLP_OK")), ["#define ONLP_OK 0"]);
}
