use blazer::sparql;
use blazer::sparql::{encode_query, format_template, normalize};

#[test]
fn test_indented_template_collapses() {
    let parts = [
        "\n        select * from {?s ?p ",
        "}\n        limit 10\n    ",
    ];
    assert_eq!(
        format_template(&parts, &["?o"]),
        "select * from {?s ?p ?o}\nlimit 10"
    );
}

#[test]
fn test_macro_matches_format_template() {
    let object = "?o";
    let from_macro = sparql!(
        "
        select * from {{?s ?p {}}}
    ",
        object
    );
    let from_parts = format_template(
        &["\n        select * from {?s ?p ", "}\n    "],
        &[object],
    );
    assert_eq!(from_macro, from_parts);
    assert_eq!(from_macro, "select * from {?s ?p ?o}");
}

#[test]
fn test_normalize_is_stable() {
    let once = normalize("\n   select *\n      where { ?s ?p ?o }\n");
    assert_eq!(once, "select *\nwhere { ?s ?p ?o }");
    assert_eq!(normalize(&once), once);
}

#[test]
fn test_values_are_not_escaped() {
    let parts = ["select * { ?s ?p ", " }"];
    assert_eq!(
        format_template(&parts, &["\"a \\\"b\\\"\""]),
        "select * { ?s ?p \"a \\\"b\\\"\" }"
    );
}

#[test]
fn test_normalized_query_encodes_for_url() {
    let query = sparql!(
        "
        select * {{ ?s ?p ?o }}
        limit 1
    "
    );
    assert_eq!(
        encode_query(&query),
        "select%20*%20%7B%20%3Fs%20%3Fp%20%3Fo%20%7D%0Alimit%201"
    );
}
