use super::*;

#[test]
fn body_without_room_uses_default() {
    assert_eq!(
        parse_line("look at [[Wall]]", "stdin"),
        ("stdin", "look at [[Wall]]".to_string())
    );
}

#[test]
fn room_prefix_is_split_off() {
    assert_eq!(
        parse_line("!abc:example.org\t[[Hedge Fund]]", "stdin"),
        ("!abc:example.org", "[[Hedge Fund]]".to_string())
    );
}

#[test]
fn blank_room_falls_back() {
    assert_eq!(parse_line("\t[[Wall]]", "stdin"), ("stdin", "\t[[Wall]]".to_string()));
}

#[test]
fn escaped_newlines_become_line_breaks() {
    let (_, body) = parse_line("> [[Old]]\\n[[New]]", "r");
    assert_eq!(body, "> [[Old]]\n[[New]]");
}
