use super::*;

#[test]
fn lowercases_ascii() {
    assert_eq!(normalize("Ice Wall"), "ice wall");
}

#[test]
fn strips_diacritics() {
    assert_eq!(normalize("Déjà Vu"), normalize("deja vu"));
    assert_eq!(normalize("Déjà Vu"), "deja vu");
}

#[test]
fn strips_control_characters() {
    assert_eq!(normalize("Wall\u{0007}\n"), "wall");
}

#[test]
fn empty_input_is_empty() {
    assert_eq!(normalize(""), "");
}

#[test]
fn keeps_punctuation() {
    // Punctuation is significant: "Blue Sun: Powering the Future" keeps its colon.
    assert_eq!(normalize("Blue Sun: Powering"), "blue sun: powering");
}

#[test]
fn idempotent_on_assorted_inputs() {
    for s in [
        "Déjà Vu",
        "Ænigma",
        "İstanbul",
        "Ḡlorious Ñame",
        "\u{0065}\u{0301}\u{0301}",
        "ß and ﬁ ligature",
        "",
    ] {
        let once = normalize(s);
        assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
    }
}
