use nrdb_core::{
    Card, Catalog, Cycle, Mwl, Pack, RecordSet, ScanMode, decode_records, extract_queries,
    queries_in_message, render_plain, render_rich,
};
use serde_json::json;

fn two_card_catalog() -> Catalog {
    let cards: RecordSet<serde_json::Value> = serde_json::from_value(json!({
        "data": [
            {
                "code": "01103",
                "title": "Ice Wall",
                "type_code": "ice",
                "faction_code": "weyland-consortium",
                "keywords": "Barrier",
                "cost": 1,
                "strength": 1,
                "faction_cost": 1,
                "text": "[subroutine] End the run.",
                "pack_code": "core"
            },
            {
                "code": "99001",
                "title": "Wall",
                "type_code": "program",
                "faction_code": "shaper",
                "text": "Gain 1[credit].",
                "pack_code": "core"
            }
        ]
    }))
    .unwrap();

    let cards: Vec<Card> = decode_records("cards", cards.data);
    Catalog::build(cards, &[], &[], &[])
}

#[test]
fn message_to_rendered_card() {
    let catalog = two_card_catalog();

    let queries = extract_queries("[[wall]]");
    assert_eq!(queries, vec!["wall"]);

    let entry = catalog.best_match(queries[0]).unwrap();
    assert_eq!(entry.card.title, "Wall");
    assert!(!entry.is_banned);
    assert!(!entry.has_rotated);

    let plain = render_plain(entry);
    let subtitle = plain.lines().nth(1).unwrap();
    assert!(subtitle.starts_with("**Program"));
    assert!(!plain.contains("Banned!"));
    assert!(!plain.contains("Rotated!"));

    let rich = render_rich(entry);
    assert!(!rich.contains('\n'));
    assert!(rich.contains("<blockquote><p>Gain 1🪙.</p></blockquote>"));
}

#[test]
fn several_queries_in_one_message() {
    let catalog = two_card_catalog();
    let body = "> [[ice wall]] was quoted\nwhat about [[wal]] and [[Ice Wal]]?";

    let titles: Vec<_> = queries_in_message(body, ScanMode::UnquotedLines)
        .into_iter()
        .filter_map(|q| catalog.best_match(q))
        .map(|e| e.card.title.clone())
        .collect();
    assert_eq!(titles, vec!["Wall", "Ice Wall"]);
}

#[test]
fn joined_datasets() {
    let packs: Vec<Pack> = decode_records(
        "packs",
        vec![
            json!({ "code": "core", "cycle_code": "core" }),
            json!({ "code": "sg", "cycle_code": "system-gateway" }),
        ],
    );
    let cycles: Vec<Cycle> = decode_records(
        "cycles",
        vec![
            json!({ "code": "core", "rotated": true }),
            json!({ "code": "system-gateway", "rotated": false }),
        ],
    );
    let mwls: Vec<Mwl> = decode_records(
        "mwl",
        vec![
            json!({ "code": "old", "active": false, "cards": { "30001": {} } }),
            json!({ "code": "standard", "active": true, "cards": { "01012": { "deck_limit": 0 } } }),
        ],
    );
    let cards: Vec<Card> = decode_records(
        "cards",
        vec![
            json!({ "code": "01012", "title": "Parasite", "type_code": "program", "pack_code": "core" }),
            json!({ "code": "30001", "title": "Tread Lightly", "type_code": "event", "pack_code": "sg" }),
        ],
    );

    let catalog = Catalog::build(cards, &packs, &cycles, &mwls);

    let parasite = catalog.lookup_title("parasite").unwrap();
    assert!(parasite.is_banned);
    assert!(parasite.has_rotated);
    assert_eq!(
        render_plain(parasite).lines().nth(1).unwrap(),
        "**Program • Banned! • Rotated!**"
    );

    let tread = catalog.lookup_title("Tread Lightly").unwrap();
    assert!(!tread.is_banned);
    assert!(!tread.has_rotated);
}
