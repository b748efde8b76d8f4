use super::*;

fn entry(card: Card) -> CardEntry {
    CardEntry {
        card,
        is_banned: false,
        has_rotated: false,
    }
}

fn subtitle(rendered: &str) -> &str {
    rendered.split('\n').nth(1).unwrap()
}

fn ice_wall() -> Card {
    Card {
        code: "01103".into(),
        title: "Ice Wall".into(),
        type_code: Some("ice".into()),
        faction_code: Some("weyland-consortium".into()),
        keywords: Some("Barrier".into()),
        text: Some("Ice Wall can be advanced.\n[subroutine] End the run.".into()),
        cost: Some(Some(1)),
        strength: Some(Some(1)),
        faction_cost: Some(1),
        ..Default::default()
    }
}

#[test]
fn rich_ice_card() {
    let out = render_rich(&entry(ice_wall()));
    assert_eq!(
        out,
        "<strong>Ice Wall</strong> (https://netrunnerdb.com/en/card/01103)<br />\
         <strong>ICE: Barrier • Rez: 1 • Strength: 1 • \
         <font color=\"darkgreen\">Weyland-Consortium</font> ●○○○○</strong><br />\
         <blockquote><p>Ice Wall can be advanced.<br />↳ End the run.</p></blockquote>"
    );
}

#[test]
fn plain_ice_card() {
    let out = render_plain(&entry(ice_wall()));
    assert_eq!(
        out,
        "**Ice Wall** (https://netrunnerdb.com/en/card/01103)\n\
         **ICE: Barrier • Rez: 1 • Strength: 1 • Weyland-Consortium ●○○○○**\n\
         Ice Wall can be advanced.\n↳ End the run."
    );
}

#[test]
fn minimal_record_has_only_type_and_faction() {
    let card = Card {
        code: "99001".into(),
        title: "Wall".into(),
        type_code: Some("program".into()),
        faction_code: Some("shaper".into()),
        ..Default::default()
    };
    let out = render_plain(&entry(card));
    assert_eq!(subtitle(&out), "**Program • Shaper**");
    assert!(!out.contains('X'));
    assert_eq!(out.lines().count(), 2);
}

#[test]
fn null_stats_render_x() {
    let card = Card {
        code: "1".into(),
        title: "Variable".into(),
        type_code: Some("event".into()),
        cost: Some(None),
        strength: Some(None),
        ..Default::default()
    };
    let out = render_plain(&entry(card));
    assert_eq!(subtitle(&out), "**Event • Cost: X • Strength: X**");
}

#[test]
fn rez_label_only_for_rezzable_types() {
    for (type_code, label) in [
        ("asset", "Asset • Rez: 3"),
        ("upgrade", "Upgrade • Rez: 3"),
        ("operation", "Operation • Cost: 3"),
        ("hardware", "Hardware • Cost: 3"),
    ] {
        let card = Card {
            code: "1".into(),
            title: "T".into(),
            type_code: Some(type_code.into()),
            cost: Some(Some(3)),
            ..Default::default()
        };
        assert_eq!(subtitle(&render_plain(&entry(card))), format!("**{label}**"));
    }
}

#[test]
fn stats_in_fixed_order() {
    let card = Card {
        code: "1".into(),
        title: "Everything".into(),
        type_code: Some("identity".into()),
        influence_limit: Some(Some(15)),
        minimum_deck_size: Some(Some(45)),
        base_link: Some(Some(1)),
        trash_cost: Some(Some(2)),
        strength: Some(Some(3)),
        memory_cost: Some(Some(1)),
        cost: Some(Some(4)),
        ..Default::default()
    };
    assert_eq!(
        subtitle(&render_plain(&entry(card))),
        "**Identity • Cost: 4 • MU: 1 • Strength: 3 • Trash: 2 • Link: 1 • \
         Minimum deck size: 45 • Influence limit: 15**"
    );
}

#[test]
fn agenda_pair() {
    let mut card = Card {
        code: "1".into(),
        title: "Hostile Takeover".into(),
        type_code: Some("agenda".into()),
        advancement_cost: Some(Some(2)),
        agenda_points: Some(Some(1)),
        ..Default::default()
    };
    assert_eq!(subtitle(&render_plain(&entry(card.clone()))), "**Agenda • 2 / 1**");

    card.advancement_cost = Some(None);
    assert_eq!(subtitle(&render_plain(&entry(card.clone()))), "**Agenda • X / 1**");

    card.agenda_points = None;
    assert_eq!(subtitle(&render_plain(&entry(card))), "**Agenda**");
}

#[test]
fn faction_names_and_colors() {
    let card = Card {
        code: "1".into(),
        title: "T".into(),
        faction_code: Some("nbn".into()),
        ..Default::default()
    };
    assert!(render_rich(&entry(card)).contains("<font color=\"darkorange\">NBN</font>"));

    let card = Card {
        code: "1".into(),
        title: "T".into(),
        faction_code: Some("neutral-runner".into()),
        ..Default::default()
    };
    assert!(render_rich(&entry(card)).contains("<font color=\"gray\">Neutral</font>"));

    let card = Card {
        code: "1".into(),
        title: "T".into(),
        faction_code: Some("mystery".into()),
        ..Default::default()
    };
    let out = render_rich(&entry(card));
    assert!(out.contains("<strong>Mystery</strong>"));
    assert!(!out.contains("<font"));
}

#[test]
fn zero_influence_has_no_pips() {
    let card = Card {
        code: "1".into(),
        title: "T".into(),
        faction_code: Some("anarch".into()),
        faction_cost: Some(0),
        ..Default::default()
    };
    let out = render_plain(&entry(card));
    assert!(!out.contains('●'));
    assert!(!out.contains('○'));
}

#[test]
fn full_influence_pips() {
    let card = Card {
        code: "1".into(),
        title: "T".into(),
        faction_code: Some("criminal".into()),
        faction_cost: Some(5),
        ..Default::default()
    };
    assert_eq!(subtitle(&render_plain(&entry(card))), "**Criminal ●●●●●**");
}

#[test]
fn influence_pips_saturate_at_five() {
    let card = Card {
        code: "1".into(),
        title: "T".into(),
        faction_code: Some("criminal".into()),
        faction_cost: Some(7),
        ..Default::default()
    };
    assert_eq!(subtitle(&render_plain(&entry(card))), "**Criminal ●●●●●**");
}

#[test]
fn huge_influence_renders_five_pips() {
    let card: Card = serde_json::from_value(serde_json::json!({
        "code": "1",
        "title": "X",
        "type_code": "program",
        "faction_code": "anarch",
        "faction_cost": i64::MAX
    }))
    .unwrap();
    let out = render_plain(&entry(card));
    assert_eq!(subtitle(&out), "**Program • Anarch ●●●●●**");
    assert!(!out.contains('○'));
}

#[test]
fn bare_record_has_no_subtitle() {
    let card = Card {
        code: "1".into(),
        title: "X".into(),
        ..Default::default()
    };
    assert_eq!(
        render_rich(&entry(card.clone())),
        "<strong>X</strong> (https://netrunnerdb.com/en/card/1)"
    );
    assert_eq!(
        render_plain(&entry(card)),
        "**X** (https://netrunnerdb.com/en/card/1)"
    );
}

#[test]
fn plain_text_keeps_angle_brackets_that_are_not_tags() {
    let card = Card {
        code: "1".into(),
        title: "T".into(),
        type_code: Some("event".into()),
        text: Some("<strong>Play</strong> if 1 < 2 and 3 > 2.".into()),
        ..Default::default()
    };
    let out = render_plain(&entry(card));
    assert_eq!(out.lines().nth(2), Some("Play if 1 < 2 and 3 > 2."));
}

#[test]
fn banned_and_rotated_suffixes() {
    let mut e = entry(Card {
        code: "1".into(),
        title: "T".into(),
        type_code: Some("event".into()),
        ..Default::default()
    });
    e.is_banned = true;
    e.has_rotated = true;
    assert_eq!(subtitle(&render_plain(&e)), "**Event • Banned! • Rotated!**");
}

#[test]
fn unique_marker() {
    let card = Card {
        code: "1".into(),
        title: "Jackson Howard".into(),
        uniqueness: Some(true),
        ..Default::default()
    };
    let out = render_rich(&entry(card));
    assert!(out.starts_with("<strong>◆ Jackson Howard</strong>"));
}

#[test]
fn glyph_substitution_leaves_other_text() {
    assert_eq!(substitute_glyphs("[click] [subroutine]"), "🕗 ↳");
    assert_eq!(
        substitute_glyphs("Gain 2[credit]. [recurring-credit] [mu] [link] [trash] [interrupt]"),
        "Gain 2🪙. 🪙↻ 🔋 🔗 🗑 ⚡"
    );
    assert_eq!(substitute_glyphs("[unknown] text"), "[unknown] text");
}

#[test]
fn plain_strips_html() {
    let card = Card {
        code: "1".into(),
        title: "T".into(),
        text: Some("<strong>When you rez</strong> this, gain 1[credit].".into()),
        ..Default::default()
    };
    let out = render_plain(&entry(card));
    assert!(out.ends_with("When you rez this, gain 1🪙."));

    let card = Card {
        code: "1".into(),
        title: "T".into(),
        text: Some("<strong>When you rez</strong> this".into()),
        ..Default::default()
    };
    assert!(render_rich(&entry(card)).contains("<p><strong>When you rez</strong> this</p>"));
}

#[test]
fn markup_from_str() {
    assert_eq!("rich".parse::<Markup>().unwrap(), Markup::Rich);
    assert_eq!("Markdown".parse::<Markup>().unwrap(), Markup::Plain);
    assert!("xml".parse::<Markup>().is_err());
}

#[test]
fn title_case_matches_faction_codes() {
    assert_eq!(title_case("haas-bioroid"), "Haas-Bioroid");
    assert_eq!(title_case("sunny-lebeau"), "Sunny-Lebeau");
    assert_eq!(title_case("program"), "Program");
}
