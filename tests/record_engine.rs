use rinkbot::{
    parse_minutes, GameRecord, OvertimeClassifier, OvertimeKind, RecordEngine, RecordReport,
    TeamTally,
};

fn row(cells: &[Option<&str>]) -> GameRecord {
    let cells: Vec<Option<String>> = cells.iter().map(|c| c.map(str::to_string)).collect();
    GameRecord::from_cells(&cells).expect("valid row")
}

fn text_row(v: &str, vs: &str, h: &str, hs: &str, vg: &str, hg: &str) -> GameRecord {
    row(&[Some("2024-01-01 19:00:00"), Some(v), Some(vs), Some(h), Some(hs), Some(vg), Some(hg)])
}

fn season_rows() -> Vec<GameRecord> {
    vec![
        text_row("Oilers", "3", "Canucks", "2", "60:00 minutes", "60:00 minutes"),
        text_row("Canucks", "4.0", "Oilers", "3.0", "62:30 minutes", "62:30 minutes"),
        text_row("Canucks", "2", "Oilers", "3", "65:00 minutes", "65:00 minutes"),
        text_row("Flames", "5", "Oilers", "1", "60:00 minutes", "59:10 minutes"),
        row(&[Some("2024-01-09"), Some("Oilers"), Some("2"), Some("Canucks"), Some("1")]),
        row(&[
            Some("2024-01-10"),
            Some("canucks"),
            Some("3"),
            Some("OILERS"),
            Some("2"),
            Some("0"),
            Some("0"),
            Some("1"),
            Some("0"),
        ]),
    ]
}

#[test]
fn time_tokens_parse_to_fractional_minutes() {
    assert_eq!(parse_minutes("Stuart Skinner 65:00 minutes"), 65.0);
    assert!((parse_minutes("Demko saved 30, 61:15 minutes") - 61.25).abs() < 1e-9);
    assert_eq!(parse_minutes(""), 0.0);
    assert_eq!(parse_minutes("None"), 0.0);
    assert_eq!(parse_minutes("garbage text"), 0.0);
}

#[test]
fn classifier_thresholds() {
    let classifier = OvertimeClassifier::default();
    let kind = |v: &str, h: &str| classifier.classify(Some(v), Some(h)).outcome;

    assert!(!kind("60:00 minutes", "58:30 minutes").went_to_overtime);
    assert_eq!(kind("65:00 minutes", "40:00 minutes").kind, OvertimeKind::Shootout);
    assert_eq!(kind("62:30 minutes", "62:30 minutes").kind, OvertimeKind::Overtime);
    assert_eq!(kind("60:01 minutes", "60:00 minutes").kind, OvertimeKind::Overtime);
}

#[test]
fn single_team_record_from_spec_examples() {
    let engine = RecordEngine::default();

    let win = [text_row("Oilers", "3", "Canucks", "2", "60:00 minutes", "60:00 minutes")];
    assert_eq!(
        *engine.compute_record(&win, "Oilers", "all").primary(),
        TeamTally { wins: 1, losses: 0, overtime_losses: 0 }
    );

    let shootout_loss = [text_row("Oilers", "2", "Canucks", "3", "65:00 minutes", "65:00 minutes")];
    assert_eq!(
        *engine.compute_record(&shootout_loss, "Oilers", "all").primary(),
        TeamTally { wins: 0, losses: 0, overtime_losses: 1 }
    );
}

#[test]
fn mixed_schema_rows_aggregate_together() {
    let engine = RecordEngine::default();
    let rows = season_rows();

    let overall = engine.compute_record(&rows, "oilers", "all");
    // W (reg), OTL, W (SO), L, W (no evidence), OTL (flags)
    assert_eq!(overall.to_string(), "EDM: 3-1-2");
    assert_eq!(overall.games_counted(), 6);

    let matchup = engine.compute_record(&rows, "Oilers", "Canucks");
    assert_eq!(matchup.to_string(), "EDM: 3-0-2 vs VAN: 2-2-1");
    assert_eq!(matchup.games_skipped(), 1);
}

#[test]
fn head_to_head_is_symmetric() {
    let engine = RecordEngine::default();
    let rows = season_rows();

    let forward = engine.compute_record(&rows, "Oilers", "Canucks");
    let reverse = engine.compute_record(&rows, "Canucks", "Oilers");

    assert_eq!(forward.primary(), reverse.opponent().unwrap());
    assert_eq!(forward.opponent().unwrap(), reverse.primary());

    // Every decided game is a win for one side and a loss for the other
    let a = forward.primary();
    let b = forward.opponent().unwrap();
    assert_eq!(a.wins, b.losses + b.overtime_losses);
    assert_eq!(b.wins, a.losses + a.overtime_losses);
}

#[test]
fn compute_record_is_idempotent() {
    let engine = RecordEngine::default();
    let rows = season_rows();
    let before = rows.clone();

    let first = engine.compute_record(&rows, "Oilers", "Canucks");
    let second = engine.compute_record(&rows, "Oilers", "Canucks");

    assert_eq!(first, second);
    assert_eq!(rows, before);
}

#[test]
fn no_matching_rows_gives_zero_tally() {
    let engine = RecordEngine::default();
    let report = engine.compute_record(&season_rows(), "Kraken", "Sharks");

    match report {
        RecordReport::HeadToHead { team_a, team_b, games_counted, .. } => {
            assert_eq!(games_counted, 0);
            assert_eq!(team_a.tally, TeamTally::default());
            assert_eq!(team_b.tally, TeamTally::default());
            assert_eq!(team_a.acronym, "SEA");
            assert_eq!(team_b.acronym, "SJS");
        }
        other => panic!("expected head-to-head report, got {other:?}"),
    }
}
