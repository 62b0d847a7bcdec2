use std::io::Write;
use std::path::Path;

use side_scroller::entities::EntityTag;
use side_scroller::error::LevelError;
use side_scroller::placement::*;

use tempfile::NamedTempFile;

#[test]
fn parses_records_in_order() {
    let placements = parse_placements("PLAYER,100,687\nCOIN,-40,12\n").unwrap();
    assert_eq!(
        placements,
        vec![
            Placement::new(EntityTag::Player, 100, 687),
            Placement::new(EntityTag::Coin, -40, 12),
        ]
    );
}

#[test]
fn tolerates_whitespace_blank_lines_and_bom() {
    let src = "\u{feff}PLATFORM, 1536, 745\r\n\r\n  ENEMY_BOSS,2200,620  \n\n";
    let placements = parse_placements(src).unwrap();
    assert_eq!(
        placements,
        vec![
            Placement::new(EntityTag::Platform, 1536, 745),
            Placement::new(EntityTag::EnemyBoss, 2200, 620),
        ]
    );
}

#[test]
fn empty_input_has_no_records() {
    assert!(parse_placements("").unwrap().is_empty());
}

#[test]
fn unknown_tag_reports_line() {
    let err = parse_placements("PLAYER,1,2\n\nDRAGON,3,4").unwrap_err();
    match &err {
        LevelError::UnknownTag { line, tag } => {
            assert_eq!(*line, 3);
            assert_eq!(tag, "DRAGON");
        }
        other => panic!("unexpected {other}"),
    }
    assert!(err.is_malformed_record());
}

#[test]
fn non_integer_coordinate_is_rejected() {
    for src in ["COIN,1.5,2", "COIN,x,2", "COIN,1,"] {
        let err = parse_placements(src).unwrap_err();
        assert!(matches!(err, LevelError::BadCoordinate { line: 1, .. }), "{src}: {err}");
    }
}

#[test]
fn wrong_field_count_is_rejected() {
    let err = parse_placements("COIN,1").unwrap_err();
    assert!(matches!(err, LevelError::FieldCount { line: 1, found: 2 }));
    let err = parse_placements("COIN,1,2,3").unwrap_err();
    assert!(matches!(err, LevelError::FieldCount { line: 1, found: 4 }));
}

#[test]
fn structural_errors_are_not_malformed_records() {
    assert!(!LevelError::Missing(EntityTag::Player).is_malformed_record());
    assert!(!LevelError::Duplicate(EntityTag::EndFlag).is_malformed_record());
}

#[test]
fn loads_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "PLAYER,100,687").unwrap();
    writeln!(file, "END_FLAG,2500,687").unwrap();
    let placements = load_placements(file.path()).unwrap();
    assert_eq!(placements.len(), 2);
    assert_eq!(placements[1].tag, EntityTag::EndFlag);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_placements(Path::new("/nonexistent/level.csv")).unwrap_err();
    assert!(matches!(err, LevelError::Io { .. }));
}
