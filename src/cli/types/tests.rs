//! Unit tests for ID and season types

use super::*;

#[test]
fn test_player_id_roundtrip_display() {
    let id: PlayerId = "2544".parse().unwrap();
    assert_eq!(id, PlayerId::new(2544));
    assert_eq!(id.to_string(), "2544");
}

#[test]
fn test_player_id_invalid() {
    assert!("lebron".parse::<PlayerId>().is_err());
}

#[test]
fn test_team_id_aggregate_marker() {
    assert!(TeamId::new(0).is_aggregate());
    assert!(!TeamId::new(1610612747).is_aggregate());
    assert_eq!(TeamId::AGGREGATE.as_u32(), 0);
}

#[test]
fn test_season_label() {
    assert_eq!(Season::new(2024).label(), "2024-25");
    assert_eq!(Season::new(1999).label(), "1999-00");
    assert_eq!(Season::new(2008).to_string(), "2008-09");
}

#[test]
fn test_season_parse_year() {
    let season: Season = "2024".parse().unwrap();
    assert_eq!(season, Season::new(2024));
}

#[test]
fn test_season_parse_label() {
    let season: Season = "2003-04".parse().unwrap();
    assert_eq!(season, Season::new(2003));

    let season: Season = "1999-00".parse().unwrap();
    assert_eq!(season, Season::new(1999));
}

#[test]
fn test_season_parse_mismatched_label() {
    assert!("2003-05".parse::<Season>().is_err());
    assert!("2003-2004".parse::<Season>().is_err());
    assert!("twenty".parse::<Season>().is_err());
}

#[test]
fn test_season_parse_out_of_range_years() {
    assert!("65535".parse::<Season>().is_err());
    assert!("65535-36".parse::<Season>().is_err());
    assert!("9999".parse::<Season>().is_err());
    assert!("1945".parse::<Season>().is_err());
    assert_eq!("1946-47".parse::<Season>().unwrap(), Season::new(1946));
    assert_eq!("9998".parse::<Season>().unwrap().label(), "9998-99");
}

#[test]
fn test_season_label_never_overflows() {
    assert_eq!(Season::new(u16::MAX).label(), "65535-36");
    assert_eq!(Season::new(9999).label(), "9999-00");
}

#[test]
fn test_season_default() {
    assert_eq!(Season::default().label(), "2025-26");
}
