//! Tests for maneuver-code translation

use crate::maneuver::{osrm_step_instruction, tomtom_maneuver_phrase};

/// Every code TomTom documents for its guidance objects
const TOMTOM_CODES: &[&str] = &[
    "ARRIVE",
    "ARRIVE_LEFT",
    "ARRIVE_RIGHT",
    "DEPART",
    "STRAIGHT",
    "KEEP_RIGHT",
    "BEAR_RIGHT",
    "TURN_RIGHT",
    "SHARP_RIGHT",
    "KEEP_LEFT",
    "BEAR_LEFT",
    "TURN_LEFT",
    "SHARP_LEFT",
    "MAKE_UTURN",
    "ENTER_MOTORWAY",
    "ENTER_FREEWAY",
    "ENTER_HIGHWAY",
    "TAKE_EXIT",
    "MOTORWAY_EXIT_LEFT",
    "MOTORWAY_EXIT_RIGHT",
    "TAKE_FERRY",
    "ROUNDABOUT_CROSS",
    "ROUNDABOUT_RIGHT",
    "ROUNDABOUT_LEFT",
    "ROUNDABOUT_BACK",
    "TRY_MAKE_UTURN",
    "FOLLOW",
    "SWITCH_PARALLEL_ROAD",
    "SWITCH_MAIN_ROAD",
    "ENTRANCE_RAMP",
    "WAYPOINT_LEFT",
    "WAYPOINT_RIGHT",
    "WAYPOINT_REACHED",
];

#[test]
fn test_every_tomtom_code_has_readable_text() {
    for code in TOMTOM_CODES {
        let phrase = tomtom_maneuver_phrase(code);
        assert!(!phrase.is_empty(), "no phrase for {code}");
        // Translated phrases are prose, not code soup
        assert!(!phrase.contains('_'), "untranslated phrase for {code}");
    }
}

#[test]
fn test_known_tomtom_translations() {
    assert_eq!(
        tomtom_maneuver_phrase("ROUNDABOUT_LEFT"),
        "At the roundabout, turn left"
    );
    assert_eq!(tomtom_maneuver_phrase("MAKE_UTURN"), "Make a U-turn");
    assert_eq!(
        tomtom_maneuver_phrase("ARRIVE"),
        "Arrive at your destination"
    );
}

#[test]
fn test_unrecognized_tomtom_code_is_humanized() {
    assert_eq!(tomtom_maneuver_phrase("FOO_BAR"), "foo bar");
    assert_eq!(tomtom_maneuver_phrase("ZIGZAG"), "zigzag");
}

#[test]
fn test_osrm_depart_phrasing() {
    assert_eq!(
        osrm_step_instruction("depart", "", "Oxford Street", None),
        "Head along Oxford Street"
    );
    assert_eq!(
        osrm_step_instruction("depart", "north", "", None),
        "Start and head north"
    );
}

#[test]
fn test_osrm_arrive_phrasing() {
    assert_eq!(
        osrm_step_instruction("arrive", "", "", None),
        "You have arrived at your destination"
    );
}

#[test]
fn test_osrm_roundabout_phrasing() {
    assert_eq!(
        osrm_step_instruction("roundabout", "", "Ring Road", Some(2)),
        "At the roundabout, take exit 2 onto Ring Road"
    );
    assert_eq!(
        osrm_step_instruction("rotary", "", "-", None),
        "At the roundabout, take the exit"
    );
}

#[test]
fn test_osrm_turn_phrasing() {
    assert_eq!(
        osrm_step_instruction("turn", "left", "High Street", None),
        "Turn left onto High Street"
    );
    assert_eq!(
        osrm_step_instruction("continue", "", "High Street", None),
        "Continue on High Street"
    );
    assert_eq!(
        osrm_step_instruction("turn", "sharp_left", "High Street", None),
        "Turn sharp left onto High Street"
    );
}

#[test]
fn test_osrm_fork_merge_and_ramp_phrasing() {
    assert_eq!(
        osrm_step_instruction("fork", "left", "N1", None),
        "Keep left to stay on N1"
    );
    assert_eq!(
        osrm_step_instruction("merge", "right", "N1", None),
        "Merge right onto N1"
    );
    assert_eq!(
        osrm_step_instruction("on ramp", "", "N1", None),
        "Take the ramp onto N1"
    );
}

#[test]
fn test_osrm_unknown_type_defaults() {
    assert_eq!(
        osrm_step_instruction("exotic", "", "High Street", None),
        "Continue on High Street"
    );
    assert_eq!(
        osrm_step_instruction("exotic", "", "-", None),
        "Continue towards your destination"
    );
}
