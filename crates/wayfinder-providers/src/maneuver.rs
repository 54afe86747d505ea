//! Maneuver-code translation
//!
//! Two of the routing providers return machine-readable maneuver codes
//! instead of free-text instructions. This module turns them into readable
//! English.

/// Translate a TomTom maneuver code into readable English.
///
/// Unrecognized codes degrade to a humanized form of the code itself:
/// underscores become spaces and the result is lowercased, so `"FOO_BAR"`
/// yields `"foo bar"` rather than failing.
pub fn tomtom_maneuver_phrase(code: &str) -> String {
    match code {
        "ARRIVE" => "Arrive at your destination".to_string(),
        "ARRIVE_LEFT" => "Arrive at your destination on the left".to_string(),
        "ARRIVE_RIGHT" => "Arrive at your destination on the right".to_string(),
        "DEPART" => "Depart".to_string(),
        "STRAIGHT" => "Continue straight".to_string(),
        "KEEP_RIGHT" => "Keep right".to_string(),
        "BEAR_RIGHT" => "Bear right".to_string(),
        "TURN_RIGHT" => "Turn right".to_string(),
        "SHARP_RIGHT" => "Take a sharp right".to_string(),
        "KEEP_LEFT" => "Keep left".to_string(),
        "BEAR_LEFT" => "Bear left".to_string(),
        "TURN_LEFT" => "Turn left".to_string(),
        "SHARP_LEFT" => "Take a sharp left".to_string(),
        "MAKE_UTURN" => "Make a U-turn".to_string(),
        "ENTER_MOTORWAY" => "Enter the motorway".to_string(),
        "ENTER_FREEWAY" => "Enter the freeway".to_string(),
        "ENTER_HIGHWAY" => "Enter the highway".to_string(),
        "TAKE_EXIT" => "Take the exit".to_string(),
        "MOTORWAY_EXIT_LEFT" => "Take the exit on the left".to_string(),
        "MOTORWAY_EXIT_RIGHT" => "Take the exit on the right".to_string(),
        "TAKE_FERRY" => "Take the ferry".to_string(),
        "ROUNDABOUT_CROSS" => "Cross the roundabout".to_string(),
        "ROUNDABOUT_RIGHT" => "At the roundabout, turn right".to_string(),
        "ROUNDABOUT_LEFT" => "At the roundabout, turn left".to_string(),
        "ROUNDABOUT_BACK" => "At the roundabout, go back".to_string(),
        "TRY_MAKE_UTURN" => "Try to make a U-turn".to_string(),
        "FOLLOW" => "Follow the road".to_string(),
        "SWITCH_PARALLEL_ROAD" => "Switch to the parallel road".to_string(),
        "SWITCH_MAIN_ROAD" => "Switch to the main road".to_string(),
        "ENTRANCE_RAMP" => "Take the entrance ramp".to_string(),
        "WAYPOINT_LEFT" => "Waypoint on the left".to_string(),
        "WAYPOINT_RIGHT" => "Waypoint on the right".to_string(),
        "WAYPOINT_REACHED" => "Waypoint reached".to_string(),
        _ => code.replace('_', " ").to_lowercase(),
    }
}

/// Build a readable instruction from an OSRM step's maneuver fields.
///
/// OSRM encodes each step as a maneuver `type` plus optional `modifier`
/// (direction) and road `name`; the road name `-` means unnamed.
pub fn osrm_step_instruction(
    kind: &str,
    modifier: &str,
    name: &str,
    exit: Option<u64>,
) -> String {
    let named = !name.is_empty() && name != "-";
    let road = if named { name } else { "the road" };
    let pretty_modifier = modifier.replace('_', " ");

    match kind {
        "depart" => {
            if named {
                let heading = if pretty_modifier.is_empty() {
                    "along"
                } else {
                    &pretty_modifier
                };
                format!("Head {heading} {road}")
            } else {
                let heading = if pretty_modifier.is_empty() {
                    "straight"
                } else {
                    &pretty_modifier
                };
                format!("Start and head {heading}")
            }
        }

        "arrive" => "You have arrived at your destination".to_string(),

        "roundabout" | "rotary" => {
            let exit_phrase = match exit {
                Some(number) => format!("exit {number}"),
                None => "the exit".to_string(),
            };
            if named {
                format!("At the roundabout, take {exit_phrase} onto {road}")
            } else {
                format!("At the roundabout, take {exit_phrase}")
            }
        }

        "fork" => match modifier {
            "left" => format!("Keep left to stay on {road}"),
            "right" => format!("Keep right to stay on {road}"),
            _ => {
                let direction = if pretty_modifier.is_empty() {
                    "straight"
                } else {
                    &pretty_modifier
                };
                format!("Keep {direction} on {road}")
            }
        },

        "merge" => {
            if pretty_modifier.is_empty() {
                format!("Merge onto {road}")
            } else {
                format!("Merge {pretty_modifier} onto {road}")
            }
        }

        "on ramp" | "off ramp" => {
            if pretty_modifier.is_empty() {
                format!("Take the ramp onto {road}")
            } else {
                format!("Take the ramp {pretty_modifier} onto {road}")
            }
        }

        "turn" | "continue" | "new name" => {
            if pretty_modifier.is_empty() {
                format!("Continue on {road}")
            } else {
                format!("Turn {pretty_modifier} onto {road}")
            }
        }

        _ => {
            if named {
                format!("Continue on {road}")
            } else {
                "Continue towards your destination".to_string()
            }
        }
    }
}
