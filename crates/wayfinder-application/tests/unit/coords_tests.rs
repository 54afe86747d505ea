//! Tests for free-text coordinate parsing

use wayfinder_application::coords::parse_coordinates;

#[test]
fn test_parses_plain_pair() {
    let point = parse_coordinates("5.6037, -0.1870").unwrap();
    assert_eq!(point.lat, 5.6037);
    assert_eq!(point.lng, -0.1870);
}

#[test]
fn test_parses_pair_without_space() {
    let point = parse_coordinates("-1.5,36.8").unwrap();
    assert_eq!(point.lat, -1.5);
    assert_eq!(point.lng, 36.8);
}

#[test]
fn test_parses_pair_embedded_in_text() {
    let point = parse_coordinates("dropped pin near 5.6037, -0.1870 (Accra)").unwrap();
    assert_eq!(point.lat, 5.6037);
}

#[test]
fn test_parses_integer_coordinates() {
    let point = parse_coordinates("5, -1").unwrap();
    assert_eq!(point.lat, 5.0);
    assert_eq!(point.lng, -1.0);
}

#[test]
fn test_rejects_plain_text() {
    assert!(parse_coordinates("Accra Mall").is_none());
    assert!(parse_coordinates("").is_none());
}
