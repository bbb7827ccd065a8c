//! Fixture tables for both representations and the facade.

use aic::{
    from_base32, is_valid, to_base32, validate, validate_base10, validate_base32, ErrorKind,
};
use aic_testing::VALID_PAIRS;
use rstest::rstest;

#[test]
fn test_known_pairs_convert_both_ways() {
    aic_testing::init_tracing();
    for &(decimal, compact) in VALID_PAIRS {
        assert_eq!(to_base32(decimal).unwrap(), compact, "{decimal}");
        assert_eq!(from_base32(compact).unwrap(), decimal, "{compact}");
        assert_eq!(validate(compact).unwrap(), decimal);
        assert_eq!(validate(decimal).unwrap(), decimal);
    }
}

#[rstest]
#[case::body_only("00030705", ErrorKind::InvalidLength)]
#[case::short("00307052", ErrorKind::InvalidLength)]
#[case::wrong_check_digit("010307052", ErrorKind::InvalidChecksum)]
#[case::punctuation("0003070.3", ErrorKind::InvalidFormat)]
#[case::illegal_prefix("100307052", ErrorKind::InvalidFormat)]
fn test_base10_rejections(#[case] input: &str, #[case] kind: ErrorKind) {
    assert_eq!(validate_base10(input).unwrap_err().kind(), kind);
}

#[rstest]
#[case::wrong_check_symbol("009CVL", ErrorKind::InvalidChecksum)]
#[case::too_long("009CVD1", ErrorKind::InvalidLength)]
#[case::decimal_length("100307052", ErrorKind::InvalidLength)]
#[case::foreign_symbol("00$CVD", ErrorKind::InvalidFormat)]
#[case::lower_case_vowel("009cad", ErrorKind::InvalidFormat)]
#[case::lower_case_wrong_check("009cvl", ErrorKind::InvalidChecksum)]
fn test_base32_rejections(#[case] input: &str, #[case] kind: ErrorKind) {
    assert_eq!(validate_base32(input).unwrap_err().kind(), kind);
}

#[rstest]
#[case("000307052", true)]
#[case("00030705.", false)]
#[case("009CVD", true)]
#[case("09CVD", false)]
#[case(" 009CVD", false)]
#[case("009CVD ", false)]
#[case("009cvd", true)]
#[case("01p19J", true)]
fn test_is_valid(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_valid(input), expected);
}

#[rstest]
#[case("009cvd", "000307052")]
#[case("18pfkq", "042645046")]
#[case("1c87X7", "045359015")]
fn test_validate_lower_case_compact(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(validate(input).unwrap(), expected);
    assert_eq!(from_base32(input).unwrap(), expected);
}

#[rstest]
#[case::too_short("00307052", ErrorKind::InvalidLength)]
#[case::seven("009CVD1", ErrorKind::InvalidLength)]
#[case::empty("", ErrorKind::InvalidLength)]
#[case::nine_bad_prefix("100307052", ErrorKind::InvalidFormat)]
#[case::nine_bad_check("000307053", ErrorKind::InvalidChecksum)]
#[case::six_bad_check("009CVL", ErrorKind::InvalidChecksum)]
#[case::six_bad_symbol("00$CVD", ErrorKind::InvalidFormat)]
fn test_validate_error_kind(#[case] input: &str, #[case] kind: ErrorKind) {
    assert_eq!(validate(input).unwrap_err().kind(), kind);
}
