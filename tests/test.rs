use rstest::*;

use cts_urn::{CtsUrn, CtsUrnError};

#[fixture]
fn point_urn() -> CtsUrn {
    "urn:cts:greekLit:tlg0003.tlg001:1.173".parse().unwrap()
}

#[fixture]
fn range_urn() -> CtsUrn {
    "urn:cts:greekLit:tlg0003.tlg001:1.173-1.180".parse().unwrap()
}

#[fixture]
fn work_urn() -> CtsUrn {
    "urn:cts:greekLit:tlg0003.tlg001".parse().unwrap()
}

mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[rstest]
    fn test_point_decomposition(point_urn: CtsUrn) {
        assert_eq!(point_urn.namespace(), "greekLit");
        assert_eq!(point_urn.textgroup(), "tlg0003");
        assert_eq!(point_urn.work(), Some("tlg001"));
        assert_eq!(point_urn.version(), None);
        assert_eq!(point_urn.passage_component(), Some("1.173"));
        assert_eq!(point_urn.passage_node(), Some("1.173"));
        assert!(!point_urn.is_range());
    }

    #[rstest]
    fn test_range_decomposition(range_urn: CtsUrn) {
        assert!(range_urn.is_range());
        assert_eq!(range_urn.range_begin(), Some("1.173"));
        assert_eq!(range_urn.range_end(), Some("1.180"));
        assert_eq!(range_urn.passage_node(), None);
    }

    #[rstest]
    fn test_depth_and_truncation(point_urn: CtsUrn) {
        assert_eq!(point_urn.citation_depth().unwrap(), 2);
        assert_eq!(point_urn.passage(1).unwrap(), "1");
        assert_eq!(point_urn.passage(2).unwrap(), "1.173");
        assert_eq!(
            point_urn.passage(3).unwrap_err(),
            CtsUrnError::InvalidDepthLevel {
                max: 2,
                requested: 3
            }
        );
        assert_eq!(
            point_urn.trim_passage(1).unwrap(),
            "urn:cts:greekLit:tlg0003.tlg001:1"
        );
    }

    #[rstest]
    fn test_work_level_has_no_passage(work_urn: CtsUrn) {
        assert_eq!(work_urn.passage_component(), None);
        assert!(!work_urn.is_range());
        assert!(matches!(
            work_urn.citation_depth(),
            Err(CtsUrnError::NoPassage(_))
        ));
        assert!(matches!(
            work_urn.trim_passage(1),
            Err(CtsUrnError::NoPassage(_))
        ));
    }

    #[rstest]
    fn test_urn_without_passage_is_canonical(point_urn: CtsUrn, work_urn: CtsUrn) {
        assert_eq!(
            point_urn.urn_without_passage(),
            "urn:cts:greekLit:tlg0003.tlg001"
        );
        assert_eq!(
            work_urn.urn_without_passage(),
            point_urn.urn_without_passage()
        );
    }

    #[rstest]
    #[case("urn:cts:greekLit:tlg0003.tlg001:1.173")]
    #[case("urn:cts:greekLit:tlg0003.tlg001.perseus-grc1")]
    #[case("urn:cts:greekLit:tlg0008.tlg001:173f#δημήτριος")]
    #[case("urn:cts:greekLit:tlg0008.tlg001:173f#δημήτριος[2]")]
    #[case("urn:cts:greekLit:tlg0003.tlg001:1.173-1.180")]
    fn test_display_round_trip(#[case] input: &str) {
        let urn: CtsUrn = input.parse().unwrap();
        assert_eq!(urn.to_string(), input);
    }

    #[rstest]
    #[case("abc:def")]
    #[case("URN:CTS:greekLit:tlg0003")]
    #[case("urn:xyz:greekLit:tlg0003")]
    fn test_scheme_rejection(#[case] input: &str) {
        assert!(matches!(
            input.parse::<CtsUrn>(),
            Err(CtsUrnError::InvalidScheme(_))
        ));
    }

    #[rstest]
    #[case("urn:cts:greekLit", CtsUrnError::MalformedUrn("urn:cts:greekLit".to_string()))]
    #[case("urn:cts:greekLit:", CtsUrnError::MissingTextgroup("urn:cts:greekLit:".to_string()))]
    #[case(
        "urn:cts:greekLit:tlg0003.tlg001:1-2-3",
        CtsUrnError::MalformedPassage("1-2-3".to_string())
    )]
    #[case(
        "urn:cts:greekLit:tlg0003.tlg001:1.1#a#b",
        CtsUrnError::MalformedScope("1.1#a#b".to_string())
    )]
    #[case(
        "urn:cts:greekLit:tlg0003.tlg001:1.1#a[x]",
        CtsUrnError::InvalidSubrefIndex("a[x]".to_string())
    )]
    fn test_parse_errors(#[case] input: &str, #[case] expected: CtsUrnError) {
        assert_eq!(input.parse::<CtsUrn>().unwrap_err(), expected);
    }

    #[rstest]
    fn test_subref_on_point() {
        let urn: CtsUrn = "urn:cts:greekLit:tlg0008.tlg001:173f#δημήτριος[2]"
            .parse()
            .unwrap();
        assert_eq!(urn.passage_node(), Some("173f"));
        assert_eq!(urn.subref_1(), Some("δημήτριος"));
        assert_eq!(urn.subref_index_1(), Some(2));
        assert_eq!(urn.subref_2(), None);
        assert_eq!(urn.subref_index_2(), None);
    }

    #[rstest]
    fn test_independent_range_subrefs() {
        let urn: CtsUrn = "urn:cts:greekLit:tlg0003.tlg001:1.1#a[1]-1.2#b[2]"
            .parse()
            .unwrap();
        assert_eq!(urn.subref_1(), Some("a"));
        assert_eq!(urn.subref_index_1(), Some(1));
        assert_eq!(urn.subref_2(), Some("b"));
        assert_eq!(urn.subref_index_2(), Some(2));
    }
}

#[cfg(feature = "serde")]
mod serde_tests {
    use pretty_assertions::assert_eq;

    use cts_urn::CtsUrn;

    #[test]
    fn test_json_round_trip() {
        let input = "urn:cts:greekLit:tlg0008.tlg001:173f#δημήτριος[2]";
        let urn: CtsUrn = input.parse().unwrap();

        let json = serde_json::to_string(&urn).unwrap();
        assert_eq!(json, format!("\"{}\"", input));

        let back: CtsUrn = serde_json::from_str(&json).unwrap();
        assert_eq!(back, urn);
    }

    #[test]
    fn test_deserialize_rejects_bad_urn() {
        let result: Result<CtsUrn, _> = serde_json::from_str("\"abc:def\"");
        assert!(result.is_err());
    }
}
