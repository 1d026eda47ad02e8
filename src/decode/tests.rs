//! Tests for decoder module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;

// ============================================================================
// Detection Tests
// ============================================================================

#[test]
fn test_detect_empty_body() {
    assert_eq!(detect(b""), Payload::Empty);
    assert_eq!(detect(b"  \r\n\t"), Payload::Empty);
}

#[test]
fn test_detect_json() {
    let payload = detect(br#"{"login": "john"}"#);
    assert_eq!(payload.format(), Some(PayloadFormat::Json));
}

#[test]
fn test_detect_xml() {
    let payload = detect(b"<?xml version=\"1.0\"?><userdata><login>john</login></userdata>");
    assert_eq!(payload.format(), Some(PayloadFormat::Xml));

    if let Payload::Xml(root) = payload {
        assert_eq!(root.name, "userdata");
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].text.as_deref(), Some("john"));
    } else {
        panic!("expected XML payload");
    }
}

#[test]
fn test_detect_strips_byte_order_mark() {
    let payload = detect(b"\xEF\xBB\xBF{\"a\": \"1\"}");
    assert_eq!(payload.format(), Some(PayloadFormat::Json));
}

#[test]
fn test_detect_malformed_keeps_both_messages() {
    match detect(b"not json <unclosed") {
        Payload::Malformed { json, xml } => {
            assert!(!json.is_empty());
            assert!(!xml.is_empty());
        }
        other => panic!("expected malformed payload, got {other:?}"),
    }
    assert_eq!(detect(b"not json <unclosed").format(), None);
}

#[test]
fn test_detect_rejects_mismatched_tags() {
    assert!(matches!(
        detect(b"<a><b>1</a></b>"),
        Payload::Malformed { .. }
    ));
}

#[test]
fn test_detect_rejects_second_document_element() {
    assert!(matches!(detect(b"<a/><b/>"), Payload::Malformed { .. }));
    assert!(matches!(
        detect(b"<a>1</a><b>2</b>"),
        Payload::Malformed { .. }
    ));
}

#[test]
fn test_detect_rejects_unclosed_document() {
    assert!(matches!(
        detect(b"<response><payment>"),
        Payload::Malformed { .. }
    ));
}

// ============================================================================
// decode_single: JSON
// ============================================================================

#[test]
fn test_single_json_object_keeps_exact_keys() {
    let record = decode_single(
        br#"{"login": "john", "cash": "12.50", "payid": "42"}"#,
        "userdata",
    )
    .unwrap()
    .unwrap();

    assert_eq!(
        record,
        Record::from([("login", "john"), ("cash", "12.50"), ("payid", "42")])
    );
}

#[test]
fn test_single_json_stringifies_scalars() {
    let record = decode_single(
        br#"{"id": 7, "cash": -1.5, "freezeSelfAvailable": true, "email": null}"#,
        "data",
    )
    .unwrap()
    .unwrap();

    assert_eq!(record.get("id"), Some("7"));
    assert_eq!(record.get("cash"), Some("-1.5"));
    assert_eq!(record.get("freezeSelfAvailable"), Some("true"));
    assert!(record.contains_key("email"));
    assert_eq!(record.get("email"), None);
}

#[test]
fn test_single_json_nested_values_become_json_text() {
    let record = decode_single(br#"{"tags": [1, 2], "meta": {"a": "b"}}"#, "data")
        .unwrap()
        .unwrap();

    assert_eq!(record.get("tags"), Some("[1,2]"));
    assert_eq!(record.get("meta"), Some(r#"{"a":"b"}"#));
}

#[test]
fn test_single_json_merges_fragmented_rows() {
    let record = decode_single(br#"[{"a": "1"}, {"b": "2"}]"#, "data")
        .unwrap()
        .unwrap();

    assert_eq!(record, Record::from([("a", "1"), ("b", "2")]));
}

#[test]
fn test_single_json_fragment_merge_later_key_wins() {
    let record = decode_single(br#"[{"a": "1"}, {"b": "2"}, {"a": "3"}]"#, "data")
        .unwrap()
        .unwrap();

    assert_eq!(record, Record::from([("a", "3"), ("b", "2")]));
}

#[test]
fn test_single_json_array_of_full_rows_takes_first() {
    let record = decode_single(
        br#"[{"name": "A", "url": "http://a"}, {"name": "B", "url": "http://b"}]"#,
        "paysys",
    )
    .unwrap()
    .unwrap();

    assert_eq!(record, Record::from([("name", "A"), ("url", "http://a")]));
}

#[test]
fn test_single_json_empty_shapes_are_absent() {
    assert_eq!(decode_single(b"[]", "data").unwrap(), None);
    assert_eq!(decode_single(b"{}", "data").unwrap(), None);
    assert_eq!(decode_single(b"null", "data").unwrap(), None);
    assert_eq!(decode_single(b"[{}]", "data").unwrap(), None);
    assert_eq!(decode_single(b"", "data").unwrap(), None);
}

#[test]
fn test_single_json_scalar_is_unexpected_shape() {
    let err = decode_single(br#""ok""#, "data").unwrap_err();
    assert!(matches!(err, Error::UnexpectedShape { ref root_tag, .. } if root_tag == "data"));
}

#[test]
fn test_single_json_array_of_scalars_is_unexpected_shape() {
    let err = decode_single(b"[1, 2]", "data").unwrap_err();
    assert!(matches!(err, Error::UnexpectedShape { .. }));
}

// ============================================================================
// decode_single: XML
// ============================================================================

#[test]
fn test_single_xml_children_become_fields() {
    let xml = b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<userstats>
  <userdata>
    <login>john</login>
    <cash>100.5</cash>
  </userdata>
</userstats>";

    let record = decode_single(xml, "userdata").unwrap().unwrap();
    assert_eq!(record, Record::from([("login", "john"), ("cash", "100.5")]));
}

#[test]
fn test_single_xml_attributes_on_matched_element() {
    let record = decode_single(
        br#"<data unic="7" title="Notice"><text>Hello</text></data>"#,
        "data",
    )
    .unwrap()
    .unwrap();

    assert_eq!(
        record,
        Record::from([("unic", "7"), ("title", "Notice"), ("text", "Hello")])
    );
}

#[test]
fn test_single_xml_attributes_on_children() {
    let record = decode_single(
        br#"<root><data><text unic="3" title="Maintenance">Tonight</text></data></root>"#,
        "data",
    )
    .unwrap()
    .unwrap();

    assert_eq!(
        record,
        Record::from([("text", "Tonight"), ("unic", "3"), ("title", "Maintenance")])
    );
}

#[test]
fn test_single_xml_empty_child_is_present_but_empty() {
    let record = decode_single(
        b"<userdata><login>john</login><email></email><phone/></userdata>",
        "userdata",
    )
    .unwrap()
    .unwrap();

    assert_eq!(record.get("email"), Some(""));
    assert_eq!(record.get("phone"), Some(""));
    assert!(!record.contains_key("mobile"));
}

#[test]
fn test_single_xml_unescapes_text_and_cdata() {
    let record = decode_single(
        b"<data><message>Tom &amp; Jerry</message><note><![CDATA[<b>bold</b>]]></note></data>",
        "data",
    )
    .unwrap()
    .unwrap();

    assert_eq!(record.get("message"), Some("Tom & Jerry"));
    assert_eq!(record.get("note"), Some("<b>bold</b>"));
}

#[test]
fn test_single_xml_dates_stay_raw_strings() {
    let record = decode_single(
        b"<response><payment><date>2024-01-15 10:00:00</date></payment></response>",
        "payment",
    )
    .unwrap()
    .unwrap();

    assert_eq!(record.get("date"), Some("2024-01-15 10:00:00"));
}

#[test]
fn test_single_xml_first_match_wins() {
    let record = decode_single(
        b"<r><data><id>1</id></data><data><id>2</id></data></r>",
        "data",
    )
    .unwrap()
    .unwrap();

    assert_eq!(record.get("id"), Some("1"));
}

#[test]
fn test_single_xml_missing_root_tag_is_absent() {
    let result = decode_single(b"<response><other>1</other></response>", "userdata").unwrap();
    assert_eq!(result, None);
}

#[test]
fn test_single_xml_empty_element_is_absent() {
    assert_eq!(decode_single(b"<r><data/></r>", "data").unwrap(), None);
}

#[test]
fn test_single_malformed_input() {
    let err = decode_single(b"not json <unclosed", "data").unwrap_err();
    assert!(matches!(err, Error::MalformedInput { .. }));
}

// ============================================================================
// decode_list
// ============================================================================

#[test]
fn test_list_xml_matches_at_any_depth_in_order() {
    let xml = b"<response>
  <payments>
    <payment><date>2024-01-15 10:00:00</date><summ>100</summ></payment>
    <payment><date>2024-02-15 10:00:00</date><summ>200</summ></payment>
  </payments>
  <payment><date>2024-03-15 10:00:00</date><summ>300</summ></payment>
</response>";

    let records = decode_list(xml, "payment").unwrap();
    let sums: Vec<_> = records.iter().map(|r| r.get("summ").unwrap()).collect();
    assert_eq!(sums, vec!["100", "200", "300"]);
}

#[test]
fn test_list_xml_and_json_agree() {
    let xml = b"<response>
  <payment><date>2024-01-15 10:00:00</date><summ>100</summ><balance>50</balance></payment>
  <payment><date>2024-01-16 11:30:00</date><summ>25</summ><balance>75</balance></payment>
</response>";
    let json = br#"[
        {"date": "2024-01-15 10:00:00", "summ": "100", "balance": "50"},
        {"date": "2024-01-16 11:30:00", "summ": "25", "balance": "75"}
    ]"#;

    assert_eq!(
        decode_list(xml, "payment").unwrap(),
        decode_list(json, "payment").unwrap()
    );
}

#[test]
fn test_list_json_never_merges_fragments() {
    let records = decode_list(br#"[{"tariff": "Basic"}, {"tariff": "Pro"}]"#, "tarifftoswitchallowed")
        .unwrap();

    assert_eq!(
        records,
        vec![
            Record::from([("tariff", "Basic")]),
            Record::from([("tariff", "Pro")]),
        ]
    );
}

#[test]
fn test_list_json_keyed_collection() {
    let records = decode_list(
        br#"{"12": {"summ": "10"}, "3": {"summ": "20"}, "40": {"summ": "30"}}"#,
        "payment",
    )
    .unwrap();

    let sums: Vec<_> = records.iter().map(|r| r.get("summ").unwrap()).collect();
    assert_eq!(sums, vec!["10", "20", "30"]);
}

#[test]
fn test_list_json_single_object_is_one_row() {
    let records = decode_list(br#"{"name": "LiqPay", "url": "https://pay"}"#, "paysys").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get("name"), Some("LiqPay"));
}

#[test]
fn test_list_json_keeps_empty_rows() {
    let records = decode_list(br#"[{}, {"a": "1"}]"#, "data").unwrap();
    assert_eq!(records.len(), 2);
    assert!(records[0].is_empty());
}

#[test]
fn test_list_empty_inputs() {
    assert!(decode_list(b"[]", "payment").unwrap().is_empty());
    assert!(decode_list(b"{}", "payment").unwrap().is_empty());
    assert!(decode_list(b"null", "payment").unwrap().is_empty());
    assert!(decode_list(b"", "payment").unwrap().is_empty());
    assert!(decode_list(b"<response/>", "payment").unwrap().is_empty());
}

#[test]
fn test_list_json_scalar_is_unexpected_shape() {
    let err = decode_list(b"42", "payment").unwrap_err();
    assert!(matches!(err, Error::UnexpectedShape { .. }));
}

#[test]
fn test_list_malformed_input() {
    let err = decode_list(b"<payment><summ>1</payment>", "payment").unwrap_err();
    assert!(matches!(err, Error::MalformedInput { .. }));
}

// ============================================================================
// Helpers
// ============================================================================

#[test]
fn test_merge_fragments() {
    let merged = merge_fragments(vec![
        Record::from([("a", "1")]),
        Record::from([("b", "2")]),
    ]);
    assert_eq!(merged, Record::from([("a", "1"), ("b", "2")]));
    assert!(merge_fragments(Vec::new()).is_empty());
}

#[test]
fn test_find_all_includes_self_and_nested_matches() {
    let mut inner = XmlElement::new("data");
    inner.text = Some("inner".to_string());

    let mut outer = XmlElement::new("data");
    outer.children.push(XmlElement::new("x"));
    outer.children.push(inner);

    let found = outer.find_all("data");
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].children.len(), 2);
    assert_eq!(found[1].text.as_deref(), Some("inner"));
}

#[test]
fn test_field_text_ignores_indentation_around_children() {
    let mut element = XmlElement::new("wrapper");
    element.text = Some("\n    ".to_string());
    element.children.push(XmlElement::new("x"));
    assert_eq!(element.field_text(), "");

    let mut leaf = XmlElement::new("leaf");
    leaf.text = Some(" padded ".to_string());
    assert_eq!(leaf.field_text(), " padded ");
}

#[test]
fn test_record_serializes_as_flat_map() {
    let mut record = Record::from([("a", "1")]);
    record.insert("b", None);

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json, serde_json::json!({"a": "1", "b": null}));
}

#[test]
fn test_decode_from_sniffed_payload() {
    let raw = b"<data><payment><summ>100</summ></payment><payment><summ>5</summ></payment></data>";
    let payload = detect(raw);
    assert_eq!(payload.format(), Some(PayloadFormat::Xml));

    let rows = list_from_payload(payload.clone(), "payment").unwrap();
    assert_eq!(rows, decode_list(raw, "payment").unwrap());
    assert_eq!(rows.len(), 2);

    let first = single_from_payload(payload, "payment").unwrap();
    assert_eq!(first, decode_single(raw, "payment").unwrap());
    assert_eq!(first.unwrap().get("summ"), Some("100"));

    let malformed = detect(b"not json <unclosed");
    assert!(matches!(
        single_from_payload(malformed, "data"),
        Err(Error::MalformedInput { .. })
    ));
}
