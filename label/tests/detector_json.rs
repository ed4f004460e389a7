use label::{DetectionSet, ObjectClass};

#[test]
fn parse_detector_output() -> anyhow::Result<()> {
    let text = r#"{
        "chair": [
            {"x1": 120, "y1": 40, "x2": 160, "y2": 80, "confidence": 0.91},
            {"x1": 1000, "y1": 1000, "x2": 1040, "y2": 1040, "confidence": 0.42}
        ],
        "dining table": [{"x1": 0, "y1": 0, "x2": 100, "y2": 100, "confidence": 0.77}],
        "person": []
    }"#;
    let set: DetectionSet = serde_json::from_str(text)?;

    assert_eq!(set.count(ObjectClass::Chair), 2);
    assert_eq!(set.count(ObjectClass::DiningTable), 1);
    assert_eq!(set.count(ObjectClass::Bench), 0);
    assert_eq!(set.count(ObjectClass::Couch), 0);
    assert_eq!(set.len(), 3);

    let second = &set.get(ObjectClass::Chair)[1];
    assert_eq!(second.rect().xyxy(), [1000, 1000, 1040, 1040]);
    assert_eq!(second.confidence().raw(), 0.42);
    Ok(())
}

#[test]
fn serialize_keeps_every_class() -> anyhow::Result<()> {
    let value = serde_json::to_value(DetectionSet::new())?;
    let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    keys.sort_unstable();

    assert_eq!(keys, ["bench", "chair", "couch", "dining table", "person"]);
    Ok(())
}

#[test]
fn reject_malformed_input() {
    let inverted = r#"{"person": [{"x1": 50, "y1": 0, "x2": 10, "y2": 10, "confidence": 0.5}]}"#;
    assert!(serde_json::from_str::<DetectionSet>(inverted).is_err());

    let unknown_class = r#"{"bicycle": []}"#;
    assert!(serde_json::from_str::<DetectionSet>(unknown_class).is_err());

    let bad_confidence = r#"{"couch": [{"x1": 0, "y1": 0, "x2": 10, "y2": 10, "confidence": 3.0}]}"#;
    assert!(serde_json::from_str::<DetectionSet>(bad_confidence).is_err());
}
