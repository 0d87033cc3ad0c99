use super::*;

#[test]
fn try_from_accepts_one_through_three() {
    assert_eq!(Layer::try_from(1), Ok(Layer::Snapshot));
    assert_eq!(Layer::try_from(2), Ok(Layer::Insights));
    assert_eq!(Layer::try_from(3), Ok(Layer::Comprehensive));
}

#[test]
fn try_from_rejects_out_of_range() {
    assert_eq!(Layer::try_from(0), Err(InvalidLayer(0)));
    assert_eq!(Layer::try_from(4), Err(InvalidLayer(4)));
    assert_eq!(Layer::try_from(255), Err(InvalidLayer(255)));
}

#[test]
fn layers_are_totally_ordered() {
    assert!(Layer::Snapshot < Layer::Insights);
    assert!(Layer::Insights < Layer::Comprehensive);
    assert_eq!(Layer::ALL.iter().max(), Some(&Layer::Comprehensive));
}

#[test]
fn default_layer_is_snapshot() {
    assert_eq!(Layer::default(), Layer::Snapshot);
}

#[test]
fn serializes_as_number() {
    assert_eq!(serde_json::to_string(&Layer::Insights).unwrap(), "2");
    let layer: Layer = serde_json::from_str("3").unwrap();
    assert_eq!(layer, Layer::Comprehensive);
    assert!(serde_json::from_str::<Layer>("7").is_err());
}

#[test]
fn display_is_layer_number() {
    assert_eq!(Layer::Comprehensive.to_string(), "3");
    assert_eq!(Layer::Snapshot.label(), "Health Snapshot");
}
