//! Unit tests for model serialization shapes

use foliotrack::models::indicators::IndicatorReadout;
use foliotrack::models::prediction::{Prediction, Signal};

#[test]
fn test_signal_wire_format() {
    assert_eq!(serde_json::to_string(&Signal::Buy).unwrap(), "\"BUY\"");
    assert_eq!(serde_json::to_string(&Signal::Sell).unwrap(), "\"SELL\"");
    assert_eq!(serde_json::to_string(&Signal::Hold).unwrap(), "\"HOLD\"");
    assert_eq!(
        serde_json::to_string(&Signal::InsufficientData).unwrap(),
        "\"INSUFFICIENT_DATA\""
    );
    assert_eq!(serde_json::to_string(&Signal::Error).unwrap(), "\"ERROR\"");
}

#[test]
fn test_readout_formats_two_decimals() {
    let readout = IndicatorReadout::from_values(Some(54.321), Some(-1.005), Some(100.0));
    assert_eq!(readout.rsi.as_deref(), Some("54.32"));
    assert_eq!(readout.macd.as_deref(), Some("-1.00"));
    assert_eq!(readout.sma20.as_deref(), Some("100.00"));
}

#[test]
fn test_readout_absent_fields() {
    let readout = IndicatorReadout::from_values(None, None, Some(3.0));
    assert!(readout.rsi.is_none());
    assert!(readout.macd.is_none());
    assert!(!readout.is_empty());
    assert!(IndicatorReadout::default().is_empty());
}

#[test]
fn test_insufficient_data_prediction_omits_absent_fields() {
    let prediction = Prediction::insufficient_data("AAPL");
    let json = serde_json::to_value(&prediction).unwrap();
    assert_eq!(json["prediction"], "INSUFFICIENT_DATA");
    assert_eq!(json["confidence"], 0);
    assert!(json.get("current_price").is_none());
    assert!(json.get("predicted_7d").is_none());
    assert!(json.get("indicators").is_none());
    assert!(json.get("error").is_none());
}

#[test]
fn test_failure_prediction_carries_message() {
    let prediction = Prediction::failure("AAPL", "upstream down");
    let json = serde_json::to_value(&prediction).unwrap();
    assert_eq!(json["prediction"], "ERROR");
    assert_eq!(json["confidence"], 0);
    assert_eq!(json["error"], "upstream down");
}
