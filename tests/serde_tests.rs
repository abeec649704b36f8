#![cfg(feature = "serde")]

use fast_decimal::{FastDecimal32, FastDecimal64};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Invoice {
    net: FastDecimal64<4>,
    rate: FastDecimal32<2>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct RawInvoice {
    #[serde(with = "fast_decimal::serde::raw")]
    net: FastDecimal64<4>,
    #[serde(with = "fast_decimal::serde::raw")]
    rate: FastDecimal32<2>,
}

#[test]
fn it_serializes_json_as_strings() {
    let invoice = Invoice {
        net: FastDecimal64::from_raw(-1520_0050),
        rate: FastDecimal32::from_raw(2000),
    };
    let json = serde_json::to_string(&invoice).unwrap();
    assert_eq!(json, r#"{"net":"-1520.0050","rate":"20.00"}"#);
    assert_eq!(serde_json::from_str::<Invoice>(&json).unwrap(), invoice);
}

#[test]
fn it_deserializes_json_numbers() {
    let invoice: Invoice = serde_json::from_str(r#"{"net":1520,"rate":0.125}"#).unwrap();
    assert_eq!(invoice.net, FastDecimal64::from_raw(1520_0000));
    assert_eq!(invoice.rate, FastDecimal32::from_raw(12));
}

#[test]
fn it_rejects_json_values_out_of_range() {
    assert!(serde_json::from_str::<Invoice>(r#"{"net":"1","rate":"21474837"}"#).is_err());
    assert!(serde_json::from_str::<Invoice>(r#"{"net":"1","rate":true}"#).is_err());
}

#[test]
fn it_serializes_json_as_raw_integers() {
    let invoice = RawInvoice {
        net: FastDecimal64::MIN,
        rate: FastDecimal32::from_raw(-7),
    };
    let json = serde_json::to_string(&invoice).unwrap();
    assert_eq!(json, r#"{"net":-9223372036854775808,"rate":-7}"#);
    assert_eq!(serde_json::from_str::<RawInvoice>(&json).unwrap(), invoice);
}

#[test]
fn it_round_trips_through_bincode() {
    let invoice = RawInvoice {
        net: FastDecimal64::from_raw(98_7654),
        rate: FastDecimal32::MAX,
    };
    let bytes = bincode::serialize(&invoice).unwrap();
    assert_eq!(bytes.len(), 12);
    assert_eq!(bincode::deserialize::<RawInvoice>(&bytes).unwrap(), invoice);
}
