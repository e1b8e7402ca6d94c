#![cfg(feature = "serde")]
//! Serialization-boundary tests for the plain tagged representation.
//!
//! ResultRepr is the only persisted-state-like surface of the crate: an
//! internally tagged object whose `_tag` field discriminates the channel.

use dyad::container::result::{Result, ResultRepr, error, ok};
use serde_json::json;

#[test]
fn ok_serializes_with_the_tag_field() {
    let repr = ok::<_, String>(5).dehydrate();
    let encoded = serde_json::to_value(&repr).unwrap();
    assert_eq!(encoded, json!({ "_tag": "Ok", "value": 5 }));
}

#[test]
fn error_serializes_with_the_tag_field() {
    let repr = error::<i32, _>("gone".to_string()).dehydrate();
    let encoded = serde_json::to_value(&repr).unwrap();
    assert_eq!(encoded, json!({ "_tag": "Error", "error": "gone" }));
}

#[test]
fn hydrate_reconstructs_from_decoded_json() {
    let decoded: ResultRepr<i32, String> =
        serde_json::from_value(json!({ "_tag": "Ok", "value": 42 })).unwrap();
    assert_eq!(Result::hydrate(decoded), ok(42));

    let decoded: ResultRepr<i32, String> =
        serde_json::from_value(json!({ "_tag": "Error", "error": "gone" })).unwrap();
    assert_eq!(Result::hydrate(decoded), error("gone".to_string()));
}

#[test]
fn json_roundtrip_preserves_both_channels() {
    let original: Result<i32, String> = ok(7);
    let text = serde_json::to_string(&original.clone().dehydrate()).unwrap();
    let back: ResultRepr<i32, String> = serde_json::from_str(&text).unwrap();
    assert_eq!(Result::hydrate(back), original);

    let original: Result<i32, String> = error("lost".to_string());
    let text = serde_json::to_string(&original.clone().dehydrate()).unwrap();
    let back: ResultRepr<i32, String> = serde_json::from_str(&text).unwrap();
    assert_eq!(Result::hydrate(back), original);
}
