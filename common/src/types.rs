//! バックエンドのレスポンス型
//!
//! - FreshAnalysisResponse: `/fresh-image-analysis`
//! - DetectionResponse: `/image-text-detection`
//! - ExtractionResponse: `/image-text-extraction`

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 鮮度解析レスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreshAnalysisResponse {
    pub result_image: String,
    #[serde(default)]
    pub detected_fruits: Vec<DetectedFruit>,
}

/// 検出された青果1件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetectedFruit {
    pub name: String,
    /// 0-100
    pub freshness_index: f64,
    pub freshness: String,
    pub shelf_life: String,
}

impl DetectedFruit {
    /// 0-100に丸めた鮮度（プログレスバー用）
    pub fn freshness_percent(&self) -> f64 {
        if self.freshness_index.is_nan() {
            return 0.0;
        }
        self.freshness_index.clamp(0.0, 100.0)
    }

    pub fn freshness_label(&self) -> String {
        format!("{}% Fresh", format_index(self.freshness_index))
    }
}

fn format_index(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// 文字検出レスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionResponse {
    pub image: String,
}

/// 文字抽出レスポンス（item_informationはシリアライズ済みオブジェクト）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionResponse {
    pub item_information: String,
}

/// パディングの有無を問わないデコーダ（空白は呼び出し側で除去する）
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Base64で届く注釈付き画像
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedImage {
    base64: String,
    bytes: Vec<u8>,
}

impl AnnotatedImage {
    /// バックエンドはJPEGを返す前提
    pub const MIME_TYPE: &'static str = "image/jpeg";

    pub fn from_base64(encoded: &str) -> Result<Self> {
        let compact: String = encoded
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        let bytes = LENIENT
            .decode(&compact)
            .map_err(|e| Error::Parse(format!("画像のBase64デコードに失敗: {}", e)))?;
        Ok(Self {
            base64: compact,
            bytes,
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// `<img src=...>` に渡すData URL
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", Self::MIME_TYPE, self.base64)
    }
}

/// 項目名→値の順序付きレコード
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemInformation {
    entries: Vec<(String, String)>,
}

impl ItemInformation {
    /// シリアライズ済みJSONオブジェクトをキー順を保ったまま読む
    ///
    /// 値が文字列以外の場合はJSON表現のまま文字列化する。
    pub fn parse(serialized: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(serialized.trim())?;
        let object = match value {
            serde_json::Value::Object(map) => map,
            other => {
                return Err(Error::Parse(format!(
                    "item_informationがオブジェクトではありません: {}",
                    other
                )))
            }
        };

        let entries = object
            .into_iter()
            .map(|(key, value)| {
                let text = match value {
                    serde_json::Value::String(s) => s,
                    serde_json::Value::Null => String::new(),
                    other => other.to_string(),
                };
                (key, text)
            })
            .collect();

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `label: value` 形式の行
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect()
    }

    /// キー順を保ったJSONオブジェクト
    pub fn to_json(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
            .collect();
        serde_json::Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_response_camel_case() {
        let json = r#"{
            "resultImage": "YWJj",
            "detectedFruits": [
                {"name": "apple", "freshnessIndex": 82, "freshness": "Fresh", "shelfLife": "5 days"}
            ]
        }"#;
        let response: FreshAnalysisResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.result_image, "YWJj");
        assert_eq!(response.detected_fruits.len(), 1);
        assert_eq!(response.detected_fruits[0].shelf_life, "5 days");
        assert_eq!(response.detected_fruits[0].freshness_index, 82.0);
    }

    #[test]
    fn test_fresh_response_without_fruits() {
        let response: FreshAnalysisResponse =
            serde_json::from_str(r#"{"resultImage": "YWJj"}"#).unwrap();
        assert!(response.detected_fruits.is_empty());
    }

    #[test]
    fn test_freshness_percent_is_clamped() {
        let mut fruit = DetectedFruit {
            freshness_index: 140.0,
            ..Default::default()
        };
        assert_eq!(fruit.freshness_percent(), 100.0);
        fruit.freshness_index = -3.0;
        assert_eq!(fruit.freshness_percent(), 0.0);
        fruit.freshness_index = f64::NAN;
        assert_eq!(fruit.freshness_percent(), 0.0);
    }

    #[test]
    fn test_freshness_label() {
        let mut fruit = DetectedFruit {
            freshness_index: 75.0,
            ..Default::default()
        };
        assert_eq!(fruit.freshness_label(), "75% Fresh");
        fruit.freshness_index = 62.5;
        assert_eq!(fruit.freshness_label(), "62.5% Fresh");
    }

    #[test]
    fn test_annotated_image_decodes() {
        let image = AnnotatedImage::from_base64("YWJj").unwrap();
        assert_eq!(image.bytes(), b"abc");
        assert_eq!(image.data_url(), "data:image/jpeg;base64,YWJj");
    }

    #[test]
    fn test_annotated_image_accepts_wrapped_and_unpadded() {
        // 76桁ごとに改行するエンコーダ出力
        let wrapped = AnnotatedImage::from_base64("YWJj\nZGVm\n").unwrap();
        assert_eq!(wrapped.bytes(), b"abcdef");
        assert_eq!(wrapped.data_url(), "data:image/jpeg;base64,YWJjZGVm");

        let unpadded = AnnotatedImage::from_base64("YWJjZA").unwrap();
        assert_eq!(unpadded.bytes(), b"abcd");

        let padded = AnnotatedImage::from_base64(" YWJjZA==\r\n").unwrap();
        assert_eq!(padded.bytes(), b"abcd");
    }

    #[test]
    fn test_annotated_image_rejects_garbage() {
        let result = AnnotatedImage::from_base64("not base64!!");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_item_information_keeps_key_order() {
        let info = ItemInformation::parse(
            r#"{"product_name":"Oat Milk","brand":"Acme","expiry":"2026-12-01"}"#,
        )
        .unwrap();
        let keys: Vec<&str> = info.entries().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["product_name", "brand", "expiry"]);
        assert_eq!(info.get("brand"), Some("Acme"));
    }

    #[test]
    fn test_item_information_lines() {
        let info = ItemInformation::parse(r#"{"brand":"Acme"}"#).unwrap();
        assert_eq!(info.lines(), vec!["brand: Acme"]);
    }

    #[test]
    fn test_item_information_non_string_values() {
        let info = ItemInformation::parse(r#"{"weight":500,"vegan":true,"note":null}"#).unwrap();
        assert_eq!(info.get("weight"), Some("500"));
        assert_eq!(info.get("vegan"), Some("true"));
        assert_eq!(info.get("note"), Some(""));
    }

    #[test]
    fn test_item_information_rejects_non_object() {
        assert!(matches!(
            ItemInformation::parse(r#"["brand"]"#),
            Err(Error::Parse(_))
        ));
        assert!(matches!(ItemInformation::parse("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_item_information_to_json_round_trips_order() {
        let info = ItemInformation::parse(r#"{"z":"1","a":"2"}"#).unwrap();
        let json = serde_json::to_string(&info.to_json()).unwrap();
        assert_eq!(json, r#"{"z":"1","a":"2"}"#);
    }
}
