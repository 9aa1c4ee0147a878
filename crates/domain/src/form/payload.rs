//! # 送信ペイロード
//!
//! 受信したままの未検証の値 [`SubmissionPayload`] と、
//! 検証を通過した値 [`ValidatedSubmission`] を定義する。

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// 未検証の送信ペイロード
///
/// フィールド名 → 生の文字列値。値はトリムも変換もしない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionPayload {
    values: BTreeMap<String, String>,
}

impl SubmissionPayload {
    /// (フィールド名, 値) の組から作成する
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// JSON オブジェクトから作成する
    ///
    /// - 文字列はそのまま保持する
    /// - 0 以外の数値と `true` は JSON 表記の文字列に変換する
    /// - `0`・`false`・`null`・配列・オブジェクトは未指定として扱う
    pub fn from_json_object(object: Map<String, Value>) -> Self {
        let values = object
            .into_iter()
            .filter_map(|(key, value)| json_text(value).map(|text| (key, text)))
            .collect();

        Self { values }
    }

    /// フィールドの値を取得する
    ///
    /// 空文字列は未指定と同じく `None` を返す。
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// 送信されたフィールド名の一覧（ログ出力用。値は含めない）
    pub fn field_names(&self) -> Vec<&str> {
        self.values.keys().map(String::as_str).collect()
    }
}

/// JSON 値をフィールド値の文字列にする（未指定扱いなら `None`）
fn json_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) if is_zero(&n) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some(true.to_string()),
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn is_zero(n: &serde_json::Number) -> bool {
    n.as_f64().is_some_and(|f| f == 0.0)
}

/// 検証済みフィールド
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedField {
    pub name:  &'static str,
    pub label: &'static str,
    pub value: String,
}

/// 検証済みの送信内容
///
/// [`super::validate`] からしか作成できない。フィールドはスキーマの宣言順に並び、
/// 未指定の任意フィールドは含まれない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubmission {
    fields: Vec<ValidatedField>,
}

impl ValidatedSubmission {
    pub(crate) fn new(fields: Vec<ValidatedField>) -> Self {
        Self { fields }
    }

    /// スキーマ順のフィールド
    pub fn fields(&self) -> &[ValidatedField] {
        &self.fields
    }
}

#[cfg(test)]
impl ValidatedSubmission {
    pub(crate) fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}
