//! 请求体字段的宽松反序列化
//!
//! 前端既会传数字也会传数字字符串，空字符串视作未填写。
//! 所有请求结构体字段都是 `Option`，缺失或空白统一成 `None`，由服务层返回 400。

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum IntRepr {
    Int(i64),
    Text(String),
}

impl IntRepr {
    fn positive<E: serde::de::Error>(self) -> Result<Option<i64>, E> {
        match self {
            IntRepr::Int(v) => Ok((v > 0).then_some(v)),
            IntRepr::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return Ok(None);
                }
                let v = s
                    .parse::<i64>()
                    .map_err(|_| E::custom(format!("expected a number, got '{s}'")))?;
                Ok((v > 0).then_some(v))
            }
        }
    }
}

/// 空白字符串视为未填写
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|s| {
        let trimmed = s.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }))
}

/// 正整数（ID、年龄等），0 与空字符串视为未填写
pub fn positive_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntRepr>::deserialize(deserializer)? {
        Some(repr) => repr.positive(),
        None => Ok(None),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(IntRepr),
    Many(Vec<IntRepr>),
}

/// 单个 ID 或 ID 数组
pub fn id_list<'de, D>(deserializer: D) -> Result<Option<Vec<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let ids = match Option::<OneOrMany>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(OneOrMany::One(repr)) => repr.positive()?.into_iter().collect::<Vec<_>>(),
        Some(OneOrMany::Many(reprs)) => {
            let mut ids = Vec::with_capacity(reprs.len());
            for repr in reprs {
                match repr.positive()? {
                    Some(id) => ids.push(id),
                    None => return Err(serde::de::Error::custom("ids must be positive numbers")),
                }
            }
            ids
        }
    };
    Ok((!ids.is_empty()).then_some(ids))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Probe {
        #[serde(deserialize_with = "text")]
        name: Option<String>,
        #[serde(deserialize_with = "positive_int")]
        id: Option<i64>,
        #[serde(deserialize_with = "id_list")]
        ids: Option<Vec<i64>>,
    }

    fn probe(value: serde_json::Value) -> Result<Probe, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_missing_fields_are_none() {
        let p = probe(json!({})).expect("empty object");
        assert!(p.name.is_none() && p.id.is_none() && p.ids.is_none());
    }

    #[test]
    fn test_blank_text_is_none() {
        let p = probe(json!({"name": "   "})).expect("blank string");
        assert!(p.name.is_none());
        let p = probe(json!({"name": " Alice "})).expect("padded string");
        assert_eq!(p.name.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_ids_accept_numbers_and_strings() {
        assert_eq!(probe(json!({"id": 5})).expect("int").id, Some(5));
        assert_eq!(probe(json!({"id": "12"})).expect("str").id, Some(12));
        assert_eq!(probe(json!({"id": 0})).expect("zero").id, None);
        assert_eq!(probe(json!({"id": ""})).expect("empty").id, None);
        assert!(probe(json!({"id": "abc"})).is_err());
    }

    #[test]
    fn test_id_list_single_or_array() {
        assert_eq!(probe(json!({"ids": 3})).expect("single").ids, Some(vec![3]));
        assert_eq!(
            probe(json!({"ids": [1, "2"]})).expect("array").ids,
            Some(vec![1, 2])
        );
        assert_eq!(probe(json!({"ids": []})).expect("empty").ids, None);
        assert!(probe(json!({"ids": [1, 0]})).is_err());
    }
}
