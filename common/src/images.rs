//! ギャラリー画像フィールドの正規化
//!
//! `images` はストア側で文字列配列・JSON文字列・欠落のいずれかで届く。
//! ここで一箇所に集約して `Option<Vec<String>>` に揃える。

use serde_json::Value;

/// `images` の生値を正規化
///
/// - 欠落・falsy（null, false, 0, 空文字） → `None`
/// - 配列 → 文字列要素のみ残す（順序維持）
/// - 文字列 → JSONとして解釈し、配列なら同様にフィルタ。失敗・非配列は `None`
/// - その他 → `None`
pub fn normalize_images(raw: &Value) -> Option<Vec<String>> {
    match raw {
        Value::Array(items) => Some(strings_only(items)),
        Value::String(s) if !s.is_empty() => match serde_json::from_str::<Value>(s) {
            Ok(Value::Array(items)) => Some(strings_only(&items)),
            _ => None,
        },
        _ => None,
    }
}

fn strings_only(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_and_falsy() {
        assert_eq!(normalize_images(&Value::Null), None);
        assert_eq!(normalize_images(&json!(false)), None);
        assert_eq!(normalize_images(&json!(0)), None);
        assert_eq!(normalize_images(&json!("")), None);
    }

    #[test]
    fn test_array_filters_non_strings() {
        assert_eq!(
            normalize_images(&json!(["a", 3, "b"])),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(
            normalize_images(&json!([null, {"url": "x"}, true])),
            Some(vec![])
        );
    }

    #[test]
    fn test_json_string() {
        assert_eq!(
            normalize_images(&json!(r#"["/img/1.jpg","/img/2.jpg"]"#)),
            Some(vec!["/img/1.jpg".to_string(), "/img/2.jpg".to_string()])
        );
        assert_eq!(
            normalize_images(&json!(r#"["a", 1, "b"]"#)),
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_string_that_is_not_a_list() {
        assert_eq!(normalize_images(&json!("not json")), None);
        assert_eq!(normalize_images(&json!(r#"{"a": 1}"#)), None);
        assert_eq!(normalize_images(&json!(r#""just a string""#)), None);
    }

    #[test]
    fn test_other_shapes() {
        assert_eq!(normalize_images(&json!(42)), None);
        assert_eq!(normalize_images(&json!({"images": ["a"]})), None);
    }

    #[test]
    fn test_encoded_and_native_lists_agree() {
        let lists: Vec<Vec<&str>> = vec![vec![], vec!["x"], vec!["c", "a", "b", "a"]];
        for list in lists {
            let expected: Vec<String> = list.iter().map(|s| s.to_string()).collect();
            let encoded = Value::String(serde_json::to_string(&list).unwrap());
            let native = json!(list);
            assert_eq!(normalize_images(&encoded), Some(expected.clone()));
            assert_eq!(normalize_images(&native), Some(expected));
        }
    }
}
