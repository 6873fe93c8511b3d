use crate::terraform::AttributeValue;

/// Searches `value` for a string exactly equal to `target`.
///
/// Returns the dotted path to the match, relative to `value`: empty for a
/// direct scalar match or a list element match, `key` or `key.sub` for a match
/// inside a map. Map keys are visited in lexicographic order and the first
/// match wins. Lists only match on their scalar elements.
pub fn search(value: &AttributeValue, target: &str) -> Option<String> {
    let mut path = Vec::new();
    walk(value, target, &mut path).then(|| path.join("."))
}

fn walk<'a>(value: &'a AttributeValue, target: &str, path: &mut Vec<&'a str>) -> bool {
    match value {
        AttributeValue::String(s) => s == target,
        AttributeValue::List(items) => items.iter().any(|item| item.as_str() == Some(target)),
        AttributeValue::Map(entries) => {
            for (key, nested) in entries {
                path.push(key);
                if walk(nested, target, path) {
                    return true;
                }
                path.pop();
            }
            false
        }
        AttributeValue::Unsupported => false,
    }
}
