//! In-place value substitution over JSON trees.

use serde_json::Value;

/// Replace every value equal to `found` inside `tree` with `replacement`.
///
/// Objects and arrays are searched at any depth; the root itself is never
/// replaced. A replaced value is not searched further. Returns whether
/// anything was replaced.
///
/// The walk keeps its own stack, so deeply nested input cannot overflow the
/// call stack.
///
/// # Examples
///
/// ```rust
/// use handykit::helpers::modify_by_value;
/// use serde_json::json;
///
/// let mut order = json!({"order": {"tags": "new"}});
/// assert!(modify_by_value(&mut order, &json!("new"), &json!("paid")));
/// assert_eq!(order, json!({"order": {"tags": "paid"}}));
/// ```
pub fn modify_by_value(tree: &mut Value, found: &Value, replacement: &Value) -> bool {
    let mut replaced = false;
    let mut stack: Vec<&mut Value> = vec![tree];

    while let Some(node) = stack.pop() {
        match node {
            Value::Object(map) => {
                for child in map.values_mut() {
                    replaced |= visit(child, found, replacement, &mut stack);
                }
            }
            Value::Array(items) => {
                for child in items.iter_mut() {
                    replaced |= visit(child, found, replacement, &mut stack);
                }
            }
            _ => {}
        }
    }

    replaced
}

fn visit<'a>(
    child: &'a mut Value,
    found: &Value,
    replacement: &Value,
    stack: &mut Vec<&'a mut Value>,
) -> bool {
    if *child == *found {
        *child = replacement.clone();
        return true;
    }

    if child.is_object() || child.is_array() {
        stack.push(child);
    }
    false
}
