use crate::error::{BrowserError, Result};
use headless_chrome::Element;
use serde::{Deserialize, Serialize};

/// Snapshot of one element's rendered state, read in a single round trip
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElementState {
    /// HTML tag name, lower-cased (e.g., "div", "button", "input")
    pub tag_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// `innerText` of the element
    #[serde(default)]
    pub text: String,

    /// Current `value` for form controls
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Rendered: not `display: none`, not `visibility: hidden`, non-empty box
    #[serde(default)]
    pub is_displayed: bool,

    pub bounding_box: BoundingBox,
}

/// Bounding box coordinates for an element
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ElementState {
    /// Read the state of a live element
    pub fn read(element: &Element<'_>) -> Result<Self> {
        let js_code = include_str!("element_state.js");
        let json = call_for_string(element, js_code, vec![])?;

        serde_json::from_str(&json)
            .map_err(|e| BrowserError::EvaluationFailed(format!("Failed to parse element state: {}", e)))
    }
}

impl BoundingBox {
    /// Check if the bounding box is visible (has non-zero dimensions)
    pub fn is_visible(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Computed value of a CSS property (e.g. `max-width` → `"400px"`)
pub fn css_property(element: &Element<'_>, name: &str) -> Result<String> {
    call_for_string(
        element,
        "function(name) { return window.getComputedStyle(this).getPropertyValue(name); }",
        vec![serde_json::json!(name)],
    )
}

/// Empty a text/number input and notify listeners
pub fn clear_value(element: &Element<'_>) -> Result<()> {
    element
        .call_js_fn(
            r#"function() {
                this.value = '';
                this.dispatchEvent(new Event('input', { bubbles: true }));
                this.dispatchEvent(new Event('change', { bubbles: true }));
            }"#,
            vec![],
            false,
        )
        .map_err(|e| BrowserError::interaction("clear", e))?;

    Ok(())
}

/// Select the `<option>` whose value matches. Returns `false` when no option has that value.
pub fn select_value(element: &Element<'_>, value: &str) -> Result<bool> {
    let result = element
        .call_js_fn(
            r#"function(value) {
                const option = Array.from(this.options || []).find(o => o.value === value);
                if (!option) { return false; }
                this.value = value;
                this.dispatchEvent(new Event('input', { bubbles: true }));
                this.dispatchEvent(new Event('change', { bubbles: true }));
                return true;
            }"#,
            vec![serde_json::json!(value)],
            false,
        )
        .map_err(|e| BrowserError::interaction("select", e))?;

    Ok(result.value.and_then(|v| v.as_bool()).unwrap_or(false))
}

/// Blank the element's text content in place
pub fn clear_text(element: &Element<'_>) -> Result<()> {
    element
        .call_js_fn("function() { this.textContent = ''; }", vec![], false)
        .map_err(|e| BrowserError::interaction("clear text", e))?;

    Ok(())
}

fn call_for_string(element: &Element<'_>, function: &str, args: Vec<serde_json::Value>) -> Result<String> {
    let result = element
        .call_js_fn(function, args, false)
        .map_err(|e| BrowserError::EvaluationFailed(e.to_string()))?;

    match result.value {
        Some(serde_json::Value::String(s)) => Ok(s),
        Some(other) => Ok(other.to_string()),
        None => Err(BrowserError::EvaluationFailed("No value returned from JavaScript".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_state_from_script_json() {
        let json = r#"{
            "tag_name": "input",
            "id": "num1",
            "text": "",
            "value": "10.5",
            "is_displayed": true,
            "bounding_box": {"x": 8.0, "y": 64.0, "width": 360.0, "height": 38.5}
        }"#;

        let state: ElementState = serde_json::from_str(json).unwrap();
        assert_eq!(state.value.as_deref(), Some("10.5"));
        assert_eq!(state.bounding_box.height, 38.5);
        assert!(state.is_displayed);
    }

    #[test]
    fn test_parse_state_without_optional_fields() {
        let json = r#"{"tag_name": "div", "bounding_box": {"x": 0, "y": 0, "width": 0, "height": 0}}"#;

        let state: ElementState = serde_json::from_str(json).unwrap();
        assert!(state.id.is_none());
        assert!(state.value.is_none());
        assert!(!state.is_displayed);
        assert!(state.text.is_empty());
    }

    #[test]
    fn test_bounding_box_visibility() {
        let bbox = BoundingBox { x: 10.0, y: 20.0, width: 100.0, height: 50.0 };
        assert!(bbox.is_visible());

        let invisible_bbox = BoundingBox { x: 0.0, y: 0.0, width: 0.0, height: 0.0 };
        assert!(!invisible_bbox.is_visible());

        let flat = BoundingBox { x: 0.0, y: 0.0, width: 200.0, height: 0.0 };
        assert!(!flat.is_visible());
    }
}
