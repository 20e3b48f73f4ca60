//! Pass/fail report for a suite run, rendered as JSON or as a
//! self-contained HTML page with failure screenshots inlined.

use crate::error::Result;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::Serialize;
use std::{fmt::Write as _, path::Path};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScenarioOutcome {
    Passed,
    Failed { error: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    pub description: String,
    pub duration_ms: u64,
    #[serde(flatten)]
    pub outcome: ScenarioOutcome,
    /// PNG captured when the scenario failed
    #[serde(skip)]
    pub screenshot: Option<Vec<u8>>,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        self.outcome == ScenarioOutcome::Passed
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub page_url: String,
    pub duration_ms: u64,
    pub scenarios: Vec<ScenarioReport>,
}

impl SuiteReport {
    pub fn new(page_url: impl Into<String>) -> Self {
        Self {
            page_url: page_url.into(),
            duration_ms: 0,
            scenarios: Vec::new(),
        }
    }

    pub fn push(&mut self, scenario: ScenarioReport) {
        self.scenarios.push(scenario);
    }

    pub fn passed(&self) -> usize {
        self.scenarios.iter().filter(|s| s.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.scenarios.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();

        // Writing into a String cannot fail
        let _ = write!(
            html,
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Calculator acceptance report</title>\n\
             <style>\nbody {{ font-family: sans-serif; margin: 2em; }}\n\
             table {{ border-collapse: collapse; width: 100%; }}\n\
             td, th {{ border: 1px solid #ccc; padding: 6px; text-align: left; vertical-align: top; }}\n\
             .passed {{ color: #1a7f37; }}\n.failed {{ color: #cf222e; }}\n\
             img {{ max-width: 480px; display: block; margin-top: 6px; }}\n</style>\n</head>\n<body>\n\
             <h1>Calculator acceptance report</h1>\n<p>Page: <code>{}</code></p>\n\
             <p>{} scenarios, <span class=\"passed\">{} passed</span>, <span class=\"failed\">{} failed</span> in {} ms</p>\n\
             <table>\n<tr><th>Scenario</th><th>Result</th><th>Duration</th><th>Details</th></tr>\n",
            escape_html(&self.page_url),
            self.scenarios.len(),
            self.passed(),
            self.failed(),
            self.duration_ms,
        );

        for scenario in &self.scenarios {
            let (class, label, details) = match &scenario.outcome {
                ScenarioOutcome::Passed => ("passed", "Passed", String::new()),
                ScenarioOutcome::Failed { error } => ("failed", "Failed", escape_html(error)),
            };

            let _ = write!(
                html,
                "<tr><td><strong>{}</strong><br>{}</td><td class=\"{}\">{}</td><td>{} ms</td><td>{}",
                escape_html(&scenario.name),
                escape_html(&scenario.description),
                class,
                label,
                scenario.duration_ms,
                details,
            );
            if let Some(png) = &scenario.screenshot {
                let _ = write!(
                    html,
                    "<img alt=\"screenshot of {}\" src=\"data:image/png;base64,{}\">",
                    escape_html(&scenario.name),
                    STANDARD.encode(png)
                );
            }
            html.push_str("</td></tr>\n");
        }

        html.push_str("</table>\n</body>\n</html>\n");
        html
    }

    pub fn write_html(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_html())?;
        Ok(())
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SuiteReport {
        let mut report = SuiteReport::new("file:///tmp/index.html");
        report.push(ScenarioReport {
            name: "addition".to_string(),
            description: "10 + 5 shows 15".to_string(),
            duration_ms: 120,
            outcome: ScenarioOutcome::Passed,
            screenshot: None,
        });
        report.push(ScenarioReport {
            name: "division_by_zero".to_string(),
            description: "10 / 0 shows the division error".to_string(),
            duration_ms: 10_004,
            outcome: ScenarioOutcome::Failed {
                error: "Timed out after 10s waiting for #result".to_string(),
            },
            screenshot: Some(vec![0x89, b'P', b'N', b'G']),
        });
        report.duration_ms = 10_200;
        report
    }

    #[test]
    fn test_counts() {
        let report = sample();
        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 1);
        assert!(!report.is_success());

        assert!(SuiteReport::new("about:blank").is_success());
    }

    #[test]
    fn test_json_shape() {
        let json: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();

        assert_eq!(json["page_url"], "file:///tmp/index.html");
        assert_eq!(json["scenarios"][0]["status"], "passed");
        assert_eq!(json["scenarios"][1]["status"], "failed");
        assert_eq!(json["scenarios"][1]["error"], "Timed out after 10s waiting for #result");
        assert!(json["scenarios"][1].get("screenshot").is_none());
    }

    #[test]
    fn test_html_inlines_screenshot() {
        let html = sample().to_html();

        assert!(html.contains("1 passed"));
        assert!(html.contains("1 failed"));
        assert!(html.contains("data:image/png;base64,iVBORw=="));
        assert!(html.contains("Timed out after 10s waiting for #result"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>\"x\" & 'y'</b>"), "&lt;b&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/b&gt;");
    }
}
