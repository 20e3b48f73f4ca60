//! # calculator-e2e
//!
//! Browser acceptance tests for a single-page arithmetic calculator, driven
//! through the Chrome DevTools Protocol (CDP).
//!
//! ## Features
//!
//! - **Browser Session**: Launch a Chrome/Chromium instance, interactive or CI-headless
//! - **Page Object**: Named operations over the calculator (enter operands, select operation, calculate, read result)
//! - **Bounded Waits**: Poll for element presence with a timeout instead of sleeping
//! - **Acceptance Suite**: The calculator scenarios, run against one shared session
//! - **Reports**: Self-contained HTML (with failure screenshots) and JSON
//!
//! ## Running the suite
//!
//! ```bash
//! # Visible browser, fixture page, report.html in the current directory
//! cargo run --bin calculator-e2e
//!
//! # Headless, against another copy of the page
//! CI=1 cargo run --bin calculator-e2e -- --page ../src/index.html --json report.json
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use calculator_e2e::{BrowserSession, CalculatorPage, LaunchOptions, Operation};
//!
//! # fn main() -> calculator_e2e::Result<()> {
//! let session = BrowserSession::launch(LaunchOptions::default())?;
//! let page = CalculatorPage::open(&session, "index.html")?;
//!
//! page.load_page()?;
//! page.enter_first_number(10)?;
//! page.enter_second_number(5)?;
//! page.select_operation(Operation::Add)?;
//! page.click_calculate()?;
//!
//! assert!(page.get_result()?.contains("Résultat: 15"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`browser`]: Browser session management and launch configuration
//! - [`dom`]: Element state, computed styles and form helpers
//! - [`page`]: The calculator page object, its locators and operations
//! - [`wait`]: Bounded polling waits
//! - [`suite`]: Acceptance scenarios and the runner
//! - [`report`]: HTML/JSON run reports
//! - [`error`]: Error types and result aliases

pub mod browser;
pub mod dom;
pub mod error;
pub mod page;
pub mod report;
pub mod suite;
pub mod wait;

pub use browser::{BrowserSession, LaunchOptions};
pub use dom::{BoundingBox, ElementState};
pub use error::{BrowserError, Result};
pub use page::{CalculationOutcome, CalculatorPage, Operation};
pub use report::{ScenarioOutcome, ScenarioReport, SuiteReport};
pub use suite::{Scenario, SuiteConfig, SuiteRunner};
pub use wait::Wait;
