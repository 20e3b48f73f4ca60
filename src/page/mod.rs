//! Page object for the calculator document
//!
//! [`CalculatorPage`] turns raw element lookups into named operations (enter
//! an operand, pick an operation, calculate, read the result). It borrows a
//! [`BrowserSession`] and keeps no element handles between calls, so every
//! method re-queries the DOM and nothing goes stale across reloads.
//!
//! Every control lookup retries for up to the lookup wait (10 seconds by
//! default) while the element is missing, so controls built by script after
//! the load event are still found.

pub mod location;
pub mod locators;
pub mod operation;
pub mod outcome;

pub use location::page_url;
pub use operation::Operation;
pub use outcome::CalculationOutcome;

use crate::{browser::BrowserSession,
            dom::{self, BoundingBox, ElementState},
            error::{BrowserError, Result},
            wait::Wait};
use headless_chrome::Element;
use std::fmt::Display;

/// Named operations over the calculator page, bound to one browser session
pub struct CalculatorPage<'a> {
    session: &'a BrowserSession,
    url: String,
    lookup_wait: Wait,
    result_wait: Wait,
    ready_wait: Wait,
}

impl<'a> CalculatorPage<'a> {
    /// Create a page object for the document at `url` (already resolved, see [`page_url`])
    pub fn new(session: &'a BrowserSession, url: impl Into<String>) -> Self {
        Self {
            session,
            url: url.into(),
            lookup_wait: Wait::default(),
            result_wait: Wait::default(),
            ready_wait: Wait::default(),
        }
    }

    /// Create a page object from a file path or URL
    pub fn open(session: &'a BrowserSession, location: &str) -> Result<Self> {
        Ok(Self::new(session, page_url(location)?))
    }

    /// Bound on retrying each element lookup while the element is missing
    pub fn with_lookup_wait(mut self, wait: Wait) -> Self {
        self.lookup_wait = wait;
        self
    }

    /// Bound used by [`CalculatorPage::get_result`]
    pub fn with_result_wait(mut self, wait: Wait) -> Self {
        self.result_wait = wait;
        self
    }

    /// Bound used by [`CalculatorPage::wait_until_ready`]
    pub fn with_ready_wait(mut self, wait: Wait) -> Self {
        self.ready_wait = wait;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Navigate to the calculator and wait for the navigation to finish.
    ///
    /// Safe to call repeatedly; every call resets the page's in-memory state.
    pub fn load_page(&self) -> Result<()> {
        log::info!("Loading calculator page {}", self.url);
        self.session.navigate(&self.url)?;
        self.session.wait_for_navigation()
    }

    /// Wait until the ready marker element is present
    pub fn wait_until_ready(&self) -> Result<()> {
        self.session.wait_for_element(locators::READY_MARKER, self.ready_wait)?;
        Ok(())
    }

    fn element(&self, selector: &str) -> Result<Element<'a>> {
        self.session.wait_for_element(selector, self.lookup_wait)
    }

    pub fn title(&self) -> Result<String> {
        self.session.title()
    }

    /// Type into the first operand field. Appends to existing content.
    pub fn enter_first_number(&self, value: impl Display) -> Result<()> {
        self.enter_number(locators::FIRST_NUMBER, &value.to_string())
    }

    /// Type into the second operand field. Appends to existing content.
    pub fn enter_second_number(&self, value: impl Display) -> Result<()> {
        self.enter_number(locators::SECOND_NUMBER, &value.to_string())
    }

    fn enter_number(&self, selector: &str, text: &str) -> Result<()> {
        log::debug!("Typing '{}' into {}", text, selector);
        self.element(selector)?
            .type_into(text)
            .map_err(|e| BrowserError::interaction(format!("type into {}", selector), e))?;
        Ok(())
    }

    /// Empty both operand fields
    pub fn clear_numbers(&self) -> Result<()> {
        for selector in [locators::FIRST_NUMBER, locators::SECOND_NUMBER] {
            dom::clear_value(&self.element(selector)?)?;
        }
        Ok(())
    }

    /// Pick an operation in the selector. Fails with `ElementNotFound` when the
    /// page offers no option with that identifier.
    pub fn select_operation(&self, operation: Operation) -> Result<()> {
        log::debug!("Selecting operation {} ({})", operation, operation.symbol());
        let select = self.element(locators::OPERATION)?;

        if !dom::select_value(&select, operation.value())? {
            return Err(BrowserError::ElementNotFound(format!(
                "No option '{}' in {}",
                operation.value(),
                locators::OPERATION
            )));
        }
        Ok(())
    }

    /// Trigger the calculation.
    ///
    /// A result left over from an earlier calculation is blanked first so that
    /// [`CalculatorPage::get_result`] only ever sees text produced by this click.
    pub fn click_calculate(&self) -> Result<()> {
        // One-shot lookup: before the first calculation there is no result yet
        match self.session.find_element(locators::RESULT) {
            Ok(previous) => dom::clear_text(&previous)?,
            Err(BrowserError::ElementNotFound(_)) => {}
            Err(e) => return Err(e),
        }

        self.element(locators::CALCULATE)?
            .click()
            .map_err(|e| BrowserError::interaction(format!("click {}", locators::CALCULATE), e))?;
        Ok(())
    }

    /// Wait for the result element to hold text, then return that text
    pub fn get_result(&self) -> Result<String> {
        let text = self.result_wait.until(locators::RESULT, || {
            let element = match self.session.find_element(locators::RESULT) {
                Ok(element) => element,
                Err(BrowserError::ElementNotFound(_)) => return Ok(None),
                Err(e) => return Err(e),
            };
            let text = element
                .get_inner_text()
                .map_err(|e| BrowserError::EvaluationFailed(format!("Failed to read {}: {}", locators::RESULT, e)))?;
            Ok(Some(text).filter(|text| !text.trim().is_empty()))
        })?;

        log::debug!("Result text: {}", text);
        Ok(text)
    }

    /// Clear the operands, enter `first` and `second`, select `operation`,
    /// calculate and return the result text
    pub fn calculate(&self, first: impl Display, operation: Operation, second: impl Display) -> Result<String> {
        self.clear_numbers()?;
        self.enter_first_number(first)?;
        self.enter_second_number(second)?;
        self.select_operation(operation)?;
        self.click_calculate()?;
        self.get_result()
    }

    /// Like [`CalculatorPage::calculate`], classifying the text
    pub fn calculate_outcome(
        &self,
        first: impl Display,
        operation: Operation,
        second: impl Display,
    ) -> Result<CalculationOutcome> {
        let text = self.calculate(first, operation, second)?;
        CalculationOutcome::parse(&text)
            .ok_or_else(|| BrowserError::AssertionFailed(format!("Unrecognised result text '{}'", text)))
    }

    pub fn element_state(&self, selector: &str) -> Result<ElementState> {
        ElementState::read(&self.element(selector)?)
    }

    pub fn is_displayed(&self, selector: &str) -> Result<bool> {
        Ok(self.element_state(selector)?.is_displayed)
    }

    /// Computed CSS property value, e.g. `css_property(".container", "max-width")`
    pub fn css_property(&self, selector: &str, name: &str) -> Result<String> {
        dom::css_property(&self.element(selector)?, name)
    }

    pub fn bounding_box(&self, selector: &str) -> Result<BoundingBox> {
        Ok(self.element_state(selector)?.bounding_box)
    }
}
