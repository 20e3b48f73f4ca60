//! Acceptance scenarios for the calculator page.
//!
//! Every scenario starts with `load_page()`, so none of them depends on what
//! an earlier scenario left behind in a shared session.

use super::{SuiteConfig,
            check::{ensure, ensure_contains, ensure_eq}};
use crate::{error::Result,
            page::{CalculatorPage, Operation, locators}};
use std::time::Instant;

/// One named acceptance scenario
#[derive(Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    run: fn(&CalculatorPage<'_>, &SuiteConfig) -> Result<()>,
}

impl Scenario {
    pub fn run(&self, page: &CalculatorPage<'_>, config: &SuiteConfig) -> Result<()> {
        (self.run)(page, config)
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario").field("name", &self.name).finish()
    }
}

/// Rows of the all-operations sweep: (operation, first, second, expected value)
pub const OPERATION_TABLE: [(Operation, &str, &str, &str); 4] = [
    (Operation::Add, "8", "2", "10"),
    (Operation::Subtract, "8", "2", "6"),
    (Operation::Multiply, "8", "2", "16"),
    (Operation::Divide, "8", "2", "4"),
];

/// Every scenario, in the order the suite runs them
pub fn all() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "page_loads",
            description: "Title and primary controls are present",
            run: page_loads,
        },
        Scenario {
            name: "addition",
            description: "10 + 5 shows 15",
            run: addition,
        },
        Scenario {
            name: "division_by_zero",
            description: "10 / 0 shows the division error",
            run: division_by_zero,
        },
        Scenario {
            name: "all_operations",
            description: "Each operation on 8 and 2",
            run: all_operations,
        },
        Scenario {
            name: "page_load_time",
            description: "Page is ready within the load budget",
            run: page_load_time,
        },
        Scenario {
            name: "decimal_numbers",
            description: "10.5 + 2.5 shows 13",
            run: decimal_numbers,
        },
        Scenario {
            name: "negative_numbers",
            description: "-8 × -2 shows 16",
            run: negative_numbers,
        },
        Scenario {
            name: "ui_colors_and_sizes",
            description: "Container width, font sizes and button geometry",
            run: ui_colors_and_sizes,
        },
        Scenario {
            name: "reload_is_idempotent",
            description: "Loading twice behaves like loading once",
            run: reload_is_idempotent,
        },
    ]
}

pub fn page_loads(page: &CalculatorPage<'_>, _config: &SuiteConfig) -> Result<()> {
    page.load_page()?;

    let title = page.title()?;
    ensure_contains(&title, locators::TITLE)?;

    for selector in locators::PRIMARY_CONTROLS {
        ensure(page.is_displayed(selector)?, || format!("{} is not displayed", selector))?;
    }
    Ok(())
}

pub fn addition(page: &CalculatorPage<'_>, _config: &SuiteConfig) -> Result<()> {
    page.load_page()?;

    page.enter_first_number(10)?;
    page.enter_second_number(5)?;
    page.select_operation(Operation::Add)?;
    page.click_calculate()?;

    ensure_contains(&page.get_result()?, "Résultat: 15")
}

pub fn division_by_zero(page: &CalculatorPage<'_>, _config: &SuiteConfig) -> Result<()> {
    page.load_page()?;

    let outcome = page.calculate_outcome(10, Operation::Divide, 0)?;
    ensure(outcome.is_error(), || format!("Expected an error, got '{}'", outcome))?;
    ensure_contains(&outcome.to_string(), "Erreur: Division par zéro")
}

pub fn all_operations(page: &CalculatorPage<'_>, config: &SuiteConfig) -> Result<()> {
    page.load_page()?;

    for (operation, first, second, expected) in OPERATION_TABLE {
        let result = page.calculate(first, operation, second)?;
        ensure_contains(&result, &format!("Résultat: {}", expected))?;
        std::thread::sleep(config.settle_delay);
    }
    Ok(())
}

pub fn page_load_time(page: &CalculatorPage<'_>, config: &SuiteConfig) -> Result<()> {
    let start = Instant::now();

    page.load_page()?;
    page.wait_until_ready()?;

    let load_time = start.elapsed();
    log::info!("Load time: {:.2} seconds", load_time.as_secs_f64());

    ensure(load_time < config.load_budget, || {
        format!(
            "Page too slow to load: {:.2}s (budget {:.2}s)",
            load_time.as_secs_f64(),
            config.load_budget.as_secs_f64()
        )
    })
}

pub fn decimal_numbers(page: &CalculatorPage<'_>, _config: &SuiteConfig) -> Result<()> {
    page.load_page()?;

    let result = page.calculate(10.5, Operation::Add, 2.5)?;
    ensure_contains(&result, "Résultat: 13")
}

pub fn negative_numbers(page: &CalculatorPage<'_>, _config: &SuiteConfig) -> Result<()> {
    page.load_page()?;

    let result = page.calculate(-8, Operation::Multiply, -2)?;
    ensure_contains(&result, "Résultat: 16")
}

pub fn ui_colors_and_sizes(page: &CalculatorPage<'_>, _config: &SuiteConfig) -> Result<()> {
    page.load_page()?;

    ensure_eq(
        page.css_property(locators::CONTAINER, "max-width")?.as_str(),
        "400px",
        "container max-width",
    )?;
    ensure_eq(
        page.css_property(locators::FIRST_NUMBER, "font-size")?.as_str(),
        "16px",
        "input font-size",
    )?;
    ensure_eq(
        page.css_property(locators::CALCULATE, "font-size")?.as_str(),
        "16px",
        "button font-size",
    )?;

    let button = page.element_state(locators::CALCULATE)?;
    ensure(button.is_displayed, || "calculate button is not displayed".to_string())?;
    ensure(button.bounding_box.is_visible(), || {
        format!(
            "calculate button has an empty box ({}x{})",
            button.bounding_box.width, button.bounding_box.height
        )
    })
}

pub fn reload_is_idempotent(page: &CalculatorPage<'_>, _config: &SuiteConfig) -> Result<()> {
    page.load_page()?;
    page.load_page()?;

    let result = page.calculate(10, Operation::Add, 5)?;
    ensure_contains(&result, "Résultat: 15")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_scenario_names_are_unique() {
        let scenarios = all();
        let names: HashSet<_> = scenarios.iter().map(|s| s.name).collect();

        assert_eq!(scenarios.len(), 9);
        assert_eq!(names.len(), scenarios.len());
    }

    #[test]
    fn test_operation_table_covers_every_operation() {
        let ops: HashSet<_> = OPERATION_TABLE.iter().map(|(op, ..)| *op).collect();
        assert_eq!(ops.len(), Operation::ALL.len());
    }
}
