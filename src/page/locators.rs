//! CSS selectors for every calculator element the page object touches.
//!
//! A markup change only needs an edit here.

/// First operand input
pub const FIRST_NUMBER: &str = "#num1";

/// Second operand input
pub const SECOND_NUMBER: &str = "#num2";

/// `<select>` whose option values are the operation identifiers
pub const OPERATION: &str = "#operation";

pub const CALCULATE: &str = "#calculate";

/// Output element; only present once a calculation has run
pub const RESULT: &str = "#result";

/// Present once the page is fully loaded
pub const READY_MARKER: &str = "#calculator";

pub const CONTAINER: &str = ".container";

/// Substring the document title must contain
pub const TITLE: &str = "Calculatrice Simple";

/// The primary controls, in page order
pub const PRIMARY_CONTROLS: [&str; 4] = [FIRST_NUMBER, SECOND_NUMBER, OPERATION, CALCULATE];
