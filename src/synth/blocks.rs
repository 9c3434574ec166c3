//! Canned text used to assemble descriptions and system prompts.

/// Prefix of every generated description.
pub const DESCRIPTION_LABEL: &str = "Use this agent for: ";

/// Number of requirement characters quoted in the description.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

pub const PROACTIVE_CLAUSE: &str = " Use PROACTIVELY when this kind of work comes up.";

pub const TESTING_TRIGGER: &str = " Invoke when tests need to be written, run, or fixed.";
pub const REVIEW_TRIGGER: &str = " Invoke after code changes that should be reviewed.";
pub const DEBUGGING_TRIGGER: &str = " Invoke when errors, failures, or unexpected behavior appear.";
pub const DOCUMENTATION_TRIGGER: &str = " Invoke when documentation needs to be written or updated.";
pub const REFACTORING_TRIGGER: &str = " Invoke when code needs restructuring without behavior changes.";

pub const TESTING_BLOCK: &str = "\
## Testing Approach

1. Identify the behavior under test and the inputs that exercise it
2. Prefer small, focused tests that each verify one behavior
3. Cover edge cases: empty inputs, boundaries, and error paths
4. Run the existing suite before and after changes
5. When a test fails, determine whether the code or the test is wrong before fixing either";

pub const REVIEW_BLOCK: &str = "\
## Review Process

1. Read the change in full before commenting
2. Check correctness first: logic errors, missing error handling, unsafe assumptions
3. Check readability: naming, structure, and comments that explain intent
4. Flag security concerns such as unvalidated input or leaked secrets
5. Group feedback by severity: must fix, should fix, and suggestions";

pub const DEBUGGING_BLOCK: &str = "\
## Debugging Methodology

1. Reproduce the problem reliably and capture the exact error output
2. Form a hypothesis about the cause from the evidence
3. Narrow the search: isolate the failing component and inspect its inputs
4. Apply the smallest fix that addresses the root cause
5. Verify the fix and add a test that would have caught the problem";

pub const DOCUMENTATION_BLOCK: &str = "\
## Documentation Standards

1. Write for the reader who has no context on the change
2. Start with what the code does and how to use it
3. Include runnable examples for public interfaces
4. Keep documentation next to the code it describes
5. Update existing docs whenever behavior changes";

pub const REFACTORING_BLOCK: &str = "\
## Refactoring Principles

1. Make sure tests cover the code before restructuring it
2. Change structure, never behavior, in a refactoring step
3. Work in small steps and run the tests after each one
4. Remove duplication and dead code as you find it
5. Keep public interfaces stable unless changing them is the goal";

pub const GENERAL_GUIDELINES_BLOCK: &str = "\
## General Guidelines

- Stay focused on the responsibilities described above
- Ask for clarification when requirements are ambiguous
- Explain what you changed and why when you finish
- Follow the conventions already used in the project";
