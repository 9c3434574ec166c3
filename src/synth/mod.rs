//! Description and system-prompt synthesis.
//!
//! Both outputs are driven by the same keyword table but dispatch differently:
//!
//! - the description gets the trigger clause of the *first* matching keyword
//!   ([`trigger_keyword`])
//! - the system prompt gets the instruction block of *every* matching keyword
//!   ([`matched_keywords`])
//!
//! Matching is a plain substring test against the lowercased requirements, so
//! "latest" matches `test`.

mod blocks;


use blocks::{DESCRIPTION_LABEL, DESCRIPTION_PREVIEW_CHARS, PROACTIVE_CLAUSE};

/// A keyword that selects canned text. Declaration order is priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Testing,
    Review,
    Debugging,
    Documentation,
    Refactoring,
}

impl Keyword {
    /// All keywords in priority order.
    pub const ALL: [Keyword; 5] = [
        Keyword::Testing,
        Keyword::Review,
        Keyword::Debugging,
        Keyword::Documentation,
        Keyword::Refactoring,
    ];

    /// Substring searched for in the lowercased requirements.
    pub fn needle(self) -> &'static str {
        match self {
            Keyword::Testing => "test",
            Keyword::Review => "review",
            Keyword::Debugging => "debug",
            Keyword::Documentation => "document",
            Keyword::Refactoring => "refactor",
        }
    }

    /// Clause appended to the description.
    pub fn trigger_clause(self) -> &'static str {
        match self {
            Keyword::Testing => blocks::TESTING_TRIGGER,
            Keyword::Review => blocks::REVIEW_TRIGGER,
            Keyword::Debugging => blocks::DEBUGGING_TRIGGER,
            Keyword::Documentation => blocks::DOCUMENTATION_TRIGGER,
            Keyword::Refactoring => blocks::REFACTORING_TRIGGER,
        }
    }

    /// Section appended to the system prompt.
    pub fn instruction_block(self) -> &'static str {
        match self {
            Keyword::Testing => blocks::TESTING_BLOCK,
            Keyword::Review => blocks::REVIEW_BLOCK,
            Keyword::Debugging => blocks::DEBUGGING_BLOCK,
            Keyword::Documentation => blocks::DOCUMENTATION_BLOCK,
            Keyword::Refactoring => blocks::REFACTORING_BLOCK,
        }
    }
}

/// Generated text for an agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synthesis {
    pub description: String,
    pub system_prompt: String,
}

/// First keyword (in priority order) found in the requirements, if any.
pub fn trigger_keyword(requirements: &str) -> Option<Keyword> {
    let lowered = requirements.to_lowercase();
    Keyword::ALL
        .into_iter()
        .find(|keyword| lowered.contains(keyword.needle()))
}

/// Every keyword found in the requirements, in priority order.
pub fn matched_keywords(requirements: &str) -> Vec<Keyword> {
    let lowered = requirements.to_lowercase();
    Keyword::ALL
        .into_iter()
        .filter(|keyword| lowered.contains(keyword.needle()))
        .collect()
}

/// Build the description: label, requirements preview, then optional clauses.
pub fn describe(requirements: &str, proactive: bool) -> String {
    let preview: String = requirements
        .chars()
        .take(DESCRIPTION_PREVIEW_CHARS)
        .collect();

    let mut description = format!("{}{}", DESCRIPTION_LABEL, preview);
    if proactive {
        description.push_str(PROACTIVE_CLAUSE);
    }
    if let Some(keyword) = trigger_keyword(requirements) {
        description.push_str(keyword.trigger_clause());
    }
    description
}

/// Build the system prompt: role header, matched blocks, general guidelines.
pub fn system_prompt(name: &str, requirements: &str) -> String {
    let mut sections = vec![role_header(name, requirements)];
    sections.extend(
        matched_keywords(requirements)
            .into_iter()
            .map(|keyword| keyword.instruction_block().to_string()),
    );
    sections.push(blocks::GENERAL_GUIDELINES_BLOCK.to_string());
    sections.join("\n\n")
}

/// Derive the description and system prompt for an agent.
pub fn synthesize(name: &str, requirements: &str, proactive: bool) -> Synthesis {
    Synthesis {
        description: describe(requirements, proactive),
        system_prompt: system_prompt(name, requirements),
    }
}

fn role_header(name: &str, requirements: &str) -> String {
    format!(
        "# {name}\n\nYou are {name}, a specialized agent. Your responsibilities:\n\n{requirements}"
    )
}
