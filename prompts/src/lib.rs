//! Prompt text for the tool-using chat agent
//!
//! Every prompt is a `&'static str` fixed at compile time, so the
//! values can be read from any number of threads without
//! synchronization. The orchestration layer that splices them into
//! model requests lives elsewhere; this crate only holds the text and
//! the marker contract around the tool-use instruction block.

pub mod browsing;
pub mod markers;
pub mod tool_use;

pub use browsing::{build_page_review_request, CONTENT_REVIEW_PROMPT, PAGE_REVIEW_PROMPT};
pub use markers::{append_instructions, has_markers, instruction_body};
pub use tool_use::{TOOL_USE_CLOSE, TOOL_USE_INSTRUCTION, TOOL_USE_OPEN};
