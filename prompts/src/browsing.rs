//! Review prompts for fetched web and document content
//!
//! Two variants of the same job: `CONTENT_REVIEW_PROMPT` reviews content
//! handed over as uploaded files (web pages or documents such as PDFs),
//! `PAGE_REVIEW_PROMPT` reviews a scraped page given as extracted text
//! plus a screenshot. Both instruct the reviewer to return the relevant
//! material inside a Markdown code block with nested fences escaped.

/// System prompt for reviewing uploaded web/document content.
pub const CONTENT_REVIEW_PROMPT: &str = r#"Review the information from the provided content and return information relevant to the query.
For web pages, images and text are information from the same website. Text is mechanically extracted and of low quality.
Images should be read visually.

For documents (PDF, etc.), analyze both the text content and any visual elements like diagrams, charts, and tables.

Present the content inside a Markdown code block. 
Include both the directly relevant information and enough surrounding context to ensure the material is understood. 
Only output the content—do not add any additional explanations. 
Format any figures or tables using Markdown-friendly structures, and ensure that code within code blocks is escaped properly with backticks (for example, \`\`\` for multi-line code).

Output format:
```
...
...
[write website's contents]

\`\`\`
code block in code block will be escaped with backticks (e.g., \`\`\`).
\`\`\`

...
...
```

If the content is organized into separated sections and some sections are less essential, you may omit those and return multiple segments. 
When returning multiple segments, use the following format for each section:

**Section 1:**
```
[Content for Section 1]
```

**Section 2:**
```
[Content for Section 2]
```
...and so on.
"#;

/// System prompt for reviewing a scraped page (text + screenshot).
pub const PAGE_REVIEW_PROMPT: &str = r#"Review the information on the given website and return information relevant to the query.
Images and text are information from the same website. Text is mechanically extracted and of low quality.
Images should be read visually.

Present the website's content inside a Markdown code block. 
Include both the directly relevant information and enough surrounding context to ensure the material is understood. 
Only output the site's content—do not add any additional explanations. 
Format any figures or tables using Markdown-friendly structures, and ensure that code within code blocks is escaped properly with backticks (for example, \`\`\` for multi-line code).

Output format:
```
...
...
[write website's contents]

\`\`\`
code block in code block will be escaped with backticks (e.g., \`\`\`).
\`\`\`

...
...
```

If the content is organized into separated sections and some sections are less essential, you may omit those and return multiple segments. 
When returning multiple segments, use the following format for each section:

**Section 1:**
```
[Content for Section 1]
```

**Section 2:**
```
[Content for Section 2]
```
...and so on.
"#;

/// Build the user prompt that pairs scraped page text with a query.
pub fn build_page_review_request(text: &str, query: &str) -> String {
    format!(
        "\nPage text:\n```\n{text}\n```\n\nQuery: {query}\n",
        text = text,
        query = query
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_prompts_non_empty() {
        assert!(!CONTENT_REVIEW_PROMPT.is_empty());
        assert!(!PAGE_REVIEW_PROMPT.is_empty());
    }

    #[test]
    fn test_review_prompts_describe_output_format() {
        assert!(CONTENT_REVIEW_PROMPT.contains("Output format:"));
        assert!(PAGE_REVIEW_PROMPT.contains("Output format:"));
        // Nested fences must stay escaped in the model's output.
        assert!(CONTENT_REVIEW_PROMPT.contains(r"\`\`\`"));
        assert!(PAGE_REVIEW_PROMPT.contains("**Section 1:**"));
    }

    #[test]
    fn test_page_review_request_embeds_text_and_query() {
        let request = build_page_review_request("hello from the page", "what is this?");
        assert!(request.contains("Page text:"));
        assert!(request.contains("```\nhello from the page\n```"));
        assert!(request.ends_with("Query: what is this?\n"));
    }

    #[test]
    fn test_page_review_request_with_empty_text() {
        let request = build_page_review_request("", "anything");
        assert!(request.contains("```\n\n```"));
        assert!(request.contains("Query: anything"));
    }
}
