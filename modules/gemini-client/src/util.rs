/// Strip a surrounding markdown code fence from a model completion.
///
/// Models often wrap JSON output in a ```json fence. Text without a fence
/// passes through unchanged.
pub fn strip_code_blocks(response: &str) -> &str {
    response
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}
