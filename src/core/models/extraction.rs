/// Outcome of one extraction attempt against the vision API.
///
/// `text` is `None` on any failure, in which case both token counters are
/// zero. Missing usage metadata on a successful response also reads as
/// zero.
#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    pub text: Option<String>,
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl ExtractionOutcome {
    pub fn failed() -> Self {
        Self {
            text: None,
            input_tokens: 0,
            output_tokens: 0,
        }
    }
}
