#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hand the current URL to the submission sink.
    Submit { url: String },
    Quit,
}
