#[derive(thiserror::Error, Debug)]
pub enum DemoError {
    #[error("no keys to insert")]
    NoKeys,
    #[error("tree failed validation after {stage}")]
    Corrupted { stage: &'static str },
}
