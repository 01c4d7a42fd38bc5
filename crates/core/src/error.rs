use thiserror::Error;

use crate::model::AnswerError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Answer(#[from] AnswerError),
}
