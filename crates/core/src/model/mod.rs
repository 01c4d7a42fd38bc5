mod answer;
mod country;
mod ids;
mod question;

pub use answer::{AnswerError, AnswerMap, AnswerPayload, AnswerValue, YesNo};
pub use country::Country;
pub use ids::{ChoiceId, CountryId, ParseIdError, QuestionId};
pub use question::{Choice, Question, QuestionKind};
