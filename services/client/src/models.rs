//! Typed entities exchanged with the backend
//!
//! Success bodies are decoded into these types at the boundary. A body that
//! does not match fails with a schema error instead of reaching callers.

pub mod common_code;
pub mod expert;
pub mod program;
pub mod question;
pub mod search;
pub mod user;

pub use common_code::{CommonCode, CommonCodeGroup};
pub use expert::{Expert, ExpertCreate, ExpertStatus, ExpertUpdate};
pub use program::{CustomProgram, CustomProgramPayload, LearningProgram, ProgramPayload};
pub use question::{
    Answer, AnswerFormData, Question, QuestionFormData, QuestionQuery, QuestionStatus,
};
pub use search::{SearchGroup, SearchItem};
pub use user::{LoginCredentials, PasswordResetConfirm, PasswordResetRequest, Role, User};
