//! Registry of backend REST path templates

use std::fmt::Display;

/// Named backend path templates
///
/// Templates containing `{id}` must be expanded with [`Endpoint::with_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Auth,
    Login,
    Logout,
    PasswordResetRequest,
    PasswordReset,
    Questions,
    Question,
    Answers,
    Answer,
    News,
    Opinions,
    Courses,
    Learning,
    LearningPrograms,
    LearningProgram,
    CustomPrograms,
    CustomProgram,
    Library,
    Admin,
    AdminExperts,
    AdminExpert,
    Experts,
    Expert,
    Search,
    CommonCodes,
}

impl Endpoint {
    /// Every registered endpoint
    pub const ALL: [Endpoint; 25] = [
        Endpoint::Auth,
        Endpoint::Login,
        Endpoint::Logout,
        Endpoint::PasswordResetRequest,
        Endpoint::PasswordReset,
        Endpoint::Questions,
        Endpoint::Question,
        Endpoint::Answers,
        Endpoint::Answer,
        Endpoint::News,
        Endpoint::Opinions,
        Endpoint::Courses,
        Endpoint::Learning,
        Endpoint::LearningPrograms,
        Endpoint::LearningProgram,
        Endpoint::CustomPrograms,
        Endpoint::CustomProgram,
        Endpoint::Library,
        Endpoint::Admin,
        Endpoint::AdminExperts,
        Endpoint::AdminExpert,
        Endpoint::Experts,
        Endpoint::Expert,
        Endpoint::Search,
        Endpoint::CommonCodes,
    ];

    /// The raw path template
    pub fn template(&self) -> &'static str {
        match self {
            Endpoint::Auth => "/api/auth",
            Endpoint::Login => "/api/auth/login",
            Endpoint::Logout => "/api/auth/logout",
            Endpoint::PasswordResetRequest => "/api/auth/password-reset/request",
            Endpoint::PasswordReset => "/api/auth/password-reset",
            Endpoint::Questions => "/api/questions",
            Endpoint::Question => "/api/questions/{id}",
            Endpoint::Answers => "/api/questions/{id}/answers",
            Endpoint::Answer => "/api/answers/{id}",
            Endpoint::News => "/api/news",
            Endpoint::Opinions => "/api/opinions",
            Endpoint::Courses => "/api/courses",
            Endpoint::Learning => "/api/learning",
            Endpoint::LearningPrograms => "/api/learning/programs",
            Endpoint::LearningProgram => "/api/learning/programs/{id}",
            Endpoint::CustomPrograms => "/api/learning/custom-programs",
            Endpoint::CustomProgram => "/api/learning/custom-programs/{id}",
            Endpoint::Library => "/api/library",
            Endpoint::Admin => "/api/admin",
            Endpoint::AdminExperts => "/api/admin/experts",
            Endpoint::AdminExpert => "/api/admin/experts/{id}",
            Endpoint::Experts => "/api/experts",
            Endpoint::Expert => "/api/experts/{id}",
            Endpoint::Search => "/api/search",
            Endpoint::CommonCodes => "/api/common-codes",
        }
    }

    /// Whether the template needs an id
    pub fn has_id(&self) -> bool {
        self.template().contains("{id}")
    }

    /// Expand the `{id}` placeholder
    pub fn with_id(&self, id: impl Display) -> String {
        self.template().replace("{id}", &id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_templates_are_unique_and_rooted() {
        let templates: HashSet<_> = Endpoint::ALL.iter().map(Endpoint::template).collect();
        assert_eq!(templates.len(), Endpoint::ALL.len());
        assert!(templates.iter().all(|t| t.starts_with("/api/")));
    }

    #[test]
    fn test_with_id() {
        assert_eq!(Endpoint::Question.with_id(42), "/api/questions/42");
        assert_eq!(Endpoint::Answers.with_id(7), "/api/questions/7/answers");
        assert!(Endpoint::AdminExpert.has_id());
        assert!(!Endpoint::Search.has_id());
    }
}
