use serde::{Deserialize, Serialize};

/// Решение посетителя по cookie-баннеру
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentDecision {
    Accepted,
    Declined,
}

impl ConsentDecision {
    pub fn code(&self) -> &'static str {
        match self {
            ConsentDecision::Accepted => "accepted",
            ConsentDecision::Declined => "declined",
        }
    }

    /// Восстановить решение из сохранённого значения.
    ///
    /// `None` означает, что посетитель ещё не отвечал и баннер нужно показать.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "accepted" => Some(ConsentDecision::Accepted),
            "declined" => Some(ConsentDecision::Declined),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(
            ConsentDecision::from_code("accepted"),
            Some(ConsentDecision::Accepted)
        );
        assert_eq!(
            ConsentDecision::from_code("declined"),
            Some(ConsentDecision::Declined)
        );
        assert_eq!(ConsentDecision::from_code(""), None);
        assert_eq!(ConsentDecision::from_code("maybe"), None);
    }
}
