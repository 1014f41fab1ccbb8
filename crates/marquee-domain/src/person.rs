//! People credited on films

use serde::{Deserialize, Serialize};

/// What a person did on a film
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Directed the film
    Director,

    /// Acted in the film
    #[default]
    Actor,

    /// Wrote the film
    Writer,
}

impl Role {
    /// Get the role name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Director => "director",
            Role::Actor => "actor",
            Role::Writer => "writer",
        }
    }

    /// Label for the role-specific `notable` field
    pub fn notable_label(&self) -> &'static str {
        match self {
            Role::Director => "Filmography",
            Role::Actor => "Known for",
            Role::Writer => "Notable works",
        }
    }
}

/// A director, actor or writer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    /// Identifier within the catalog
    pub id: String,

    /// Full name
    pub name: String,

    /// Role on the film this record is attached to
    pub role: Role,

    /// Birth date as written by the source (e.g. "1959-01-28")
    pub birth_date: Option<String>,

    /// Nationality
    pub nationality: Option<String>,

    /// Short biography
    pub biography: Option<String>,

    /// Awards won
    pub awards: Vec<String>,

    /// Filmography, "known for" or notable works, depending on the role
    pub notable: Option<String>,
}

impl Person {
    /// Create a person with an id, a name and a role
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            ..Default::default()
        }
    }

    /// Record an award
    pub fn add_award(&mut self, award: impl Into<String>) {
        self.awards.push(award.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_properties() {
        let mut director = Person::new("dir001", "Frank Darabont", Role::Director);
        director.nationality = Some("American".to_string());
        director.birth_date = Some("1959-01-28".to_string());
        director.add_award("Saturn Award");

        assert_eq!(director.role, Role::Director);
        assert_eq!(director.nationality.as_deref(), Some("American"));
        assert_eq!(director.awards.len(), 1);
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::Actor.as_str(), "actor");
        assert_eq!(Role::Writer.notable_label(), "Notable works");
    }

    #[test]
    fn test_role_deserializes_lowercase() {
        let person: Person =
            serde_json::from_str(r#"{"id": "wrt001", "name": "Stephen King", "role": "writer"}"#)
                .unwrap();
        assert_eq!(person.role, Role::Writer);
        assert!(person.awards.is_empty());
    }
}
