//! User Objects
//!
//! Users appear as pagination results, as people-property values and inside
//! mentions. A person carries an e-mail under `person.email`; bots carry none.

use crate::models::{Doc, DocumentError, ObjectKind};
use std::fmt;
use std::str::FromStr;

/// Kind of user account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserType {
    Person,
    Bot,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Bot => "bot",
        }
    }
}

impl FromStr for UserType {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "person" => Ok(Self::Person),
            "bot" => Ok(Self::Bot),
            _ => Err(DocumentError::unknown_variant("user", s)),
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// View over a `user` document
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: String,
    json: Doc,
}

impl User {
    /// Reference an existing user by id, e.g. for a people property
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let json = Doc::new()
            .with("object", ObjectKind::User.as_str())
            .with("id", id.clone());
        Self { id, json }
    }

    /// Wrap a decoded user document
    pub fn from_doc(json: Doc) -> Self {
        Self {
            id: json.get_string("id"),
            json,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn object(&self) -> &'static str {
        ObjectKind::User.as_str()
    }

    /// Account kind
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::UnknownVariant` for a missing or unknown `type`.
    pub fn user_type(&self) -> Result<UserType, DocumentError> {
        self.json.get_string("type").parse()
    }

    pub fn is_person(&self) -> bool {
        matches!(self.user_type(), Ok(UserType::Person))
    }

    pub fn is_bot(&self) -> bool {
        matches!(self.user_type(), Ok(UserType::Bot))
    }

    pub fn name(&self) -> String {
        self.json.get_string("name")
    }

    pub fn avatar_url(&self) -> String {
        self.json.get_string("avatar_url")
    }

    /// E-mail of a person, empty for bots
    pub fn email(&self) -> String {
        if !self.is_person() {
            return String::new();
        }
        self.json
            .get_doc("person")
            .map(|person| person.get_string("email"))
            .unwrap_or_default()
    }

    pub fn json(&self) -> &Doc {
        &self.json
    }

    pub fn json_mut(&mut self) -> &mut Doc {
        &mut self.json
    }

    pub fn into_json(self) -> Doc {
        self.json
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.json, f)
    }
}
