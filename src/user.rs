use std::{
    borrow::Borrow,
    hash::{Hash, Hasher},
};

pub type Passport = String;

/// Bank client. Identity is the passport, the name is only for display.
#[derive(Debug, Clone)]
pub struct User {
    passport: Passport,
    username: String,
}

impl User {
    pub fn new(passport: impl Into<Passport>, username: impl Into<String>) -> Self {
        Self {
            passport: passport.into(),
            username: username.into(),
        }
    }

    pub fn passport(&self) -> &str {
        &self.passport
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.passport == other.passport
    }
}

impl Eq for User {}

// must stay consistent with `Borrow<str>`: hash the passport exactly like `str` does
impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.passport.as_str().hash(state);
    }
}

impl Borrow<str> for User {
    fn borrow(&self) -> &str {
        &self.passport
    }
}
