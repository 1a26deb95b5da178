//! Registration and login orchestration.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::error::{Error, Result};
use crate::user::{User, UserRepository};

pub const MIN_PASSWORD_LENGTH: usize = 6;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+$").unwrap()
});
static NATIONAL_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{7,10}$").unwrap());

/// Account manager.
#[derive(Clone)]
pub struct AccountService {
    repo: UserRepository,
}

impl AccountService {
    /// Create a new [`AccountService`].
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }

    /// Register a new account and return the stored user.
    ///
    /// Name and national id are trimmed, the email is trimmed and
    /// lower-cased; the password is stored verbatim.
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        national_id: &str,
    ) -> Result<User> {
        validate_registration(name, email, password, national_id)?;

        if self.repo.find_by_email(email).is_some() {
            return Err(Error::UserAlreadyExists);
        }

        let user = User {
            name: name.trim().to_owned(),
            email: email.trim().to_lowercase(),
            password: password.to_owned(),
            national_id: national_id.trim().to_owned(),
        };

        self.repo.save(user.clone()).map_err(|err| {
            Error::Validation(format!("could not save the user: {err}"))
        })?;

        tracing::info!(email = %user.email, "account registered");
        Ok(user)
    }

    /// Authenticate an account.
    ///
    /// Unknown email and wrong password collapse into one message.
    pub fn login(&self, email: &str, password: &str) -> Result<User> {
        if email.trim().is_empty() || password.trim().is_empty() {
            return Err(Error::Validation(
                "email and password are required".into(),
            ));
        }

        self.repo
            .find_by_email(email.trim().to_lowercase().as_str())
            .filter(|user| user.password == password)
            .ok_or_else(|| {
                Error::Validation("invalid email or password".into())
            })
    }
}

fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    national_id: &str,
) -> Result<()> {
    if [name, email, password, national_id]
        .iter()
        .any(|field| field.trim().is_empty())
    {
        return Err(Error::Validation("all fields are required".into()));
    }
    if !EMAIL.is_match(email) {
        return Err(Error::Validation("email address is not valid".into()));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(Error::Validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    if !NATIONAL_ID.is_match(national_id) {
        return Err(Error::Validation(
            "national id must be 7 to 10 digits".into(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordStore;

    fn service() -> (tempfile::TempDir, AccountService) {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("storage"));
        store.ensure_initialized().unwrap();
        let repo = UserRepository::new(store).unwrap();
        (dir, AccountService::new(repo))
    }

    fn message(err: Error) -> String {
        err.to_string()
    }

    #[test]
    fn register_then_login_with_normalized_email() {
        let (_dir, accounts) = service();

        let user = accounts
            .register("  Ana  ", "Ana.Lopez@Example.COM", "secret1", "12345678")
            .unwrap();
        assert_eq!(user.name, "Ana");
        assert_eq!(user.email, "ana.lopez@example.com");
        assert_eq!(user.national_id, "12345678");

        let logged = accounts.login("ANA.lopez@example.com", "secret1").unwrap();
        assert_eq!(logged, user);
    }

    #[test]
    fn duplicate_email_differing_only_by_case_is_rejected() {
        let (_dir, accounts) = service();

        accounts
            .register("Ana", "ana@example.com", "secret1", "12345678")
            .unwrap();
        let err = accounts
            .register("Other", "ANA@EXAMPLE.COM", "secret2", "87654321")
            .unwrap_err();

        assert!(matches!(err, Error::UserAlreadyExists));
    }

    #[test]
    fn blank_fields_are_rejected_first() {
        let (_dir, accounts) = service();

        let err = accounts.register("Ana", "   ", "secret1", "12345678");
        assert_eq!(message(err.unwrap_err()), "all fields are required");
    }

    #[test]
    fn malformed_email_is_rejected() {
        let (_dir, accounts) = service();

        let err = accounts.register("Ana", "not-an-email", "secret1", "12345678");
        assert_eq!(message(err.unwrap_err()), "email address is not valid");
    }

    #[test]
    fn short_password_is_rejected() {
        let (_dir, accounts) = service();

        let err = accounts.register("Ana", "ana@example.com", "abc12", "12345678");
        assert_eq!(
            message(err.unwrap_err()),
            "password must be at least 6 characters"
        );
    }

    #[test]
    fn national_id_must_be_seven_to_ten_digits() {
        let (_dir, accounts) = service();

        for id in ["123456", "12345678901", "12a45678"] {
            let err = accounts.register("Ana", "ana@example.com", "secret1", id);
            assert_eq!(
                message(err.unwrap_err()),
                "national id must be 7 to 10 digits"
            );
        }
    }

    #[test]
    fn login_collapses_unknown_user_and_wrong_password() {
        let (_dir, accounts) = service();

        accounts
            .register("Ana", "ana@example.com", "secret1", "12345678")
            .unwrap();

        let unknown = message(accounts.login("ghost@example.com", "secret1").unwrap_err());
        let wrong = message(accounts.login("ana@example.com", "nope123").unwrap_err());

        assert_eq!(unknown, "invalid email or password");
        assert_eq!(unknown, wrong);
    }

    #[test]
    fn login_requires_both_fields() {
        let (_dir, accounts) = service();

        let err = accounts.login("ana@example.com", "  ");
        assert_eq!(message(err.unwrap_err()), "email and password are required");
    }

    #[test]
    fn password_comparison_is_exact() {
        let (_dir, accounts) = service();

        accounts
            .register("Ana", "ana@example.com", "Secret1", "12345678")
            .unwrap();

        assert!(accounts.login("ana@example.com", "secret1").is_err());
        assert!(accounts.login("ana@example.com", "Secret1").is_ok());
    }
}
