//! Credential validation - the rules an email/password pair must satisfy
//! before registration touches any collaborator.

const SPECIAL_CHARS: &str = "!@#$%^&*";
const MAX_EMAIL_LEN: usize = 255;
const MIN_PASSWORD_LEN: usize = 8;

/// An email/password pair that passed every credential rule.
///
/// Only [`validate`] constructs this, so holding one is proof the full rule
/// set passed - there is no partially-valid state.
#[derive(Debug, Clone)]
pub struct ValidatedCredentials {
    email: String,
    password: String,
}

impl ValidatedCredentials {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Validate raw credentials, accumulating every violated rule.
///
/// Deterministic and side-effect free. On failure the returned list holds a
/// stable, human-readable message per violated rule, in rule order, so a
/// caller can render the complete set in one round trip.
pub fn validate(email: &str, password: &str) -> Result<ValidatedCredentials, Vec<String>> {
    let mut violations = Vec::new();

    if !is_email_syntax(email) {
        violations.push("Email format is invalid".to_string());
    }
    if email.len() > MAX_EMAIL_LEN {
        violations.push("Email must be less than 255 characters".to_string());
    }

    if password.len() < MIN_PASSWORD_LEN {
        violations.push("Password must be at least 8 characters".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        violations.push("Password must contain at least 1 uppercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        violations.push("Password must contain at least 1 lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        violations.push("Password must contain at least 1 number".to_string());
    }
    if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        violations.push(
            "Password must contain at least 1 special character (!@#$%^&*)".to_string(),
        );
    }

    if violations.is_empty() {
        Ok(ValidatedCredentials {
            email: email.to_string(),
            password: password.to_string(),
        })
    } else {
        Err(violations)
    }
}

/// Minimal syntactic address check: one `@` separating a non-empty local
/// part from a dotted domain, no whitespace anywhere.
fn is_email_syntax(email: &str) -> bool {
    if email.chars().any(|c| c.is_whitespace()) {
        return false;
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_strong_credentials() {
        let creds = validate("a@b.com", "Strong1!").unwrap();
        assert_eq!(creds.email(), "a@b.com");
        assert_eq!(creds.password(), "Strong1!");
    }

    #[test]
    fn short_password_reports_length_rule_only() {
        // "Weak1!" has upper, lower, digit and special - only length fails.
        let violations = validate("user@example.com", "Weak1!").unwrap_err();
        assert_eq!(
            violations,
            vec!["Password must be at least 8 characters".to_string()]
        );
    }

    #[test]
    fn accumulates_every_violated_rule() {
        let violations = validate("not-an-email", "short").unwrap_err();
        assert_eq!(
            violations,
            vec![
                "Email format is invalid".to_string(),
                "Password must be at least 8 characters".to_string(),
                "Password must contain at least 1 uppercase letter".to_string(),
                "Password must contain at least 1 number".to_string(),
                "Password must contain at least 1 special character (!@#$%^&*)".to_string(),
            ]
        );
    }

    #[test]
    fn rejects_overlong_email() {
        let email = format!("{}@example.com", "a".repeat(250));
        let violations = validate(&email, "Strong1!").unwrap_err();
        assert_eq!(
            violations,
            vec!["Email must be less than 255 characters".to_string()]
        );
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in ["", "@b.com", "a@", "a@b", "a b@c.com", "a@.com", "a@b.com."] {
            assert!(
                validate(email, "Strong1!").is_err(),
                "expected rejection for {email:?}"
            );
        }
    }

    #[test]
    fn missing_character_classes_each_report() {
        let violations = validate("a@b.com", "alllowercase").unwrap_err();
        assert!(
            violations.contains(&"Password must contain at least 1 uppercase letter".to_string())
        );
        assert!(violations.contains(&"Password must contain at least 1 number".to_string()));

        let violations = validate("a@b.com", "ALLUPPER1!").unwrap_err();
        assert_eq!(
            violations,
            vec!["Password must contain at least 1 lowercase letter".to_string()]
        );
    }

    #[test]
    fn is_deterministic() {
        let first = validate("bad", "bad").unwrap_err();
        let second = validate("bad", "bad").unwrap_err();
        assert_eq!(first, second);
    }
}
