//! Domain-focused tests for account value objects and the user aggregate.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use crate::account::domain::{
    AccountDomainError, EmailAddress, PasswordHashString, User, Username,
};
use mockable::{Clock, DefaultClock};
use rstest::rstest;

fn hash() -> PasswordHashString {
    PasswordHashString::from_phc("$argon2id$stub".to_owned())
}

#[rstest]
#[case("alice")]
#[case("alice.b+c@example-like_name")]
#[case("A1")]
fn username_accepts_valid_values(#[case] raw: &str) {
    let username = Username::new(raw).expect("valid username");
    assert_eq!(username.as_str(), raw);
}

#[rstest]
fn username_trims_surrounding_whitespace() {
    let username = Username::new("  alice  ").expect("valid username");
    assert_eq!(username.as_str(), "alice");
}

#[rstest]
fn username_rejects_empty() {
    assert_eq!(
        Username::new("   "),
        Err(AccountDomainError::EmptyUsername)
    );
}

#[rstest]
fn username_rejects_overlong_values() {
    let raw = "a".repeat(151);
    assert_eq!(
        Username::new(&raw),
        Err(AccountDomainError::UsernameTooLong(raw))
    );
}

#[rstest]
#[case("ali ce")]
#[case("alice!")]
#[case("al/ce")]
fn username_rejects_invalid_characters(#[case] raw: &str) {
    assert_eq!(
        Username::new(raw),
        Err(AccountDomainError::InvalidUsername(raw.to_owned()))
    );
}

#[rstest]
fn email_accepts_structurally_valid_addresses() {
    let email = EmailAddress::new("alice@example.com").expect("valid email");
    assert_eq!(email.as_str(), "alice@example.com");
}

#[rstest]
#[case("not-an-email")]
#[case("@example.com")]
#[case("alice@")]
fn email_rejects_invalid_addresses(#[case] raw: &str) {
    assert_eq!(
        EmailAddress::new(raw),
        Err(AccountDomainError::InvalidEmail(raw.to_owned()))
    );
}

#[rstest]
fn email_rejects_overlong_addresses() {
    let raw = format!("{}@example.com", "a".repeat(250));
    assert_eq!(
        EmailAddress::new(&raw),
        Err(AccountDomainError::EmailTooLong(raw))
    );
}

#[rstest]
fn constructors_accept_trait_object_clocks() {
    let clock: &dyn Clock = &DefaultClock;
    let username = Username::new("alice").expect("valid username");
    let user = User::new(username, None, hash(), clock);

    assert!(!user.is_staff());
}

#[rstest]
fn new_users_are_not_staff() {
    let username = Username::new("alice").expect("valid username");
    let user = User::new(username, None, hash(), &DefaultClock);

    assert!(!user.is_staff());
    assert!(!user.actor().is_staff());
    assert_eq!(user.actor().user_id(), user.id());
}

#[rstest]
fn staff_constructor_sets_the_flag() {
    let username = Username::new("admin").expect("valid username");
    let user = User::new_staff(username, None, hash(), &DefaultClock);

    assert!(user.is_staff());
    assert!(user.actor().is_staff());
}

#[rstest]
fn password_hash_debug_output_is_redacted() {
    let rendered = format!("{:?}", hash());
    assert!(!rendered.contains("argon2id"));
}
