use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating phone numbers on the contact form
    /// Digits, spaces and the symbols `+ - ( )` only
    /// - Valid: "+1 (555) 123-4567", "0123456789"
    /// - Invalid: "555.1234", "call me", ""
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^[0-9\-\+\(\) ]+$").unwrap();

    /// Regex for validating email addresses on the contact form
    /// Lowercase local part and domain, 2-4 letter top-level domain
    /// - Valid: "example@test.com", "first.last+tag@mail.example.io"
    /// - Invalid: "Example@Test.com", "no-at-sign.com", "a@b.c", "a@b.museum"
    pub static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,4}$").unwrap();
}
