/// A FIDE ID is a plain number, 4 to 10 digits.
pub fn validate(id: &str) -> bool {
    (4..=10).contains(&id.len()) && id.bytes().all(|b| b.is_ascii_digit())
}

pub fn profile_url(id: &str) -> String {
    format!("https://ratings.fide.com/profile/{id}")
}
