//! Small text and number helpers.

/// Frame `text` with runs of `=` as long as the text itself.
///
/// ```
/// assert_eq!(dexter::util::banner("Menu"), "==== Menu ====");
/// ```
pub fn banner(text: &str) -> String {
    let rule = "=".repeat(text.chars().count());
    format!("{rule} {text} {rule}")
}

/// Trial-division primality test.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut divisor: i64 = 3;
    // divisor <= n / divisor avoids overflowing divisor * divisor
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}
