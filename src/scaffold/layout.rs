//! Folder naming for scaffolded problems.

use crate::utils::config::LEETCODE_PROBLEMS_URL;

/// Turn a problem title into a URL/folder slug
///
/// Lowercases ASCII letters, keeps ASCII alphanumerics, collapses runs of
/// whitespace, `-` and `_` into one `-`, and drops everything else.
///
/// `"Two Sum"` becomes `"two-sum"`, `"Pow(x, n)"` becomes `"powx-n"`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_dash = true;
        }
    }

    slug
}

/// Folder name for a problem: zero-padded id plus title slug
pub fn folder_name(problem_id: u32, title: &str) -> String {
    format!("{:04}-{}", problem_id, slugify(title))
}

pub fn leetcode_url(title: &str) -> String {
    format!("{}/{}/", LEETCODE_PROBLEMS_URL, slugify(title))
}
