/// Short commit hash baked in by the build script, or `unknown`.
pub fn git_commit_hash() -> &'static str {
    match option_env!("SIGNUP_WEB_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::git_commit_hash;

    #[test]
    fn git_commit_hash_is_never_empty() {
        assert!(!git_commit_hash().is_empty());
    }
}
