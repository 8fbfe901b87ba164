pub fn render_version(version: &str) -> String {
    format!("agentic-repo v{}", version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_line() {
        assert_eq!(render_version("0.1.0"), "agentic-repo v0.1.0");
    }
}
