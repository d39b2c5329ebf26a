//! File name glob matching (`*` and `?` wildcards)

use crate::error::CorpusError;

/// Glob applied to a file's name, not its full path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePattern {
    pattern: Vec<char>,
    source: String,
}

impl FilePattern {
    /// Parse a pattern; an empty pattern matches nothing and is rejected
    pub fn new(pattern: &str) -> Result<Self, CorpusError> {
        if pattern.is_empty() {
            return Err(CorpusError::InvalidPattern(pattern.to_string()));
        }

        Ok(Self {
            pattern: pattern.chars().collect(),
            source: pattern.to_string(),
        })
    }

    /// The pattern as given
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether `name` matches the whole pattern
    pub fn matches(&self, name: &str) -> bool {
        let name: Vec<char> = name.chars().collect();
        let (mut p, mut n) = (0, 0);
        // Position of the last `*` seen and the name index it was tried at
        let mut backtrack: Option<(usize, usize)> = None;

        while n < name.len() {
            match self.pattern.get(p) {
                Some('*') => {
                    backtrack = Some((p, n));
                    p += 1;
                }
                Some('?') => {
                    p += 1;
                    n += 1;
                }
                Some(c) if *c == name[n] => {
                    p += 1;
                    n += 1;
                }
                _ => match backtrack {
                    Some((star, start)) => {
                        p = star + 1;
                        n = start + 1;
                        backtrack = Some((star, start + 1));
                    }
                    None => return false,
                },
            }
        }

        self.pattern[p..].iter().all(|c| *c == '*')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_glob() {
        let pattern = FilePattern::new("*.wav").unwrap();
        assert!(pattern.matches("0_1_0_1.wav"));
        assert!(pattern.matches(".wav"));
        assert!(!pattern.matches("track.WAV"));
        assert!(!pattern.matches("track.wav.bak"));
        assert!(!pattern.matches("README"));
    }

    #[test]
    fn test_question_mark() {
        let pattern = FilePattern::new("take?.wav").unwrap();
        assert!(pattern.matches("take1.wav"));
        assert!(!pattern.matches("take.wav"));
        assert!(!pattern.matches("take12.wav"));
    }

    #[test]
    fn test_multiple_stars() {
        let pattern = FilePattern::new("*_1_*.wav").unwrap();
        assert!(pattern.matches("0_1_0.wav"));
        assert!(pattern.matches("1_1_1_1_1.wav"));
        assert!(!pattern.matches("0_0_0.wav"));
    }

    #[test]
    fn test_literal_pattern() {
        let pattern = FilePattern::new("exact.wav").unwrap();
        assert!(pattern.matches("exact.wav"));
        assert!(!pattern.matches("exact.wa"));
    }

    #[test]
    fn test_empty_pattern_rejected() {
        assert!(matches!(
            FilePattern::new(""),
            Err(CorpusError::InvalidPattern(_))
        ));
    }
}
