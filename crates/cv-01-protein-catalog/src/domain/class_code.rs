//! Hierarchical classification codes (CATH, Enzyme Commission)
//!
//! A code is a dotted path of one to four components. Concrete components
//! are non-negative integers; `*` is a wildcard and may only appear as a
//! contiguous suffix. Unless all four components are given, the last one
//! must be `*`.
//!
//! ```ignore
//! let code: HierarchicalCode = "3.40.*.*".parse()?;
//! assert_eq!(code.components(), &[3, 40]);
//! ```

use std::fmt;
use std::str::FromStr;

/// Maximum number of components in a code.
pub const MAX_COMPONENTS: usize = 4;

/// Validation message for a malformed code.
pub const CODE_FORMAT_ERROR: &str = "must be in format 1.2.3.4 or 1.2.*.*";

/// A parsed code with wildcards stripped from the tail.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HierarchicalCode {
    components: Vec<u32>,
    arity: usize,
}

/// Why a code failed to parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodeError {
    Arity(usize),
    MissingTrailingWildcard,
    NotANumber(String),
    WildcardBeforeValue,
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeError::Arity(n) => write!(f, "{} components, {}", n, CODE_FORMAT_ERROR),
            CodeError::MissingTrailingWildcard => {
                write!(f, "a partial code must end with '*', {}", CODE_FORMAT_ERROR)
            }
            CodeError::NotANumber(token) => write!(f, "'{}' is not a number, {}", token, CODE_FORMAT_ERROR),
            CodeError::WildcardBeforeValue => {
                write!(f, "wildcards may only trail, {}", CODE_FORMAT_ERROR)
            }
        }
    }
}

impl std::error::Error for CodeError {}

impl HierarchicalCode {
    /// The concrete leading components. Empty for an all-wildcard code.
    pub fn components(&self) -> &[u32] {
        &self.components
    }

    /// Number of components as written, wildcards included.
    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn wildcard_count(&self) -> usize {
        self.arity - self.components.len()
    }

    pub fn is_wildcard_only(&self) -> bool {
        self.components.is_empty()
    }
}

impl FromStr for HierarchicalCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split('.').collect();

        if tokens.is_empty() || tokens.len() > MAX_COMPONENTS {
            return Err(CodeError::Arity(tokens.len()));
        }
        if tokens.len() < MAX_COMPONENTS && tokens.last() != Some(&"*") {
            return Err(CodeError::MissingTrailingWildcard);
        }

        let mut parsed: Vec<Option<u32>> = Vec::with_capacity(tokens.len());
        for token in &tokens {
            if *token == "*" {
                parsed.push(None);
                continue;
            }
            if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
                return Err(CodeError::NotANumber((*token).to_string()));
            }
            let value = token
                .parse::<u32>()
                .map_err(|_| CodeError::NotANumber((*token).to_string()))?;
            parsed.push(Some(value));
        }

        if parsed.windows(2).any(|w| w[0].is_none() && w[1].is_some()) {
            return Err(CodeError::WildcardBeforeValue);
        }

        Ok(Self {
            components: parsed.into_iter().flatten().collect(),
            arity: tokens.len(),
        })
    }
}

impl fmt::Display for HierarchicalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self.components.iter().map(u32::to_string).collect();
        parts.resize(self.arity, "*".to_string());
        f.write_str(&parts.join("."))
    }
}
