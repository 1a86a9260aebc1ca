use crate::domain::ports::TokenSource;

/// Produces identifiers of the form `prefix-<token>-suffix`.
pub struct IdGenerator<T: TokenSource> {
    prefix: String,
    suffix: String,
    tokens: T,
}

impl<T: TokenSource> IdGenerator<T> {
    pub fn new(prefix: String, suffix: String, tokens: T) -> Self {
        Self {
            prefix,
            suffix,
            tokens,
        }
    }

    pub fn generate(&self) -> String {
        format!("{}-{}-{}", self.prefix, self.tokens.token(), self.suffix)
    }
}
