use rand::Rng;

/// Extensions appended to generated names.
pub const EXTENSIONS: [&str; 7] = [".txt", ".csv", ".cpp", ".c", ".json", ".xml", ".md"];

pub const MIN_BODY_LEN: usize = 10;
pub const MAX_BODY_LEN: usize = 20;

/// Random file-name generator.
///
/// Produces a lowercase `a`-`z` body of uniformly random length plus one
/// extension. All randomness comes from the caller's generator.
#[derive(Clone, Debug)]
pub struct NameGenerator {
    min_len: usize,
    max_len: usize,
    extensions: Vec<&'static str>,
}

impl NameGenerator {
    pub fn new() -> Self {
        Self {
            min_len: MIN_BODY_LEN,
            max_len: MAX_BODY_LEN,
            extensions: EXTENSIONS.to_vec(),
        }
    }

    /// Override the body length bounds (inclusive). Bounds are swapped if
    /// given in the wrong order and clamped to at least one character.
    pub fn with_body_len(mut self, min_len: usize, max_len: usize) -> Self {
        let (lo, hi) = if min_len <= max_len {
            (min_len, max_len)
        } else {
            (max_len, min_len)
        };
        self.min_len = lo.max(1);
        self.max_len = hi.max(1);
        self
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let len = rng.random_range(self.min_len..=self.max_len);
        let mut name = String::with_capacity(len + 5);
        for _ in 0..len {
            name.push(char::from(b'a' + rng.random_range(0..26u8)));
        }
        if !self.extensions.is_empty() {
            let ext = self.extensions[rng.random_range(0..self.extensions.len())];
            name.push_str(ext);
        }
        name
    }

    /// Generate `count` names. Duplicates are possible but unlikely.
    pub fn generate_many<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<String> {
        (0..count).map(|_| self.generate(rng)).collect()
    }
}

impl Default for NameGenerator {
    fn default() -> Self {
        Self::new()
    }
}
