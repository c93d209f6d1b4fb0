use crate::errors::SelectionIndexError;
use log::warn;
use regex::Regex;
use rustc_hash::FxHashSet;

/// Which atoms are of interest.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    /// Every atom in the structure.
    All,
    /// Inclusive spans of 1-based atom numbers, "7" is the span (7, 7).
    Indices(Vec<(usize, usize)>),
    /// Element symbols.
    Symbols(Vec<String>),
}

impl Selection {
    /// Builds the selection from the user's tokens. No tokens selects every
    /// atom, tokens that are all numbers (or ranges such as "3-7") are atom
    /// numbers and anything else is treated as a list of element symbols.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S])
                                      -> Result<Self, SelectionIndexError> {
        if tokens.is_empty() {
            return Ok(Self::All);
        }
        // infallible, the pattern is fixed
        let range = Regex::new(r"^(\d+)(?:-(\d+))?$").unwrap();
        if !tokens.iter().all(|t| range.is_match(t.as_ref())) {
            return Ok(Self::Symbols(tokens.iter()
                                          .map(|t| t.as_ref().to_string())
                                          .collect()));
        }
        let mut spans = Vec::with_capacity(tokens.len());
        for captures in tokens.iter().filter_map(|t| range.captures(t.as_ref())) {
            // digits only, so the parse can only fail on overflow
            let start = captures[1].parse::<usize>().unwrap_or(usize::MAX);
            let end = match captures.get(2) {
                Some(e) => e.as_str().parse::<usize>().unwrap_or(usize::MAX),
                None => start,
            };
            if end < start {
                return Err(SelectionIndexError::Reversed(start, end));
            }
            spans.push((start, end));
        }
        Ok(Self::Indices(spans))
    }

    /// Computes the membership mask over every atom in the structure.
    ///
    /// An index outside of [1, natoms] is an error. A symbol that isn't in
    /// the structure simply selects nothing.
    pub fn mask(&self, symbols: &[String]) -> Result<Vec<bool>, SelectionIndexError> {
        let natoms = symbols.len();
        match self {
            Self::All => Ok(vec![true; natoms]),
            Self::Indices(spans) => {
                let mut mask = vec![false; natoms];
                for (start, end) in spans.iter() {
                    if *start < 1 {
                        return Err(SelectionIndexError::OutOfRange(*start,
                                                                   natoms));
                    }
                    if *end > natoms {
                        let first_bad = (*start).max(natoms + 1);
                        return Err(SelectionIndexError::OutOfRange(first_bad,
                                                                   natoms));
                    }
                    for m in &mut mask[start - 1..*end] {
                        *m = true;
                    }
                }
                Ok(mask)
            }
            Self::Symbols(keep) => {
                let keep = keep.iter()
                               .map(|s| s.as_str())
                               .collect::<FxHashSet<&str>>();
                let mask = symbols.iter()
                                  .map(|s| keep.contains(s.as_str()))
                                  .collect::<Vec<bool>>();
                if !mask.iter().any(|m| *m) {
                    warn!("No atoms match the symbols {:?}, nothing is selected.",
                          self.tokens());
                }
                Ok(mask)
            }
        }
    }

    /// The selection as the user would type it.
    pub fn tokens(&self) -> Vec<String> {
        match self {
            Self::All => Vec::with_capacity(0),
            Self::Indices(spans) => spans.iter()
                                         .map(|(start, end)| {
                                             if start == end {
                                                 start.to_string()
                                             } else {
                                                 format!("{}-{}", start, end)
                                             }
                                         })
                                         .collect(),
            Self::Symbols(s) => s.clone(),
        }
    }
}
