//! Delimiter configuration shared by the tokenizer and the serializer.
//!
//! A [`Delimiters`] value names the strings that structure an expression
//! without being part of any formula: the structural brackets used for
//! grouping, the argument delimiter used by function notation, and the
//! relational bracket pairs that enclose relation names in modal operators
//! such as `⟨G⟩`. All of them can be overridden per call; none of them are
//! global state.
//!
//! # Examples
//!
//! ```rust
//! use kripke_core::Delimiters;
//!
//! let delimiters = Delimiters::default();
//!
//! assert_eq!(delimiters.opening_bracket, "(");
//! assert_eq!(delimiters.closing_bracket, ")");
//! assert_eq!(delimiters.arg_delimiter, ",");
//! assert_eq!(delimiters.relation_closer("⟨"), Some("⟩"));
//! ```

/// The set of reserved delimiter strings for a parse or serialize call.
///
/// Operator symbols are checked against these strings when a registry is
/// validated: a symbol may not equal any delimiter, and may not contain the
/// structural brackets or the argument delimiter. Relational bracket strings
/// *may* appear inside a symbol, since composite relational operators like
/// `⟨G⟩` are built from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    /// Structural opening bracket, `(` by default.
    pub opening_bracket: String,

    /// Structural closing bracket, `)` by default.
    pub closing_bracket: String,

    /// Argument separator for function notation, `,` by default.
    pub arg_delimiter: String,

    /// Relational bracket pairs, `⟨ … ⟩` and `[ … ]` by default. Additional
    /// pairs may be appended for custom relational syntaxes.
    pub relation_brackets: Vec<(String, String)>,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            opening_bracket: String::from("("),
            closing_bracket: String::from(")"),
            arg_delimiter: String::from(","),
            relation_brackets: vec![
                (String::from("⟨"), String::from("⟩")),
                (String::from("["), String::from("]")),
            ],
        }
    }
}

impl Delimiters {
    /// Return the closing string paired with a relational opener, if the
    /// opener is configured.
    pub fn relation_closer(&self, opener: &str) -> Option<&str> {
        self.relation_brackets
            .iter()
            .find(|(open, _)| open == opener)
            .map(|(_, close)| close.as_str())
    }

    /// All reserved delimiter strings, in no particular order.
    pub fn reserved(&self) -> impl Iterator<Item = &str> {
        let pairs = self
            .relation_brackets
            .iter()
            .flat_map(|(open, close)| [open.as_str(), close.as_str()]);

        [
            self.opening_bracket.as_str(),
            self.closing_bracket.as_str(),
            self.arg_delimiter.as_str(),
        ]
        .into_iter()
        .chain(pairs)
    }
}
