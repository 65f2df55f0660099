// Translator options shared by the parser and the IR emitter

/// How string literal payloads are stored in tokens and AST nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuotePolicy {
    /// Drop the surrounding quotes and decode escape sequences.
    #[default]
    Strip,
    /// Keep the raw matched text, delimiters and backslashes included.
    Keep,
}

/// What a `define` block does with the statements nested inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefineBody {
    /// Nested statements become children of the Define node.
    #[default]
    Attach,
    /// Nested statements are parsed and then dropped.
    Discard,
}

/// Options controlling the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub string_quotes: QuotePolicy,
    pub define_body: DefineBody,
    /// Name of the external print primitive declared in the IR.
    pub print_symbol: String,
    /// Name of the synthetic entry function.
    pub entry_symbol: String,
}

impl Options {
    pub fn new() -> Self {
        Options::default()
    }

    pub fn with_quotes(mut self, policy: QuotePolicy) -> Self {
        self.string_quotes = policy;
        self
    }

    pub fn with_define_body(mut self, body: DefineBody) -> Self {
        self.define_body = body;
        self
    }

    pub fn with_print_symbol(mut self, name: impl Into<String>) -> Self {
        self.print_symbol = name.into();
        self
    }

    pub fn with_entry_symbol(mut self, name: impl Into<String>) -> Self {
        self.entry_symbol = name.into();
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            string_quotes: QuotePolicy::default(),
            define_body: DefineBody::default(),
            print_symbol: "print_string".to_string(),
            entry_symbol: "main".to_string(),
        }
    }
}
