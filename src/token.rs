/// Keywords the dispatcher and the block scanner care about.
///
/// Statement keywords introduce a construct when they prefix a statement;
/// delimiter keywords only ever appear inside one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    // Statement keywords, in classification order
    Print,
    Def,
    If,
    Elif,
    Else,
    Try,
    While,

    // Delimiters
    Then,
    Do,
    Catch,
    End,
}

impl Keyword {
    /// Order in which statement prefixes are tried. The first match wins,
    /// so `elif` can never be reached through `else` and vice versa.
    pub const STATEMENTS: [Keyword; 7] = [
        Keyword::Print,
        Keyword::Def,
        Keyword::If,
        Keyword::Elif,
        Keyword::Else,
        Keyword::Try,
        Keyword::While,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Print => "print",
            Keyword::Def => "def",
            Keyword::If => "if",
            Keyword::Elif => "elif",
            Keyword::Else => "else",
            Keyword::Try => "try",
            Keyword::While => "while",
            Keyword::Then => "then",
            Keyword::Do => "do",
            Keyword::Catch => "catch",
            Keyword::End => "end",
        }
    }

    pub fn from_word(word: &str) -> Option<Keyword> {
        match word {
            "print" => Some(Keyword::Print),
            "def" => Some(Keyword::Def),
            "if" => Some(Keyword::If),
            "elif" => Some(Keyword::Elif),
            "else" => Some(Keyword::Else),
            "try" => Some(Keyword::Try),
            "while" => Some(Keyword::While),
            "then" => Some(Keyword::Then),
            "do" => Some(Keyword::Do),
            "catch" => Some(Keyword::Catch),
            "end" => Some(Keyword::End),
            _ => None,
        }
    }

    /// Keywords that need a matching `end`.
    pub fn opens_block(self) -> bool {
        matches!(self, Keyword::If | Keyword::While | Keyword::Try | Keyword::Def)
    }

    /// Keywords that begin a new statement when found inside a block.
    pub fn starts_statement(self) -> bool {
        Self::STATEMENTS.contains(&self)
    }

    /// Statement keywords whose construct runs up to a matching `end`.
    pub fn needs_end(self) -> bool {
        matches!(
            self,
            Keyword::Def | Keyword::If | Keyword::Elif | Keyword::Else | Keyword::Try | Keyword::While
        )
    }

    /// Classify a statement by literal prefix.
    pub fn classify(statement: &str) -> Option<Keyword> {
        Self::STATEMENTS
            .into_iter()
            .find(|keyword| statement.starts_with(keyword.as_str()))
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
