/// Circuit lexer: tokenizes circuit text.
///
/// The format is line-oriented: one instruction per line, tokens separated
/// by whitespace. Comments begin with `//` or `#` and run to end of line.
///
/// Recognized constructs:
///   - Opcodes (case-insensitive): NOT, Z, HADAMARD, CNOT, SWAP, CCNOT,
///     CSWAP, MEASURE
///   - Integer literals: 0, 1, 2, …
///   - Anything else is kept as a raw word; the parser decides whether it
///     is a bad opcode or a bad qubit operand.

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Single-qubit gates
    Not, Z, Hadamard,
    // Multi-qubit gates
    Cnot, Swap, Ccnot, Cswap,
    // Measurement
    Measure,
    // Literals
    Int(usize),
    Word(String),
}

impl Token {
    /// Return a display string, used in error messages.
    pub fn display(&self) -> String {
        match self {
            Token::Not      => "not".into(),
            Token::Z        => "z".into(),
            Token::Hadamard => "hadamard".into(),
            Token::Cnot     => "cnot".into(),
            Token::Swap     => "swap".into(),
            Token::Ccnot    => "ccnot".into(),
            Token::Cswap    => "cswap".into(),
            Token::Measure  => "measure".into(),
            Token::Int(n)   => n.to_string(),
            Token::Word(w)  => w.clone(),
        }
    }
}

// ── Spanned token ─────────────────────────────────────────────────────────

/// A token annotated with its source line number (1-based).
#[derive(Debug, Clone)]
pub struct Spanned {
    pub token: Token,
    pub line: usize,
}

// ── Public API ────────────────────────────────────────────────────────────

/// Tokenize circuit text.
///
/// Returns one `Vec<Spanned>` per non-empty source line.
pub fn tokenize(source: &str) -> Vec<Vec<Spanned>> {
    let mut statements: Vec<Vec<Spanned>> = Vec::new();

    for (idx, line) in source.lines().enumerate() {
        let line_num = idx + 1;

        let content = strip_comment(line).trim();
        if content.is_empty() {
            continue;
        }

        let tokens: Vec<Spanned> = content
            .split_whitespace()
            .map(|word| Spanned { token: lex_word(word), line: line_num })
            .collect();
        statements.push(tokens);
    }

    statements
}

// ── Internal helpers ──────────────────────────────────────────────────────

/// Strip `//` and `#` comments from a source line.
fn strip_comment(line: &str) -> &str {
    let line = line.find("//").map_or(line, |p| &line[..p]);
    line.find('#').map_or(line, |p| &line[..p])
}

/// Convert a single whitespace-separated word into a Token.
fn lex_word(word: &str) -> Token {
    match word.to_ascii_lowercase().as_str() {
        "not"      => return Token::Not,
        "z"        => return Token::Z,
        "hadamard" => return Token::Hadamard,
        "cnot"     => return Token::Cnot,
        "swap"     => return Token::Swap,
        "ccnot"    => return Token::Ccnot,
        "cswap"    => return Token::Cswap,
        "measure"  => return Token::Measure,
        _ => {}
    }

    match word.parse::<usize>() {
        Ok(n) => Token::Int(n),
        Err(_) => Token::Word(word.to_string()),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
