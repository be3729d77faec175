//! AST node types for a POSIX/bash-like shell language.
//!
//! Nodes are plain owned values, built bottom-up by a parser (or by the
//! [`Ast`] factory in tests and tooling) and never mutated afterwards.
//! Turning a tree back into source text lives in [`super::render`].

use crate::token::Token;

// =============================================================================
// BASE TYPES
// =============================================================================

/// Position of a node's first token in the original source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    /// The designated "no source location" value, reported by nodes derived
    /// from empty child sequences.
    pub const UNKNOWN: Position = Position { line: 0, column: 0, offset: 0 };

    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self { line, column, offset }
    }

    pub fn is_known(&self) -> bool {
        *self != Position::UNKNOWN
    }
}

// =============================================================================
// FILE & STATEMENTS
// =============================================================================

/// Root node: a complete shell source file.
#[derive(Debug, Clone, PartialEq)]
pub struct File {
    /// Opaque source identifier (usually the file name). Carried for
    /// diagnostics only; rendering never looks at it.
    pub name: String,
    pub stmts: Vec<Stmt>,
}

/// A statement: an inner command plus its execution modifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    /// The wrapper's own position, independent of the inner node's.
    pub position: Position,
    /// Negate exit status with !
    pub negated: bool,
    /// Variable assignments: VAR=value
    pub assigns: Vec<Assign>,
    /// I/O redirections
    pub redirs: Vec<Redirect>,
    /// Run in background?
    pub background: bool,
}

impl Stmt {
    /// Whether any redirection on this statement is a here-document, which
    /// obliges the surrounding statement list to follow it with a real
    /// newline instead of `"; "`.
    pub fn has_heredoc(&self) -> bool {
        self.redirs.iter().any(|r| r.op.is_heredoc())
    }
}

/// Union of the command forms a statement can wrap.
#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    /// No inner command: modifiers only, e.g. a bare assignment or a bare
    /// redirection.
    None,
    Command(Command),
    Subshell(Subshell),
    Block(Block),
    If(IfStmt),
    While(WhileStmt),
    Until(UntilStmt),
    For(ForStmt),
    Case(CaseStmt),
    FuncDecl(Box<FuncDecl>),
    Binary(Box<BinaryExpr>),
}

// =============================================================================
// ASSIGNMENTS & REDIRECTIONS
// =============================================================================

/// Variable assignment: name=value
#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    pub name: Lit,
    pub value: Word,
}

/// I/O redirection: an operator, an optional file descriptor in front of
/// it, and the target word after it.
#[derive(Debug, Clone, PartialEq)]
pub struct Redirect {
    pub op_pos: Position,
    pub op: Token,
    /// Explicit descriptor, as in 2>&1. Absent for the common case.
    pub n: Option<Lit>,
    pub word: Word,
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Simple command: a sequence of words.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub args: Vec<Word>,
}

/// Subshell: ( ... )
#[derive(Debug, Clone, PartialEq)]
pub struct Subshell {
    pub lparen: Position,
    pub rparen: Position,
    pub stmts: Vec<Stmt>,
}

/// Command group: { ...; }
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub lbrace: Position,
    pub rbrace: Position,
    pub stmts: Vec<Stmt>,
}

/// if statement, with any number of elif branches and an optional else.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub if_pos: Position,
    pub fi_pos: Position,
    pub conds: Vec<Stmt>,
    pub then_stmts: Vec<Stmt>,
    pub elifs: Vec<Elif>,
    pub else_stmts: Vec<Stmt>,
}

/// One elif branch of an if statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Elif {
    pub elif_pos: Position,
    pub conds: Vec<Stmt>,
    pub then_stmts: Vec<Stmt>,
}

/// while loop
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub while_pos: Position,
    pub done_pos: Position,
    pub conds: Vec<Stmt>,
    pub do_stmts: Vec<Stmt>,
}

/// until loop
#[derive(Debug, Clone, PartialEq)]
pub struct UntilStmt {
    pub until_pos: Position,
    pub done_pos: Position,
    pub conds: Vec<Stmt>,
    pub do_stmts: Vec<Stmt>,
}

/// for loop: for name in words; do ...; done
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub for_pos: Position,
    pub done_pos: Position,
    pub name: Lit,
    /// Words to iterate over; empty means the implicit positional
    /// parameters, rendered without an `in` clause.
    pub word_list: Vec<Word>,
    pub do_stmts: Vec<Stmt>,
}

/// case statement
#[derive(Debug, Clone, PartialEq)]
pub struct CaseStmt {
    pub case_pos: Position,
    pub esac_pos: Position,
    pub word: Word,
    pub list: Vec<PatternList>,
}

/// One arm of a case statement: patterns and the statements they run.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternList {
    pub patterns: Vec<Word>,
    pub stmts: Vec<Stmt>,
}

/// Two statements joined by an operator: pipelines and and-or lists.
/// Builders chain left-associatively, so position is the left operand's.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub op_pos: Position,
    pub op: Token,
    pub x: Stmt,
    pub y: Stmt,
}

/// Function declaration, in either POSIX (`name() body`) or bash
/// (`function name() body`) style.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub position: Position,
    pub bash_style: bool,
    pub name: Lit,
    pub body: Stmt,
}

// =============================================================================
// WORDS
// =============================================================================

/// A Word is a sequence of fragments that form a single shell token,
/// covering adjacent quoting and expansions like foo'bar'"$baz".
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub parts: Vec<WordPart>,
}

/// Fragments that can make up a word.
#[derive(Debug, Clone, PartialEq)]
pub enum WordPart {
    Lit(Lit),
    SglQuoted(SglQuoted),
    DblQuoted(DblQuoted),
    ParamExp(ParamExp),
    ArithmExp(ArithmExp),
    CmdSubst(CmdSubst),
}

/// Literal text, emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lit {
    pub value_pos: Position,
    pub value: String,
}

/// Single-quoted string: 'literal'. The value is stored raw; the builder
/// guarantees it contains no single quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SglQuoted {
    pub quote_pos: Position,
    pub value: String,
}

/// Double-quoted sequence: "with $expansions"
#[derive(Debug, Clone, PartialEq)]
pub struct DblQuoted {
    pub quote_pos: Position,
    pub parts: Vec<WordPart>,
}

/// Parameter expansion: $name or ${text}
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamExp {
    pub exp_pos: Position,
    pub short: bool,
    pub text: String,
}

/// Arithmetic expansion: $((words))
#[derive(Debug, Clone, PartialEq)]
pub struct ArithmExp {
    pub exp_pos: Position,
    pub rparen: Position,
    pub words: Vec<Word>,
}

/// Command substitution: $(stmts) or, with `backquotes`, `stmts`
#[derive(Debug, Clone, PartialEq)]
pub struct CmdSubst {
    pub left: Position,
    pub right: Position,
    pub backquotes: bool,
    pub stmts: Vec<Stmt>,
}

// =============================================================================
// FACTORY FUNCTIONS (AST builders)
// =============================================================================

/// AST factory for building trees programmatically. Every node is created
/// at [`Position::UNKNOWN`]; callers that care about positions fill the
/// fields in directly.
pub struct Ast;

impl Ast {
    pub fn file(name: impl Into<String>, stmts: Vec<Stmt>) -> File {
        File { name: name.into(), stmts }
    }

    pub fn stmt(kind: StmtKind) -> Stmt {
        Stmt {
            kind,
            position: Position::UNKNOWN,
            negated: false,
            assigns: Vec::new(),
            redirs: Vec::new(),
            background: false,
        }
    }

    pub fn command(args: Vec<Word>) -> StmtKind {
        StmtKind::Command(Command { args })
    }

    pub fn subshell(stmts: Vec<Stmt>) -> StmtKind {
        StmtKind::Subshell(Subshell {
            lparen: Position::UNKNOWN,
            rparen: Position::UNKNOWN,
            stmts,
        })
    }

    pub fn block(stmts: Vec<Stmt>) -> StmtKind {
        StmtKind::Block(Block {
            lbrace: Position::UNKNOWN,
            rbrace: Position::UNKNOWN,
            stmts,
        })
    }

    pub fn binary(op: Token, x: Stmt, y: Stmt) -> StmtKind {
        StmtKind::Binary(Box::new(BinaryExpr {
            op_pos: Position::UNKNOWN,
            op,
            x,
            y,
        }))
    }

    pub fn func_decl(name: impl Into<String>, bash_style: bool, body: Stmt) -> StmtKind {
        StmtKind::FuncDecl(Box::new(FuncDecl {
            position: Position::UNKNOWN,
            bash_style,
            name: Self::lit(name),
            body,
        }))
    }

    pub fn word(parts: Vec<WordPart>) -> Word {
        Word { parts }
    }

    /// A word made of a single literal fragment, the most common shape.
    pub fn lit_word(value: impl Into<String>) -> Word {
        Word {
            parts: vec![WordPart::Lit(Self::lit(value))],
        }
    }

    pub fn lit(value: impl Into<String>) -> Lit {
        Lit {
            value_pos: Position::UNKNOWN,
            value: value.into(),
        }
    }

    pub fn single_quoted(value: impl Into<String>) -> WordPart {
        WordPart::SglQuoted(SglQuoted {
            quote_pos: Position::UNKNOWN,
            value: value.into(),
        })
    }

    pub fn double_quoted(parts: Vec<WordPart>) -> WordPart {
        WordPart::DblQuoted(DblQuoted {
            quote_pos: Position::UNKNOWN,
            parts,
        })
    }

    pub fn param_exp(short: bool, text: impl Into<String>) -> WordPart {
        WordPart::ParamExp(ParamExp {
            exp_pos: Position::UNKNOWN,
            short,
            text: text.into(),
        })
    }

    pub fn arithm_exp(words: Vec<Word>) -> WordPart {
        WordPart::ArithmExp(ArithmExp {
            exp_pos: Position::UNKNOWN,
            rparen: Position::UNKNOWN,
            words,
        })
    }

    pub fn cmd_subst(backquotes: bool, stmts: Vec<Stmt>) -> WordPart {
        WordPart::CmdSubst(CmdSubst {
            left: Position::UNKNOWN,
            right: Position::UNKNOWN,
            backquotes,
            stmts,
        })
    }

    pub fn assign(name: impl Into<String>, value: Word) -> Assign {
        Assign {
            name: Self::lit(name),
            value,
        }
    }

    pub fn redirect(op: Token, word: Word) -> Redirect {
        Redirect {
            op_pos: Position::UNKNOWN,
            op,
            n: None,
            word,
        }
    }

    pub fn fd_redirect(n: impl Into<String>, op: Token, word: Word) -> Redirect {
        Redirect {
            op_pos: Position::UNKNOWN,
            op,
            n: Some(Self::lit(n)),
            word,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_position() {
        assert!(!Position::UNKNOWN.is_known());
        assert!(!Position::default().is_known());
        assert!(Position::new(1, 1, 0).is_known());
    }

    #[test]
    fn test_stmt_has_heredoc() {
        let mut stmt = Ast::stmt(Ast::command(vec![Ast::lit_word("cat")]));
        assert!(!stmt.has_heredoc());
        stmt.redirs.push(Ast::redirect(Token::DLess, Ast::lit_word("EOF")));
        assert!(stmt.has_heredoc());

        let mut other = Ast::stmt(Ast::command(vec![Ast::lit_word("cat")]));
        other.redirs.push(Ast::redirect(Token::Great, Ast::lit_word("out")));
        assert!(!other.has_heredoc());
    }

    #[test]
    fn test_factory_defaults() {
        let stmt = Ast::stmt(StmtKind::None);
        assert_eq!(stmt.position, Position::UNKNOWN);
        assert!(!stmt.negated);
        assert!(!stmt.background);
        assert!(stmt.assigns.is_empty());
        assert!(stmt.redirs.is_empty());

        let redir = Ast::redirect(Token::Great, Ast::lit_word("out"));
        assert_eq!(redir.n, None);
    }
}
