//! Keyword and operator vocabulary
//!
//! The single table mapping symbolic tokens to their literal source text.
//! Rendering and any lexer/parser collaborator agree through this table.

use std::fmt;

/// Reserved words and operators that appear on AST nodes or in rendered
/// output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    // Control operators
    Bang,   // !
    Amp,    // &
    AndAnd, // &&
    OrOr,   // ||
    Pipe,   // |

    // Redirections
    Less,      // <
    Great,     // >
    DLess,     // <<
    DGreat,    // >>
    LessAnd,   // <&
    GreatAnd,  // >&
    LessGreat, // <>
    DLessDash, // <<-
    Clobber,   // >|
    TLess,     // <<<
    AndGreat,  // &>
    AndDGreat, // &>>

    // Reserved words
    If,
    Then,
    Elif,
    Else,
    Fi,
    While,
    Until,
    Do,
    Done,
    For,
    In,
    Case,
    Esac,
    Function,
}

impl Token {
    /// Here-document operators force a real newline after the statement
    /// that carries them; everything else tolerates an inline separator.
    pub fn is_heredoc(self) -> bool {
        matches!(self, Token::DLess | Token::DLessDash)
    }

    /// Check if a token is a redirection operator.
    pub fn is_redirection(self) -> bool {
        matches!(
            self,
            Token::Less
                | Token::Great
                | Token::DLess
                | Token::DGreat
                | Token::LessAnd
                | Token::GreatAnd
                | Token::LessGreat
                | Token::DLessDash
                | Token::Clobber
                | Token::TLess
                | Token::AndGreat
                | Token::AndDGreat
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Bang => write!(f, "!"),
            Token::Amp => write!(f, "&"),
            Token::AndAnd => write!(f, "&&"),
            Token::OrOr => write!(f, "||"),
            Token::Pipe => write!(f, "|"),
            Token::Less => write!(f, "<"),
            Token::Great => write!(f, ">"),
            Token::DLess => write!(f, "<<"),
            Token::DGreat => write!(f, ">>"),
            Token::LessAnd => write!(f, "<&"),
            Token::GreatAnd => write!(f, ">&"),
            Token::LessGreat => write!(f, "<>"),
            Token::DLessDash => write!(f, "<<-"),
            Token::Clobber => write!(f, ">|"),
            Token::TLess => write!(f, "<<<"),
            Token::AndGreat => write!(f, "&>"),
            Token::AndDGreat => write!(f, "&>>"),
            Token::If => write!(f, "if"),
            Token::Then => write!(f, "then"),
            Token::Elif => write!(f, "elif"),
            Token::Else => write!(f, "else"),
            Token::Fi => write!(f, "fi"),
            Token::While => write!(f, "while"),
            Token::Until => write!(f, "until"),
            Token::Do => write!(f, "do"),
            Token::Done => write!(f, "done"),
            Token::For => write!(f, "for"),
            Token::In => write!(f, "in"),
            Token::Case => write!(f, "case"),
            Token::Esac => write!(f, "esac"),
            Token::Function => write!(f, "function"),
        }
    }
}
