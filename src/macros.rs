//! Utility macros for the checker.

/// Builds a `Token` from its kind, lexeme and line position.
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Identifier, String::from("a"), Position(1, file));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            position: $position,
        }
    };
}
