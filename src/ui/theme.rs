use crate::parser::token::TokenKind;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub operator: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub type_name: Color, // Cyan for type keywords
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(203, 166, 247),        // Mauve for keywords
    string: Color::Rgb(166, 227, 161),         // Green for strings and chars
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    operator: Color::Rgb(137, 220, 235),       // Sky for operators
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for bars
    type_name: Color::Rgb(148, 226, 213),      // Cyan/teal for type names
};

impl Theme {
    /// Foreground color used for a token of `kind`.
    pub fn token_color(&self, kind: TokenKind) -> Color {
        match kind {
            TokenKind::IntKeyword
            | TokenKind::UintKeyword
            | TokenKind::FloatKeyword
            | TokenKind::StringKeyword
            | TokenKind::CharKeyword => self.type_name,
            k if k.is_keyword() => self.keyword,
            k if k.is_numeric_literal() => self.number,
            k if k.is_literal() => self.string,
            TokenKind::Identifier => self.fg,
            TokenKind::OpenParenthesis
            | TokenKind::CloseParenthesis
            | TokenKind::OpenSquareBracket
            | TokenKind::CloseSquareBracket
            | TokenKind::OpenCurlyBracket
            | TokenKind::CloseCurlyBracket => self.primary,
            _ => self.operator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_colors_by_class() {
        let theme = &DEFAULT_THEME;
        assert_eq!(theme.token_color(TokenKind::IntLiteral), theme.number);
        assert_eq!(theme.token_color(TokenKind::CharLiteral), theme.string);
        assert_eq!(theme.token_color(TokenKind::StringLiteral), theme.string);
        assert_eq!(theme.token_color(TokenKind::UintKeyword), theme.type_name);
        assert_eq!(theme.token_color(TokenKind::Plus), theme.operator);
    }
}
