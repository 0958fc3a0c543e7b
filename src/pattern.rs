//! Splitting a pattern string into field and literal tokens.
//!
//! The dialect is the familiar one: a run of the same ASCII letter is a
//! field, with the length of the run selecting the style (`M`, `MM`,
//! `MMM`, and so on); text between single quotes is literal; a doubled
//! quote is a literal quote, inside or outside quoted text; and anything
//! else passes straight through.

/// One token of a pattern.
///
/// Literals borrow straight out of the pattern string. A quoted stretch
/// containing an escaped quote comes out as several `Literal` tokens in a
/// row, which costs nothing, as adjacent literals get merged downstream.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Token<'a> {

    /// Text to be emitted verbatim.
    Literal(&'a str),

    /// A run of `width` copies of the letter.
    Field { letter: char, width: usize },
}

/// Splits a pattern into its tokens.
pub fn tokenize(pattern: &str) -> Vec<Token> {
    let bytes = pattern.as_bytes();
    let mut tokens = Vec::new();

    let mut index = 0;
    let mut literal_start = 0;

    while index < bytes.len() {
        let byte = bytes[index];

        if byte == b'\'' {
            if literal_start < index {
                tokens.push(Token::Literal(&pattern[literal_start .. index]));
            }

            if bytes.get(index + 1) == Some(&b'\'') {
                // A doubled quote outside quoted text is just a quote.
                tokens.push(Token::Literal("'"));
                index += 2;
            }
            else {
                index = quoted_section(pattern, index + 1, &mut tokens);
            }

            literal_start = index;
        }
        else if byte.is_ascii_alphabetic() {
            if literal_start < index {
                tokens.push(Token::Literal(&pattern[literal_start .. index]));
            }

            let mut width = 1;
            while bytes.get(index + width) == Some(&byte) {
                width += 1;
            }

            // A few letters are reserved but render nothing, so they
            // don’t even make it out of the tokenizer.
            match byte {
                b'l' | b'j' | b'J' | b'C' => {},
                _ => tokens.push(Token::Field { letter: byte as char, width }),
            }

            index += width;
            literal_start = index;
        }
        else {
            // Non-ASCII bytes can never start a field or a quote, so
            // they just extend the current literal.
            index += 1;
        }
    }

    if literal_start < bytes.len() {
        tokens.push(Token::Literal(&pattern[literal_start ..]));
    }

    tokens
}

/// Scans a quoted section, pushing its text as literal tokens, and
/// returns the index just past the closing quote. An unterminated quote
/// swallows the rest of the pattern as literal text rather than being an
/// error, which is friendlier while a pattern is being typed in.
fn quoted_section<'a>(pattern: &'a str, from: usize, tokens: &mut Vec<Token<'a>>) -> usize {
    let bytes = pattern.as_bytes();
    let mut start = from;
    let mut index = from;

    loop {
        match bytes.get(index) {
            None => {
                if start < bytes.len() {
                    tokens.push(Token::Literal(&pattern[start ..]));
                }
                return bytes.len();
            }
            Some(&b'\'') => {
                if start < index {
                    tokens.push(Token::Literal(&pattern[start .. index]));
                }

                if bytes.get(index + 1) == Some(&b'\'') {
                    tokens.push(Token::Literal("'"));
                    index += 2;
                    start = index;
                }
                else {
                    return index + 1;
                }
            }
            Some(_) => {
                index += 1;
            }
        }
    }
}
