const OPEN_DELIMITER: &str = "{{";
const CLOSE_DELIMITER: &str = "}}";


pub(crate) struct Reader<'a> {
    input: &'a str,
    pos: usize
}

impl<'a> Reader<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Reader {
            input,
            pos: 0
        }
    }

    pub(crate) fn pop_front(&mut self) -> Option<Token<'a>> {
        if self.pos == self.input.len() {
            None
        } else {
            let tail = &self.input[self.pos..];
            let token = match tail.span_tag(OPEN_DELIMITER, CLOSE_DELIMITER) {
                Some((key, after_tag)) => {
                    self.pos += after_tag;
                    Token::Placeholder(key)
                },
                None => self.read_text(tail)
            };
            Some(token)
        }
    }

    fn read_text(&mut self, tail: &'a str) -> Token<'a> {
        let after_text = tail.span_text(OPEN_DELIMITER);
        self.pos += after_text;
        Token::Text(&tail[..after_text])
    }
}


#[derive(PartialEq, Debug)]
pub(crate) enum Token<'a> {
    Text(&'a str),
    Placeholder(&'a str)
}


trait ReaderStringOps {
    fn span_text(&self, open_delimiter: &str) -> usize;
    fn span_tag(&self, open_delimiter: &str, close_delimiter: &str) -> Option<(&str, usize)>;
}

impl ReaderStringOps for str {
    // return the position after the current text
    // the first char is always text: either plain text or an open delimiter
    // that did not start a well-formed tag
    fn span_text(&self, open_delimiter: &str) -> usize {
        let first = self.chars().next().map_or(0, char::len_utf8);
        match self[first..].find(open_delimiter) {
            Some(p) => first + p,
            None => self.len()
        }
    }

    // return the key of the tag starting at beginning of the string and the
    // position after the tag
    // return None if the string does not start with a well-formed tag
    fn span_tag(&self, open_delimiter: &str, close_delimiter: &str) -> Option<(&str, usize)> {
        let rest = self.strip_prefix(open_delimiter)?;
        let key_len = rest.bytes().take_while(|b| is_key_byte(*b)).count();
        if key_len > 0 && rest[key_len..].starts_with(close_delimiter) {
            Some((&rest[..key_len], open_delimiter.len() + key_len + close_delimiter.len()))
        } else {
            None
        }
    }
}

fn is_key_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
