//! Extract generated questions from a reply to the question-generation prompt.

/// Pull the question strings out of a `questions = [ ... ]` reply.
///
/// The list is tried as JSON first. Python-style lists (single quotes, trailing
/// commas) fall back to scanning string literals one by one. Returns an empty
/// vector when no list can be found.
pub fn parse_questions(reply: &str) -> Vec<String> {
    let Some(list) = extract_list(reply) else {
        return Vec::new();
    };

    let questions = match serde_json::from_str::<Vec<String>>(list) {
        Ok(questions) => questions,
        Err(_) => scan_string_literals(list),
    };

    questions.into_iter().map(|q| q.trim().to_string()).filter(|q| !q.is_empty()).collect()
}

/// Slice from the list's opening bracket to the last closing bracket.
///
/// A bracket after the word `questions` is preferred; otherwise the first bracket in
/// the reply opens the list.
fn extract_list(reply: &str) -> Option<&str> {
    let named = reply.find("questions").and_then(|at| reply[at..].find('[').map(|i| at + i));
    let start = named.or_else(|| reply.find('['))?;
    let end = reply.rfind(']')?;
    if end <= start {
        return None;
    }
    Some(&reply[start..=end])
}

/// Collect every single- or double-quoted literal, honouring backslash escapes.
fn scan_string_literals(list: &str) -> Vec<String> {
    let mut literals = Vec::new();
    let mut chars = list.chars();

    while let Some(ch) = chars.next() {
        if ch != '"' && ch != '\'' {
            continue;
        }
        let quote = ch;
        let mut literal = String::new();
        let mut closed = false;
        while let Some(c) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some('n') => literal.push('\n'),
                    Some('t') => literal.push('\t'),
                    Some(other) => literal.push(other),
                    None => break,
                },
                c if c == quote => {
                    closed = true;
                    break;
                }
                c => literal.push(c),
            }
        }
        if closed {
            literals.push(literal);
        }
    }

    literals
}
