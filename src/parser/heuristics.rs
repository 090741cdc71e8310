pub(super) fn is_uppercase_token(token: &str) -> bool {
    token.chars().any(char::is_uppercase) && !token.chars().any(char::is_lowercase)
}

pub(super) fn contains_digit(token: &str) -> bool {
    token.chars().any(|character| character.is_ascii_digit())
}

pub(super) fn split_trailing_uppercase_run<'a, 'b>(
    tokens: &'b [&'a str],
) -> (&'b [&'a str], &'b [&'a str]) {
    let run = tokens
        .iter()
        .rev()
        .take_while(|token| is_uppercase_token(token))
        .count();
    let name_len = if run > 0 { run } else { tokens.len().min(2) };

    tokens.split_at(tokens.len() - name_len)
}

pub(super) fn leading_name_run(tokens: &[&str]) -> usize {
    if tokens.is_empty() {
        return 0;
    }

    1 + tokens[1..]
        .iter()
        .take_while(|token| is_uppercase_token(token) || contains_digit(token))
        .count()
}

pub(super) fn join_tokens(tokens: &[&str]) -> String {
    tokens.join(" ")
}

pub(super) fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
