pub fn normalize_lines(text: &str) -> Vec<String> {
    let collapsed = collapse_tab_runs(text.trim());

    collapsed
        .split('\n')
        .map(|line| line.trim_end().to_string())
        .collect()
}

fn collapse_tab_runs(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut previous_was_tab = false;

    for character in text.chars() {
        if character == '\t' {
            if !previous_was_tab {
                output.push(' ');
            }
            previous_was_tab = true;
            continue;
        }

        previous_was_tab = false;
        output.push(character);
    }

    output
}
