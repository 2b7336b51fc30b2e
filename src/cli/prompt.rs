use std::io::{self, BufRead, Write};

/// Asks a yes/no question on the terminal. Anything but "y"/"yes" is a no.
pub fn confirm(question: &str) -> io::Result<bool> {
    confirm_with(io::stdin().lock(), io::stderr(), question)
}

pub fn confirm_with(
    mut input: impl BufRead,
    mut output: impl Write,
    question: &str,
) -> io::Result<bool> {
    write!(output, "{question} [y/N] ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_answers() {
        let cases = vec![
            ("y\n", true),
            ("YES\n", true),
            (" yes \n", true),
            ("n\n", false),
            ("\n", false),
            ("", false),
            ("maybe\n", false),
        ];

        for (answer, expected) in cases {
            let mut output = vec![];
            let confirmed = confirm_with(answer.as_bytes(), &mut output, "Clear?").unwrap();

            assert_eq!(confirmed, expected, "{answer:?}");
            assert_eq!(String::from_utf8(output).unwrap(), "Clear? [y/N] ");
        }
    }
}
