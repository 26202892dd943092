use anyhow::bail;

/// Split a run configuration's parameter string into discrete arguments.
///
/// Arguments are separated by unquoted whitespace; text enclosed in single
/// quotes forms one literal argument with the quotes removed and any
/// whitespace inside preserved. Quoted and unquoted text without a
/// separator in between fuse into a single argument.
pub fn split_arguments(input: &str) -> anyhow::Result<Vec<String>> {
    let mut args = Vec::new();
    let mut current = String::new();
    // Distinguishes "no pending argument" from a pending empty one ('').
    let mut pending = false;
    let mut in_quotes = false;

    for ch in input.chars() {
        match ch {
            '\'' => {
                in_quotes = !in_quotes;
                pending = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if pending {
                    args.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }

    if in_quotes {
        bail!("unterminated single quote in parameters: {input:?}");
    }
    if pending {
        args.push(current);
    }

    Ok(args)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::split_arguments;

    #[test]
    fn splits_on_unquoted_whitespace() {
        let args = split_arguments("-v --config conf.yaml").unwrap();
        assert_eq!(args, vec!["-v", "--config", "conf.yaml"]);
    }

    #[test]
    fn quoted_text_is_one_argument() {
        let args = split_arguments("-flag 'a b' c").unwrap();
        assert_eq!(args, vec!["-flag", "a b", "c"]);
    }

    #[test]
    fn empty_input_yields_no_arguments() {
        assert_eq!(split_arguments("").unwrap(), Vec::<String>::new());
        assert_eq!(split_arguments("   ").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn runs_of_whitespace_separate_once() {
        let args = split_arguments("a  \t b").unwrap();
        assert_eq!(args, vec!["a", "b"]);
    }

    #[test]
    fn quoted_text_fuses_with_adjacent_text() {
        let args = split_arguments("--msg='hello world' tail").unwrap();
        assert_eq!(args, vec!["--msg=hello world", "tail"]);
    }

    #[test]
    fn empty_quotes_yield_an_empty_argument() {
        let args = split_arguments("a '' b").unwrap();
        assert_eq!(args, vec!["a", "", "b"]);
    }

    #[test]
    fn double_quotes_are_ordinary_characters() {
        let args = split_arguments(r#"say "hello world""#).unwrap();
        assert_eq!(args, vec!["say", "\"hello", "world\""]);
    }

    #[test]
    fn unterminated_quote_is_an_error() {
        assert!(split_arguments("-flag 'a").is_err());
    }
}
