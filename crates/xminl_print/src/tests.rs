use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn path_only_uses_default_sizes() {
    let options = parse_args(&args(&["test.xml"]));
    assert!(matches!(
        options,
        Ok(Options { ref path, strings: DATA_SIZE, tokens: TOKEN_SIZE }) if path == "test.xml"
    ));
}

#[test]
fn sizes_can_be_overridden() {
    let options = parse_args(&args(&["--tokens", "16", "doc.xml", "--strings", "128"]));
    assert!(matches!(
        options,
        Ok(Options { strings: 128, tokens: 16, .. })
    ));
}

#[test]
fn missing_path_is_an_error() {
    assert_eq!(
        parse_args(&args(&["--strings", "8"])).err().as_deref(),
        Some("missing file path")
    );
}

#[test]
fn bad_size_is_an_error() {
    assert_eq!(
        parse_args(&args(&["a.xml", "--tokens", "lots"])).err().as_deref(),
        Some("--tokens: 'lots' is not a size")
    );
}

#[test]
fn flag_without_value_is_an_error() {
    assert_eq!(
        parse_args(&args(&["a.xml", "--strings"])).err().as_deref(),
        Some("--strings needs a value")
    );
}

#[test]
fn second_path_is_rejected() {
    assert_eq!(
        parse_args(&args(&["a.xml", "b.xml"])).err().as_deref(),
        Some("unexpected argument 'b.xml'")
    );
}
